use std::io::Write;

use eclipse::config::{EclipseSettings, SettingsError};
use eclipse::geometry::{GammaRange, Hms};
use eclipse::rendering::Color;

#[test]
fn test_preset_selection() {
    let settings = EclipseSettings::from_toml_str(
        r#"
[eclipse]
preset = "2027-08-02"
"#,
    )
    .unwrap();
    assert_eq!(settings.name, "2027-08-02");
    assert_eq!(settings.canvas_size, 500.0);
    assert_eq!(settings.inputs.gamma, 0.1421);
}

#[test]
fn test_unknown_preset() {
    let err = EclipseSettings::from_toml_str("[eclipse]\npreset = \"1066-01-01\"\n").unwrap_err();
    assert!(matches!(err, SettingsError::UnknownPreset(name) if name == "1066-01-01"));
}

#[test]
fn test_field_overrides() {
    let settings = EclipseSettings::from_toml_str(
        r#"
[eclipse]
preset = "2014-04-29"
sun = [0.0, 16.0, 0.0]
gamma = 1.2
canvas_size = 640.0
"#,
    )
    .unwrap();
    assert_eq!(settings.name, "2014-04-29 (custom)");
    assert_eq!(settings.inputs.sun, Hms::new(0.0, 16.0, 0.0));
    assert_eq!(settings.inputs.moon, Hms::new(0.0, 15.0, 38.4));
    assert_eq!(settings.inputs.gamma, 1.2);
    assert_eq!(settings.canvas_size, 640.0);
    assert_eq!(settings.inputs.canvas_scale, 640.0);

    let geometry = settings.geometry();
    assert!((geometry.sun_diameter - 2.0 * (16.0 / 60.0) * 640.0).abs() < 1e-9);
}

#[test]
fn test_gamma_range_and_sweep() {
    let settings = EclipseSettings::from_toml_str(
        r#"
[gamma_range]
min = 0.9
max = 1.5

[sweep]
slow_zone = 10.0
normal_step = 2.0
"#,
    )
    .unwrap();
    assert_eq!(settings.inputs.gamma_range, GammaRange { min: 0.9, max: 1.5 });
    assert_eq!(settings.timing.slow_zone, 10.0);
    assert_eq!(settings.timing.slow_step, 0.1);
    assert_eq!(settings.timing.normal_step, 2.0);
}

#[test]
fn test_degenerate_gamma_range_rejected() {
    let err = EclipseSettings::from_toml_str("[gamma_range]\nmin = 1.5\nmax = 1.5\n").unwrap_err();
    assert!(matches!(err, SettingsError::DegenerateGammaRange { .. }));
}

#[test]
fn test_non_positive_values_rejected() {
    let err = EclipseSettings::from_toml_str("[eclipse]\ncanvas_size = 0.0\n").unwrap_err();
    assert!(matches!(
        err,
        SettingsError::NotPositive {
            field: "eclipse.canvas_size",
            ..
        }
    ));

    let err = EclipseSettings::from_toml_str("[sweep]\nslow_step = -1.0\n").unwrap_err();
    assert!(matches!(err, SettingsError::NotPositive { .. }));
}

#[test]
fn test_colors() {
    let settings = EclipseSettings::from_toml_str(
        r##"
[colors]
sky = "#87CEEB"
moon = "#00000080"
stroke = "#FF0000"
"##,
    )
    .unwrap();
    assert_eq!(settings.visual.sky_color, Color::rgb(0x87, 0xCE, 0xEB));
    assert_eq!(settings.visual.moon_color, Color::rgba(0, 0, 0, 0x80));
    assert_eq!(
        settings.visual.outline.map(|s| s.color),
        Some(Color::rgb(255, 0, 0))
    );
    // untouched colours keep their defaults
    assert_eq!(settings.visual.sun_color, Color::rgb(255, 170, 0));
}

#[test]
fn test_invalid_color() {
    let err = EclipseSettings::from_toml_str("[colors]\ncorona = \"orange\"\n").unwrap_err();
    assert!(matches!(err, SettingsError::InvalidColor { field: "corona", .. }));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[eclipse]\npreset = \"2014-04-29\"").unwrap();

    let settings = EclipseSettings::load(file.path()).unwrap();
    assert_eq!(settings.name, "2014-04-29");
    assert_eq!(settings.scene().canvas_size, 500.0);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = EclipseSettings::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
}

//! Settings file
//!
//! An optional TOML file picks a preset and overrides any of its constants,
//! the gamma calibration range, sweep timing and colours.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::animation::SweepTiming;
use crate::geometry::{EclipseGeometry, EclipseInputs, GammaRange, Hms};
use crate::presets::{self, EclipsePreset};
use crate::rendering::{Color, VisualConfig};
use crate::scene::EclipseScene;

/// Relative locations tried by [`find_settings_file`]
pub const SETTINGS_PATHS: [&str; 2] = ["configs/eclipse.toml", "../../configs/eclipse.toml"];

/// Errors that can occur when loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown eclipse preset '{0}'")]
    UnknownPreset(String),
    #[error("invalid color for colors.{field}: '{value}'")]
    InvalidColor { field: &'static str, value: String },
    #[error("gamma_range.max ({max}) must differ from gamma_range.min ({min})")]
    DegenerateGammaRange { min: f64, max: f64 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    eclipse: EclipseToml,
    #[serde(default)]
    gamma_range: Option<GammaRange>,
    #[serde(default)]
    sweep: SweepToml,
    #[serde(default)]
    colors: ColorsToml,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EclipseToml {
    preset: Option<String>,
    sun: Option<[f64; 3]>,
    moon: Option<[f64; 3]>,
    gamma: Option<f64>,
    canvas_size: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SweepToml {
    slow_zone: Option<f64>,
    slow_step: Option<f64>,
    normal_step: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColorsToml {
    sky: Option<String>,
    sun: Option<String>,
    corona: Option<String>,
    night: Option<String>,
    moon: Option<String>,
    backdrop: Option<String>,
    stroke: Option<String>,
}

/// Resolved settings
#[derive(Debug, Clone)]
pub struct EclipseSettings {
    pub name: String,
    pub inputs: EclipseInputs,
    pub canvas_size: f64,
    pub timing: SweepTiming,
    pub visual: VisualConfig,
}

impl EclipseSettings {
    pub fn from_preset(preset: &EclipsePreset) -> Self {
        Self {
            name: preset.name.to_string(),
            inputs: preset.inputs(),
            canvas_size: preset.canvas_size,
            timing: SweepTiming::default(),
            visual: VisualConfig::default(),
        }
    }

    pub fn preset(name: &str) -> Result<Self, SettingsError> {
        presets::find(name)
            .map(|p| Self::from_preset(&p))
            .ok_or_else(|| SettingsError::UnknownPreset(name.to_string()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let raw: SettingsToml = toml::from_str(text)?;
        Self::resolve(raw)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        log::info!("loaded eclipse settings '{}' from {}", settings.name, path.display());
        Ok(settings)
    }

    pub fn geometry(&self) -> EclipseGeometry {
        EclipseGeometry::compute(&self.inputs)
    }

    pub fn scene(&self) -> EclipseScene {
        EclipseScene::with_visual(self.geometry(), self.canvas_size as f32, self.visual)
            .with_title(format!("Solar eclipse {}", self.name))
    }

    fn resolve(raw: SettingsToml) -> Result<Self, SettingsError> {
        let mut settings = match raw.eclipse.preset.as_deref() {
            Some(name) => Self::preset(name)?,
            None => Self::from_preset(&presets::default_preset()),
        };

        let eclipse = raw.eclipse;
        let customised = eclipse.sun.is_some()
            || eclipse.moon.is_some()
            || eclipse.gamma.is_some()
            || eclipse.canvas_size.is_some();
        if customised {
            settings.name = format!("{} (custom)", settings.name);
        }
        if let Some(sun) = eclipse.sun {
            settings.inputs.sun = Hms::from(sun);
        }
        if let Some(moon) = eclipse.moon {
            settings.inputs.moon = Hms::from(moon);
        }
        if let Some(gamma) = eclipse.gamma {
            settings.inputs.gamma = gamma;
        }
        if let Some(size) = eclipse.canvas_size {
            settings.canvas_size = positive("eclipse.canvas_size", size)?;
            settings.inputs.canvas_scale = size;
        }

        if let Some(range) = raw.gamma_range {
            if range.max == range.min || range.min.is_nan() || range.max.is_nan() {
                return Err(SettingsError::DegenerateGammaRange {
                    min: range.min,
                    max: range.max,
                });
            }
            settings.inputs.gamma_range = range;
        }

        let sweep = raw.sweep;
        if let Some(v) = sweep.slow_zone {
            if v < 0.0 || v.is_nan() {
                return Err(SettingsError::NotPositive {
                    field: "sweep.slow_zone",
                    value: v,
                });
            }
            settings.timing.slow_zone = v;
        }
        if let Some(v) = sweep.slow_step {
            settings.timing.slow_step = positive("sweep.slow_step", v)?;
        }
        if let Some(v) = sweep.normal_step {
            settings.timing.normal_step = positive("sweep.normal_step", v)?;
        }

        let colors = raw.colors;
        let visual = &mut settings.visual;
        apply_color(&mut visual.sky_color, "sky", colors.sky)?;
        apply_color(&mut visual.sun_color, "sun", colors.sun)?;
        apply_color(&mut visual.corona_color, "corona", colors.corona)?;
        apply_color(&mut visual.night_color, "night", colors.night)?;
        apply_color(&mut visual.moon_color, "moon", colors.moon)?;
        apply_color(&mut visual.backdrop_color, "backdrop", colors.backdrop)?;
        if let Some(stroke) = visual.outline.as_mut() {
            apply_color(&mut stroke.color, "stroke", colors.stroke)?;
        }

        Ok(settings)
    }
}

impl Default for EclipseSettings {
    fn default() -> Self {
        Self::from_preset(&presets::default_preset())
    }
}

/// First existing settings file among [`SETTINGS_PATHS`]
pub fn find_settings_file() -> Option<PathBuf> {
    SETTINGS_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

fn positive(field: &'static str, value: f64) -> Result<f64, SettingsError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SettingsError::NotPositive { field, value })
    }
}

fn apply_color(
    slot: &mut Color,
    field: &'static str,
    value: Option<String>,
) -> Result<(), SettingsError> {
    if let Some(hex) = value {
        *slot = Color::from_hex(&hex).ok_or(SettingsError::InvalidColor { field, value: hex })?;
    }
    Ok(())
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::geometry::{EclipseInputs, GammaRange, Hms};

/// Presentation a preset was prepared for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Sweep,
    Static,
    Slider,
}

/// A solar eclipse with the constants needed to draw it
#[derive(Debug, Clone, Serialize)]
pub struct EclipsePreset {
    pub name: &'static str,
    pub date: NaiveDate,
    pub sun: Hms,
    pub moon: Hms,
    pub gamma: f64,
    pub canvas_size: f64,
    pub variant: Variant,
}

impl EclipsePreset {
    pub fn inputs(&self) -> EclipseInputs {
        EclipseInputs {
            sun: self.sun,
            moon: self.moon,
            gamma: self.gamma,
            canvas_scale: self.canvas_size,
            gamma_range: GammaRange::default(),
        }
    }
}

/// Name of the preset used when nothing else is selected
pub const DEFAULT_PRESET: &str = "2186-07-16";

/// Built-in eclipses
pub fn all() -> Vec<EclipsePreset> {
    vec![
        // Longest totality of the millennium
        EclipsePreset {
            name: "2186-07-16",
            date: ymd(2186, 7, 16),
            sun: Hms::new(0.0, 15.0, 44.1),
            moon: Hms::new(0.0, 16.0, 43.2),
            gamma: -0.23964,
            canvas_size: 750.0,
            variant: Variant::Sweep,
        },
        // Non-central annular, Antarctica
        EclipsePreset {
            name: "2014-04-29",
            date: ymd(2014, 4, 29),
            sun: Hms::new(0.0, 15.0, 52.9),
            moon: Hms::new(0.0, 15.0, 38.4),
            gamma: -0.99996,
            canvas_size: 500.0,
            variant: Variant::Static,
        },
        EclipsePreset {
            name: "2027-08-02",
            date: ymd(2027, 8, 2),
            sun: Hms::new(0.0, 15.0, 45.5),
            moon: Hms::new(0.0, 16.0, 43.1),
            gamma: 0.1421,
            canvas_size: 500.0,
            variant: Variant::Slider,
        },
    ]
}

pub fn find(name: &str) -> Option<EclipsePreset> {
    all().into_iter().find(|p| p.name == name)
}

pub fn default_preset() -> EclipsePreset {
    find(DEFAULT_PRESET).unwrap_or_else(|| all().remove(0))
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

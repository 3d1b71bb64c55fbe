use serde::{Deserialize, Serialize};

use crate::rendering::primitives::{Color, Stroke};

/// Visual styling for the eclipse scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualConfig {
    /// Daylight sky behind a partial eclipse
    pub sky_color: Color,
    pub sun_color: Color,
    pub corona_color: Color,
    /// Background and Moon during totality
    pub night_color: Color,
    /// Moon in the static and slider views
    pub moon_color: Color,
    /// Background of the static and slider views
    pub backdrop_color: Color,
    pub outline: Option<Stroke>,
    /// Subtracted from `sun + canvas/4` to size the corona
    pub corona_inset: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            sky_color: Color::rgb(0x14, 0x39, 0xFF),
            sun_color: Color::rgb(255, 170, 0),
            corona_color: Color::rgb(0xEC, 0x8C, 0x00),
            night_color: Color::BLACK,
            moon_color: Color::rgba(0, 0, 0, 180),
            backdrop_color: Color::gray(200),
            outline: Some(Stroke {
                color: Color::WHITE,
                width: 1.0,
            }),
            corona_inset: 50.0,
        }
    }
}

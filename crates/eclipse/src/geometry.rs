//! Eclipse disk geometry
//!
//! Maps the Sun and Moon angular radii and the eclipse `gamma` onto pixel
//! diameters and the Moon's offset from the Sun's centre. Everything here is a
//! pure function of its inputs.

use serde::{Deserialize, Serialize};

/// Below this |gamma| the Moon's path crosses the Sun's centre
pub const MIN_GAMMA: f64 = 1.0266174;
/// |gamma| at which the disks only just touch
pub const MAX_GAMMA: f64 = 1.56;

const MINUTES_PER_HOUR: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Angular size expressed as hours, minutes and seconds of arc-time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hms {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Hms {
    pub const fn new(hours: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn to_decimal_hours(&self) -> f64 {
        to_decimal_hours(self.hours, self.minutes, self.seconds)
    }
}

impl From<[f64; 3]> for Hms {
    fn from(v: [f64; 3]) -> Self {
        Hms::new(v[0], v[1], v[2])
    }
}

/// Calibration range used to map |gamma| onto a vertical offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GammaRange {
    pub min: f64,
    pub max: f64,
}

impl Default for GammaRange {
    fn default() -> Self {
        Self {
            min: MIN_GAMMA,
            max: MAX_GAMMA,
        }
    }
}

/// Whether the Moon can fully cover the Sun, and the horizontal span over
/// which it does so
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipseClassification {
    pub is_total_capable: bool,
    /// Half the diameter difference. Negated when the Moon is the larger disk
    /// so that it stays positive in both cases (except for equal disks).
    pub symmetric_threshold: f64,
}

impl EclipseClassification {
    /// True when the Moon, displaced horizontally by `horizontal_offset`,
    /// covers the whole Sun
    pub fn is_full_coverage(&self, horizontal_offset: f64) -> bool {
        self.is_total_capable && horizontal_offset.abs() <= self.symmetric_threshold.abs()
    }
}

/// Vertical displacement span in pixels, from fully central to the
/// penumbral limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetRange {
    pub lower: f64,
    pub upper: f64,
}

/// Descriptive eclipse type at greatest eclipse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EclipseKind {
    Total,
    Annular,
    Partial,
}

impl std::fmt::Display for EclipseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EclipseKind::Total => "total",
            EclipseKind::Annular => "annular",
            EclipseKind::Partial => "partial",
        };
        f.write_str(s)
    }
}

/// `hours + minutes/60 + seconds/3600`
pub fn to_decimal_hours(hours: f64, minutes: f64, seconds: f64) -> f64 {
    hours + minutes / MINUTES_PER_HOUR + seconds / SECONDS_PER_HOUR
}

/// Convert an angular radius to a rendered diameter in pixels
pub fn to_pixel_diameter(angular_size: f64, canvas_scale: f64) -> f64 {
    angular_size * 2.0 * canvas_scale
}

pub fn classify_eclipse(sun_diameter: f64, moon_diameter: f64) -> EclipseClassification {
    let half_diff = (sun_diameter - moon_diameter) / 2.0;
    if moon_diameter <= sun_diameter {
        EclipseClassification {
            is_total_capable: false,
            symmetric_threshold: half_diff,
        }
    } else {
        EclipseClassification {
            is_total_capable: true,
            symmetric_threshold: -half_diff,
        }
    }
}

/// Largest offset at which the two disks still overlap
pub fn penumbral_limit(sun_diameter: f64, moon_diameter: f64) -> f64 {
    sun_diameter - (sun_diameter - moon_diameter) / 2.0
}

/// Re-map `x` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// Values outside the input range extrapolate; nothing is clamped.
/// `in_max != in_min` is required.
pub fn linear_map(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (x - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Vertical pixel offset of the Moon's centre from the Sun's centre
pub fn compute_vertical_offset(
    gamma: f64,
    sun_diameter: f64,
    moon_diameter: f64,
    min_gamma: f64,
    max_gamma: f64,
) -> f64 {
    let abs_gamma = gamma.abs();
    if abs_gamma < min_gamma {
        return 0.0;
    }

    let upper = penumbral_limit(sun_diameter, moon_diameter);
    let lower = classify_eclipse(sun_diameter, moon_diameter).symmetric_threshold;
    linear_map(abs_gamma, min_gamma, max_gamma, lower, upper)
}

/// `+1` for positive gamma (northern track), `-1` otherwise
pub fn direction_sign(gamma: f64) -> f64 {
    if gamma > 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Everything the calculator needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipseInputs {
    pub sun: Hms,
    pub moon: Hms,
    pub gamma: f64,
    pub canvas_scale: f64,
    #[serde(default)]
    pub gamma_range: GammaRange,
}

/// Geometry of one eclipse, computed once and read every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipseGeometry {
    pub gamma: f64,
    pub sun_diameter: f64,
    pub moon_diameter: f64,
    pub vertical_offset: f64,
    pub penumbral_limit: f64,
    pub direction: f64,
    pub classification: EclipseClassification,
    gamma_range: GammaRange,
}

impl EclipseGeometry {
    pub fn compute(inputs: &EclipseInputs) -> Self {
        let sun_diameter = to_pixel_diameter(inputs.sun.to_decimal_hours(), inputs.canvas_scale);
        let moon_diameter = to_pixel_diameter(inputs.moon.to_decimal_hours(), inputs.canvas_scale);
        let classification = classify_eclipse(sun_diameter, moon_diameter);
        let vertical_offset = compute_vertical_offset(
            inputs.gamma,
            sun_diameter,
            moon_diameter,
            inputs.gamma_range.min,
            inputs.gamma_range.max,
        );

        let geometry = Self {
            gamma: inputs.gamma,
            sun_diameter,
            moon_diameter,
            vertical_offset,
            penumbral_limit: penumbral_limit(sun_diameter, moon_diameter),
            direction: direction_sign(inputs.gamma),
            classification,
            gamma_range: inputs.gamma_range,
        };
        log::debug!(
            "eclipse geometry: sun={:.3}px moon={:.3}px offset_y={:.3}px limit={:.3}px total_capable={}",
            geometry.sun_diameter,
            geometry.moon_diameter,
            geometry.vertical_offset,
            geometry.penumbral_limit,
            geometry.classification.is_total_capable
        );
        geometry
    }

    pub fn offset_range(&self) -> OffsetRange {
        OffsetRange {
            lower: self.classification.symmetric_threshold,
            upper: self.penumbral_limit,
        }
    }

    pub fn is_full_coverage(&self, horizontal_offset: f64) -> bool {
        self.classification.is_full_coverage(horizontal_offset)
    }

    /// Signed Moon x offset for a sweep or slider position
    pub fn moon_horizontal_position(&self, position: f64) -> f64 {
        self.direction * position
    }

    pub fn is_central(&self) -> bool {
        self.gamma.abs() < self.gamma_range.min
    }

    pub fn kind(&self) -> EclipseKind {
        if !self.is_central() {
            EclipseKind::Partial
        } else if self.classification.is_total_capable {
            EclipseKind::Total
        } else {
            EclipseKind::Annular
        }
    }

    pub fn gamma_range(&self) -> GammaRange {
        self.gamma_range
    }
}

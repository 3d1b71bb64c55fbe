use serde::{Deserialize, Serialize};

use crate::geometry::EclipseGeometry;

pub const DEFAULT_STEP: f64 = 0.0001;

/// Horizontal Moon position controlled from outside (a slider, arrow keys).
///
/// The value is always inside `[min, max]` and on the step grid anchored at
/// `min`, except for `max` itself which is always reachable. Anything within
/// half a step of zero is stored as exactly zero, so the centred Moon is
/// never nudged off the Sun's axis by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonSlider {
    min: f64,
    max: f64,
    step: f64,
    value: f64,
}

impl MoonSlider {
    /// Slider spanning the penumbral limits, centred
    pub fn for_geometry(geometry: &EclipseGeometry) -> Self {
        let limit = geometry.penumbral_limit.abs();
        Self::new(-limit, limit, DEFAULT_STEP, 0.0)
    }

    /// `step` must be positive and `min <= max`
    pub fn new(min: f64, max: f64, step: f64, initial: f64) -> Self {
        let mut slider = Self {
            min,
            max,
            step,
            value: min,
        };
        slider.set_value(initial);
        slider
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Clamp into range and snap to the nearest step. Returns the stored value.
    pub fn set_value(&mut self, value: f64) -> f64 {
        if value.is_nan() {
            return self.value;
        }
        let clamped = value.clamp(self.min, self.max);
        let snapped = if self.step > 0.0 {
            self.min + ((clamped - self.min) / self.step).round() * self.step
        } else {
            clamped
        };
        self.value = if clamped.abs() <= self.step / 2.0 && self.min <= 0.0 && self.max >= 0.0 {
            0.0
        } else {
            snapped.clamp(self.min, self.max)
        };
        self.value
    }

    /// Move by a whole number of steps
    pub fn nudge(&mut self, steps: i64) -> f64 {
        self.set_value(self.value + steps as f64 * self.step)
    }

    pub fn center(&mut self) -> f64 {
        self.set_value(0.0)
    }

    /// Moon x offset for the current value, in the eclipse's direction of travel
    pub fn moon_x(&self, geometry: &EclipseGeometry) -> f64 {
        geometry.moon_horizontal_position(self.value)
    }
}

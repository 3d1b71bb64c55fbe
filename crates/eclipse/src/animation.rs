//! Sweep Animation Module
//!
//! Moves the Moon across the Sun one frame at a time, slowing down near
//! conjunction and wrapping back to the start once it leaves the Sun.

use serde::{Deserialize, Serialize};

use crate::geometry::EclipseGeometry;
use crate::rendering::Canvas;
use crate::scene::{EclipsePhase, EclipseScene};

/// Per-frame step sizes of the sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepTiming {
    /// Half-width of the slow-motion band around conjunction, in pixels
    pub slow_zone: f64,
    pub slow_step: f64,
    pub normal_step: f64,
}

impl Default for SweepTiming {
    fn default() -> Self {
        Self {
            slow_zone: 20.0,
            slow_step: 0.1,
            normal_step: 1.0,
        }
    }
}

impl SweepTiming {
    pub fn step_at(&self, position: f64) -> f64 {
        if position.abs() <= self.slow_zone {
            self.slow_step
        } else {
            self.normal_step
        }
    }

    /// Largest single advance
    pub fn max_step(&self) -> f64 {
        self.slow_step.max(self.normal_step)
    }
}

/// What one tick produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepFrame {
    pub sweep_position: f64,
    /// Signed Moon offset after applying the direction of travel
    pub moon_x: f64,
    pub phase: EclipsePhase,
    /// The sweep restarted from the far side on this tick
    pub wrapped: bool,
}

/// Sweep animation state, owning the single mutable scalar of the animation
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    geometry: EclipseGeometry,
    timing: SweepTiming,
    sweep_position: f64,
    frames: u64,
}

impl AnimationDriver {
    pub fn new(geometry: EclipseGeometry) -> Self {
        Self::with_timing(geometry, SweepTiming::default())
    }

    pub fn with_timing(geometry: EclipseGeometry, timing: SweepTiming) -> Self {
        Self {
            geometry,
            timing,
            sweep_position: -geometry.penumbral_limit,
            frames: 0,
        }
    }

    /// Restart from the far side
    pub fn reset(&mut self) {
        self.sweep_position = self.start_position();
        self.frames = 0;
    }

    pub fn start_position(&self) -> f64 {
        -self.geometry.penumbral_limit
    }

    pub fn sweep_position(&self) -> f64 {
        self.sweep_position
    }

    /// Number of ticks since creation or the last reset
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn geometry(&self) -> &EclipseGeometry {
        &self.geometry
    }

    pub fn timing(&self) -> SweepTiming {
        self.timing
    }

    /// Advance one frame (call once per frame)
    pub fn tick(&mut self) -> SweepFrame {
        let limit = self.geometry.penumbral_limit;
        let wrapped = self.sweep_position >= limit;
        if wrapped {
            self.sweep_position = -limit;
            log::debug!("sweep wrapped after {} frames", self.frames);
        }

        self.sweep_position += self.timing.step_at(self.sweep_position);
        self.frames += 1;

        let phase = if self.geometry.is_full_coverage(self.sweep_position) {
            EclipsePhase::Totality
        } else {
            EclipsePhase::Partial
        };

        SweepFrame {
            sweep_position: self.sweep_position,
            moon_x: self.geometry.moon_horizontal_position(self.sweep_position),
            phase,
            wrapped,
        }
    }

    /// Tick and paint the resulting frame
    pub fn render_next<C: Canvas>(&mut self, scene: &EclipseScene, canvas: &mut C) -> SweepFrame {
        let frame = self.tick();
        scene.draw_sweep(canvas, frame.moon_x, frame.phase);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{EclipseInputs, GammaRange, Hms};

    fn geometry(gamma: f64) -> EclipseGeometry {
        EclipseGeometry::compute(&EclipseInputs {
            sun: Hms::new(0.0, 15.0, 44.1),
            moon: Hms::new(0.0, 16.0, 43.2),
            gamma,
            canvas_scale: 750.0,
            gamma_range: GammaRange::default(),
        })
    }

    #[test]
    fn test_step_at() {
        let timing = SweepTiming::default();
        assert_eq!(timing.step_at(-20.0), 0.1);
        assert_eq!(timing.step_at(20.0), 0.1);
        assert_eq!(timing.step_at(0.0), 0.1);
        assert_eq!(timing.step_at(20.5), 1.0);
        assert_eq!(timing.step_at(-300.0), 1.0);
    }

    #[test]
    fn test_first_tick_advances_from_start() {
        let mut driver = AnimationDriver::new(geometry(-0.23964));
        let start = driver.start_position();
        assert_eq!(driver.sweep_position(), start);

        let frame = driver.tick();
        assert!(!frame.wrapped);
        assert_eq!(frame.sweep_position, start + 1.0);
    }

    #[test]
    fn test_direction_mirrors_moon_x() {
        let mut south = AnimationDriver::new(geometry(-0.23964));
        let mut north = AnimationDriver::new(geometry(0.23964));
        let s = south.tick();
        let n = north.tick();
        assert_eq!(s.moon_x, -s.sweep_position);
        assert_eq!(n.moon_x, n.sweep_position);
    }

    #[test]
    fn test_reset() {
        let mut driver = AnimationDriver::new(geometry(-0.23964));
        for _ in 0..50 {
            driver.tick();
        }
        driver.reset();
        assert_eq!(driver.sweep_position(), driver.start_position());
        assert_eq!(driver.frame_count(), 0);
    }
}

//! Solar eclipse disk geometry and rendering.
//!
//! [`geometry`] turns the Sun and Moon angular radii and the eclipse gamma
//! into pixel diameters and the Moon's offset. [`scene`] paints those disks on
//! any [`rendering::Canvas`]; [`animation`] and [`slider`] own the one value
//! that changes between frames.

pub mod animation;
pub mod config;
pub mod geometry;
pub mod presets;
pub mod rendering;
pub mod scene;
pub mod slider;

pub use animation::{AnimationDriver, SweepFrame, SweepTiming};
pub use config::{EclipseSettings, SettingsError};
pub use geometry::{
    classify_eclipse, compute_vertical_offset, direction_sign, linear_map, penumbral_limit,
    to_decimal_hours, to_pixel_diameter, EclipseClassification, EclipseGeometry, EclipseInputs,
    EclipseKind, GammaRange, Hms, OffsetRange, MAX_GAMMA, MIN_GAMMA,
};
pub use presets::{EclipsePreset, Variant};
pub use scene::{EclipsePhase, EclipseScene};
pub use slider::MoonSlider;

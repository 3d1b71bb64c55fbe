pub mod canvas;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use canvas::Canvas;
pub use primitives::{Color, Point, Shape, Stroke};
pub use spec::{FrameFormat, FrameMetadata, FrameSpec, RenderError};
pub use visual_config::VisualConfig;

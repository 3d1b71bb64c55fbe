use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rendering::canvas::Canvas;
use crate::rendering::primitives::{Color, Point, Shape, Stroke};
use crate::rendering::svg;

/// Errors that can occur when exporting a frame
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write frame to {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode frame as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to draw SVG frame: {0}")]
    Svg(String),
    #[error("unsupported frame format '{0}' (expected svg or json)")]
    UnsupportedFormat(String),
}

/// Output encoding for a recorded frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameFormat {
    Svg,
    Json,
}

impl FrameFormat {
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::parse(&ext)
    }

    pub fn parse(name: &str) -> Result<Self, RenderError> {
        match name {
            "svg" => Ok(FrameFormat::Svg),
            "json" => Ok(FrameFormat::Json),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FrameFormat::Svg => "svg",
            FrameFormat::Json => "json",
        }
    }
}

/// Frame metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameMetadata {
    pub title: Option<String>,
    pub frame_index: Option<u64>,
    /// Moon offset from the Sun centre, x to the left and y upward
    pub moon_offset: Option<Point>,
    pub totality: bool,
}

/// Frame specification - declarative description of one rendered frame.
///
/// Acts as a recording [`Canvas`]: every draw call is kept as a [`Shape`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSpec {
    pub width: f32,
    pub height: f32,
    pub center: Point,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
    pub metadata: FrameMetadata,
}

impl FrameSpec {
    /// Create a new empty frame
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            background_color: Color::BLACK,
            shapes: Vec::new(),
            metadata: FrameMetadata::default(),
        }
    }

    pub fn square(size: f32) -> Self {
        Self::new(size, size)
    }

    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_svg(&self) -> Result<String, RenderError> {
        svg::frame_to_svg(self)
    }

    pub fn encode(&self, format: FrameFormat) -> Result<String, RenderError> {
        match format {
            FrameFormat::Svg => self.to_svg(),
            FrameFormat::Json => self.to_json(),
        }
    }

    /// Write the frame, choosing the encoding from the file extension
    pub fn write_to(&self, path: &Path) -> Result<(), RenderError> {
        let format = FrameFormat::from_path(path)?;
        let body = self.encode(format)?;
        fs::write(path, body).map_err(|source| RenderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("wrote {} frame to {}", format.extension(), path.display());
        Ok(())
    }
}

impl Canvas for FrameSpec {
    fn clear(&mut self, color: Color) {
        self.background_color = color;
        self.shapes.clear();
    }

    fn draw_circle(&mut self, center: Point, diameter: f32, fill: Color, stroke: Option<Stroke>) {
        self.shapes.push(Shape::Circle {
            center,
            diameter: diameter.max(0.0),
            fill,
            stroke,
        });
    }
}

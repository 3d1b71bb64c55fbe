//! Eclipse scene
//!
//! Places the Sun and Moon disks on a square canvas and paints one frame of
//! each presentation: greatest eclipse, slider-driven and sweeping.

use serde::{Deserialize, Serialize};

use crate::geometry::EclipseGeometry;
use crate::rendering::{Canvas, FrameMetadata, FrameSpec, Point, VisualConfig};

/// Coverage state of a sweep frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EclipsePhase {
    Partial,
    Totality,
}

#[derive(Debug, Clone)]
pub struct EclipseScene {
    pub geometry: EclipseGeometry,
    pub canvas_size: f32,
    pub visual: VisualConfig,
    pub title: Option<String>,
}

impl EclipseScene {
    pub fn new(geometry: EclipseGeometry, canvas_size: f32) -> Self {
        Self::with_visual(geometry, canvas_size, VisualConfig::default())
    }

    pub fn with_visual(geometry: EclipseGeometry, canvas_size: f32, visual: VisualConfig) -> Self {
        Self {
            geometry,
            canvas_size,
            visual,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn center(&self) -> Point {
        Point::new(self.canvas_size / 2.0, self.canvas_size / 2.0)
    }

    pub fn sun_center(&self) -> Point {
        self.center()
    }

    /// Moon centre for a signed horizontal offset. Positive offsets move the
    /// Moon left, the vertical offset moves it up.
    pub fn moon_center(&self, moon_x: f64) -> Point {
        let c = self.center();
        Point::new(
            c.x - moon_x as f32,
            c.y - self.geometry.vertical_offset as f32,
        )
    }

    pub fn corona_diameter(&self) -> f32 {
        self.geometry.sun_diameter as f32 + self.canvas_size / 4.0 - self.visual.corona_inset
    }

    /// Greatest eclipse: the Moon sits on the vertical through the Sun
    pub fn draw_static<C: Canvas>(&self, canvas: &mut C) {
        self.draw_slider(canvas, 0.0);
    }

    pub fn draw_slider<C: Canvas>(&self, canvas: &mut C, moon_x: f64) {
        let visual = &self.visual;
        canvas.clear(visual.backdrop_color);
        canvas.draw_circle(
            self.sun_center(),
            self.geometry.sun_diameter as f32,
            visual.sun_color,
            visual.outline,
        );
        canvas.draw_circle(
            self.moon_center(moon_x),
            self.geometry.moon_diameter as f32,
            visual.moon_color,
            visual.outline,
        );
    }

    /// One frame of the sweep. During totality the sky goes dark and the
    /// corona shows; otherwise the Moon takes the sky colour so only the
    /// uncovered part of the Sun is visible.
    pub fn draw_sweep<C: Canvas>(&self, canvas: &mut C, moon_x: f64, phase: EclipsePhase) {
        let visual = &self.visual;
        let moon_color = match phase {
            EclipsePhase::Totality => {
                canvas.clear(visual.night_color);
                canvas.draw_circle(
                    self.sun_center(),
                    self.corona_diameter(),
                    visual.corona_color,
                    None,
                );
                visual.night_color
            }
            EclipsePhase::Partial => {
                canvas.clear(visual.sky_color);
                visual.sky_color
            }
        };
        canvas.draw_circle(
            self.sun_center(),
            self.geometry.sun_diameter as f32,
            visual.sun_color,
            None,
        );
        canvas.draw_circle(
            self.moon_center(moon_x),
            self.geometry.moon_diameter as f32,
            moon_color,
            None,
        );
    }

    pub fn render_static(&self) -> FrameSpec {
        let mut frame = self.blank_frame(0.0, false);
        self.draw_static(&mut frame);
        frame
    }

    pub fn render_slider(&self, moon_x: f64) -> FrameSpec {
        let mut frame = self.blank_frame(moon_x, false);
        self.draw_slider(&mut frame, moon_x);
        frame
    }

    pub fn render_sweep(&self, moon_x: f64, phase: EclipsePhase) -> FrameSpec {
        let mut frame = self.blank_frame(moon_x, phase == EclipsePhase::Totality);
        self.draw_sweep(&mut frame, moon_x, phase);
        frame
    }

    fn blank_frame(&self, moon_x: f64, totality: bool) -> FrameSpec {
        let mut frame = FrameSpec::square(self.canvas_size);
        frame.metadata = FrameMetadata {
            title: self.title.clone(),
            frame_index: None,
            moon_offset: Some(Point::new(
                moon_x as f32,
                self.geometry.vertical_offset as f32,
            )),
            totality,
        };
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    fn scene() -> EclipseScene {
        let preset = presets::default_preset();
        EclipseScene::new(
            EclipseGeometry::compute(&preset.inputs()),
            preset.canvas_size as f32,
        )
    }

    #[test]
    fn test_moon_center_moves_left_for_positive_offset() {
        let scene = scene();
        let c = scene.center();
        let moon = scene.moon_center(30.0);
        assert_eq!(moon.x, c.x - 30.0);
        assert_eq!(moon.y, c.y);
    }

    #[test]
    fn test_corona_diameter() {
        let scene = scene();
        let expected = scene.geometry.sun_diameter as f32 + 750.0 / 4.0 - 50.0;
        assert!((scene.corona_diameter() - expected).abs() < 1e-3);
    }
}

use crate::rendering::primitives::{Color, Point, Stroke};

/// Drawing surface the eclipse scene paints onto.
///
/// Coordinates are canvas pixels with the origin at the top-left corner.
pub trait Canvas {
    /// Fill the whole surface, discarding whatever was drawn before
    fn clear(&mut self, color: Color);

    fn draw_circle(&mut self, center: Point, diameter: f32, fill: Color, stroke: Option<Stroke>);
}

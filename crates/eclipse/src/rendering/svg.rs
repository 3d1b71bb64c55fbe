use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::Color as _;

use crate::rendering::primitives::{Color, Shape};
use crate::rendering::spec::{FrameSpec, RenderError};

type FrameArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Serialize a frame as a standalone SVG document.
///
/// Drawing happens in whole canvas pixels. An outlined disk becomes two
/// circles: the fill, then the outline on top.
pub fn frame_to_svg(frame: &FrameSpec) -> Result<String, RenderError> {
    let size = (
        frame.width.round().max(1.0) as u32,
        frame.height.round().max(1.0) as u32,
    );
    let mut out = String::new();
    {
        let root = SVGBackend::with_string(&mut out, size).into_drawing_area();
        root.fill(&to_rgba(frame.background_color))
            .map_err(svg_error)?;
        for shape in &frame.shapes {
            draw_shape(&root, shape)?;
        }
        root.present().map_err(svg_error)?;
    }
    Ok(out)
}

fn draw_shape(root: &FrameArea<'_>, shape: &Shape) -> Result<(), RenderError> {
    match shape {
        Shape::Circle {
            center,
            diameter,
            fill,
            stroke,
        } => {
            let at = (center.x.round() as i32, center.y.round() as i32);
            let radius = (diameter / 2.0).round() as i32;
            root.draw(&Circle::new(at, radius, to_rgba(*fill).filled()))
                .map_err(svg_error)?;
            if let Some(stroke) = stroke {
                let width = stroke.width.round().max(1.0) as u32;
                root.draw(&Circle::new(
                    at,
                    radius,
                    to_rgba(stroke.color).stroke_width(width),
                ))
                .map_err(svg_error)?;
            }
        }
    }
    Ok(())
}

fn to_rgba(c: Color) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a as f64 / 255.0)
}

fn svg_error<E>(err: DrawingAreaErrorKind<E>) -> RenderError
where
    E: std::error::Error + Send + Sync,
{
    RenderError::Svg(err.to_string())
}

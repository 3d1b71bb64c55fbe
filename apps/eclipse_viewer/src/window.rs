use nannou::prelude::*;
use std::sync::OnceLock;

use eclipse::rendering::{Canvas, Color, Point, Stroke};
use eclipse::{AnimationDriver, EclipseScene, EclipseSettings, MoonSlider, SweepFrame};

/// Slider steps moved per arrow key press (1 px at the default step)
const FINE_NUDGE: i64 = 10_000;
const COARSE_NUDGE: i64 = 100_000;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowMode {
    Sweep,
    Slider,
}

// nannou builds the model from a plain fn, so settings are handed over here
static WINDOW_CONTEXT: OnceLock<(EclipseSettings, WindowMode)> = OnceLock::new();

pub fn run(settings: EclipseSettings, mode: WindowMode) {
    let _ = WINDOW_CONTEXT.set((settings, mode));
    nannou::app(model).update(update).run();
}

struct Model {
    scene: EclipseScene,
    mode: WindowMode,
    driver: AnimationDriver,
    slider: MoonSlider,
    last: Option<SweepFrame>,
}

fn model(app: &App) -> Model {
    let (settings, mode) = WINDOW_CONTEXT
        .get()
        .cloned()
        .unwrap_or_else(|| (EclipseSettings::default(), WindowMode::Sweep));
    let scene = settings.scene();
    let size = scene.canvas_size.round().max(1.0) as u32;

    let title = scene
        .title
        .clone()
        .unwrap_or_else(|| "Solar eclipse".to_string());
    if let Err(e) = app
        .new_window()
        .title(title)
        .size(size, size)
        .view(view)
        .key_pressed(key_pressed)
        .build()
    {
        log::error!("failed to open window: {e}");
        app.quit();
    }

    log::info!("window mode {:?}, canvas {}px", mode, size);

    Model {
        driver: AnimationDriver::with_timing(scene.geometry, settings.timing),
        slider: MoonSlider::for_geometry(&scene.geometry),
        scene,
        mode,
        last: None,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    if model.mode == WindowMode::Sweep {
        model.last = Some(model.driver.tick());
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    if model.mode != WindowMode::Slider {
        return;
    }
    let amount = if app.keys.mods.shift() {
        COARSE_NUDGE
    } else {
        FINE_NUDGE
    };
    let value = match key {
        Key::Right => model.slider.nudge(amount),
        Key::Left => model.slider.nudge(-amount),
        Key::Key0 => model.slider.center(),
        _ => return,
    };
    log::debug!("slider value {value:.4}");
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let mut canvas = NannouCanvas {
        draw: &draw,
        size: model.scene.canvas_size,
    };

    match model.mode {
        WindowMode::Sweep => {
            if let Some(tick) = model.last {
                model.scene.draw_sweep(&mut canvas, tick.moon_x, tick.phase);
            }
        }
        WindowMode::Slider => {
            let moon_x = model.slider.moon_x(&model.scene.geometry);
            model.scene.draw_slider(&mut canvas, moon_x);
        }
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {e}");
    }
}

/// Maps top-left canvas pixels onto nannou's centred, y-up coordinates
struct NannouCanvas<'a> {
    draw: &'a Draw,
    size: f32,
}

impl NannouCanvas<'_> {
    fn to_world(&self, p: Point) -> Point2 {
        pt2(p.x - self.size / 2.0, self.size / 2.0 - p.y)
    }
}

impl Canvas for NannouCanvas<'_> {
    fn clear(&mut self, color: Color) {
        self.draw.background().color(to_srgba(color));
    }

    fn draw_circle(&mut self, center: Point, diameter: f32, fill: Color, stroke: Option<Stroke>) {
        let ellipse = self
            .draw
            .ellipse()
            .xy(self.to_world(center))
            .w_h(diameter, diameter)
            .color(to_srgba(fill));
        if let Some(stroke) = stroke {
            ellipse
                .stroke(to_srgba(stroke.color))
                .stroke_weight(stroke.width);
        }
    }
}

fn to_srgba(c: Color) -> Srgba<u8> {
    srgba(c.r, c.g, c.b, c.a)
}

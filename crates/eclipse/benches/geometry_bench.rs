use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eclipse::animation::AnimationDriver;
use eclipse::geometry::{compute_vertical_offset, EclipseGeometry, MAX_GAMMA, MIN_GAMMA};
use eclipse::presets;
use eclipse::rendering::FrameSpec;
use eclipse::scene::EclipseScene;

fn bench_compute_vertical_offset(c: &mut Criterion) {
    c.bench_function("compute_vertical_offset", |b| {
        b.iter(|| {
            compute_vertical_offset(
                black_box(1.3),
                black_box(393.375),
                black_box(418.0),
                MIN_GAMMA,
                MAX_GAMMA,
            )
        })
    });
}

fn bench_geometry_compute(c: &mut Criterion) {
    let inputs = presets::default_preset().inputs();
    c.bench_function("geometry_compute", |b| {
        b.iter(|| EclipseGeometry::compute(black_box(&inputs)))
    });
}

fn bench_sweep_frame(c: &mut Criterion) {
    let preset = presets::default_preset();
    let geometry = EclipseGeometry::compute(&preset.inputs());
    let scene = EclipseScene::new(geometry, preset.canvas_size as f32);
    let mut driver = AnimationDriver::new(geometry);
    let mut canvas = FrameSpec::square(preset.canvas_size as f32);

    c.bench_function("sweep_render_next", |b| {
        b.iter(|| driver.render_next(black_box(&scene), &mut canvas))
    });
}

fn bench_svg_export(c: &mut Criterion) {
    let preset = presets::default_preset();
    let scene = EclipseScene::new(
        EclipseGeometry::compute(&preset.inputs()),
        preset.canvas_size as f32,
    );
    let frame = scene.render_static();
    c.bench_function("frame_to_svg", |b| b.iter(|| black_box(&frame).to_svg().unwrap()));
}

criterion_group!(
    benches,
    bench_compute_vertical_offset,
    bench_geometry_compute,
    bench_sweep_frame,
    bench_svg_export
);
criterion_main!(benches);

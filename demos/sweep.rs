//! Scrolls a stroke down, back up and down again, logging each frame.
//!
//! Logs at debug level, so spline rebuilds and teardown show up.

use inkstroke::{BrushConfig, FrameInput, StrokeRenderer, Vec3};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut config = BrushConfig::default();
    config.bristles.count = 6;
    let mut renderer = StrokeRenderer::new(config)?;
    renderer.set_control_points(&[
        Vec3::new(0.0, 15.0, 0.0),
        Vec3::new(7.5, -25.0, 0.0),
        Vec3::new(-15.0, -70.0, 0.0),
        Vec3::new(30.0, -125.0, 0.0),
    ]);

    // Down, back up past the particle window, then down again.
    let schedule = (0..=40)
        .map(|k| k as f32 / 40.0)
        .chain((0..=40).rev().map(|k| k as f32 / 40.0))
        .chain((0..=40).map(|k| k as f32 / 40.0));

    for (k, progress) in schedule.enumerate() {
        let frame = renderer.frame(FrameInput::new(progress, k as f32 / 60.0));
        let stats = frame.stats();
        println!(
            "progress={:.3} strands={} vertices={} particles={} (+{} -{})",
            stats.progress,
            stats.strands,
            stats.vertices,
            stats.particles,
            stats.spawned,
            stats.retired
        );
    }

    renderer.teardown();
    let slot = renderer.slot();
    println!(
        "installed={} disposed={} live={}",
        slot.installed(),
        slot.disposed(),
        slot.live_buffers()
    );
    Ok(())
}

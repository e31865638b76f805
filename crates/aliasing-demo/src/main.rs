//! Runs the double-sheet aliasing demo against the headless viewer.
//!
//! Usage: `aliasing-demo [CONFIG.json]`. Without a config file the reference
//! 200×200×200 setup is used. Set `RUST_LOG=info` to follow each step.

use aliasing_demo::{run, DemoConfig, HeadlessViewer, Result};

/// Frames to advance the rotation before reporting.
const PREVIEW_FRAMES: u32 = 45;

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => DemoConfig::from_json_file(path)?,
        None => DemoConfig::default(),
    };

    let mut viewer = HeadlessViewer::new();
    let report = run(&config, &mut viewer)?;

    viewer.tick(PREVIEW_FRAMES);
    if let Some(session) = viewer.session() {
        let (min, max) = session.bounding_box();
        log::info!(
            "session {} is {} with {} item(s), view extent {min} .. {max}",
            session.handle,
            session.state(),
            session.registry.len()
        );
    }
    if let Some(frame) = viewer.frame_transform() {
        log::info!(
            "after {PREVIEW_FRAMES} frames ({:.1} deg): {frame}",
            viewer.animation_angle()
        );
    }

    println!(
        "'{}' ({}x{}x{}) rotating in session {}",
        report.volume_name,
        report.dimensions.x,
        report.dimensions.y,
        report.dimensions.z,
        report.session
    );
    for path in &report.previews {
        println!("preview: {}", path.display());
    }
    Ok(())
}

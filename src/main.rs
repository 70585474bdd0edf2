//! Headless proofing run: load a program (and optionally rely on the
//! default stock plate), then drive a simulated render loop through a
//! full traversal and report what an operator would see.

use anyhow::Context;
use cutproof::{
    init_logging, Config, FileKind, FileSource, InstallOutcome, PreviewSession, SessionOptions,
};
use std::path::PathBuf;
use tracing::{info, warn};

/// Simulated frame period (milliseconds), roughly 60 fps.
const FRAME_MS: f64 = 16.0;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    info!("cutproof {} ({})", cutproof::VERSION, cutproof::BUILD_DATE);

    let config = Config::load_or_default().unwrap_or_else(|e| {
        warn!("Falling back to default configuration: {}", e);
        Config::default()
    });
    config.validate().context("invalid configuration")?;

    let program = std::env::args().nth(1).map(PathBuf::from);
    if let Some(path) = &program {
        if FileKind::from_path(path) != Some(FileKind::Program) {
            anyhow::bail!("not a .gcode file: {}", path.display());
        }
    }

    // Single-threaded cooperative scheduling: one runtime thread drives
    // both the loads and the simulated render loop.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut session = PreviewSession::new(SessionOptions {
        duration_ms: config.playback.duration_ms,
        path_color: config.viewer.path_color,
        path_width: config.viewer.path_width,
    });

    session.load_default_model();

    let outcome = runtime.block_on(async {
        match &program {
            Some(path) => session.load_program(&FileSource::new(path)).await,
            None => session.load_default_program().await,
        }
    });

    if outcome != InstallOutcome::Installed {
        if let Some(err) = session.resources().path_error() {
            anyhow::bail!("program load failed: {}", err);
        }
    }

    let path = session.toolpath().context("no toolpath loaded")?;
    let (min, max) = path.bounds();
    info!(
        "Toolpath: {} vertices, bounds {} .. {}, fallback: {}",
        path.len(),
        min,
        max,
        path.is_fallback()
    );

    // Simulated render loop: tick timestamps from zero through one full
    // traversal, reporting the visible sub-path at each quarter.
    session.play();
    let duration = config.playback.duration_ms;
    let mut now = 0.0;
    let mut next_report = 0.25;
    while session.tick(now) {
        let progress = session.playback().progress();
        if progress >= next_report {
            info!(
                "Playback {:>3.0}%: {} of {} vertices visible",
                progress * 100.0,
                session.resources().active_path().map_or(0, |p| {
                    cutproof::visible_point_count(p.len(), progress)
                }),
                session.resources().active_path().map_or(0, |p| p.len()),
            );
            next_report += 0.25;
        }
        now += FRAME_MS;
        if now > duration * 2.0 {
            anyhow::bail!("playback failed to complete");
        }
    }

    info!("Traversal complete ({})", session.phase());
    session.teardown();
    Ok(())
}

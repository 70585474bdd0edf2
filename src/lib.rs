//! # Cutproof
//!
//! A Rust-based toolpath proofing visualizer for CNC cutting programs.
//! An operator loads a part model and a G-code program; Cutproof
//! interprets the program into a trajectory and drives a time-based,
//! scrubable playback of the toolpath over the part so the cut can be
//! verified before touching hardware.
//!
//! ## Architecture
//!
//! Cutproof is organized as a workspace with multiple crates:
//!
//! 1. **cutproof-core** - Core types, constants, error taxonomy
//! 2. **cutproof-settings** - Configuration files and validation
//! 3. **cutproof-visualizer** - Interpreter, toolpath builder, playback,
//!    partial rendering, resource lifecycle
//! 4. **cutproof** - Main binary driving a headless proofing run
//!
//! The 3D camera/input stack and the binary mesh decoder are external
//! collaborators behind capability boundaries.

pub use cutproof_core::{
    constants, AxisTargets, Error, LoadError, Point3, Result, Units,
};

pub use cutproof_settings::{Config, PlaybackSettings, SettingsError, ViewerSettings};

pub use cutproof_visualizer::{
    build_toolpath, default_program_source, default_stock_plate, interpret, visible_point_count,
    ByteSource, DecodedSurface, FileKind, FileSource, InstallOutcome, MeshMaterial, MotionCommand,
    MotionMode, ObjectId, PartialPathRenderer, PathLine, PlaybackController, PlaybackPhase,
    PreviewSession, RenderObject, ResourceLifecycleManager, Scene, SessionOptions, StaticSource,
    SurfaceDecoder, SurfaceMesh, Toolpath, ToolpathOrigin,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, RUST_LOG environment
/// variable support, and INFO as the default level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

//! # Cutproof Visualizer
//!
//! Toolpath proofing core: G-code interpretation, toolpath construction,
//! time-based scrubable playback, progress-based partial rendering, and
//! lifecycle management of the render resources it produces and replaces.
//!
//! The 3D rendering/camera stack and the binary mesh decoder are external
//! collaborators: the former consumes the [`render::Scene`] every tick,
//! the latter implements [`mesh::SurfaceDecoder`].

pub mod gcode;
pub mod mesh;
pub mod playback;
pub mod render;
pub mod resources;
pub mod session;
pub mod utils;

pub use gcode::{build_toolpath, interpret, MotionCommand, MotionMode, Toolpath, ToolpathOrigin};
pub use mesh::{default_stock_plate, generate_stock_plate, DecodedSurface, SurfaceDecoder};
pub use playback::{PlaybackController, PlaybackPhase};
pub use render::{
    visible_point_count, MeshMaterial, ObjectId, PartialPathRenderer, PathLine, RenderObject,
    Scene, SurfaceMesh,
};
pub use resources::{Generation, InstallOutcome, ResourceLifecycleManager};
pub use session::{PreviewSession, SessionOptions};
pub use utils::{default_program_source, ByteSource, FileKind, FileSource, StaticSource};

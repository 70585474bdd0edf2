//! Scene objects and progress-based partial rendering
//!
//! This module provides:
//! - Disposable render objects (path lines, part meshes) and materials
//! - The scene container handed to the external render loop each tick
//! - The partial-path renderer deriving the visible sub-path from progress

pub mod objects;
pub mod partial;

pub use objects::{MeshMaterial, ObjectId, PathLine, RenderObject, Scene, SurfaceMesh};
pub use partial::{visible_point_count, PartialPathRenderer};

//! Decoded part surfaces and the decoder capability boundary
//!
//! The binary mesh-file decoder is an external collaborator: this crate
//! hands it raw bytes and receives a [`DecodedSurface`], never parsing the
//! bytes itself. The generated stock plate stands in when no part model is
//! supplied.

use cutproof_core::constants::{
    DEFAULT_STOCK_DEPTH_MM, DEFAULT_STOCK_HEIGHT_MM, DEFAULT_STOCK_WIDTH_MM,
};
use cutproof_core::LoadError;
use glam::Vec3;

/// A decoded, renderable part surface: indexed triangles with per-vertex
/// normals.
#[derive(Debug, Clone, Default)]
pub struct DecodedSurface {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Per-vertex normals, parallel to `positions`
    pub normals: Vec<Vec3>,
    /// Triangle indices into `positions`
    pub indices: Vec<u32>,
}

impl DecodedSurface {
    /// Number of triangles in the surface.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when the surface carries no geometry.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
    }
}

/// Capability that turns raw mesh-file bytes into a renderable surface.
///
/// Supplied by the embedding application; rejection surfaces as
/// [`LoadError::Decode`] and is recovered at the resource-lifecycle
/// boundary.
pub trait SurfaceDecoder: Send + Sync {
    /// Decode raw bytes into a surface.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedSurface, LoadError>;
}

/// Generate the default stock plate: an axis-aligned box centered on the
/// XY origin with its top face at Z = 0, so programmed cuts below zero
/// intersect it.
pub fn generate_stock_plate(width: f32, depth: f32, height: f32) -> DecodedSurface {
    let hw = width / 2.0;
    let hd = depth / 2.0;

    let min = Vec3::new(-hw, -hd, -height);
    let max = Vec3::new(hw, hd, 0.0);

    let mut surface = DecodedSurface::default();

    // One quad per face, duplicated vertices so each face keeps a flat
    // normal.
    let faces: [([Vec3; 4], Vec3); 6] = [
        (
            [
                Vec3::new(min.x, min.y, max.z),
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(max.x, max.y, max.z),
                Vec3::new(min.x, max.y, max.z),
            ],
            Vec3::Z,
        ),
        (
            [
                Vec3::new(min.x, max.y, min.z),
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(min.x, min.y, min.z),
            ],
            Vec3::NEG_Z,
        ),
        (
            [
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(max.x, min.y, max.z),
                Vec3::new(min.x, min.y, max.z),
            ],
            Vec3::NEG_Y,
        ),
        (
            [
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(min.x, max.y, min.z),
                Vec3::new(min.x, max.y, max.z),
                Vec3::new(max.x, max.y, max.z),
            ],
            Vec3::Y,
        ),
        (
            [
                Vec3::new(min.x, max.y, min.z),
                Vec3::new(min.x, min.y, min.z),
                Vec3::new(min.x, min.y, max.z),
                Vec3::new(min.x, max.y, max.z),
            ],
            Vec3::NEG_X,
        ),
        (
            [
                Vec3::new(max.x, min.y, min.z),
                Vec3::new(max.x, max.y, min.z),
                Vec3::new(max.x, max.y, max.z),
                Vec3::new(max.x, min.y, max.z),
            ],
            Vec3::X,
        ),
    ];

    for (corners, normal) in faces {
        let base = surface.positions.len() as u32;
        for corner in corners {
            surface.positions.push(corner);
            surface.normals.push(normal);
        }
        surface
            .indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    surface
}

/// Generate the stock plate with the default dimensions.
pub fn default_stock_plate() -> DecodedSurface {
    generate_stock_plate(
        DEFAULT_STOCK_WIDTH_MM,
        DEFAULT_STOCK_DEPTH_MM,
        DEFAULT_STOCK_HEIGHT_MM,
    )
}

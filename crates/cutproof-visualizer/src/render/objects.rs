//! Renderable scene objects
//!
//! The external rendering stack consumes these every tick; this crate owns
//! their lifecycles. Each object carries an explicit `dispose()` releasing
//! its buffer memory, and disposal must happen exactly once; the
//! lifecycle manager and the partial-path renderer are the only callers.

use crate::mesh::DecodedSurface;
use cutproof_core::Point3;
use glam::Vec3;
use std::collections::HashMap;

/// Identifier of an object installed in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(u64);

/// Material properties for part-mesh rendering
#[derive(Debug, Clone)]
pub struct MeshMaterial {
    /// Diffuse color (RGBA)
    pub diffuse_color: [f32; 4],
    /// Ambient color (RGBA)
    pub ambient_color: [f32; 4],
    /// Transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub alpha: f32,
    /// Whether to render wireframe
    pub wireframe: bool,
}

impl Default for MeshMaterial {
    fn default() -> Self {
        Self {
            diffuse_color: [0.7, 0.7, 0.8, 1.0],
            ambient_color: [0.2, 0.2, 0.2, 1.0],
            alpha: 0.8, // Slightly transparent so the toolpath shows through
            wireframe: false,
        }
    }
}

impl MeshMaterial {
    /// Material for the part/stock surface.
    pub fn stock() -> Self {
        Self {
            diffuse_color: [0.6, 0.8, 1.0, 1.0],
            ambient_color: [0.1, 0.2, 0.3, 1.0],
            alpha: 0.7,
            ..Default::default()
        }
    }
}

/// A line-shaped render object holding the visible portion of the
/// toolpath. Positions are a flattened xyz buffer, ready for upload by the
/// external renderer.
#[derive(Debug, Clone)]
pub struct PathLine {
    positions: Vec<f32>,
    color: [f32; 4],
    width: f32,
    disposed: bool,
}

impl PathLine {
    /// Build a line object from a vertex prefix.
    pub fn from_vertices(vertices: &[Point3], color: [f32; 4], width: f32) -> Self {
        let mut positions = Vec::with_capacity(vertices.len() * 3);
        for v in vertices {
            positions.push(v.x as f32);
            positions.push(v.y as f32);
            positions.push(v.z as f32);
        }
        Self {
            positions,
            color,
            width,
            disposed: false,
        }
    }

    /// Flattened xyz position buffer.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Number of points in the line.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Line color (RGBA).
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Line width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Release the position buffer.
    pub fn dispose(&mut self) {
        self.positions.clear();
        self.positions.shrink_to_fit();
        self.disposed = true;
    }

    /// True once `dispose` has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// A part-surface render object: interleaved position/normal buffer plus
/// triangle indices.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    /// Vertex data: [x, y, z, nx, ny, nz] per vertex
    vertices: Vec<f32>,
    /// Index data for triangles
    indices: Vec<u32>,
    bounds_min: Vec3,
    bounds_max: Vec3,
    material: MeshMaterial,
    disposed: bool,
}

impl SurfaceMesh {
    /// Build a render mesh from a decoded surface.
    pub fn from_surface(surface: &DecodedSurface, material: MeshMaterial) -> Self {
        let mut vertices = Vec::with_capacity(surface.positions.len() * 6);
        let mut bounds_min = Vec3::splat(f32::MAX);
        let mut bounds_max = Vec3::splat(f32::MIN);

        for (position, normal) in surface.positions.iter().zip(surface.normals.iter()) {
            vertices.extend_from_slice(&[
                position.x, position.y, position.z, normal.x, normal.y, normal.z,
            ]);
            bounds_min = bounds_min.min(*position);
            bounds_max = bounds_max.max(*position);
        }

        if surface.positions.is_empty() {
            bounds_min = Vec3::ZERO;
            bounds_max = Vec3::ZERO;
        }

        Self {
            vertices,
            indices: surface.indices.clone(),
            bounds_min,
            bounds_max,
            material,
            disposed: false,
        }
    }

    /// Interleaved position/normal buffer.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 6
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        (self.bounds_min, self.bounds_max)
    }

    /// Material properties.
    pub fn material(&self) -> &MeshMaterial {
        &self.material
    }

    /// Release vertex and index buffers.
    pub fn dispose(&mut self) {
        self.vertices.clear();
        self.vertices.shrink_to_fit();
        self.indices.clear();
        self.indices.shrink_to_fit();
        self.disposed = true;
    }

    /// True once `dispose` has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Any object installable in the scene.
#[derive(Debug, Clone)]
pub enum RenderObject {
    /// Toolpath overlay line
    Path(PathLine),
    /// Part surface
    Surface(SurfaceMesh),
}

impl RenderObject {
    /// Release the object's buffers.
    pub fn dispose(&mut self) {
        match self {
            RenderObject::Path(line) => line.dispose(),
            RenderObject::Surface(mesh) => mesh.dispose(),
        }
    }

    /// True once `dispose` has run.
    pub fn is_disposed(&self) -> bool {
        match self {
            RenderObject::Path(line) => line.is_disposed(),
            RenderObject::Surface(mesh) => mesh.is_disposed(),
        }
    }
}

/// The scene graph handed to the external render loop each tick.
///
/// A passive container: insertion and removal happen only through the
/// lifecycle manager and the partial-path renderer.
#[derive(Debug, Default)]
pub struct Scene {
    objects: HashMap<ObjectId, RenderObject>,
    next_id: u64,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install an object, returning its id.
    pub fn insert(&mut self, object: RenderObject) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId(self.next_id);
        self.objects.insert(id, object);
        id
    }

    /// Remove an object without disposing it; the caller takes ownership.
    pub fn remove(&mut self, id: ObjectId) -> Option<RenderObject> {
        self.objects.remove(&id)
    }

    /// Remove an object and release its buffers.
    pub fn discard(&mut self, id: ObjectId) {
        if let Some(mut object) = self.objects.remove(&id) {
            object.dispose();
        }
    }

    /// Look up an installed object.
    pub fn get(&self, id: ObjectId) -> Option<&RenderObject> {
        self.objects.get(&id)
    }

    /// Number of installed objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when nothing is installed.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over installed objects, for the render loop.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &RenderObject)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    /// Dispose and drop every object.
    pub fn clear(&mut self) {
        for (_, mut object) in self.objects.drain() {
            object.dispose();
        }
    }
}

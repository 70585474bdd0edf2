//! Toolpath construction
//!
//! Walks the motion sequence with a machine-position cursor and emits the
//! flattened (segment start, segment end) vertex list the renderer
//! consumes. A program with no usable motion yields a short fallback
//! segment centered at the origin instead of an empty list, marked with
//! `ToolpathOrigin::Fallback` so callers can tell it apart from real
//! geometry.

use super::command::MotionCommand;
use cutproof_core::constants::FALLBACK_SEGMENT_HALF_LENGTH_MM;
use cutproof_core::Point3;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Where a toolpath's geometry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolpathOrigin {
    /// Built from the program's motion commands.
    Program,
    /// The program had no usable motion; the default segment was
    /// substituted.
    Fallback,
}

/// The full trajectory: a flattened, ordered vertex list plus its source
/// marker and bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toolpath {
    vertices: Vec<Point3>,
    origin: ToolpathOrigin,
    bounds_min: Point3,
    bounds_max: Point3,
}

impl Toolpath {
    /// The flattened vertex sequence. Always holds at least two points.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Number of vertices in the sequence.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the vertex buffer has been released.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Where this trajectory came from.
    pub fn origin(&self) -> ToolpathOrigin {
        self.origin
    }

    /// True when this is the substituted default segment rather than
    /// program geometry.
    pub fn is_fallback(&self) -> bool {
        self.origin == ToolpathOrigin::Fallback
    }

    /// Axis-aligned bounds of the trajectory.
    pub fn bounds(&self) -> (Point3, Point3) {
        (self.bounds_min, self.bounds_max)
    }

    /// Final tool position of the trajectory.
    pub fn end_position(&self) -> Option<Point3> {
        self.vertices.last().copied()
    }

    /// Release the vertex buffer. Used when the path slot is cleared or
    /// replaced.
    pub fn release(&mut self) {
        self.vertices.clear();
        self.vertices.shrink_to_fit();
    }
}

/// Build the toolpath for a motion sequence.
///
/// Maintains a cursor from the machine origin; for each rapid/linear
/// command the target copies the cursor and overwrites the axes present on
/// the command (modal carry-over), then cursor and target are appended as
/// one segment. Non-motion commands are skipped and do not move the
/// cursor.
pub fn build_toolpath(commands: &[MotionCommand]) -> Toolpath {
    let mut vertices: Vec<Point3> = Vec::with_capacity(commands.len() * 2);
    let mut cursor = Point3::ORIGIN;
    let mut bounds_min = Point3::ORIGIN;
    let mut bounds_max = Point3::ORIGIN;

    for command in commands {
        if !command.mode.is_motion() {
            continue;
        }

        let target = command.targets.apply_to(cursor);
        vertices.push(cursor);
        vertices.push(target);
        bounds_min = bounds_min.min(&target);
        bounds_max = bounds_max.max(&target);
        cursor = target;
    }

    if vertices.len() < 2 {
        // Degeneracy guard: downstream rendering needs two points to form
        // a line. Substitute the default segment and say so.
        warn!("Program produced no usable motion, substituting fallback segment");
        let a = Point3::new(-FALLBACK_SEGMENT_HALF_LENGTH_MM, 0.0, 0.0);
        let b = Point3::new(FALLBACK_SEGMENT_HALF_LENGTH_MM, 0.0, 0.0);
        return Toolpath {
            vertices: vec![a, b],
            origin: ToolpathOrigin::Fallback,
            bounds_min: a,
            bounds_max: b,
        };
    }

    debug!(
        "Built toolpath: {} vertices, ends at {}",
        vertices.len(),
        vertices.last().expect("non-empty")
    );

    Toolpath {
        vertices,
        origin: ToolpathOrigin::Program,
        bounds_min,
        bounds_max,
    }
}

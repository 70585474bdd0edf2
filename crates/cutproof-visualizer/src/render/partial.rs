//! Progress-based partial-path rendering
//!
//! Given the full vertex list and a progress value, derives the currently
//! visible sub-path and swaps a fresh line object into the scene, always
//! disposing the one it replaces. Repeated scrubbing therefore never
//! accumulates undisposed geometry. This renderer is the only writer of
//! the displayed-path scene slot.

use super::objects::{ObjectId, PathLine, RenderObject, Scene};
use crate::gcode::Toolpath;
use cutproof_core::constants::MIN_LINE_VERTICES;
use tracing::trace;

/// Number of vertices visible at the given progress: none at 0, all at 1,
/// otherwise `max(2, ceil(total * progress))` so a started path is always
/// a drawable line.
pub fn visible_point_count(total: usize, progress: f64) -> usize {
    if progress <= 0.0 {
        return 0;
    }
    if progress >= 1.0 {
        return total;
    }
    let raw = (total as f64 * progress).ceil() as usize;
    raw.max(MIN_LINE_VERTICES).min(total)
}

/// Renders the visible prefix of the toolpath as a scene line object.
#[derive(Debug)]
pub struct PartialPathRenderer {
    current: Option<ObjectId>,
    visible: usize,
    color: [f32; 4],
    width: f32,
}

impl PartialPathRenderer {
    /// Create a renderer drawing lines with the given style.
    pub fn new(color: [f32; 4], width: f32) -> Self {
        Self {
            current: None,
            visible: 0,
            color,
            width,
        }
    }

    /// Id of the currently displayed line object, if any.
    pub fn current(&self) -> Option<ObjectId> {
        self.current
    }

    /// Number of vertices currently displayed.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Update the displayed sub-path for the given progress.
    ///
    /// Rebuilds only when the visible count changed; the replaced line
    /// object is removed from the scene and disposed.
    pub fn update(&mut self, scene: &mut Scene, path: &Toolpath, progress: f64) {
        let count = visible_point_count(path.len(), progress);
        if count == self.visible && (count > 0) == self.current.is_some() {
            return;
        }

        let previous = self.current.take();

        if count > 0 {
            let line = PathLine::from_vertices(&path.vertices()[..count], self.color, self.width);
            self.current = Some(scene.insert(RenderObject::Path(line)));
        }

        if let Some(id) = previous {
            scene.discard(id);
        }

        self.visible = count;
        trace!("Partial path updated: {}/{} vertices", count, path.len());
    }

    /// Remove and dispose the displayed line, if any. Used when the
    /// underlying toolpath is replaced or the session is torn down.
    pub fn clear(&mut self, scene: &mut Scene) {
        if let Some(id) = self.current.take() {
            scene.discard(id);
        }
        self.visible = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_zero_at_or_below_zero() {
        assert_eq!(visible_point_count(10, 0.0), 0);
        assert_eq!(visible_point_count(10, -0.5), 0);
    }

    #[test]
    fn count_is_total_at_or_above_one() {
        assert_eq!(visible_point_count(10, 1.0), 10);
        assert_eq!(visible_point_count(10, 1.5), 10);
    }

    #[test]
    fn count_has_a_floor_of_two() {
        assert_eq!(visible_point_count(100, 0.001), 2);
        assert_eq!(visible_point_count(2, 0.4), 2);
    }

    #[test]
    fn count_is_ceiling_of_fraction() {
        assert_eq!(visible_point_count(10, 0.25), 3);
        assert_eq!(visible_point_count(10, 0.3), 3);
        assert_eq!(visible_point_count(10, 0.31), 4);
    }
}

//! Resource lifecycle management
//!
//! Owns the two active-resource slots (the displayed part mesh and the
//! loaded toolpath) and guarantees superseded occupants are released
//! exactly once. Each slot carries a generation counter: `begin_*_load`
//! bumps it, and a completion carrying a stale generation is discarded
//! (its resource disposed, the slot untouched). Only the most recently
//! triggered load can ever occupy a slot, regardless of completion order.

use crate::gcode::Toolpath;
use crate::render::objects::{ObjectId, RenderObject, Scene, SurfaceMesh};
use cutproof_core::LoadError;
use tracing::{debug, warn};

/// Token identifying one triggered load of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// What happened to a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The result now occupies the slot.
    Installed,
    /// A newer load was triggered first; the result was discarded and any
    /// produced resource disposed.
    DiscardedStale,
    /// The load failed; the slot is now empty and the error stored.
    Failed,
}

/// Manager of the two active-resource slots.
///
/// The model slot holds the scene id of the installed part mesh; the path
/// slot holds the loaded toolpath data (the *displayed* partial line
/// belongs to the partial-path renderer). Mutation happens only on the
/// single render/UI scheduling thread; the generation check is what
/// arbitrates between overlapping in-flight loads.
#[derive(Debug, Default)]
pub struct ResourceLifecycleManager {
    model_generation: u64,
    model_settled: u64,
    model: Option<ObjectId>,
    model_error: Option<LoadError>,

    path_generation: u64,
    path_settled: u64,
    path: Option<Toolpath>,
    path_error: Option<LoadError>,
}

impl ResourceLifecycleManager {
    /// Create a manager with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly triggered model load. Any load begun earlier for
    /// this slot is superseded from this point on.
    pub fn begin_model_load(&mut self) -> Generation {
        self.model_generation += 1;
        debug!("Model load {} triggered", self.model_generation);
        Generation(self.model_generation)
    }

    /// Complete a model load.
    ///
    /// A stale completion disposes its mesh without installing it. A
    /// current success replaces the slot occupant, disposing the previous
    /// mesh; a current failure empties the slot and stores the error.
    pub fn complete_model_load(
        &mut self,
        generation: Generation,
        scene: &mut Scene,
        result: Result<SurfaceMesh, LoadError>,
    ) -> InstallOutcome {
        if generation.0 != self.model_generation {
            warn!(
                "Discarding stale model load {} (current is {})",
                generation.0, self.model_generation
            );
            if let Ok(mut mesh) = result {
                mesh.dispose();
            }
            return InstallOutcome::DiscardedStale;
        }

        self.model_settled = generation.0;

        if let Some(previous) = self.model.take() {
            scene.discard(previous);
        }

        match result {
            Ok(mesh) => {
                self.model = Some(scene.insert(RenderObject::Surface(mesh)));
                self.model_error = None;
                debug!("Model load {} installed", generation.0);
                InstallOutcome::Installed
            }
            Err(error) => {
                warn!("Model load {} failed: {}", generation.0, error);
                self.model_error = Some(error);
                InstallOutcome::Failed
            }
        }
    }

    /// Register a newly triggered toolpath load.
    pub fn begin_path_load(&mut self) -> Generation {
        self.path_generation += 1;
        debug!("Path load {} triggered", self.path_generation);
        Generation(self.path_generation)
    }

    /// Complete a toolpath load; same discard/replace/clear semantics as
    /// the model slot.
    pub fn complete_path_load(
        &mut self,
        generation: Generation,
        result: Result<Toolpath, LoadError>,
    ) -> InstallOutcome {
        if generation.0 != self.path_generation {
            warn!(
                "Discarding stale path load {} (current is {})",
                generation.0, self.path_generation
            );
            if let Ok(mut path) = result {
                path.release();
            }
            return InstallOutcome::DiscardedStale;
        }

        self.path_settled = generation.0;

        if let Some(mut previous) = self.path.take() {
            previous.release();
        }

        match result {
            Ok(path) => {
                debug!(
                    "Path load {} installed ({} vertices)",
                    generation.0,
                    path.len()
                );
                self.path = Some(path);
                self.path_error = None;
                InstallOutcome::Installed
            }
            Err(error) => {
                warn!("Path load {} failed: {}", generation.0, error);
                self.path_error = Some(error);
                InstallOutcome::Failed
            }
        }
    }

    /// Scene id of the displayed part mesh.
    pub fn active_model(&self) -> Option<ObjectId> {
        self.model
    }

    /// The loaded toolpath.
    pub fn active_path(&self) -> Option<&Toolpath> {
        self.path.as_ref()
    }

    /// Error from the most recent settled model load, if it failed.
    pub fn model_error(&self) -> Option<&LoadError> {
        self.model_error.as_ref()
    }

    /// Error from the most recent settled path load, if it failed.
    pub fn path_error(&self) -> Option<&LoadError> {
        self.path_error.as_ref()
    }

    /// True while the latest triggered model load has not settled.
    pub fn is_model_loading(&self) -> bool {
        self.model_settled < self.model_generation
    }

    /// True while the latest triggered path load has not settled.
    pub fn is_path_loading(&self) -> bool {
        self.path_settled < self.path_generation
    }

    /// Dispose both slots unconditionally. Late completions after
    /// teardown are rejected as stale.
    pub fn teardown(&mut self, scene: &mut Scene) {
        if let Some(id) = self.model.take() {
            scene.discard(id);
        }
        if let Some(mut path) = self.path.take() {
            path.release();
        }
        self.model_error = None;
        self.path_error = None;
        // Bump past every outstanding generation so nothing can land
        // after teardown.
        self.model_generation += 1;
        self.path_generation += 1;
        self.model_settled = self.model_generation;
        self.path_settled = self.path_generation;
    }
}

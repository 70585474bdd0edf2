//! Preview session
//!
//! The facade the host drives: it owns the scene, the resource slots, the
//! playback controller, and the partial-path renderer, and wires their
//! interactions: installing a new toolpath resets playback and clears the
//! displayed path; every tick refreshes the visible sub-path from the
//! current progress.

use crate::gcode::{build_toolpath, interpret, Toolpath};
use crate::mesh::{default_stock_plate, SurfaceDecoder};
use crate::playback::{PlaybackController, PlaybackPhase};
use crate::render::objects::{MeshMaterial, Scene, SurfaceMesh};
use crate::render::partial::PartialPathRenderer;
use crate::resources::{InstallOutcome, ResourceLifecycleManager};
use crate::utils::file_io::{default_program_source, ByteSource};
use cutproof_core::constants::DEFAULT_PLAYBACK_DURATION_MS;
use cutproof_core::LoadError;
use tracing::{info, warn};

/// Session tuning: playback duration and path overlay style.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Wall-clock duration of a full traversal, in milliseconds
    pub duration_ms: f64,
    /// Toolpath overlay color (RGBA)
    pub path_color: [f32; 4],
    /// Toolpath overlay width in pixels
    pub path_width: f32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_PLAYBACK_DURATION_MS,
            path_color: [0.9, 0.35, 0.1, 1.0],
            path_width: 2.0,
        }
    }
}

/// A proofing session over one part model and one cutting program.
#[derive(Debug)]
pub struct PreviewSession {
    scene: Scene,
    resources: ResourceLifecycleManager,
    playback: PlaybackController,
    path_renderer: PartialPathRenderer,
}

impl PreviewSession {
    /// Create an empty session.
    pub fn new(options: SessionOptions) -> Self {
        Self {
            scene: Scene::new(),
            resources: ResourceLifecycleManager::new(),
            playback: PlaybackController::new(options.duration_ms),
            path_renderer: PartialPathRenderer::new(options.path_color, options.path_width),
        }
    }

    /// The scene handed to the external render loop.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Resource slots (loading state, errors, occupants).
    pub fn resources(&self) -> &ResourceLifecycleManager {
        &self.resources
    }

    /// Playback state.
    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    /// The loaded toolpath.
    pub fn toolpath(&self) -> Option<&Toolpath> {
        self.resources.active_path()
    }

    /// Load a part model from a byte source through the external decoder
    /// capability.
    pub async fn load_model(
        &mut self,
        source: &dyn ByteSource,
        decoder: &dyn SurfaceDecoder,
    ) -> InstallOutcome {
        let generation = self.resources.begin_model_load();

        let result = match source.read().await {
            Ok(bytes) => decoder
                .decode(&bytes)
                .map(|surface| SurfaceMesh::from_surface(&surface, MeshMaterial::stock())),
            Err(err) => Err(LoadError::source_read(source.describe(), &err)),
        };

        self.resources
            .complete_model_load(generation, &mut self.scene, result)
    }

    /// Install the generated default stock plate; used when no model file
    /// is selected.
    pub fn load_default_model(&mut self) -> InstallOutcome {
        let generation = self.resources.begin_model_load();
        let mesh = SurfaceMesh::from_surface(&default_stock_plate(), MeshMaterial::stock());
        self.resources
            .complete_model_load(generation, &mut self.scene, Ok(mesh))
    }

    /// Load a cutting program from a byte source: read, interpret, build.
    /// On install, playback resets and the displayed path is cleared.
    pub async fn load_program(&mut self, source: &dyn ByteSource) -> InstallOutcome {
        let generation = self.resources.begin_path_load();

        let result = match source.read().await {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => Ok(build_toolpath(&interpret(&text))),
                Err(err) => Err(LoadError::SourceRead {
                    source_name: source.describe(),
                    reason: format!("not valid UTF-8 text: {}", err),
                }),
            },
            Err(err) => Err(LoadError::source_read(source.describe(), &err)),
        };

        let outcome = self.resources.complete_path_load(generation, result);
        if outcome == InstallOutcome::Installed {
            self.on_toolpath_replaced();
        }
        outcome
    }

    /// Load the embedded default program; used when no G-code file is
    /// selected.
    pub async fn load_default_program(&mut self) -> InstallOutcome {
        self.load_program(&default_program_source()).await
    }

    /// New vertex sequence: playback restarts from zero and the stale
    /// partial line leaves the scene.
    fn on_toolpath_replaced(&mut self) {
        self.playback.reset();
        self.path_renderer.clear(&mut self.scene);

        if let Some(path) = self.resources.active_path() {
            if path.is_fallback() {
                warn!("Loaded program has no drawable motion; showing fallback segment");
            } else {
                info!("Toolpath ready: {} vertices", path.len());
            }
        }
    }

    /// Start or resume playback.
    pub fn play(&mut self) {
        self.playback.play();
    }

    /// Pause playback, keeping the displayed sub-path.
    pub fn pause(&mut self) {
        self.playback.pause();
    }

    /// Reset playback to Idle and hide the path overlay.
    pub fn reset(&mut self) {
        self.playback.reset();
        self.refresh_path();
    }

    /// Scrub to a progress value and refresh the overlay immediately.
    pub fn seek(&mut self, value: f64) {
        self.playback.seek(value);
        self.refresh_path();
    }

    /// Render-loop tick: advance playback (when Playing) and refresh the
    /// visible sub-path. Returns true while further ticks are wanted.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let keep_ticking = self.playback.tick(now_ms);
        self.refresh_path();
        keep_ticking
    }

    /// Current playback phase.
    pub fn phase(&self) -> PlaybackPhase {
        self.playback.phase()
    }

    fn refresh_path(&mut self) {
        if let Some(path) = self.resources.active_path() {
            self.path_renderer
                .update(&mut self.scene, path, self.playback.progress());
        }
    }

    /// Dispose both resource slots, the displayed path, and everything
    /// left in the scene.
    pub fn teardown(&mut self) {
        self.path_renderer.clear(&mut self.scene);
        self.resources.teardown(&mut self.scene);
        self.scene.clear();
        self.playback.reset();
    }
}

impl Drop for PreviewSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

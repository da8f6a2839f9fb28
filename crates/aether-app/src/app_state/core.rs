//! AetherApp struct definition and constructor.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::window::Window;

use aether_common::AetherError;
use aether_config::AetherConfig;
use aether_renderer::RenderState;
use aether_scene::{FrameClock, SceneContext};

/// Top-level application state.
pub struct AetherApp {
    pub(super) config: AetherConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Animation
    pub(super) scene: SceneContext,
    pub(super) clock: FrameClock,
    pub(super) last_fps_report: f64,

    // Fatal error that ended the event loop
    pub(super) error: Option<AetherError>,
}

impl AetherApp {
    pub fn new(config: AetherConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => {
                tracing::info!("Generating scene from seed {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        let scene = SceneContext::from_config(&config, &mut rng);

        Self {
            config,
            window: None,
            render_state: None,
            scene,
            clock: FrameClock::new(),
            last_fps_report: 0.0,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<AetherError> {
        self.error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_builds_scene_without_window() {
        let mut config = AetherConfig::default();
        config.seed = Some(7);
        let mut app = AetherApp::new(config);
        assert!(app.window.is_none());
        assert!(app.render_state.is_none());
        assert!(!app.scene.layers().is_empty());
        assert!(app.take_error().is_none());
    }

    #[test]
    fn seeded_apps_generate_identical_clouds() {
        let mut config = AetherConfig::default();
        config.seed = Some(99);
        let a = AetherApp::new(config.clone());
        let b = AetherApp::new(config);
        let first = |app: &AetherApp| app.scene.layers()[0].cloud().points().to_vec();
        assert_eq!(first(&a), first(&b));
    }
}

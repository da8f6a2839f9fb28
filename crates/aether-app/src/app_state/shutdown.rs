//! Graceful shutdown: release GPU resources before the window.

use super::core::AetherApp;

impl AetherApp {
    /// Drop the renderer first: the surface borrows the window.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");
        self.render_state = None;
        self.window = None;
        tracing::info!("Ran {:.1}s of scene time", self.scene.elapsed());
    }
}

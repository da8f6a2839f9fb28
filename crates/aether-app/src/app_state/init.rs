//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes};

use aether_common::AetherError;
use aether_config::schema::StartupMode;
use aether_renderer::RenderState;

use super::core::AetherApp;

impl AetherApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let mut attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));
        match window_config.startup_mode {
            StartupMode::Windowed => {}
            StartupMode::Maximized => attrs = attrs.with_maximized(true),
            StartupMode::Fullscreen => {
                attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
            }
        }

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                self.error = Some(AetherError::Other(format!("window creation failed: {e}")));
                return false;
            }
        };

        let render_state =
            pollster::block_on(RenderState::new(window.clone(), &self.scene, &self.config));

        match render_state {
            Ok(rs) => {
                tracing::info!(
                    "Renderer ready ({}x{}, {} layers)",
                    rs.gpu.size.width,
                    rs.gpu.size.height,
                    rs.batches().len()
                );
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                self.error = Some(AetherError::Renderer(e.to_string()));
                return false;
            }
        }

        self.window = Some(window);
        true
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

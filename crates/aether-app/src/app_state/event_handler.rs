//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use super::core::AetherApp;

impl ApplicationHandler for AetherApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                    self.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position);
            }

            WindowEvent::CursorLeft { .. } => {
                self.scene.pointer_left();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                tracing::info!("Escape pressed, exiting");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                self.render_frame();
                self.request_redraw();
            }

            _ => {}
        }
    }
}

impl AetherApp {
    /// Feed the pointer tracker in logical pixels so parallax strength does
    /// not depend on the display's scale factor.
    fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let Some(ref window) = self.window else {
            return;
        };
        let scale = window.scale_factor();
        let logical = position.to_logical::<f64>(scale);
        let size = window.inner_size().to_logical::<f64>(scale);
        self.scene
            .pointer_moved(logical.x, logical.y, size.width, size.height);
    }
}

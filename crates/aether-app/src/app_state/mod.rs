//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the config, the scene, and the renderer.

mod core;
mod event_handler;
mod init;
mod render;
mod shutdown;

pub use core::AetherApp;

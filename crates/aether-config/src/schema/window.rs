//! Window and camera configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
    Fullscreen,
}

/// Window appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical width (valid range: 320-7680).
    pub width: u32,
    /// Initial logical height (valid range: 240-4320).
    pub height: u32,
    pub startup_mode: StartupMode,
    /// Clear color behind the point layers.
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Aether".into(),
            width: 1280,
            height: 800,
            startup_mode: StartupMode::Windowed,
            background: "#000000".into(),
        }
    }
}

/// Perspective camera placed on +Z looking at the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 10-170).
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    /// Distance from the origin along +Z.
    pub distance: f64,
    /// Exponential-squared fog density; 0 disables fog.
    pub fog_density: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 50.0,
            fog_density: 0.001,
        }
    }
}

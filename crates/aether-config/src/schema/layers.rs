//! Point layer configuration: the star cloud, the dust cloud, and their motion.

use serde::{Deserialize, Serialize};

/// Spatial distribution of a generated point cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CloudShapeConfig {
    /// Radius uniform across a spherical band.
    Shell { inner_radius: f64, outer_radius: f64 },
    /// Solid ball, uniform by volume.
    Volume { radius: f64 },
    /// Axis-aligned cube centered on the origin.
    Cube { half_extent: f64 },
}

impl Default for CloudShapeConfig {
    fn default() -> Self {
        CloudShapeConfig::Volume { radius: 400.0 }
    }
}

/// One palette bucket. A point takes the first entry whose `threshold` is
/// strictly below its random draw; the last entry catches everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub threshold: f64,
    pub color: String,
}

impl PaletteEntry {
    pub fn new(threshold: f64, color: &str) -> Self {
        Self {
            threshold,
            color: color.into(),
        }
    }
}

/// Default blue/purple/white star palette.
pub fn default_star_palette() -> Vec<PaletteEntry> {
    vec![
        PaletteEntry::new(0.9, "#ffffff"),
        PaletteEntry::new(0.6, "#994dff"),
        PaletteEntry::new(0.0, "#6699ff"),
    ]
}

/// Per-frame transform rules for a layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Autonomous rotation rate per axis `[x, y, z]` in radians per second.
    pub spin: [f64; 3],
    /// Multiplier from pointer sample to target rotation; 0 disables parallax.
    pub pointer_coupling: f64,
    /// Fraction of the remaining distance to target covered each frame.
    pub easing: f64,
    /// Breathing scale amplitude; 0 disables breathing.
    pub breathing_amplitude: f64,
    /// Breathing angular frequency in radians per second.
    pub breathing_frequency: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            spin: [0.03, 0.06, 0.0],
            pointer_coupling: 0.5,
            easing: 0.01,
            breathing_amplitude: 0.05,
            breathing_frequency: 0.5,
        }
    }
}

impl MotionConfig {
    /// Spin-only motion with no pointer coupling and no breathing.
    pub fn spin_only(spin: [f64; 3]) -> Self {
        Self {
            spin,
            pointer_coupling: 0.0,
            easing: 0.0,
            breathing_amplitude: 0.0,
            breathing_frequency: 0.0,
        }
    }
}

/// The main star cloud.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarsConfig {
    /// Number of points (valid range: 1-200000).
    pub count: u32,
    pub shape: CloudShapeConfig,
    /// Uniform color, used when `palette` is empty.
    pub color: String,
    pub palette: Vec<PaletteEntry>,
    pub point_size: f64,
    pub opacity: f64,
    /// Static Euler XYZ tilt in radians applied outside the animated rotation.
    pub tilt: [f64; 3],
    pub motion: MotionConfig,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            count: 4000,
            shape: CloudShapeConfig::default(),
            color: "#a5b4fc".into(),
            palette: default_star_palette(),
            point_size: 0.5,
            opacity: 0.8,
            tilt: [0.0, 0.0, 0.0],
            motion: MotionConfig::default(),
        }
    }
}

/// Close-range floating particles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DustConfig {
    pub enabled: bool,
    /// Number of particles (valid range: 1-10000).
    pub count: u32,
    /// Half the edge length of the cube the particles fill.
    pub half_extent: f64,
    pub color: String,
    pub point_size: f64,
    pub opacity: f64,
    /// Rotation rate per axis `[x, y, z]` in radians per second.
    pub spin: [f64; 3],
}

impl Default for DustConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            half_extent: 25.0,
            color: "#6366f1".into(),
            point_size: 0.2,
            opacity: 0.6,
            spin: [-0.06, -0.12, 0.0],
        }
    }
}

/// Periodic shooting star crossing the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShootingStarConfig {
    pub enabled: bool,
    /// Length of one cycle in phase units; the star is visible for the first unit.
    pub period: f64,
    pub start: [f64; 3],
    pub end: [f64; 3],
    pub speed_min: f64,
    pub speed_max: f64,
    /// Upper bound of the random phase offset.
    pub max_offset: f64,
    pub size: f64,
    pub color: String,
}

impl Default for ShootingStarConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            period: 10.0,
            start: [5.0, 2.0, 0.0],
            end: [-5.0, -2.0, 0.0],
            speed_min: 1.0,
            speed_max: 3.0,
            max_offset: 100.0,
            size: 0.02,
            color: "#ffffff".into(),
        }
    }
}

/// Pointer-to-parallax mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Scale from pixels off-center to the normalized sample.
    pub scale: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self { scale: 0.001 }
    }
}

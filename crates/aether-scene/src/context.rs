//! The scene context: owns every layer, the pointer, and scene time.
//!
//! Input handlers and the frame handler both go through `SceneContext`;
//! nothing in the scene lives in globals.

use aether_common::Color;
use aether_config::schema::MotionConfig;
use aether_config::AetherConfig;
use rand::Rng;
use tracing::{debug, info};

use crate::animator::{FrameAnimator, FrameInput, Motion};
use crate::cloud::{CloudShape, Palette, PointCloud};
use crate::matrix::{self, Mat4};
use crate::pointer::{PointerSample, PointerTracker};
use crate::shooting_star::{ActorState, ShootingStar};
use crate::transform::TransformState;

/// What a layer depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Stars,
    Dust,
    ShootingStar,
}

impl LayerKind {
    pub fn label(&self) -> &'static str {
        match self {
            LayerKind::Stars => "stars",
            LayerKind::Dust => "dust",
            LayerKind::ShootingStar => "shooting star",
        }
    }
}

#[derive(Debug, Clone)]
enum Driver {
    Animated {
        animator: FrameAnimator,
        transform: TransformState,
        tilt: [f32; 3],
    },
    Actor {
        star: ShootingStar,
        state: ActorState,
    },
}

/// One drawable point cloud plus the rules that move it.
#[derive(Debug, Clone)]
pub struct Layer {
    kind: LayerKind,
    cloud: PointCloud,
    point_size: f32,
    opacity: f32,
    driver: Driver,
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    /// World-space sprite diameter.
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Current transform, for animated layers.
    pub fn transform(&self) -> Option<&TransformState> {
        match &self.driver {
            Driver::Animated { transform, .. } => Some(transform),
            Driver::Actor { .. } => None,
        }
    }

    /// Current actor state, for the shooting star.
    pub fn actor(&self) -> Option<&ActorState> {
        match &self.driver {
            Driver::Actor { state, .. } => Some(state),
            Driver::Animated { .. } => None,
        }
    }

    fn advance(&mut self, input: &FrameInput) -> LayerFrame {
        match &mut self.driver {
            Driver::Animated {
                animator,
                transform,
                tilt,
            } => {
                *transform = animator.step(transform, input);
                LayerFrame {
                    kind: self.kind,
                    model: transform.model_matrix(*tilt),
                    point_scale: 1.0,
                    visible: true,
                }
            }
            Driver::Actor { star, state } => {
                *state = star.state_at(input.elapsed);
                let [x, y, z] = state.position;
                LayerFrame {
                    kind: self.kind,
                    model: matrix::translate(x, y, z),
                    point_scale: state.scale[0].max(state.scale[1]),
                    visible: state.visible,
                }
            }
        }
    }
}

/// Per-layer output of one frame, in the same order as
/// [`SceneContext::layers`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerFrame {
    pub kind: LayerKind,
    pub model: Mat4,
    /// Multiplier on the layer's point size.
    pub point_scale: f32,
    pub visible: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub elapsed: f64,
    pub pointer: PointerSample,
    pub layers: Vec<LayerFrame>,
}

/// Owns the generated clouds and their per-frame state.
pub struct SceneContext {
    layers: Vec<Layer>,
    pointer: PointerTracker,
    elapsed: f64,
}

impl SceneContext {
    /// Generate every configured layer. Runs point generation exactly once.
    pub fn from_config(config: &AetherConfig, rng: &mut impl Rng) -> Self {
        let mut layers = Vec::with_capacity(3);

        let stars = &config.stars;
        let palette = Palette::from_config(&stars.palette, &stars.color);
        let cloud = PointCloud::generate(
            stars.count as usize,
            CloudShape::from(&stars.shape),
            &palette,
            rng,
        );
        layers.push(Layer {
            kind: LayerKind::Stars,
            cloud,
            point_size: stars.point_size as f32,
            opacity: stars.opacity as f32,
            driver: Driver::Animated {
                animator: FrameAnimator::new(Motion::from(&stars.motion)),
                transform: TransformState::default(),
                tilt: stars.tilt.map(|v| v as f32),
            },
        });

        let dust = &config.dust;
        if dust.enabled {
            let palette = Palette::from_config(&[], &dust.color);
            let cloud = PointCloud::generate(
                dust.count as usize,
                CloudShape::Cube {
                    half_extent: dust.half_extent as f32,
                },
                &palette,
                rng,
            );
            layers.push(Layer {
                kind: LayerKind::Dust,
                cloud,
                point_size: dust.point_size as f32,
                opacity: dust.opacity as f32,
                driver: Driver::Animated {
                    animator: FrameAnimator::new(Motion::from(&MotionConfig::spin_only(
                        dust.spin,
                    ))),
                    transform: TransformState::default(),
                    tilt: [0.0; 3],
                },
            });
        }

        let shooting = &config.shooting_star;
        if shooting.enabled {
            let star = ShootingStar::new(shooting, rng);
            let state = star.state_at(0.0);
            let color = Color::from_hex(&shooting.color).unwrap_or(Color::WHITE);
            layers.push(Layer {
                kind: LayerKind::ShootingStar,
                cloud: PointCloud::single([0.0; 3], color),
                point_size: shooting.size as f32,
                opacity: 1.0,
                driver: Driver::Actor { star, state },
            });
        }

        for layer in &layers {
            debug!(
                "{} layer: {} points, size {}",
                layer.kind.label(),
                layer.cloud.len(),
                layer.point_size
            );
        }
        info!(
            "scene generated: {} layers, {} points",
            layers.len(),
            layers.iter().map(|l| l.cloud.len()).sum::<usize>()
        );

        Self {
            layers,
            pointer: PointerTracker::new(config.pointer.scale as f32),
            elapsed: 0.0,
        }
    }

    /// Pointer moved to `(x, y)` inside a `width × height` window.
    pub fn pointer_moved(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.pointer.on_move(x, y, width, height);
    }

    /// Pointer left the window.
    pub fn pointer_left(&mut self) {
        self.pointer.reset();
    }

    pub fn pointer(&self) -> PointerSample {
        self.pointer.sample()
    }

    /// Step every layer by `delta` seconds.
    pub fn advance(&mut self, delta: f32) -> FrameSnapshot {
        self.elapsed += delta as f64;
        let pointer = self.pointer.sample();
        let input = FrameInput {
            delta,
            elapsed: self.elapsed,
            pointer,
        };
        let layers = self
            .layers
            .iter_mut()
            .map(|layer| layer.advance(&input))
            .collect();
        FrameSnapshot {
            elapsed: self.elapsed,
            pointer,
            layers,
        }
    }

    /// Layers in draw order: stars, dust, then the shooting star.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

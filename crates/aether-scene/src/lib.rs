//! Aether scene core.
//!
//! Generates the point clouds once at startup and advances their
//! transforms once per displayed frame. Everything here is plain data and
//! pure functions over it; GPU upload lives in `aether-renderer`.

pub mod animator;
pub mod camera;
pub mod clock;
pub mod cloud;
pub mod context;
pub mod matrix;
pub mod pointer;
pub mod shooting_star;
pub mod transform;

pub use animator::{FrameAnimator, FrameInput, Motion};
pub use camera::Camera;
pub use clock::FrameClock;
pub use cloud::{CloudPoint, CloudShape, Palette, PointCloud};
pub use context::{FrameSnapshot, Layer, LayerFrame, LayerKind, SceneContext};
pub use matrix::Mat4;
pub use pointer::{PointerSample, PointerTracker};
pub use shooting_star::{ActorState, ShootingStar};
pub use transform::TransformState;

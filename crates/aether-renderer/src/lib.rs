pub mod gpu;
pub mod points;
pub mod render_state;

pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use points::{PointBatch, PointUniforms, PointsPipeline};
pub use render_state::RenderState;

mod frame;
mod helpers;
mod state;

pub use helpers::srgb_to_linear;
pub use state::RenderState;

//! Point-sprite rendering for the scene's clouds.
//!
//! Every cloud is drawn as instanced camera-facing quads: six vertices per
//! point generated from `vertex_index`, one `CloudPoint` per instance.
//! Points blend additively, so draw order between layers does not matter.

mod batch;
mod pipeline;
mod uniforms;

pub use batch::*;
pub use pipeline::*;
pub use uniforms::*;

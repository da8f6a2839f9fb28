use aether_scene::{matrix, Layer, LayerFrame, Mat4};

/// Per-layer values fixed at upload time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    /// Sprite diameter in world units.
    pub point_size: f32,
    pub opacity: f32,
}

impl From<&Layer> for LayerStyle {
    fn from(layer: &Layer) -> Self {
        Self {
            point_size: layer.point_size(),
            opacity: layer.opacity(),
        }
    }
}

/// Per-layer uniforms matching the WGSL `PointUniforms` struct.
///
/// Layout: 2 × mat4 + vec4 + 4 × f32 = 160 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    /// Model-View-Projection matrix (column-major).
    pub mvp: [f32; 16],
    /// Model-View matrix, used for fog depth.
    pub model_view: [f32; 16],
    /// RGBA multiplier applied to every point color.
    pub tint: [f32; 4],
    /// Sprite diameter in world units.
    pub point_size: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// `FogExp2` density; 0 disables fog.
    pub fog_density: f32,
    /// 1.0 when the target is sRGB and point colors must be linearized.
    pub linearize: f32,
}

/// Camera and surface values shared by every layer in a frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView {
    pub view: Mat4,
    pub view_projection: Mat4,
    pub aspect: f32,
    pub fog_density: f32,
    pub linearize: bool,
}

impl PointUniforms {
    pub fn for_layer(view: &FrameView, style: &LayerStyle, frame: &LayerFrame) -> Self {
        Self {
            mvp: matrix::mul(&view.view_projection, &frame.model),
            model_view: matrix::mul(&view.view, &frame.model),
            tint: [1.0, 1.0, 1.0, style.opacity],
            point_size: style.point_size * frame.point_scale,
            aspect: view.aspect,
            fog_density: view.fog_density,
            linearize: if view.linearize { 1.0 } else { 0.0 },
        }
    }
}

use std::sync::Arc;
use winit::window::Window;

use aether_common::Color;
use aether_config::AetherConfig;
use aether_scene::{Camera, SceneContext};

use crate::gpu::{GpuContext, RendererError};
use crate::points::{PointBatch, PointsPipeline};

use super::helpers::clear_color;

/// Core rendering state: GPU context, the point pipeline, and one batch
/// per scene layer.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) points: PointsPipeline,
    pub(super) batches: Vec<PointBatch>,
    pub(super) camera: Camera,
    pub(super) fog_density: f32,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create the render state and upload every layer's cloud once.
    pub async fn new(
        window: Arc<Window>,
        scene: &SceneContext,
        config: &AetherConfig,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let points = PointsPipeline::new(&gpu.device, gpu.format());

        let batches: Vec<PointBatch> = scene
            .layers()
            .iter()
            .map(|layer| PointBatch::new(&gpu.device, &points, layer))
            .collect();
        tracing::info!("render state ready with {} point batches", batches.len());

        let background = Color::from_hex(&config.window.background).unwrap_or(Color::BLACK);
        let clear_color = clear_color(background, gpu.format().is_srgb());

        Ok(Self {
            gpu,
            points,
            batches,
            camera: Camera::from_config(&config.camera),
            fog_density: config.camera.fog_density as f32,
            clear_color,
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Current viewport aspect ratio.
    pub fn aspect(&self) -> f32 {
        self.gpu.size.aspect()
    }

    pub fn batches(&self) -> &[PointBatch] {
        &self.batches
    }
}

use aether_scene::FrameSnapshot;

use crate::gpu::RendererError;
use crate::points::{FrameView, PointUniforms};

use super::helpers::log_first_frame;
use super::state::RenderState;

impl RenderState {
    /// Render one frame: clear to the background, then draw every visible
    /// layer with this frame's transforms.
    pub fn render(&mut self, frame: &FrameSnapshot) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let aspect = self.aspect();
        let frame_view = FrameView {
            view: self.camera.view(),
            view_projection: self.camera.view_projection(aspect),
            aspect,
            fog_density: self.fog_density,
            linearize: self.gpu.format().is_srgb(),
        };

        for (batch, layer_frame) in self.batches.iter().zip(&frame.layers) {
            if layer_frame.visible {
                let uniforms = PointUniforms::for_layer(&frame_view, batch.style(), layer_frame);
                batch.update_uniforms(&self.gpu.queue, &uniforms);
            }
        }

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("aether frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("aether points pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.points.pipeline);
            for (batch, layer_frame) in self.batches.iter().zip(&frame.layers) {
                if layer_frame.visible {
                    batch.draw(&mut pass);
                }
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}

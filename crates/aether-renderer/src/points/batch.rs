use aether_scene::{CloudPoint, Layer, LayerKind};
use wgpu::util::DeviceExt;

use super::pipeline::{PointsPipeline, VERTICES_PER_POINT};
use super::uniforms::{LayerStyle, PointUniforms};

/// GPU resources for one scene layer.
///
/// The instance buffer is written once at creation; clouds never change
/// size. Only the uniform buffer is rewritten per frame.
pub struct PointBatch {
    kind: LayerKind,
    style: LayerStyle,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl PointBatch {
    pub fn new(device: &wgpu::Device, pipeline: &PointsPipeline, layer: &Layer) -> Self {
        let label = layer.kind().label();
        let points = layer.cloud().points();
        // wgpu rejects zero-sized vertex buffers; keep one zeroed instance.
        let placeholder = [CloudPoint {
            position: [0.0; 3],
            color: [0.0; 4],
        }];
        let contents = if points.is_empty() {
            &placeholder[..]
        } else {
            points
        };

        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} instances")),
            contents: bytemuck::cast_slice(contents),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} uniforms")),
            size: std::mem::size_of::<PointUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} bind group")),
            layout: &pipeline.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        tracing::debug!("uploaded {} {label} instances", points.len());

        Self {
            kind: layer.kind(),
            style: LayerStyle::from(layer),
            instance_buffer,
            instance_count: points.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn style(&self) -> &LayerStyle {
        &self.style
    }

    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }

    /// Upload this frame's uniforms.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &PointUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record the draw call. The pipeline must already be set on `pass`.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        pass.draw(0..VERTICES_PER_POINT, 0..self.instance_count);
    }
}

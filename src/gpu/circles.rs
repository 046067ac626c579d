//! Filled circles for nodes, glows and ripples.
//!
//! Each circle is a quad one pixel larger than its radius; the fragment
//! shader keeps the covered part and softens the one-pixel rim.

use std::ops::Range;

use super::{create_quad_pipeline, InstanceBuffer};
use crate::canvas::CircleInstance;

pub(super) const SHADER: &str = r#"
struct CircleIn {
    @location(0) center: vec2<f32>,
    @location(1) radius: f32,
    @location(2) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) offset: vec2<f32>,
    @location(1) color: vec4<f32>,
    @location(2) radius: f32,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    inst: CircleIn,
) -> VertexOutput {
    var out: VertexOutput;

    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(-1.0, 1.0),
        vec2<f32>(-1.0, 1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(1.0, 1.0),
    );
    let extent = max(inst.radius, 0.0) + 1.0;
    let offset = corners[vertex_index] * extent;

    out.clip_position = to_clip(inst.center + offset);
    out.offset = offset;
    out.color = inst.color;
    out.radius = inst.radius;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let coverage = clamp(in.radius + 0.5 - length(in.offset), 0.0, 1.0);
    if coverage <= 0.0 {
        discard;
    }
    return vec4<f32>(in.color.rgb, in.color.a * coverage);
}
"#;

const ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
    wgpu::VertexAttribute {
        offset: 0,
        shader_location: 0,
        format: wgpu::VertexFormat::Float32x2,
    },
    wgpu::VertexAttribute {
        offset: 8,
        shader_location: 1,
        format: wgpu::VertexFormat::Float32,
    },
    wgpu::VertexAttribute {
        offset: 16,
        shader_location: 2,
        format: wgpu::VertexFormat::Float32x4,
    },
];

pub(super) struct CircleRenderer {
    pipeline: wgpu::RenderPipeline,
    instances: InstanceBuffer,
}

impl CircleRenderer {
    pub fn new(
        device: &wgpu::Device,
        uniform_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
        blend: wgpu::BlendState,
    ) -> Self {
        let layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        };
        let pipeline = create_quad_pipeline(
            device,
            "Circle Pipeline",
            SHADER,
            uniform_layout,
            layout,
            surface_format,
            blend,
        );
        Self {
            pipeline,
            instances: InstanceBuffer::new(device, "Circle Instance Buffer"),
        }
    }

    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, circles: &[CircleInstance]) {
        self.instances.write(device, queue, bytemuck::cast_slice(circles));
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, range: Range<u32>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.instances.buffer.slice(..));
        pass.draw(0..6, range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::tests::validate_wgsl;
    use crate::gpu::COMMON_WGSL;

    #[test]
    fn test_circle_shader_is_valid() {
        let source = format!("{COMMON_WGSL}\n{SHADER}");
        validate_wgsl(&source).expect("circle WGSL should be valid");
    }

    #[test]
    fn test_attributes_match_instance_layout() {
        assert_eq!(std::mem::offset_of!(CircleInstance, radius) as u64, ATTRIBUTES[1].offset);
        assert_eq!(std::mem::offset_of!(CircleInstance, color) as u64, ATTRIBUTES[2].offset);
    }
}

//! Stroked segments between node positions.
//!
//! Each segment is one instance expanded to a six-vertex quad, `width`
//! pixels thick, perpendicular to the segment direction.

use std::ops::Range;

use super::{create_quad_pipeline, InstanceBuffer};
use crate::canvas::LineInstance;

pub(super) const SHADER: &str = r#"
struct LineIn {
    @location(0) from_pos: vec2<f32>,
    @location(1) to_pos: vec2<f32>,
    @location(2) color: vec4<f32>,
    @location(3) width: f32,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    inst: LineIn,
) -> VertexOutput {
    var out: VertexOutput;

    let delta = inst.to_pos - inst.from_pos;
    let len = length(delta);
    var dir = vec2<f32>(1.0, 0.0);
    if len > 0.0001 {
        dir = delta / len;
    }
    let perp = vec2<f32>(-dir.y, dir.x) * (inst.width * 0.5);

    var pos: vec2<f32>;
    switch vertex_index {
        case 0u: { pos = inst.from_pos - perp; }
        case 1u: { pos = inst.from_pos + perp; }
        case 2u: { pos = inst.to_pos - perp; }
        case 3u: { pos = inst.from_pos + perp; }
        case 4u: { pos = inst.to_pos - perp; }
        default: { pos = inst.to_pos + perp; }
    }

    out.clip_position = to_clip(pos);
    out.color = inst.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

const ATTRIBUTES: [wgpu::VertexAttribute; 4] = [
    wgpu::VertexAttribute {
        offset: 0,
        shader_location: 0,
        format: wgpu::VertexFormat::Float32x2,
    },
    wgpu::VertexAttribute {
        offset: 8,
        shader_location: 1,
        format: wgpu::VertexFormat::Float32x2,
    },
    wgpu::VertexAttribute {
        offset: 16,
        shader_location: 2,
        format: wgpu::VertexFormat::Float32x4,
    },
    wgpu::VertexAttribute {
        offset: 32,
        shader_location: 3,
        format: wgpu::VertexFormat::Float32,
    },
];

pub(super) struct LineRenderer {
    pipeline: wgpu::RenderPipeline,
    instances: InstanceBuffer,
}

impl LineRenderer {
    pub fn new(
        device: &wgpu::Device,
        uniform_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
        blend: wgpu::BlendState,
    ) -> Self {
        let layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        };
        let pipeline = create_quad_pipeline(
            device,
            "Line Pipeline",
            SHADER,
            uniform_layout,
            layout,
            surface_format,
            blend,
        );
        Self {
            pipeline,
            instances: InstanceBuffer::new(device, "Line Instance Buffer"),
        }
    }

    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, lines: &[LineInstance]) {
        self.instances.write(device, queue, bytemuck::cast_slice(lines));
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
    fn test_line_shader_is_valid() {
        let source = format!("{COMMON_WGSL}\n{SHADER}");
        validate_wgsl(&source).expect("line WGSL should be valid");
    }

    #[test]
    fn test_attributes_match_instance_layout() {
        let stride = std::mem::size_of::<LineInstance>() as u64;
        for attr in &ATTRIBUTES {
            assert!(attr.offset + attr.format.size() <= stride);
        }
        assert_eq!(std::mem::offset_of!(LineInstance, color) as u64, ATTRIBUTES[2].offset);
        assert_eq!(std::mem::offset_of!(LineInstance, width) as u64, ATTRIBUTES[3].offset);
    }
}

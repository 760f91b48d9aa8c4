//! Instanced circle and line pipelines.
//!
//! Both pipelines draw one six-vertex quad per instance in pixel space. The
//! vertex shader converts pixels to clip space using the viewport uniform
//! (origin top-left, y down).

use crate::canvas::{CircleInstance, LineInstance};

const CIRCLE_ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
    wgpu::VertexAttribute {
        offset: std::mem::offset_of!(CircleInstance, center) as wgpu::BufferAddress,
        shader_location: 0,
        format: wgpu::VertexFormat::Float32x2,
    },
    wgpu::VertexAttribute {
        offset: std::mem::offset_of!(CircleInstance, radius) as wgpu::BufferAddress,
        shader_location: 1,
        format: wgpu::VertexFormat::Float32,
    },
    wgpu::VertexAttribute {
        offset: std::mem::offset_of!(CircleInstance, color) as wgpu::BufferAddress,
        shader_location: 2,
        format: wgpu::VertexFormat::Float32x4,
    },
];

const LINE_ATTRIBUTES: [wgpu::VertexAttribute; 4] = [
    wgpu::VertexAttribute {
        offset: std::mem::offset_of!(LineInstance, from) as wgpu::BufferAddress,
        shader_location: 0,
        format: wgpu::VertexFormat::Float32x2,
    },
    wgpu::VertexAttribute {
        offset: std::mem::offset_of!(LineInstance, to) as wgpu::BufferAddress,
        shader_location: 1,
        format: wgpu::VertexFormat::Float32x2,
    },
    wgpu::VertexAttribute {
        offset: std::mem::offset_of!(LineInstance, color) as wgpu::BufferAddress,
        shader_location: 2,
        format: wgpu::VertexFormat::Float32x4,
    },
    wgpu::VertexAttribute {
        offset: std::mem::offset_of!(LineInstance, width) as wgpu::BufferAddress,
        shader_location: 3,
        format: wgpu::VertexFormat::Float32,
    },
];

pub(crate) fn circle_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<CircleInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &CIRCLE_ATTRIBUTES,
    }
}

pub(crate) fn line_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &LINE_ATTRIBUTES,
    }
}

/// Build an alpha-blended triangle-list pipeline for one shape shader.
pub(crate) fn create_shape_pipeline(
    device: &wgpu::Device,
    label: &str,
    shader_src: &str,
    bind_group_layout: &wgpu::BindGroupLayout,
    instance_layout: wgpu::VertexBufferLayout<'static>,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[instance_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

pub(crate) const CIRCLE_SHADER: &str = r#"
struct Viewport {
    size: vec2<f32>,
    padding: vec2<f32>,
};

@group(0) @binding(0) var<uniform> viewport: Viewport;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
    @location(1) local: vec2<f32>,
    @location(2) radius: f32,
};

fn to_clip(p: vec2<f32>) -> vec4<f32> {
    let ndc = vec2<f32>(
        p.x / viewport.size.x * 2.0 - 1.0,
        1.0 - p.y / viewport.size.y * 2.0,
    );
    return vec4<f32>(ndc, 0.0, 1.0);
}

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) center: vec2<f32>,
    @location(1) radius: f32,
    @location(2) color: vec4<f32>,
) -> VertexOutput {
    var quad = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    // One extra pixel of quad for the soft edge.
    let extent = radius + 1.0;
    let offset = quad[vertex_index] * extent;

    var out: VertexOutput;
    out.clip_position = to_clip(center + offset);
    out.color = color;
    out.local = offset;
    out.radius = radius;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let coverage = clamp(in.radius + 0.5 - length(in.local), 0.0, 1.0);
    if coverage <= 0.0 {
        discard;
    }
    return vec4<f32>(in.color.rgb, in.color.a * coverage);
}
"#;

pub(crate) const LINE_SHADER: &str = r#"
struct Viewport {
    size: vec2<f32>,
    padding: vec2<f32>,
};

@group(0) @binding(0) var<uniform> viewport: Viewport;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

fn to_clip(p: vec2<f32>) -> vec4<f32> {
    let ndc = vec2<f32>(
        p.x / viewport.size.x * 2.0 - 1.0,
        1.0 - p.y / viewport.size.y * 2.0,
    );
    return vec4<f32>(ndc, 0.0, 1.0);
}

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) start: vec2<f32>,
    @location(1) end: vec2<f32>,
    @location(2) color: vec4<f32>,
    @location(3) width: f32,
) -> VertexOutput {
    let seg = end - start;
    let len = length(seg);
    var dir = vec2<f32>(1.0, 0.0);
    if len > 0.0001 {
        dir = seg / len;
    }
    let normal = vec2<f32>(-dir.y, dir.x) * (width * 0.5);

    var pos: vec2<f32>;
    switch vertex_index {
        case 0u: { pos = start - normal; }
        case 1u: { pos = start + normal; }
        case 2u: { pos = end - normal; }
        case 3u: { pos = start + normal; }
        case 4u: { pos = end - normal; }
        default: { pos = end + normal; }
    }

    var out: VertexOutput;
    out.clip_position = to_clip(pos);
    out.color = color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_wgsl(source: &str) -> Result<(), String> {
        let module = naga::front::wgsl::parse_str(source)
            .map_err(|e| format!("WGSL parse error: {:?}", e))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("WGSL validation error: {:?}", e))?;

        Ok(())
    }

    #[test]
    fn test_circle_shader_validates() {
        validate_wgsl(CIRCLE_SHADER).expect("circle shader should be valid");
    }

    #[test]
    fn test_line_shader_validates() {
        validate_wgsl(LINE_SHADER).expect("line shader should be valid");
    }

    #[test]
    fn test_attribute_offsets() {
        assert_eq!(CIRCLE_ATTRIBUTES[2].offset, 16);
        assert_eq!(LINE_ATTRIBUTES[1].offset, 8);
        assert_eq!(LINE_ATTRIBUTES[2].offset, 16);
        assert_eq!(LINE_ATTRIBUTES[3].offset, 32);
    }
}

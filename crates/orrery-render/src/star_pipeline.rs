//! Pipeline for the star sprites: instanced camera-facing quads with
//! additive blending.
//!
//! Each star is one instance; the quad corners are generated from the
//! vertex index and expanded along the camera's right and up axes, so the
//! sprites always face the viewer. Depth testing is on but depth writes are
//! off, letting overlapping sprites accumulate light.

use crate::depth::DepthBuffer;
use crate::mesh::StarInstance;

/// Additive billboard pipeline.
pub struct StarPipeline {
    pub pipeline: wgpu::RenderPipeline,
}

impl StarPipeline {
    /// Create the pipeline.
    ///
    /// Bind groups: 0 frame uniform, 1 star field uniform, 2 sprite texture.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        frame_layout: &wgpu::BindGroupLayout,
        object_layout: &wgpu::BindGroupLayout,
        texture_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("star-shader"),
            source: wgpu::ShaderSource::Wgsl(STAR_SHADER_SOURCE.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("star-pipeline-layout"),
            bind_group_layouts: &[frame_layout, object_layout, texture_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("star-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[StarInstance::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DepthBuffer::FORMAT,
                // Sprites test against the planet but never occlude each
                // other.
                depth_write_enabled: false,
                depth_compare: DepthBuffer::COMPARE_FUNCTION,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState {
                        color: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::SrcAlpha,
                            dst_factor: wgpu::BlendFactor::One,
                            operation: wgpu::BlendOperation::Add,
                        },
                        alpha: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::Zero,
                            dst_factor: wgpu::BlendFactor::One,
                            operation: wgpu::BlendOperation::Add,
                        },
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        Self { pipeline }
    }

    /// Draw one star field as `instance_count` sprites.
    pub fn draw(
        &self,
        render_pass: &mut wgpu::RenderPass,
        frame_bind_group: &wgpu::BindGroup,
        field_bind_group: &wgpu::BindGroup,
        texture_bind_group: &wgpu::BindGroup,
        instance_buffer: &wgpu::Buffer,
        instance_count: u32,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, frame_bind_group, &[]);
        render_pass.set_bind_group(1, field_bind_group, &[]);
        render_pass.set_bind_group(2, texture_bind_group, &[]);
        render_pass.set_vertex_buffer(0, instance_buffer.slice(..));
        render_pass.draw(0..6, 0..instance_count);
    }
}

/// WGSL shader for the star sprites.
pub const STAR_SHADER_SOURCE: &str = r#"
struct FrameUniform {
    view_proj: mat4x4<f32>,
    camera_position: vec4<f32>,
    camera_right: vec4<f32>,
    camera_up: vec4<f32>,
    fog_color: vec4<f32>,
    fog_range: vec4<f32>,
    ambient: vec4<f32>,
    light_position: vec4<f32>,
    light_color: vec4<f32>,
};

struct StarFieldUniform {
    model: mat4x4<f32>,
    point_size: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: FrameUniform;
@group(1) @binding(0)
var<uniform> field: StarFieldUniform;
@group(2) @binding(0)
var t_sprite: texture_2d<f32>;
@group(2) @binding(1)
var s_sprite: sampler;

const CORNERS = array<vec2<f32>, 6>(
    vec2<f32>(-0.5, -0.5),
    vec2<f32>(0.5, -0.5),
    vec2<f32>(0.5, 0.5),
    vec2<f32>(0.5, 0.5),
    vec2<f32>(-0.5, 0.5),
    vec2<f32>(-0.5, -0.5),
);

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) world_position: vec3<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(3) star_position: vec3<f32>,
) -> VertexOutput {
    var out: VertexOutput;
    // Runtime indexing requires the array in a local var.
    var corners = CORNERS;
    let corner = corners[vertex_index];
    let center = (field.model * vec4<f32>(star_position, 1.0)).xyz;
    let size = field.point_size.x;
    let world = center
        + frame.camera_right.xyz * corner.x * size
        + frame.camera_up.xyz * corner.y * size;
    out.clip_position = frame.view_proj * vec4<f32>(world, 1.0);
    out.uv = vec2<f32>(corner.x + 0.5, 0.5 - corner.y);
    out.world_position = world;
    return out;
}

fn fog_factor(world_position: vec3<f32>) -> f32 {
    let dist = distance(frame.camera_position.xyz, world_position);
    let near = frame.fog_range.x;
    let far = frame.fog_range.y;
    return clamp((far - dist) / (far - near), 0.0, 1.0);
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let tex = textureSample(t_sprite, s_sprite, in.uv);
    // Additive blending scales by alpha, so fogging only tints the
    // visible sprite texels.
    let f = fog_factor(in.world_position);
    return vec4<f32>(mix(frame.fog_color.rgb, tex.rgb, f), tex.a);
}
"#;

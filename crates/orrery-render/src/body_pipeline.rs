//! Pipeline for the textured bodies (planet and moon): diffuse texture,
//! lambert shading from the ambient and point lights, and linear fog.

use crate::depth::DepthBuffer;
use crate::mesh::{GpuMesh, Vertex};

/// Textured lit pipeline.
pub struct BodyPipeline {
    pub pipeline: wgpu::RenderPipeline,
}

impl BodyPipeline {
    /// Create the pipeline.
    ///
    /// Bind groups: 0 frame uniform, 1 model uniform, 2 texture + sampler.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        frame_layout: &wgpu::BindGroupLayout,
        object_layout: &wgpu::BindGroupLayout,
        texture_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("body-shader"),
            source: wgpu::ShaderSource::Wgsl(BODY_SHADER_SOURCE.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("body-pipeline-layout"),
            bind_group_layouts: &[frame_layout, object_layout, texture_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("body-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DepthBuffer::FORMAT,
                depth_write_enabled: true,
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
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        Self { pipeline }
    }

    /// Draw one textured body.
    pub fn draw(
        &self,
        render_pass: &mut wgpu::RenderPass,
        frame_bind_group: &wgpu::BindGroup,
        object_bind_group: &wgpu::BindGroup,
        texture_bind_group: &wgpu::BindGroup,
        mesh: &GpuMesh,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, frame_bind_group, &[]);
        render_pass.set_bind_group(1, object_bind_group, &[]);
        render_pass.set_bind_group(2, texture_bind_group, &[]);
        mesh.draw(render_pass);
    }
}

/// WGSL shader for the textured bodies.
pub const BODY_SHADER_SOURCE: &str = r#"
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

struct ModelUniform {
    model: mat4x4<f32>,
    color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: FrameUniform;
@group(1) @binding(0)
var<uniform> object: ModelUniform;
@group(2) @binding(0)
var t_diffuse: texture_2d<f32>;
@group(2) @binding(1)
var s_diffuse: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = object.model * vec4<f32>(in.position, 1.0);
    out.world_position = world.xyz;
    // Model transforms are rigid, so the upper 3x3 rotates normals directly.
    out.world_normal = (object.model * vec4<f32>(in.normal, 0.0)).xyz;
    out.uv = in.uv;
    out.clip_position = frame.view_proj * world;
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
    let base = textureSample(t_diffuse, s_diffuse, in.uv).rgb;
    let normal = normalize(in.world_normal);
    let to_light = normalize(frame.light_position.xyz - in.world_position);
    let diffuse = max(dot(normal, to_light), 0.0) * frame.light_color.rgb;
    let lit = base * (frame.ambient.rgb + diffuse);
    let f = fog_factor(in.world_position);
    return vec4<f32>(mix(frame.fog_color.rgb, lit, f), 1.0);
}
"#;

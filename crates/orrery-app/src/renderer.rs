//! GPU resource assembly and per-frame drawing for the whole scene.
//!
//! Owns the meshes, textures, uniform buffers, and pipelines, and draws
//! one frame in three passes over a single render pass: textured bodies,
//! solid rings, then additive star sprites.

use glam::Vec3;
use wgpu::util::DeviceExt;

use orrery_config::Config;
use orrery_render::{
    BodyPipeline, DepthBuffer, FrameError, FrameUniform, GpuContext, GpuMesh, ModelUniform,
    RingPipeline, SceneTexture, StarFieldUniform, StarInstance, StarPipeline,
    texture::{linear_sampler, texture_bind_group_layout},
    uniforms::{billboard_axes, frame_bind_group_layout, object_bind_group_layout},
};
use orrery_scene::{
    OrbitCamera, Scene,
    bodies::{MOON_TEXTURE, PLANET_TEXTURE},
};

/// A textured body: mesh, texture, and its model uniform.
struct BodyResources {
    mesh: GpuMesh,
    texture: SceneTexture,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
}

/// A ring: mesh and its model uniform (which carries the color).
struct RingResources {
    mesh: GpuMesh,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
}

/// One star field: instances, sprite texture, and the field uniform.
struct StarFieldResources {
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    texture: SceneTexture,
}

/// All GPU state needed to draw the scene.
pub struct SceneRenderer {
    depth: DepthBuffer,
    body_pipeline: BodyPipeline,
    ring_pipeline: RingPipeline,
    star_pipeline: StarPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    planet: BodyResources,
    moon: BodyResources,
    rings: Vec<RingResources>,
    star_fields: Vec<StarFieldResources>,
}

impl SceneRenderer {
    /// Upload every scene resource and build the pipelines.
    pub fn new(gpu: &GpuContext, scene: &Scene, config: &Config) -> Self {
        let device = &gpu.device;
        let queue = &gpu.queue;
        let asset_dir = &config.scene.asset_dir;

        let frame_layout = frame_bind_group_layout(device);
        let object_layout = object_bind_group_layout(device);
        let texture_layout = texture_bind_group_layout(device);
        let sampler = linear_sampler(device);

        let body_pipeline = BodyPipeline::new(
            device,
            gpu.surface_format,
            &frame_layout,
            &object_layout,
            &texture_layout,
        );
        let ring_pipeline =
            RingPipeline::new(device, gpu.surface_format, &frame_layout, &object_layout);
        let star_pipeline = StarPipeline::new(
            device,
            gpu.surface_format,
            &frame_layout,
            &object_layout,
            &texture_layout,
        );

        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame-uniform"),
            size: FrameUniform::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame-bind-group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let make_model = |label: &str| {
            let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: ModelUniform::SIZE,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &object_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
            (buffer, bind_group)
        };

        let (planet_buffer, planet_bind_group) = make_model("planet-model");
        let planet = BodyResources {
            mesh: GpuMesh::upload(device, "planet", &scene.planet.mesh()),
            texture: SceneTexture::load(
                device,
                queue,
                &texture_layout,
                &sampler,
                &asset_dir.join(PLANET_TEXTURE),
            ),
            model_buffer: planet_buffer,
            model_bind_group: planet_bind_group,
        };

        let (moon_buffer, moon_bind_group) = make_model("moon-model");
        let moon = BodyResources {
            mesh: GpuMesh::upload(device, "moon", &scene.moon_group.moon.mesh()),
            texture: SceneTexture::load(
                device,
                queue,
                &texture_layout,
                &sampler,
                &asset_dir.join(MOON_TEXTURE),
            ),
            model_buffer: moon_buffer,
            model_bind_group: moon_bind_group,
        };

        let rings = scene
            .rings
            .iter()
            .enumerate()
            .map(|(i, ring)| {
                let (model_buffer, model_bind_group) = make_model(&format!("ring-{i}-model"));
                RingResources {
                    mesh: GpuMesh::upload(device, &format!("ring-{i}"), &ring.mesh()),
                    model_buffer,
                    model_bind_group,
                }
            })
            .collect();

        let star_fields = scene
            .stars
            .fields
            .iter()
            .map(|field| {
                let instances: Vec<StarInstance> = field
                    .points
                    .iter()
                    .map(|p| StarInstance {
                        position: p.to_array(),
                    })
                    .collect();
                let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("stars-{}", field.sprite)),
                    contents: bytemuck::cast_slice(&instances),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some(&format!("stars-{}-uniform", field.sprite)),
                    size: StarFieldUniform::SIZE,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("stars-{}-bind-group", field.sprite)),
                    layout: &object_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                StarFieldResources {
                    instance_buffer,
                    instance_count: instances.len() as u32,
                    uniform_buffer,
                    uniform_bind_group,
                    texture: SceneTexture::load(
                        device,
                        queue,
                        &texture_layout,
                        &sampler,
                        &asset_dir.join(field.sprite),
                    ),
                }
            })
            .collect();

        let depth = DepthBuffer::new(device, gpu.surface_config.width, gpu.surface_config.height);

        tracing::info!(
            stars = scene.stars.total_points(),
            "Scene resources uploaded"
        );

        Self {
            depth,
            body_pipeline,
            ring_pipeline,
            star_pipeline,
            frame_buffer,
            frame_bind_group,
            planet,
            moon,
            rings,
            star_fields,
        }
    }

    /// Resize the depth buffer to match the surface.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth.resize(device, width.max(1), height.max(1));
    }

    /// Write this frame's uniforms and draw the scene.
    pub fn render(
        &mut self,
        gpu: &GpuContext,
        scene: &Scene,
        camera: &OrbitCamera,
    ) -> Result<(), FrameError> {
        let queue = &gpu.queue;

        queue.write_buffer(
            &self.frame_buffer,
            0,
            bytemuck::bytes_of(&build_frame_uniform(scene, camera)),
        );
        queue.write_buffer(
            &self.planet.model_buffer,
            0,
            bytemuck::bytes_of(&ModelUniform::new(scene.planet.model_matrix(), [1.0; 3])),
        );
        queue.write_buffer(
            &self.moon.model_buffer,
            0,
            bytemuck::bytes_of(&ModelUniform::new(
                scene.moon_group.moon_model_matrix(),
                [1.0; 3],
            )),
        );
        for (ring, resources) in scene.rings.iter().zip(&self.rings) {
            queue.write_buffer(
                &resources.model_buffer,
                0,
                bytemuck::bytes_of(&ModelUniform::new(ring.model_matrix(), ring.color)),
            );
        }
        let star_model = scene.stars.model_matrix();
        for (field, resources) in scene.stars.fields.iter().zip(&self.star_fields) {
            queue.write_buffer(
                &resources.uniform_buffer,
                0,
                bytemuck::bytes_of(&StarFieldUniform::new(star_model, field.point_size)),
            );
        }

        let frame = gpu.acquire_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene-encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(DepthBuffer::CLEAR_VALUE),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            self.body_pipeline.draw(
                &mut pass,
                &self.frame_bind_group,
                &self.planet.model_bind_group,
                &self.planet.texture.bind_group,
                &self.planet.mesh,
            );
            self.body_pipeline.draw(
                &mut pass,
                &self.frame_bind_group,
                &self.moon.model_bind_group,
                &self.moon.texture.bind_group,
                &self.moon.mesh,
            );
            for ring in &self.rings {
                self.ring_pipeline.draw(
                    &mut pass,
                    &self.frame_bind_group,
                    &ring.model_bind_group,
                    &ring.mesh,
                );
            }
            // Additive sprites last: they depth-test against the bodies but
            // never write depth.
            for field in &self.star_fields {
                self.star_pipeline.draw(
                    &mut pass,
                    &self.frame_bind_group,
                    &field.uniform_bind_group,
                    &field.texture.bind_group,
                    &field.instance_buffer,
                    field.instance_count,
                );
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Assemble the per-frame uniform from the scene and camera state.
fn build_frame_uniform(scene: &Scene, camera: &OrbitCamera) -> FrameUniform {
    let view = camera.view_matrix();
    let (right, up) = billboard_axes(view);

    FrameUniform {
        view_proj: camera.view_projection_matrix().to_cols_array(),
        camera_position: point(camera.position()),
        camera_right: point(right),
        camera_up: point(up),
        fog_color: color(scene.fog.color),
        fog_range: [scene.fog.near, scene.fog.far, 0.0, 0.0],
        ambient: color(scene.ambient),
        light_position: point(scene.point_light.position),
        light_color: color(scene.point_light.color),
    }
}

fn point(v: Vec3) -> [f32; 4] {
    [v.x, v.y, v.z, 1.0]
}

fn color(c: [f32; 3]) -> [f32; 4] {
    [c[0], c[1], c[2], 1.0]
}

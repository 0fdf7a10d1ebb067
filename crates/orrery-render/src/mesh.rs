//! Mesh upload: interleaves generated geometry into GPU vertex and index
//! buffers.

use bytemuck::{Pod, Zeroable};
use orrery_scene::MeshData;
use wgpu::util::DeviceExt;

/// Interleaved vertex with position, normal, and UV coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    /// Vertex buffer layout for this vertex type.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        use wgpu::{VertexAttribute, VertexFormat};

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: VertexFormat::Float32x3,
                },
                VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x3,
                },
                VertexAttribute {
                    offset: (std::mem::size_of::<[f32; 3]>() * 2) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Per-instance data for one star sprite: its position within the group.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StarInstance {
    pub position: [f32; 3],
}

impl StarInstance {
    /// Instance buffer layout: one position per sprite.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<StarInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 3,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }
}

/// An uploaded mesh ready for indexed drawing.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    /// Interleave and upload generated geometry.
    pub fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertices = interleave(mesh);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-vertices")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-indices")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    /// Bind and draw the whole mesh.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Interleave parallel attribute arrays into [`Vertex`] records.
fn interleave(mesh: &MeshData) -> Vec<Vertex> {
    mesh.positions
        .iter()
        .zip(&mesh.normals)
        .zip(&mesh.uvs)
        .map(|((position, normal), uv)| Vertex {
            position: *position,
            normal: *normal,
            uv: *uv,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_scene::mesh::uv_sphere;

    #[test]
    fn test_vertex_layout_stride_and_attributes() {
        let layout = Vertex::layout();
        // position (f32x3) + normal (f32x3) + uv (f32x2) = 32 bytes
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 3);
    }

    #[test]
    fn test_star_instance_layout_steps_per_instance() {
        let layout = StarInstance::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
    }

    #[test]
    fn test_interleave_preserves_vertex_count() {
        let sphere = uv_sphere(100.0, 8, 8);
        let vertices = interleave(&sphere);
        assert_eq!(vertices.len(), sphere.vertex_count());
    }

    #[test]
    fn test_interleave_keeps_attributes_paired() {
        let sphere = uv_sphere(100.0, 4, 4);
        let vertices = interleave(&sphere);
        for (i, v) in vertices.iter().enumerate() {
            assert_eq!(v.position, sphere.positions[i]);
            assert_eq!(v.normal, sphere.normals[i]);
            assert_eq!(v.uv, sphere.uvs[i]);
        }
    }
}

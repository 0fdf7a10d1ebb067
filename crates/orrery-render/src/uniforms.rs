//! GPU uniform structs shared by the scene pipelines.
//!
//! All structs are `#[repr(C)]` with explicit vec4 padding so the Rust
//! layout matches the WGSL uniform layout field for field.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Per-frame uniform (group 0): camera, fog, and lights.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniform {
    /// Combined view-projection matrix.
    pub view_proj: [f32; 16],
    /// Camera world position (xyz, w unused).
    pub camera_position: [f32; 4],
    /// Camera right axis in world space (xyz), for billboards.
    pub camera_right: [f32; 4],
    /// Camera up axis in world space (xyz), for billboards.
    pub camera_up: [f32; 4],
    /// Fog color (rgb, w unused).
    pub fog_color: [f32; 4],
    /// Fog near and far distances (x, y; zw unused).
    pub fog_range: [f32; 4],
    /// Ambient light color (rgb, w unused).
    pub ambient: [f32; 4],
    /// Point light world position (xyz, w unused).
    pub light_position: [f32; 4],
    /// Point light color (rgb, w unused).
    pub light_color: [f32; 4],
}

impl FrameUniform {
    /// Byte size, used as the bind group layout's minimum binding size.
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;
}

/// Per-object uniform (group 1): model transform and solid color.
///
/// The textured body pipeline ignores `color`; the ring pipeline ignores
/// the mesh UVs and draws with `color`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [f32; 16],
    /// Solid color (rgb, w unused).
    pub color: [f32; 4],
}

impl ModelUniform {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    /// Build from a model matrix and color.
    pub fn new(model: Mat4, color: [f32; 3]) -> Self {
        Self {
            model: model.to_cols_array(),
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

/// Per-star-field uniform (group 1 of the star pipeline): the shared group
/// transform and the sprite size.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StarFieldUniform {
    pub model: [f32; 16],
    /// World-space sprite size (x; yzw unused).
    pub point_size: [f32; 4],
}

impl StarFieldUniform {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    /// Build from the group transform and sprite size.
    pub fn new(model: Mat4, point_size: f32) -> Self {
        Self {
            model: model.to_cols_array(),
            point_size: [point_size, 0.0, 0.0, 0.0],
        }
    }
}

/// Bind group layout for [`FrameUniform`] (group 0 of every pipeline).
pub fn frame_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("frame-bind-group-layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: std::num::NonZeroU64::new(FrameUniform::SIZE),
            },
            count: None,
        }],
    })
}

/// Bind group layout for per-object uniforms (group 1 of every pipeline).
/// [`ModelUniform`] and [`StarFieldUniform`] share the same size.
pub fn object_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("object-bind-group-layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: std::num::NonZeroU64::new(ModelUniform::SIZE),
            },
            count: None,
        }],
    })
}

/// Extract the camera right and up axes from a view matrix. These are the
/// first two rows of the rotation part, which billboards expand along.
pub fn billboard_axes(view: Mat4) -> (Vec3, Vec3) {
    let cols = view.to_cols_array_2d();
    let right = Vec3::new(cols[0][0], cols[1][0], cols[2][0]);
    let up = Vec3::new(cols[0][1], cols[1][1], cols[2][1]);
    (right, up)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_uniform_sizes_are_16_byte_aligned() {
        assert_eq!(FrameUniform::SIZE % 16, 0);
        assert_eq!(ModelUniform::SIZE % 16, 0);
        assert_eq!(StarFieldUniform::SIZE % 16, 0);
    }

    #[test]
    fn test_object_uniforms_share_one_layout() {
        // Both kinds bind through object_bind_group_layout, so their sizes
        // must agree.
        assert_eq!(ModelUniform::SIZE, StarFieldUniform::SIZE);
    }

    #[test]
    fn test_frame_uniform_size() {
        // mat4 + 8 vec4 fields
        assert_eq!(FrameUniform::SIZE, 64 + 8 * 16);
    }

    #[test]
    fn test_model_uniform_round_trip() {
        let model = Mat4::from_rotation_y(1.25);
        let uniform = ModelUniform::new(model, [0.5, 0.25, 1.0]);
        assert_eq!(Mat4::from_cols_array(&uniform.model), model);
        assert_eq!(uniform.color, [0.5, 0.25, 1.0, 1.0]);
    }

    #[test]
    fn test_billboard_axes_identity_view() {
        let (right, up) = billboard_axes(Mat4::IDENTITY);
        assert_eq!(right, Vec3::X);
        assert_eq!(up, Vec3::Y);
    }

    #[test]
    fn test_billboard_axes_face_the_camera() {
        use orrery_scene::OrbitCamera;

        let mut camera = OrbitCamera::new(1.0);
        camera.current = Vec2::new(1234.0, -567.0);
        let view = camera.view_matrix();
        let (right, up) = billboard_axes(view);
        let to_camera = camera.position().normalize();

        // Both axes must be unit length and perpendicular to the view
        // direction, so expanded quads face the camera.
        assert!((right.length() - 1.0).abs() < 1e-4);
        assert!((up.length() - 1.0).abs() < 1e-4);
        assert!(right.dot(to_camera).abs() < 1e-4);
        assert!(up.dot(to_camera).abs() < 1e-4);
        assert!(right.dot(up).abs() < 1e-4);
    }
}

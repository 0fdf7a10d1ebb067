//! Texture loading and bind groups.
//!
//! Textures are decoded with the `image` crate and uploaded as
//! `Rgba8UnormSrgb`. A missing or unreadable file logs a warning and falls
//! back to a 1x1 white texture so the scene still renders.

use std::path::Path;

/// A GPU texture with its view and a ready-to-bind group.
pub struct SceneTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub bind_group: wgpu::BindGroup,
    pub dimensions: (u32, u32),
}

/// Bind group layout shared by every texture: a filterable 2D texture at
/// binding 0 and its sampler at binding 1.
pub fn texture_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("texture-bind-group-layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// A linear sampler with repeat addressing.
pub fn linear_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("sampler-linear"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}

impl SceneTexture {
    /// Load a texture from disk, falling back to 1x1 white on failure.
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        path: &Path,
    ) -> Self {
        let (pixels, width, height) = match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (w, h) = rgba.dimensions();
                (rgba.into_raw(), w, h)
            }
            Err(err) => {
                log::warn!("Failed to load texture {}: {err}", path.display());
                (vec![255u8; 4], 1, 1)
            }
        };

        Self::from_rgba(
            device,
            queue,
            layout,
            sampler,
            &path.display().to_string(),
            &pixels,
            width,
            height,
        )
    }

    /// Upload raw RGBA pixels as an sRGB texture.
    #[allow(clippy::too_many_arguments)]
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        label: &str,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: None,
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        Self {
            texture,
            view,
            bind_group,
            dimensions: (width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_device() -> Option<(wgpu::Device, wgpu::Queue)> {
        pollster::block_on(async {
            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
                backends: wgpu::Backends::all(),
                ..Default::default()
            });
            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::default(),
                    force_fallback_adapter: false,
                    compatible_surface: None,
                })
                .await
                .ok()?;
            adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
                .ok()
        })
    }

    #[test]
    fn test_missing_file_falls_back_to_white_pixel() {
        let Some((device, queue)) = create_test_device() else {
            return;
        };
        let layout = texture_bind_group_layout(&device);
        let sampler = linear_sampler(&device);
        let texture = SceneTexture::load(
            &device,
            &queue,
            &layout,
            &sampler,
            Path::new("does/not/exist.jpg"),
        );
        assert_eq!(texture.dimensions, (1, 1));
    }

    #[test]
    fn test_from_rgba_dimensions() {
        let Some((device, queue)) = create_test_device() else {
            return;
        };
        let layout = texture_bind_group_layout(&device);
        let sampler = linear_sampler(&device);
        let pixels = vec![128u8; 4 * 4 * 2];
        let texture =
            SceneTexture::from_rgba(&device, &queue, &layout, &sampler, "test", &pixels, 4, 2);
        assert_eq!(texture.dimensions, (4, 2));
    }
}

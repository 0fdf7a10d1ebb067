//! Reverse-Z depth buffer.
//!
//! The near plane maps to depth 1.0 and the far plane to 0.0, which spends
//! float precision on the distant stars instead of wasting it up close.

/// Depth buffer sized to the surface, recreated on resize.
pub struct DepthBuffer {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl DepthBuffer {
    /// 32-bit float depth format.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Reverse-Z clear value: 0.0 is the far plane.
    pub const CLEAR_VALUE: f32 = 0.0;

    /// Reverse-Z comparison: closer fragments have higher depth values.
    pub const COMPARE_FUNCTION: wgpu::CompareFunction = wgpu::CompareFunction::GreaterEqual;

    /// Create a depth buffer with the given dimensions.
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth-buffer"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            width,
            height,
        }
    }

    /// Resize the depth buffer. No-op when the dimensions are unchanged.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        *self = Self::new(device, width, height);
    }

    /// Current width in texels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current height in texels.
    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_device() -> Option<wgpu::Device> {
        // Returns None on headless CI without an adapter.
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
            let (device, _queue) = adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
                .ok()?;
            Some(device)
        })
    }

    #[test]
    fn test_depth_format_is_depth32float() {
        assert_eq!(DepthBuffer::FORMAT, wgpu::TextureFormat::Depth32Float);
    }

    #[test]
    fn test_reverse_z_clear_value_is_zero() {
        assert_eq!(DepthBuffer::CLEAR_VALUE, 0.0);
    }

    #[test]
    fn test_depth_compare_is_greater_equal() {
        assert_eq!(
            DepthBuffer::COMPARE_FUNCTION,
            wgpu::CompareFunction::GreaterEqual
        );
    }

    #[test]
    fn test_resize_updates_dimensions() {
        let Some(device) = create_test_device() else {
            return;
        };
        let mut depth = DepthBuffer::new(&device, 800, 600);
        depth.resize(&device, 1920, 1080);
        assert_eq!(depth.width(), 1920);
        assert_eq!(depth.height(), 1080);
    }

    #[test]
    fn test_resize_noop_when_unchanged() {
        let Some(device) = create_test_device() else {
            return;
        };
        let mut depth = DepthBuffer::new(&device, 800, 600);
        depth.resize(&device, 800, 600);
        assert_eq!(depth.width(), 800);
        assert_eq!(depth.height(), 600);
    }
}

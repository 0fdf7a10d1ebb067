//! GPU device initialization and surface management.

use std::sync::Arc;
use winit::window::Window;

/// Error type for GPU initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found")]
    NoAdapter,

    /// Failed to request GPU device.
    #[error("failed to request GPU device: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),

    /// Failed to create surface.
    #[error("failed to create surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
}

/// Error type for per-frame surface acquisition.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Surface was lost and could not be recovered.
    #[error("surface lost")]
    SurfaceLost,

    /// GPU ran out of memory.
    #[error("out of memory")]
    OutOfMemory,

    /// Frame acquisition timed out (recoverable, skip the frame).
    #[error("timeout")]
    Timeout,
}

/// Owns the GPU device, queue, and window surface.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub surface_format: wgpu::TextureFormat,
}

impl GpuContext {
    /// Initialize the GPU asynchronously from a window handle.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, GpuError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let size = window.inner_size();
        let surface = instance.create_surface(window)?;

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(_) => return Err(GpuError::NoAdapter),
        };

        let info = adapter.get_info();
        log::info!(
            "Selected GPU: {} ({:?}, {:?})",
            info.name,
            info.backend,
            info.device_type
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("orrery-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = select_preferred_srgb_format(&surface_caps.formats);
        let present_mode = select_present_mode(&surface_caps.present_modes, vsync);
        log::info!("Surface format {surface_format:?}, present mode {present_mode:?}");

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            surface_format,
        })
    }

    /// Reconfigure the surface after a window resize.
    /// Dimensions are clamped to at least 1 to keep minimized windows valid.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_config.width = width.max(1);
        self.surface_config.height = height.max(1);
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Acquire the current surface texture, reconfiguring once on a lost or
    /// outdated surface before giving up.
    pub fn acquire_frame(&self) -> Result<wgpu::SurfaceTexture, FrameError> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                self.surface
                    .get_current_texture()
                    .map_err(|_| FrameError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(FrameError::OutOfMemory),
            Err(wgpu::SurfaceError::Timeout) => Err(FrameError::Timeout),
            Err(wgpu::SurfaceError::Other) => {
                log::error!("Unknown surface error");
                Err(FrameError::SurfaceLost)
            }
        }
    }

    /// Current surface aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        self.surface_config.width as f32 / self.surface_config.height as f32
    }
}

/// Initialize the GPU synchronously using `pollster`.
pub fn init_gpu_blocking(window: Arc<Window>, vsync: bool) -> Result<GpuContext, GpuError> {
    pollster::block_on(GpuContext::new(window, vsync))
}

/// Select the preferred surface format, preferring sRGB.
fn select_preferred_srgb_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    if formats.contains(&wgpu::TextureFormat::Bgra8UnormSrgb) {
        wgpu::TextureFormat::Bgra8UnormSrgb
    } else if formats.contains(&wgpu::TextureFormat::Rgba8UnormSrgb) {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(formats[0])
    }
}

/// Pick a present mode: Fifo when vsync is requested (always available),
/// otherwise the lowest-latency mode the surface offers.
fn select_present_mode(available: &[wgpu::PresentMode], vsync: bool) -> wgpu::PresentMode {
    if vsync {
        return wgpu::PresentMode::Fifo;
    }
    for candidate in [wgpu::PresentMode::Mailbox, wgpu::PresentMode::Immediate] {
        if available.contains(&candidate) {
            return candidate;
        }
    }
    wgpu::PresentMode::Fifo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_selection_prefers_bgra_srgb() {
        let formats = [
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        assert_eq!(
            select_preferred_srgb_format(&formats),
            wgpu::TextureFormat::Bgra8UnormSrgb
        );
    }

    #[test]
    fn test_format_selection_fallback_rgba_srgb() {
        let formats = [
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        assert_eq!(
            select_preferred_srgb_format(&formats),
            wgpu::TextureFormat::Rgba8UnormSrgb
        );
    }

    #[test]
    fn test_format_selection_fallback_first() {
        let formats = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Rgba8Unorm,
        ];
        assert_eq!(
            select_preferred_srgb_format(&formats),
            wgpu::TextureFormat::Bgra8Unorm
        );
    }

    #[test]
    fn test_vsync_selects_fifo() {
        let available = [wgpu::PresentMode::Mailbox, wgpu::PresentMode::Fifo];
        assert_eq!(
            select_present_mode(&available, true),
            wgpu::PresentMode::Fifo
        );
    }

    #[test]
    fn test_no_vsync_prefers_mailbox() {
        let available = [
            wgpu::PresentMode::Fifo,
            wgpu::PresentMode::Mailbox,
            wgpu::PresentMode::Immediate,
        ];
        assert_eq!(
            select_present_mode(&available, false),
            wgpu::PresentMode::Mailbox
        );
    }

    #[test]
    fn test_no_vsync_falls_back_to_fifo() {
        let available = [wgpu::PresentMode::Fifo];
        assert_eq!(
            select_present_mode(&available, false),
            wgpu::PresentMode::Fifo
        );
    }

    #[test]
    fn test_resize_clamps_zero_dimensions() {
        let mut surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: wgpu::TextureFormat::Bgra8UnormSrgb,
            width: 800,
            height: 600,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        let (width, height) = (0u32, 0u32);
        surface_config.width = width.max(1);
        surface_config.height = height.max(1);

        assert_eq!(surface_config.width, 1);
        assert_eq!(surface_config.height, 1);
    }
}

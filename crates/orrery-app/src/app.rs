//! Window creation and event handling via winit.
//!
//! [`App`] implements winit's [`ApplicationHandler`]: it creates the window
//! and GPU context on resume, routes pointer events to the orbit controller,
//! and advances and draws the scene on every redraw.

use std::sync::Arc;

use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use orrery_config::Config;
use orrery_input::OrbitController;
use orrery_render::{FrameError, GpuContext, init_gpu_blocking};
use orrery_scene::{OrbitCamera, Scene};

use crate::renderer::SceneRenderer;

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// Application state: scene, camera, input, and (once resumed) the window
/// and GPU resources.
pub struct App {
    config: Config,
    scene: Scene,
    camera: OrbitCamera,
    controller: OrbitController,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<SceneRenderer>,
}

impl App {
    /// Build the scene and camera from the config. GPU state is created
    /// later, on [`ApplicationHandler::resumed`].
    pub fn new(config: Config) -> Self {
        let scene = Scene::new(config.scene.star_seed);
        let aspect = config.window.width as f32 / config.window.height.max(1) as f32;
        let camera = OrbitCamera::new(aspect);
        let controller = OrbitController::new(
            config.window.width as f32,
            config.window.height as f32,
        );

        Self {
            config,
            scene,
            camera,
            controller,
            window: None,
            gpu: None,
            renderer: None,
        }
    }

    fn handle_resize(&mut self, width: u32, height: u32) {
        self.camera
            .set_aspect_ratio(width.max(1) as f32, height.max(1) as f32);
        self.controller
            .set_viewport(width.max(1) as f32, height.max(1) as f32);
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(width, height);
            if let Some(renderer) = &mut self.renderer {
                renderer.resize(&gpu.device, width, height);
            }
        }
        info!("Window resized to {width}x{height}");
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = window_attributes_from_config(&self.config);
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match init_gpu_blocking(window.clone(), self.config.window.vsync) {
            Ok(gpu) => {
                self.camera.set_aspect_ratio(
                    gpu.surface_config.width as f32,
                    gpu.surface_config.height as f32,
                );
                self.controller.set_viewport(
                    gpu.surface_config.width as f32,
                    gpu.surface_config.height as f32,
                );
                self.renderer = Some(SceneRenderer::new(&gpu, &self.scene, &self.config));
                self.gpu = Some(gpu);
            }
            Err(e) => {
                error!("GPU initialization failed: {e}");
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                self.handle_resize(new_size.width, new_size.height);
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.handle_resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.scene.advance_frame();
                self.camera.update();

                if let (Some(gpu), Some(renderer)) = (&self.gpu, &mut self.renderer) {
                    match renderer.render(gpu, &self.scene, &self.camera) {
                        Ok(()) => {}
                        Err(FrameError::SurfaceLost) => {
                            let (w, h) = (gpu.surface_config.width, gpu.surface_config.height);
                            if let Some(gpu) = &mut self.gpu {
                                gpu.resize(w, h);
                            }
                        }
                        Err(FrameError::OutOfMemory) => {
                            error!("GPU out of memory");
                            event_loop.exit();
                        }
                        Err(FrameError::Timeout) => {
                            warn!("Surface timeout, skipping frame");
                        }
                    }
                }

                // Continuous animation: immediately schedule the next frame.
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            event => {
                self.controller.handle_event(&event, &mut self.camera);
            }
        }
    }
}

/// Creates the event loop and runs the viewer until the window closes.
pub fn run(config: Config) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop failed");
}

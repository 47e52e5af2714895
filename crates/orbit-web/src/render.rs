//! Browser [`RenderHost`]: a WebGPU canvas surface, the animation-frame loop
//! and the window listeners of one mounted background.

use crate::dom;
use crate::events::{Listener, Listeners};
use crate::frame::FrameLoop;
use orbit_core::gpu::SurfaceRenderer;
use orbit_core::{Camera, FieldError, PointField, RenderHost, Viewport};
use web_sys as web;

/// Transparent so the page shows through the canvas.
pub const WEB_CLEAR: wgpu::Color = wgpu::Color::TRANSPARENT;

/// Create a WebGPU surface on `canvas` and bring up a device for it.
pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> anyhow::Result<SurfaceRenderer> {
    let instance = wgpu::Instance::default();
    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(FieldError::from)?;
    let size = (canvas.width(), canvas.height());
    Ok(SurfaceRenderer::new(&instance, surface, size, WEB_CLEAR).await?)
}

pub struct WebHost {
    canvas: web::HtmlCanvasElement,
    gpu: Option<SurfaceRenderer>,
    frames: FrameLoop,
    listeners: Listeners,
}

impl WebHost {
    pub fn new(canvas: web::HtmlCanvasElement, gpu: SurfaceRenderer, frames: FrameLoop) -> Self {
        Self {
            canvas,
            gpu: Some(gpu),
            frames,
            listeners: Listeners::default(),
        }
    }

    /// Register a listener that is detached with the rest at teardown.
    pub fn listen(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }
}

impl RenderHost for WebHost {
    fn present(&mut self, field: &PointField, camera: &Camera) -> Result<(), FieldError> {
        match &mut self.gpu {
            Some(gpu) => gpu.present(field, camera),
            None => Err(FieldError::TornDown),
        }
    }

    fn resize(&mut self, viewport: &Viewport) {
        dom::sync_canvas_backing_size(&self.canvas, viewport);
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(viewport.physical_size());
        }
    }

    fn cancel_frame(&mut self) {
        self.frames.cancel();
    }

    fn detach_listeners(&mut self) {
        self.listeners.clear();
    }

    fn release_buffers(&mut self) {
        if let Some(mut gpu) = self.gpu.take() {
            gpu.destroy();
        }
        self.canvas.remove();
    }
}

impl Drop for WebHost {
    // Covers a host dropped by a failed mount; a no-op after a normal teardown.
    fn drop(&mut self) {
        self.cancel_frame();
        self.detach_listeners();
        self.release_buffers();
    }
}

//! Desktop preview of the point-field background.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use orbit_core::gpu::SurfaceRenderer;
use orbit_core::{
    Camera, FieldError, FieldParams, FrameInput, Orbit, PointField, PointerState, RenderHost,
    Viewport, NATIVE_CLEAR,
};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

struct NativeHost {
    window: Arc<Window>,
    gpu: Option<SurfaceRenderer>,
    running: bool,
    accepting_input: bool,
}

impl NativeHost {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(Arc::clone(&window))
            .map_err(FieldError::from)?;
        let [r, g, b, a] = NATIVE_CLEAR;
        let gpu = SurfaceRenderer::new(
            &instance,
            surface,
            surface_size(window.inner_size()),
            wgpu::Color { r, g, b, a },
        )
        .await
        .context("GPU init")?;
        Ok(Self {
            window,
            gpu: Some(gpu),
            running: true,
            accepting_input: true,
        })
    }
}

impl RenderHost for NativeHost {
    fn present(&mut self, field: &PointField, camera: &Camera) -> Result<(), FieldError> {
        match &mut self.gpu {
            Some(gpu) => gpu.present(field, camera),
            None => Err(FieldError::TornDown),
        }
    }

    // The swapchain tracks the window's physical size; the viewport's pixel
    // ratio clamp only applies to the web backing store.
    fn resize(&mut self, _viewport: &Viewport) {
        let size = surface_size(self.window.inner_size());
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(size);
        }
    }

    fn cancel_frame(&mut self) {
        self.running = false;
    }

    fn detach_listeners(&mut self) {
        self.accepting_input = false;
    }

    fn release_buffers(&mut self) {
        if let Some(mut gpu) = self.gpu.take() {
            gpu.destroy();
        }
    }
}

/// Swapchain size for a window, at least one pixel per axis.
fn surface_size(size: PhysicalSize<u32>) -> (u32, u32) {
    (size.width.max(1), size.height.max(1))
}

/// Logical viewport for a window's physical size. The pixel ratio is clamped by
/// [`Viewport::new`].
fn viewport_of(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
    Viewport::new(
        size.width as f64 / scale,
        size.height as f64 / scale,
        scale_factor,
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new().context("event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("NoteOrbit background")
            .with_inner_size(PhysicalSize::new(1280, 800))
            .build(&event_loop)
            .context("window")?,
    );

    let host = pollster::block_on(NativeHost::new(Arc::clone(&window)))?;
    let viewport = viewport_of(window.inner_size(), window.scale_factor());
    let mut orbit = Orbit::mount(FieldParams::default(), viewport, host)?;

    let started = Instant::now();
    let mut pointer = PointerState::default();
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CursorMoved { position, .. } => {
                if orbit.host().accepting_input {
                    let size = orbit.host().window.inner_size();
                    pointer = PointerState::from_client(
                        position.x as f32,
                        position.y as f32,
                        size.width as f32,
                        size.height as f32,
                    );
                }
            }
            WindowEvent::Resized(size) => {
                let scale = orbit.host().window.scale_factor();
                orbit.resize(viewport_of(size, scale));
            }
            WindowEvent::CloseRequested => {
                orbit.unmount();
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                if !orbit.host().running {
                    return;
                }
                let input = FrameInput::new(started.elapsed().as_secs_f32(), pointer);
                if let Err(e) = orbit.tick(input) {
                    log::error!("[orbit] {}", e);
                    orbit.unmount();
                    elwt.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            if orbit.host().running {
                orbit.host().window.request_redraw();
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_keeps_full_resolution_on_dense_displays() {
        let size = PhysicalSize::new(3840, 2160);
        assert_eq!(surface_size(size), (3840, 2160));
        let viewport = viewport_of(size, 3.0);
        assert!((viewport.aspect() - 16.0 / 9.0).abs() < 1e-5);
        assert!(viewport.physical_size().0 < 3840);
    }

    #[test]
    fn minimised_window_still_has_a_surface() {
        assert_eq!(surface_size(PhysicalSize::new(0, 0)), (1, 1));
    }
}

//! Surface-backed presenter shared by the web and native hosts.

use super::pipeline::FieldRenderer;
use crate::error::FieldError;
use crate::field::PointField;
use crate::state::Camera;

/// Owns the device, the configured surface and the lazily built
/// [`FieldRenderer`] for one mounted field.
pub struct SurfaceRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: Option<FieldRenderer>,
    clear: wgpu::Color,
}

impl SurfaceRenderer {
    /// Request an adapter and device compatible with `surface` and configure it.
    ///
    /// A translucent `clear` asks for premultiplied alpha so the page behind
    /// the canvas shows through.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'static>,
        (width, height): (u32, u32),
        clear: wgpu::Color,
    ) -> Result<Self, FieldError> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(FieldError::AdapterNotFound)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("orbit_device"),
                    required_features: wgpu::Features::empty(),
                    // Downlevel limits so the WebGL2 fallback adapter qualifies
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| FieldError::Surface("no supported surface format".into()))?;
        let alpha_mode = if clear.a < 1.0
            && caps
                .alpha_modes
                .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::debug!(
            "[orbit] surface {:?} {:?} {}x{}",
            format,
            alpha_mode,
            config.width,
            config.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer: None,
            clear,
        })
    }

    /// Reconfigure for a new backing size. Zero-sized requests are ignored.
    pub fn resize(&mut self, (width, height): (u32, u32)) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload the field and draw one frame.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped;
    /// out-of-memory and other failures are returned to the caller.
    pub fn present(&mut self, field: &PointField, camera: &Camera) -> Result<(), FieldError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[orbit] surface lost; reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let renderer = self
            .renderer
            .get_or_insert_with(|| FieldRenderer::new(&self.device, self.config.format, field));
        renderer.upload(&self.queue, field, camera);

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("orbit_encoder"),
            });
        renderer.encode(&mut encoder, &view, self.clear);
        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Destroy the renderer's buffers. The surface is released on drop.
    pub fn destroy(&mut self) {
        if let Some(renderer) = self.renderer.take() {
            renderer.destroy();
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }
}

//! Mount/unmount lifecycle of one renderer instance.
//!
//! [`Orbit`] owns the point field, the camera and a platform [`RenderHost`].
//! Teardown always runs in the same order: stop the frame callback, detach
//! input listeners, then release GPU buffers. It runs exactly once, either
//! from [`Orbit::unmount`] or from `Drop`.

use crate::error::FieldError;
use crate::field::{FrameInput, PointField};
use crate::params::FieldParams;
use crate::state::{Camera, Viewport};

/// Platform side of a mounted field: surface, frame scheduling and listeners.
pub trait RenderHost {
    /// Upload the field's buffers and draw one frame.
    fn present(&mut self, field: &PointField, camera: &Camera) -> Result<(), FieldError>;

    /// Reconfigure the surface for a new viewport.
    fn resize(&mut self, viewport: &Viewport);

    /// Stop the frame callback so no further frames are scheduled.
    fn cancel_frame(&mut self);

    /// Remove every input listener registered for this instance.
    fn detach_listeners(&mut self);

    /// Free GPU buffers, pipelines and the surface.
    fn release_buffers(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Mounted,
    TornDown,
}

pub struct Orbit<H: RenderHost> {
    field: PointField,
    camera: Camera,
    viewport: Viewport,
    host: H,
    phase: Phase,
}

impl<H: RenderHost> Orbit<H> {
    pub fn mount(params: FieldParams, viewport: Viewport, mut host: H) -> Result<Self, FieldError> {
        let field = PointField::new(params)?;
        let mut camera = Camera::default();
        camera.set_viewport(&viewport);
        host.resize(&viewport);
        log::info!(
            "[orbit] points={} edges={} radius={:.1}",
            field.len(),
            field.adjacency().len(),
            field.params().radius
        );
        Ok(Self {
            field,
            camera,
            viewport,
            host,
            phase: Phase::Mounted,
        })
    }

    /// Step the field and present it if anything changed.
    pub fn tick(&mut self, input: FrameInput) -> Result<(), FieldError> {
        if self.phase == Phase::TornDown {
            return Err(FieldError::TornDown);
        }
        self.field.step(input);
        if self.field.is_dirty() {
            self.host.present(&self.field, &self.camera)?;
            self.field.mark_clean();
        }
        Ok(())
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if self.phase == Phase::TornDown || viewport == self.viewport {
            return;
        }
        log::debug!(
            "[orbit] resize {}x{} @{}",
            viewport.width,
            viewport.height,
            viewport.pixel_ratio
        );
        self.viewport = viewport;
        self.camera.set_viewport(&viewport);
        self.host.resize(&viewport);
    }

    pub fn unmount(&mut self) {
        if self.phase == Phase::TornDown {
            return;
        }
        self.phase = Phase::TornDown;
        self.host.cancel_frame();
        self.host.detach_listeners();
        self.host.release_buffers();
        log::info!("[orbit] torn down after {} frames", self.field.frame_count());
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn field(&self) -> &PointField {
        &self.field
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: RenderHost> Drop for Orbit<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

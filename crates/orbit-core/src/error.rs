use thiserror::Error;

/// Errors surfaced by the point-field core and its GPU layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("point field needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("invalid parameter `{name}`: {value}")]
    InvalidParam { name: &'static str, value: f32 },

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    Device(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("renderer instance already torn down")]
    TornDown,
}

impl From<wgpu::SurfaceError> for FieldError {
    fn from(e: wgpu::SurfaceError) -> Self {
        FieldError::Surface(e.to_string())
    }
}

impl From<wgpu::CreateSurfaceError> for FieldError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        FieldError::Surface(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for FieldError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        FieldError::Device(e.to_string())
    }
}

//! GPU-side vertex and uniform layouts.

use crate::constants::{FADE_FAR, FADE_NEAR, POINT_WORLD_SIZE};
use crate::state::Camera;
use glam::{Mat4, Quat, Vec3};

/// Per-draw uniforms shared by the point and line pipelines.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FieldUniforms {
    /// Container rotation (column-major).
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    /// RGBA line color; alpha is the line opacity.
    pub line_color: [f32; 4],
    pub point_world_size: f32,
    pub fade_near: f32,
    pub fade_far: f32,
    pub _pad: f32,
}

impl FieldUniforms {
    pub fn new(camera: &Camera, rotation: Quat, line_color: [f32; 4]) -> Self {
        Self {
            model: Mat4::from_quat(rotation).to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            line_color,
            point_world_size: POINT_WORLD_SIZE,
            fade_near: FADE_NEAR,
            fade_far: FADE_FAR,
            _pad: 0.0,
        }
    }
}

/// One point sprite instance: position, size scalar and color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

impl PointInstance {
    pub fn new(position: Vec3, size: f32, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            size,
            color: [color.x, color.y, color.z, 1.0],
        }
    }

    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PointInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 1,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 12,
                shader_location: 2,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 16,
                shader_location: 3,
            },
        ],
    };
}

/// Sprite corners for two triangles, centred on the origin.
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

pub const QUAD_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: (std::mem::size_of::<f32>() * 2) as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 0,
        shader_location: 0,
    }],
};

/// Line vertices are bare `Vec3` positions.
pub const LINE_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<Vec3>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    }],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_are_16_byte_multiple() {
        assert_eq!(std::mem::size_of::<FieldUniforms>(), 224);
        assert_eq!(std::mem::size_of::<FieldUniforms>() % 16, 0);
    }

    #[test]
    fn point_instance_is_32_bytes() {
        assert_eq!(std::mem::size_of::<PointInstance>(), 32);
        assert_eq!(std::mem::align_of::<PointInstance>(), 4);
    }

    #[test]
    fn vec3_line_vertices_are_tightly_packed() {
        let verts = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 24);
    }

    #[test]
    fn instance_carries_opaque_color() {
        let p = PointInstance::new(Vec3::new(1.0, 0.0, 0.0), 1.5, Vec3::new(0.2, 0.4, 0.6));
        assert_eq!(p.position, [1.0, 0.0, 0.0]);
        assert_eq!(p.size, 1.5);
        assert_eq!(p.color, [0.2, 0.4, 0.6, 1.0]);
    }

    #[test]
    fn layouts_fit_webgl2_limits() {
        let limits = wgpu::Limits::downlevel_webgl2_defaults();
        let uniform_size = std::mem::size_of::<FieldUniforms>() as u32;
        assert!(uniform_size <= limits.max_uniform_buffer_binding_size);
        let point_attrs = QUAD_LAYOUT.attributes.len() + PointInstance::LAYOUT.attributes.len();
        assert!(point_attrs as u32 <= limits.max_vertex_attributes);
        assert!(2 <= limits.max_vertex_buffers);
        let stride = PointInstance::LAYOUT.array_stride as u32;
        assert!(stride <= limits.max_vertex_buffer_array_stride);
    }
}

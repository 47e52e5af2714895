//! The animated point field: base geometry, live positions and colors, and the
//! per-frame interaction step.
//!
//! All buffers are sized once in [`PointField::new`] and rewritten in place by
//! [`PointField::step`]; nothing is allocated per frame.

use crate::adjacency::Adjacency;
use crate::error::FieldError;
use crate::geometry::{fibonacci_sphere, radial_normals};
use crate::params::FieldParams;
use crate::pointer::PointerState;
use glam::{Quat, Vec3};

/// Inputs read once at the start of a frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Seconds since the field was mounted.
    pub elapsed_sec: f32,
    pub pointer: PointerState,
}

impl FrameInput {
    pub fn new(elapsed_sec: f32, pointer: PointerState) -> Self {
        Self {
            elapsed_sec,
            pointer,
        }
    }
}

pub struct PointField {
    params: FieldParams,
    base: Vec<Vec3>,
    normals: Vec<Vec3>,
    current: Vec<Vec3>,
    colors: Vec<Vec3>,
    sizes: Vec<f32>,
    extrusions: Vec<f32>,
    adjacency: Adjacency,
    line_positions: Vec<Vec3>,
    rotation: Quat,
    frame: u64,
    dirty: bool,
}

impl PointField {
    pub fn new(params: FieldParams) -> Result<Self, FieldError> {
        params.validate()?;
        let n = params.point_count;
        let base = fibonacci_sphere(n, params.radius);
        let normals = radial_normals(&base);
        let adjacency = Adjacency::build(&base, params.connection_distance, params.max_out_degree);
        let mut line_positions = Vec::with_capacity(adjacency.vertex_count());
        for [a, b] in adjacency.edges() {
            line_positions.push(base[*a as usize]);
            line_positions.push(base[*b as usize]);
        }
        Ok(Self {
            current: base.clone(),
            colors: vec![params.palette.base; n],
            sizes: vec![params.point_size; n],
            extrusions: vec![0.0; n],
            base,
            normals,
            adjacency,
            line_positions,
            rotation: Quat::IDENTITY,
            frame: 0,
            dirty: true,
            params,
        })
    }

    /// Container rotation at `elapsed_sec`: yaw about Y, then tilt about X.
    pub fn rotation_at(&self, elapsed_sec: f32) -> Quat {
        let yaw = elapsed_sec * self.params.yaw_rate;
        let tilt = (elapsed_sec * self.params.tilt_frequency).sin() * self.params.tilt_amplitude;
        let rotation = Quat::from_rotation_x(tilt) * Quat::from_rotation_y(yaw);
        if rotation.is_finite() {
            rotation
        } else {
            Quat::IDENTITY
        }
    }

    /// Advance one frame toward the pointer-driven targets.
    pub fn step(&mut self, input: FrameInput) {
        self.rotation = self.rotation_at(input.elapsed_sec);
        let cursor = input.pointer.cursor(self.params.cursor_scale);
        let radius = self.params.radius;
        let smoothing = self.params.smoothing;
        let palette = self.params.palette;

        for i in 0..self.base.len() {
            let rotated = self.rotation * self.base[i];
            let planar = (rotated.truncate() - cursor).length();
            let extrusion = extrusion_at(
                planar,
                rotated.z,
                self.params.proximity_radius,
                self.params.max_extrusion,
            );
            self.extrusions[i] = extrusion;

            let target = self.normals[i] * (radius + extrusion);
            let current = self.current[i];
            self.current[i] = current + (target - current) * smoothing;

            let color = self.colors[i];
            self.colors[i] = if extrusion > self.params.highlight_threshold {
                color + (palette.highlight - color) * self.params.highlight_ease
            } else {
                color + (palette.base - color) * self.params.color_ease
            };
        }

        self.sync_lines();
        self.frame += 1;
        self.dirty = true;
    }

    fn sync_lines(&mut self) {
        for (k, [a, b]) in self.adjacency.edges().iter().enumerate() {
            self.line_positions[2 * k] = self.current[*a as usize];
            self.line_positions[2 * k + 1] = self.current[*b as usize];
        }
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn base_positions(&self) -> &[Vec3] {
        &self.base
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Extrusion targets computed by the most recent [`step`](Self::step).
    pub fn extrusions(&self) -> &[f32] {
        &self.extrusions
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Two vertices per edge, in edge order, at the current positions.
    pub fn line_positions(&self) -> &[Vec3] {
        &self.line_positions
    }

    /// Rotation applied to the whole field for the latest frame.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Whether positions or colors changed since the GPU copy was refreshed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

/// Outward displacement for a point `planar_distance` away from the cursor.
///
/// Linear falloff from `max_extrusion` under the cursor to zero at
/// `proximity_radius`; points on the far hemisphere (`z <= 0`) never extrude.
/// Non-finite distances yield zero.
#[inline]
pub fn extrusion_at(
    planar_distance: f32,
    rotated_z: f32,
    proximity_radius: f32,
    max_extrusion: f32,
) -> f32 {
    if planar_distance < proximity_radius && rotated_z > 0.0 {
        (1.0 - planar_distance / proximity_radius) * max_extrusion
    } else {
        0.0
    }
}

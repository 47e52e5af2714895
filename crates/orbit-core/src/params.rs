//! Tunable parameters for a point field.
//!
//! Every field has a default taken from `constants.rs`; hosts override the
//! handful they care about and call [`FieldParams::validate`] (done for them by
//! [`crate::Orbit::mount`]) before a field is built.

use crate::constants::*;
use crate::error::FieldError;
use glam::Vec3;

/// Colors used by the field: resting points, spiked points and lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub base: Vec3,
    pub highlight: Vec3,
    /// RGBA; alpha is the line opacity.
    pub line: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: Vec3::from(BASE_COLOR),
            highlight: Vec3::from(HIGHLIGHT_COLOR),
            line: LINE_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub point_count: usize,
    pub radius: f32,
    pub connection_distance: f32,
    pub max_out_degree: usize,

    pub cursor_scale: f32,
    pub proximity_radius: f32,
    pub max_extrusion: f32,
    pub highlight_threshold: f32,

    pub smoothing: f32,
    pub color_ease: f32,
    pub highlight_ease: f32,

    pub yaw_rate: f32,
    pub tilt_amplitude: f32,
    pub tilt_frequency: f32,

    pub point_size: f32,
    pub palette: Palette,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            point_count: POINT_COUNT,
            radius: SPHERE_RADIUS,
            connection_distance: CONNECTION_DIST,
            max_out_degree: MAX_OUT_DEGREE,
            cursor_scale: CURSOR_SCALE,
            proximity_radius: PROXIMITY_RADIUS,
            max_extrusion: MAX_EXTRUSION,
            highlight_threshold: HIGHLIGHT_THRESHOLD,
            smoothing: POSITION_SMOOTHING,
            color_ease: COLOR_EASE,
            highlight_ease: HIGHLIGHT_EASE,
            yaw_rate: YAW_RATE,
            tilt_amplitude: TILT_AMPLITUDE,
            tilt_frequency: TILT_FREQUENCY,
            point_size: POINT_SIZE,
            palette: Palette::default(),
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.point_count < 2 {
            return Err(FieldError::TooFewPoints(self.point_count));
        }
        if self.point_count > u32::MAX as usize {
            return Err(FieldError::InvalidParam {
                name: "point_count",
                value: self.point_count as f32,
            });
        }
        positive("radius", self.radius)?;
        non_negative("connection_distance", self.connection_distance)?;
        finite("cursor_scale", self.cursor_scale)?;
        positive("proximity_radius", self.proximity_radius)?;
        non_negative("max_extrusion", self.max_extrusion)?;
        non_negative("highlight_threshold", self.highlight_threshold)?;
        unit_rate("smoothing", self.smoothing)?;
        unit_rate("color_ease", self.color_ease)?;
        unit_rate("highlight_ease", self.highlight_ease)?;
        finite("yaw_rate", self.yaw_rate)?;
        finite("tilt_amplitude", self.tilt_amplitude)?;
        finite("tilt_frequency", self.tilt_frequency)?;
        positive("point_size", self.point_size)?;
        Ok(())
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), FieldError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FieldError::InvalidParam { name, value })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), FieldError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(FieldError::InvalidParam { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), FieldError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(FieldError::InvalidParam { name, value })
    }
}

// Easing factors live in (0, 1].
fn unit_rate(name: &'static str, value: f32) -> Result<(), FieldError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(FieldError::InvalidParam { name, value })
    }
}

use glam::Vec2;

/// Last known pointer position in normalized device coordinates.
///
/// `x` grows to the right and `y` grows upwards; on-screen input maps to
/// [-1, 1] on both axes. Hosts overwrite it from their input listener and hand
/// a copy to every frame, so the newest write before a frame wins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Map a client-space position (origin top-left, y down) to NDC.
    ///
    /// Returns the centre of the screen when the viewport has no area.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (client_x / width) * 2.0 - 1.0,
            y: -(client_y / height) * 2.0 + 1.0,
        }
    }

    /// Cursor position in world units on the z = 0 plane.
    #[inline]
    pub fn cursor(&self, scale: f32) -> Vec2 {
        Vec2::new(self.x * scale, self.y * scale)
    }
}

//! Fibonacci sphere point distribution.

use glam::Vec3;

/// π(3 − √5): the angle between consecutive points around the vertical axis.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Place `count` points on a sphere of `radius` using the golden-angle spiral.
///
/// Index 0 sits on the north pole (+Y) and index `count - 1` on the south
/// pole. The result depends only on `count` and `radius`. A count below 2
/// has no spiral to speak of: every point lands on the north pole.
pub fn fibonacci_sphere(count: usize, radius: f32) -> Vec<Vec3> {
    if count < 2 {
        return (0..count).map(|_| Vec3::new(0.0, radius, 0.0)).collect();
    }
    let last = (count - 1) as f32;
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f32) / last;
            let radius_xy = (1.0 - y * y).max(0.0).sqrt();
            let theta = GOLDEN_ANGLE * i as f32;
            Vec3::new(theta.cos() * radius_xy, y, theta.sin() * radius_xy) * radius
        })
        .collect()
}

/// Unit outward normals for points of a sphere centred at the origin.
pub fn radial_normals(points: &[Vec3]) -> Vec<Vec3> {
    points.iter().map(|p| p.normalize_or_zero()).collect()
}

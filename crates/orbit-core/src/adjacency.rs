//! Static line topology between nearby points.

use glam::Vec3;

/// Precomputed edges between points whose base positions are close.
///
/// Each edge is stored as `[lo, hi]` with `lo < hi`. The topology never
/// changes after construction; only the endpoint positions move.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    edges: Vec<[u32; 2]>,
    point_count: usize,
}

impl Adjacency {
    /// Scan every pair once and keep up to `max_out_degree` edges per point.
    ///
    /// For point `i` only higher indices are considered, and scanning stops as
    /// soon as `i` has started `max_out_degree` edges. Distances are compared
    /// strictly (`< max_distance`).
    pub fn build(points: &[Vec3], max_distance: f32, max_out_degree: usize) -> Self {
        let n = points.len();
        let pairs = n.saturating_mul(n.saturating_sub(1)) / 2;
        let mut edges = Vec::with_capacity(n.saturating_mul(max_out_degree).min(pairs));
        if max_out_degree > 0 {
            let max_d2 = max_distance * max_distance;
            for (i, p) in points.iter().enumerate() {
                let mut started = 0usize;
                for (j, q) in points.iter().enumerate().skip(i + 1) {
                    if p.distance_squared(*q) < max_d2 {
                        edges.push([i as u32, j as u32]);
                        started += 1;
                        if started >= max_out_degree {
                            break;
                        }
                    }
                }
            }
        }
        Self {
            edges,
            point_count: points.len(),
        }
    }

    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Edges started by `index` (those where it is the lower endpoint).
    pub fn out_degree(&self, index: usize) -> usize {
        self.edges
            .iter()
            .filter(|[lo, _]| *lo as usize == index)
            .count()
    }

    /// Edges touching `index` from either side.
    pub fn degree(&self, index: usize) -> usize {
        self.edges
            .iter()
            .filter(|[lo, hi]| *lo as usize == index || *hi as usize == index)
            .count()
    }

    /// Number of line vertices needed to draw every edge.
    pub fn vertex_count(&self) -> usize {
        self.edges.len() * 2
    }
}

use glam::Vec3;
use orbit_core::{
    fibonacci_sphere, Adjacency, FieldParams, PointField, CONNECTION_DIST, MAX_OUT_DEGREE,
    POINT_COUNT, SPHERE_RADIUS,
};

fn on_x_axis(xs: &[f32]) -> Vec<Vec3> {
    xs.iter().map(|x| Vec3::new(*x, 0.0, 0.0)).collect()
}

#[test]
fn default_sphere_edges_are_valid() {
    let pts = fibonacci_sphere(POINT_COUNT, SPHERE_RADIUS);
    let adj = Adjacency::build(&pts, CONNECTION_DIST, MAX_OUT_DEGREE);
    assert!(!adj.is_empty());
    assert!(adj.len() <= POINT_COUNT * MAX_OUT_DEGREE);
    assert_eq!(adj.point_count(), POINT_COUNT);
    for [a, b] in adj.edges() {
        assert!(a < b, "edge ({a},{b}) not ordered");
        assert!((*b as usize) < POINT_COUNT);
        let d = pts[*a as usize].distance(pts[*b as usize]);
        assert!(d < CONNECTION_DIST);
    }
    for i in 0..POINT_COUNT {
        assert!(adj.out_degree(i) <= MAX_OUT_DEGREE, "point {i} over degree");
    }
}

#[test]
fn out_degree_cap_holds_for_many_settings() {
    for (n, d, k) in [(50, 10.0, 1), (200, 6.0, 2), (500, 4.5, 5), (120, 100.0, 4)] {
        let pts = fibonacci_sphere(n, 22.0);
        let adj = Adjacency::build(&pts, d, k);
        for i in 0..n {
            assert!(adj.out_degree(i) <= k, "n={n} d={d} k={k} point {i}");
        }
        assert!(adj.edges().iter().all(|[a, b]| a != b));
    }
}

#[test]
fn scanning_stops_at_the_cap() {
    // 0 reaches 1 first and stops, even though 3 is also in range.
    let pts = on_x_axis(&[0.0, 1.0, 10.0, 1.2]);
    let adj = Adjacency::build(&pts, 1.5, 1);
    assert_eq!(adj.edges(), &[[0, 1], [1, 3]]);
}

#[test]
fn full_degree_can_exceed_the_cap() {
    let pts = on_x_axis(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    let adj = Adjacency::build(&pts, 2.5, 2);
    assert_eq!(
        adj.edges(),
        &[[0, 1], [0, 2], [1, 2], [1, 3], [2, 3], [2, 4], [3, 4]]
    );
    assert_eq!(adj.out_degree(2), 2);
    assert_eq!(adj.degree(2), 4);
    assert_eq!(adj.vertex_count(), 14);
}

#[test]
fn distance_threshold_is_strict() {
    let pts = on_x_axis(&[0.0, 1.0]);
    assert!(Adjacency::build(&pts, 1.0, 3).is_empty());
    assert_eq!(Adjacency::build(&pts, 1.0001, 3).len(), 1);
}

#[test]
fn zero_cap_or_zero_distance_yields_no_edges() {
    let pts = fibonacci_sphere(100, 22.0);
    assert!(Adjacency::build(&pts, 50.0, 0).is_empty());
    assert!(Adjacency::build(&pts, 0.0, 3).is_empty());
}

#[test]
fn unbounded_cap_keeps_every_close_pair() {
    let pts = on_x_axis(&[0.0, 1.0, 2.0, 3.0]);
    let adj = Adjacency::build(&pts, 2.5, usize::MAX);
    assert_eq!(adj.edges(), &[[0, 1], [0, 2], [1, 2], [1, 3], [2, 3]]);
}

#[test]
fn field_accepts_unbounded_out_degree() {
    let params = FieldParams {
        point_count: 16,
        max_out_degree: usize::MAX,
        connection_distance: 100.0,
        ..FieldParams::default()
    };
    assert_eq!(params.validate(), Ok(()));
    let field = PointField::new(params).unwrap();
    assert_eq!(field.adjacency().len(), 16 * 15 / 2);
    assert_eq!(field.line_positions().len(), 16 * 15);
}

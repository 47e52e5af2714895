use glam::{Quat, Vec3};
use orbit_core::{extrusion_at, FieldError, FieldParams, FrameInput, PointField, PointerState};

fn small_params() -> FieldParams {
    FieldParams {
        point_count: 400,
        ..FieldParams::default()
    }
}

fn run(field: &mut PointField, pointer: PointerState, frames: usize, elapsed_sec: f32) {
    for _ in 0..frames {
        field.step(FrameInput::new(elapsed_sec, pointer));
    }
}

/// Index of the point closest to the viewer when the field is unrotated.
fn front_index(field: &PointField) -> usize {
    let mut best = 0;
    for (i, p) in field.base_positions().iter().enumerate() {
        if p.z > field.base_positions()[best].z {
            best = i;
        }
    }
    best
}

/// Pointer that puts the cursor exactly over `p` (plus an x offset) at scale 25.
fn pointer_over(p: Vec3, dx: f32) -> PointerState {
    PointerState::new((p.x + dx) / 25.0, p.y / 25.0)
}

#[test]
fn new_field_starts_at_rest() {
    let field = PointField::new(small_params()).unwrap();
    assert_eq!(field.len(), 400);
    assert_eq!(field.positions(), field.base_positions());
    let base = field.params().palette.base;
    assert!(field.colors().iter().all(|c| *c == base));
    assert!(field.sizes().iter().all(|s| *s == 1.0));
    assert!(field.is_dirty());
    assert_eq!(field.frame_count(), 0);
}

#[test]
fn rejects_too_few_points() {
    let params = FieldParams {
        point_count: 1,
        ..FieldParams::default()
    };
    assert!(matches!(
        PointField::new(params),
        Err(FieldError::TooFewPoints(1))
    ));
}

#[test]
fn extrusion_falls_off_linearly() {
    assert_eq!(extrusion_at(0.0, 1.0, 8.0, 8.0), 8.0);
    assert!((extrusion_at(4.0, 1.0, 8.0, 8.0) - 4.0).abs() < 1e-6);
    assert_eq!(extrusion_at(8.0, 1.0, 8.0, 8.0), 0.0);
    assert_eq!(extrusion_at(9.0, 1.0, 8.0, 8.0), 0.0);
}

#[test]
fn back_hemisphere_never_extrudes() {
    assert_eq!(extrusion_at(0.0, 0.0, 8.0, 8.0), 0.0);
    assert_eq!(extrusion_at(0.0, -5.0, 8.0, 8.0), 0.0);
}

#[test]
fn non_finite_distance_never_extrudes() {
    assert_eq!(extrusion_at(f32::NAN, 1.0, 8.0, 8.0), 0.0);
    assert_eq!(extrusion_at(f32::INFINITY, 1.0, 8.0, 8.0), 0.0);
}

#[test]
fn far_pointer_relaxes_back_to_base() {
    let mut field = PointField::new(small_params()).unwrap();
    let front = front_index(&field);
    let p = field.base_positions()[front];
    run(&mut field, pointer_over(p, 0.0), 60, 0.0);
    let r = field.params().radius;
    assert!(field.positions()[front].length() > r + 1.0);

    let far = PointerState::new(100.0, -100.0);
    for frame in 0..400 {
        field.step(FrameInput::new(frame as f32 / 60.0, far));
    }
    for (i, (cur, base)) in field.positions().iter().zip(field.base_positions()).enumerate() {
        let err = cur.distance(*base);
        assert!(err < 1e-3, "point {i} still {err} away from base");
    }
    assert!(field.extrusions().iter().all(|e| *e == 0.0));
}

#[test]
fn steady_extrusion_shrinks_with_pointer_distance() {
    let offsets = [0.0, 1.0, 2.5, 4.0, 6.0, 7.5, 8.0, 9.0, 12.0];
    let mut steady = Vec::new();
    for dx in offsets {
        let mut field = PointField::new(small_params()).unwrap();
        let front = front_index(&field);
        let p = field.base_positions()[front];
        run(&mut field, pointer_over(p, dx), 300, 0.0);
        let r = field.params().radius;
        let ext = field.positions()[front].length() - r;
        let expected = extrusion_at(dx, p.z, 8.0, 8.0);
        assert!(
            (ext - expected).abs() < 1e-2,
            "dx={dx}: steady {ext} expected {expected}"
        );
        steady.push(ext);
    }
    for (w, pair) in steady.windows(2).zip(offsets.windows(2)) {
        if pair[0] < 8.0 {
            assert!(w[1] < w[0], "not decreasing between {:?}", pair);
        }
    }
    for (ext, dx) in steady.iter().zip(offsets) {
        if dx >= 8.0 {
            assert!(ext.abs() < 1e-3, "dx={dx} left extrusion {ext}");
        }
    }
}

#[test]
fn position_eases_by_fixed_factor() {
    let mut field = PointField::new(small_params()).unwrap();
    let front = front_index(&field);
    let p = field.base_positions()[front];
    field.step(FrameInput::new(0.0, pointer_over(p, 0.0)));
    // target is 8 units out; one step covers a tenth of the way
    let moved = field.positions()[front].length() - field.params().radius;
    assert!((moved - 0.8).abs() < 1e-3, "moved {moved}");
}

#[test]
fn spiked_points_take_the_highlight_then_fade_back() {
    let mut field = PointField::new(small_params()).unwrap();
    let palette = field.params().palette;
    let front = front_index(&field);
    let p = field.base_positions()[front];
    field.step(FrameInput::new(0.0, pointer_over(p, 0.0)));
    assert!((field.colors()[front] - palette.highlight).length() < 1e-6);

    let far = PointerState::new(50.0, 50.0);
    field.step(FrameInput::new(0.0, far));
    let expected = palette.highlight + (palette.base - palette.highlight) * 0.05;
    assert!((field.colors()[front] - expected).length() < 1e-5);

    run(&mut field, far, 600, 0.0);
    assert!((field.colors()[front] - palette.base).length() < 1e-3);
}

#[test]
fn gentle_highlight_ease_blends_instead_of_snapping() {
    let params = FieldParams {
        highlight_ease: 0.25,
        ..small_params()
    };
    let mut field = PointField::new(params).unwrap();
    let palette = field.params().palette;
    let front = front_index(&field);
    let p = field.base_positions()[front];
    field.step(FrameInput::new(0.0, pointer_over(p, 0.0)));
    let expected = palette.base + (palette.highlight - palette.base) * 0.25;
    assert!((field.colors()[front] - expected).length() < 1e-5);
}

#[test]
fn lines_follow_current_positions() {
    let mut field = PointField::new(small_params()).unwrap();
    let front = front_index(&field);
    let p = field.base_positions()[front];
    run(&mut field, pointer_over(p, 1.0), 20, 0.5);
    let lines = field.line_positions();
    assert_eq!(lines.len(), field.adjacency().vertex_count());
    for (k, [a, b]) in field.adjacency().edges().iter().enumerate() {
        assert_eq!(lines[2 * k], field.positions()[*a as usize]);
        assert_eq!(lines[2 * k + 1], field.positions()[*b as usize]);
    }
}

#[test]
fn garbage_input_keeps_positions_finite() {
    let mut field = PointField::new(small_params()).unwrap();
    let inputs = [
        FrameInput::new(0.0, PointerState::new(f32::NAN, 0.0)),
        FrameInput::new(f32::NAN, PointerState::new(0.0, 0.0)),
        FrameInput::new(1.0, PointerState::new(f32::INFINITY, f32::NEG_INFINITY)),
        FrameInput::new(f32::INFINITY, PointerState::new(0.1, 0.1)),
    ];
    for input in inputs {
        for _ in 0..10 {
            field.step(input);
        }
        assert!(field.positions().iter().all(|p| p.is_finite()));
        assert!(field.colors().iter().all(|c| c.is_finite()));
    }
}

#[test]
fn rotation_combines_yaw_and_tilt() {
    let field = PointField::new(small_params()).unwrap();
    assert!(field.rotation_at(0.0).abs_diff_eq(Quat::IDENTITY, 1e-6));
    let t = 10.0_f32;
    let expected = Quat::from_rotation_x((t * 0.15).sin() * 0.1) * Quat::from_rotation_y(t * 0.12);
    assert!(field.rotation_at(t).abs_diff_eq(expected, 1e-5));
}

#[test]
fn step_marks_dirty_and_counts_frames() {
    let mut field = PointField::new(small_params()).unwrap();
    field.mark_clean();
    assert!(!field.is_dirty());
    field.step(FrameInput::default());
    field.step(FrameInput::default());
    assert!(field.is_dirty());
    assert_eq!(field.frame_count(), 2);
}

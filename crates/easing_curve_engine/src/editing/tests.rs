use super::*;
use crate::constants::{
    DEFAULT_HANDLE_LENGTH, LINEAR_SAMPLES_PER_SEGMENT, MAX_POINTS, MIN_X_DELTA, Y_RANGE_EXPORT,
};
use crate::core::{CubicCurve, HandleSide, PointIdGenerator, PolyCurve, PolyPoint};
use crate::geometry::{canonicalize, sample_curve_to_polyline};
use approx::assert_abs_diff_eq;
use glam::DVec2;

fn three_point_curve(ids: &mut PointIdGenerator) -> PolyCurve {
    canonicalize(
        &[
            PolyPoint::new(0.0, 0.0),
            PolyPoint::new(0.5, 0.5),
            PolyPoint::new(1.0, 1.0),
        ],
        Y_RANGE_EXPORT,
        ids,
    )
}

fn linked_middle_curve(ids: &mut PointIdGenerator, mirror_length: bool) -> PolyCurve {
    let mut middle = PolyPoint::new(0.5, 0.5)
        .with_handles(Some(DVec2::new(-0.1, 0.0)), Some(DVec2::new(0.1, 0.0)));
    middle.linked = true;
    middle.mirror_length = mirror_length;
    canonicalize(
        &[PolyPoint::new(0.0, 0.0), middle, PolyPoint::new(1.0, 1.0)],
        Y_RANGE_EXPORT,
        ids,
    )
}

// ── Einfügen ──

#[test]
fn test_insert_on_straight_segment_synthesizes_handles() {
    let mut ids = PointIdGenerator::new();
    let curve = PolyCurve::identity(&mut ids);
    let (result, id) = insert_point(&curve, DVec2::new(0.5, 0.5), &mut ids).unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(find_point_index(&result, id), Some(1));
    let inserted = result.get(1).unwrap();
    assert_eq!(inserted.position, DVec2::new(0.5, 0.5));
    assert!(inserted.linked);
    let out = inserted.handle_out.unwrap();
    assert_abs_diff_eq!(out.x, out.y, epsilon = 1e-12);
    assert_eq!(inserted.handle_in, Some(-out));
}

#[test]
fn test_insert_near_neighbor_keeps_segments_monotonic() {
    let mut ids = PointIdGenerator::new();
    let curve = PolyCurve::identity(&mut ids);
    let (result, id) = insert_point(&curve, DVec2::new(0.05, 0.05), &mut ids).unwrap();
    let index = find_point_index(&result, id).unwrap();
    let points = result.points();
    let (prev, inserted, next) = (&points[index - 1], &points[index], &points[index + 1]);

    assert!(inserted.handle_in.unwrap().length() <= 0.05 + 1e-12);
    assert!(inserted.in_control().x >= prev.x());
    assert!(inserted.out_control().x <= next.x());

    // Erstes Segment verliert beim Abtasten (fast) keine Punkte
    let samples = sample_curve_to_polyline(&result, LINEAR_SAMPLES_PER_SEGMENT);
    let first_segment = samples.iter().filter(|p| p.x < inserted.x()).count();
    assert!(first_segment >= 15, "nur {first_segment} Abtastpunkte im ersten Segment");
}

#[test]
fn test_insert_far_from_neighbors_uses_default_length() {
    let mut ids = PointIdGenerator::new();
    let curve = PolyCurve::identity(&mut ids);
    let (result, id) = insert_point(&curve, DVec2::new(0.5, 0.5), &mut ids).unwrap();
    let inserted = result.get(find_point_index(&result, id).unwrap()).unwrap();
    assert_abs_diff_eq!(
        inserted.handle_out.unwrap().length(),
        DEFAULT_HANDLE_LENGTH,
        epsilon = 1e-12
    );
}

#[test]
fn test_insert_keeps_existing_ids() {
    let mut ids = PointIdGenerator::new();
    let curve = PolyCurve::identity(&mut ids);
    let first = curve.first().id.unwrap();
    let last = curve.last().id.unwrap();
    let (result, id) = insert_point(&curve, DVec2::new(0.25, 0.1), &mut ids).unwrap();

    assert_eq!(find_point_index(&result, first), Some(0));
    assert_eq!(find_point_index(&result, last), Some(2));
    assert_ne!(id, first);
    assert_ne!(id, last);
    // Eingabe bleibt unverändert
    assert_eq!(curve.len(), 2);
}

#[test]
fn test_insert_clamps_y_to_drag_range() {
    let mut ids = PointIdGenerator::new();
    let curve = PolyCurve::identity(&mut ids);
    let (result, _) = insert_point(&curve, DVec2::new(0.5, 5.0), &mut ids).unwrap();
    assert_eq!(result.get(1).unwrap().y(), 1.5);
}

#[test]
fn test_insert_on_curved_segment_preserves_shape() {
    let mut ids = PointIdGenerator::new();
    let curve = cubic_to_poly(&CubicCurve::new(0.42, 0.0, 0.58, 1.0), &mut ids);
    let (result, id) = insert_point(&curve, DVec2::new(0.3, 0.0), &mut ids).unwrap();

    let inserted = result.get(find_point_index(&result, id).unwrap()).unwrap();
    assert!((inserted.x() - 0.3).abs() < 1e-4);
    // y kommt aus der Kurve, nicht aus der Klickposition
    assert!((inserted.y() - curve.value_at(inserted.x())).abs() < 1e-3);

    for i in 0..=40 {
        let x = i as f64 / 40.0;
        assert!(
            (result.value_at(x) - curve.value_at(x)).abs() < 1e-3,
            "Form bei x={x} verändert"
        );
    }
}

#[test]
fn test_insert_refused_near_neighbors() {
    let mut ids = PointIdGenerator::new();
    let curve = PolyCurve::identity(&mut ids);
    assert!(insert_point(&curve, DVec2::new(0.00005, 0.0), &mut ids).is_none());
    assert!(insert_point(&curve, DVec2::new(1.0, 1.0), &mut ids).is_none());
    assert!(insert_point(&curve, DVec2::new(-0.5, 0.0), &mut ids).is_none());
}

#[test]
fn test_insert_refused_at_max_points() {
    let mut ids = PointIdGenerator::new();
    let mut curve = PolyCurve::identity(&mut ids);
    for i in 1..MAX_POINTS - 1 {
        let x = i as f64 / MAX_POINTS as f64;
        let (next, _) = insert_point(&curve, DVec2::new(x, x), &mut ids).unwrap();
        curve = next;
    }
    assert_eq!(curve.len(), MAX_POINTS);
    assert!(insert_point(&curve, DVec2::new(0.985, 0.985), &mut ids).is_none());
}

#[test]
fn test_insert_point_near_threshold() {
    let mut ids = PointIdGenerator::new();
    let curve = PolyCurve::identity(&mut ids);
    assert!(insert_point_near(&curve, DVec2::new(0.5, 0.9), 0.1, &mut ids).is_none());
    let (result, _) = insert_point_near(&curve, DVec2::new(0.5, 0.55), 0.1, &mut ids).unwrap();
    assert_eq!(result.len(), 3);
}

// ── Entfernen ──

#[test]
fn test_remove_interior_point() {
    let mut ids = PointIdGenerator::new();
    let curve = three_point_curve(&mut ids);
    let result = remove_point(&curve, 1, &mut ids).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result.first().id, curve.first().id);
    assert_eq!(result.last().id, curve.last().id);
}

#[test]
fn test_remove_refuses_endpoints_and_floor() {
    let mut ids = PointIdGenerator::new();
    let curve = three_point_curve(&mut ids);
    assert!(remove_point(&curve, 0, &mut ids).is_none());
    assert!(remove_point(&curve, 2, &mut ids).is_none());
    assert!(remove_point(&curve, 7, &mut ids).is_none());

    let identity = PolyCurve::identity(&mut ids);
    assert!(remove_point(&identity, 1, &mut ids).is_none());
}

// ── Verschieben ──

#[test]
fn test_move_interior_point_clamped_between_neighbors() {
    let mut ids = PointIdGenerator::new();
    let curve = three_point_curve(&mut ids);
    let id = curve.get(1).unwrap().id.unwrap();

    let result = move_point(&curve, 1, DVec2::new(2.0, -3.0), &mut ids).unwrap();
    let moved = result.get(1).unwrap();
    assert_eq!(moved.id, Some(id));
    assert_abs_diff_eq!(moved.x(), 1.0 - MIN_X_DELTA, epsilon = 1e-12);
    assert_eq!(moved.y(), -0.5);
    assert_eq!(result.len(), 3);
}

#[test]
fn test_move_endpoint_keeps_x() {
    let mut ids = PointIdGenerator::new();
    let curve = three_point_curve(&mut ids);
    let result = move_point(&curve, 0, DVec2::new(0.3, 0.2), &mut ids).unwrap();
    assert_eq!(result.first().position, DVec2::new(0.0, 0.2));

    let result = move_point(&curve, 2, DVec2::new(0.1, 9.0), &mut ids).unwrap();
    assert_eq!(result.last().position, DVec2::new(1.0, 1.5));
}

#[test]
fn test_move_point_carries_handles() {
    let mut ids = PointIdGenerator::new();
    let curve = linked_middle_curve(&mut ids, false);
    let result = move_point(&curve, 1, DVec2::new(0.4, 0.7), &mut ids).unwrap();
    let moved = result.get(1).unwrap();
    assert_eq!(moved.position, DVec2::new(0.4, 0.7));
    assert_eq!(moved.handle_out, Some(DVec2::new(0.1, 0.0)));
    assert_eq!(moved.handle_in, Some(DVec2::new(-0.1, 0.0)));
}

#[test]
fn test_move_point_rejects_invalid_input() {
    let mut ids = PointIdGenerator::new();
    let curve = three_point_curve(&mut ids);
    assert!(move_point(&curve, 5, DVec2::new(0.5, 0.5), &mut ids).is_none());
    assert!(move_point(&curve, 1, DVec2::new(f64::NAN, 0.5), &mut ids).is_none());
}

// ── Handles ──

#[test]
fn test_move_handle_linked_keeps_opposite_length() {
    let mut ids = PointIdGenerator::new();
    let curve = linked_middle_curve(&mut ids, false);
    let result = move_handle(&curve, 1, HandleSide::Out, DVec2::new(0.2, 0.2), &mut ids).unwrap();
    let point = result.get(1).unwrap();

    assert_eq!(point.handle_out, Some(DVec2::new(0.2, 0.2)));
    let incoming = point.handle_in.unwrap();
    assert_abs_diff_eq!(incoming.length(), 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(incoming.x, incoming.y, epsilon = 1e-12);
    assert!(incoming.x < 0.0);
}

#[test]
fn test_move_handle_mirror_length() {
    let mut ids = PointIdGenerator::new();
    let curve = linked_middle_curve(&mut ids, true);
    let result = move_handle(&curve, 1, HandleSide::In, DVec2::new(-0.3, 0.0), &mut ids).unwrap();
    let point = result.get(1).unwrap();
    let out = point.handle_out.unwrap();
    assert_abs_diff_eq!(out.x, 0.3, epsilon = 1e-12);
    assert_abs_diff_eq!(out.y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_move_handle_unlinked_leaves_opposite() {
    let mut ids = PointIdGenerator::new();
    let curve = linked_middle_curve(&mut ids, false);
    let curve = set_linked(&curve, 1, false, &mut ids).unwrap();
    let result = move_handle(&curve, 1, HandleSide::Out, DVec2::new(0.0, 0.3), &mut ids).unwrap();
    let point = result.get(1).unwrap();
    assert_eq!(point.handle_in, Some(DVec2::new(-0.1, 0.0)));
    assert_eq!(point.handle_out, Some(DVec2::new(0.0, 0.3)));
}

#[test]
fn test_move_handle_enforces_side_sign() {
    let mut ids = PointIdGenerator::new();
    let curve = linked_middle_curve(&mut ids, false);
    let result = move_handle(&curve, 1, HandleSide::In, DVec2::new(0.3, 0.1), &mut ids).unwrap();
    let point = result.get(1).unwrap();
    assert_eq!(point.handle_in, Some(DVec2::new(0.0, 0.1)));
    assert!(point.handle_out.unwrap().x >= 0.0);
}

#[test]
fn test_move_handle_invalid_input() {
    let mut ids = PointIdGenerator::new();
    let curve = linked_middle_curve(&mut ids, false);
    let offset = DVec2::new(0.1, 0.1);
    assert!(move_handle(&curve, 9, HandleSide::Out, offset, &mut ids).is_none());
    let nan = DVec2::new(f64::NAN, 0.0);
    assert!(move_handle(&curve, 1, HandleSide::Out, nan, &mut ids).is_none());
}

#[test]
fn test_set_linked_creates_handles() {
    let mut ids = PointIdGenerator::new();
    let curve = three_point_curve(&mut ids);
    let linked = set_linked(&curve, 1, true, &mut ids).unwrap();
    let point = linked.get(1).unwrap();
    assert!(point.linked);
    assert_eq!(point.handle_in, point.handle_out.map(|h| -h));

    let unlinked = set_linked(&linked, 1, false, &mut ids).unwrap();
    let point = unlinked.get(1).unwrap();
    assert!(!point.linked);
    assert!(!point.mirror_length);
    assert!(point.has_handles());
}

#[test]
fn test_set_mirror_length_aligns_handles() {
    let mut ids = PointIdGenerator::new();
    let middle = PolyPoint::new(0.5, 0.5)
        .with_handles(Some(DVec2::new(-0.1, 0.0)), Some(DVec2::new(0.3, 0.0)));
    let curve = canonicalize(
        &[PolyPoint::new(0.0, 0.0), middle, PolyPoint::new(1.0, 1.0)],
        Y_RANGE_EXPORT,
        &mut ids,
    );

    let mirrored = set_mirror_length(&curve, 1, true, &mut ids).unwrap();
    let point = mirrored.get(1).unwrap();
    assert!(point.linked && point.mirror_length);
    assert_abs_diff_eq!(point.handle_out.unwrap().length(), 0.3, epsilon = 1e-12);
    assert_abs_diff_eq!(point.handle_in.unwrap().length(), 0.3, epsilon = 1e-12);

    let plain = set_mirror_length(&mirrored, 1, false, &mut ids).unwrap();
    let point = plain.get(1).unwrap();
    assert!(point.linked && !point.mirror_length);
}

// ── Umwandlung ──

#[test]
fn test_cubic_to_poly_matches_cubic() {
    let mut ids = PointIdGenerator::new();
    let cubic = CubicCurve::default();
    let poly = cubic_to_poly(&cubic, &mut ids);

    assert_eq!(poly.len(), 2);
    assert_eq!(poly.first().handle_out, Some(DVec2::new(0.25, 0.1)));
    let handle_in = poly.last().handle_in.unwrap();
    assert_abs_diff_eq!(handle_in.x, -0.75, epsilon = 1e-12);
    assert_abs_diff_eq!(handle_in.y, 0.0, epsilon = 1e-12);

    for i in 0..=10 {
        let x = i as f64 / 10.0;
        assert_abs_diff_eq!(poly.value_at(x), cubic.value_at(x), epsilon = 1e-9);
    }
}

#[test]
fn test_cubic_to_poly_linear_has_no_handles() {
    let mut ids = PointIdGenerator::new();
    let poly = cubic_to_poly(&CubicCurve::new(0.0, 0.0, 1.0, 1.0), &mut ids);
    assert!(poly.iter().all(|p| !p.has_handles()));
}

#[test]
fn test_poly_to_cubic_roundtrip() {
    let mut ids = PointIdGenerator::new();
    let cubic = CubicCurve::new(0.68, -0.6, 0.32, 1.6);
    let back = poly_to_cubic(&cubic_to_poly(&cubic, &mut ids));
    assert_abs_diff_eq!(back.p1.x, cubic.p1.x, epsilon = 1e-12);
    assert_abs_diff_eq!(back.p1.y, cubic.p1.y, epsilon = 1e-12);
    assert_abs_diff_eq!(back.p2.x, cubic.p2.x, epsilon = 1e-12);
    assert_abs_diff_eq!(back.p2.y, cubic.p2.y, epsilon = 1e-12);
}

#[test]
fn test_poly_to_cubic_chord_fallback() {
    let mut ids = PointIdGenerator::new();
    let cubic = poly_to_cubic(&PolyCurve::identity(&mut ids));
    assert_abs_diff_eq!(cubic.p1.x, 1.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(cubic.p1.y, 1.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(cubic.p2.x, 2.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(cubic.p2.y, 2.0 / 3.0, epsilon = 1e-12);
}

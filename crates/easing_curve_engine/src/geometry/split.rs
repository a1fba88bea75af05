//! Segment-Teilung (De Casteljau), Klick-Abstandstest und Einfüge-Prüfung.

use super::bezier::{evaluate_cubic_point, find_t_for_x, segment_controls, subdivide_cubic};
use crate::constants::{HIT_TEST_SAMPLES, MAX_POINTS, MIN_X_DELTA};
use crate::core::{PolyCurve, PolyPoint};
use glam::DVec2;

/// Minimaler Abstand von `point` zur Kurve.
///
/// Jedes Segment wird mit [`HIT_TEST_SAMPLES`] Schritten abgetastet; das
/// Ergebnis ist der kleinste Abstand zu einem Abtastpunkt.
pub fn nearest_distance_to_curve(point: DVec2, curve: &PolyCurve) -> f64 {
    curve
        .segments()
        .flat_map(|(prev, next)| {
            let [p0, cp1, cp2, p3] = segment_controls(prev, next);
            (0..=HIT_TEST_SAMPLES).map(move |i| {
                let t = i as f64 / HIT_TEST_SAMPLES as f64;
                evaluate_cubic_point(t, p0, cp1, cp2, p3)
            })
        })
        .map(|sample| sample.distance(point))
        .fold(f64::INFINITY, f64::min)
}

/// Teilt das Segment `prev → next` an der x-Position von `at_position`.
///
/// Gibt `None` zurück wenn weder `prev` ein ausgehendes noch `next` ein
/// eingehendes Handle hat (gerades Segment, nichts zu erhalten). Sonst
/// liefert die Funktion `(prev, neuer Punkt, next)`, deren zwei Segmente
/// geometrisch identisch zum ursprünglichen Segment sind. Der neue Punkt
/// hat noch keine ID.
pub fn split_segment(
    prev: &PolyPoint,
    next: &PolyPoint,
    at_position: DVec2,
) -> Option<(PolyPoint, PolyPoint, PolyPoint)> {
    if prev.handle_out.is_none() && next.handle_in.is_none() {
        log::debug!(
            "Segment {:.4}..{:.4} ist gerade, keine Teilung",
            prev.x(),
            next.x()
        );
        return None;
    }

    let [p0, cp1, cp2, p3] = segment_controls(prev, next);
    let t = find_t_for_x(at_position.x, p0, cp1, cp2, p3);
    let split = subdivide_cubic(t, p0, cp1, cp2, p3);
    let [_, left_cp1, left_cp2, on_curve] = split.left;
    let [_, right_cp1, right_cp2, _] = split.right;

    let new_prev = PolyPoint {
        handle_out: prev.handle_out.map(|_| left_cp1 - p0),
        ..*prev
    };
    let new_next = PolyPoint {
        handle_in: next.handle_in.map(|_| right_cp2 - p3),
        ..*next
    };
    let new_point = PolyPoint {
        id: None,
        position: on_curve,
        handle_in: Some(left_cp2 - on_curve),
        handle_out: Some(right_cp1 - on_curve),
        linked: true,
        mirror_length: !prev.mirror_length && next.mirror_length,
    };

    Some((new_prev, new_point, new_next))
}

/// Index, an dem ein Punkt mit `x` eingefügt würde, falls zulässig.
///
/// `None` wenn die Kurve bereits [`MAX_POINTS`] Punkte hat, `x` außerhalb
/// des Innenbereichs liegt oder der Abstand zu einem Nachbarn kleiner als
/// [`MIN_X_DELTA`] wäre.
pub fn insertion_index(curve: &PolyCurve, x: f64) -> Option<usize> {
    if curve.len() >= MAX_POINTS {
        log::debug!("Einfügen abgelehnt: Maximum von {} Punkten erreicht", MAX_POINTS);
        return None;
    }
    if !x.is_finite() {
        return None;
    }

    let points = curve.points();
    let index = points.partition_point(|p| p.x() < x);
    if index == 0 || index >= points.len() {
        return None;
    }

    let (prev, next) = (&points[index - 1], &points[index]);
    if x - prev.x() < MIN_X_DELTA || next.x() - x < MIN_X_DELTA {
        log::debug!("Einfügen bei x={:.5} abgelehnt: Abstand zu Nachbarn < ε", x);
        return None;
    }
    Some(index)
}

/// `true` wenn an der Stelle `x` ein Punkt eingefügt werden darf.
pub fn can_insert_at(curve: &PolyCurve, x: f64) -> bool {
    insertion_index(curve, x).is_some()
}

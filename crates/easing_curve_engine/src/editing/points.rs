//! Punkte einfügen, entfernen und verschieben.

use crate::constants::{DEFAULT_HANDLE_LENGTH, MIN_POINTS, MIN_X_DELTA, Y_RANGE_DRAG, Y_RANGE_EXPORT};
use crate::core::vector::clamp_scalar;
use crate::core::{PointId, PointIdGenerator, PolyCurve, PolyPoint};
use crate::geometry::{
    canonicalize, ensure_handles_with_length, insertion_index, nearest_distance_to_curve,
    split_segment,
};
use glam::DVec2;

/// Fügt an `position` einen Punkt ein und gibt die neue Kurve samt ID zurück.
///
/// Gekrümmte Segmente werden per De Casteljau geteilt (Form bleibt
/// erhalten). Auf geraden Segmenten wird der Punkt direkt an `position`
/// gesetzt und erhält verknüpfte Standard-Handles, höchstens so lang wie der
/// Abstand zum nächsten Nachbarn. `None` wenn das Einfügen
/// unzulässig ist (Maximum erreicht, Abstand < ε, außerhalb des Innenbereichs).
pub fn insert_point(
    curve: &PolyCurve,
    position: DVec2,
    ids: &mut PointIdGenerator,
) -> Option<(PolyCurve, PointId)> {
    let index = insertion_index(curve, position.x)?;
    let (prev, next) = (&curve.points()[index - 1], &curve.points()[index]);
    let id = ids.next_id();
    let mut points = curve.to_points();

    match split_segment(prev, next, position) {
        Some((new_prev, new_point, new_next)) => {
            points[index - 1] = new_prev;
            points[index] = new_next;
            points.insert(
                index,
                PolyPoint {
                    id: Some(id),
                    ..new_point
                },
            );
        }
        None => {
            let (min_y, max_y) = Y_RANGE_DRAG;
            let mut new_point = PolyPoint::new(position.x, clamp_scalar(position.y, min_y, max_y));
            new_point.id = Some(id);
            // Kontrollpunkte bleiben zwischen den Nachbarn (x-monoton)
            let gap = (position.x - prev.x()).min(next.x() - position.x);
            let length = DEFAULT_HANDLE_LENGTH.min(gap);
            let new_point = PolyPoint {
                linked: true,
                ..ensure_handles_with_length(new_point, Some(prev), Some(next), length)
            };
            points.insert(index, new_point);
        }
    }

    log::debug!("Punkt {:?} bei x={:.4} eingefügt", id, position.x);
    Some((canonicalize(&points, Y_RANGE_EXPORT, ids), id))
}

/// Wie [`insert_point`], aber nur wenn `position` höchstens `threshold` von
/// der Kurve entfernt ist (Klick auf die Kurve).
pub fn insert_point_near(
    curve: &PolyCurve,
    position: DVec2,
    threshold: f64,
    ids: &mut PointIdGenerator,
) -> Option<(PolyCurve, PointId)> {
    let distance = nearest_distance_to_curve(position, curve);
    if distance > threshold {
        log::debug!(
            "Klick zu weit von der Kurve entfernt ({:.4} > {:.4})",
            distance,
            threshold
        );
        return None;
    }
    insert_point(curve, position, ids)
}

/// Entfernt den Punkt an `index`.
///
/// Endpunkte und Kurven mit nur [`MIN_POINTS`] Punkten werden abgelehnt.
pub fn remove_point(curve: &PolyCurve, index: usize, ids: &mut PointIdGenerator) -> Option<PolyCurve> {
    if curve.len() <= MIN_POINTS {
        log::debug!("Entfernen abgelehnt: Minimum von {} Punkten", MIN_POINTS);
        return None;
    }
    if index == 0 || index >= curve.len() - 1 {
        log::debug!("Entfernen abgelehnt: Index {} ist Endpunkt oder ungültig", index);
        return None;
    }

    let mut points = curve.to_points();
    points.remove(index);
    Some(canonicalize(&points, Y_RANGE_EXPORT, ids))
}

/// Verschiebt den Punkt an `index` nach `position`; Handles wandern mit.
///
/// Endpunkte behalten ihr x, Innenpunkte bleiben mindestens ε von ihren
/// Nachbarn entfernt. y wird auf den Drag-Bereich geklemmt.
pub fn move_point(
    curve: &PolyCurve,
    index: usize,
    position: DVec2,
    ids: &mut PointIdGenerator,
) -> Option<PolyCurve> {
    let points = curve.points();
    let point = points.get(index)?;
    if !position.is_finite() {
        return None;
    }

    let last = points.len() - 1;
    let x = if index == 0 || index == last {
        point.x()
    } else {
        clamp_scalar(
            position.x,
            points[index - 1].x() + MIN_X_DELTA,
            points[index + 1].x() - MIN_X_DELTA,
        )
    };
    let (min_y, max_y) = Y_RANGE_DRAG;
    let y = clamp_scalar(position.y, min_y, max_y);

    let mut updated = curve.to_points();
    updated[index].position = DVec2::new(x, y);
    Some(canonicalize(&updated, Y_RANGE_EXPORT, ids))
}

/// Index des Punkts mit der angegebenen ID (Identitätsverfolgung über Bearbeitungen).
pub fn find_point_index(curve: &PolyCurve, id: PointId) -> Option<usize> {
    curve.index_of(id)
}

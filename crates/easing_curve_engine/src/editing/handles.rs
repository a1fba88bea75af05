//! Handles eines einzelnen Punkts bearbeiten.

use crate::constants::Y_RANGE_EXPORT;
use crate::core::vector::normalize;
use crate::core::{HandleSide, PointIdGenerator, PolyCurve, PolyPoint};
use crate::geometry::{align_mirror_length, canonicalize, ensure_handles};
use glam::DVec2;

/// Setzt ein Handle des Punkts an `index` auf `offset` (relativ zum Punkt).
///
/// Das Vorzeichen von x wird erzwungen (eingehend ≤ 0, ausgehend ≥ 0).
/// Bei verknüpften Punkten wird das Gegen-Handle entgegengesetzt
/// ausgerichtet; es behält seine Länge, mit `mirror_length` übernimmt es
/// die Länge des bewegten Handles.
pub fn move_handle(
    curve: &PolyCurve,
    index: usize,
    side: HandleSide,
    offset: DVec2,
    ids: &mut PointIdGenerator,
) -> Option<PolyCurve> {
    let point = *curve.get(index)?;
    if !offset.is_finite() {
        return None;
    }

    let offset = enforce_side(side, offset);
    let mut updated = point;
    updated.set_handle(side, Some(offset));

    let direction = normalize(offset);
    if point.linked && direction != DVec2::ZERO {
        let opposite = side.opposite();
        let length = if point.mirror_length {
            offset.length()
        } else {
            point
                .handle(opposite)
                .map(DVec2::length)
                .filter(|len| *len > 0.0)
                .unwrap_or(offset.length())
        };
        updated.set_handle(opposite, Some(enforce_side(opposite, -direction * length)));
    }

    Some(replace_point(curve, index, updated, ids))
}

/// Schaltet die Verknüpfung der Handles um.
///
/// Beim Einschalten werden fehlende Handles aus der Nachbar-Richtung
/// erzeugt und das Paar kollinear ausgerichtet. Ausschalten entfernt auch
/// `mirror_length`.
pub fn set_linked(
    curve: &PolyCurve,
    index: usize,
    linked: bool,
    ids: &mut PointIdGenerator,
) -> Option<PolyCurve> {
    let point = *curve.get(index)?;
    let updated = if linked {
        let (prev, next) = neighbors(curve, index);
        PolyPoint {
            linked: true,
            ..ensure_handles(point, prev, next)
        }
    } else {
        PolyPoint {
            linked: false,
            mirror_length: false,
            ..point
        }
    };
    Some(replace_point(curve, index, updated, ids))
}

/// Schaltet die Spiegellänge um. Einschalten verknüpft den Punkt und
/// gleicht beide Handle-Längen an.
pub fn set_mirror_length(
    curve: &PolyCurve,
    index: usize,
    mirror_length: bool,
    ids: &mut PointIdGenerator,
) -> Option<PolyCurve> {
    let point = *curve.get(index)?;
    let updated = if mirror_length {
        let (prev, next) = neighbors(curve, index);
        align_mirror_length(PolyPoint {
            linked: true,
            mirror_length: true,
            ..ensure_handles(point, prev, next)
        })
    } else {
        PolyPoint {
            mirror_length: false,
            ..point
        }
    };
    Some(replace_point(curve, index, updated, ids))
}

fn enforce_side(side: HandleSide, offset: DVec2) -> DVec2 {
    match side {
        HandleSide::In => DVec2::new(offset.x.min(0.0), offset.y),
        HandleSide::Out => DVec2::new(offset.x.max(0.0), offset.y),
    }
}

fn neighbors(curve: &PolyCurve, index: usize) -> (Option<&PolyPoint>, Option<&PolyPoint>) {
    let prev = index.checked_sub(1).and_then(|i| curve.get(i));
    (prev, curve.get(index + 1))
}

fn replace_point(
    curve: &PolyCurve,
    index: usize,
    point: PolyPoint,
    ids: &mut PointIdGenerator,
) -> PolyCurve {
    let mut points = curve.to_points();
    points[index] = point;
    canonicalize(&points, Y_RANGE_EXPORT, ids)
}

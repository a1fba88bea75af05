//! Handle-Invarianten: Tangenten ableiten, Verknüpfung/Spiegellänge erzwingen
//! und Punktlisten kanonisieren.
//!
//! Alle Funktionen nehmen Punkte als Wert und geben neue Werte zurück.

use super::bezier::is_negligible_handle;
use crate::constants::{DEFAULT_HANDLE_LENGTH, MIN_POINTS, MIN_X_DELTA};
use crate::core::vector::{clamp_scalar, normalize};
use crate::core::{PointIdGenerator, PolyCurve, PolyPoint};
use glam::DVec2;

/// Toleranz der Abstandsprüfung: Prozentwerte mit 2 Stellen (z.B. 50% und 50.01%)
/// liegen in f64 teils knapp unter ε auseinander.
const SPACING_SLACK: f64 = 1e-9;

/// Tangenten-Richtung (Einheitsvektor) eines Punkts aus seinen Nachbarn.
///
/// - beide Nachbarn: Richtung `next - prev`
/// - nur Nachfolger: `next - point`
/// - nur Vorgänger: `point - prev`
/// - sonst (oder bei Nullvektor): `(1, 0)`
pub fn derive_handle_direction(
    point: &PolyPoint,
    prev: Option<&PolyPoint>,
    next: Option<&PolyPoint>,
) -> DVec2 {
    let raw = match (prev, next) {
        (Some(prev), Some(next)) => (next.position - prev.position) * 0.5,
        (None, Some(next)) => next.position - point.position,
        (Some(prev), None) => point.position - prev.position,
        (None, None) => DVec2::X,
    };
    let direction = normalize(raw);
    if direction == DVec2::ZERO {
        DVec2::X
    } else {
        direction
    }
}

/// Stellt sicher, dass der Punkt ein kollineares Handle-Paar besitzt.
///
/// Verwendet [`DEFAULT_HANDLE_LENGTH`], siehe [`ensure_handles_with_length`].
pub fn ensure_handles(point: PolyPoint, prev: Option<&PolyPoint>, next: Option<&PolyPoint>) -> PolyPoint {
    ensure_handles_with_length(point, prev, next, DEFAULT_HANDLE_LENGTH)
}

/// Stellt sicher, dass der Punkt ein kollineares Handle-Paar besitzt.
///
/// Hat der Punkt kein Handle mit Länge > 0, werden beide aus der
/// Nachbar-Richtung mit `length` erzeugt (`out = +dir·length`,
/// `in = -dir·length`). Andernfalls dient das ausgehende (bzw. das einzige)
/// Handle als Referenz; das andere wird entgegengesetzt ausgerichtet und
/// behält seine eigene Länge, oder `length` falls diese 0 ist.
pub fn ensure_handles_with_length(
    point: PolyPoint,
    prev: Option<&PolyPoint>,
    next: Option<&PolyPoint>,
    length: f64,
) -> PolyPoint {
    let out_len = point.handle_out.map_or(0.0, DVec2::length);
    let in_len = point.handle_in.map_or(0.0, DVec2::length);
    let fallback = |own: f64| if own > 0.0 { own } else { length };

    match (point.handle_out, point.handle_in) {
        (Some(out), _) if out_len > 0.0 => PolyPoint {
            handle_in: Some(-normalize(out) * fallback(in_len)),
            ..point
        },
        (_, Some(incoming)) if in_len > 0.0 => PolyPoint {
            handle_out: Some(-normalize(incoming) * fallback(out_len)),
            ..point
        },
        _ => {
            let direction = derive_handle_direction(&point, prev, next);
            PolyPoint {
                handle_out: Some(direction * length),
                handle_in: Some(-direction * length),
                ..point
            }
        }
    }
}

/// Gleicht die Längen beider Handles eines verknüpften Punkts an.
///
/// Nicht verknüpfte Punkte verlieren nur `mirror_length`. Sonst werden beide
/// Handles auf `max(|out|, |in|)` gebracht, entgegengesetzt entlang der
/// Richtung des ausgehenden Handles (bzw. des eingehenden, falls das
/// ausgehende die Länge 0 hat).
pub fn align_mirror_length(point: PolyPoint) -> PolyPoint {
    if !point.linked {
        return PolyPoint {
            mirror_length: false,
            ..point
        };
    }

    let out = point.handle_out.unwrap_or(DVec2::ZERO);
    let incoming = point.handle_in.unwrap_or(DVec2::ZERO);
    let target = out.length().max(incoming.length());
    if target == 0.0 {
        return point;
    }

    let out_direction = if out.length() > 0.0 {
        normalize(out)
    } else {
        -normalize(incoming)
    };
    PolyPoint {
        handle_out: Some(out_direction * target),
        handle_in: Some(-out_direction * target),
        ..point
    }
}

/// Stellt alle Invarianten einer Mehrpunkt-Kurve her.
///
/// 1. stabil nach x sortieren
/// 2. jeden Punkt kopieren, fehlende IDs vergeben
/// 3. erster Punkt x = 0, letzter x = 1
/// 4. y auf `y_range` klemmen
/// 5. `handle_in.x ≤ 0`, `handle_out.x ≥ 0`
/// 6. Beide Handles entfernen, wenn beide innerhalb ε um Null liegen
/// 7. Flags bereinigen (`linked` nur mit Handles, `mirror_length` nur mit `linked`)
/// 8. Innenpunkte näher als ε am Vorgänger oder am Endpunkt verwerfen
///
/// Weniger als zwei Punkte ergeben die lineare Kurve `(0,0) → (1,1)`.
/// Die Funktion ist idempotent.
pub fn canonicalize(points: &[PolyPoint], y_range: (f64, f64), ids: &mut PointIdGenerator) -> PolyCurve {
    if points.len() < MIN_POINTS {
        log::warn!(
            "Kanonisierung mit {} Punkt(en), verwende lineare Kurve",
            points.len()
        );
        return PolyCurve::identity(ids);
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x().total_cmp(&b.x()));

    for id in sorted.iter().filter_map(|p| p.id) {
        ids.observe(id);
    }

    let last_index = sorted.len() - 1;
    for (index, point) in sorted.iter_mut().enumerate() {
        if point.id.is_none() {
            point.id = Some(ids.next_id());
        }
        *point = normalize_point(*point, index, last_index, y_range);
    }

    let mut kept: Vec<PolyPoint> = Vec::with_capacity(sorted.len());
    kept.push(sorted[0]);
    for point in &sorted[1..last_index] {
        let prev_x = kept.last().map_or(0.0, PolyPoint::x);
        let gap_prev = point.x() - prev_x;
        let gap_end = 1.0 - point.x();
        if gap_prev < MIN_X_DELTA - SPACING_SLACK || gap_end < MIN_X_DELTA - SPACING_SLACK {
            log::debug!(
                "Punkt {:?} bei x={:.5} verworfen: Abstand < ε",
                point.id,
                point.x()
            );
            continue;
        }
        kept.push(*point);
    }
    kept.push(sorted[last_index]);

    PolyCurve::from_canonical(kept)
}

/// Schritte 3–7 von [`canonicalize`] für einen einzelnen Punkt.
fn normalize_point(point: PolyPoint, index: usize, last_index: usize, (min_y, max_y): (f64, f64)) -> PolyPoint {
    let x = if index == 0 {
        0.0
    } else if index == last_index {
        1.0
    } else {
        clamp_scalar(point.x(), 0.0, 1.0)
    };
    let y = clamp_scalar(point.y(), min_y, max_y);

    let handle_in = point
        .handle_in
        .filter(|h| h.is_finite())
        .map(|h| DVec2::new(h.x.min(0.0), h.y));
    let handle_out = point
        .handle_out
        .filter(|h| h.is_finite())
        .map(|h| DVec2::new(h.x.max(0.0), h.y));
    // Nur beide zusammen entfernen
    let (handle_in, handle_out) =
        if is_negligible_handle(handle_in) && is_negligible_handle(handle_out) {
            (None, None)
        } else {
            (handle_in, handle_out)
        };

    let has_handles = handle_in.is_some() || handle_out.is_some();
    let linked = point.linked && has_handles;
    let mirror_length = point.mirror_length && linked;

    PolyPoint {
        id: point.id,
        position: DVec2::new(x, y),
        handle_in,
        handle_out,
        linked,
        mirror_length,
    }
}

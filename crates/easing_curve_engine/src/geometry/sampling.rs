//! Polylinien-Abtastung von Mehrpunkt-Kurven und y-Auswertung bei gegebenem x.

use super::bezier::{evaluate_cubic_point, is_straight_segment, segment_controls, solve_cubic_value};
use crate::constants::MIN_X_DELTA;
use crate::core::vector::{clamp_scalar, lerp};
use crate::core::{PolyCurve, PolyPoint};
use glam::DVec2;

/// Tastet die Kurve als Polylinie ab.
///
/// Je Segment werden `samples_per_segment` Punkte erzeugt (ab t = 0), danach
/// der Endpunkt der Kurve. Punkte, deren x den zuletzt behaltenen Punkt nicht
/// um mindestens [`MIN_X_DELTA`] übersteigt, werden verworfen. Liegen die
/// Kurvenenden exakt bei 0 bzw. 1, wird x der Randpunkte darauf gesetzt.
pub fn sample_curve_to_polyline(curve: &PolyCurve, samples_per_segment: usize) -> Vec<DVec2> {
    sample_points_to_polyline(curve.points(), samples_per_segment)
}

pub(crate) fn sample_points_to_polyline(points: &[PolyPoint], samples_per_segment: usize) -> Vec<DVec2> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let steps = samples_per_segment.max(1);

    let mut raw = Vec::with_capacity(points.len().saturating_sub(1) * steps + 1);
    for pair in points.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let [p0, cp1, cp2, p3] = segment_controls(prev, next);
        let straight = is_straight_segment(prev, next);
        for i in 0..steps {
            let t = i as f64 / steps as f64;
            raw.push(if straight {
                p0.lerp(p3, t)
            } else {
                evaluate_cubic_point(t, p0, cp1, cp2, p3)
            });
        }
    }
    raw.push(last.position);

    let mut samples: Vec<DVec2> = Vec::with_capacity(raw.len());
    for sample in raw {
        match samples.last() {
            Some(kept) if sample.x - kept.x < MIN_X_DELTA => {}
            _ => samples.push(sample),
        }
    }

    // Gleitkomma-Drift an den Kurvenrändern entfernen
    if first.x() == 0.0 {
        if let Some(head) = samples.first_mut() {
            head.x = 0.0;
        }
    }
    if last.x() == 1.0 {
        if let Some(tail) = samples.last_mut() {
            tail.x = 1.0;
        }
    }

    samples
}

/// y-Wert der Kurve an der Stelle `x`.
///
/// `x` wird auf den Bereich der Kurve geklemmt. Gerade Segmente werden
/// exakt linear interpoliert, gekrümmte über `find_t_for_x` gelöst.
pub(crate) fn sample_value_at(points: &[PolyPoint], x: f64) -> f64 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return x;
    };
    if points.len() == 1 {
        return first.y();
    }

    let x = clamp_scalar(x, first.x(), last.x());
    let upper = points.partition_point(|p| p.x() <= x);
    let index = upper.saturating_sub(1).min(points.len() - 2);
    let (prev, next) = (&points[index], &points[index + 1]);

    if is_straight_segment(prev, next) {
        let span = next.x() - prev.x();
        if span <= 0.0 {
            return prev.y();
        }
        return lerp(prev.y(), next.y(), (x - prev.x()) / span);
    }

    let [p0, cp1, cp2, p3] = segment_controls(prev, next);
    solve_cubic_value(x, p0, cp1, cp2, p3)
}

//! Polylinien-Vereinfachung nach Ramer-Douglas-Peucker.

use glam::DVec2;

/// Vereinfacht eine Polylinie; Punkte innerhalb `epsilon` zur Sehne entfallen.
///
/// Start- und Endpunkt bleiben immer erhalten. `epsilon <= 0` liefert die
/// Eingabe unverändert.
pub fn simplify_polyline(points: &[DVec2], epsilon: f64) -> Vec<DVec2> {
    if points.len() < 3 || epsilon <= 0.0 {
        return points.to_vec();
    }
    rdp(points, epsilon)
}

fn rdp(points: &[DVec2], epsilon: f64) -> Vec<DVec2> {
    let start = points[0];
    let end = points[points.len() - 1];
    if points.len() < 3 {
        return vec![start, end];
    }

    let (max_index, max_dist) = points[1..points.len() - 1]
        .iter()
        .enumerate()
        .map(|(i, &p)| (i + 1, perpendicular_distance(p, start, end)))
        .fold((0, 0.0), |best, cur| if cur.1 > best.1 { cur } else { best });

    if max_dist > epsilon {
        let mut left = rdp(&points[..=max_index], epsilon);
        let right = rdp(&points[max_index..], epsilon);
        // Verbindungspunkt nicht doppelt
        left.pop();
        left.extend(right);
        left
    } else {
        vec![start, end]
    }
}

/// Abstand von `point` zur Strecke `line_start → line_end`.
pub fn perpendicular_distance(point: DVec2, line_start: DVec2, line_end: DVec2) -> f64 {
    let line = line_end - line_start;
    let len_sq = line.length_squared();
    if len_sq < 1e-18 {
        return point.distance(line_start);
    }
    let t = ((point - line_start).dot(line) / len_sq).clamp(0.0, 1.0);
    point.distance(line_start + line * t)
}

//! Kubische Bézier-Auswertung (Bernstein, De Casteljau) und x-Lösung.

use crate::constants::{FIND_T_MAX_ITERATIONS, FIND_T_TOLERANCE, MIN_X_DELTA};
use crate::core::PolyPoint;
use glam::DVec2;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3 (skalar)
pub fn cubic_bezier(t: f64, p0: f64, p1: f64, p2: f64, p3: f64) -> f64 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Ergebnis einer De-Casteljau-Unterteilung bei `t`.
///
/// `left` und `right` sind die Kontrollpolygone der beiden Hälften,
/// `left[3] == right[0]` ist der Kurvenpunkt bei `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subdivision {
    pub left: [DVec2; 4],
    pub right: [DVec2; 4],
}

impl Subdivision {
    /// Kurvenpunkt an der Teilungsstelle.
    pub fn point(&self) -> DVec2 {
        self.left[3]
    }
}

/// Teilt das Segment `p0, cp1, cp2, p3` bei `t` in zwei kubische Segmente.
pub fn subdivide_cubic(t: f64, p0: DVec2, cp1: DVec2, cp2: DVec2, p3: DVec2) -> Subdivision {
    let q0 = p0.lerp(cp1, t);
    let q1 = cp1.lerp(cp2, t);
    let q2 = cp2.lerp(p3, t);
    let r0 = q0.lerp(q1, t);
    let r1 = q1.lerp(q2, t);
    let s = r0.lerp(r1, t);
    Subdivision {
        left: [p0, q0, r0, s],
        right: [s, r1, q2, p3],
    }
}

/// Kurvenpunkt bei `t` per De Casteljau.
pub fn evaluate_cubic_point(t: f64, p0: DVec2, cp1: DVec2, cp2: DVec2, p3: DVec2) -> DVec2 {
    subdivide_cubic(t, p0, cp1, cp2, p3).point()
}

/// Binärsuche nach dem Parameter `t`, dessen x-Wert `x` entspricht.
///
/// Setzt voraus, dass x(t) monoton steigt. Bricht nach
/// [`FIND_T_MAX_ITERATIONS`] Schritten oder bei einem x-Fehler unter
/// [`FIND_T_TOLERANCE`] ab und liefert immer das beste gefundene `t`.
pub fn find_t_for_x(x: f64, p0: DVec2, cp1: DVec2, cp2: DVec2, p3: DVec2) -> f64 {
    if x <= p0.x {
        return 0.0;
    }
    if x >= p3.x {
        return 1.0;
    }

    let mut low = 0.0_f64;
    let mut high = 1.0_f64;
    let mut best_t = 0.5;
    let mut best_error = f64::INFINITY;

    for _ in 0..FIND_T_MAX_ITERATIONS {
        let mid = 0.5 * (low + high);
        let x_mid = cubic_bezier(mid, p0.x, cp1.x, cp2.x, p3.x);
        let error = (x_mid - x).abs();
        if error < best_error {
            best_error = error;
            best_t = mid;
        }
        if error < FIND_T_TOLERANCE {
            break;
        }
        if x_mid < x {
            low = mid;
        } else {
            high = mid;
        }
    }

    best_t
}

/// y-Wert des Segments an der Stelle `x` (über `find_t_for_x`).
pub(crate) fn solve_cubic_value(x: f64, p0: DVec2, cp1: DVec2, cp2: DVec2, p3: DVec2) -> f64 {
    let t = find_t_for_x(x, p0, cp1, cp2, p3);
    cubic_bezier(t, p0.y, cp1.y, cp2.y, p3.y)
}

/// Kontrollpolygon des Segments zwischen zwei benachbarten Punkten.
///
/// Fehlende Handles fallen auf den Punkt selbst zurück.
pub fn segment_controls(prev: &PolyPoint, next: &PolyPoint) -> [DVec2; 4] {
    [
        prev.position,
        prev.out_control(),
        next.in_control(),
        next.position,
    ]
}

/// `true` wenn das Segment keine (oder nur vernachlässigbare) Handles hat.
pub fn is_straight_segment(prev: &PolyPoint, next: &PolyPoint) -> bool {
    is_negligible_handle(prev.handle_out) && is_negligible_handle(next.handle_in)
}

/// Handle fehlt oder beide Komponenten liegen innerhalb ε um Null.
pub(crate) fn is_negligible_handle(handle: Option<DVec2>) -> bool {
    handle.is_none_or(|h| h.x.abs() < MIN_X_DELTA && h.y.abs() < MIN_X_DELTA)
}

//! Umwandlung zwischen kubischer Kurve und Mehrpunkt-Kurve.

use crate::constants::Y_RANGE_EXPORT;
use crate::core::vector::clamp_scalar;
use crate::core::{CubicCurve, PointIdGenerator, PolyCurve, PolyPoint};
use crate::geometry::canonicalize;
use glam::DVec2;

/// Zwei-Punkt-Kurve mit denselben Steuerpunkten wie `cubic`.
///
/// Vernachlässigbare Handles (z.B. bei `cubic-bezier(0, 0, 1, 1)`) entfallen
/// bei der Kanonisierung.
pub fn cubic_to_poly(cubic: &CubicCurve, ids: &mut PointIdGenerator) -> PolyCurve {
    let start = PolyPoint::new(0.0, 0.0).with_handles(None, Some(cubic.p1));
    let end = PolyPoint::new(1.0, 1.0).with_handles(Some(cubic.p2 - DVec2::ONE), None);
    canonicalize(&[start, end], Y_RANGE_EXPORT, ids)
}

/// Nähert eine Mehrpunkt-Kurve durch eine kubische Kurve an.
///
/// Verwendet das ausgehende Handle des ersten und das eingehende Handle des
/// letzten Punkts, relativ zu den festen Ankern `(0,0)` und `(1,1)`. Fehlt
/// ein Handle, wird ein Drittel der Sehne verwendet. Innenpunkte gehen verloren.
pub fn poly_to_cubic(poly: &PolyCurve) -> CubicCurve {
    let third = DVec2::splat(1.0 / 3.0);
    let p1 = poly.first().handle_out.unwrap_or(third);
    let p2 = DVec2::ONE + poly.last().handle_in.unwrap_or(-third);
    if poly.len() > 2 {
        log::debug!(
            "poly_to_cubic: {} Innenpunkt(e) werden verworfen",
            poly.len() - 2
        );
    }
    CubicCurve::new(
        clamp_scalar(p1.x, 0.0, 1.0),
        p1.y,
        clamp_scalar(p2.x, 0.0, 1.0),
        p2.y,
    )
}

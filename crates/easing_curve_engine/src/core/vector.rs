//! Vektor-Kernel: Skalar- und Vektor-Primitive im normalisierten Kurvenraum.

use glam::DVec2;

/// Rechteckige Grenzen für [`clamp_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Einheitsquadrat `[0,1]×[0,1]`.
    pub const UNIT: Self = Self {
        min_x: 0.0,
        max_x: 1.0,
        min_y: 0.0,
        max_y: 1.0,
    };

    /// x in `[0,1]`, y im angegebenen Bereich (Überschwingen erlaubt).
    pub fn with_y_range((min_y, max_y): (f64, f64)) -> Self {
        Self {
            min_y,
            max_y,
            ..Self::UNIT
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Lineare Interpolation, `t` unbeschränkt.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Euklidische Länge von `(dx, dy)`.
pub fn vector_length(dx: f64, dy: f64) -> f64 {
    dx.hypot(dy)
}

/// Einheitsvektor von `(dx, dy)`.
///
/// Ein Nullvektor liefert `(0, 0)` statt einer Division durch Null.
pub fn normalize_vector(dx: f64, dy: f64) -> DVec2 {
    let len = vector_length(dx, dy);
    if len == 0.0 {
        return DVec2::ZERO;
    }
    DVec2::new(dx / len, dy / len)
}

/// Wie [`normalize_vector`], für einen `DVec2`.
pub fn normalize(v: DVec2) -> DVec2 {
    normalize_vector(v.x, v.y)
}

/// Klemmt einen Punkt in `bounds` (Standard: Einheitsquadrat).
pub fn clamp_point(p: DVec2, bounds: Option<Bounds>) -> DVec2 {
    let b = bounds.unwrap_or_default();
    DVec2::new(
        clamp_scalar(p.x, b.min_x, b.max_x),
        clamp_scalar(p.y, b.min_y, b.max_y),
    )
}

/// Klemmt ohne Panik bei vertauschten Grenzen (`f64::clamp` würde paniken).
pub(crate) fn clamp_scalar(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

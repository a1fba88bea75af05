//! Kurventypen: kubische Zwei-Handle-Kurve und kanonische Mehrpunkt-Kurve.

use super::point::{PointId, PointIdGenerator, PolyPoint};
use crate::geometry::{sample_value_at, solve_cubic_value};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Kubische Bézier-Kurve mit festen Ankern `(0,0)` und `(1,1)`.
///
/// `p1.x` und `p2.x` liegen in `[0,1]`, y ist frei (Überschwingen).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicCurve {
    pub p1: DVec2,
    pub p2: DVec2,
}

impl CubicCurve {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: DVec2::new(x1, y1),
            p2: DVec2::new(x2, y2),
        }
    }

    /// Easing-Ausgabe bei Fortschritt `x` (x wird auf `[0,1]` geklemmt).
    pub fn value_at(&self, x: f64) -> f64 {
        solve_cubic_value(x, DVec2::ZERO, self.p1, self.p2, DVec2::ONE)
    }
}

impl Default for CubicCurve {
    /// CSS-Keyword `ease`.
    fn default() -> Self {
        Self::new(0.25, 0.1, 0.25, 1.0)
    }
}

/// Kanonische Mehrpunkt-Kurve.
///
/// Wird ausschließlich über [`crate::geometry::canonicalize`] erzeugt und
/// erfüllt daher immer: aufsteigend sortiert, erster Punkt bei x = 0,
/// letzter bei x = 1, Mindestabstand [`crate::MIN_X_DELTA`], jede ID gesetzt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PolyCurve {
    points: Vec<PolyPoint>,
}

impl PolyCurve {
    pub(crate) fn from_canonical(points: Vec<PolyPoint>) -> Self {
        debug_assert!(points.len() >= 2);
        Self { points }
    }

    /// Lineare Kurve `(0,0) → (1,1)` ohne Handles.
    pub fn identity(ids: &mut PointIdGenerator) -> Self {
        let mut start = PolyPoint::new(0.0, 0.0);
        start.id = Some(ids.next_id());
        let mut end = PolyPoint::new(1.0, 1.0);
        end.id = Some(ids.next_id());
        Self::from_canonical(vec![start, end])
    }

    pub fn points(&self) -> &[PolyPoint] {
        &self.points
    }

    /// Kopie der Punkte als Arbeitsliste für eine Bearbeitung.
    pub fn to_points(&self) -> Vec<PolyPoint> {
        self.points.clone()
    }

    pub fn into_points(self) -> Vec<PolyPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false` für eine kanonische Kurve.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PolyPoint> {
        self.points.get(index)
    }

    pub fn first(&self) -> &PolyPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &PolyPoint {
        &self.points[self.points.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PolyPoint> {
        self.points.iter()
    }

    /// Benachbarte Punktpaare (ein Paar je Segment).
    pub fn segments(&self) -> impl Iterator<Item = (&PolyPoint, &PolyPoint)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Index des Punkts mit der angegebenen ID.
    pub fn index_of(&self, id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == Some(id))
    }

    /// Easing-Ausgabe bei Fortschritt `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        sample_value_at(&self.points, x)
    }
}

impl<'a> IntoIterator for &'a PolyCurve {
    type Item = &'a PolyPoint;
    type IntoIter = std::slice::Iter<'a, PolyPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Eine der beiden Kurvendarstellungen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "curve", rename_all = "snake_case")]
pub enum EasingCurve {
    Cubic(CubicCurve),
    Poly(PolyCurve),
}

impl EasingCurve {
    pub fn value_at(&self, x: f64) -> f64 {
        match self {
            Self::Cubic(curve) => curve.value_at(x),
            Self::Poly(curve) => curve.value_at(x),
        }
    }
}

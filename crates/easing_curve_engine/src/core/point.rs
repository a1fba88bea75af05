//! Kurvenpunkte mit optionalen Tangenten-Handles und stabiler Identität.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Stabile, opake ID eines Kurvenpunkts.
///
/// Bleibt über Sortieren, Einfügen und Verschieben erhalten, damit die UI
/// denselben Punkt weiterverfolgen kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub u64);

/// Vergibt fortlaufende Punkt-IDs (auto-increment).
///
/// Wird einmal von der Host-Anwendung erzeugt und an alle Operationen
/// gereicht, die neue Punkte anlegen.
#[derive(Debug, Clone, Default)]
pub struct PointIdGenerator {
    next_id: u64,
}

impl PointIdGenerator {
    /// Erstellt einen Generator, der bei 1 beginnt.
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Erstellt eine neue ID.
    pub fn next_id(&mut self) -> PointId {
        let id = PointId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        id
    }

    /// Merkt sich eine fremd vergebene ID, damit keine Kollision entsteht.
    pub fn observe(&mut self, id: PointId) {
        if id.0 >= self.next_id {
            self.next_id = id.0 + 1;
        }
    }
}

/// Seite eines Handles relativ zum Punkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleSide {
    /// Eingehend (zeigt zum Vorgänger, x ≤ 0)
    In,
    /// Ausgehend (zeigt zum Nachfolger, x ≥ 0)
    Out,
}

impl HandleSide {
    /// Die jeweils andere Seite.
    pub fn opposite(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

/// Punkt einer Mehrpunkt-Kurve.
///
/// Handles sind Offsets relativ zu `position`, keine absoluten Koordinaten.
/// `None` bedeutet "kein Handle" (nicht "Handle der Länge 0").
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolyPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PointId>,
    pub position: DVec2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_in: Option<DVec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_out: Option<DVec2>,
    /// Eingehendes und ausgehendes Handle bleiben kollinear
    #[serde(default)]
    pub linked: bool,
    /// Zusätzlich gleiche Länge beider Handles (nur mit `linked` sinnvoll)
    #[serde(default)]
    pub mirror_length: bool,
}

impl PolyPoint {
    /// Punkt ohne Handles und ohne ID.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            id: None,
            position: DVec2::new(x, y),
            handle_in: None,
            handle_out: None,
            linked: false,
            mirror_length: false,
        }
    }

    /// Setzt beide Handles.
    pub fn with_handles(self, handle_in: Option<DVec2>, handle_out: Option<DVec2>) -> Self {
        Self {
            handle_in,
            handle_out,
            ..self
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// `true` wenn mindestens ein Handle existiert.
    pub fn has_handles(&self) -> bool {
        self.handle_in.is_some() || self.handle_out.is_some()
    }

    pub fn handle(&self, side: HandleSide) -> Option<DVec2> {
        match side {
            HandleSide::In => self.handle_in,
            HandleSide::Out => self.handle_out,
        }
    }

    pub fn set_handle(&mut self, side: HandleSide, offset: Option<DVec2>) {
        match side {
            HandleSide::In => self.handle_in = offset,
            HandleSide::Out => self.handle_out = offset,
        }
    }

    /// Absolute Position des ausgehenden Steuerpunkts (Punkt selbst ohne Handle).
    pub fn out_control(&self) -> DVec2 {
        self.position + self.handle_out.unwrap_or(DVec2::ZERO)
    }

    /// Absolute Position des eingehenden Steuerpunkts (Punkt selbst ohne Handle).
    pub fn in_control(&self) -> DVec2 {
        self.position + self.handle_in.unwrap_or(DVec2::ZERO)
    }
}

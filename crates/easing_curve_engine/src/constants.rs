//! Numerische Grenzwerte und Standardwerte der Kurven-Engine.
//!
//! Die Host-Anwendung (`EditorOptions`) verwendet diese Werte als Defaults
//! und klemmt Benutzereingaben auf die hier definierten Bereiche.

// ── Punkte ──────────────────────────────────────────────────────────

/// Minimaler Abstand in x zwischen zwei benachbarten Kurvenpunkten.
pub const MIN_X_DELTA: f64 = 1e-4;
/// Untergrenze für die Punktanzahl einer Mehrpunkt-Kurve.
pub const MIN_POINTS: usize = 2;
/// Obergrenze für interaktives Einfügen von Punkten.
pub const MAX_POINTS: usize = 30;

// ── Handles ─────────────────────────────────────────────────────────

/// Länge synthetisierter Tangenten-Handles (normalisierter Kurvenraum).
pub const DEFAULT_HANDLE_LENGTH: f64 = 0.15;

// ── Auswertung ──────────────────────────────────────────────────────

/// Maximale Iterationen der Binärsuche in `find_t_for_x`.
pub const FIND_T_MAX_ITERATIONS: usize = 20;
/// Toleranz in x, ab der `find_t_for_x` abbricht.
pub const FIND_T_TOLERANCE: f64 = 1e-4;
/// Abtastungen je Segment für den Klick-Abstandstest.
pub const HIT_TEST_SAMPLES: usize = 40;
/// Maximaler Abstand (normalisiert), ab dem ein Klick als "auf der Kurve" gilt.
pub const HIT_TEST_THRESHOLD: f64 = 0.1;

// ── Wertebereiche (y) ───────────────────────────────────────────────

/// y-Bereich für Normalisierung und CSS-Export.
pub const Y_RANGE_EXPORT: (f64, f64) = (-2.0, 3.0);
/// y-Bereich beim interaktiven Verschieben von Punkten.
pub const Y_RANGE_DRAG: (f64, f64) = (-0.5, 1.5);

// ── CSS-Export ──────────────────────────────────────────────────────

/// Abtastungen je Segment für `linear()`-Export.
pub const LINEAR_SAMPLES_PER_SEGMENT: usize = 20;
/// Obergrenze der Douglas-Peucker-Toleranz.
pub const SIMPLIFY_MAX: f64 = 0.05;
/// Standard-Nachkommastellen für y-Werte in `linear()`.
pub const ROUND_DEFAULT: u32 = 5;
/// Maximale Nachkommastellen für y-Werte in `linear()`.
pub const ROUND_MAX: u32 = 5;
/// Nachkommastellen in `cubic-bezier()`.
pub const CUBIC_DECIMALS: usize = 3;

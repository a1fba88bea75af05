//! Reine Kurven-Geometrie ohne Zustand.
//!
//! Aufgeteilt in:
//! - `bezier`: Bernstein-/De-Casteljau-Auswertung, Unterteilung, x-Lösung
//! - `sampling`: Polylinien-Abtastung, y bei gegebenem x
//! - `split`: Segment-Teilung, Klick-Abstandstest, Einfüge-Prüfung
//! - `handles`: Tangenten ableiten, Verknüpfung/Spiegellänge, Kanonisierung
//! - `simplify`: Ramer-Douglas-Peucker

pub mod bezier;
pub mod handles;
pub mod sampling;
pub mod simplify;
pub mod split;

pub use bezier::{
    cubic_bezier, evaluate_cubic_point, find_t_for_x, is_straight_segment, segment_controls,
    subdivide_cubic, Subdivision,
};
pub use handles::{
    align_mirror_length, canonicalize, derive_handle_direction, ensure_handles,
    ensure_handles_with_length,
};
pub use sampling::sample_curve_to_polyline;
pub use simplify::{perpendicular_distance, simplify_polyline};
pub use split::{can_insert_at, insertion_index, nearest_distance_to_curve, split_segment};

pub(crate) use bezier::solve_cubic_value;
pub(crate) use sampling::sample_value_at;

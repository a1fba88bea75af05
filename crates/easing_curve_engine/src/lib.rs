//! Kurven-Engine des CSS Easing Editors.
//!
//! Reine Datenstrukturen und Algorithmen ohne UI: kubische und
//! Mehrpunkt-Bézier-Kurven im normalisierten Raum, Handle-Invarianten,
//! Segment-Teilung und ein Codec für `cubic-bezier()` / `linear()`.
//!
//! Alle Operationen sind synchron und geben neue Werte zurück; kanonische
//! Kurven entstehen nur über [`geometry::canonicalize`].

pub mod constants;
pub mod core;
pub mod css;
pub mod editing;
pub mod geometry;

pub use constants::*;
pub use crate::core::{
    clamp_point, lerp, normalize, normalize_vector, vector_length, Bounds, CubicCurve,
    EasingCurve, HandleSide, PointId, PointIdGenerator, PolyCurve, PolyPoint,
};
pub use css::{
    decode_cubic, decode_linear, decode_timing_function, encode_cubic, encode_linear,
    find_preset, keyword_curve, parse_cubic, parse_linear, parse_timing_function, CssOutput,
    CssParseError, EasingPreset, LinearExportOptions, PresetCategory, TimingVariant, PRESETS,
};
pub use editing::{
    cubic_to_poly, find_point_index, insert_point, insert_point_near, move_handle, move_point,
    poly_to_cubic, remove_point, set_linked, set_mirror_length,
};
pub use geometry::{
    align_mirror_length, can_insert_at, canonicalize, cubic_bezier, derive_handle_direction,
    ensure_handles, ensure_handles_with_length, evaluate_cubic_point, find_t_for_x,
    insertion_index, nearest_distance_to_curve, perpendicular_distance, sample_curve_to_polyline,
    segment_controls, simplify_polyline, split_segment, subdivide_cubic, Subdivision,
};

//! Core-Domänentypen: Punkte, Handles, Kurven und der Vektor-Kernel.

pub mod curve;
pub mod point;
pub mod vector;

pub use curve::{CubicCurve, EasingCurve, PolyCurve};
pub use point::{HandleSide, PointId, PointIdGenerator, PolyPoint};
pub use vector::{clamp_point, lerp, normalize, normalize_vector, vector_length, Bounds};

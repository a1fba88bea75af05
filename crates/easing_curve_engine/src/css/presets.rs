//! Statischer Preset-Katalog und CSS-Keywords.
//!
//! Feder-, Bounce- und Elastic-Kurven werden nicht simuliert, sondern liegen
//! als fertige `linear()`-Strings vor.

use crate::core::CubicCurve;
use serde::Serialize;

/// Gruppe eines Presets (für Dropdowns in der UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    /// CSS-Keywords (`ease`, `ease-in`, …)
    Keyword,
    /// Klassische kubische Kurven (Sine, Cubic, Expo, Back)
    Cubic,
    /// Mehrpunkt-Kurven als `linear()`
    Linear,
}

/// Benannte Timing-Funktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EasingPreset {
    pub name: &'static str,
    pub category: PresetCategory,
    pub css: &'static str,
}

const fn preset(name: &'static str, category: PresetCategory, css: &'static str) -> EasingPreset {
    EasingPreset {
        name,
        category,
        css,
    }
}

pub const PRESETS: &[EasingPreset] = &[
    // ── Keywords ────────────────────────────────────────────────
    preset("linear", PresetCategory::Keyword, "linear"),
    preset("ease", PresetCategory::Keyword, "ease"),
    preset("ease-in", PresetCategory::Keyword, "ease-in"),
    preset("ease-out", PresetCategory::Keyword, "ease-out"),
    preset("ease-in-out", PresetCategory::Keyword, "ease-in-out"),
    // ── Kubisch ─────────────────────────────────────────────────
    preset("ease-in-sine", PresetCategory::Cubic, "cubic-bezier(0.12, 0, 0.39, 0)"),
    preset("ease-out-sine", PresetCategory::Cubic, "cubic-bezier(0.61, 1, 0.88, 1)"),
    preset("ease-in-out-sine", PresetCategory::Cubic, "cubic-bezier(0.37, 0, 0.63, 1)"),
    preset("ease-in-cubic", PresetCategory::Cubic, "cubic-bezier(0.32, 0, 0.67, 0)"),
    preset("ease-out-cubic", PresetCategory::Cubic, "cubic-bezier(0.33, 1, 0.68, 1)"),
    preset("ease-in-out-cubic", PresetCategory::Cubic, "cubic-bezier(0.65, 0, 0.35, 1)"),
    preset("ease-in-expo", PresetCategory::Cubic, "cubic-bezier(0.7, 0, 0.84, 0)"),
    preset("ease-out-expo", PresetCategory::Cubic, "cubic-bezier(0.16, 1, 0.3, 1)"),
    preset("ease-in-back", PresetCategory::Cubic, "cubic-bezier(0.36, 0, 0.66, -0.56)"),
    preset("ease-out-back", PresetCategory::Cubic, "cubic-bezier(0.34, 1.56, 0.64, 1)"),
    preset("ease-in-out-back", PresetCategory::Cubic, "cubic-bezier(0.68, -0.6, 0.32, 1.6)"),
    // ── linear() ────────────────────────────────────────────────
    preset(
        "bounce",
        PresetCategory::Linear,
        "linear(0, 0.004, 0.016, 0.035, 0.063, 0.098, 0.141 13.6%, 0.25, 0.391, 0.563, 0.765, \
         1, 0.891 40.9%, 0.848, 0.813, 0.785, 0.766, 0.754, 0.75, 0.754, 0.766, 0.785, 0.813, \
         0.848, 0.891 68.2%, 1 72.7%, 0.973, 0.953, 0.941, 0.938, 0.941, 0.953, 0.973, 1, \
         0.988, 0.984, 0.988, 1)",
    ),
    preset(
        "spring",
        PresetCategory::Linear,
        "linear(0, 0.009, 0.035 2.1%, 0.141, 0.281 6.7%, 0.723 12.9%, 0.938 16.7%, 1.017, \
         1.077, 1.121, 1.149 24.3%, 1.159, 1.163, 1.161, 1.154 29.9%, 1.129 32.8%, \
         1.051 39.6%, 1.017 43.1%, 0.991, 0.977 51%, 0.974 53.8%, 0.975 57.1%, 0.997 69.8%, \
         1.003 76.9%, 1.004 83.8%, 1)",
    ),
    preset(
        "elastic",
        PresetCategory::Linear,
        "linear(0, 0.218 2.1%, 0.862 6.5%, 1.114, 1.296 10.7%, 1.346, 1.37 12.9%, 1.373, \
         1.364 14.5%, 1.315 16.2%, 1.032 21.8%, 0.941 24%, 0.891 25.9%, 0.877, 0.869 27.8%, \
         0.87, 0.882 30.7%, 0.907 32.4%, 1.012 38.2%, 1.036 40.2%, 1.046, 1.05 43.7%, \
         1.045 46.3%, 1.023 49.4%, 0.99 56.6%, 0.985 60.1%, 0.988 64.5%, 1.003 73.4%, \
         1.006 77.4%, 1.001 90%, 1)",
    ),
    preset(
        "step-middle",
        PresetCategory::Linear,
        "linear(0, 0 49.99%, 1 50.01%, 1)",
    ),
];

/// Sucht ein Preset nach Namen (Groß/Klein egal).
pub fn find_preset(name: &str) -> Option<&'static EasingPreset> {
    let name = name.trim();
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Kubische Kurve eines CSS-Keywords.
pub fn keyword_curve(keyword: &str) -> Option<CubicCurve> {
    let curve = match keyword.trim().to_ascii_lowercase().as_str() {
        "linear" => CubicCurve::new(0.0, 0.0, 1.0, 1.0),
        "ease" => CubicCurve::new(0.25, 0.1, 0.25, 1.0),
        "ease-in" => CubicCurve::new(0.42, 0.0, 1.0, 1.0),
        "ease-out" => CubicCurve::new(0.0, 0.0, 0.58, 1.0),
        "ease-in-out" => CubicCurve::new(0.42, 0.0, 0.58, 1.0),
        _ => return None,
    };
    Some(curve)
}

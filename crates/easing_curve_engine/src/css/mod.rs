//! CSS-Codec für `cubic-bezier()` und `linear()` Timing-Funktionen.
//!
//! Die `decode_*`-Funktionen liefern `None` bei ungültiger Eingabe, die
//! `parse_*`-Varianten den Grund als [`CssParseError`].

pub mod cubic;
pub mod linear;
pub mod presets;

pub use cubic::{decode_cubic, encode_cubic, parse_cubic};
pub use linear::{decode_linear, encode_linear, parse_linear};
pub use presets::{find_preset, keyword_curve, EasingPreset, PresetCategory, PRESETS};

use crate::constants::{ROUND_DEFAULT, ROUND_MAX, SIMPLIFY_MAX};
use crate::core::{EasingCurve, PointIdGenerator};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fehler beim Parsen einer CSS-Timing-Funktion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CssParseError {
    #[error("Unbekannte Timing-Funktion: '{0}'")]
    UnknownFunction(String),
    #[error("cubic-bezier() erwartet 4 Argumente, gefunden: {0}")]
    CubicArity(usize),
    #[error("Ungueltige Zahl: '{0}'")]
    InvalidNumber(String),
    #[error("Ungueltiger Stopp in linear(): '{0}'")]
    InvalidStop(String),
    #[error("linear() benoetigt mindestens 2 Stopps, gefunden: {0}")]
    TooFewStops(usize),
}

/// Ziel-Eigenschaft im erzeugten CSS-Block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingVariant {
    #[default]
    Animation,
    Transition,
}

impl TimingVariant {
    /// Name der CSS-Eigenschaft.
    pub fn property(self) -> &'static str {
        match self {
            Self::Animation => "animation-timing-function",
            Self::Transition => "transition-timing-function",
        }
    }
}

impl FromStr for TimingVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "animation" => Ok(Self::Animation),
            "transition" => Ok(Self::Transition),
            other => Err(format!(
                "Unbekannte Variante '{other}' (erwartet: animation, transition)"
            )),
        }
    }
}

/// Ergebnis eines Exports: vollständiger CSS-Block und nackte Timing-Funktion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssOutput {
    pub code: String,
    pub timing_function: String,
}

/// Parameter für [`encode_linear`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearExportOptions {
    /// Douglas-Peucker-Toleranz, `[0, 0.05]` (0 = keine Vereinfachung)
    pub simplify: f64,
    /// Nachkommastellen für y, `[0, 5]`
    pub round: u32,
}

impl Default for LinearExportOptions {
    fn default() -> Self {
        Self {
            simplify: 0.0,
            round: ROUND_DEFAULT,
        }
    }
}

impl LinearExportOptions {
    /// Klemmt beide Werte auf ihren gültigen Bereich.
    pub fn sanitized(self) -> Self {
        let simplify = if self.simplify.is_finite() {
            self.simplify.clamp(0.0, SIMPLIFY_MAX)
        } else {
            0.0
        };
        Self {
            simplify,
            round: self.round.min(ROUND_MAX),
        }
    }
}

/// Parst eine beliebige unterstützte Timing-Funktion.
///
/// Akzeptiert die Keywords `linear`, `ease`, `ease-in`, `ease-out`,
/// `ease-in-out` sowie `cubic-bezier(...)` und `linear(...)`.
pub fn parse_timing_function(
    text: &str,
    ids: &mut PointIdGenerator,
) -> Result<EasingCurve, CssParseError> {
    let trimmed = text.trim().trim_end_matches(';').trim();
    if let Some(curve) = keyword_curve(trimmed) {
        return Ok(EasingCurve::Cubic(curve));
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("cubic-bezier") {
        parse_cubic(trimmed).map(EasingCurve::Cubic)
    } else if lower.starts_with("linear") {
        parse_linear(trimmed, ids).map(EasingCurve::Poly)
    } else {
        Err(CssParseError::UnknownFunction(trimmed.to_string()))
    }
}

/// Wie [`parse_timing_function`], Fehler werden nur geloggt.
pub fn decode_timing_function(text: &str, ids: &mut PointIdGenerator) -> Option<EasingCurve> {
    parse_timing_function(text, ids)
        .inspect_err(|e| log::debug!("Timing-Funktion nicht lesbar: {e}"))
        .ok()
}

/// Endliche Zahl aus einem CSS-Token.
pub(crate) fn parse_number(token: &str) -> Result<f64, CssParseError> {
    let token = token.trim();
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CssParseError::InvalidNumber(token.to_string())),
    }
}

/// Formatiert mit fester Anzahl Nachkommastellen; `-0` wird zu `0`.
pub(crate) fn format_fixed(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    if formatted.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        return format!("{:.decimals$}", 0.0);
    }
    formatted
}

/// Wie [`format_fixed`], ohne abschließende Nullen.
pub(crate) fn format_trimmed(value: f64, decimals: usize) -> String {
    let formatted = format_fixed(value, decimals);
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Name der Custom Property ohne führendes `--`, Fallback `ease-custom`.
pub(crate) fn property_name(name: &str) -> &str {
    let name = name.trim().trim_start_matches("--");
    if name.is_empty() { "ease-custom" } else { name }
}

/// Ein CSS-Block mit Custom Property und Timing-Eigenschaft.
pub(crate) fn css_rule(name: &str, variant: TimingVariant, timing_function: &str) -> String {
    let name = property_name(name);
    format!(
        ".{name} {{\n  --{name}: {timing_function};\n  {}: var(--{name});\n}}",
        variant.property()
    )
}

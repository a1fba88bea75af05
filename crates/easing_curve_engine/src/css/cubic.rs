//! `cubic-bezier(x1, y1, x2, y2)` lesen und schreiben.

use super::{css_rule, format_fixed, parse_number, CssOutput, CssParseError, TimingVariant};
use crate::constants::CUBIC_DECIMALS;
use crate::core::vector::clamp_scalar;
use crate::core::CubicCurve;
use regex::Regex;
use std::sync::LazyLock;

static CUBIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*cubic-bezier\s*\(([^()]*)\)\s*;?\s*$")
        .expect("cubic-bezier-Pattern ist statisch gültig")
});

/// Schreibt die Kurve als `cubic-bezier()` mit 3 Nachkommastellen.
pub fn encode_cubic(curve: &CubicCurve, name: &str, variant: TimingVariant) -> CssOutput {
    let timing_function = format!(
        "cubic-bezier({}, {}, {}, {})",
        format_fixed(curve.p1.x, CUBIC_DECIMALS),
        format_fixed(curve.p1.y, CUBIC_DECIMALS),
        format_fixed(curve.p2.x, CUBIC_DECIMALS),
        format_fixed(curve.p2.y, CUBIC_DECIMALS),
    );
    CssOutput {
        code: css_rule(name, variant, &timing_function),
        timing_function,
    }
}

/// Parst `cubic-bezier(a, b, c, d)` (Groß/Klein egal, Leerraum tolerant).
///
/// Genau vier endliche Zahlen; x-Werte werden auf `[0,1]` geklemmt, y bleibt frei.
pub fn parse_cubic(text: &str) -> Result<CubicCurve, CssParseError> {
    let captures = CUBIC_PATTERN
        .captures(text)
        .ok_or_else(|| CssParseError::UnknownFunction(text.trim().to_string()))?;
    let args: Vec<&str> = captures[1].split(',').collect();
    let [x1, y1, x2, y2] = args.as_slice() else {
        return Err(CssParseError::CubicArity(args.len()));
    };

    Ok(CubicCurve::new(
        clamp_scalar(parse_number(x1)?, 0.0, 1.0),
        parse_number(y1)?,
        clamp_scalar(parse_number(x2)?, 0.0, 1.0),
        parse_number(y2)?,
    ))
}

/// Wie [`parse_cubic`], aber `None` statt Fehler.
pub fn decode_cubic(text: &str) -> Option<CubicCurve> {
    parse_cubic(text)
        .inspect_err(|e| log::debug!("cubic-bezier nicht lesbar: {e}"))
        .ok()
}

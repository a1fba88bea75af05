//! `linear(y1 [x1%], y2 [x2%], …)` lesen und schreiben.

use super::{
    css_rule, format_trimmed, parse_number, CssOutput, CssParseError, LinearExportOptions,
    TimingVariant,
};
use crate::constants::{LINEAR_SAMPLES_PER_SEGMENT, Y_RANGE_EXPORT};
use crate::core::vector::lerp;
use crate::core::{clamp_point, Bounds, PointIdGenerator, PolyCurve, PolyPoint};
use crate::geometry::{canonicalize, sample_curve_to_polyline, simplify_polyline};
use glam::DVec2;
use regex::Regex;
use std::sync::LazyLock;

static LINEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*linear\s*\(([^()]*)\)\s*;?\s*$")
        .expect("linear-Pattern ist statisch gültig")
});

/// Ausgabe für entartete Kurven (weniger als zwei Abtastpunkte).
const DEGENERATE_LINEAR: &str = "linear(0, 1)";

/// Exportiert die Kurve als `linear()`.
///
/// Ablauf: Abtastung mit 20 Punkten je Segment, x auf `[0,1]` und y auf
/// `[-2,3]` klemmen, Randpunkte erneut einrasten, optional Douglas-Peucker,
/// y auf `round` Stellen runden. x wird als Prozentwert mit 2 Stellen geschrieben.
pub fn encode_linear(
    curve: &PolyCurve,
    name: &str,
    variant: TimingVariant,
    options: LinearExportOptions,
) -> CssOutput {
    let options = options.sanitized();
    let bounds = Bounds::with_y_range(Y_RANGE_EXPORT);

    let mut samples: Vec<DVec2> = sample_curve_to_polyline(curve, LINEAR_SAMPLES_PER_SEGMENT)
        .into_iter()
        .map(|p| clamp_point(p, Some(bounds)))
        .collect();
    if curve.first().x() == 0.0 {
        if let Some(head) = samples.first_mut() {
            head.x = 0.0;
        }
    }
    if curve.last().x() == 1.0 {
        if let Some(tail) = samples.last_mut() {
            tail.x = 1.0;
        }
    }

    let samples = simplify_polyline(&samples, options.simplify);

    let timing_function = if samples.len() < 2 {
        log::warn!(
            "linear()-Export mit {} Abtastpunkt(en), verwende {}",
            samples.len(),
            DEGENERATE_LINEAR
        );
        DEGENERATE_LINEAR.to_string()
    } else {
        let decimals = options.round as usize;
        let stops: Vec<String> = samples
            .iter()
            .map(|p| {
                format!(
                    "{} {}%",
                    format_trimmed(p.y, decimals),
                    format_trimmed(p.x * 100.0, 2)
                )
            })
            .collect();
        format!("linear({})", stops.join(", "))
    };

    CssOutput {
        code: css_rule(name, variant, &timing_function),
        timing_function,
    }
}

/// Parst `linear(stop, stop, …)` zu einer kanonischen Mehrpunkt-Kurve.
///
/// Jeder Stopp ist `<zahl> [<prozent>] [<prozent>]`. Fehlende Positionen:
/// erster Stopp 0%, letzter 100%, dazwischen gleichmäßig zwischen den
/// nächsten angegebenen Nachbarn. Positionen kleiner als eine vorherige
/// werden auf diese angehoben.
pub fn parse_linear(text: &str, ids: &mut PointIdGenerator) -> Result<PolyCurve, CssParseError> {
    let captures = LINEAR_PATTERN
        .captures(text)
        .ok_or_else(|| CssParseError::UnknownFunction(text.trim().to_string()))?;

    let mut stops: Vec<(f64, Option<f64>)> = Vec::new();
    for raw in captures[1].split(',') {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        match tokens.as_slice() {
            [value] => stops.push((parse_number(value)?, None)),
            [value, position] => stops.push((parse_number(value)?, Some(parse_percent(position)?))),
            [value, from, to] => {
                let value = parse_number(value)?;
                stops.push((value, Some(parse_percent(from)?)));
                stops.push((value, Some(parse_percent(to)?)));
            }
            _ => return Err(CssParseError::InvalidStop(raw.trim().to_string())),
        }
    }

    if stops.len() < 2 {
        return Err(CssParseError::TooFewStops(stops.len()));
    }

    let positions: Vec<Option<f64>> = stops.iter().map(|&(_, x)| x).collect();
    let xs = resolve_positions(positions);

    let points: Vec<PolyPoint> = stops
        .iter()
        .zip(xs)
        .map(|(&(y, _), x)| PolyPoint::new(x, y))
        .collect();
    Ok(canonicalize(&points, Y_RANGE_EXPORT, ids))
}

/// Wie [`parse_linear`], aber `None` statt Fehler.
pub fn decode_linear(text: &str, ids: &mut PointIdGenerator) -> Option<PolyCurve> {
    parse_linear(text, ids)
        .inspect_err(|e| log::debug!("linear() nicht lesbar: {e}"))
        .ok()
}

/// `50%` → `0.5`.
fn parse_percent(token: &str) -> Result<f64, CssParseError> {
    let Some(number) = token.trim().strip_suffix('%') else {
        return Err(CssParseError::InvalidStop(token.trim().to_string()));
    };
    Ok(parse_number(number)? / 100.0)
}

/// Füllt fehlende Stopp-Positionen auf (mindestens zwei Einträge vorausgesetzt).
fn resolve_positions(mut positions: Vec<Option<f64>>) -> Vec<f64> {
    let last = positions.len() - 1;
    if positions[0].is_none() {
        positions[0] = Some(0.0);
    }
    if positions[last].is_none() {
        positions[last] = Some(1.0);
    }

    // Nicht-fallende Positionen wie in CSS
    let mut running = f64::NEG_INFINITY;
    for x in positions.iter_mut().flatten() {
        if *x < running {
            *x = running;
        }
        running = *x;
    }

    let anchors: Vec<(usize, f64)> = positions
        .iter()
        .enumerate()
        .filter_map(|(i, x)| x.map(|x| (i, x)))
        .collect();

    let mut resolved = vec![0.0; positions.len()];
    for pair in anchors.windows(2) {
        let ((start, x0), (end, x1)) = (pair[0], pair[1]);
        let span = (end - start) as f64;
        for (k, slot) in resolved.iter_mut().enumerate().take(end + 1).skip(start) {
            *slot = lerp(x0, x1, (k - start) as f64 / span);
        }
    }
    resolved
}

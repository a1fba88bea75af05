//! Integrationstests für den CSS-Codec:
//! - cubic-bezier()/linear() über die öffentliche API lesen und schreiben
//! - Export bearbeiteter Kurven und erneutes Einlesen
//! - Preset-Katalog

use approx::assert_abs_diff_eq;
use css_easing_editor::engine::{
    cubic_to_poly, decode_cubic, decode_linear, encode_cubic, encode_linear, find_preset,
    insert_point, parse_timing_function, sample_curve_to_polyline, CubicCurve, EasingCurve,
    LinearExportOptions, PointIdGenerator, TimingVariant, PRESETS,
};
use glam::DVec2;

#[test]
fn test_cubic_text_roundtrip_is_stable() {
    let text = "cubic-bezier(0.680, -0.550, 0.265, 1.550)";
    let curve = decode_cubic(text).unwrap();
    let encoded = encode_cubic(&curve, "back", TimingVariant::Animation);
    assert_eq!(encoded.timing_function, text);
    assert_eq!(decode_cubic(&encoded.timing_function), Some(curve));
}

#[test]
fn test_edited_curve_exports_and_reimports() {
    let mut ids = PointIdGenerator::new();
    let curve = cubic_to_poly(&CubicCurve::new(0.25, 0.1, 0.25, 1.0), &mut ids);
    let (curve, _) = insert_point(&curve, DVec2::new(0.4, 0.0), &mut ids).unwrap();

    let text = encode_linear(
        &curve,
        "edited",
        TimingVariant::Transition,
        LinearExportOptions::default(),
    )
    .timing_function;
    let decoded = decode_linear(&text, &mut ids).unwrap();

    // Jeder exportierte Stopp liegt auf der ursprünglichen Kurve
    for point in decoded.iter() {
        assert!(
            (point.y() - curve.value_at(point.x())).abs() < 1e-3,
            "Stopp ({}, {}) liegt nicht auf der Kurve",
            point.x(),
            point.y()
        );
    }
}

#[test]
fn test_simplify_reduces_stop_count() {
    let mut ids = PointIdGenerator::new();
    let curve = cubic_to_poly(&CubicCurve::new(0.42, 0.0, 0.58, 1.0), &mut ids);
    let full = encode_linear(&curve, "a", TimingVariant::Animation, LinearExportOptions::default());
    let simplified = encode_linear(
        &curve,
        "a",
        TimingVariant::Animation,
        LinearExportOptions {
            simplify: 0.01,
            round: 3,
        },
    );
    let count = |text: &str| text.matches('%').count();
    assert_eq!(count(&full.timing_function), 21);
    assert!(count(&simplified.timing_function) < count(&full.timing_function));
    assert!(count(&simplified.timing_function) >= 2);

    // Vereinfachte Kurve weicht höchstens um die Toleranz (plus Rundung) ab
    let decoded = decode_linear(&simplified.timing_function, &mut ids).unwrap();
    for sample in sample_curve_to_polyline(&curve, 20) {
        assert!((decoded.value_at(sample.x) - sample.y).abs() < 0.03);
    }
}

#[test]
fn test_export_clamps_overshoot_to_export_range() {
    let mut ids = PointIdGenerator::new();
    // Ausschlag bis etwa 3.46 und -2.94
    let curve = cubic_to_poly(&CubicCurve::new(0.5, 12.0, 0.5, -12.0), &mut ids);
    let text = encode_linear(&curve, "wild", TimingVariant::Animation, LinearExportOptions::default())
        .timing_function;
    assert!(text.contains(", 3 "), "kein geklemmtes Maximum: {text}");
    assert!(text.contains(", -2 "), "kein geklemmtes Minimum: {text}");
    assert!(decode_linear(&text, &mut ids).is_some());
}

#[test]
fn test_every_preset_survives_linear_export() {
    let mut ids = PointIdGenerator::new();
    for preset in PRESETS {
        let curve = parse_timing_function(preset.css, &mut ids).unwrap();
        let poly = match curve {
            EasingCurve::Cubic(cubic) => cubic_to_poly(&cubic, &mut ids),
            EasingCurve::Poly(poly) => poly,
        };
        let text = encode_linear(
            &poly,
            preset.name,
            TimingVariant::Animation,
            LinearExportOptions::default(),
        )
        .timing_function;
        let back = decode_linear(&text, &mut ids);
        assert!(back.is_some(), "Preset '{}' nicht wieder lesbar: {text}", preset.name);
    }
}

#[test]
fn test_preset_lookup_matches_keyword_parse() {
    let mut ids = PointIdGenerator::new();
    let preset = find_preset("ease-in-out").unwrap();
    let curve = parse_timing_function(preset.css, &mut ids).unwrap();
    assert_abs_diff_eq!(curve.value_at(0.5), 0.5, epsilon = 1e-3);
}

#![no_main]

use css_easing_editor::engine::{
    canonicalize, decode_linear, encode_linear, LinearExportOptions, PointIdGenerator,
    TimingVariant, MIN_X_DELTA, Y_RANGE_EXPORT,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut ids = PointIdGenerator::new();
    let Some(curve) = decode_linear(text, &mut ids) else {
        return;
    };

    assert_eq!(curve.first().x(), 0.0);
    assert_eq!(curve.last().x(), 1.0);
    for pair in curve.points().windows(2) {
        assert!(pair[1].x() - pair[0].x() >= MIN_X_DELTA - 1e-9);
    }
    assert_eq!(canonicalize(curve.points(), Y_RANGE_EXPORT, &mut ids), curve);

    let encoded = encode_linear(
        &curve,
        "fuzz",
        TimingVariant::Animation,
        LinearExportOptions::default(),
    );
    assert!(decode_linear(&encoded.timing_function, &mut ids).is_some());
});

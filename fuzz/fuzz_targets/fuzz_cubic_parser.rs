#![no_main]

use css_easing_editor::engine::{decode_cubic, encode_cubic, TimingVariant};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Some(curve) = decode_cubic(text) {
        assert!((0.0..=1.0).contains(&curve.p1.x));
        assert!((0.0..=1.0).contains(&curve.p2.x));
        let encoded = encode_cubic(&curve, "fuzz", TimingVariant::Animation);
        assert!(decode_cubic(&encoded.timing_function).is_some());
    }
});

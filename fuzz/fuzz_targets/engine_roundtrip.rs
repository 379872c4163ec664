#![no_main]
use libfuzzer_sys::fuzz_target;
use lz77::{Lz77, Lz77Options};

fuzz_target!(|data: &[u8]| {
    // First byte steers the configuration so small inputs still explore the
    // linear-scan and literal-only modes.
    let (knob, input) = match data.split_first() {
        Some(pair) => pair,
        None => return,
    };
    let options = match knob % 3 {
        0 => Lz77Options {
            buffer_bits: 5,
            window_bits: 5,
            hash_bits: 8,
            ..Lz77Options::default()
        },
        1 => Lz77Options {
            buffer_bits: 5,
            window_bits: 5,
            hash_bits: 0,
            min_match_length: Some(2),
            ..Lz77Options::default()
        },
        _ => Lz77Options {
            buffer_bits: 5,
            window_bits: 5,
            hash_bits: 8,
            max_match_length: Some(0),
            ..Lz77Options::default()
        },
    };

    let mut engine = Lz77::new(options);
    let mut out = Vec::with_capacity(input.len());
    let mut cursor = 0;
    loop {
        while cursor < input.len() && !engine.is_full() {
            cursor += engine.write(&input[cursor..]).expect("non-full write");
        }
        let adv = engine.advance();
        if adv.bytes.is_empty() {
            if cursor >= input.len() {
                break;
            }
            continue;
        }
        if adv.matched {
            assert!(adv.distance >= 1);
            for _ in 0..adv.length {
                let ch = out[out.len() - adv.distance];
                out.push(ch);
            }
        } else {
            out.push(adv.bytes[0]);
        }
    }

    // The expanded stream must reproduce the input exactly.
    assert_eq!(out, input, "round-trip mismatch after {} bytes", input.len());
});

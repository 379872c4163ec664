// Configuration handling through the public API:
//   - defaults and clamping observable through the query accessors
//   - degenerate configurations selecting literal-only / linear-scan modes
//   - options() reconstructing an equivalent engine
//   - out-of-range options aborting with a named diagnostic

use lz77::{Lz77, Lz77Options};

// ─────────────────────────────────────────────────────────────────────────────
// Defaults and clamping
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn defaults_follow_the_capacities() {
    let engine = Lz77::new(Lz77Options {
        buffer_bits: 4,
        window_bits: 3,
        hash_bits: 8,
        ..Lz77Options::default()
    });
    assert_eq!(engine.buffer_size(), 16);
    assert_eq!(engine.window_size(), 8);
    assert_eq!(engine.min_match_length(), 4);
    assert_eq!(engine.max_match_length(), 16);
    assert_eq!(engine.max_match_distance(), 8);
    assert_eq!(engine.hash_num_bits(), 8);
}

#[test]
fn oversized_limits_clamp_to_the_capacities() {
    let engine = Lz77::new(Lz77Options {
        buffer_bits: 4,
        window_bits: 3,
        hash_bits: 8,
        max_match_length: Some(1 << 20),
        max_match_distance: Some(1 << 20),
        ..Lz77Options::default()
    });
    assert_eq!(engine.max_match_length(), 16);
    assert_eq!(engine.max_match_distance(), 8);
}

// ─────────────────────────────────────────────────────────────────────────────
// Degenerate configurations
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn zero_max_length_selects_literal_only_mode() {
    let mut engine = Lz77::new(Lz77Options {
        buffer_bits: 4,
        window_bits: 3,
        hash_bits: 8,
        max_match_length: Some(0),
        ..Lz77Options::default()
    });
    assert_eq!(engine.min_match_length(), 0);
    assert_eq!(engine.max_match_length(), 0);
    assert_eq!(engine.max_match_distance(), 0);
    assert_eq!(engine.hash_num_bits(), 0);

    // Highly repetitive input still comes out one literal at a time.
    engine.write(b"aaaaaaaaaaaaaaaa").unwrap();
    for _ in 0..16 {
        let adv = engine.advance();
        assert!(!adv.matched);
        assert_eq!(adv.bytes, b"a");
    }
    assert!(engine.is_empty());
    assert!(engine.is_window_empty(), "literal-only mode keeps no history");
}

#[test]
fn zero_max_distance_selects_literal_only_mode() {
    let engine = Lz77::new(Lz77Options {
        buffer_bits: 4,
        window_bits: 3,
        hash_bits: 8,
        max_match_distance: Some(0),
        ..Lz77Options::default()
    });
    assert_eq!(engine.max_match_length(), 0);
    assert_eq!(engine.hash_num_bits(), 0);
}

#[test]
fn short_min_length_disables_hashing() {
    let engine = Lz77::new(Lz77Options {
        buffer_bits: 4,
        window_bits: 3,
        hash_bits: 8,
        min_match_length: Some(2),
        ..Lz77Options::default()
    });
    assert_eq!(engine.min_match_length(), 2);
    assert_eq!(engine.hash_num_bits(), 0, "4-byte index cannot serve minLen 2");
}

// ─────────────────────────────────────────────────────────────────────────────
// options() round-trip
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn options_reconstruct_an_identical_engine() {
    let original = Lz77::new(Lz77Options {
        buffer_bits: 5,
        window_bits: 4,
        hash_bits: 10,
        min_match_length: Some(4),
        max_match_length: Some(12),
        max_match_distance: Some(9),
        ..Lz77Options::default()
    });
    let rebuilt = Lz77::new(original.options());
    assert_eq!(original.options(), rebuilt.options());
    assert_eq!(original.debug_string(), rebuilt.debug_string());
}

#[test]
fn options_round_trip_through_literal_mode() {
    let original = Lz77::new(Lz77Options {
        buffer_bits: 4,
        window_bits: 3,
        hash_bits: 8,
        max_match_length: Some(0),
        ..Lz77Options::default()
    });
    let rebuilt = Lz77::new(original.options());
    assert_eq!(rebuilt.max_match_length(), 0);
    assert_eq!(rebuilt.hash_num_bits(), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Rejected configurations
// ─────────────────────────────────────────────────────────────────────────────

#[test]
#[should_panic(expected = "buffer_bits 31 must not exceed 30")]
fn oversized_buffer_bits_panic() {
    Lz77::new(Lz77Options {
        buffer_bits: 31,
        ..Lz77Options::default()
    });
}

#[test]
#[should_panic(expected = "hash_bits 33 must not exceed 32")]
fn oversized_hash_bits_panic() {
    Lz77::new(Lz77Options {
        buffer_bits: 4,
        window_bits: 3,
        hash_bits: 33,
        ..Lz77Options::default()
    });
}

#[test]
#[should_panic(expected = "exceeds buffer capacity")]
fn min_length_beyond_buffer_panics() {
    Lz77::new(Lz77Options {
        buffer_bits: 4,
        window_bits: 3,
        hash_bits: 8,
        min_match_length: Some(64),
        ..Lz77Options::default()
    });
}

// Byte-store behavior through the public API:
//   - FIFO delivery across writes, reads, and repacks
//   - Full / Empty sentinels
//   - bulk reservation/commit pairs on both sides
//   - set_window truncation, window_clear, clear
//   - commit contract violations aborting

use lz77::{Error, Lz77, Lz77Options};

fn small_engine() -> Lz77 {
    Lz77::new(Lz77Options {
        buffer_bits: 4,
        window_bits: 3,
        hash_bits: 8,
        max_match_length: Some(8),
        ..Lz77Options::default()
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// FIFO ordering and the Full / Empty sentinels
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bytes_come_back_in_write_order() {
    let mut engine = small_engine();
    engine.write(b"0123456789").unwrap();
    let mut out = Vec::new();
    while let Ok(ch) = engine.read_byte() {
        out.push(ch);
    }
    assert_eq!(out, b"0123456789");
}

#[test]
fn write_reports_a_short_count_before_full() {
    let mut engine = small_engine();
    assert_eq!(engine.write(b"0123456789abcd").unwrap(), 14);
    // Two bytes of space left: the write is truncated, not refused.
    assert_eq!(engine.write(b"XYZ").unwrap(), 2);
    assert!(engine.is_full());
    assert_eq!(engine.write(b"!"), Err(Error::Full));
    assert_eq!(engine.write_byte(b'!'), Err(Error::Full));
}

#[test]
fn empty_writes_and_reads_are_no_ops() {
    let mut engine = small_engine();
    assert_eq!(engine.write(b"").unwrap(), 0);
    let mut nothing = [];
    assert_eq!(engine.read(&mut nothing).unwrap(), 0);
}

#[test]
fn reads_from_an_empty_buffer_fail() {
    let mut engine = small_engine();
    assert_eq!(engine.read_byte(), Err(Error::Empty));
    let mut sink = [0u8; 4];
    assert_eq!(engine.read(&mut sink), Err(Error::Empty));
}

#[test]
fn read_drains_at_most_what_is_buffered() {
    let mut engine = small_engine();
    engine.write(b"abc").unwrap();
    let mut sink = [0u8; 8];
    assert_eq!(engine.read(&mut sink).unwrap(), 3);
    assert_eq!(&sink[..3], b"abc");
    assert!(engine.is_empty());
}

#[test]
fn fifo_order_survives_many_refills() {
    // Enough traffic to force several region repacks.
    let mut engine = small_engine();
    let stream: Vec<u8> = (0u16..400).map(|v| (v % 251) as u8).collect();
    let mut delivered = Vec::new();
    let mut cursor = 0;
    while delivered.len() < stream.len() {
        if cursor < stream.len() {
            if let Ok(n) = engine.write(&stream[cursor..(cursor + 7).min(stream.len())]) {
                cursor += n;
            }
        }
        let mut sink = [0u8; 5];
        match engine.read(&mut sink) {
            Ok(n) => delivered.extend_from_slice(&sink[..n]),
            Err(Error::Empty) => {}
            Err(err) => panic!("unexpected read error: {err}"),
        }
    }
    assert_eq!(delivered, stream);
}

// ─────────────────────────────────────────────────────────────────────────────
// Bulk reservation / commit
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bulk_write_truncates_to_free_space() {
    let mut engine = small_engine();
    engine.write(b"0123456789").unwrap();
    let space = engine.prepare_bulk_write(100);
    assert_eq!(space.len(), 6);
    space[..3].copy_from_slice(b"abc");
    engine.commit_bulk_write(3);
    assert_eq!(engine.len(), 13);
    assert_eq!(engine.buffer_bytes_view(), b"0123456789abc");
}

#[test]
fn abandoned_bulk_write_changes_nothing() {
    let mut engine = small_engine();
    engine.write(b"abc").unwrap();
    let before = engine.debug_string();
    let space = engine.prepare_bulk_write(8);
    space.fill(b'X');
    // No commit: the reservation is abandoned.
    assert_eq!(engine.debug_string(), before);
}

#[test]
fn bulk_read_is_a_peek_until_committed() {
    let mut engine = small_engine();
    engine.write(b"abcdef").unwrap();
    assert_eq!(engine.prepare_bulk_read(4), b"abcd");
    assert_eq!(engine.len(), 6, "uncommitted prepare must not consume");
    engine.commit_bulk_read(4);
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.prepare_bulk_read(10), b"ef");
    // Bytes retired through the bulk path still enter the window.
    assert_eq!(engine.window_bytes_view(), b"abcd");
}

#[test]
fn bulk_write_on_a_full_buffer_is_empty() {
    let mut engine = small_engine();
    engine.write(&[b'x'; 16]).unwrap();
    assert!(engine.prepare_bulk_write(1).is_empty());
}

#[test]
#[should_panic(expected = "exceeds 6 bytes of reserved buffer space")]
fn oversized_bulk_write_commit_panics() {
    let mut engine = small_engine();
    engine.write(b"0123456789").unwrap();
    engine.commit_bulk_write(7);
}

#[test]
#[should_panic(expected = "exceeds 3 bytes of buffered data")]
fn oversized_bulk_read_commit_panics() {
    let mut engine = small_engine();
    engine.write(b"abc").unwrap();
    engine.commit_bulk_read(4);
}

// ─────────────────────────────────────────────────────────────────────────────
// Window management
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn set_window_keeps_the_most_recent_bytes() {
    // The preload is longer than the distance limit: only the tail survives.
    let mut engine = small_engine();
    engine.set_window(b"0123456789");
    assert_eq!(engine.window_bytes_view(), b"23456789");
    assert_eq!(engine.window_len(), 8);
    assert!(engine.is_window_full());
}

#[test]
fn set_window_shorter_than_the_limit_keeps_everything() {
    let mut engine = small_engine();
    engine.set_window(b"abc");
    assert_eq!(engine.window_bytes_view(), b"abc");
    assert!(!engine.is_window_full());
}

#[test]
fn set_window_respects_a_reduced_distance_limit() {
    let mut engine = Lz77::new(Lz77Options {
        buffer_bits: 4,
        window_bits: 3,
        hash_bits: 8,
        max_match_distance: Some(5),
        ..Lz77Options::default()
    });
    engine.set_window(b"0123456789");
    assert_eq!(engine.window_bytes_view(), b"56789");
}

#[test]
fn window_clear_leaves_the_buffer_alone() {
    let mut engine = small_engine();
    engine.write(b"abcdefgh").unwrap();
    let mut sink = [0u8; 4];
    engine.read(&mut sink).unwrap();
    assert_eq!(engine.window_len(), 4);

    engine.window_clear();
    assert!(engine.is_window_empty());
    assert_eq!(engine.buffer_bytes_view(), b"efgh");
}

#[test]
fn clear_empties_everything() {
    let mut engine = small_engine();
    engine.set_window(b"history!");
    engine.write(b"buffered").unwrap();
    engine.clear();
    assert!(engine.is_empty());
    assert!(engine.is_window_empty());
    assert_eq!(engine.len(), 0);
    assert_eq!(engine.window_len(), 0);
}

#[test]
fn clear_is_idempotent() {
    let mut engine = small_engine();
    engine.write(b"0123456789").unwrap();
    engine.advance();
    engine.clear();
    let once = engine.debug_string();
    engine.clear();
    assert_eq!(engine.debug_string(), once);
}

// ─────────────────────────────────────────────────────────────────────────────
// Views and copies
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn views_and_copies_agree() {
    let mut engine = small_engine();
    engine.set_window(b"abcd");
    engine.write(b"wxyz").unwrap();
    assert_eq!(engine.window_bytes(), engine.window_bytes_view());
    assert_eq!(engine.buffer_bytes(), engine.buffer_bytes_view());
    assert_eq!(engine.buffer_bytes_view(), b"wxyz");
}

#[test]
fn consumed_bytes_move_from_buffer_view_to_window_view() {
    let mut engine = small_engine();
    engine.write(b"abcdef").unwrap();
    engine.read_byte().unwrap();
    engine.read_byte().unwrap();
    assert_eq!(engine.window_bytes_view(), b"ab");
    assert_eq!(engine.buffer_bytes_view(), b"cdef");
}

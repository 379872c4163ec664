#![no_main]
use libfuzzer_sys::fuzz_target;
use lz77::{Lz77, Lz77Options};

// Drives an arbitrary operation sequence against one engine instance.  The
// emitted stream (raw reads plus expanded advances) must stay consistent
// with everything written, and no operation may panic or break an invariant.
fuzz_target!(|data: &[u8]| {
    let mut engine = Lz77::new(Lz77Options {
        buffer_bits: 4,
        window_bits: 4,
        hash_bits: 8,
        ..Lz77Options::default()
    });

    let mut fed: Vec<u8> = Vec::new();
    let mut out: Vec<u8> = Vec::new();
    let mut iter = data.iter().copied();

    while let Some(op) = iter.next() {
        match op % 5 {
            0 => {
                let chunk: Vec<u8> = iter.by_ref().take(5).collect();
                if let Ok(n) = engine.write(&chunk) {
                    fed.extend_from_slice(&chunk[..n]);
                }
            }
            1 => {
                if let Ok(ch) = engine.read_byte() {
                    out.push(ch);
                }
            }
            2 => {
                let adv = engine.advance();
                if adv.matched {
                    for _ in 0..adv.length {
                        let ch = out[out.len() - adv.distance];
                        out.push(ch);
                    }
                } else if let Some(&ch) = adv.bytes.first() {
                    out.push(ch);
                }
            }
            3 => {
                // Forgets match history only; buffered bytes survive, and
                // later distances still land inside the emitted tail.
                engine.window_clear();
            }
            _ => {
                let drained = engine.prepare_bulk_read(3).to_vec();
                engine.commit_bulk_read(drained.len());
                out.extend_from_slice(&drained);
            }
        }
    }

    // Drain the tail.
    while !engine.is_empty() {
        let adv = engine.advance();
        if adv.matched {
            for _ in 0..adv.length {
                let ch = out[out.len() - adv.distance];
                out.push(ch);
            }
        } else {
            out.push(adv.bytes[0]);
        }
    }

    assert_eq!(out, fed, "mixed-operation stream diverged from its input");
});

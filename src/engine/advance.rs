//! The `advance` primitive: greedy best-match selection at the buffer head.
//!
//! Three modes, selected once at construction:
//!
//! 1. **Literal-only** (`max_len == 0`): every call emits one byte.
//! 2. **Non-hashed** (`hash_bits == 0`): linear scan of the window from the
//!    closest position outward.
//! 3. **Standard**: hash-chain probe over 4-byte prefixes.
//!
//! Both searching modes test candidates in order of increasing distance and
//! accept a new best only when it is *strictly* longer, so a tie in length
//! always resolves to the smallest distance.  The candidate loop carries two
//! shortcuts: a one-byte reject that skips candidates which cannot beat the
//! current best, and early termination once the best match has reached the
//! effective length cap.

use super::Lz77;

/// The span consumed by one [`Lz77::advance`] call.
///
/// `bytes` borrows the consumed span out of the engine's window; it is the
/// matched span when `matched` is set, and a single literal byte otherwise.
/// An empty buffer produces an empty `bytes` with everything else zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance<'a> {
    /// The bytes just moved from the buffer into the window.
    pub bytes: &'a [u8],
    /// Back-reference distance, in `[1, max_match_distance]` when matched.
    pub distance: usize,
    /// Back-reference length, in `[min_match_length, max_match_length]` when
    /// matched.
    pub length: usize,
    /// Whether a back-reference was found.
    pub matched: bool,
}

#[derive(Default)]
struct BestMatch {
    found: bool,
    distance: usize,
    length: usize,
}

impl Lz77 {
    /// Consumes the best back-reference (longest match, ties to the smallest
    /// distance) or a single literal byte from the buffer head.
    ///
    /// On an empty buffer, returns an empty span and mutates nothing.
    pub fn advance(&mut self) -> Advance<'_> {
        self.check_invariants();
        if self.max_len == 0 {
            self.advance_byte()
        } else if self.hbits == 0 {
            self.advance_no_hash()
        } else {
            self.advance_standard()
        }
    }

    /// Literal-only mode: one byte per call, no match search.
    fn advance_byte(&mut self) -> Advance<'_> {
        if self.i == self.j {
            return empty_advance();
        }
        self.emit(BestMatch::default())
    }

    /// Linear-scan mode: every window position is a candidate, closest first.
    fn advance_no_hash(&mut self) -> Advance<'_> {
        if self.i == self.j {
            return empty_advance();
        }
        let eff_max = self.max_len.min(self.j - self.i);
        let mut best = BestMatch::default();
        if self.min_len <= eff_max {
            for pos in (self.h..self.i).rev() {
                if self.try_candidate(pos, eff_max, &mut best) {
                    break;
                }
            }
        }
        self.emit(best)
    }

    /// Standard mode: walk the hash chain for the 4-byte prefix at `i`.
    fn advance_standard(&mut self) -> Advance<'_> {
        if self.i == self.j {
            return empty_advance();
        }
        let eff_max = self.max_len.min(self.j - self.i);
        let mut best = BestMatch::default();
        if self.min_len <= eff_max {
            // min_len >= HASH_LEN in this mode, so a full prefix is present.
            if let Some(index) = self.index.as_ref() {
                for pos in index.walk(&self.slice, self.h, self.i) {
                    if self.try_candidate(pos, eff_max, &mut best) {
                        break;
                    }
                }
            }
        }
        self.emit(best)
    }

    /// Scores the candidate at `pos`; returns `true` when the walk is done.
    fn try_candidate(&self, pos: usize, eff_max: usize, best: &mut BestMatch) -> bool {
        debug_assert!(pos >= self.h && pos < self.i, "candidate {pos} outside window");

        // A candidate can only improve on the current best if it agrees one
        // byte past the best length; a single probe rejects most of them.
        if best.found && self.slice[pos + best.length] != self.slice[self.i + best.length] {
            return false;
        }

        let mut length = 0;
        while length < eff_max && self.slice[pos + length] == self.slice[self.i + length] {
            length += 1;
        }
        if length >= self.min_len && (!best.found || length > best.length) {
            best.found = true;
            best.distance = self.i - pos;
            best.length = length;
        }

        best.found && best.length >= eff_max
    }

    /// Consumes the chosen span and builds the result.
    fn emit(&mut self, best: BestMatch) -> Advance<'_> {
        let start = self.i;
        let span = if best.found { best.length } else { 1 };
        self.consume(span);
        self.check_invariants();
        Advance {
            bytes: &self.slice[start..start + span],
            distance: best.distance,
            length: best.length,
            matched: best.found,
        }
    }
}

fn empty_advance() -> Advance<'static> {
    Advance {
        bytes: &[],
        distance: 0,
        length: 0,
        matched: false,
    }
}

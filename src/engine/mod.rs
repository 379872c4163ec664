//! The LZ77 prefix-match engine.
//!
//! [`Lz77`] owns a single contiguous byte region partitioned by three monotone
//! indices `h <= i <= j`: `[h, i)` is the *window* (already-consumed history,
//! readable for back-references) and `[i, j)` is the *buffer* (bytes awaiting
//! consumption).  The region holds `windowSize + 2 * bufferSize` bytes so the
//! write side can run well past the window before a repack is needed.
//!
//! Data flows through three stages:
//!
//! 1. the caller writes bytes into the buffer (`write`, `write_byte`, or the
//!    bulk reservation pair), or preloads history with `set_window`;
//! 2. [`Lz77::advance`] finds the best back-reference at `i` (or emits one
//!    literal) and slides the window boundary over the consumed span;
//! 3. the hash-chain index is caught up so the consumed bytes become
//!    candidates for future matches.

mod advance;
mod debug;
mod index;
mod store;
mod types;

pub use advance::Advance;
pub use types::{Lz77Options, HASH_LEN};

use index::HashIndex;
use types::Config;

/// A sliding-window byte store with an incremental prefix-match index.
///
/// Single-owner value: no internal threads, no locks, no hidden allocation
/// after construction.  All operations run to completion on the calling
/// thread.  Borrowed views returned by the `*_view`, `prepare_bulk_*`, and
/// [`advance`](Lz77::advance) methods are invalidated by the next mutating
/// call; the borrow checker enforces this.
pub struct Lz77 {
    slice: Box<[u8]>,
    /// `None` when `hash_bits` resolved to zero (literal-only or linear-scan
    /// configurations).
    index: Option<HashIndex>,
    h: usize,
    i: usize,
    j: usize,
    bsize: usize,
    wsize: usize,
    min_len: usize,
    max_len: usize,
    max_dist: usize,
    hash_mask: u32,
    bbits: u32,
    wbits: u32,
    hbits: u32,
}

impl Lz77 {
    /// Creates an engine from `options`.
    ///
    /// All backing storage is allocated here; no later operation allocates.
    /// Panics when the options lie outside the documented bounds.
    pub fn new(options: Lz77Options) -> Self {
        let Config {
            bsize,
            wsize,
            min_len,
            max_len,
            max_dist,
            hash_mask,
            bbits,
            wbits,
            hbits,
        } = options.resolve();

        let region_size = wsize + bsize * 2;
        let index = if hbits != 0 {
            Some(HashIndex::new(hbits, hash_mask, region_size, wsize))
        } else {
            None
        };

        Lz77 {
            slice: vec![0; region_size].into_boxed_slice(),
            index,
            h: wsize,
            i: wsize,
            j: wsize,
            bsize,
            wsize,
            min_len,
            max_len,
            max_dist,
            hash_mask,
            bbits,
            wbits,
            hbits,
        }
    }

    /// Returns options that reconstruct an engine with these settings.
    pub fn options(&self) -> Lz77Options {
        Lz77Options {
            buffer_bits: self.bbits,
            window_bits: self.wbits,
            hash_bits: self.hbits,
            min_match_length: Some(self.min_len),
            max_match_length: Some(self.max_len),
            max_match_distance: Some(self.max_dist),
        }
    }

    // ── Trivial queries ──────────────────────────────────────────────────────

    /// Buffer capacity exponent.
    pub fn buffer_num_bits(&self) -> u32 {
        self.bbits
    }

    /// Window capacity exponent.
    pub fn window_num_bits(&self) -> u32 {
        self.wbits
    }

    /// Hash output width in bits; zero when hashing is disabled.
    pub fn hash_num_bits(&self) -> u32 {
        self.hbits
    }

    /// Buffer capacity in bytes.
    pub fn buffer_size(&self) -> usize {
        self.bsize
    }

    /// Window capacity in bytes.
    pub fn window_size(&self) -> usize {
        self.wsize
    }

    /// Shortest match that may be emitted as a back-reference.
    pub fn min_match_length(&self) -> usize {
        self.min_len
    }

    /// Longest match that may be emitted.
    pub fn max_match_length(&self) -> usize {
        self.max_len
    }

    /// Largest permitted back-reference distance.
    pub fn max_match_distance(&self) -> usize {
        self.max_dist
    }

    /// Number of bytes currently awaiting consumption.
    pub fn len(&self) -> usize {
        self.j - self.i
    }

    /// `true` when the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.i == self.j
    }

    /// `true` when the buffer cannot accept any more bytes.
    pub fn is_full(&self) -> bool {
        self.j - self.i >= self.bsize
    }

    /// Number of history bytes currently available for back-references.
    pub fn window_len(&self) -> usize {
        self.i - self.h
    }

    /// `true` when the window holds no bytes.
    pub fn is_window_empty(&self) -> bool {
        self.h == self.i
    }

    /// `true` when the window has reached its capacity.
    pub fn is_window_full(&self) -> bool {
        self.i - self.h >= self.wsize
    }

    // ── Internal helpers shared by the store and match paths ─────────────────

    /// Retires `length` buffer bytes into the window: advances `i`, drags `h`
    /// forward so the window never exceeds the match distance limit, and
    /// catches the index up over the newly admitted span.
    fn consume(&mut self, length: usize) {
        self.i += length;
        if self.h < self.i - self.max_dist {
            self.h = self.i - self.max_dist;
        }
        self.update_index();
    }

    /// Inserts every newly eligible position into the hash-chain index.
    fn update_index(&mut self) {
        if let Some(index) = self.index.as_mut() {
            index.catch_up(&self.slice, self.h, self.i, self.j);
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        debug_assert!(self.h <= self.i, "window start {} exceeds probe index {}", self.h, self.i);
        debug_assert!(self.i <= self.j, "probe index {} exceeds write index {}", self.i, self.j);
        debug_assert!(
            self.j <= self.slice.len(),
            "write index {} exceeds region size {}",
            self.j,
            self.slice.len()
        );
        debug_assert!(
            self.i - self.h <= self.wsize,
            "window length {} exceeds capacity {}",
            self.i - self.h,
            self.wsize
        );
        debug_assert!(
            self.j - self.i <= self.bsize,
            "buffer length {} exceeds capacity {}",
            self.j - self.i,
            self.bsize
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}
}

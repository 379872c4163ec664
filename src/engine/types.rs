//! Engine constants, configuration options, and the 4-byte prefix hash.

/// Length of the byte prefix the hash-chain index is computed over.
///
/// Only window positions that have a full `HASH_LEN`-byte prefix are entered
/// into the index, which is why configurations with a minimum match length
/// below this value fall back to the non-hashed linear scan.
pub const HASH_LEN: usize = 4;

/// Smallest permitted `buffer_bits`.
pub const MIN_BUFFER_BITS: u32 = 2;
/// Largest permitted `buffer_bits`.
pub const MAX_BUFFER_BITS: u32 = 30;
/// Largest permitted `window_bits`.
pub const MAX_WINDOW_BITS: u32 = 30;
/// Largest permitted `hash_bits`.
pub const MAX_HASH_BITS: u32 = 32;

const HASH_C1: u32 = 0xCC9E_2D51;
const HASH_C2: u32 = 0x1B87_3593;

/// Hash of the first [`HASH_LEN`] bytes of `bytes`, masked to the table width.
///
/// Packs the four bytes into a big-endian word and mixes with two
/// multiply-rotate lanes.  The emitted stream does not depend on this
/// function, only the shape of the hash chains does.
#[inline(always)]
pub(crate) fn hash4(bytes: &[u8], hash_mask: u32) -> u32 {
    let u = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    (u.wrapping_mul(HASH_C1).rotate_left(17) ^ u.wrapping_mul(HASH_C2).rotate_left(19)) & hash_mask
}

/// Options for constructing an [`Lz77`](crate::Lz77) instance.
///
/// The three `*_bits` fields size the backing storage: the buffer holds
/// `1 << buffer_bits` bytes, the window `1 << window_bits` bytes, and the
/// hash table `1 << hash_bits` slots.  The three optional fields default to
/// [`HASH_LEN`], the buffer capacity, and the window capacity respectively.
///
/// Degenerate values select reduced modes rather than failing:
///
/// * `max_match_length == 0` or `max_match_distance == 0` puts the engine in
///   literal-only mode (every `advance` emits one byte).
/// * `min_match_length < HASH_LEN` disables the hash-chain index and selects
///   the linear window scan, because the index only covers 4-byte prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lz77Options {
    /// Buffer capacity in bits; must lie in `[2, 30]`.
    pub buffer_bits: u32,
    /// Window capacity in bits; must not exceed 30.
    pub window_bits: u32,
    /// Hash output width in bits; must not exceed 32.
    pub hash_bits: u32,
    /// Shortest match that may be emitted as a back-reference.
    pub min_match_length: Option<usize>,
    /// Longest match that may be emitted; clamped to the buffer capacity.
    pub max_match_length: Option<usize>,
    /// Largest permitted back-reference distance; clamped to the window
    /// capacity.
    pub max_match_distance: Option<usize>,
}

/// Fully-normalized engine parameters derived from [`Lz77Options`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Config {
    pub(crate) bsize: usize,
    pub(crate) wsize: usize,
    pub(crate) min_len: usize,
    pub(crate) max_len: usize,
    pub(crate) max_dist: usize,
    pub(crate) hash_mask: u32,
    pub(crate) bbits: u32,
    pub(crate) wbits: u32,
    pub(crate) hbits: u32,
}

impl Lz77Options {
    /// Validates the options and resolves defaults, clamps, and mode
    /// collapses into a [`Config`].
    ///
    /// Panics when a field lies outside its documented range, or when the
    /// requested minimum match length exceeds the buffer capacity.
    pub(crate) fn resolve(&self) -> Config {
        let bbits = self.buffer_bits;
        let wbits = self.window_bits;
        let mut hbits = self.hash_bits;

        assert!(
            bbits >= MIN_BUFFER_BITS,
            "buffer_bits {bbits} must be at least {MIN_BUFFER_BITS}"
        );
        assert!(
            bbits <= MAX_BUFFER_BITS,
            "buffer_bits {bbits} must not exceed {MAX_BUFFER_BITS}"
        );
        assert!(
            wbits <= MAX_WINDOW_BITS,
            "window_bits {wbits} must not exceed {MAX_WINDOW_BITS}"
        );
        assert!(
            hbits <= MAX_HASH_BITS,
            "hash_bits {hbits} must not exceed {MAX_HASH_BITS}"
        );

        let bsize = 1usize << bbits;
        let wsize = 1usize << wbits;

        let mut max_len = match self.max_match_length {
            Some(len) => len.min(bsize),
            None => bsize,
        };

        let mut min_len = match self.min_match_length {
            Some(len) => {
                assert!(
                    len <= bsize,
                    "min_match_length {len} exceeds buffer capacity {bsize}"
                );
                len
            }
            None => HASH_LEN,
        };

        let mut max_dist = match self.max_match_distance {
            Some(dist) => dist.min(wsize),
            None => wsize,
        };

        // Degenerate limits collapse the engine into literal-only mode.
        if max_len == 0 || max_dist == 0 {
            min_len = 0;
            max_len = 0;
            max_dist = 0;
            hbits = 0;
        }

        if min_len == 0 && max_len != 0 {
            min_len = 1;
        }

        // The index only covers HASH_LEN-byte prefixes; shorter minimums
        // must use the linear scan.
        if min_len < HASH_LEN {
            hbits = 0;
        }

        assert!(
            min_len <= max_len,
            "min_match_length {min_len} exceeds max_match_length {max_len}"
        );

        let hash_mask = if hbits >= 32 {
            u32::MAX
        } else {
            (1u32 << hbits) - 1
        };

        Config {
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
}

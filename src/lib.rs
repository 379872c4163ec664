//! A byte-oriented LZ77 prefix-match engine.
//!
//! The centerpiece is [`Lz77`]: a bounded byte store that unifies a writable
//! look-ahead buffer with a read-side sliding window of already-consumed
//! history, plus a hash-chain index over 4-byte prefixes of that history.
//! Callers push bytes in, then repeatedly call [`Lz77::advance`], which emits
//! the stream back out as literal bytes and `(distance, length)`
//! back-references into recent history, the substrate that deflate-family
//! compressors are built on.  The engine is not itself a codec: there is no
//! bit coder, no block framer, and no entropy stage here.
//!
//! # Crate layout
//!
//! | Module   | Contents |
//! |----------|----------|
//! | `engine` | The prefix-match engine: byte store, hash-chain index, `advance`. |
//! | `ring`   | [`RingBuffer`], a standalone power-of-two FIFO ring of bytes. |
//! | `window` | [`SlidingWindow`], a standalone history window with distance lookup. |
//! | `errors` | The crate error enum. |

pub mod engine;
pub mod errors;
pub mod ring;
pub mod window;

pub use engine::{Advance, Lz77, Lz77Options, HASH_LEN};
pub use errors::Error;
pub use ring::RingBuffer;
pub use window::SlidingWindow;

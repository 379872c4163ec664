//! Structural diagnostics for the engine.
//!
//! [`Lz77::debug_string`] is the dump the state-transition tests compare
//! byte-for-byte; its exact shape is load-bearing.  `Display` and `Debug`
//! render the usual one-line summaries.

use core::fmt::{self, Write as _};

use super::Lz77;

impl Lz77 {
    /// Returns a detailed dump of the engine's internal state.
    ///
    /// The `bytes` line lists every byte in `[h, j)` as two lowercase hex
    /// digits, with a `|` separator immediately before the window/buffer
    /// boundary.  The `hashtable` line (present only when hashing is
    /// enabled) lists, in ascending hash order, every slot whose chain still
    /// reaches a live window position, each chain newest-first with aged-out
    /// tails omitted.
    pub fn debug_string(&self) -> String {
        let mut out = String::with_capacity(256);
        out.push_str("LZ77(\n");
        let _ = writeln!(out, "\tcapacity = {}", self.slice.len());
        let _ = writeln!(out, "\tbbits = {}", self.bbits);
        let _ = writeln!(out, "\twbits = {}", self.wbits);
        let _ = writeln!(out, "\thbits = {}", self.hbits);
        let _ = writeln!(out, "\tminLen = {}", self.min_len);
        let _ = writeln!(out, "\tmaxLen = {}", self.max_len);
        let _ = writeln!(out, "\tmaxDist = {}", self.max_dist);
        let _ = writeln!(out, "\thashMask = {:#010x}", self.hash_mask);
        let _ = writeln!(out, "\tbCap = {}", self.bsize);
        let _ = writeln!(out, "\twCap = {}", self.wsize);
        let _ = writeln!(out, "\th = {}", self.h);
        let _ = writeln!(out, "\ti = {}", self.i);
        let _ = writeln!(out, "\tj = {}", self.j);
        let _ = writeln!(out, "\tlength = {}", self.j - self.i);

        out.push_str("\tbytes = [");
        for pos in self.h..self.j {
            if pos == self.i {
                out.push_str(" |");
            }
            let _ = write!(out, " {:02x}", self.slice[pos]);
        }
        if self.i == self.j {
            out.push_str(" |");
        }
        out.push_str(" ]\n");

        if let Some(index) = self.index.as_ref() {
            out.push_str("\thashtable = [");
            for (hash, head) in index.slots() {
                let mut link = head;
                let mut first = true;
                loop {
                    let (pos, next) = index.follow(link);
                    let Some(pos) = pos else { break };
                    if pos < self.h {
                        break;
                    }
                    if first {
                        let _ = write!(out, " {hash:#04x}:[{pos}");
                        first = false;
                    } else {
                        let _ = write!(out, " {pos}");
                    }
                    link = next;
                }
                if !first {
                    out.push(']');
                }
            }
            out.push_str(" ]\n");
        }

        out.push_str(")\n");
        out
    }
}

impl fmt::Display for Lz77 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(window-buffer with {} bytes in the buffer)", self.len())
    }
}

impl fmt::Debug for Lz77 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lz77(bbits={}, wbits={}, hbits={}, minLen={}, maxLen={}, maxDist={}, \
             bsize={}, wsize={}, h={}, i={}, j={})",
            self.bbits,
            self.wbits,
            self.hbits,
            self.min_len,
            self.max_len,
            self.max_dist,
            self.bsize,
            self.wsize,
            self.h,
            self.i,
            self.j
        )
    }
}

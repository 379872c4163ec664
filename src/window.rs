//! A ring-backed sliding window of recently seen bytes.
//!
//! Unlike [`RingBuffer`](crate::RingBuffer), writes to a [`SlidingWindow`]
//! never fail: once the window is full, each new byte evicts the oldest one.
//! The window answers the two questions a dictionary coder asks of its
//! history ("what byte sat `distance` back?" and "how much of this input
//! have I seen before?") without any acceleration structure; the engine in
//! [`crate::engine`] is the indexed counterpart.

use std::io;

use xxhash_rust::xxh32::Xxh32;

use crate::errors::Error;

/// A sliding history window holding the last `1 << num_bits` bytes written.
pub struct SlidingWindow {
    slice: Box<[u8]>,
    mask: usize,
    /// Ring index of the oldest retained byte.
    head: usize,
    /// Ring index one past the newest byte.
    tail: usize,
    busy: bool,
    nbits: u32,
}

impl SlidingWindow {
    /// Creates a window retaining the last `1 << num_bits` bytes.
    ///
    /// Panics when `num_bits` exceeds 31.
    pub fn new(num_bits: u32) -> Self {
        assert!(num_bits <= 31, "num_bits {num_bits} must not exceed 31");
        let size = 1usize << num_bits;
        SlidingWindow {
            slice: vec![0; size].into_boxed_slice(),
            mask: size - 1,
            head: 0,
            tail: 0,
            busy: false,
            nbits: num_bits,
        }
    }

    /// Capacity exponent given at construction.
    pub fn num_bits(&self) -> u32 {
        self.nbits
    }

    /// Maximum number of bytes the window retains.
    pub fn capacity(&self) -> usize {
        self.slice.len()
    }

    /// Number of bytes currently retained.
    pub fn len(&self) -> usize {
        if !self.busy {
            return 0;
        }
        let mut tail = self.tail;
        if self.head >= tail {
            tail += self.capacity();
        }
        tail - self.head
    }

    /// `true` when the window retains no bytes.
    pub fn is_empty(&self) -> bool {
        !self.busy
    }

    /// `true` when the window is at capacity (every further write evicts).
    pub fn is_full(&self) -> bool {
        self.busy && self.head == self.tail
    }

    /// Forgets all retained bytes.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.busy = false;
    }

    /// Appends one byte, evicting the oldest when the window is full.
    pub fn write_byte(&mut self, ch: u8) {
        self.slice[self.tail] = ch;
        let evict = self.busy && self.head == self.tail;
        self.busy = true;
        self.tail = (self.tail + 1) & self.mask;
        if evict {
            self.head = self.tail;
        }
    }

    /// Appends every byte of `data`, evicting old bytes as needed.
    pub fn write(&mut self, data: &[u8]) {
        for &ch in data {
            self.write_byte(ch);
        }
    }

    /// Returns the byte written `distance` steps back, where `1` is the most
    /// recent byte; [`Error::BadDistance`] when `distance` is zero or larger
    /// than the retained length.
    pub fn lookup_byte(&self, distance: usize) -> Result<u8, Error> {
        if distance == 0 || distance > self.len() {
            return Err(Error::BadDistance);
        }
        let mut tail = self.tail;
        if self.head >= tail {
            tail += self.capacity();
        }
        Ok(self.slice[(tail - distance) & self.mask])
    }

    /// Finds the longest prefix of `p` that occurs in the retained history.
    ///
    /// Returns `(distance, length)` for the longest occurrence, preferring
    /// the smallest distance among equally long ones; `None` when not even
    /// the first byte occurs.  Linear in the window length.
    pub fn find_longest_prefix(&self, p: &[u8]) -> Option<(usize, usize)> {
        if p.is_empty() || !self.busy {
            return None;
        }
        let head = self.head;
        let mut end = self.tail;
        if head >= end {
            end += self.capacity();
        }

        let mut best: Option<(usize, usize)> = None;
        for k in head..end {
            if self.slice[k & self.mask] != p[0] {
                continue;
            }
            let mut length = 1;
            while length < p.len()
                && k + length < end
                && self.slice[(k + length) & self.mask] == p[length]
            {
                length += 1;
            }
            // Scanning oldest to newest, the distance only shrinks, so a
            // greater-or-equal length always improves the answer.
            if best.map_or(true, |(_, bl)| length >= bl) {
                best = Some((end - k, length));
            }
        }
        best
    }

    /// XXH32 checksum of the retained bytes, oldest first.
    pub fn checksum(&self) -> u32 {
        let mut state = Xxh32::new(0);
        let (a, b) = self.as_slices();
        state.update(a);
        state.update(b);
        state.digest()
    }

    /// Returns the retained bytes as an oldest-first pair of slices; the
    /// second is empty unless the contents wrap around the ring end.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        if !self.busy {
            return (&[], &[]);
        }
        if self.head >= self.tail {
            let (front, back) = self.slice.split_at(self.head);
            (back, &front[..self.tail])
        } else {
            (&self.slice[self.head..self.tail], &[])
        }
    }

    /// Allocates and returns a copy of the retained bytes, oldest first.
    pub fn bytes(&self) -> Vec<u8> {
        let (a, b) = self.as_slices();
        let mut out = Vec::with_capacity(a.len() + b.len());
        out.extend_from_slice(a);
        out.extend_from_slice(b);
        out
    }
}

impl io::Write for SlidingWindow {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        SlidingWindow::write(self, data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl core::fmt::Debug for SlidingWindow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "SlidingWindow(head={}, tail={}, cap={}, busy={})",
            self.head,
            self.tail,
            self.capacity(),
            self.busy
        )
    }
}

//! A power-of-two ring buffer of bytes.
//!
//! [`RingBuffer`] is the plain FIFO byte queue underlying the streaming
//! helpers in this crate: fixed capacity, wrap-around storage, and a
//! reservation/commit pair on both sides so callers can move bytes in bulk
//! without intermediate copies.

use std::io;

use crate::errors::Error;

/// A fixed-capacity FIFO ring of bytes holding up to `1 << num_bits` bytes.
///
/// The `head`/`tail` indices chase each other around the ring; `busy`
/// disambiguates the `head == tail` case (empty vs. full).
pub struct RingBuffer {
    slice: Box<[u8]>,
    mask: usize,
    head: usize,
    tail: usize,
    busy: bool,
    nbits: u32,
}

impl RingBuffer {
    /// Creates a ring buffer with space for `1 << num_bits` bytes.
    ///
    /// Panics when `num_bits` exceeds 31.
    pub fn new(num_bits: u32) -> Self {
        assert!(num_bits <= 31, "num_bits {num_bits} must not exceed 31");
        let size = 1usize << num_bits;
        RingBuffer {
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

    /// Maximum number of bytes the ring can hold.
    pub fn capacity(&self) -> usize {
        self.slice.len()
    }

    /// Number of bytes currently queued.
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

    /// `true` when no bytes are queued.
    pub fn is_empty(&self) -> bool {
        !self.busy
    }

    /// `true` when the ring is at capacity.
    pub fn is_full(&self) -> bool {
        self.busy && self.head == self.tail
    }

    /// Discards all queued bytes.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.busy = false;
    }

    // ── Write side ───────────────────────────────────────────────────────────

    /// Reserves a contiguous run of free space for the caller to fill.
    ///
    /// The run may be shorter than requested (the wrap point bounds it) and
    /// is empty only when the ring is full; a short non-empty run does *not*
    /// mean the ring is full.  Bytes enter the queue at the matching
    /// [`commit_bulk_write`](RingBuffer::commit_bulk_write); an uncommitted
    /// reservation is abandoned with no state change.
    pub fn prepare_bulk_write(&mut self, length: usize) -> &mut [u8] {
        if !self.busy {
            self.head = 0;
            self.tail = 0;
        }
        let run = self.writable_run();
        let length = length.min(run);
        let tail = self.tail;
        &mut self.slice[tail..tail + length]
    }

    /// Completes the bulk write begun by the previous
    /// [`prepare_bulk_write`](RingBuffer::prepare_bulk_write).
    pub fn commit_bulk_write(&mut self, length: usize) {
        if length == 0 {
            return;
        }
        let run = self.writable_run();
        assert!(
            length <= run,
            "commit of {length} bytes exceeds {run} bytes of reserved space"
        );
        self.tail = (self.tail + length) & self.mask;
        self.busy = true;
    }

    /// Appends one byte, or returns [`Error::Full`].
    pub fn write_byte(&mut self, ch: u8) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::Full);
        }
        if !self.busy {
            self.head = 0;
            self.tail = 0;
        }
        self.slice[self.tail] = ch;
        self.tail = (self.tail + 1) & self.mask;
        self.busy = true;
        Ok(())
    }

    /// Appends as many bytes of `data` as fit and returns the count written.
    ///
    /// Returns [`Error::Full`] only when not a single byte fits.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
        if data.is_empty() {
            return Ok(0);
        }
        let free = self.capacity() - self.len();
        if free == 0 {
            return Err(Error::Full);
        }
        if !self.busy {
            self.head = 0;
            self.tail = 0;
        }
        let length = data.len().min(free);
        let tail = self.tail;
        let wrap = self.capacity() - tail;
        if length <= wrap {
            self.slice[tail..tail + length].copy_from_slice(&data[..length]);
        } else {
            self.slice[tail..].copy_from_slice(&data[..wrap]);
            self.slice[..length - wrap].copy_from_slice(&data[wrap..length]);
        }
        self.tail = (tail + length) & self.mask;
        self.busy = true;
        Ok(length)
    }

    // ── Read side ────────────────────────────────────────────────────────────

    /// Borrows a contiguous run of queued bytes without dequeuing them.
    ///
    /// The run may be shorter than requested; it is empty only when the ring
    /// is empty.  Bytes leave the queue at the matching
    /// [`commit_bulk_read`](RingBuffer::commit_bulk_read); an uncommitted
    /// prepare is a peek.
    pub fn prepare_bulk_read(&self, length: usize) -> &[u8] {
        let run = self.readable_run();
        let length = length.min(run);
        &self.slice[self.head..self.head + length]
    }

    /// Completes the bulk read begun by the previous
    /// [`prepare_bulk_read`](RingBuffer::prepare_bulk_read).
    pub fn commit_bulk_read(&mut self, length: usize) {
        if length == 0 {
            return;
        }
        let run = self.readable_run();
        assert!(
            length <= run,
            "commit of {length} bytes exceeds {run} bytes of readable data"
        );
        self.head = (self.head + length) & self.mask;
        self.busy = self.head != self.tail;
    }

    /// Removes and returns the oldest byte, or [`Error::Empty`].
    pub fn read_byte(&mut self) -> Result<u8, Error> {
        if !self.busy {
            return Err(Error::Empty);
        }
        let ch = self.slice[self.head];
        self.head = (self.head + 1) & self.mask;
        self.busy = self.head != self.tail;
        Ok(ch)
    }

    /// Fills `data` with as many queued bytes as available and returns the
    /// count read, or [`Error::Empty`] when none are queued.
    pub fn read(&mut self, data: &mut [u8]) -> Result<usize, Error> {
        if data.is_empty() {
            return Ok(0);
        }
        if !self.busy {
            return Err(Error::Empty);
        }
        let length = data.len().min(self.len());
        let head = self.head;
        let wrap = self.capacity() - head;
        if length <= wrap {
            data[..length].copy_from_slice(&self.slice[head..head + length]);
        } else {
            data[..wrap].copy_from_slice(&self.slice[head..]);
            data[wrap..length].copy_from_slice(&self.slice[..length - wrap]);
        }
        self.head = (head + length) & self.mask;
        self.busy = self.head != self.tail;
        Ok(length)
    }

    // ── Views and streaming helpers ──────────────────────────────────────────

    /// Returns the queued bytes as an oldest-first pair of slices; the second
    /// is empty unless the contents wrap around the ring end.
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

    /// Allocates and returns a copy of the queued bytes, oldest first.
    pub fn bytes(&self) -> Vec<u8> {
        let (a, b) = self.as_slices();
        let mut out = Vec::with_capacity(a.len() + b.len());
        out.extend_from_slice(a);
        out.extend_from_slice(b);
        out
    }

    /// Fills the ring from `reader` until it is full or the reader is
    /// exhausted; returns the number of bytes transferred.
    pub fn read_from<R: io::Read>(&mut self, reader: &mut R) -> io::Result<u64> {
        let mut total = 0u64;
        loop {
            let capacity = self.capacity();
            let space = self.prepare_bulk_write(capacity);
            if space.is_empty() {
                break;
            }
            let n = reader.read(space)?;
            if n == 0 {
                break;
            }
            self.commit_bulk_write(n);
            total += n as u64;
        }
        Ok(total)
    }

    /// Drains the ring into `writer`; returns the number of bytes
    /// transferred.  On success the ring is empty.
    pub fn write_to<W: io::Write>(&mut self, writer: &mut W) -> io::Result<u64> {
        let mut total = 0u64;
        loop {
            let capacity = self.capacity();
            let chunk = self.prepare_bulk_read(capacity);
            if chunk.is_empty() {
                break;
            }
            let n = writer.write(chunk)?;
            self.commit_bulk_read(n);
            total += n as u64;
            if n == 0 {
                break;
            }
        }
        Ok(total)
    }

    /// Length of the contiguous free run starting at `tail`.
    fn writable_run(&self) -> usize {
        if self.is_full() {
            return 0;
        }
        if !self.busy || self.head <= self.tail {
            self.capacity() - self.tail
        } else {
            self.head - self.tail
        }
    }

    /// Length of the contiguous queued run starting at `head`.
    fn readable_run(&self) -> usize {
        if !self.busy {
            return 0;
        }
        if self.head >= self.tail {
            self.capacity() - self.head
        } else {
            self.tail - self.head
        }
    }
}

impl io::Write for RingBuffer {
    /// Writes like the slice writer: a full ring yields `Ok(0)`.
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match RingBuffer::write(self, data) {
            Ok(n) => Ok(n),
            Err(Error::Full) => Ok(0),
            Err(_) => unreachable!("ring write only fails with Full"),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for RingBuffer {
    /// Reads like the slice reader: an empty ring yields `Ok(0)`.
    fn read(&mut self, data: &mut [u8]) -> io::Result<usize> {
        match RingBuffer::read(self, data) {
            Ok(n) => Ok(n),
            Err(Error::Empty) => Ok(0),
            Err(_) => unreachable!("ring read only fails with Empty"),
        }
    }
}

impl core::fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "RingBuffer(head={}, tail={}, cap={}, busy={})",
            self.head,
            self.tail,
            self.capacity(),
            self.busy
        )
    }
}

//! Byte-store operations: writes into the buffer, reads that bypass
//! matching, window preloading, and the repack that keeps the monotone
//! indices inside the backing region.

use crate::errors::Error;

use super::Lz77;

impl Lz77 {
    // ── Write side ───────────────────────────────────────────────────────────

    /// Appends one byte to the buffer, or returns [`Error::Full`].
    pub fn write_byte(&mut self, ch: u8) -> Result<(), Error> {
        if self.j - self.i >= self.bsize {
            return Err(Error::Full);
        }
        self.shift(1);
        self.slice[self.j] = ch;
        self.j += 1;
        self.update_index();
        self.check_invariants();
        Ok(())
    }

    /// Appends as many bytes of `data` as fit and returns the count written.
    ///
    /// Returns [`Error::Full`] only when not a single byte fits; a short
    /// write is reported through the count alone.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, Error> {
        if data.is_empty() {
            return Ok(0);
        }
        let free = self.bsize - (self.j - self.i);
        if free == 0 {
            return Err(Error::Full);
        }
        let length = data.len().min(free);
        self.shift(length);
        self.slice[self.j..self.j + length].copy_from_slice(&data[..length]);
        self.j += length;
        self.update_index();
        self.check_invariants();
        Ok(length)
    }

    /// Reserves up to `length` bytes of buffer space for the caller to fill.
    ///
    /// The returned slice may be shorter than requested and is empty when the
    /// buffer is full.  Nothing enters the buffer until the matching
    /// [`commit_bulk_write`](Lz77::commit_bulk_write); dropping the slice
    /// without committing abandons the reservation with no state change.
    pub fn prepare_bulk_write(&mut self, length: usize) -> &mut [u8] {
        let free = self.bsize - (self.j - self.i);
        let length = length.min(free);
        self.shift(length);
        let j = self.j;
        &mut self.slice[j..j + length]
    }

    /// Completes the bulk write begun by the previous
    /// [`prepare_bulk_write`](Lz77::prepare_bulk_write).
    ///
    /// `length` must not exceed the length of the slice that call returned.
    pub fn commit_bulk_write(&mut self, length: usize) {
        let free = self.bsize - (self.j - self.i);
        assert!(
            length <= free,
            "commit of {length} bytes exceeds {free} bytes of reserved buffer space"
        );
        assert!(
            self.j + length <= self.slice.len(),
            "commit of {length} bytes overruns the byte region (j = {}, capacity = {})",
            self.j,
            self.slice.len()
        );
        self.j += length;
        self.update_index();
        self.check_invariants();
    }

    // ── Read side (retires bytes without emitting matches) ───────────────────

    /// Removes and returns the oldest buffered byte, or [`Error::Empty`].
    ///
    /// The byte still enters the window and remains available as match
    /// history for later [`advance`](Lz77::advance) calls.
    pub fn read_byte(&mut self) -> Result<u8, Error> {
        if self.i == self.j {
            return Err(Error::Empty);
        }
        let ch = self.slice[self.i];
        self.consume(1);
        self.check_invariants();
        Ok(ch)
    }

    /// Fills `data` with as many buffered bytes as available and returns the
    /// count read, or [`Error::Empty`] when the buffer holds none.
    pub fn read(&mut self, data: &mut [u8]) -> Result<usize, Error> {
        if data.is_empty() {
            return Ok(0);
        }
        let avail = self.j - self.i;
        if avail == 0 {
            return Err(Error::Empty);
        }
        let length = data.len().min(avail);
        data[..length].copy_from_slice(&self.slice[self.i..self.i + length]);
        self.consume(length);
        self.check_invariants();
        Ok(length)
    }

    /// Borrows up to `length` buffered bytes without retiring them.
    ///
    /// The bytes leave the buffer only at the matching
    /// [`commit_bulk_read`](Lz77::commit_bulk_read); an uncommitted prepare
    /// is a peek.
    pub fn prepare_bulk_read(&self, length: usize) -> &[u8] {
        let length = length.min(self.j - self.i);
        &self.slice[self.i..self.i + length]
    }

    /// Completes the bulk read begun by the previous
    /// [`prepare_bulk_read`](Lz77::prepare_bulk_read), retiring `length`
    /// bytes into the window.
    pub fn commit_bulk_read(&mut self, length: usize) {
        let avail = self.j - self.i;
        assert!(
            length <= avail,
            "commit of {length} bytes exceeds {avail} bytes of buffered data"
        );
        self.consume(length);
        self.check_invariants();
    }

    // ── Window management ────────────────────────────────────────────────────

    /// Replaces the window contents with (at most the last
    /// `max_match_distance` bytes of) `data`, leaving the buffer untouched.
    ///
    /// The hash-chain index is rebuilt over the new window.
    pub fn set_window(&mut self, data: &[u8]) {
        let kept = data.len().min(self.max_dist);
        let h = self.i - kept;
        self.slice[h..self.i].copy_from_slice(&data[data.len() - kept..]);
        self.h = h;
        if let Some(index) = self.index.as_mut() {
            index.reset(h);
            index.catch_up(&self.slice, h, self.i, self.j);
        }
        self.check_invariants();
    }

    /// Empties both the window and the buffer.
    pub fn clear(&mut self) {
        self.h = self.wsize;
        self.i = self.wsize;
        self.j = self.wsize;
        if let Some(index) = self.index.as_mut() {
            index.reset(self.wsize);
        }
    }

    /// Empties the window, forgetting all match history; the buffer is
    /// untouched.
    pub fn window_clear(&mut self) {
        self.h = self.i;
        if let Some(index) = self.index.as_mut() {
            index.reset(self.i);
        }
    }

    // ── Views ────────────────────────────────────────────────────────────────

    /// Borrows the window contents, oldest byte first.
    pub fn window_bytes_view(&self) -> &[u8] {
        &self.slice[self.h..self.i]
    }

    /// Allocates and returns a copy of the window contents.
    pub fn window_bytes(&self) -> Vec<u8> {
        self.window_bytes_view().to_vec()
    }

    /// Borrows the buffer contents, oldest byte first.
    pub fn buffer_bytes_view(&self) -> &[u8] {
        &self.slice[self.i..self.j]
    }

    /// Allocates and returns a copy of the buffer contents.
    pub fn buffer_bytes(&self) -> Vec<u8> {
        self.buffer_bytes_view().to_vec()
    }

    // ── Region repack ────────────────────────────────────────────────────────

    /// Makes room for `n` more bytes at `j`, repacking `[h, j)` toward the
    /// region start when the write would otherwise overrun it.
    ///
    /// After a repack `i` sits at `windowSize` again and every index entry
    /// has been translated by the same delta.
    pub(super) fn shift(&mut self, n: usize) {
        if self.j + n <= self.slice.len() {
            return;
        }

        let window_len = self.i - self.h;
        let buffer_len = self.j - self.i;
        let h_old = self.h;
        let i_new = self.wsize;
        let h_new = i_new - window_len;
        let j_new = i_new + buffer_len;

        self.slice.copy_within(h_old..self.j, h_new);
        self.h = h_new;
        self.i = i_new;
        self.j = j_new;

        let delta = h_old - h_new;
        if let Some(index) = self.index.as_mut() {
            index.relocate(delta, h_old);
        }
        self.check_invariants();
    }
}

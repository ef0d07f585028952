use crate::error::{CreateError, Full};

/// Fixed-capacity FIFO of bytes over a caller-provided slice.
///
/// The buffer never allocates: it borrows `storage` for `'a` and hands it
/// back from [`CircBuf::destroy`]. Nothing else may touch the slice while
/// the buffer is alive, which the borrow checker enforces.
///
/// Writes are rejected once the buffer holds `capacity` bytes. The oldest
/// byte is never overwritten.
///
/// `CircBuf` has no internal locking. Wrap it in
/// [`SharedCircBuf`](crate::SharedCircBuf) (feature `critical-section`)
/// to share it between interrupt handlers and the main loop.
#[derive(Debug)]
pub struct CircBuf<'a> {
    buffer: &'a mut [u8],
    capacity: usize,
    write_ptr: usize,
    read_ptr: usize,
    size: usize,
}

impl<'a> CircBuf<'a> {
    /// Binds a buffer of `capacity` slots to the front of `storage`.
    ///
    /// Fails if `capacity` is zero or `storage` is shorter than `capacity`.
    pub fn new(capacity: usize, storage: &'a mut [u8]) -> Result<Self, CreateError> {
        if capacity == 0 {
            debug!("circbuf: rejected zero capacity");
            return Err(CreateError::ZeroCapacity);
        }
        if storage.len() < capacity {
            debug!(
                "circbuf: storage of {=usize} bytes too small for capacity {=usize}",
                storage.len(),
                capacity
            );
            return Err(CreateError::StorageTooSmall {
                capacity,
                len: storage.len(),
            });
        }

        debug!("circbuf: created with capacity {=usize}", capacity);
        Ok(Self {
            buffer: storage,
            capacity,
            write_ptr: 0,
            read_ptr: 0,
            size: 0,
        })
    }

    /// Uses the whole of `storage` as the ring.
    pub fn from_slice(storage: &'a mut [u8]) -> Result<Self, CreateError> {
        let capacity = storage.len();
        Self::new(capacity, storage)
    }

    /// Releases the storage. Its contents are left as they are.
    pub fn destroy(self) -> &'a mut [u8] {
        self.buffer
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slot the next pushed byte lands in.
    ///
    /// Exposed for inspection and tests; not needed for normal use.
    pub fn write_cursor(&self) -> usize {
        self.write_ptr
    }

    /// Slot the next popped byte comes from.
    ///
    /// Exposed for inspection and tests; not needed for normal use.
    pub fn read_cursor(&self) -> usize {
        self.read_ptr
    }

    /// Number of bytes currently held.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of bytes that can be pushed before the buffer is full.
    pub fn remaining(&self) -> usize {
        self.capacity - self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    /// Appends `value`, or returns [`Full`] without touching the buffer.
    pub fn push(&mut self, value: u8) -> Result<(), Full> {
        if self.is_full() {
            trace!("circbuf: push rejected, buffer full");
            return Err(Full {
                requested: 1,
                remaining: 0,
            });
        }

        self.buffer[self.write_ptr] = value;
        self.write_ptr = self.advance(self.write_ptr, 1);
        self.size += 1;
        Ok(())
    }

    /// Removes and returns the oldest byte, or `None` when empty.
    pub fn pop(&mut self) -> Option<u8> {
        if self.is_empty() {
            trace!("circbuf: pop on empty buffer");
            return None;
        }

        let item = self.buffer[self.read_ptr];
        self.read_ptr = self.advance(self.read_ptr, 1);
        self.size -= 1;
        Some(item)
    }

    /// Returns the byte the next [`pop`](Self::pop) would yield.
    pub fn peek(&self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(self.buffer[self.read_ptr])
        }
    }

    /// Appends all of `data`, or nothing if it does not fit.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), Full> {
        let remaining = self.remaining();
        if data.len() > remaining {
            trace!(
                "circbuf: write of {=usize} bytes rejected, {=usize} free",
                data.len(),
                remaining
            );
            return Err(Full {
                requested: data.len(),
                remaining,
            });
        }

        // Copy up to the end of the ring, then wrap to the front.
        let first = data.len().min(self.capacity - self.write_ptr);
        let (head, tail) = data.split_at(first);
        self.buffer[self.write_ptr..self.write_ptr + first].copy_from_slice(head);
        self.buffer[..tail.len()].copy_from_slice(tail);

        self.write_ptr = self.advance(self.write_ptr, data.len());
        self.size += data.len();
        Ok(())
    }

    /// Fills `out` with the oldest `out.len()` bytes.
    ///
    /// Returns `None` and leaves the buffer untouched if fewer bytes are held.
    pub fn read_exact(&mut self, out: &mut [u8]) -> Option<usize> {
        let n = out.len();
        if self.size < n {
            trace!(
                "circbuf: read of {=usize} bytes rejected, {=usize} held",
                n,
                self.size
            );
            return None; // Not enough data
        }

        let first = n.min(self.capacity - self.read_ptr);
        let (head, tail) = out.split_at_mut(first);
        head.copy_from_slice(&self.buffer[self.read_ptr..self.read_ptr + first]);
        tail.copy_from_slice(&self.buffer[..tail.len()]);

        self.read_ptr = self.advance(self.read_ptr, n);
        self.size -= n;
        Some(n)
    }

    /// Forgets every held byte and rewinds both cursors to slot 0.
    pub fn clear(&mut self) {
        self.write_ptr = 0;
        self.read_ptr = 0;
        self.size = 0;
    }

    /// Pops bytes until the buffer is empty.
    ///
    /// Bytes not consumed from the iterator stay in the buffer.
    pub fn drain(&mut self) -> Drain<'_, 'a> {
        Drain { buf: self }
    }

    fn advance(&self, ptr: usize, n: usize) -> usize {
        // n <= capacity, so a single subtraction wraps.
        let next = ptr + n;
        if next >= self.capacity {
            next - self.capacity
        } else {
            next
        }
    }
}

/// Iterator returned by [`CircBuf::drain`].
#[derive(Debug)]
pub struct Drain<'b, 'a> {
    buf: &'b mut CircBuf<'a>,
}

impl Iterator for Drain<'_, '_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.buf.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buf.size(), Some(self.buf.size()))
    }
}

impl ExactSizeIterator for Drain<'_, '_> {}

use core::fmt;

/// Reasons a [`CircBuf`](crate::CircBuf) could not be bound to its storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CreateError {
    /// A ring buffer needs at least one slot.
    ZeroCapacity,
    /// The storage slice is shorter than the requested capacity.
    StorageTooSmall { capacity: usize, len: usize },
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateError::ZeroCapacity => f.write_str("capacity must be greater than zero"),
            CreateError::StorageTooSmall { capacity, len } => write!(
                f,
                "storage holds {len} bytes but capacity {capacity} was requested"
            ),
        }
    }
}

/// A write was rejected because the buffer does not have enough free slots.
///
/// The buffer is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Full {
    /// Number of bytes the caller tried to write.
    pub requested: usize,
    /// Free slots at the time of the call.
    pub remaining: usize,
}

impl fmt::Display for Full {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buffer full: {} bytes requested, {} free",
            self.requested, self.remaining
        )
    }
}

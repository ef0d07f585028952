//! Fixed-capacity byte ring buffer for `no_std` targets.
//!
//! [`CircBuf`] borrows its storage from the caller and never allocates. It
//! queues bytes first-in first-out and rejects writes once full instead of
//! overwriting unread data.
//!
//! ```
//! use circbuf::CircBuf;
//!
//! let mut storage = [0u8; 8];
//! let mut buf = CircBuf::new(8, &mut storage).unwrap();
//!
//! buf.push(b'A').unwrap();
//! buf.push(b'B').unwrap();
//! assert_eq!(buf.pop(), Some(b'A'));
//! assert_eq!(buf.pop(), Some(b'B'));
//! assert_eq!(buf.pop(), None);
//! ```
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod circ_buf;
pub mod error;
#[cfg(feature = "critical-section")]
pub mod shared;

pub use circ_buf::{CircBuf, Drain};
pub use error::{CreateError, Full};
#[cfg(feature = "critical-section")]
pub use shared::SharedCircBuf;

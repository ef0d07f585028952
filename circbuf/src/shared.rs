//! Interrupt-safe access to a [`CircBuf`] held in a `static`.
//!
//! ```
//! use circbuf::{CircBuf, SharedCircBuf};
//!
//! static RECV: SharedCircBuf<'static> = SharedCircBuf::new();
//!
//! let storage: &'static mut [u8] = Box::leak(Box::new([0u8; 64]));
//! RECV.init(CircBuf::from_slice(storage).unwrap());
//!
//! // e.g. from a USB interrupt
//! RECV.push(0x42).unwrap();
//! // and later from the main loop
//! assert_eq!(RECV.pop(), Some(0x42));
//! ```
use core::cell::RefCell;

use critical_section::Mutex;

use crate::circ_buf::CircBuf;
use crate::error::Full;

/// A [`CircBuf`] behind a critical-section mutex.
///
/// Every access runs with interrupts masked (or whatever the platform's
/// `critical-section` implementation provides), so it can be shared
/// between interrupt handlers and thread code. Keep closures passed to
/// [`with`](Self::with) short.
///
/// The slot starts out empty so the wrapper can be built in a `const`
/// context; install a buffer with [`init`](Self::init).
pub struct SharedCircBuf<'a> {
    inner: Mutex<RefCell<Option<CircBuf<'a>>>>,
}

impl<'a> SharedCircBuf<'a> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Installs `buf`, returning the previously installed buffer.
    pub fn init(&self, buf: CircBuf<'a>) -> Option<CircBuf<'a>> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(buf)))
    }

    /// Removes the installed buffer, e.g. to [`destroy`](CircBuf::destroy) it.
    pub fn take(&self) -> Option<CircBuf<'a>> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }

    /// Runs `f` on the buffer inside a critical section.
    ///
    /// Returns `None` if no buffer is installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut CircBuf<'a>) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).borrow_mut();
            match slot.as_mut() {
                Some(buf) => Some(f(buf)),
                None => {
                    trace!("circbuf: shared buffer used before init");
                    None
                }
            }
        })
    }

    pub fn push(&self, value: u8) -> Result<(), Full> {
        self.with(|buf| buf.push(value)).unwrap_or(Err(Full {
            requested: 1,
            remaining: 0,
        }))
    }

    pub fn pop(&self) -> Option<u8> {
        self.with(|buf| buf.pop()).flatten()
    }

    pub fn size(&self) -> usize {
        self.with(|buf| buf.size()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.with(|buf| buf.is_empty()).unwrap_or(true)
    }

    pub fn is_full(&self) -> bool {
        self.with(|buf| buf.is_full()).unwrap_or(false)
    }
}

impl Default for SharedCircBuf<'_> {
    fn default() -> Self {
        Self::new()
    }
}

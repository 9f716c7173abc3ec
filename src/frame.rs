//! Shared pixel frame buffer.
//!
//! A fixed-size pixel array behind a single exclusive lock, built on
//! `critical-section` so producers and the refresh driver can run on
//! separate cores, threads or interrupt contexts. One coarse lock guards
//! the whole array; the buffer is small and full scans dominate, so there
//! is no per-pixel locking.
//!
//! Every access path goes through the lock, and every multi-pixel scan
//! holds it for the whole pass. A transmitted frame is therefore always a
//! point-in-time snapshot, and a producer's multi-pixel update is never
//! observed half-applied.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::Rgb;

const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Fixed-size pixel buffer for a strip of `N` LEDs, shared between
/// producers and the refresh driver.
///
/// `new` is const so the buffer can live in a `static`:
///
/// ```
/// use neostrip::{FrameBuffer, Rgb};
///
/// static FRAME: FrameBuffer<8> = FrameBuffer::new();
///
/// FRAME.set_pixel(0, Rgb::new(0, 16, 0));
/// assert_eq!(FRAME.snapshot()[0].g, 16);
/// ```
pub struct FrameBuffer<const N: usize> {
    inner: Mutex<RefCell<[Rgb; N]>>,
}

impl<const N: usize> FrameBuffer<N> {
    /// Number of pixels in the strip.
    pub const LEN: usize = N;

    /// Create an all-black buffer.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new([BLACK; N])),
        }
    }

    /// Get a producer handle for this buffer.
    ///
    /// Handles are `Copy`; any number of producers can share one buffer.
    pub const fn handle(&self) -> StripHandle<'_, N> {
        StripHandle { buffer: self }
    }

    /// Overwrite one pixel.
    ///
    /// An out-of-range `index` is dropped silently; no pixel is written
    /// and no neighbor is disturbed.
    pub fn set_pixel(&self, index: usize, color: Rgb) {
        if index >= N {
            return;
        }
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut()[index] = color;
        });
    }

    /// Overwrite every pixel with `color` under one lock acquisition, so
    /// concurrent readers observe the fully-old or fully-new buffer and
    /// never a mix.
    pub fn set_all(&self, color: Rgb) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().fill(color);
        });
    }

    /// Reset every pixel to black.
    pub fn clear(&self) {
        self.set_all(BLACK);
    }

    /// Run a multi-pixel update under the lock.
    ///
    /// This is the accessor pattern passes use for atomic scans. The lock
    /// is held for the closure's whole duration and the refresh driver
    /// shares it, so the closure must not block or sleep.
    pub fn update<R>(&self, f: impl FnOnce(&mut [Rgb; N]) -> R) -> R {
        critical_section::with(|cs| {
            let mut pixels = self.inner.borrow(cs).borrow_mut();
            f(&mut pixels)
        })
    }

    /// Read the buffer under the lock. Used by the refresh driver's
    /// compose pass; the same no-blocking rule as [`Self::update`]
    /// applies.
    pub fn with_frame<R>(&self, f: impl FnOnce(&[Rgb; N]) -> R) -> R {
        critical_section::with(|cs| {
            let pixels = self.inner.borrow(cs).borrow();
            f(&pixels)
        })
    }

    /// Copy the current frame out.
    pub fn snapshot(&self) -> [Rgb; N] {
        self.with_frame(|pixels| *pixels)
    }
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer-side handle for a [`FrameBuffer`].
///
/// This is a lightweight reference that can be copied into any pattern
/// or task that produces pixel data.
#[derive(Clone, Copy)]
pub struct StripHandle<'a, const N: usize> {
    buffer: &'a FrameBuffer<N>,
}

impl<const N: usize> StripHandle<'_, N> {
    /// Number of pixels in the strip.
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` for a zero-length strip.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Overwrite one pixel; out-of-range indices are dropped silently.
    pub fn set_pixel(&self, index: usize, color: Rgb) {
        self.buffer.set_pixel(index, color);
    }

    /// Overwrite every pixel atomically.
    pub fn set_all(&self, color: Rgb) {
        self.buffer.set_all(color);
    }

    /// Reset every pixel to black.
    pub fn clear(&self) {
        self.buffer.clear();
    }

    /// Run a multi-pixel update under the lock; see
    /// [`FrameBuffer::update`].
    pub fn update<R>(&self, f: impl FnOnce(&mut [Rgb; N]) -> R) -> R {
        self.buffer.update(f)
    }
}

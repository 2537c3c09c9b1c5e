//! Streaming checksum trait.
//!
//! - **Streaming**: Incremental updates for data that arrives in pieces
//! - **Runtime-configured**: Hashers are built from a value (a CRC model, an
//!   engine), so there is no argument-free constructor in the trait
//! - **Inline-friendly**: Provided methods are thin loops over [`Checksum::update`]

use core::fmt::Debug;

/// Non-cryptographic checksum computed over a byte stream.
///
/// # Usage
///
/// ```rust,ignore
/// use crcmodel::{Crc, CrcModel, CrcParams, Engine};
/// use traits::Checksum;
///
/// let model = CrcModel::new(CrcParams::CRC32)?;
/// let mut hasher = Crc::new(Engine::auto(model));
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), 0xCBF4_3926);
/// ```
///
/// # Implementor Requirements
///
/// - Any partition of the input across `update` calls must produce the same
///   result as a single `update` over the concatenation
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to the state it was constructed in
pub trait Checksum: Clone {
  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher. Further updates continue from
  /// the same running state.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Finalize, then reset the hasher for the next message.
  #[inline]
  #[must_use]
  fn finalize_reset(&mut self) -> Self::Output {
    let out = self.finalize();
    self.reset();
    out
  }

  /// Compute the checksum of `data` from this hasher's initial state.
  ///
  /// The running state of `self` is left untouched.
  #[inline]
  #[must_use]
  fn checksum_fresh(&self, data: &[u8]) -> Self::Output {
    let mut h = self.clone();
    h.reset();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers from this hasher's initial state.
  #[inline]
  #[must_use]
  fn checksum_vectored(&self, bufs: &[&[u8]]) -> Self::Output {
    let mut h = self.clone();
    h.reset();
    h.update_vectored(bufs);
    h.finalize()
  }
}

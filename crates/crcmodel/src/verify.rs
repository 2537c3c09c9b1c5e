//! Zero-syndrome verification.
//!
//! A CRC is a systematic code: appending a correctly computed checksum to its
//! message and dividing again leaves a zero remainder. This module runs that
//! division through the *same* engine that produced the checksum:
//!
//! 1. Skip widths that are not a whole number of bytes (the feedback below is
//!    byte-wise).
//! 2. Un-finalize the checksum: XOR `xor_out` back out, then undo `reflect_out`.
//! 3. Starting from the captured pre-final register, feed the checksum bytes
//!    back through `update`, most significant byte first, each byte reflected
//!    first when `reflect_in` is set.
//! 4. The resulting register is the syndrome. Anything but zero is a defect.
//!
//! No `finalize` is applied to the syndrome. The expected value is 0, and 0 is
//! a fixed point of both the output reflection and XOR with zero. That is the
//! only reason omitting it is valid.
//!
//! # Limitations
//!
//! This is a weak self-consistency check, not a correctness proof. It exercises
//! the engine's own arithmetic against itself, so an implementation that is
//! wrong but self-consistent (for example, one that uses the wrong polynomial
//! everywhere) passes. Use the catalogue check values or a cross-strategy
//! comparison for correctness.

use crate::{CrcEngine, CrcModel, SelfTestError, reflect, reflect_byte};

/// Whether the syndrome check runs for `model`.
#[inline]
#[must_use]
pub const fn is_applicable(model: &CrcModel) -> bool {
  model.is_byte_aligned()
}

/// Undo `finalize`'s output transform, giving the remainder in normal bit order.
#[inline]
#[must_use]
pub const fn unfinalize(model: &CrcModel, crc: u64) -> u64 {
  let mut crc = crc;
  if model.xor_out() != 0 {
    crc ^= model.xor_out();
  }
  if model.reflect_out() {
    crc = reflect(crc, model.width() as u32);
  }
  crc & model.crc_mask()
}

/// Compute the syndrome of `crc` against the pre-final register it came from.
///
/// Returns 0 without doing anything when the width is not byte-aligned.
#[must_use]
pub fn syndrome<E: CrcEngine + ?Sized>(engine: &E, pre_final: u64, crc: u64) -> u64 {
  let model = engine.model();
  if !is_applicable(model) {
    return 0;
  }

  let width = u32::from(model.width());
  let crc = unfinalize(model, crc);
  let mut result = pre_final;
  for i in 0..width / 8 {
    let mut byte = (crc >> (width - 8 * i - 8)) as u8;
    if model.reflect_in() {
      byte = reflect_byte(byte);
    }
    result = engine.update(result, &[byte]);
  }
  result
}

/// Run the syndrome check and turn a nonzero result into an error.
///
/// # Errors
///
/// [`SelfTestError::Verification`] when the syndrome is nonzero.
pub fn verify<E: CrcEngine + ?Sized>(engine: &E, pre_final: u64, crc: u64) -> Result<(), SelfTestError> {
  match syndrome(engine, pre_final, crc) {
    0 => Ok(()),
    syndrome => {
      tracing::warn!(algorithm = %engine.algorithm(), syndrome, crc, "crc verification failed");
      Err(SelfTestError::Verification { syndrome })
    }
  }
}

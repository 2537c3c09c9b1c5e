//! Bulk versus byte-at-a-time consistency.
//!
//! The same input is checksummed twice through the same `init`/`finalize`:
//! once with a single `update` over everything, and once with one `update` per
//! byte. The two must match bit for bit. This is the regression guard for
//! streaming correctness and runs for every model under test.

use crate::{CrcEngine, SelfTestError};

/// Checksum of `data` computed with one `update` call per byte.
#[must_use]
pub fn bytewise<E: CrcEngine + ?Sized>(engine: &E, data: &[u8]) -> u64 {
  let crc = data.chunks(1).fold(engine.init(), |crc, byte| engine.update(crc, byte));
  engine.finalize(crc)
}

/// Compare a bulk checksum of `data` with the byte-at-a-time one.
///
/// Returns the checksum on success.
///
/// # Errors
///
/// [`SelfTestError::Consistency`] when the two paths disagree.
pub fn check<E: CrcEngine + ?Sized>(engine: &E, data: &[u8], bulk: u64) -> Result<u64, SelfTestError> {
  let bytewise = bytewise(engine, data);
  if bytewise == bulk {
    Ok(bulk)
  } else {
    tracing::warn!(algorithm = %engine.algorithm(), bulk, bytewise, "crc loop verification failed");
    Err(SelfTestError::Consistency { bulk, bytewise })
  }
}

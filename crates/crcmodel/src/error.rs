//! Error types.
//!
//! Two families, matching the two ways a self-test run can end badly:
//!
//! - [`ModelError`]: the parameters do not describe a legal CRC. Nothing is
//!   computed.
//! - [`SelfTestError`]: a checksum was computed, but one of the self-checks
//!   rejected it.
//!
//! Both are terminal. CRC computation is deterministic, so retrying with the
//! same input cannot change the outcome.

use crate::engine::Algorithm;

/// Illegal CRC parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ModelError {
  /// Width outside `1..=64`.
  #[error("invalid width {0}: must be between 1 and 64")]
  Width(u8),
  /// The augmented bit-by-bit engine has no seed that reaches `xor_in`.
  ///
  /// Only possible for a polynomial without the `x^0` term and a nonzero
  /// `xor_in`. The other strategies accept such models.
  #[error("polynomial {polynomial:#x} has no x^0 term: bit-by-bit engine cannot seed xor_in {xor_in:#x}")]
  EvenPolynomial {
    /// Masked polynomial.
    polynomial: u64,
    /// Masked initial value.
    xor_in: u64,
  },
}

/// Unrecognised strategy name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm (expected bbb, bbf or tbl)")]
pub struct ParseAlgorithmError;

/// A self-check rejected a computed checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SelfTestError {
  /// Feeding the checksum back through `update` left a nonzero register.
  #[error("crc verification failed: syndrome {syndrome:#x} (expected 0)")]
  Verification {
    /// Residual register value.
    syndrome: u64,
  },
  /// One bulk update and byte-at-a-time updates produced different checksums.
  #[error("crc loop verification failed: bulk {bulk:#x} != bytewise {bytewise:#x}")]
  Consistency {
    /// Checksum from a single `update` over the whole input.
    bulk: u64,
    /// Checksum from one `update` call per byte.
    bytewise: u64,
  },
  /// Two engine strategies disagreed on the same model and input.
  #[error("different checksums: {first} {first_crc:#x} != {other} {other_crc:#x}")]
  CrossCheck {
    /// Strategy that produced the reference checksum.
    first: Algorithm,
    /// Reference checksum.
    first_crc: u64,
    /// Strategy that disagreed.
    other: Algorithm,
    /// Its checksum.
    other_crc: u64,
  },
}

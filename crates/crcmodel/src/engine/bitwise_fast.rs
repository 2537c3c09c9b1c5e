//! Direct bit-by-bit engine.
//!
//! Same shift register as [`BitByBit`](super::BitByBit), but each input bit is
//! XORed into the register's top bit instead of being shifted in at the
//! bottom. That makes the division non-augmented: the register after `update`
//! already holds the remainder, the seed is `xor_in` as given, and `finalize`
//! has no zero bits to flush.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
#![allow(clippy::indexing_slicing)]

use super::{Algorithm, CrcEngine};
use crate::{CrcModel, reflect};

/// Direct (non-augmented) bit-by-bit CRC engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitByBitFast {
  model: CrcModel,
}

impl BitByBitFast {
  #[must_use]
  pub const fn new(model: CrcModel) -> Self {
    Self { model }
  }

  #[must_use]
  pub const fn init(&self) -> u64 {
    self.model.xor_in()
  }

  #[must_use]
  pub const fn update(&self, crc: u64, data: &[u8]) -> u64 {
    let m = &self.model;
    let mut crc = crc;
    let mut i: usize = 0;
    while i < data.len() {
      let c = if m.reflect_in() { data[i].reverse_bits() } else { data[i] };
      let mut mask: u8 = 0x80;
      while mask != 0 {
        let top = (crc & m.msb_mask() != 0) ^ (c & mask != 0);
        crc <<= 1;
        if top {
          crc ^= m.polynomial();
        }
        mask >>= 1;
      }
      crc &= m.crc_mask();
      i += 1;
    }
    crc
  }

  #[must_use]
  pub const fn finalize(&self, crc: u64) -> u64 {
    let m = &self.model;
    let crc = if m.reflect_out() { reflect(crc, m.width() as u32) } else { crc };
    (crc ^ m.xor_out()) & m.crc_mask()
  }

  /// One-shot checksum of `data`.
  #[must_use]
  pub const fn checksum(&self, data: &[u8]) -> u64 {
    self.finalize(self.update(self.init(), data))
  }
}

impl CrcEngine for BitByBitFast {
  #[inline]
  fn model(&self) -> &CrcModel {
    &self.model
  }

  #[inline]
  fn algorithm(&self) -> Algorithm {
    Algorithm::BitByBitFast
  }

  #[inline]
  fn init(&self) -> u64 {
    Self::init(self)
  }

  #[inline]
  fn update(&self, crc: u64, data: &[u8]) -> u64 {
    Self::update(self, crc, data)
  }

  #[inline]
  fn finalize(&self, crc: u64) -> u64 {
    Self::finalize(self, crc)
  }
}

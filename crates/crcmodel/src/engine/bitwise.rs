//! Augmented bit-by-bit engine.
//!
//! This is the canonical "source of truth" for the crate. It mirrors the
//! textbook definition of CRC as polynomial division over GF(2): message bits
//! are shifted into the bottom of the register one at a time, and `finalize`
//! shifts in `width` zero bits to flush the register (the augmentation).
//!
//! - **Obviously correct**: No tables, no reflected registers
//! - **Const-evaluable**: Check values are verified at compile time
//!
//! These are intentionally slow (~8 operations per bit). Every other engine
//! must produce identical results.
//!
//! # Seed
//!
//! Because the message is augmented, the register cannot start at `xor_in`
//! directly. `init` runs the division backwards for `width` steps to find the
//! non-direct seed that reaches `xor_in` after the flush. Running it backwards
//! relies on the polynomial's `x^0` term: without it the flush is not
//! invertible and some `xor_in` values have no seed at all.
//! [`BitByBit::can_seed`] tells the two cases apart; `xor_in = 0` always
//! works.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::{Algorithm, CrcEngine};
use crate::{CrcModel, reflect};

/// Augmented bit-by-bit CRC engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitByBit {
  model: CrcModel,
}

impl BitByBit {
  #[must_use]
  pub const fn new(model: CrcModel) -> Self {
    Self { model }
  }

  /// Non-direct (augmented) seed equivalent to `xor_in`.
  #[must_use]
  pub const fn init(&self) -> u64 {
    let m = &self.model;
    let mut crc = m.xor_in();
    let mut i = 0u8;
    while i < m.width() {
      crc = if crc & 1 != 0 { ((crc ^ m.polynomial()) >> 1) | m.msb_mask() } else { crc >> 1 };
      i += 1;
    }
    crc & m.crc_mask()
  }

  /// Whether [`init`](Self::init) flushes back to `xor_in`.
  ///
  /// True for every odd polynomial. When false, this engine's checksums
  /// differ from the other strategies' and it must not be used for `model`.
  #[must_use]
  pub const fn can_seed(model: &CrcModel) -> bool {
    let e = Self::new(*model);
    e.flush(e.init()) == model.xor_in()
  }

  /// Shift `width` zero bits through the register.
  const fn flush(&self, crc: u64) -> u64 {
    let m = &self.model;
    let mut crc = crc;
    let mut i = 0u8;
    while i < m.width() {
      let top = crc & m.msb_mask() != 0;
      crc <<= 1;
      if top {
        crc ^= m.polynomial();
      }
      i += 1;
    }
    crc & m.crc_mask()
  }

  /// Shift each input bit into the bottom of the register, MSB first.
  #[must_use]
  pub const fn update(&self, crc: u64, data: &[u8]) -> u64 {
    let m = &self.model;
    let mut crc = crc;
    let mut i: usize = 0;
    while i < data.len() {
      let c = if m.reflect_in() { data[i].reverse_bits() } else { data[i] };
      let mut bit: u32 = 8;
      while bit > 0 {
        bit -= 1;
        let top = crc & m.msb_mask() != 0;
        crc = (crc << 1) | ((c >> bit) & 1) as u64;
        if top {
          crc ^= m.polynomial();
        }
      }
      crc &= m.crc_mask();
      i += 1;
    }
    crc & m.crc_mask()
  }

  /// Flush `width` zero bits, then apply `reflect_out` and `xor_out`.
  #[must_use]
  pub const fn finalize(&self, crc: u64) -> u64 {
    let m = &self.model;
    let mut crc = self.flush(crc);
    if m.reflect_out() {
      crc = reflect(crc, m.width() as u32);
    }
    (crc ^ m.xor_out()) & m.crc_mask()
  }

  /// One-shot checksum of `data`.
  #[must_use]
  pub const fn checksum(&self, data: &[u8]) -> u64 {
    self.finalize(self.update(self.init(), data))
  }
}

impl CrcEngine for BitByBit {
  #[inline]
  fn model(&self) -> &CrcModel {
    &self.model
  }

  #[inline]
  fn algorithm(&self) -> Algorithm {
    Algorithm::BitByBit
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

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Every catalogue model's check value is recomputed here at compile time. If
// the reference engine regresses, the build fails.
const _: () = {
  let models = crate::catalog::MODELS;
  let mut i = 0;
  while i < models.len() {
    let entry = &models[i];
    let model = match CrcModel::new(entry.params) {
      Ok(model) => model,
      Err(_) => panic!("catalogue model is not a legal CRC"),
    };
    assert!(BitByBit::can_seed(&model));
    assert!(BitByBit::new(model).checksum(crate::catalog::CHECK_INPUT) == entry.check);
    i += 1;
  }
};

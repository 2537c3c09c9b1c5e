//! Table-driven engine.
//!
//! One 256-entry lookup per input byte. The table holds the CRC contribution
//! of every possible byte value and is generated from the model with the same
//! shift-and-XOR step the bit-by-bit engines use, so it is derived rather than
//! trusted.
//!
//! # Register domains
//!
//! | `reflect_in` | Register | Byte enters at | Seed |
//! |--------------|----------|----------------|------|
//! | false | normal, top-aligned to a byte when `width < 8` | top | `xor_in` |
//! | true | reflected | bottom | `reflect(xor_in, width)` |
//!
//! Keeping the register reflected when the input is reflected means no byte is
//! ever reversed in the hot loop. `finalize` only reflects when `reflect_in`
//! and `reflect_out` differ.
//!
//! Sub-byte widths in the normal domain are handled by shifting the register
//! up by `shift` for the duration of `update`. The value handed back to the
//! caller is always within `crc_mask`.

// SAFETY: All array indexing in this module uses bounded indices:
// - Table indices are masked with `& 0xFF` (0..255)
// - Data indices use bounded loop indices (0..data.len())
#![allow(clippy::indexing_slicing)]

use core::fmt;

use super::{Algorithm, CrcEngine};
use crate::{CrcModel, reflect};

/// Number of entries in the lookup table (8-bit index).
pub const TABLE_LEN: usize = 256;

/// Generate the lookup table for `model`.
///
/// In the normal domain entries are shifted up by `model.shift()`; in the
/// reflected domain they are stored reflected and unshifted.
#[must_use]
pub const fn generate_table(model: &CrcModel) -> [u64; TABLE_LEN] {
  let shift = model.shift() as u32;
  let width = model.width() as u32;
  let top = model.msb_mask() << shift;
  let poly = model.polynomial() << shift;
  let mask = model.crc_mask() << shift;

  let mut table = [0u64; TABLE_LEN];
  let mut i = 0usize;
  while i < TABLE_LEN {
    let index = if model.reflect_in() { (i as u8).reverse_bits() } else { i as u8 };
    let mut reg = (index as u64) << (width + shift - 8);
    let mut bit = 0;
    while bit < 8 {
      reg = if reg & top != 0 { (reg << 1) ^ poly } else { reg << 1 };
      bit += 1;
    }
    reg &= mask;
    table[i] = if model.reflect_in() { reflect(reg >> shift, width) } else { reg };
    i += 1;
  }
  table
}

/// Table-driven CRC engine.
#[derive(Clone, PartialEq, Eq)]
pub struct TableDriven {
  model: CrcModel,
  table: [u64; TABLE_LEN],
}

impl TableDriven {
  #[must_use]
  pub const fn new(model: CrcModel) -> Self {
    Self { table: generate_table(&model), model }
  }

  /// The generated lookup table.
  #[must_use]
  pub const fn table(&self) -> &[u64; TABLE_LEN] {
    &self.table
  }

  #[must_use]
  pub const fn init(&self) -> u64 {
    let m = &self.model;
    if m.reflect_in() { reflect(m.xor_in(), m.width() as u32) } else { m.xor_in() }
  }

  #[must_use]
  pub const fn update(&self, crc: u64, data: &[u8]) -> u64 {
    let m = &self.model;
    let mut i: usize = 0;

    if m.reflect_in() {
      let mut crc = crc;
      while i < data.len() {
        let idx = ((crc ^ data[i] as u64) & 0xFF) as usize;
        crc = (self.table[idx] ^ (crc >> 8)) & m.crc_mask();
        i += 1;
      }
      return crc;
    }

    let shift = m.shift() as u32;
    let index_shift = m.width() as u32 + shift - 8;
    let mask = m.crc_mask() << shift;
    let mut reg = crc << shift;
    while i < data.len() {
      let idx = (((reg >> index_shift) ^ data[i] as u64) & 0xFF) as usize;
      reg = (self.table[idx] ^ (reg << 8)) & mask;
      i += 1;
    }
    reg >> shift
  }

  #[must_use]
  pub const fn finalize(&self, crc: u64) -> u64 {
    let m = &self.model;
    let crc = if m.reflect_in() != m.reflect_out() { reflect(crc, m.width() as u32) } else { crc };
    (crc ^ m.xor_out()) & m.crc_mask()
  }

  /// One-shot checksum of `data`.
  #[must_use]
  pub const fn checksum(&self, data: &[u8]) -> u64 {
    self.finalize(self.update(self.init(), data))
  }
}

impl fmt::Debug for TableDriven {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TableDriven").field("model", &self.model).finish_non_exhaustive()
  }
}

impl CrcEngine for TableDriven {
  #[inline]
  fn model(&self) -> &CrcModel {
    &self.model
  }

  #[inline]
  fn algorithm(&self) -> Algorithm {
    Algorithm::TableDriven
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

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{CrcParams, engine::BitByBitFast};

  fn engine(params: CrcParams) -> TableDriven {
    TableDriven::new(CrcModel::new(params).unwrap())
  }

  #[test]
  fn well_known_table_entries() {
    // CRC-32 (reflected) and CRC-16/XMODEM (normal) tables from zlib / XMODEM.
    let t = engine(CrcParams::CRC32);
    assert_eq!(t.table()[0], 0);
    assert_eq!(t.table()[1], 0x7707_3096);
    assert_eq!(t.table()[255], 0x2D02_EF8D);

    let t = engine(CrcParams::CRC16_XMODEM);
    assert_eq!(t.table()[1], 0x1021);
    assert_eq!(t.table()[255], 0x1EF0);
  }

  #[test]
  fn table_entries_are_masked() {
    for width in 1..=16u8 {
      for reflect_in in [false, true] {
        let params = CrcParams { width, polynomial: 0xFFFF, reflect_in, ..CrcParams::default() };
        let t = engine(params);
        let m = t.model();
        let mask = if reflect_in { m.crc_mask() } else { m.crc_mask() << m.shift() };
        assert!(t.table().iter().all(|&e| e & !mask == 0), "width={width} reflect_in={reflect_in}");
      }
    }
  }

  #[test]
  fn sub_byte_register_stays_masked() {
    let t = engine(CrcParams::CRC7_MMC);
    let mut crc = t.init();
    for b in b"123456789" {
      crc = t.update(crc, core::slice::from_ref(b));
      assert!(crc <= 0x7F, "register {crc:#x} escaped the 7-bit mask");
    }
    assert_eq!(t.finalize(crc), 0x75);
  }

  #[test]
  fn mixed_reflection_reflects_in_finalize() {
    // CRC-12/3GPP: normal input, reflected output.
    let params = CrcParams { width: 12, polynomial: 0x80F, xor_in: 0, reflect_in: false, reflect_out: true, xor_out: 0 };
    assert_eq!(engine(params).checksum(b"123456789"), 0xDAF);
  }

  #[test]
  fn agrees_with_direct_engine_on_every_byte() {
    for params in [CrcParams::CRC32, CrcParams::CRC24_OPENPGP, CrcParams::CRC5_USB, CrcParams::CRC7_MMC] {
      let model = CrcModel::new(params).unwrap();
      let t = TableDriven::new(model);
      let d = BitByBitFast::new(model);
      for b in 0u8..=255 {
        assert_eq!(t.checksum(&[b]), d.checksum(&[b]), "{params:?} byte {b:#04x}");
      }
    }
  }

  #[test]
  fn debug_omits_table() {
    extern crate alloc;
    let s = alloc::format!("{:?}", engine(CrcParams::CRC16_ARC));
    assert!(s.starts_with("TableDriven { model: CrcModel {"));
    assert!(s.ends_with(".. }"));
  }
}

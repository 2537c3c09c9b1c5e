//! Catalogue of well-known CRC models.
//!
//! Each entry carries the checksum of [`CHECK_INPUT`] (`"123456789"`), the
//! standard check value published alongside CRC parameter sets. The
//! bit-by-bit reference engine recomputes every one of them at compile time.

// SAFETY: Indexing is bounded by the const loop condition.
#![allow(clippy::indexing_slicing)]

use crate::CrcParams;

/// Standard check input.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// A named model with its known check value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
  /// Canonical lower-case name.
  pub name: &'static str,
  pub params: CrcParams,
  /// Checksum of [`CHECK_INPUT`].
  pub check: u64,
}

#[allow(clippy::too_many_arguments)]
const fn entry(
  name: &'static str,
  width: u8,
  polynomial: u64,
  reflect_in: bool,
  xor_in: u64,
  reflect_out: bool,
  xor_out: u64,
  check: u64,
) -> CatalogEntry {
  CatalogEntry { name, params: CrcParams { width, polynomial, xor_in, reflect_in, reflect_out, xor_out }, check }
}

/// All catalogued models.
#[rustfmt::skip]
pub const MODELS: &[CatalogEntry] = &[
  //     name               width  polynomial              refl_in  xor_in                 refl_out xor_out                check
  entry("crc-5",             5, 0x05,                  true,  0x1F,                  true,  0x1F,                  0x19),
  entry("crc-8",             8, 0x07,                  false, 0x00,                  false, 0x00,                  0xF4),
  entry("dallas-1-wire",     8, 0x31,                  true,  0x00,                  true,  0x00,                  0xA1),
  entry("crc-12-3gpp",      12, 0x80F,                 false, 0x000,                 true,  0x000,                 0xDAF),
  entry("crc-15",           15, 0x4599,                false, 0x0000,                false, 0x0000,                0x059E),
  entry("crc-16",           16, 0x8005,                true,  0x0000,                true,  0x0000,                0xBB3D),
  entry("crc-16-usb",       16, 0x8005,                true,  0xFFFF,                true,  0xFFFF,                0xB4C8),
  entry("crc-16-modbus",    16, 0x8005,                true,  0xFFFF,                true,  0x0000,                0x4B37),
  entry("crc-16-genibus",   16, 0x1021,                false, 0xFFFF,                false, 0xFFFF,                0xD64E),
  entry("ccitt",            16, 0x1021,                false, 0xFFFF,                false, 0x0000,                0x29B1),
  entry("r-crc-16",         16, 0x0589,                false, 0x0000,                false, 0x0001,                0x007E),
  entry("kermit",           16, 0x1021,                true,  0x0000,                true,  0x0000,                0x2189),
  entry("x-25",             16, 0x1021,                true,  0xFFFF,                true,  0xFFFF,                0x906E),
  entry("xmodem",           16, 0x1021,                false, 0x0000,                false, 0x0000,                0x31C3),
  entry("zmodem",           16, 0x1021,                false, 0x0000,                false, 0x0000,                0x31C3),
  entry("crc-24",           24, 0x86_4CFB,             false, 0xB7_04CE,             false, 0x00_0000,             0x21_CF02),
  entry("crc-32",           32, 0x04C1_1DB7,           true,  0xFFFF_FFFF,           true,  0xFFFF_FFFF,           0xCBF4_3926),
  entry("crc-32c",          32, 0x1EDC_6F41,           true,  0xFFFF_FFFF,           true,  0xFFFF_FFFF,           0xE306_9283),
  entry("crc-32-mpeg",      32, 0x04C1_1DB7,           false, 0xFFFF_FFFF,           false, 0x0000_0000,           0x0376_E6E7),
  entry("crc-32-bzip2",     32, 0x04C1_1DB7,           false, 0xFFFF_FFFF,           false, 0xFFFF_FFFF,           0xFC89_1918),
  entry("posix",            32, 0x04C1_1DB7,           false, 0x0000_0000,           false, 0xFFFF_FFFF,           0x765E_7680),
  entry("jam",              32, 0x04C1_1DB7,           true,  0xFFFF_FFFF,           true,  0x0000_0000,           0x340B_C6D9),
  entry("xfer",             32, 0x0000_00AF,           false, 0x0000_0000,           false, 0x0000_0000,           0xBD0B_E338),
  entry("crc-64",           64, 0x0000_0000_0000_001B, true,  0x0000_0000_0000_0000, true,  0x0000_0000_0000_0000, 0x46A5_A938_8A5B_EFFE),
  entry("crc-64-jones",     64, 0xAD93_D235_94C9_35A9, true,  0xFFFF_FFFF_FFFF_FFFF, true,  0x0000_0000_0000_0000, 0xCAA7_1716_8609_F281),
  entry("crc-64-xz",        64, 0x42F0_E1EB_A9EA_3693, true,  0xFFFF_FFFF_FFFF_FFFF, true,  0xFFFF_FFFF_FFFF_FFFF, 0x995D_C9BB_DF19_39FA),
  entry("crc-8-dvb-s2",      8, 0xD5,                  false, 0x00,                  false, 0x00,                  0xBC),
];

/// Look up a model by name.
///
/// Matching ignores ASCII case and treats `_` as `-`, so `CRC_32C` finds
/// `crc-32c`.
#[must_use]
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
  let name = name.trim();
  MODELS.iter().find(|entry| names_match(entry.name, name))
}

fn names_match(canonical: &str, query: &str) -> bool {
  canonical.len() == query.len()
    && canonical.bytes().zip(query.bytes()).all(|(c, q)| {
      let q = if q == b'_' { b'-' } else { q.to_ascii_lowercase() };
      c == q
    })
}

/// Iterator over every catalogued model name.
pub fn names() -> impl Iterator<Item = &'static str> {
  MODELS.iter().map(|entry| entry.name)
}

// Names are unique.
const _: () = {
  let mut i = 0;
  while i < MODELS.len() {
    let mut j = i + 1;
    while j < MODELS.len() {
      let (a, b) = (MODELS[i].name.as_bytes(), MODELS[j].name.as_bytes());
      let mut same = a.len() == b.len();
      let mut k = 0;
      while same && k < a.len() {
        same = a[k] == b[k];
        k += 1;
      }
      assert!(!same, "duplicate catalogue name");
      j += 1;
    }
    i += 1;
  }
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn has_all_models() {
    assert_eq!(MODELS.len(), 27);
    assert_eq!(names().next(), Some("crc-5"));
    assert_eq!(names().last(), Some("crc-8-dvb-s2"));
  }

  #[test]
  fn find_is_lenient_about_case_and_separators() {
    assert_eq!(find("crc-32c").map(|e| e.check), Some(0xE306_9283));
    assert_eq!(find("CRC_32C").map(|e| e.check), Some(0xE306_9283));
    assert_eq!(find(" Kermit ").map(|e| e.params.polynomial), Some(0x1021));
    assert!(find("crc-32d").is_none());
    assert!(find("").is_none());
  }

  #[test]
  fn params_constants_match_catalogue() {
    let pairs = [
      ("crc-32", CrcParams::CRC32),
      ("crc-32c", CrcParams::CRC32C),
      ("crc-64-xz", CrcParams::CRC64_XZ),
      ("crc-16", CrcParams::CRC16_ARC),
      ("xmodem", CrcParams::CRC16_XMODEM),
      ("dallas-1-wire", CrcParams::CRC8_MAXIM),
      ("crc-24", CrcParams::CRC24_OPENPGP),
      ("crc-8-dvb-s2", CrcParams::CRC8_DVB_S2),
    ];
    for (name, params) in pairs {
      assert_eq!(find(name).map(|e| e.params), Some(params), "{name}");
    }
  }

  #[test]
  fn dvb_s2_frame_header() {
    let entry = find("CRC_8_DVB_S2").unwrap();
    assert_eq!(entry.check, 0xBC);
    let model = crate::CrcModel::new(entry.params).unwrap();
    for algorithm in crate::Algorithm::ALL {
      let engine = crate::Engine::new(model, algorithm);
      assert_eq!(crate::CrcEngine::checksum(&engine, &[0x45, 0xA2, 0xDF, 0xF1]), 0xF6, "{algorithm}");
    }
  }

  #[test]
  fn every_polynomial_is_odd() {
    assert!(MODELS.iter().all(|e| e.params.polynomial & 1 == 1));
  }
}

//! Output rendering.
//!
//! ```text
//! width            = 16
//! poly             = 0x8005
//! reflect_in       = true
//! xor_in           = 0x0000
//! reflect_out      = true
//! xor_out          = 0x0000
//! crc_mask         = 0xffff
//! msb_mask         = 0x8000
//! shift            = 0
//! 0xbb3d
//! ```
//!
//! Hex fields, the checksum included, are zero-padded to
//! [`CrcModel::hex_digits`] digits. Only the last line is printed without
//! `--verbose`.

use crcmodel::CrcModel;

/// The checksum line, without a trailing newline.
#[must_use]
pub fn checksum_line(model: &CrcModel, crc: u64) -> String {
  format!("0x{crc:0digits$x}", digits = model.hex_digits())
}

/// The verbose model dump, one `name = value` line per field.
#[must_use]
pub fn model_dump(model: &CrcModel) -> String {
  let digits = model.hex_digits();
  let lines: [(&str, Field); 9] = [
    ("width", Field::Dec(u64::from(model.width()))),
    ("poly", Field::Hex(model.polynomial())),
    ("reflect_in", Field::Bool(model.reflect_in())),
    ("xor_in", Field::Hex(model.xor_in())),
    ("reflect_out", Field::Bool(model.reflect_out())),
    ("xor_out", Field::Hex(model.xor_out())),
    ("crc_mask", Field::Hex(model.crc_mask())),
    ("msb_mask", Field::Hex(model.msb_mask())),
    ("shift", Field::Dec(u64::from(model.shift()))),
  ];
  lines
    .into_iter()
    .map(|(name, field)| match field {
      Field::Dec(v) => format!("{name:<16} = {v}\n"),
      Field::Hex(v) => format!("{name:<16} = 0x{v:0digits$x}\n"),
      Field::Bool(v) => format!("{name:<16} = {v}\n"),
    })
    .collect()
}

enum Field {
  Dec(u64),
  Hex(u64),
  Bool(bool),
}

/// Full stdout text for a successful run.
#[must_use]
pub fn render(model: &CrcModel, crc: u64, verbose: bool) -> String {
  let mut out = if verbose { model_dump(model) } else { String::new() };
  out.push_str(&checksum_line(model, crc));
  out.push('\n');
  out
}

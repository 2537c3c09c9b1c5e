//! Validated CRC configuration.
//!
//! A [`CrcModel`] is created once from [`CrcParams`] and is immutable after
//! that. Construction masks `polynomial`, `xor_in` and `xor_out` to the register
//! width and derives the three masks every engine needs, so no consumer can
//! observe an unmasked value.

use crate::{CrcParams, ModelError};

/// Largest supported register width.
pub const MAX_WIDTH: u8 = 64;

/// A validated, immutable CRC configuration.
///
/// # Derived fields
///
/// | Field | Value |
/// |-------|-------|
/// | `msb_mask` | `1 << (width - 1)` |
/// | `crc_mask` | all `width` bits set |
/// | `shift` | `8 - width` for sub-byte widths, else 0 |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcModel {
  width: u8,
  polynomial: u64,
  xor_in: u64,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u64,
  msb_mask: u64,
  crc_mask: u64,
  shift: u8,
}

impl CrcModel {
  /// Validate `params` and build a model.
  ///
  /// # Errors
  ///
  /// [`ModelError::Width`] when `width` is outside `1..=64`. Any polynomial is
  /// accepted here; see [`Algorithm::check`](crate::Algorithm::check) for the
  /// one strategy that needs the `x^0` term.
  ///
  /// # Examples
  ///
  /// ```
  /// use crcmodel::{CrcModel, CrcParams};
  ///
  /// let model = CrcModel::new(CrcParams::CRC7_MMC)?;
  /// assert_eq!(model.crc_mask(), 0x7F);
  /// assert_eq!(model.msb_mask(), 0x40);
  /// assert_eq!(model.shift(), 1);
  /// # Ok::<(), crcmodel::ModelError>(())
  /// ```
  pub const fn new(params: CrcParams) -> Result<Self, ModelError> {
    let width = params.width;
    if width == 0 || width > MAX_WIDTH {
      return Err(ModelError::Width(width));
    }

    let msb_mask = 1u64 << (width - 1);
    let crc_mask = (msb_mask - 1) | msb_mask;
    let shift = if width < 8 { 8 - width } else { 0 };

    Ok(Self {
      width,
      polynomial: params.polynomial & crc_mask,
      xor_in: params.xor_in & crc_mask,
      reflect_in: params.reflect_in,
      reflect_out: params.reflect_out,
      xor_out: params.xor_out & crc_mask,
      msb_mask,
      crc_mask,
      shift,
    })
  }

  /// Register width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Generator polynomial, masked to `width` bits.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u64 {
    self.polynomial
  }

  /// Initial register value (direct form), masked to `width` bits.
  #[inline]
  #[must_use]
  pub const fn xor_in(&self) -> u64 {
    self.xor_in
  }

  /// Whether input bytes are bit-reflected before folding.
  #[inline]
  #[must_use]
  pub const fn reflect_in(&self) -> bool {
    self.reflect_in
  }

  /// Whether the final register is bit-reflected before the output XOR.
  #[inline]
  #[must_use]
  pub const fn reflect_out(&self) -> bool {
    self.reflect_out
  }

  /// Output XOR, masked to `width` bits.
  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> u64 {
    self.xor_out
  }

  /// The register's top bit.
  #[inline]
  #[must_use]
  pub const fn msb_mask(&self) -> u64 {
    self.msb_mask
  }

  /// All `width` bits set.
  #[inline]
  #[must_use]
  pub const fn crc_mask(&self) -> u64 {
    self.crc_mask
  }

  /// Left shift that aligns a sub-byte register to the top of a byte.
  #[inline]
  #[must_use]
  pub const fn shift(&self) -> u8 {
    self.shift
  }

  /// Number of hex digits needed to print a checksum of this width.
  #[inline]
  #[must_use]
  pub const fn hex_digits(&self) -> usize {
    (self.width as usize + 3) / 4
  }

  /// Whether the width is a whole number of bytes.
  #[inline]
  #[must_use]
  pub const fn is_byte_aligned(&self) -> bool {
    self.width % 8 == 0
  }

  /// The (masked) parameters this model was built from.
  #[must_use]
  pub const fn params(&self) -> CrcParams {
    CrcParams {
      width: self.width,
      polynomial: self.polynomial,
      xor_in: self.xor_in,
      reflect_in: self.reflect_in,
      reflect_out: self.reflect_out,
      xor_out: self.xor_out,
    }
  }
}

impl TryFrom<CrcParams> for CrcModel {
  type Error = ModelError;

  fn try_from(params: CrcParams) -> Result<Self, Self::Error> {
    Self::new(params)
  }
}

// The two widths with edge-case masks.
const _: () = {
  let Ok(m) = CrcModel::new(CrcParams::CRC64_XZ) else { panic!() };
  assert!(m.crc_mask() == u64::MAX);
  assert!(m.msb_mask() == 1 << 63);
  let Ok(m) = CrcModel::new(CrcParams { width: 1, polynomial: 1, ..CrcParams::CRC7_MMC }) else { panic!() };
  assert!(m.crc_mask() == 1 && m.shift() == 7);
};

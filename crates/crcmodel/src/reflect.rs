//! Bit reflection.
//!
//! "Reflected" means bit-reversed within a fixed width. Reflection is used for
//! single input bytes (`n_bits = 8`) and for the full CRC register
//! (`n_bits = width`).

/// Reverse the order of the low `n_bits` bits of `value`.
///
/// Bits above `n_bits` are ignored and the result occupies exactly `n_bits`
/// bits. `n_bits` of 0 yields 0; values above 64 are clamped to 64.
///
/// # Examples
///
/// ```
/// use crcmodel::reflect;
///
/// assert_eq!(reflect(0b0000_0001, 8), 0b1000_0000);
/// assert_eq!(reflect(0b110, 3), 0b011);
/// assert_eq!(reflect(0xFF00, 4), 0);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u64, n_bits: u32) -> u64 {
  let n_bits = if n_bits > 64 { 64 } else { n_bits };
  let mut data = value;
  let mut ret = 0u64;
  let mut i = 0u32;
  while i < n_bits {
    ret = (ret << 1) | (data & 1);
    data >>= 1;
    i += 1;
  }
  ret
}

/// Reverse the bit order of a single byte.
#[inline]
#[must_use]
pub const fn reflect_byte(byte: u8) -> u8 {
  byte.reverse_bits()
}

// Catalogue polynomials used by the reflected-table fast path: reflect() must
// agree with the hardware bit reversal for full-width values.
const _: () = {
  assert!(reflect(0x04C1_1DB7, 32) == 0xEDB8_8320);
  assert!(reflect(0x42F0_E1EB_A9EA_3693, 64) == 0xC96C_5795_D787_0F42);
  assert!(reflect(0x8005, 16) == 0xA001);
};

//! CRC algorithm parameters.
//!
//! This module defines the raw parameters of a CRC variant following the
//! Rocksoft model used by the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//!
//! [`CrcParams`] is unvalidated input. Turn it into a [`CrcModel`](crate::CrcModel)
//! before computing anything; that step checks the width and
//! masks every value to the register width.

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC register (1..=64)
/// - `polynomial`: The generator polynomial (without the implicit high bit),
///   always in normal (MSB-first) form
/// - `xor_in`: Initial register value, in direct (non-augmented) form
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the final register before the output XOR
/// - `xor_out`: Value to XOR with the final CRC
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (CRC-32, CRC-32C) use
/// reflected input and output, which maps to LSB-first processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Width in bits.
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u64,
  /// Initial value XORed into the register.
  pub xor_in: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u64,
}

impl Default for CrcParams {
  /// All-zero parameters, like the unset configuration record of the
  /// self-test driver. Not a legal model on its own.
  fn default() -> Self {
    Self { width: 0, polynomial: 0, xor_in: 0, reflect_in: false, reflect_out: false, xor_out: 0 }
  }
}

impl CrcParams {
  /// CRC-32 (ISO 3309) - Ethernet, gzip, PNG, zip, SATA
  ///
  /// The most widely used CRC-32 variant.
  pub const CRC32: Self = Self {
    width: 32,
    polynomial: 0x04C1_1DB7,
    xor_in: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32C (Castagnoli) - iSCSI, SCTP, Btrfs, ext4
  pub const CRC32C: Self = Self {
    width: 32,
    polynomial: 0x1EDC_6F41,
    xor_in: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-64/XZ (ECMA-182) - XZ Utils, 7-Zip
  pub const CRC64_XZ: Self = Self {
    width: 64,
    polynomial: 0x42F0_E1EB_A9EA_3693,
    xor_in: u64::MAX,
    reflect_in: true,
    reflect_out: true,
    xor_out: u64::MAX,
  };

  /// CRC-16/ARC ("CRC-16", IBM) - legacy protocols, LHA
  pub const CRC16_ARC: Self =
    Self { width: 16, polynomial: 0x8005, xor_in: 0x0000, reflect_in: true, reflect_out: true, xor_out: 0x0000 };

  /// CRC-16/CCITT-FALSE - X.25 framing variants, Bluetooth, SD cards
  pub const CRC16_CCITT_FALSE: Self =
    Self { width: 16, polynomial: 0x1021, xor_in: 0xFFFF, reflect_in: false, reflect_out: false, xor_out: 0x0000 };

  /// CRC-16/XMODEM - XMODEM, ZMODEM, CRC-16/ACORN
  pub const CRC16_XMODEM: Self =
    Self { width: 16, polynomial: 0x1021, xor_in: 0x0000, reflect_in: false, reflect_out: false, xor_out: 0x0000 };

  /// CRC-8/MAXIM (Dallas 1-Wire) - iButton, sensor networks
  pub const CRC8_MAXIM: Self =
    Self { width: 8, polynomial: 0x31, xor_in: 0x00, reflect_in: true, reflect_out: true, xor_out: 0x00 };

  /// CRC-8/DVB-S2 - DVB-S2 baseband frame headers
  pub const CRC8_DVB_S2: Self =
    Self { width: 8, polynomial: 0xD5, xor_in: 0x00, reflect_in: false, reflect_out: false, xor_out: 0x00 };

  /// CRC-24/OpenPGP - RFC 4880 armor checksum
  pub const CRC24_OPENPGP: Self = Self {
    width: 24,
    polynomial: 0x86_4CFB,
    xor_in: 0xB7_04CE,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00_0000,
  };

  /// CRC-5/USB - USB token packets
  pub const CRC5_USB: Self =
    Self { width: 5, polynomial: 0x05, xor_in: 0x1F, reflect_in: true, reflect_out: true, xor_out: 0x1F };

  /// CRC-7/MMC - MultiMediaCard and SD command frames
  pub const CRC7_MMC: Self =
    Self { width: 7, polynomial: 0x09, xor_in: 0x00, reflect_in: false, reflect_out: false, xor_out: 0x00 };

  /// Returns these parameters with a different width, keeping everything else.
  #[must_use]
  pub const fn with_width(self, width: u8) -> Self {
    Self { width, ..self }
  }
}

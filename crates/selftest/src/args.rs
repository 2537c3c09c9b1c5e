//! Command-line arguments.
//!
//! Numeric and boolean model options are taken as raw strings and parsed
//! leniently by [`parse_int`] and [`parse_bool`]: malformed input degrades to
//! a best-effort partial value rather than an error. The check data options
//! are strict.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crcmodel::{Algorithm, CrcParams, catalog};

use crate::{Error, RunConfig};

/// Default check data.
pub const DEFAULT_CHECK_STRING: &str = "123456789";

/// Longest check string accepted; longer strings are truncated.
pub const MAX_CHECK_STRING_LEN: usize = 255;

/// Compute a CRC for an arbitrary model and verify it.
///
/// Prints `0x<checksum>` on success. Exits with 1 when a self-check fails and
/// with 2 on a configuration error.
#[derive(Debug, Parser)]
#[command(name = "crcmodel-selftest", version, about, long_about = None)]
pub struct Args {
  /// Start from a catalogued model (explicit options override its fields).
  #[arg(long, value_name = "NAME")]
  pub model: Option<String>,

  /// Register width in bits.
  #[arg(short, long, value_name = "BITS")]
  pub width: Option<String>,

  /// Generator polynomial, `0x` hex or decimal.
  #[arg(short, long, value_name = "POLY")]
  pub poly: Option<String>,

  /// Reflect input bytes. Bare `-n` means true.
  #[arg(short = 'n', long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
  pub reflect_in: Option<String>,

  /// Initial register value.
  #[arg(short = 'i', long, value_name = "VALUE")]
  pub xor_in: Option<String>,

  /// Reflect the final register. Bare `-u` means true.
  #[arg(short = 'u', long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
  pub reflect_out: Option<String>,

  /// Final XOR value.
  #[arg(short = 'o', long, value_name = "VALUE")]
  pub xor_out: Option<String>,

  /// Check data as text (truncated to 255 bytes).
  #[arg(short = 's', long, value_name = "TEXT", conflicts_with_all = ["check_hexstring", "check_file"])]
  pub check_string: Option<String>,

  /// Check data as hex digits.
  #[arg(long, value_name = "HEX", conflicts_with = "check_file")]
  pub check_hexstring: Option<String>,

  /// Check data read from a file.
  #[arg(long, value_name = "PATH")]
  pub check_file: Option<PathBuf>,

  /// Strategies to run; `all` cross-checks every one.
  #[arg(short, long, value_enum, default_value_t = AlgorithmArg::All)]
  pub algorithm: AlgorithmArg,

  /// Dump the model before the checksum.
  #[arg(short, long)]
  pub verbose: bool,
}

/// Strategy selection on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
  /// Augmented bit-by-bit.
  Bbb,
  /// Direct bit-by-bit.
  Bbf,
  /// Table-driven.
  Tbl,
  /// Every strategy, cross-checked.
  All,
  /// Whatever `CRCMODEL_ENGINE_FORCE` selects (table-driven by default).
  Auto,
}

impl AlgorithmArg {
  /// The strategies to run. Empty means "let the engine configuration decide".
  #[must_use]
  pub fn algorithms(self) -> Vec<Algorithm> {
    match self {
      Self::Bbb => vec![Algorithm::BitByBit],
      Self::Bbf => vec![Algorithm::BitByBitFast],
      Self::Tbl => vec![Algorithm::TableDriven],
      Self::All => Algorithm::ALL.to_vec(),
      Self::Auto => Vec::new(),
    }
  }
}

impl Args {
  /// Resolve the arguments into a run configuration.
  ///
  /// # Errors
  ///
  /// [`Error::Config`] for an unknown model name, an out-of-range width or
  /// malformed hex check data, and [`Error::Read`] when the check file cannot
  /// be read.
  pub fn into_run_config(self) -> Result<RunConfig, Error> {
    let mut params = match self.model.as_deref() {
      Some(name) => {
        catalog::find(name).map(|entry| entry.params).ok_or_else(|| {
          let known: Vec<&str> = catalog::names().collect();
          Error::Config(format!("unknown model '{name}' (known: {})", known.join(", ")))
        })?
      }
      None => CrcParams::default(),
    };

    if let Some(width) = self.width.as_deref() {
      let value = parse_int(width);
      params.width = u8::try_from(value).map_err(|_| Error::Config(format!("invalid width {value}")))?;
    }
    if let Some(poly) = self.poly.as_deref() {
      params.polynomial = parse_int(poly);
    }
    if let Some(flag) = self.reflect_in.as_deref() {
      params.reflect_in = parse_bool(flag);
    }
    if let Some(xor_in) = self.xor_in.as_deref() {
      params.xor_in = parse_int(xor_in);
    }
    if let Some(flag) = self.reflect_out.as_deref() {
      params.reflect_out = parse_bool(flag);
    }
    if let Some(xor_out) = self.xor_out.as_deref() {
      params.xor_out = parse_int(xor_out);
    }

    let data = if let Some(path) = self.check_file {
      std::fs::read(&path).map_err(|source| Error::Read { path, source })?
    } else if let Some(hex) = self.check_hexstring.as_deref() {
      parse_hex(hex)?
    } else {
      check_string_bytes(self.check_string.as_deref().unwrap_or(DEFAULT_CHECK_STRING))
    };

    Ok(RunConfig { params, data, algorithms: self.algorithm.algorithms(), verbose: self.verbose })
  }
}

/// Parse an integer leniently.
///
/// - `0x`/`0X` prefix: hex digits up to the first non-hex character
/// - leading decimal digit: decimal digits up to the first non-digit
/// - anything else: 0
///
/// Overflow wraps.
#[must_use]
pub fn parse_int(s: &str) -> u64 {
  let bytes = s.as_bytes();
  let (digits, radix) = match bytes {
    [b'0', b'x' | b'X', rest @ ..] => (rest, 16),
    [b'0'..=b'9', ..] => (bytes, 10),
    _ => return 0,
  };
  let mut value = 0u64;
  for &b in digits {
    let Some(d) = char::from(b).to_digit(radix) else { break };
    value = value.wrapping_mul(u64::from(radix)).wrapping_add(u64::from(d));
  }
  value
}

/// Parse a boolean leniently.
///
/// A leading digit means "the decimal number is nonzero"; a leading `t` or
/// `T` means true; anything else is false.
#[must_use]
pub fn parse_bool(s: &str) -> bool {
  match s.as_bytes().first() {
    Some(b'0'..=b'9') => s.bytes().take_while(u8::is_ascii_digit).any(|b| b != b'0'),
    Some(b't' | b'T') => true,
    _ => false,
  }
}

/// Decode strict hex check data (even length, hex digits only).
///
/// # Errors
///
/// [`Error::Config`] on odd length or a non-hex character.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, Error> {
  let s = s.trim();
  if s.len() % 2 != 0 {
    return Err(Error::Config(format!("check hexstring has odd length {}", s.len())));
  }
  s.as_bytes()
    .chunks_exact(2)
    .map(|pair| {
      let digit = |b: u8| char::from(b).to_digit(16);
      match (pair.first().copied().and_then(digit), pair.get(1).copied().and_then(digit)) {
        (Some(hi), Some(lo)) => Ok(((hi << 4) | lo) as u8),
        _ => Err(Error::Config(format!("invalid hex in check hexstring: '{}'", String::from_utf8_lossy(pair)))),
      }
    })
    .collect()
}

/// Check string bytes, truncated to [`MAX_CHECK_STRING_LEN`].
#[must_use]
pub fn check_string_bytes(s: &str) -> Vec<u8> {
  let bytes = s.as_bytes();
  bytes.get(..MAX_CHECK_STRING_LEN).unwrap_or(bytes).to_vec()
}

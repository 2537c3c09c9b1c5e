//! CRC engines.
//!
//! An engine computes a running checksum in three steps:
//!
//! ```text
//! init() -> register -> update(register, bytes)* -> register -> finalize(register) -> crc
//! ```
//!
//! The register between `init` and `finalize` is *pre-final*: its encoding is
//! private to the engine (augmented, direct, or reflected) and only meaningful
//! when handed back to the same engine. The value returned by `finalize` is the
//! checksum callers see. Feeding a final value back into `update` is a caller
//! error.
//!
//! # Strategies
//!
//! | Engine | Register | Per byte | Use |
//! |--------|----------|----------|-----|
//! | [`BitByBit`] | augmented, MSB-first | 8 shifts | Reference |
//! | [`BitByBitFast`] | direct, MSB-first | 8 shifts | Reference without the flush |
//! | [`TableDriven`] | direct, reflected when `reflect_in` | 1 lookup | Default |
//!
//! All three produce bit-identical checksums for every model they accept and
//! every input, under any chunking of the input across `update` calls. The
//! direct and table engines accept every [`CrcModel`]; [`BitByBit`] rejects a
//! polynomial without the `x^0` term combined with a nonzero `xor_in` (see
//! [`Algorithm::check`]).

use core::{fmt, str::FromStr};

use crate::{
  CrcModel,
  error::{ModelError, ParseAlgorithmError},
};

mod bitwise;
mod bitwise_fast;
mod table;

pub use bitwise::BitByBit;
pub use bitwise_fast::BitByBitFast;
pub use table::TableDriven;

/// Capability interface shared by every CRC strategy.
///
/// Implementations must satisfy two properties for every model and input:
///
/// - **Streaming equivalence**: any partition of the input across `update`
///   calls yields the same checksum as one call over the concatenation.
/// - **Zero syndrome**: for byte-aligned widths, feeding the un-finalized
///   checksum back through `update` leaves a zero register (see
///   [`verify`](crate::verify)).
pub trait CrcEngine {
  /// The model this engine computes.
  fn model(&self) -> &CrcModel;

  /// Which strategy this is.
  fn algorithm(&self) -> Algorithm;

  /// The register before any input.
  #[must_use]
  fn init(&self) -> u64;

  /// Fold `data` into the pre-final register `crc`.
  #[must_use]
  fn update(&self, crc: u64, data: &[u8]) -> u64;

  /// Turn a pre-final register into the checksum.
  #[must_use]
  fn finalize(&self, crc: u64) -> u64;

  /// One-shot checksum of `data`.
  #[inline]
  #[must_use]
  fn checksum(&self, data: &[u8]) -> u64 {
    self.finalize(self.update(self.init(), data))
  }
}

impl<E: CrcEngine + ?Sized> CrcEngine for &E {
  #[inline]
  fn model(&self) -> &CrcModel {
    (**self).model()
  }

  #[inline]
  fn algorithm(&self) -> Algorithm {
    (**self).algorithm()
  }

  #[inline]
  fn init(&self) -> u64 {
    (**self).init()
  }

  #[inline]
  fn update(&self, crc: u64, data: &[u8]) -> u64 {
    (**self).update(crc, data)
  }

  #[inline]
  fn finalize(&self, crc: u64) -> u64 {
    (**self).finalize(crc)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Strategy selection
// ─────────────────────────────────────────────────────────────────────────────

/// Engine strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
  /// Augmented bit-by-bit shift register.
  BitByBit,
  /// Direct bit-by-bit shift register.
  BitByBitFast,
  /// 256-entry lookup table.
  TableDriven,
}

impl Algorithm {
  /// Every strategy, reference first.
  pub const ALL: [Self; 3] = [Self::BitByBit, Self::BitByBitFast, Self::TableDriven];

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::BitByBit => "bit-by-bit",
      Self::BitByBitFast => "bit-by-bit-fast",
      Self::TableDriven => "table-driven",
    }
  }

  /// Whether this strategy computes `model` correctly.
  ///
  /// # Errors
  ///
  /// [`ModelError::EvenPolynomial`] for [`Algorithm::BitByBit`] when its
  /// augmented register has no seed for the model's `xor_in`.
  pub const fn check(self, model: &CrcModel) -> Result<(), ModelError> {
    match self {
      Self::BitByBit if !BitByBit::can_seed(model) => {
        Err(ModelError::EvenPolynomial { polynomial: model.polynomial(), xor_in: model.xor_in() })
      }
      _ => Ok(()),
    }
  }

  /// Short name used on the command line.
  #[must_use]
  pub const fn short_name(self) -> &'static str {
    match self {
      Self::BitByBit => "bbb",
      Self::BitByBitFast => "bbf",
      Self::TableDriven => "tbl",
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Algorithm {
  type Err = ParseAlgorithmError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    Self::ALL
      .into_iter()
      .find(|a| s.eq_ignore_ascii_case(a.as_str()) || s.eq_ignore_ascii_case(a.short_name()))
      .or_else(|| {
        if s.eq_ignore_ascii_case("table") || s.eq_ignore_ascii_case("table_driven") {
          Some(Self::TableDriven)
        } else if s.eq_ignore_ascii_case("bit_by_bit") || s.eq_ignore_ascii_case("reference") {
          Some(Self::BitByBit)
        } else if s.eq_ignore_ascii_case("bit_by_bit_fast") {
          Some(Self::BitByBitFast)
        } else {
          None
        }
      })
      .ok_or(ParseAlgorithmError)
  }
}

/// Runtime-selected engine.
///
/// Dispatches to one of the three strategies. This is what callers that pick a
/// strategy from configuration (or from `CRCMODEL_ENGINE_FORCE`) hold on to.
#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)] // The table is the point of the table variant.
pub enum Engine {
  /// See [`BitByBit`].
  BitByBit(BitByBit),
  /// See [`BitByBitFast`].
  BitByBitFast(BitByBitFast),
  /// See [`TableDriven`].
  TableDriven(TableDriven),
}

impl Engine {
  /// Build the engine for `algorithm`.
  ///
  /// The model is not checked against the strategy; use [`Engine::try_new`]
  /// when it may come from untrusted input.
  #[must_use]
  pub fn new(model: CrcModel, algorithm: Algorithm) -> Self {
    tracing::debug!(algorithm = %algorithm, width = model.width(), poly = model.polynomial(), "building crc engine");
    match algorithm {
      Algorithm::BitByBit => Self::BitByBit(BitByBit::new(model)),
      Algorithm::BitByBitFast => Self::BitByBitFast(BitByBitFast::new(model)),
      Algorithm::TableDriven => Self::TableDriven(TableDriven::new(model)),
    }
  }

  /// Build the engine for `algorithm` if it can compute `model`.
  ///
  /// # Errors
  ///
  /// Whatever [`Algorithm::check`] returns.
  pub fn try_new(model: CrcModel, algorithm: Algorithm) -> Result<Self, ModelError> {
    algorithm.check(&model)?;
    Ok(Self::new(model, algorithm))
  }

  /// Build the engine chosen by the runtime configuration.
  ///
  /// This is the table-driven engine unless `CRCMODEL_ENGINE_FORCE` names
  /// another strategy.
  #[must_use]
  pub fn auto(model: CrcModel) -> Self {
    Self::new(model, crate::config::get().effective_algorithm)
  }
}

impl CrcEngine for Engine {
  #[inline]
  fn model(&self) -> &CrcModel {
    match self {
      Self::BitByBit(e) => e.model(),
      Self::BitByBitFast(e) => e.model(),
      Self::TableDriven(e) => e.model(),
    }
  }

  #[inline]
  fn algorithm(&self) -> Algorithm {
    match self {
      Self::BitByBit(_) => Algorithm::BitByBit,
      Self::BitByBitFast(_) => Algorithm::BitByBitFast,
      Self::TableDriven(_) => Algorithm::TableDriven,
    }
  }

  #[inline]
  fn init(&self) -> u64 {
    match self {
      Self::BitByBit(e) => e.init(),
      Self::BitByBitFast(e) => e.init(),
      Self::TableDriven(e) => e.init(),
    }
  }

  #[inline]
  fn update(&self, crc: u64, data: &[u8]) -> u64 {
    match self {
      Self::BitByBit(e) => e.update(crc, data),
      Self::BitByBitFast(e) => e.update(crc, data),
      Self::TableDriven(e) => e.update(crc, data),
    }
  }

  #[inline]
  fn finalize(&self, crc: u64) -> u64 {
    match self {
      Self::BitByBit(e) => e.finalize(crc),
      Self::BitByBitFast(e) => e.finalize(crc),
      Self::TableDriven(e) => e.finalize(crc),
    }
  }
}

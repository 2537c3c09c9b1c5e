//! Engine selection configuration (defaults + overrides).
//!
//! Callers that do not care which strategy computes their checksum use
//! [`Engine::auto`](crate::Engine::auto), which resolves through this module.
//!
//! # Environment
//!
//! | Variable | Values |
//! |----------|--------|
//! | `CRCMODEL_ENGINE_FORCE` | `auto`, `bbb`/`bit-by-bit`/`reference`, `bbf`/`bit-by-bit-fast`, `tbl`/`table`/`table-driven` |
//!
//! The variable is read once per process and cached. Unrecognised values are
//! ignored (treated as `auto`).

use crate::Algorithm;

/// Forced engine selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EngineForce {
  /// Use the default strategy.
  #[default]
  Auto,
  /// Force the augmented bit-by-bit reference engine.
  BitByBit,
  /// Force the direct bit-by-bit engine.
  BitByBitFast,
  /// Force the table-driven engine.
  TableDriven,
}

impl EngineForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::BitByBit => "bit-by-bit",
      Self::BitByBitFast => "bit-by-bit-fast",
      Self::TableDriven => "table-driven",
    }
  }

  /// The strategy this force pins, if any.
  #[must_use]
  pub const fn algorithm(self) -> Option<Algorithm> {
    match self {
      Self::Auto => None,
      Self::BitByBit => Some(Algorithm::BitByBit),
      Self::BitByBitFast => Some(Algorithm::BitByBitFast),
      Self::TableDriven => Some(Algorithm::TableDriven),
    }
  }

  /// Parse a force value. Empty input and unknown names yield `None`.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    match value.parse::<Algorithm>().ok()? {
      Algorithm::BitByBit => Some(Self::BitByBit),
      Algorithm::BitByBitFast => Some(Self::BitByBitFast),
      Algorithm::TableDriven => Some(Self::TableDriven),
    }
  }
}

/// Strategy used when nothing is forced.
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::TableDriven;

/// Full engine selection configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
  /// Requested force mode (env).
  pub requested_force: EngineForce,
  /// Strategy [`Engine::auto`](crate::Engine::auto) builds.
  pub effective_algorithm: Algorithm,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: EngineForce,
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  let raw = std::env::var("CRCMODEL_ENGINE_FORCE").ok();
  let force = raw.as_deref().and_then(EngineForce::parse);
  if force.is_none()
    && let Some(raw) = raw.as_deref()
    && !raw.trim().is_empty()
  {
    tracing::warn!(value = raw, "ignoring unrecognised CRCMODEL_ENGINE_FORCE");
  }
  Overrides { force: force.unwrap_or_default() }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

#[inline]
#[must_use]
const fn resolve(force: EngineForce) -> EngineConfig {
  let effective_algorithm = match force.algorithm() {
    Some(algorithm) => algorithm,
    None => DEFAULT_ALGORITHM,
  };
  EngineConfig { requested_force: force, effective_algorithm }
}

/// Get the effective engine configuration.
#[must_use]
pub fn get() -> EngineConfig {
  resolve(overrides().force)
}

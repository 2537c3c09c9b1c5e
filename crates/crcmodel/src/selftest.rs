//! Self-test: checksum, verify, and cross-check.
//!
//! [`run`] drives one engine through the full protocol:
//!
//! 1. `init` → one bulk `update` → `finalize`, keeping the pre-final register
//! 2. zero-syndrome verification ([`verify`](crate::verify))
//! 3. bulk versus byte-at-a-time comparison ([`consistency`](crate::consistency))
//!
//! [`run_all`] does that for several strategies and additionally requires
//! them to agree with each other, which is the only check here that compares
//! two independent implementations.

use crate::{Algorithm, CrcEngine, CrcModel, Engine, SelfTestError, consistency, verify};

/// Outcome of a successful self-test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelfTestReport {
  /// Strategy that produced the checksum.
  pub algorithm: Algorithm,
  /// Final checksum.
  pub crc: u64,
  /// Register before `finalize`.
  pub pre_final: u64,
  /// Whether the syndrome check ran (false for widths that are not a
  /// multiple of 8).
  pub syndrome_checked: bool,
}

/// Run the self-test protocol for one engine over `data`.
///
/// # Errors
///
/// - [`SelfTestError::Verification`] on a nonzero syndrome
/// - [`SelfTestError::Consistency`] when bulk and byte-wise updates disagree
pub fn run<E: CrcEngine + ?Sized>(engine: &E, data: &[u8]) -> Result<SelfTestReport, SelfTestError> {
  let pre_final = engine.update(engine.init(), data);
  let crc = engine.finalize(pre_final);

  verify::verify(engine, pre_final, crc)?;
  consistency::check(engine, data, crc)?;

  let report = SelfTestReport {
    algorithm: engine.algorithm(),
    crc,
    pre_final,
    syndrome_checked: verify::is_applicable(engine.model()),
  };
  tracing::debug!(
    algorithm = %report.algorithm,
    crc = report.crc,
    syndrome_checked = report.syndrome_checked,
    "crc self-test passed"
  );
  Ok(report)
}

/// Run [`run`] for each of `algorithms` and require identical checksums.
///
/// Returns the report of the first strategy. An empty list runs the strategy
/// [`Engine::auto`] picks.
///
/// # Errors
///
/// Anything [`run`] returns, or [`SelfTestError::CrossCheck`] for the first
/// strategy whose checksum differs from the first one's.
pub fn run_all(model: CrcModel, data: &[u8], algorithms: &[Algorithm]) -> Result<SelfTestReport, SelfTestError> {
  let Some((&first, rest)) = algorithms.split_first() else {
    return run(&Engine::auto(model), data);
  };

  let reference = run(&Engine::new(model, first), data)?;
  for &other in rest {
    let report = run(&Engine::new(model, other), data)?;
    if report.crc != reference.crc {
      tracing::warn!(%first, first_crc = reference.crc, %other, other_crc = report.crc, "crc strategies disagree");
      return Err(SelfTestError::CrossCheck { first, first_crc: reference.crc, other, other_crc: report.crc });
    }
  }
  Ok(reference)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{CrcParams, catalog};

  /// An engine that computes the wrong thing consistently, plus one that
  /// breaks streaming.
  struct Broken {
    inner: Engine,
    skew_finalize: bool,
  }

  impl CrcEngine for Broken {
    fn model(&self) -> &CrcModel {
      self.inner.model()
    }

    fn algorithm(&self) -> Algorithm {
      self.inner.algorithm()
    }

    fn init(&self) -> u64 {
      self.inner.init()
    }

    fn update(&self, crc: u64, data: &[u8]) -> u64 {
      let crc = self.inner.update(crc, data);
      // Drops the bottom bit only for multi-byte updates.
      if self.skew_finalize || data.len() < 2 { crc } else { crc & !1 }
    }

    fn finalize(&self, crc: u64) -> u64 {
      let crc = self.inner.finalize(crc);
      if self.skew_finalize { crc ^ 1 } else { crc }
    }
  }

  #[test]
  fn every_catalogue_model_passes_every_strategy() {
    for entry in catalog::MODELS {
      let model = CrcModel::new(entry.params).unwrap();
      let report = run_all(model, catalog::CHECK_INPUT, &Algorithm::ALL).unwrap();
      assert_eq!(report.crc, entry.check, "{}", entry.name);
      assert_eq!(report.algorithm, Algorithm::BitByBit);
      assert_eq!(report.syndrome_checked, entry.params.width % 8 == 0, "{}", entry.name);
    }
  }

  #[test]
  fn crc32_report() {
    let model = CrcModel::new(CrcParams::CRC32).unwrap();
    let report = run(&Engine::new(model, Algorithm::BitByBitFast), b"123456789").unwrap();
    assert_eq!(
      report,
      SelfTestReport { algorithm: Algorithm::BitByBitFast, crc: 0xCBF4_3926, pre_final: 0x9B63_D02C, syndrome_checked: true }
    );
  }

  #[test]
  fn width_seven_skips_verification() {
    let model = CrcModel::new(CrcParams::CRC7_MMC).unwrap();
    let report = run_all(model, b"123456789", &Algorithm::ALL).unwrap();
    assert_eq!(report.crc, 0x75);
    assert!(!report.syndrome_checked);
  }

  #[test]
  fn skewed_finalize_fails_verification() {
    let model = CrcModel::new(CrcParams::CRC16_ARC).unwrap();
    let broken = Broken { inner: Engine::new(model, Algorithm::TableDriven), skew_finalize: true };
    assert!(matches!(run(&broken, b"123456789"), Err(SelfTestError::Verification { .. })));
  }

  #[test]
  fn broken_streaming_fails_consistency() {
    // The table register for CRC-16/ARC over "123456789" is odd, so the bulk
    // path loses a bit the byte-wise path keeps.
    let model = CrcModel::new(CrcParams::CRC16_ARC).unwrap();
    let broken = Broken { inner: Engine::new(model, Algorithm::TableDriven), skew_finalize: false };
    assert_eq!(
      run(&broken, b"123456789"),
      Err(SelfTestError::Consistency { bulk: 0xBB3C, bytewise: 0xBB3D })
    );
  }

  #[test]
  fn empty_algorithm_list_uses_auto() {
    let model = CrcModel::new(CrcParams::CRC32C).unwrap();
    let report = run_all(model, b"123456789", &[]).unwrap();
    assert_eq!(report.crc, 0xE306_9283);
  }

  #[test]
  fn empty_input() {
    let model = CrcModel::new(CrcParams::CRC32).unwrap();
    assert_eq!(run_all(model, b"", &Algorithm::ALL).map(|r| r.crc), Ok(0));
  }
}

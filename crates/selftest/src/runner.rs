//! One self-test run, from resolved configuration to output.

use std::io::Write;

use crcmodel::{Algorithm, CrcModel, CrcParams, SelfTestReport, selftest};

use crate::{Error, report};

/// Everything a run needs. Built from [`Args`](crate::Args) or by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
  /// Raw model parameters; validated by [`run`].
  pub params: CrcParams,
  /// Check data.
  pub data: Vec<u8>,
  /// Strategies to run and cross-check. Empty runs the configured default.
  pub algorithms: Vec<Algorithm>,
  /// Dump the model before the checksum line.
  pub verbose: bool,
}

impl RunConfig {
  /// A non-verbose run of every strategy over `data`.
  #[must_use]
  pub fn new(params: CrcParams, data: impl Into<Vec<u8>>) -> Self {
    Self { params, data: data.into(), algorithms: Algorithm::ALL.to_vec(), verbose: false }
  }
}

/// Validate the model, run the self-test, and write the report to `out`.
///
/// Nothing is written unless every check passes.
///
/// # Errors
///
/// - [`Error::Model`] when the parameters are not a legal CRC, or a requested
///   strategy cannot compute them
/// - [`Error::SelfTest`] when verification, consistency or the cross-check fails
/// - [`Error::Write`] when `out` fails
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<SelfTestReport, Error> {
  let model = CrcModel::new(config.params)?;
  if config.algorithms.is_empty() {
    crcmodel::config::get().effective_algorithm.check(&model)?;
  }
  for algorithm in &config.algorithms {
    algorithm.check(&model)?;
  }
  tracing::debug!(
    width = model.width(),
    poly = model.polynomial(),
    len = config.data.len(),
    algorithms = ?config.algorithms,
    "starting self-test"
  );

  let report = selftest::run_all(model, &config.data, &config.algorithms)?;
  if !report.syndrome_checked {
    tracing::debug!(width = model.width(), "width is not byte-aligned, syndrome check skipped");
  }

  out.write_all(report::render(&model, report.crc, config.verbose).as_bytes()).map_err(Error::Write)?;
  Ok(report)
}

#[cfg(test)]
mod tests {
  use crcmodel::{ModelError, SelfTestError};

  use super::*;

  fn run_to_string(config: &RunConfig) -> (Result<SelfTestReport, Error>, String) {
    let mut out = Vec::new();
    let result = run(config, &mut out);
    (result, String::from_utf8(out).unwrap())
  }

  #[test]
  fn crc32_prints_one_line() {
    let (result, out) = run_to_string(&RunConfig::new(CrcParams::CRC32, b"123456789".to_vec()));
    assert_eq!(result.unwrap().crc, 0xCBF4_3926);
    assert_eq!(out, "0xcbf43926\n");
  }

  #[test]
  fn crc16_arc() {
    let (result, out) = run_to_string(&RunConfig::new(CrcParams::CRC16_ARC, "123456789"));
    assert!(result.is_ok());
    assert_eq!(out, "0xbb3d\n");
  }

  #[test]
  fn unaligned_width_still_succeeds() {
    let (result, out) = run_to_string(&RunConfig::new(CrcParams::CRC7_MMC, "123456789"));
    assert!(!result.unwrap().syndrome_checked);
    assert_eq!(out, "0x75\n");
  }

  #[test]
  fn config_errors_print_nothing() {
    let (result, out) = run_to_string(&RunConfig::new(CrcParams::default(), "123456789"));
    assert!(matches!(result, Err(Error::Model(ModelError::Width(0)))));
    assert!(out.is_empty());

    let even = CrcParams { width: 16, polynomial: 0x8004, xor_in: 0xFFFF, ..CrcParams::default() };
    let (result, out) = run_to_string(&RunConfig::new(even, "123456789"));
    assert!(matches!(result, Err(Error::Model(ModelError::EvenPolynomial { polynomial: 0x8004, xor_in: 0xFFFF }))));
    assert!(out.is_empty());
  }

  #[test]
  fn even_polynomial_without_bit_by_bit() {
    let even = CrcParams { width: 16, polynomial: 0x8004, xor_in: 0xFFFF, ..CrcParams::default() };
    let mut config = RunConfig::new(even, "123456789");
    config.algorithms = vec![Algorithm::BitByBitFast, Algorithm::TableDriven];
    let (result, out) = run_to_string(&config);
    assert_eq!(result.unwrap().crc, 0x8ABC);
    assert_eq!(out, "0x8abc\n");

    // A zero seed works on every strategy.
    let (result, out) = run_to_string(&RunConfig::new(CrcParams { xor_in: 0, ..even }, "123456789"));
    assert!(result.is_ok());
    assert_eq!(out, "0x8830\n");
  }

  #[test]
  fn single_strategy() {
    let mut config = RunConfig::new(CrcParams::CRC64_XZ, "123456789");
    config.algorithms = vec![Algorithm::BitByBit];
    let (result, out) = run_to_string(&config);
    assert_eq!(result.unwrap().algorithm, Algorithm::BitByBit);
    assert_eq!(out, "0x995dc9bbdf1939fa\n");
  }

  #[test]
  fn verbose_prefixes_dump() {
    let mut config = RunConfig::new(CrcParams::CRC32, "123456789");
    config.verbose = true;
    let (_, out) = run_to_string(&config);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "width            = 32");
    assert_eq!(lines[1], "poly             = 0x04c11db7");
    assert_eq!(lines[8], "shift            = 0");
    assert_eq!(lines[9], "0xcbf43926");
  }

  #[test]
  fn self_test_errors_convert() {
    let err: Error = SelfTestError::Verification { syndrome: 3 }.into();
    assert_eq!(err.to_string(), "crc verification failed: syndrome 0x3 (expected 0)");
  }
}

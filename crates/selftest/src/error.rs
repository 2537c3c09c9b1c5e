//! Driver errors and their exit codes.

use std::{io, path::PathBuf};

use crcmodel::{ModelError, SelfTestError};

/// Exit code for a self-test defect.
pub const EXIT_DEFECT: u8 = 1;
/// Exit code for a configuration error.
pub const EXIT_CONFIG: u8 = 2;

/// Everything that can end a driver run without a checksum line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// An option value that cannot be used.
  #[error("{0}")]
  Config(String),
  /// The parameters do not describe a legal CRC.
  #[error(transparent)]
  Model(#[from] ModelError),
  /// A checksum was computed but failed a self-check.
  #[error(transparent)]
  SelfTest(#[from] SelfTestError),
  /// The check file could not be read.
  #[error("cannot read {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  /// Writing the report failed.
  #[error("cannot write output: {0}")]
  Write(#[source] io::Error),
}

impl Error {
  /// Process exit code for this error.
  ///
  /// Only self-test defects exit with 1. Everything that prevents the
  /// computation from starting exits with 2.
  #[must_use]
  pub const fn exit_code(&self) -> u8 {
    match self {
      Self::SelfTest(_) | Self::Write(_) => EXIT_DEFECT,
      Self::Config(_) | Self::Model(_) | Self::Read { .. } => EXIT_CONFIG,
    }
  }
}

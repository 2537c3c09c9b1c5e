//! Command-line self-test driver for `crcmodel`.
//!
//! Takes a CRC model from the command line (optionally starting from a
//! catalogued one), computes the checksum of the check data with every
//! requested strategy, runs the self-checks, and prints one line:
//!
//! ```text
//! $ crcmodel-selftest -w 32 -p 0x04c11db7 -n 1 -i 0xffffffff -u 1 -o 0xffffffff
//! 0xcbf43926
//! ```
//!
//! | Outcome | stdout | stderr | Exit |
//! |---------|--------|--------|------|
//! | Success | `0x<checksum>` (after the model dump with `-v`) | - | 0 |
//! | Self-test defect | - | `error: <message>` | 1 |
//! | Configuration error | - | `error: <message>` | 2 |
//!
//! There is no process-wide state: verbosity and check data travel in
//! [`RunConfig`].

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

mod args;
mod error;
pub mod report;
mod runner;

pub use args::{
  AlgorithmArg, Args, DEFAULT_CHECK_STRING, MAX_CHECK_STRING_LEN, check_string_bytes, parse_bool, parse_hex, parse_int,
};
pub use error::{EXIT_CONFIG, EXIT_DEFECT, Error};
pub use runner::{RunConfig, run};

/// Install the stderr `fmt` subscriber (`RUST_LOG`, default `warn`).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
  use tracing_subscriber::{EnvFilter, fmt};

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).try_init();
}

//! Self-test driver binary.
//!
//! Usage:
//!   cargo run -p selftest --bin crcmodel-selftest -- --model crc-32
//!   cargo run -p selftest --bin crcmodel-selftest -- -w 16 -p 0x8005 -n -u -v

use std::{io, process::ExitCode};

use clap::Parser;
use selftest::{Args, init_tracing};

fn main() -> ExitCode {
  // Usage errors exit with 2 from inside clap.
  let args = Args::parse();
  init_tracing();

  let result = args.into_run_config().and_then(|config| selftest::run(&config, &mut io::stdout().lock()));
  match result {
    Ok(_) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {err}");
      ExitCode::from(err.exit_code())
    }
  }
}

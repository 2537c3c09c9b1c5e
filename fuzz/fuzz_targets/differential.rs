//! Differential fuzzing across strategies.
//!
//! The augmented bit-by-bit engine is the reference. The direct and
//! table-driven engines must match it for every legal model, and the full
//! self-test must pass. Models the reference cannot seed (even polynomial,
//! nonzero `xor_in`) fall back to the direct engine as reference.

#![no_main]

use arbitrary::Arbitrary;
use crcmodel::{Algorithm, CrcEngine, CrcModel, CrcParams, Engine, selftest, verify};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  params: (u8, u64, u64, bool, bool, u64),
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let (width, polynomial, xor_in, reflect_in, reflect_out, xor_out) = input.params;
  let params = CrcParams { width, polynomial, xor_in, reflect_in, reflect_out, xor_out };

  // Illegal models must be rejected, never computed.
  let Ok(model) = CrcModel::new(params) else {
    return;
  };
  let data = &input.data;

  let strategies: Vec<Algorithm> = Algorithm::ALL.into_iter().filter(|a| a.check(&model).is_ok()).collect();
  assert!(strategies.len() >= 2, "direct strategies rejected {model:?}");
  let reference = Engine::new(model, strategies[0]).checksum(data);
  for algorithm in [Algorithm::BitByBitFast, Algorithm::TableDriven] {
    let engine = Engine::new(model, algorithm);
    let ours = engine.checksum(data);
    assert_eq!(
      ours, reference,
      "{algorithm} differential mismatch: ours={ours:#x}, reference={reference:#x}, model={model:?}, len={}",
      data.len()
    );

    let pre = engine.update(engine.init(), data);
    assert_eq!(verify::syndrome(&engine, pre, ours), 0, "{algorithm} nonzero syndrome, model={model:?}");
  }

  if let Err(err) = selftest::run_all(model, data, &strategies) {
    panic!("self-test failed for {model:?}: {err}");
  }
});

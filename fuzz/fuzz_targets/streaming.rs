//! Fuzz target for the streaming hasher.
//!
//! Tests that arbitrary sequences of update calls produce the one-shot result
//! for arbitrary models, on every strategy.

#![no_main]

use arbitrary::Arbitrary;
use crcmodel::{Algorithm, Checksum, Crc, CrcEngine, CrcModel, CrcParams, Engine, consistency};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  polynomial: u64,
  xor_in: u64,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u64,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let params = CrcParams {
    width: input.width % 64 + 1,
    polynomial: input.polynomial,
    xor_in: input.xor_in,
    reflect_in: input.reflect_in,
    reflect_out: input.reflect_out,
    xor_out: input.xor_out,
  };
  let Ok(model) = CrcModel::new(params) else {
    panic!("legal width was rejected: {params:?}");
  };

  for algorithm in Algorithm::ALL {
    if let Ok(engine) = Engine::try_new(model, algorithm) {
      test_streaming(&engine, &input.data, &input.chunk_sizes);
    } else {
      assert_eq!(algorithm, Algorithm::BitByBit);
      assert_eq!(model.polynomial() & 1, 0);
    }
  }
});

fn test_streaming(engine: &Engine, data: &[u8], chunk_sizes: &[usize]) {
  let expected = engine.checksum(data);

  let mut hasher = Crc::new(engine);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "{} streaming mismatch", engine.algorithm());
  assert_eq!(consistency::bytewise(engine, data), expected, "{} bytewise mismatch", engine.algorithm());
}

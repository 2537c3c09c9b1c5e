//! Property tests over random models.
//!
//! 1. **Reflection involution**: `reflect(reflect(x, n), n) == x` for `n`-bit `x`
//! 2. **Masking closure**: every model field and every register stays within
//!    `crc_mask`
//! 3. **Chunking equivalence**: any partition of the input across `update`
//!    calls equals one call, for every strategy
//!
//! Cross-strategy equality and the zero syndrome live in `tests/proptests.rs`.

#![cfg(not(miri))]

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use crate::{Algorithm, CrcEngine, CrcModel, CrcParams, Engine, reflect, reflect_byte};

fn any_params() -> impl Strategy<Value = CrcParams> {
  (1u8..=64, any::<u64>(), any::<u64>(), any::<bool>(), any::<bool>(), any::<u64>()).prop_map(
    |(width, polynomial, xor_in, reflect_in, reflect_out, xor_out)| CrcParams {
      width,
      polynomial: polynomial | 1,
      xor_in,
      reflect_in,
      reflect_out,
      xor_out,
    },
  )
}

fn any_algorithm() -> impl Strategy<Value = Algorithm> {
  prop::sample::select(Algorithm::ALL.to_vec())
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn reflect_is_an_involution(value in any::<u64>(), n_bits in 1u32..=64) {
    let mask = if n_bits == 64 { u64::MAX } else { (1u64 << n_bits) - 1 };
    let x = value & mask;
    prop_assert_eq!(reflect(reflect(x, n_bits), n_bits), x);
  }

  #[test]
  fn reflect_ignores_high_bits(value in any::<u64>(), n_bits in 1u32..64) {
    let mask = (1u64 << n_bits) - 1;
    prop_assert_eq!(reflect(value, n_bits), reflect(value & mask, n_bits));
    prop_assert!(reflect(value, n_bits) <= mask);
  }

  #[test]
  fn reflect_byte_matches_reflect(b in any::<u8>()) {
    prop_assert_eq!(u64::from(reflect_byte(b)), reflect(u64::from(b), 8));
  }

  #[test]
  fn model_fields_are_masked(params in any_params()) {
    let model = CrcModel::new(params).unwrap();
    let mask = model.crc_mask();
    prop_assert!(model.polynomial() <= mask);
    prop_assert!(model.xor_in() <= mask);
    prop_assert!(model.xor_out() <= mask);
    prop_assert_eq!(model.msb_mask(), 1u64 << (model.width() - 1));
    prop_assert_eq!(mask.count_ones(), u32::from(model.width()));
  }

  #[test]
  fn registers_are_masked(
    params in any_params(),
    algorithm in any_algorithm(),
    data in proptest::collection::vec(any::<u8>(), 0..64),
  ) {
    let engine = Engine::new(CrcModel::new(params).unwrap(), algorithm);
    let mask = engine.model().crc_mask();
    let mut crc = engine.init();
    prop_assert!(crc <= mask);
    for chunk in data.chunks(3) {
      crc = engine.update(crc, chunk);
      prop_assert!(crc <= mask, "register {:#x} escaped mask {:#x}", crc, mask);
    }
    prop_assert!(engine.finalize(crc) <= mask);
  }

  #[test]
  fn chunking_equivalence(
    params in any_params(),
    algorithm in any_algorithm(),
    data in proptest::collection::vec(any::<u8>(), 0..256),
    chunk_sizes in proptest::collection::vec(1usize..32, 1..16),
  ) {
    let engine = Engine::new(CrcModel::new(params).unwrap(), algorithm);
    let oneshot = engine.checksum(&data);

    let mut crc = engine.init();
    let mut rest = data.as_slice();
    let mut sizes = chunk_sizes.iter().cycle();
    while !rest.is_empty() {
      let size = sizes.next().copied().unwrap_or(1).min(rest.len());
      let (head, tail) = rest.split_at(size);
      crc = engine.update(crc, head);
      rest = tail;
    }

    prop_assert_eq!(engine.finalize(crc), oneshot);
  }

  #[test]
  fn deterministic(params in any_params(), data in proptest::collection::vec(any::<u8>(), 0..64)) {
    let model = CrcModel::new(params).unwrap();
    let runs: Vec<u64> = (0..2).map(|_| Engine::new(model, Algorithm::TableDriven).checksum(&data)).collect();
    prop_assert_eq!(runs[0], runs[1]);
  }
}

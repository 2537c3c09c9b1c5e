use crcmodel::{
  Algorithm, Checksum, Crc, CrcEngine, CrcModel, CrcParams, Engine, SelfTestError, catalog, consistency, reflect,
  selftest, verify,
};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

fn mask(width: u8) -> u64 {
  if width >= 64 { u64::MAX } else { (1u64 << width) - 1 }
}

/// LSB-first reference for fully reflected models.
fn reflected_bitwise(params: &CrcParams, data: &[u8]) -> u64 {
  let mask = mask(params.width);
  let poly = reflect(params.polynomial & mask, u32::from(params.width));
  let mut crc = reflect(params.xor_in & mask, u32::from(params.width));
  for &b in data {
    crc ^= u64::from(b);
    for _ in 0..8 {
      let m = 0u64.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (poly & m);
    }
  }
  (crc ^ params.xor_out) & mask
}

/// MSB-first reference for unreflected models with `width >= 8`.
fn normal_bitwise(params: &CrcParams, data: &[u8]) -> u64 {
  let mask = mask(params.width);
  let top = 1u64 << (params.width - 1);
  let shift = u32::from(params.width) - 8;
  let mut crc = params.xor_in & mask;
  for &b in data {
    crc ^= u64::from(b) << shift;
    for _ in 0..8 {
      crc = (if crc & top != 0 { (crc << 1) ^ params.polynomial } else { crc << 1 }) & mask;
    }
  }
  (crc ^ params.xor_out) & mask
}

#[test]
fn catalogue_check_values_on_every_engine() {
  for entry in catalog::MODELS {
    let model = CrcModel::new(entry.params).unwrap();
    for algorithm in Algorithm::ALL {
      let engine = Engine::new(model, algorithm);
      assert_eq!(engine.checksum(catalog::CHECK_INPUT), entry.check, "{} {algorithm}", entry.name);
    }
  }
}

#[test]
fn engines_match_independent_references() {
  let lengths = [0usize, 1, 2, 3, 7, 8, 15, 16, 63, 64, 255, 256, 1024];
  let seeds = [0u64, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

  for entry in catalog::MODELS.iter().filter(|e| e.params.width >= 8) {
    let p = &entry.params;
    let reference: Option<fn(&CrcParams, &[u8]) -> u64> = match (p.reflect_in, p.reflect_out) {
      (true, true) => Some(reflected_bitwise),
      (false, false) => Some(normal_bitwise),
      _ => None,
    };
    let Some(reference) = reference else { continue };

    let model = CrcModel::new(*p).unwrap();
    let engines = Algorithm::ALL.map(|a| Engine::new(model, a));
    for &len in &lengths {
      for &seed in &seeds {
        let data = gen_bytes(len, seed ^ len as u64);
        let expected = reference(p, &data);
        for engine in &engines {
          assert_eq!(engine.checksum(&data), expected, "{} {} len={len}", entry.name, engine.algorithm());
        }
      }
    }
  }
}

#[test]
fn streaming_splits_match_oneshot() {
  let data = gen_bytes(1024, 7);
  for entry in catalog::MODELS {
    let model = CrcModel::new(entry.params).unwrap();
    for algorithm in Algorithm::ALL {
      let engine = Engine::new(model, algorithm);
      let oneshot = engine.checksum(&data);
      for split in [0usize, 1, 3, 511, 1023, 1024] {
        let (a, b) = data.split_at(split);
        let mut h = Crc::new(&engine);
        h.update(a);
        h.update(b);
        assert_eq!(h.finalize(), oneshot, "{} {algorithm} split={split}", entry.name);
      }
      assert_eq!(consistency::bytewise(&engine, &data), oneshot, "{} {algorithm}", entry.name);
    }
  }
}

#[test]
fn zero_syndrome_for_byte_aligned_catalogue_models() {
  let data = gen_bytes(300, 42);
  for entry in catalog::MODELS.iter().filter(|e| e.params.width % 8 == 0) {
    let model = CrcModel::new(entry.params).unwrap();
    for algorithm in Algorithm::ALL {
      let engine = Engine::new(model, algorithm);
      let pre = engine.update(engine.init(), &data);
      let crc = engine.finalize(pre);
      assert_eq!(verify::syndrome(&engine, pre, crc), 0, "{} {algorithm}", entry.name);
    }
  }
}

#[test]
fn any_single_bit_corruption_is_detected() {
  let model = CrcModel::new(CrcParams::CRC32).unwrap();
  for algorithm in Algorithm::ALL {
    let engine = Engine::new(model, algorithm);
    let pre = engine.update(engine.init(), b"123456789");
    let crc = engine.finalize(pre);
    for bit in 0..32 {
      assert!(
        matches!(verify::verify(&engine, pre, crc ^ (1 << bit)), Err(SelfTestError::Verification { .. })),
        "{algorithm} bit {bit}"
      );
    }
  }
}

#[test]
fn canonical_scenarios() {
  let crc32 = CrcModel::new(CrcParams::CRC32).unwrap();
  assert_eq!(selftest::run_all(crc32, b"123456789", &Algorithm::ALL).unwrap().crc, 0xCBF4_3926);

  let arc = CrcModel::new(CrcParams::CRC16_ARC).unwrap();
  assert_eq!(selftest::run_all(arc, b"123456789", &Algorithm::ALL).unwrap().crc, 0xBB3D);

  // Width 7: verification is skipped, not failed.
  let w7 = CrcModel::new(CrcParams { width: 7, polynomial: 0x45, ..CrcParams::default() }).unwrap();
  let report = selftest::run_all(w7, b"123456789", &Algorithm::ALL).unwrap();
  assert!(!report.syndrome_checked);
}

#[test]
fn all_widths_agree_across_engines() {
  let data = gen_bytes(97, 3);
  for width in 1..=64u8 {
    for (reflect_in, reflect_out) in [(false, false), (true, true), (true, false), (false, true)] {
      let params = CrcParams {
        width,
        polynomial: 0x42F0_E1EB_A9EA_3693,
        xor_in: 0x0123_4567_89AB_CDEF,
        reflect_in,
        reflect_out,
        xor_out: 0xFEDC_BA98_7654_3210,
      };
      let model = CrcModel::new(params).unwrap();
      let crcs = Algorithm::ALL.map(|a| Engine::new(model, a).checksum(&data));
      assert!(crcs.iter().all(|&c| c == crcs[0]), "width={width} in={reflect_in} out={reflect_out}: {crcs:x?}");
    }
  }
}

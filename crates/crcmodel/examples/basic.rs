//! Basic usage: named models, custom models, streaming, and the self-test.
//!
//! Run with: `cargo run --example basic -p crcmodel`

use crcmodel::{Algorithm, Checksum, Crc, CrcEngine, CrcModel, CrcParams, Engine, catalog, selftest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  println!("=== crcmodel Basic Examples ===\n");

  catalogue_examples()?;
  custom_model_example()?;
  streaming_example()?;
  selftest_example()?;
  Ok(())
}

/// Every catalogued model over the check string.
fn catalogue_examples() -> Result<(), Box<dyn std::error::Error>> {
  println!("--- Catalogue ---\n");

  for entry in catalog::MODELS {
    let model = CrcModel::new(entry.params)?;
    let crc = Engine::auto(model).checksum(catalog::CHECK_INPUT);
    let digits = model.hex_digits();
    println!("{:<16} 0x{crc:0digits$x}", entry.name);
    assert_eq!(crc, entry.check);
  }
  println!();
  Ok(())
}

/// Any legal parameter set works, not just named ones.
fn custom_model_example() -> Result<(), Box<dyn std::error::Error>> {
  println!("--- Custom Model ---\n");

  // CRC-16/RIELLO
  let params = CrcParams { width: 16, polynomial: 0x1021, xor_in: 0xB2AA, reflect_in: true, reflect_out: true, xor_out: 0 };
  let model = CrcModel::new(params)?;
  for algorithm in Algorithm::ALL {
    let crc = Engine::new(model, algorithm).checksum(b"123456789");
    println!("{algorithm:<16} 0x{crc:04x}");
    assert_eq!(crc, 0x63D0);
  }

  // Without the x^0 term only the direct strategies can seed a nonzero xor_in.
  let even = CrcModel::new(CrcParams { polynomial: 0x8004, ..params })?;
  for algorithm in Algorithm::ALL {
    match Engine::try_new(even, algorithm) {
      Ok(engine) => println!("{algorithm:<16} 0x{:04x}", engine.checksum(b"123456789")),
      Err(err) => println!("{algorithm:<16} rejected: {err}"),
    }
  }
  println!();
  Ok(())
}

/// Streaming through the `Checksum` trait.
fn streaming_example() -> Result<(), Box<dyn std::error::Error>> {
  println!("--- Streaming ---\n");

  let mut hasher = Crc::new(Engine::auto(CrcModel::new(CrcParams::CRC32)?));
  hasher.update(b"1234");
  println!("after \"1234\":      0x{:08x}", hasher.finalize());
  hasher.update(b"56789");
  println!("after \"123456789\": 0x{:08x}\n", hasher.finalize());
  assert_eq!(hasher.finalize(), 0xCBF4_3926);
  Ok(())
}

/// The full protocol: zero syndrome, bulk vs byte-wise, cross-strategy.
fn selftest_example() -> Result<(), Box<dyn std::error::Error>> {
  println!("--- Self-Test ---\n");

  let model = CrcModel::new(CrcParams::CRC64_XZ)?;
  let report = selftest::run_all(model, b"123456789", &Algorithm::ALL)?;
  println!("{report:#x?}");
  Ok(())
}

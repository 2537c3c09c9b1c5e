//! Parameterized CRC engines with self-verification.
//!
//! This crate computes any CRC described by the Rocksoft parameter model
//! (width, polynomial, initial value, input/output reflection, output XOR)
//! rather than one fixed standard. Three interchangeable strategies produce
//! bit-identical results, and a self-test protocol checks them against each
//! other and against the algebra of the code.
//!
//! | Piece | Module |
//! |-------|--------|
//! | Parameters and validation | [`CrcParams`], [`CrcModel`] |
//! | Engines | [`BitByBit`], [`BitByBitFast`], [`TableDriven`], [`Engine`] |
//! | Streaming | [`Crc`] (implements [`traits::Checksum`]) |
//! | Zero-syndrome check | [`verify`] |
//! | Bulk vs byte-wise check | [`consistency`] |
//! | Full protocol | [`selftest`] |
//! | Known models | [`catalog`] |
//!
//! # Example
//!
//! ```rust
//! use crcmodel::{Algorithm, CrcModel, CrcParams, selftest};
//!
//! let model = CrcModel::new(CrcParams::CRC32)?;
//! let report = selftest::run_all(model, b"123456789", &Algorithm::ALL)?;
//! assert_eq!(report.crc, 0xCBF4_3926);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Without the `std` feature the
//! `CRCMODEL_ENGINE_FORCE` override is not read and
//! [`Engine::auto`] always picks the table-driven engine.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod catalog;
pub mod config;
pub mod consistency;
mod engine;
mod error;
mod hasher;
mod model;
mod params;
mod reflect;
pub mod selftest;
pub mod verify;

#[cfg(test)]
mod proptests;

pub use engine::{Algorithm, BitByBit, BitByBitFast, CrcEngine, Engine, TableDriven};
pub use error::{ModelError, ParseAlgorithmError, SelfTestError};
pub use hasher::Crc;
pub use model::{CrcModel, MAX_WIDTH};
pub use params::CrcParams;
pub use reflect::{reflect, reflect_byte};
pub use selftest::SelfTestReport;
// Re-export the streaming trait for convenience
pub use traits::Checksum;

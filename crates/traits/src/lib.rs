//! Core traits for the crcmodel crates.
//!
//! This crate provides the streaming interface that checksum hashers conform
//! to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Streaming non-cryptographic checksums | `crcmodel::Crc<E>` |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;

pub use checksum::Checksum;

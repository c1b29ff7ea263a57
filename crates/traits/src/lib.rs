//! Core traits for the bcrc CRC engines.
//!
//! This crate provides the interface every CRC engine conforms to, plus the
//! error type shared by engine construction and the handle layer. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`CrcEngine`] | Stateful CRC register: reset, feed bytes, read checksum |
//! | [`CrcError`] | Construction and lifecycle failures |
//! | [`io::CrcReader`] / [`io::CrcWriter`] | Checksum bytes passing through `std::io` (requires `std`) |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod engine;
pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use engine::CrcEngine;
pub use error::CrcError;

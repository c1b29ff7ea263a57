//! Parameterized and table-driven CRC engines behind one interface.
//!
//! Any CRC of width 8, 16, 24 or 32 bits can be described by a
//! [`CrcParameters`] value and computed either bit by bit ([`GenericCrc`]) or
//! a byte at a time through a 256-entry lookup table ([`TableCrc`]). Both
//! produce identical checksums and both implement [`CrcEngine`], so callers
//! can hold either as a [`BoxedEngine`].
//!
//! # Standard Algorithms
//!
//! | [`StandardAlgorithm`] | Width | Poly | Init | XorOut | Reflected | Check |
//! |-----------------------|-------|------|------|--------|-----------|-------|
//! | `Crc16`  | 16 | 0x8005 | 0 | 0 | yes | 0xBB3D |
//! | `Ccitt`  | 16 | 0x1021 | 0xFFFF | 0 | no | 0x29B1 |
//! | `Xmodem` | 16 | 0x8408 | 0 | 0 | yes | 0x0C73 |
//! | `Crc32`  | 32 | 0x04C11DB7 | 0xFFFFFFFF | 0xFFFFFFFF | yes | 0xCBF43926 |
//!
//! # Example
//!
//! ```rust
//! use bcrc::{CrcEngine, CrcParameters, StandardAlgorithm, create_generic, create_standard};
//!
//! // Catalogue algorithm (table engine by default)
//! let mut crc = create_standard(StandardAlgorithm::Crc32);
//! crc.process_bytes(b"1234");
//! crc.process_bytes(b"56789");
//! assert_eq!(crc.checksum(), 0xCBF4_3926);
//!
//! // The same algorithm described by hand (bitwise engine)
//! let params = CrcParameters::new(32, 0x04C1_1DB7)
//!   .with_initial(0xFFFF_FFFF)
//!   .with_xor_out(0xFFFF_FFFF)
//!   .reflected(true);
//! let mut generic = create_generic(params)?;
//! assert_eq!(generic.compute(b"123456789"), 0xCBF4_3926);
//! # Ok::<(), bcrc::CrcError>(())
//! ```
//!
//! # Configuration
//!
//! `BCRC_FORCE=reference` makes [`create_standard`] hand out bitwise engines
//! instead of table engines. See [`config`].
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc`). Disable the `std`
//! feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! bcrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod catalog;
pub mod config;
mod dispatch;
mod generic;
mod handle;
mod introspect;
mod params;
mod reflect;
mod table;

pub use catalog::StandardAlgorithm;
pub use config::{EngineConfig, EngineForce};
pub use dispatch::{
  BoxedEngine, create_generic, create_standard, create_standard_by_name, create_standard_with, create_table,
};
pub use generic::{GenericCrc, GenericCrc8, GenericCrc16, GenericCrc24, GenericCrc32, bitwise_checksum};
pub use handle::{CrcHandle, select_range};
pub use introspect::{EngineKind, selected_backend};
pub use params::{CrcParameters, SUPPORTED_WIDTHS, is_supported_width, width_mask};
pub use reflect::{reflect, reflect_byte};
pub use table::{LookupTable, TABLE_LEN, TableCrc};
#[cfg(feature = "std")]
pub use traits::io;
pub use traits::{CrcEngine, CrcError};

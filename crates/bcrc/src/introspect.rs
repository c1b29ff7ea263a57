//! Engine introspection.
//!
//! Reports which engine backs a handle or a catalogue algorithm, without
//! touching the per-byte path.
//!
//! # Examples
//!
//! ```
//! use bcrc::selected_backend;
//!
//! // "table/byte" unless BCRC_FORCE selects the reference engine.
//! println!("catalogue backend: {}", selected_backend());
//! ```

use core::fmt;

use crate::config::{self, EngineForce};

/// Which engine implementation computes a checksum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineKind {
  /// Bit-at-a-time engine ([`GenericCrc`](crate::GenericCrc)).
  Generic,
  /// Byte-at-a-time lookup engine ([`TableCrc`](crate::TableCrc)).
  Table,
}

impl EngineKind {
  /// Stable backend name, e.g. for logs and diagnostics.
  #[inline]
  #[must_use]
  pub const fn backend_name(self) -> &'static str {
    match self {
      Self::Generic => "generic/bitwise",
      Self::Table => "table/byte",
    }
  }

  /// Engine the selector picks for a resolved force mode.
  #[inline]
  #[must_use]
  pub(crate) const fn for_force(force: EngineForce) -> Self {
    match force {
      EngineForce::Reference => Self::Generic,
      EngineForce::Auto | EngineForce::Table => Self::Table,
    }
  }
}

impl fmt::Display for EngineKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.backend_name())
  }
}

/// Backend name [`create_standard`](crate::create_standard) uses for catalogue algorithms.
#[inline]
#[must_use]
pub fn selected_backend() -> &'static str {
  EngineKind::for_force(config::get().effective_force).backend_name()
}

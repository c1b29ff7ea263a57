//! Error types for CRC engine construction and use.
//!
//! All failures are terminal for the call that raised them; nothing is
//! retried internally. Parameter values wider than the register are not
//! errors: they are truncated to the configured width.

use core::fmt;

/// Failure raised by engine construction or by a released handle.
///
/// # Examples
///
/// ```
/// use traits::CrcError;
///
/// fn check_width(width: u32) -> Result<(), CrcError> {
///   match width {
///     8 | 16 | 24 | 32 => Ok(()),
///     other => Err(CrcError::UnsupportedWidth(other)),
///   }
/// }
///
/// assert!(check_width(32).is_ok());
/// assert_eq!(check_width(12), Err(CrcError::UnsupportedWidth(12)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// The requested register width is not one of 8, 16, 24 or 32 bits.
  UnsupportedWidth(u32),
  /// The handle's engine has already been released.
  DestroyedHandle,
  /// Allocating an engine or its lookup table failed.
  OutOfMemory,
  /// No standard algorithm has the requested name.
  UnknownAlgorithm,
}

impl CrcError {
  /// Short, stable identifier for logs and host bindings.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> &'static str {
    match self {
      Self::UnsupportedWidth(_) => "unsupported_width",
      Self::DestroyedHandle => "destroyed_handle",
      Self::OutOfMemory => "out_of_memory",
      Self::UnknownAlgorithm => "unknown_algorithm",
    }
  }
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedWidth(width) => write!(f, "unsupported crc bit width: {width}"),
      Self::DestroyedHandle => f.write_str("crc state has been destroyed"),
      Self::OutOfMemory => f.write_str("out of memory"),
      Self::UnknownAlgorithm => f.write_str("unknown crc algorithm"),
    }
  }
}

impl core::error::Error for CrcError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_messages() {
    assert_eq!(CrcError::UnsupportedWidth(12).to_string(), "unsupported crc bit width: 12");
    assert_eq!(CrcError::DestroyedHandle.to_string(), "crc state has been destroyed");
    assert_eq!(CrcError::OutOfMemory.to_string(), "out of memory");
    assert_eq!(CrcError::UnknownAlgorithm.to_string(), "unknown crc algorithm");
  }

  #[test]
  fn debug_impl() {
    let dbg = format!("{:?}", CrcError::UnsupportedWidth(7));
    assert_eq!(dbg, "UnsupportedWidth(7)");
  }

  #[test]
  fn kinds_are_distinct() {
    let kinds = [
      CrcError::UnsupportedWidth(0).kind(),
      CrcError::DestroyedHandle.kind(),
      CrcError::OutOfMemory.kind(),
      CrcError::UnknownAlgorithm.kind(),
    ];
    for (i, a) in kinds.iter().enumerate() {
      for b in kinds.iter().skip(i + 1) {
        assert_ne!(a, b);
      }
    }
  }

  #[test]
  fn width_is_part_of_equality() {
    assert_eq!(CrcError::UnsupportedWidth(12), CrcError::UnsupportedWidth(12));
    assert_ne!(CrcError::UnsupportedWidth(12), CrcError::UnsupportedWidth(40));
  }

  #[test]
  fn result_err_path() {
    fn destroyed() -> Result<u32, CrcError> {
      Err(CrcError::DestroyedHandle)
    }
    let err = destroyed().expect_err("destroyed must return CrcError");
    assert_eq!(err, CrcError::DestroyedHandle);
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<CrcError>();
    assert_sync::<CrcError>();
    assert_error::<CrcError>();
  }

  #[test]
  fn error_has_no_source() {
    use core::error::Error;

    assert!(CrcError::OutOfMemory.source().is_none());
  }
}

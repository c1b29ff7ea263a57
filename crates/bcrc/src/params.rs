//! CRC algorithm parameters.
//!
//! This module defines the parameter model for CRC algorithms following the
//! conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//!
//! | Catalogue | Field |
//! |-----------|-------|
//! | Width     | `width` |
//! | Poly      | `polynomial` |
//! | Init      | `initial` |
//! | XorOut    | `xor_out` |
//! | RefIn     | `reflect_input` |
//! | RefOut    | `reflect_output` |

use traits::CrcError;

/// Register widths an engine can be built for.
pub const SUPPORTED_WIDTHS: [u32; 4] = [8, 16, 24, 32];

/// Returns `true` if `width` is one of [`SUPPORTED_WIDTHS`].
#[inline]
#[must_use]
pub const fn is_supported_width(width: u32) -> bool {
  matches!(width, 8 | 16 | 24 | 32)
}

/// All-ones mask covering the low `width` bits (saturating at 32).
#[inline]
#[must_use]
pub const fn width_mask(width: u32) -> u32 {
  if width >= 32 { u32::MAX } else { (1u32 << width) - 1 }
}

/// CRC algorithm parameters.
///
/// `polynomial`, `initial` and `xor_out` are carried as `u64` so catalogue
/// notations that spell out the implicit top bit (`0x1_04C1_1DB7`) are
/// accepted. Every engine masks them to `width` bits before use; nothing is
/// rejected for being too wide.
///
/// # Reflection
///
/// With `reflect_input` each input byte is bit-reversed before it enters the
/// register. With `reflect_output` the register is bit-reversed (within
/// `width` bits) before `xor_out` is applied.
///
/// # Example
///
/// ```
/// use bcrc::CrcParameters;
///
/// let crc32 = CrcParameters::new(32, 0x04C1_1DB7)
///   .with_initial(0xFFFF_FFFF)
///   .with_xor_out(0xFFFF_FFFF)
///   .reflected(true);
/// assert_eq!(crc32.masked_polynomial(), 0x04C1_1DB7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParameters {
  /// Register width in bits.
  pub width: u32,
  /// Generator polynomial without the implicit high bit.
  pub polynomial: u64,
  /// Register value before any input is processed.
  pub initial: u64,
  /// Value XORed into the reported checksum.
  pub xor_out: u64,
  /// Reverse each input byte before processing.
  pub reflect_input: bool,
  /// Reverse the register before the final XOR.
  pub reflect_output: bool,
}

impl CrcParameters {
  /// Parameters with zero `initial`/`xor_out` and no reflection.
  #[inline]
  #[must_use]
  pub const fn new(width: u32, polynomial: u64) -> Self {
    Self {
      width,
      polynomial,
      initial: 0,
      xor_out: 0,
      reflect_input: false,
      reflect_output: false,
    }
  }

  /// Set the register value before any input (`Init`).
  #[inline]
  #[must_use]
  pub const fn with_initial(mut self, initial: u64) -> Self {
    self.initial = initial;
    self
  }

  /// Set the value XORed into the final register (`XorOut`).
  #[inline]
  #[must_use]
  pub const fn with_xor_out(mut self, xor_out: u64) -> Self {
    self.xor_out = xor_out;
    self
  }

  /// Reflect each input byte before it enters the register (`RefIn`).
  #[inline]
  #[must_use]
  pub const fn with_reflect_input(mut self, reflect_input: bool) -> Self {
    self.reflect_input = reflect_input;
    self
  }

  /// Reflect the final register before `XorOut` is applied (`RefOut`).
  #[inline]
  #[must_use]
  pub const fn with_reflect_output(mut self, reflect_output: bool) -> Self {
    self.reflect_output = reflect_output;
    self
  }

  /// Set both reflection flags at once (the common RefIn = RefOut case).
  #[inline]
  #[must_use]
  pub const fn reflected(self, reflect: bool) -> Self {
    self.with_reflect_input(reflect).with_reflect_output(reflect)
  }

  /// Mask covering the register width.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u32 {
    width_mask(self.width)
  }

  /// Polynomial truncated to `width` bits.
  #[inline]
  #[must_use]
  pub const fn masked_polynomial(&self) -> u32 {
    (self.polynomial & self.mask() as u64) as u32
  }

  /// Initial value truncated to `width` bits.
  #[inline]
  #[must_use]
  pub const fn masked_initial(&self) -> u32 {
    (self.initial & self.mask() as u64) as u32
  }

  /// Output XOR truncated to `width` bits.
  #[inline]
  #[must_use]
  pub const fn masked_xor_out(&self) -> u32 {
    (self.xor_out & self.mask() as u64) as u32
  }

  /// The same parameters with every value truncated to `width` bits.
  #[inline]
  #[must_use]
  pub const fn normalized(&self) -> Self {
    Self {
      width: self.width,
      polynomial: self.masked_polynomial() as u64,
      initial: self.masked_initial() as u64,
      xor_out: self.masked_xor_out() as u64,
      reflect_input: self.reflect_input,
      reflect_output: self.reflect_output,
    }
  }

  /// Check that an engine can be built for these parameters.
  #[inline]
  pub const fn validate(&self) -> Result<(), CrcError> {
    if is_supported_width(self.width) {
      Ok(())
    } else {
      Err(CrcError::UnsupportedWidth(self.width))
    }
  }
}

//! Runtime-parameterized bitwise CRC engine.
//!
//! This is the "source of truth" for CRC computation: every byte is folded
//! into the top of the register and then shifted out one bit at a time, which
//! mirrors the polynomial-division definition directly. The table engine is
//! built from (and tested against) the same recurrence.
//!
//! # CRC Model
//!
//! The register is kept in normal (MSB-first) form for every configuration:
//!
//! ```text
//! reset:    reg = initial & mask
//! per byte: b   = reflect_input ? reverse8(b) : b
//!           reg ^= b << (width - 8)
//!           8 times: reg = (reg & top) ? (reg << 1) ^ poly : reg << 1
//!           reg &= mask
//! checksum: (reflect_output ? reverse_w(reg) : reg) ^ xor_out, masked
//! ```
//!
//! The width is a const parameter, so one concrete type exists per supported
//! width and all shifts and masks fold to constants.

use traits::{CrcEngine, CrcError};

use crate::{
  params::{CrcParameters, width_mask},
  reflect::reflect,
};

/// Fold one byte into a normal-form register and shift it through eight
/// iterations of the bit-serial recurrence.
///
/// `width` must be at least 8.
#[inline]
#[must_use]
pub(crate) const fn fold_byte(register: u32, byte: u8, polynomial: u32, width: u32) -> u32 {
  let mask = width_mask(width);
  let top = 1u32 << (width - 1);
  let mut reg = register ^ ((byte as u32) << (width - 8));
  let mut bit = 0;
  while bit < 8 {
    reg = if reg & top != 0 { (reg << 1) ^ polynomial } else { reg << 1 };
    reg &= mask;
    bit += 1;
  }
  reg
}

/// Bitwise CRC of `data` in one shot, for parameters already validated.
#[must_use]
pub(crate) const fn bitwise_checksum_unchecked(params: &CrcParameters, data: &[u8]) -> u32 {
  let width = params.width;
  let poly = params.masked_polynomial();
  let mut reg = params.masked_initial();
  let mut rest = data;
  while let [byte, tail @ ..] = rest {
    let b = if params.reflect_input { byte.reverse_bits() } else { *byte };
    reg = fold_byte(reg, b, poly, width);
    rest = tail;
  }
  let out = if params.reflect_output { reflect(reg, width) } else { reg };
  (out ^ params.masked_xor_out()) & params.mask()
}

/// Bitwise CRC of `data` in one shot, usable in `const` contexts.
///
/// # Errors
///
/// [`CrcError::UnsupportedWidth`] if `params.width` is not 8, 16, 24 or 32.
///
/// # Example
///
/// ```
/// use bcrc::{CrcError, CrcParameters, bitwise_checksum};
///
/// const ARC: CrcParameters = CrcParameters::new(16, 0x8005).reflected(true);
/// assert_eq!(bitwise_checksum(&ARC, b"123456789"), Ok(0xBB3D));
/// assert_eq!(
///   bitwise_checksum(&CrcParameters::new(4, 0x3), b"x"),
///   Err(CrcError::UnsupportedWidth(4))
/// );
/// ```
pub const fn bitwise_checksum(params: &CrcParameters, data: &[u8]) -> Result<u32, CrcError> {
  match params.validate() {
    Ok(()) => Ok(bitwise_checksum_unchecked(params, data)),
    Err(err) => Err(err),
  }
}

/// Bitwise CRC engine for a `BITS`-wide register.
///
/// # Example
///
/// ```
/// use bcrc::{CrcEngine, CrcParameters, GenericCrc};
///
/// let params = CrcParameters::new(16, 0x1021).with_initial(0xFFFF);
/// let mut crc = GenericCrc::<16>::new(params);
/// crc.process_bytes(b"123456789");
/// assert_eq!(crc.checksum(), 0x29B1);
/// ```
#[derive(Clone, Debug)]
pub struct GenericCrc<const BITS: u32> {
  params: CrcParameters,
  polynomial: u32,
  initial: u32,
  xor_out: u32,
  register: u32,
}

impl<const BITS: u32> GenericCrc<BITS> {
  const MASK: u32 = width_mask(BITS);

  /// Build an engine from `params`, using `BITS` as the register width.
  ///
  /// `params.width` is normalised to `BITS`; polynomial, initial value and
  /// final XOR are truncated to `BITS` bits. Instantiating with a width
  /// outside 8/16/24/32 fails to compile.
  #[must_use]
  pub const fn new(params: CrcParameters) -> Self {
    const {
      assert!(BITS == 8 || BITS == 16 || BITS == 24 || BITS == 32, "unsupported crc bit width");
    }
    let params = CrcParameters { width: BITS, ..params }.normalized();
    let initial = params.masked_initial();
    Self {
      params,
      polynomial: params.masked_polynomial(),
      initial,
      xor_out: params.masked_xor_out(),
      register: initial,
    }
  }

  /// The (normalised) parameters this engine was built with.
  #[inline]
  #[must_use]
  pub const fn parameters(&self) -> &CrcParameters {
    &self.params
  }

  /// The raw register (normal form, before output reflection and XOR).
  #[inline]
  #[must_use]
  pub const fn register(&self) -> u32 {
    self.register
  }

  #[inline]
  pub fn reset(&mut self) {
    self.register = self.initial;
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    let poly = self.polynomial;
    let mut reg = self.register;
    if self.params.reflect_input {
      for &b in data {
        reg = fold_byte(reg, b.reverse_bits(), poly, BITS);
      }
    } else {
      for &b in data {
        reg = fold_byte(reg, b, poly, BITS);
      }
    }
    self.register = reg;
  }

  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u32 {
    let out = if self.params.reflect_output {
      reflect(self.register, BITS)
    } else {
      self.register
    };
    (out ^ self.xor_out) & Self::MASK
  }
}

impl<const BITS: u32> CrcEngine for GenericCrc<BITS> {
  #[inline]
  fn reset(&mut self) {
    GenericCrc::reset(self);
  }

  #[inline]
  fn process_bytes(&mut self, data: &[u8]) {
    self.update(data);
  }

  #[inline]
  fn checksum(&self) -> u32 {
    self.finalize()
  }
}

#[cfg(feature = "std")]
impl<const BITS: u32> std::io::Write for GenericCrc<BITS> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

pub type GenericCrc8 = GenericCrc<8>;
pub type GenericCrc16 = GenericCrc<16>;
pub type GenericCrc24 = GenericCrc<24>;
pub type GenericCrc32 = GenericCrc<32>;

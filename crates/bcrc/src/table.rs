//! Table-driven CRC engine.
//!
//! One 256-entry lookup replaces the eight shift/XOR iterations of the
//! bitwise engine. Tables are derived from the bitwise recurrence itself, so
//! both engines agree bit-for-bit on every input.
//!
//! # Register Forms
//!
//! | `reflect_input` | Register | Per-byte step |
//! |-----------------|----------|---------------|
//! | false | normal (MSB-first) | `reg = (reg << 8) ^ T[(reg >> (w - 8)) ^ b]` |
//! | true  | reflected (LSB-first) | `reg = (reg >> 8) ^ T[(reg ^ b) & 0xFF]` |
//!
//! A reflected register starts from `reverse_w(initial)` and already *is* the
//! reflected output, so at checksum time it is only reversed again when
//! `reflect_output` differs from `reflect_input`.

// SAFETY: Every table index in this module is either a loop counter bounded
// by 256 or a value masked with `0xFF`, and the tables hold exactly 256
// entries. Clippy cannot see through the mask, but bounds are guaranteed.
#![allow(clippy::indexing_slicing)]

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use traits::{CrcEngine, CrcError};

use crate::{
  catalog::StandardAlgorithm,
  generic::fold_byte,
  params::CrcParameters,
  reflect::reflect,
};

/// Number of entries in a byte-indexed lookup table.
pub const TABLE_LEN: usize = 256;

/// Compute one lookup-table entry for `params`, whose width must already be
/// validated.
///
/// For normal input this is the bitwise recurrence run on `index` placed in
/// the top byte of an empty register. For reflected input it is the same
/// recurrence on the reflected index, with the result reflected back, which
/// is exactly the LSB-first table.
#[inline]
#[must_use]
pub(crate) const fn table_entry(params: &CrcParameters, index: u8) -> u32 {
  let width = params.width;
  let poly = params.masked_polynomial();
  if params.reflect_input {
    reflect(fold_byte(0, index.reverse_bits(), poly, width), width)
  } else {
    fold_byte(0, index, poly, width)
  }
}

/// A 256-entry CRC lookup table, 64-byte (cache line) aligned.
#[repr(align(64))]
pub struct LookupTable {
  entries: [u32; TABLE_LEN],
}

impl LookupTable {
  /// Build the table for `params` at compile time or run time.
  ///
  /// # Errors
  ///
  /// [`CrcError::UnsupportedWidth`] if `params.width` is not 8, 16, 24 or 32.
  pub const fn new(params: &CrcParameters) -> Result<Self, CrcError> {
    match params.validate() {
      Ok(()) => Ok(Self::build(params)),
      Err(err) => Err(err),
    }
  }

  /// Build the table for already validated `params`.
  #[must_use]
  pub(crate) const fn build(params: &CrcParameters) -> Self {
    let mut entries = [0u32; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
      entries[i] = table_entry(params, i as u8);
      i += 1;
    }
    Self { entries }
  }

  /// Entry for byte value `index`.
  #[inline]
  #[must_use]
  pub const fn get(&self, index: u8) -> u32 {
    self.entries[index as usize]
  }

  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u32; TABLE_LEN] {
    &self.entries
  }
}

impl fmt::Debug for LookupTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LookupTable")
      .field("entry_1", &format_args!("{:#x}", self.entries[1]))
      .field("entry_128", &format_args!("{:#x}", self.entries[128]))
      .finish_non_exhaustive()
  }
}

/// Where a table engine's lookup table lives.
#[derive(Clone)]
enum Table {
  /// Compile-time table shared by every engine of a standard algorithm.
  Static(&'static LookupTable),
  /// Table built at run time for custom parameters; owned by one engine.
  Heap(Box<[u32; TABLE_LEN]>),
}

impl Table {
  #[inline]
  fn entries(&self) -> &[u32; TABLE_LEN] {
    match self {
      Self::Static(table) => table.entries(),
      Self::Heap(entries) => entries,
    }
  }

  /// Allocate and fill a table, reporting allocation failure instead of aborting.
  fn try_heap(params: &CrcParameters) -> Result<Self, CrcError> {
    let mut entries = Vec::new();
    entries.try_reserve_exact(TABLE_LEN).map_err(|_| CrcError::OutOfMemory)?;
    for index in 0..=u8::MAX {
      entries.push(table_entry(params, index));
    }
    // Exactly TABLE_LEN entries were pushed above, so the length check in
    // `try_from` always succeeds and the error arm is unreachable.
    match Box::<[u32; TABLE_LEN]>::try_from(entries.into_boxed_slice()) {
      Ok(entries) => Ok(Self::Heap(entries)),
      Err(_) => Err(CrcError::OutOfMemory),
    }
  }
}

impl fmt::Debug for Table {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Static(_) => f.write_str("Static"),
      Self::Heap(_) => f.write_str("Heap"),
    }
  }
}

/// Table-driven CRC engine.
///
/// Standard algorithms use a `static` table evaluated at compile time; custom
/// parameters get a table built once per engine.
///
/// # Example
///
/// ```
/// use bcrc::{CrcEngine, StandardAlgorithm, TableCrc};
///
/// let mut crc = TableCrc::standard(StandardAlgorithm::Crc16);
/// crc.process_bytes(b"123456789");
/// assert_eq!(crc.checksum(), 0xBB3D);
/// ```
#[derive(Clone, Debug)]
pub struct TableCrc {
  params: CrcParameters,
  table: Table,
  /// `width - 8`, the shift that brings the register's top byte down.
  top_shift: u32,
  mask: u32,
  /// Initial register in the engine's internal form.
  initial: u32,
  xor_out: u32,
  /// Reverse the register at checksum time (`reflect_input != reflect_output`).
  reflect_back: bool,
  register: u32,
}

impl TableCrc {
  /// Engine for a standard algorithm, backed by its shared static table.
  #[must_use]
  pub fn standard(algorithm: StandardAlgorithm) -> Self {
    Self::with_table(algorithm.parameters(), Table::Static(algorithm.table()))
  }

  /// Engine for arbitrary parameters, building its own table.
  ///
  /// # Errors
  ///
  /// - [`CrcError::UnsupportedWidth`] if `params.width` is not 8, 16, 24 or 32
  /// - [`CrcError::OutOfMemory`] if the table cannot be allocated
  pub fn from_parameters(params: CrcParameters) -> Result<Self, CrcError> {
    params.validate()?;
    let params = params.normalized();
    let table = Table::try_heap(&params)?;
    Ok(Self::with_table(params, table))
  }

  fn with_table(params: CrcParameters, table: Table) -> Self {
    let params = params.normalized();
    let initial = if params.reflect_input {
      reflect(params.masked_initial(), params.width)
    } else {
      params.masked_initial()
    };
    Self {
      params,
      table,
      top_shift: params.width - 8,
      mask: params.mask(),
      initial,
      xor_out: params.masked_xor_out(),
      reflect_back: params.reflect_input != params.reflect_output,
      register: initial,
    }
  }

  /// The (normalised) parameters this engine was built with.
  #[inline]
  #[must_use]
  pub const fn parameters(&self) -> &CrcParameters {
    &self.params
  }

  /// Whether the lookup table is the shared static one of a standard algorithm.
  #[inline]
  #[must_use]
  pub fn uses_static_table(&self) -> bool {
    matches!(self.table, Table::Static(_))
  }

  #[inline]
  pub fn reset(&mut self) {
    self.register = self.initial;
  }

  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    let table = self.table.entries();
    let mut reg = self.register;
    if self.params.reflect_input {
      for &b in data {
        reg = (reg >> 8) ^ table[((reg ^ b as u32) & 0xFF) as usize];
      }
    } else {
      let shift = self.top_shift;
      let mask = self.mask;
      for &b in data {
        reg = ((reg << 8) & mask) ^ table[(((reg >> shift) ^ b as u32) & 0xFF) as usize];
      }
    }
    self.register = reg;
  }

  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u32 {
    let out = if self.reflect_back {
      reflect(self.register, self.params.width)
    } else {
      self.register
    };
    (out ^ self.xor_out) & self.mask
  }
}

impl CrcEngine for TableCrc {
  #[inline]
  fn reset(&mut self) {
    TableCrc::reset(self);
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
impl std::io::Write for TableCrc {
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

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generic::bitwise_checksum;

  const CHECK_INPUT: &[u8] = b"123456789";

  #[test]
  fn well_known_entries() {
    let crc32 = LookupTable::build(&StandardAlgorithm::Crc32.parameters());
    assert_eq!(crc32.get(0), 0);
    assert_eq!(crc32.get(1), 0x7707_3096);
    assert_eq!(crc32.get(128), 0xEDB8_8320);
    assert_eq!(crc32.get(255), 0x2D02_EF8D);

    let arc = LookupTable::build(&StandardAlgorithm::Crc16.parameters());
    assert_eq!(arc.get(1), 0xC0C1);
    assert_eq!(arc.get(128), 0xA001);

    let ccitt = LookupTable::build(&StandardAlgorithm::Ccitt.parameters());
    assert_eq!(ccitt.get(1), 0x1021);
    assert_eq!(ccitt.get(255), 0x1EF0);
  }

  #[test]
  fn entries_fit_width() {
    let p = CrcParameters::new(24, 0x86_4CFB);
    let t = LookupTable::build(&p);
    assert!(t.entries().iter().all(|&e| e <= 0xFF_FFFF));

    let p = CrcParameters::new(8, 0x07).reflected(true);
    let t = LookupTable::build(&p);
    assert!(t.entries().iter().all(|&e| e <= 0xFF));
  }

  #[test]
  fn standard_check_values() {
    for alg in StandardAlgorithm::ALL {
      let mut crc = TableCrc::standard(alg);
      crc.update(CHECK_INPUT);
      assert_eq!(crc.finalize(), alg.check(), "{}", alg.name());
      assert!(crc.uses_static_table());
    }
  }

  #[test]
  fn custom_tables_match_bitwise() {
    let data: [u8; 513] = core::array::from_fn(|i| (i as u8).wrapping_mul(29) ^ 0x5C);
    let cases = [
      CrcParameters::new(8, 0x07),
      CrcParameters::new(8, 0x31).reflected(true),
      CrcParameters::new(16, 0x1021).with_initial(0x1D0F),
      CrcParameters::new(16, 0x3D65).with_xor_out(0xFFFF).reflected(true),
      CrcParameters::new(24, 0x86_4CFB).with_initial(0xB7_04CE),
      CrcParameters::new(24, 0x5D_6DCB).with_initial(0xFE_DCBA).reflected(true),
      CrcParameters::new(32, 0x1EDC_6F41).with_initial(!0).with_xor_out(!0).reflected(true),
      CrcParameters::new(32, 0x04C1_1DB7).with_initial(!0).with_xor_out(!0),
      CrcParameters::new(32, 0x04C1_1DB7).with_initial(!0).with_reflect_input(true),
      CrcParameters::new(16, 0x8005).with_initial(0x1234).with_reflect_output(true),
    ];
    for p in cases {
      let mut crc = TableCrc::from_parameters(p).unwrap();
      assert!(!crc.uses_static_table());
      for len in [0usize, 1, 2, 7, 64, 513] {
        crc.reset();
        crc.update(&data[..len]);
        assert_eq!(Ok(crc.finalize()), bitwise_checksum(&p, &data[..len]), "{p:?} len={len}");
      }
    }
  }

  #[test]
  fn from_parameters_rejects_width() {
    let err = TableCrc::from_parameters(CrcParameters::new(12, 0x80F)).unwrap_err();
    assert_eq!(err, CrcError::UnsupportedWidth(12));
  }

  #[test]
  fn from_parameters_truncates() {
    let wide = CrcParameters::new(16, 0xF_8005).with_initial(0x1_0000).reflected(true);
    let mut crc = TableCrc::from_parameters(wide).unwrap();
    assert_eq!(crc.parameters().polynomial, 0x8005);
    assert_eq!(crc.parameters().initial, 0);
    crc.update(CHECK_INPUT);
    assert_eq!(crc.finalize(), 0xBB3D);
  }

  #[test]
  fn reset_and_repeatable_read() {
    let mut crc = TableCrc::standard(StandardAlgorithm::Ccitt);
    assert_eq!(crc.finalize(), 0xFFFF);
    crc.update(b"garbage");
    let a = crc.finalize();
    assert_eq!(crc.finalize(), a);
    crc.reset();
    assert_eq!(crc.finalize(), 0xFFFF);
  }

  #[test]
  fn clone_is_independent() {
    let mut a = TableCrc::from_parameters(CrcParameters::new(8, 0x07)).unwrap();
    a.update(b"1234");
    let mut b = a.clone();
    a.update(b"56789");
    b.update(b"56789");
    assert_eq!(a.finalize(), b.finalize());
    assert_eq!(a.finalize(), 0xF4);
  }

  #[test]
  fn debug_is_compact() {
    let s = alloc::format!("{:?}", TableCrc::standard(StandardAlgorithm::Crc32));
    assert!(s.contains("Static"));
    assert!(s.len() < 400);
  }

  #[test]
  fn lookup_table_rejects_unsupported_widths() {
    for width in [0u32, 4, 7, 12, 40, u32::MAX] {
      let p = CrcParameters::new(width, 0x3).reflected(true);
      assert_eq!(LookupTable::new(&p).err(), Some(CrcError::UnsupportedWidth(width)));
      assert_eq!(TableCrc::from_parameters(p).err(), Some(CrcError::UnsupportedWidth(width)));
    }
    let p = StandardAlgorithm::Crc32.parameters();
    assert_eq!(LookupTable::new(&p).unwrap().entries(), LookupTable::build(&p).entries());
  }

  #[test]
  fn heap_table_matches_static_table() {
    for alg in StandardAlgorithm::ALL {
      let heap = Table::try_heap(&alg.parameters()).unwrap();
      assert!(matches!(heap, Table::Heap(_)));
      assert_eq!(heap.entries(), alg.table().entries(), "{}", alg.name());
    }
  }
}

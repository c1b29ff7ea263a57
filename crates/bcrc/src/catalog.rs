//! The standard algorithm catalogue.
//!
//! | Name | Width | Poly | Init | XorOut | RefIn | RefOut | Check |
//! |------|-------|------|------|--------|-------|--------|-------|
//! | `crc16`  | 16 | 0x8005 | 0x0000 | 0x0000 | yes | yes | 0xBB3D |
//! | `ccitt`  | 16 | 0x1021 | 0xFFFF | 0x0000 | no  | no  | 0x29B1 |
//! | `xmodem` | 16 | 0x8408 | 0x0000 | 0x0000 | yes | yes | 0x0C73 |
//! | `crc32`  | 32 | 0x04C11DB7 | 0xFFFFFFFF | 0xFFFFFFFF | yes | yes | 0xCBF43926 |
//!
//! "Check" is the checksum of the ASCII string `123456789`.
//!
//! `xmodem` here is the reflected 0x8408 parameter set that the classic
//! Boost.CRC `crc_xmodem_type` uses, not the catalogue's CRC-16/XMODEM
//! (0x1021, unreflected, check 0x31C3). Build that one with
//! [`create_generic`](crate::create_generic) if needed.

use core::{fmt, str::FromStr};

use traits::CrcError;

use crate::{generic::bitwise_checksum_unchecked, params::CrcParameters, table::LookupTable};

/// One of the four built-in CRC algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardAlgorithm {
  /// CRC-16 (ARC / IBM): Modbus, USB, SDLC.
  Crc16,
  /// CRC-CCITT (CCITT-FALSE): X.25 framing, Bluetooth, SD.
  Ccitt,
  /// XMODEM as parameterized by Boost.CRC.
  Xmodem,
  /// CRC-32 (ISO-HDLC): Ethernet, gzip, zip, PNG.
  Crc32,
}

const CRC16: CrcParameters = CrcParameters::new(16, 0x8005).reflected(true);
const CCITT: CrcParameters = CrcParameters::new(16, 0x1021).with_initial(0xFFFF);
const XMODEM: CrcParameters = CrcParameters::new(16, 0x8408).reflected(true);
const CRC32: CrcParameters = CrcParameters::new(32, 0x04C1_1DB7)
  .with_initial(0xFFFF_FFFF)
  .with_xor_out(0xFFFF_FFFF)
  .reflected(true);

static CRC16_TABLE: LookupTable = LookupTable::build(&CRC16);
static CCITT_TABLE: LookupTable = LookupTable::build(&CCITT);
static XMODEM_TABLE: LookupTable = LookupTable::build(&XMODEM);
static CRC32_TABLE: LookupTable = LookupTable::build(&CRC32);

impl StandardAlgorithm {
  /// Every catalogue entry, in declaration order.
  pub const ALL: [Self; 4] = [Self::Crc16, Self::Ccitt, Self::Xmodem, Self::Crc32];

  /// Lower-case catalogue name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Crc16 => "crc16",
      Self::Ccitt => "ccitt",
      Self::Xmodem => "xmodem",
      Self::Crc32 => "crc32",
    }
  }

  #[inline]
  #[must_use]
  pub const fn parameters(self) -> CrcParameters {
    match self {
      Self::Crc16 => CRC16,
      Self::Ccitt => CCITT,
      Self::Xmodem => XMODEM,
      Self::Crc32 => CRC32,
    }
  }

  /// Checksum of `b"123456789"`.
  #[inline]
  #[must_use]
  pub const fn check(self) -> u32 {
    match self {
      Self::Crc16 => 0xBB3D,
      Self::Ccitt => 0x29B1,
      Self::Xmodem => 0x0C73,
      Self::Crc32 => 0xCBF4_3926,
    }
  }

  /// The shared, compile-time lookup table.
  #[inline]
  #[must_use]
  pub fn table(self) -> &'static LookupTable {
    match self {
      Self::Crc16 => &CRC16_TABLE,
      Self::Ccitt => &CCITT_TABLE,
      Self::Xmodem => &XMODEM_TABLE,
      Self::Crc32 => &CRC32_TABLE,
    }
  }

  /// Look up a catalogue entry by name, ignoring ASCII case.
  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|alg| alg.name().eq_ignore_ascii_case(name.trim()))
  }
}

impl FromStr for StandardAlgorithm {
  type Err = CrcError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_name(s).ok_or(CrcError::UnknownAlgorithm)
  }
}

impl fmt::Display for StandardAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

const CHECK_INPUT: &[u8] = b"123456789";

const _: () = {
  let mut rest: &[StandardAlgorithm] = &StandardAlgorithm::ALL;
  while let [alg, tail @ ..] = rest {
    assert!(bitwise_checksum_unchecked(&alg.parameters(), CHECK_INPUT) == alg.check());
    rest = tail;
  }
};

// Reflected CRC-32 table: T[1] and T[128] are textbook values.
const _: () = {
  let crc32 = LookupTable::build(&CRC32);
  assert!(crc32.get(1) == 0x7707_3096);
  assert!(crc32.get(128) == 0xEDB8_8320);
  assert!(LookupTable::build(&CCITT).get(1) == 0x1021);
  assert!(LookupTable::build(&CRC16).get(128) == 0xA001);
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_round_trip() {
    for alg in StandardAlgorithm::ALL {
      assert_eq!(alg.name().parse::<StandardAlgorithm>(), Ok(alg));
    }
  }

  #[test]
  fn names_ignore_case_and_whitespace() {
    assert_eq!(StandardAlgorithm::from_name("CRC32"), Some(StandardAlgorithm::Crc32));
    assert_eq!(StandardAlgorithm::from_name(" Xmodem "), Some(StandardAlgorithm::Xmodem));
  }

  #[test]
  fn unknown_name() {
    assert_eq!("crc64".parse::<StandardAlgorithm>(), Err(CrcError::UnknownAlgorithm));
    assert_eq!("".parse::<StandardAlgorithm>(), Err(CrcError::UnknownAlgorithm));
  }

  #[test]
  fn parameters_match_catalogue() {
    let p = StandardAlgorithm::Crc16.parameters();
    assert_eq!((p.width, p.polynomial, p.initial, p.xor_out), (16, 0x8005, 0, 0));
    assert!(p.reflect_input && p.reflect_output);

    let p = StandardAlgorithm::Ccitt.parameters();
    assert_eq!((p.width, p.polynomial, p.initial, p.xor_out), (16, 0x1021, 0xFFFF, 0));
    assert!(!p.reflect_input && !p.reflect_output);

    let p = StandardAlgorithm::Xmodem.parameters();
    assert_eq!((p.width, p.polynomial, p.initial, p.xor_out), (16, 0x8408, 0, 0));
    assert!(p.reflect_input && p.reflect_output);

    let p = StandardAlgorithm::Crc32.parameters();
    assert_eq!(
      (p.width, p.polynomial, p.initial, p.xor_out),
      (32, 0x04C1_1DB7, 0xFFFF_FFFF, 0xFFFF_FFFF)
    );
    assert!(p.reflect_input && p.reflect_output);
  }

  #[test]
  fn tables_are_shared() {
    for alg in StandardAlgorithm::ALL {
      assert!(core::ptr::eq(alg.table(), alg.table()));
    }
  }

  #[test]
  fn display_is_name() {
    use alloc::string::ToString;

    assert_eq!(StandardAlgorithm::Ccitt.to_string(), "ccitt");
  }
}

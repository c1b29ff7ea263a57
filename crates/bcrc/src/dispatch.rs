//! Engine factories.
//!
//! Every factory returns a boxed [`CrcEngine`] so callers can hold engines of
//! different widths and implementations behind one type.
//!
//! ```text
//! create_generic(params)      width → GenericCrc<8|16|24|32>
//! create_table(params)        TableCrc with a runtime table
//! create_standard(alg)        config::get() → TableCrc (static table) | GenericCrc
//! create_standard_by_name(s)  name → create_standard
//! ```

use alloc::boxed::Box;

use traits::{CrcEngine, CrcError};

use crate::{
  catalog::StandardAlgorithm,
  config::{self, EngineForce},
  generic::{GenericCrc, GenericCrc16, GenericCrc32},
  introspect::EngineKind,
  params::CrcParameters,
  table::TableCrc,
};

/// A type-erased engine that can move between threads.
pub type BoxedEngine = Box<dyn CrcEngine + Send + Sync>;

// ─────────────────────────────────────────────────────────────────────────────
// Kind-Reporting Builders
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn build_generic(params: CrcParameters) -> Result<(BoxedEngine, EngineKind), CrcError> {
  let engine: BoxedEngine = match params.width {
    8 => Box::new(GenericCrc::<8>::new(params)),
    16 => Box::new(GenericCrc::<16>::new(params)),
    24 => Box::new(GenericCrc::<24>::new(params)),
    32 => Box::new(GenericCrc::<32>::new(params)),
    width => {
      log::debug!("rejected crc engine: width={width}");
      return Err(CrcError::UnsupportedWidth(width));
    }
  };
  log::debug!(
    "built {} engine: width={} poly={:#x}",
    EngineKind::Generic,
    params.width,
    params.masked_polynomial()
  );
  Ok((engine, EngineKind::Generic))
}

pub(crate) fn build_table(params: CrcParameters) -> Result<(BoxedEngine, EngineKind), CrcError> {
  let engine = TableCrc::from_parameters(params)?;
  log::debug!(
    "built {} engine: width={} poly={:#x}",
    EngineKind::Table,
    params.width,
    params.masked_polynomial()
  );
  Ok((Box::new(engine), EngineKind::Table))
}

pub(crate) fn build_standard(algorithm: StandardAlgorithm, force: EngineForce) -> (BoxedEngine, EngineKind) {
  let kind = EngineKind::for_force(force);
  let params = algorithm.parameters();
  let engine: BoxedEngine = match kind {
    EngineKind::Table => Box::new(TableCrc::standard(algorithm)),
    EngineKind::Generic => match algorithm {
      StandardAlgorithm::Crc16 | StandardAlgorithm::Ccitt | StandardAlgorithm::Xmodem => {
        Box::new(GenericCrc16::new(params))
      }
      StandardAlgorithm::Crc32 => Box::new(GenericCrc32::new(params)),
    },
  };
  log::debug!("built {kind} engine: algorithm={algorithm} force={}", force.as_str());
  (engine, kind)
}

// ─────────────────────────────────────────────────────────────────────────────
// Public Factories
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise engine for arbitrary parameters.
///
/// # Errors
///
/// [`CrcError::UnsupportedWidth`] if `params.width` is not 8, 16, 24 or 32.
///
/// # Example
///
/// ```
/// use bcrc::{CrcEngine, CrcError, CrcParameters, create_generic};
///
/// let crc32 = CrcParameters::new(32, 0x04C1_1DB7)
///   .with_initial(0xFFFF_FFFF)
///   .with_xor_out(0xFFFF_FFFF)
///   .reflected(true);
/// let mut engine = create_generic(crc32)?;
/// assert_eq!(engine.compute(b"123456789"), 0xCBF4_3926);
///
/// assert_eq!(create_generic(CrcParameters::new(12, 0x80F)).err(), Some(CrcError::UnsupportedWidth(12)));
/// # Ok::<(), CrcError>(())
/// ```
pub fn create_generic(params: CrcParameters) -> Result<BoxedEngine, CrcError> {
  build_generic(params).map(|(engine, _)| engine)
}

/// Table engine for arbitrary parameters.
///
/// # Errors
///
/// - [`CrcError::UnsupportedWidth`] if `params.width` is not 8, 16, 24 or 32
/// - [`CrcError::OutOfMemory`] if the lookup table cannot be allocated
pub fn create_table(params: CrcParameters) -> Result<BoxedEngine, CrcError> {
  build_table(params).map(|(engine, _)| engine)
}

/// Engine for a catalogue algorithm, honoring the `BCRC_FORCE` override.
///
/// # Example
///
/// ```
/// use bcrc::{CrcEngine, StandardAlgorithm, create_standard};
///
/// let mut crc = create_standard(StandardAlgorithm::Crc16);
/// assert_eq!(crc.compute(b"123456789"), 0xBB3D);
/// ```
#[must_use]
pub fn create_standard(algorithm: StandardAlgorithm) -> BoxedEngine {
  create_standard_with(algorithm, config::get().effective_force)
}

/// Engine for a catalogue algorithm with an explicit backend choice.
#[must_use]
pub fn create_standard_with(algorithm: StandardAlgorithm, force: EngineForce) -> BoxedEngine {
  build_standard(algorithm, force).0
}

/// Engine for a catalogue algorithm looked up by name (ASCII case ignored).
///
/// # Errors
///
/// [`CrcError::UnknownAlgorithm`] if `name` is not `crc16`, `ccitt`, `xmodem` or `crc32`.
pub fn create_standard_by_name(name: &str) -> Result<BoxedEngine, CrcError> {
  let algorithm: StandardAlgorithm = name.parse()?;
  Ok(create_standard(algorithm))
}

#[cfg(test)]
mod tests {
  use super::*;

  const CHECK_INPUT: &[u8] = b"123456789";

  #[test]
  fn generic_every_width() {
    let cases = [
      (CrcParameters::new(8, 0x07), 0xF4),
      (CrcParameters::new(8, 0x31).reflected(true), 0xA1),
      (CrcParameters::new(16, 0x8005).reflected(true), 0xBB3D),
      (CrcParameters::new(24, 0x86_4CFB).with_initial(0xB7_04CE), 0x21_CF02),
      (
        CrcParameters::new(32, 0x04C1_1DB7)
          .with_initial(0xFFFF_FFFF)
          .with_xor_out(0xFFFF_FFFF),
        0xFC89_1918,
      ),
    ];
    for (params, expected) in cases {
      let mut engine = create_generic(params).unwrap();
      assert_eq!(engine.compute(CHECK_INPUT), expected, "{params:?}");
      let mut engine = create_table(params).unwrap();
      assert_eq!(engine.compute(CHECK_INPUT), expected, "{params:?}");
    }
  }

  #[test]
  fn unsupported_widths() {
    for width in [0u32, 4, 12, 17, 31, 33, 64] {
      let params = CrcParameters::new(width, 0x1);
      assert_eq!(create_generic(params).err(), Some(CrcError::UnsupportedWidth(width)));
      assert_eq!(create_table(params).err(), Some(CrcError::UnsupportedWidth(width)));
    }
  }

  #[test]
  fn standard_every_force() {
    for alg in StandardAlgorithm::ALL {
      for force in [EngineForce::Auto, EngineForce::Reference, EngineForce::Table] {
        let mut engine = create_standard_with(alg, force);
        assert_eq!(engine.compute(CHECK_INPUT), alg.check(), "{alg} {force:?}");
      }
      assert_eq!(create_standard(alg).compute(CHECK_INPUT), alg.check());
    }
  }

  #[test]
  fn standard_kinds() {
    let (_, kind) = build_standard(StandardAlgorithm::Crc32, EngineForce::Reference);
    assert_eq!(kind, EngineKind::Generic);
    let (_, kind) = build_standard(StandardAlgorithm::Crc32, EngineForce::Auto);
    assert_eq!(kind, EngineKind::Table);
  }

  #[test]
  fn by_name() {
    let mut engine = create_standard_by_name("CCITT").unwrap();
    assert_eq!(engine.compute(CHECK_INPUT), 0x29B1);
    assert_eq!(create_standard_by_name("crc-32").err(), Some(CrcError::UnknownAlgorithm));
  }

  #[test]
  fn engines_are_independent() {
    let mut a = create_standard(StandardAlgorithm::Crc32);
    let mut b = create_standard(StandardAlgorithm::Crc32);
    a.process_bytes(b"1234");
    b.process_bytes(b"abcd");
    a.process_bytes(b"56789");
    assert_eq!(a.checksum(), 0xCBF4_3926);
    b.reset();
    b.process_bytes(CHECK_INPUT);
    assert_eq!(b.checksum(), 0xCBF4_3926);
  }
}

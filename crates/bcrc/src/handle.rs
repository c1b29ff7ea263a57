//! Owned, explicitly releasable engine handles.
//!
//! A [`CrcHandle`] owns one boxed engine and can give it up before being
//! dropped. After [`CrcHandle::destroy`] every operation fails with
//! [`CrcError::DestroyedHandle`] instead of touching freed state.
//!
//! Byte ranges use 1-based inclusive positions; negative positions count
//! back from the end, so `(1, -1)` is the whole input:
//!
//! ```text
//! bytes:      a  b  c  d  e
//! positive:   1  2  3  4  5
//! negative:  -5 -4 -3 -2 -1
//! ```

use core::fmt;

use traits::{CrcEngine, CrcError};

use crate::{
  catalog::StandardAlgorithm,
  config,
  dispatch::{self, BoxedEngine},
  introspect::EngineKind,
  params::CrcParameters,
};

/// Convert a possibly negative 1-based position into a non-negative one.
#[inline]
fn relative_position(pos: isize, len: usize) -> isize {
  let len = isize::try_from(len).unwrap_or(isize::MAX);
  let pos = if pos < 0 { pos.saturating_add(len).saturating_add(1) } else { pos };
  pos.max(0)
}

/// Select `bytes[start..=end]` using 1-based, end-relative positions.
///
/// `start` defaults to `1` and `end` to `-1`. `start` is clamped to the first
/// byte and `end` to the last; if `start` ends up after `end` the result is
/// empty. Never panics.
///
/// # Example
///
/// ```
/// use bcrc::select_range;
///
/// assert_eq!(select_range(b"abcde", None, None), b"abcde");
/// assert_eq!(select_range(b"abcde", Some(2), Some(4)), b"bcd");
/// assert_eq!(select_range(b"abcde", Some(-2), None), b"de");
/// assert_eq!(select_range(b"abcde", Some(4), Some(2)), b"");
/// ```
#[must_use]
pub fn select_range(bytes: &[u8], start: Option<isize>, end: Option<isize>) -> &[u8] {
  let start = relative_position(start.unwrap_or(1), bytes.len()).max(1);
  let end = relative_position(end.unwrap_or(-1), bytes.len());
  let (Ok(start), Ok(end)) = (usize::try_from(start), usize::try_from(end)) else {
    return &[];
  };
  let end = end.min(bytes.len());
  if start > end {
    return &[];
  }
  bytes.get(start - 1..end).unwrap_or(&[])
}

/// A CRC engine with an explicit lifecycle.
///
/// Operations chain:
///
/// ```
/// use bcrc::{CrcHandle, StandardAlgorithm};
///
/// let mut crc = CrcHandle::standard(StandardAlgorithm::Crc32);
/// let sum = crc.reset()?.process(b"1234")?.process(b"56789")?.checksum()?;
/// assert_eq!(sum, 0xCBF4_3926);
///
/// crc.destroy()?;
/// assert!(crc.checksum().is_err());
/// # Ok::<(), bcrc::CrcError>(())
/// ```
pub struct CrcHandle {
  engine: Option<BoxedEngine>,
  kind: EngineKind,
}

impl CrcHandle {
  fn from_parts((engine, kind): (BoxedEngine, EngineKind)) -> Self {
    Self {
      engine: Some(engine),
      kind,
    }
  }

  /// Handle over a bitwise engine for arbitrary parameters.
  ///
  /// # Errors
  ///
  /// [`CrcError::UnsupportedWidth`] if `params.width` is not 8, 16, 24 or 32.
  pub fn generic(params: CrcParameters) -> Result<Self, CrcError> {
    dispatch::build_generic(params).map(Self::from_parts)
  }

  /// Handle over a catalogue algorithm, honoring the `BCRC_FORCE` override.
  #[must_use]
  pub fn standard(algorithm: StandardAlgorithm) -> Self {
    Self::from_parts(dispatch::build_standard(algorithm, config::get().effective_force))
  }

  /// Handle over a catalogue algorithm looked up by name.
  ///
  /// # Errors
  ///
  /// [`CrcError::UnknownAlgorithm`] if `name` is not in the catalogue.
  pub fn by_name(name: &str) -> Result<Self, CrcError> {
    Ok(Self::standard(name.parse()?))
  }

  fn engine_mut(&mut self) -> Result<&mut BoxedEngine, CrcError> {
    match self.engine.as_mut() {
      Some(engine) => Ok(engine),
      None => {
        log::warn!("operation on destroyed {} crc handle", self.kind);
        Err(CrcError::DestroyedHandle)
      }
    }
  }

  fn engine_ref(&self) -> Result<&BoxedEngine, CrcError> {
    match self.engine.as_ref() {
      Some(engine) => Ok(engine),
      None => {
        log::warn!("operation on destroyed {} crc handle", self.kind);
        Err(CrcError::DestroyedHandle)
      }
    }
  }

  /// Restore the initial register.
  ///
  /// # Errors
  ///
  /// [`CrcError::DestroyedHandle`] after [`destroy`](Self::destroy).
  pub fn reset(&mut self) -> Result<&mut Self, CrcError> {
    self.engine_mut()?.reset();
    Ok(self)
  }

  /// Feed all of `bytes`.
  ///
  /// # Errors
  ///
  /// [`CrcError::DestroyedHandle`] after [`destroy`](Self::destroy).
  pub fn process(&mut self, bytes: &[u8]) -> Result<&mut Self, CrcError> {
    self.engine_mut()?.process_bytes(bytes);
    Ok(self)
  }

  /// Feed the bytes selected by [`select_range`].
  ///
  /// # Errors
  ///
  /// [`CrcError::DestroyedHandle`] after [`destroy`](Self::destroy).
  pub fn process_range(
    &mut self,
    bytes: &[u8],
    start: Option<isize>,
    end: Option<isize>,
  ) -> Result<&mut Self, CrcError> {
    self.process(select_range(bytes, start, end))
  }

  /// Current checksum. Processing may continue afterwards.
  ///
  /// # Errors
  ///
  /// [`CrcError::DestroyedHandle`] after [`destroy`](Self::destroy).
  pub fn checksum(&self) -> Result<u32, CrcError> {
    Ok(self.engine_ref()?.checksum())
  }

  /// `reset`, `process`, `checksum` in one call.
  ///
  /// # Errors
  ///
  /// [`CrcError::DestroyedHandle`] after [`destroy`](Self::destroy).
  pub fn compute(&mut self, bytes: &[u8]) -> Result<u32, CrcError> {
    Ok(self.engine_mut()?.compute(bytes))
  }

  /// `reset`, `process_range`, `checksum` in one call.
  ///
  /// # Errors
  ///
  /// [`CrcError::DestroyedHandle`] after [`destroy`](Self::destroy).
  pub fn compute_range(&mut self, bytes: &[u8], start: Option<isize>, end: Option<isize>) -> Result<u32, CrcError> {
    self.compute(select_range(bytes, start, end))
  }

  /// Release the engine now rather than at drop.
  ///
  /// # Errors
  ///
  /// [`CrcError::DestroyedHandle`] if the handle was already destroyed.
  pub fn destroy(&mut self) -> Result<(), CrcError> {
    match self.engine.take() {
      Some(engine) => {
        drop(engine);
        log::debug!("destroyed {} crc handle", self.kind);
        Ok(())
      }
      None => {
        log::warn!("double destroy of {} crc handle", self.kind);
        Err(CrcError::DestroyedHandle)
      }
    }
  }

  #[inline]
  #[must_use]
  pub fn is_destroyed(&self) -> bool {
    self.engine.is_none()
  }

  /// Engine implementation behind this handle.
  #[inline]
  #[must_use]
  pub fn kind(&self) -> EngineKind {
    self.kind
  }

  #[inline]
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    self.kind.backend_name()
  }
}

impl fmt::Debug for CrcHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut s = f.debug_struct("CrcHandle");
    s.field("kind", &self.kind);
    match &self.engine {
      Some(engine) => s.field("checksum", &format_args!("{:#x}", engine.checksum())),
      None => s.field("destroyed", &true),
    };
    s.finish()
  }
}

//! I/O adapters that feed a [`CrcEngine`] as bytes pass through.
//!
//! [`CrcReader`] and [`CrcWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] and update the engine with exactly the bytes that were
//! transferred, so short reads and short writes are accounted for.
//!
//! Any engine works, including `Box<dyn CrcEngine>`.

use std::io;

use crate::CrcEngine;

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> io::Result<usize>
where
  R: io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> io::Result<usize>
where
  W: io::Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

/// Wraps a [`Read`](io::Read) and checksums every byte read through it.
#[derive(Clone, Debug)]
pub struct CrcReader<R, E> {
  inner: R,
  engine: E,
}

impl<R, E: CrcEngine> CrcReader<R, E> {
  /// Wrap `inner`, feeding `engine` from its current state.
  #[inline]
  #[must_use]
  pub fn new(inner: R, engine: E) -> Self {
    Self { inner, engine }
  }

  /// Checksum of everything read so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u32 {
    self.engine.checksum()
  }

  /// Mutable access to the engine, e.g. to reset it between records.
  #[inline]
  pub fn engine_mut(&mut self) -> &mut E {
    &mut self.engine
  }

  /// Unwrap into the inner reader and the checksum so far.
  #[inline]
  pub fn into_parts(self) -> (R, u32) {
    let crc = self.engine.checksum();
    (self.inner, crc)
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }
}

impl<R: io::Read, E: CrcEngine> io::Read for CrcReader<R, E> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.engine.process_bytes(data))
  }
}

/// Wraps a [`Write`](io::Write) and checksums every byte accepted by it.
///
/// Only the prefix the inner writer reports as written is checksummed.
#[derive(Clone, Debug)]
pub struct CrcWriter<W, E> {
  inner: W,
  engine: E,
}

impl<W, E: CrcEngine> CrcWriter<W, E> {
  /// Wrap `inner`, feeding `engine` from its current state.
  #[inline]
  #[must_use]
  pub fn new(inner: W, engine: E) -> Self {
    Self { inner, engine }
  }

  /// Checksum of everything written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u32 {
    self.engine.checksum()
  }

  #[inline]
  pub fn engine_mut(&mut self) -> &mut E {
    &mut self.engine
  }

  /// Unwrap into the inner writer and the checksum so far.
  #[inline]
  pub fn into_parts(self) -> (W, u32) {
    let crc = self.engine.checksum();
    (self.inner, crc)
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }
}

impl<W: io::Write, E: CrcEngine> io::Write for CrcWriter<W, E> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.engine.process_bytes(data))
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}

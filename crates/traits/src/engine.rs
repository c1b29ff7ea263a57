//! The CRC engine interface.
//!
//! Every engine in the workspace, whether it shifts one bit at a time or looks
//! up whole bytes in a table, exposes the same three operations:
//!
//! - **reset**: reinitialize the register from the configured initial value
//! - **process_bytes**: fold more input into the CRC-in-progress
//! - **checksum**: read the finalized value without disturbing the register

/// A stateful CRC register.
///
/// The trait is object safe; callers usually hold a `Box<dyn CrcEngine>` and
/// never learn which concrete engine backs it.
///
/// # Usage
///
/// ```rust
/// use traits::CrcEngine;
///
/// # /// CRC-8/SMBUS: poly 0x07, no reflection, zero init and xor-out.
/// # struct Crc8 { register: u8 }
/// #
/// # impl CrcEngine for Crc8 {
/// #   fn reset(&mut self) {
/// #     self.register = 0;
/// #   }
/// #
/// #   fn process_bytes(&mut self, data: &[u8]) {
/// #     for &byte in data {
/// #       self.register ^= byte;
/// #       for _ in 0..8 {
/// #         self.register = if self.register & 0x80 != 0 { (self.register << 1) ^ 0x07 } else { self.register << 1 };
/// #       }
/// #     }
/// #   }
/// #
/// #   fn checksum(&self) -> u32 {
/// #     u32::from(self.register)
/// #   }
/// # }
/// #
/// let mut crc = Crc8 { register: 0 };
/// crc.process_bytes(b"1234");
/// crc.process_bytes(b"56789");
/// assert_eq!(crc.checksum(), 0xF4);
///
/// // One shot: reset, process, checksum.
/// assert_eq!(crc.compute(b"123456789"), 0xF4);
///
/// // Through a trait object.
/// let engine: &mut dyn CrcEngine = &mut crc;
/// assert_eq!(engine.compute(b""), 0x00);
/// ```
///
/// # Implementor Requirements
///
/// - `checksum()` must not mutate the register; repeated calls return the same value
/// - `reset()` followed by `checksum()` must equal the checksum of empty input
/// - feeding `a` then `b` must equal feeding `a ++ b` in one call
/// - the returned checksum never has bits set above the engine's width
pub trait CrcEngine {
  /// Reinitialize the register to the engine's initial value.
  fn reset(&mut self);

  /// Fold `data` into the register, in order.
  ///
  /// May be called any number of times; the CRC-in-progress accumulates until
  /// the next [`reset`](Self::reset). Empty input is a no-op.
  fn process_bytes(&mut self, data: &[u8]);

  /// Return the checksum of everything processed since the last reset.
  ///
  /// Applies output reflection and the final XOR to a copy of the register;
  /// processing may continue afterwards.
  #[must_use]
  fn checksum(&self) -> u32;

  /// Compute the checksum of `data` alone.
  ///
  /// Equivalent to `reset(); process_bytes(data); checksum()`. The engine is
  /// left holding the state after `data`.
  #[inline]
  #[must_use]
  fn compute(&mut self, data: &[u8]) -> u32 {
    self.reset();
    self.process_bytes(data);
    self.checksum()
  }
}

impl<E: CrcEngine + ?Sized> CrcEngine for &mut E {
  #[inline]
  fn reset(&mut self) {
    (**self).reset();
  }

  #[inline]
  fn process_bytes(&mut self, data: &[u8]) {
    (**self).process_bytes(data);
  }

  #[inline]
  fn checksum(&self) -> u32 {
    (**self).checksum()
  }
}

#[cfg(feature = "alloc")]
impl<E: CrcEngine + ?Sized> CrcEngine for alloc::boxed::Box<E> {
  #[inline]
  fn reset(&mut self) {
    (**self).reset();
  }

  #[inline]
  fn process_bytes(&mut self, data: &[u8]) {
    (**self).process_bytes(data);
  }

  #[inline]
  fn checksum(&self) -> u32 {
    (**self).checksum()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Byte sum modulo 2^16, enough to observe call ordering.
  #[derive(Default)]
  struct Sum16 {
    acc: u32,
  }

  impl CrcEngine for Sum16 {
    fn reset(&mut self) {
      self.acc = 0;
    }

    fn process_bytes(&mut self, data: &[u8]) {
      for &b in data {
        self.acc = (self.acc + u32::from(b)) & 0xFFFF;
      }
    }

    fn checksum(&self) -> u32 {
      self.acc
    }
  }

  #[test]
  fn compute_resets_first() {
    let mut e = Sum16::default();
    e.process_bytes(b"garbage");
    assert_eq!(e.compute(b"\x01\x02"), 3);
  }

  #[test]
  fn compute_leaves_state_after_input() {
    let mut e = Sum16::default();
    let _ = e.compute(b"\x05");
    e.process_bytes(b"\x01");
    assert_eq!(e.checksum(), 6);
  }

  #[test]
  fn forwards_through_mut_ref() {
    let mut e = Sum16::default();
    {
      let mut r = &mut e;
      r.process_bytes(b"\x07");
      assert_eq!(CrcEngine::checksum(&r), 7);
    }
    assert_eq!(e.checksum(), 7);
  }

  #[test]
  fn trait_is_object_safe() {
    extern crate alloc;
    use alloc::boxed::Box;

    let mut boxed: Box<dyn CrcEngine> = Box::new(Sum16::default());
    boxed.process_bytes(b"\x10\x20");
    assert_eq!(boxed.checksum(), 0x30);
    boxed.reset();
    assert_eq!(boxed.checksum(), 0);
  }
}

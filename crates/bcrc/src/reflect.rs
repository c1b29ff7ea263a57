//! Bit reflection.
//!
//! "Reflected" means bit-reversed within a fixed width. CRC algorithms may
//! reflect each input byte (`reflect_input`), the final register
//! (`reflect_output`), both, or neither.

/// Reverse the low `width` bits of `value`.
///
/// Bits at or above `width` are ignored and the result never has bits set at
/// or above `width`. Widths above 32 are treated as 32; width 0 yields 0.
///
/// # Example
///
/// ```
/// use bcrc::reflect;
///
/// assert_eq!(reflect(0b0001, 4), 0b1000);
/// assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
/// assert_eq!(reflect(0xFF_0001, 16), 0x8000);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u32, width: u32) -> u32 {
  match width {
    0 => 0,
    1..=31 => value.reverse_bits() >> (32 - width),
    _ => value.reverse_bits(),
  }
}

/// Reverse the bits of one input byte.
#[inline]
#[must_use]
pub const fn reflect_byte(byte: u8) -> u8 {
  byte.reverse_bits()
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Obviously-correct loop form.
  fn reflect_slow(value: u32, width: u32) -> u32 {
    let mut out = 0u32;
    for i in 0..width.min(32) {
      if (value >> i) & 1 != 0 {
        out |= 1 << (width.min(32) - 1 - i);
      }
    }
    out
  }

  #[test]
  fn small_widths() {
    assert_eq!(reflect(0b1010, 4), 0b0101);
    assert_eq!(reflect(0b1100, 4), 0b0011);
    assert_eq!(reflect(0xFF, 8), 0xFF);
    assert_eq!(reflect(0x80, 8), 0x01);
  }

  #[test]
  fn catalogue_polynomials() {
    assert_eq!(reflect(0x8005, 16), 0xA001);
    assert_eq!(reflect(0x1021, 16), 0x8408);
    assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
    assert_eq!(reflect(0x86_4CFB, 24), 0xDF_3261);
  }

  #[test]
  fn ignores_bits_above_width() {
    assert_eq!(reflect(0xFFFF_FF01, 8), 0x80);
    assert_eq!(reflect(0xABCD_0000, 16), 0);
  }

  #[test]
  fn degenerate_widths() {
    assert_eq!(reflect(0xFFFF_FFFF, 0), 0);
    assert_eq!(reflect(0x1, 1), 0x1);
    assert_eq!(reflect(0x1, 40), 0x8000_0000);
  }

  #[test]
  fn involution_for_supported_widths() {
    for width in [8u32, 16, 24, 32] {
      let mask = if width == 32 { u32::MAX } else { (1 << width) - 1 };
      for v in [0u32, 1, 0x5A5A_5A5A, 0x8000_0001, 0x0123_4567, u32::MAX] {
        assert_eq!(reflect(reflect(v, width), width), v & mask, "width={width} v={v:#x}");
      }
    }
  }

  #[test]
  fn matches_loop_form() {
    let mut x = 0x9E37_79B9u32;
    for width in 0..=32 {
      for _ in 0..64 {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        assert_eq!(reflect(x, width), reflect_slow(x, width), "width={width} x={x:#x}");
      }
    }
  }

  #[test]
  fn byte_reflection() {
    assert_eq!(reflect_byte(0x01), 0x80);
    assert_eq!(reflect_byte(0x31), 0x8C);
    for b in 0u8..=255 {
      assert_eq!(u32::from(reflect_byte(b)), reflect(u32::from(b), 8));
    }
  }
}

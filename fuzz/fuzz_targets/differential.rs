//! Differential fuzzing against a reference implementation.
//!
//! Compares both engines, for fuzzer-chosen parameters, against the `crc`
//! crate to catch any discrepancies.

#![no_main]

use arbitrary::Arbitrary;
use bcrc::{CrcEngine, CrcParameters, create_generic, create_table};
use crc::{Algorithm, Crc};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width_sel: u8,
  polynomial: u64,
  initial: u64,
  xor_out: u64,
  reflect_input: bool,
  reflect_output: bool,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let width = [8u32, 16, 24, 32][usize::from(input.width_sel % 4)];
  let params = CrcParameters {
    width,
    polynomial: input.polynomial,
    initial: input.initial,
    xor_out: input.xor_out,
    reflect_input: input.reflect_input,
    reflect_output: input.reflect_output,
  };

  let ours = create_generic(params).unwrap().compute(&input.data);
  let table = create_table(params).unwrap().compute(&input.data);
  assert_eq!(ours, table, "engine mismatch for {params:?}, len={}", input.data.len());

  let raw = Box::into_raw(Box::new(Algorithm {
    width: width as u8,
    poly: params.masked_polynomial(),
    init: params.masked_initial(),
    refin: params.reflect_input,
    refout: params.reflect_output,
    xorout: params.masked_xor_out(),
    check: 0,
    residue: 0,
  }));
  // SAFETY: `raw` is freed below, after the last use of `algorithm`.
  let algorithm: &'static Algorithm<u32> = unsafe { &*raw };
  let reference = Crc::<u32>::new(algorithm).checksum(&input.data);
  // SAFETY: allocated by `Box::into_raw` above; the `Crc` borrowing it is gone.
  drop(unsafe { Box::from_raw(raw) });

  assert_eq!(
    ours, reference,
    "differential mismatch: ours={ours:#010x}, reference={reference:#010x}, params={params:?}"
  );
});

//! Fuzz target for streaming updates.
//!
//! Feeding input in arbitrary chunks must match the one-shot checksum, for
//! every catalogue algorithm and both engines.

#![no_main]

use arbitrary::Arbitrary;
use bcrc::{CrcEngine, EngineForce, StandardAlgorithm, create_standard_with};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  // Normalize splits to valid range and sort
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.push(data.len());
  splits.sort_unstable();
  splits.dedup();

  for alg in StandardAlgorithm::ALL {
    for force in [EngineForce::Table, EngineForce::Reference] {
      let mut engine = create_standard_with(alg, force);
      let expected = engine.compute(data);

      engine.reset();
      let mut prev = 0;
      for &split in &splits {
        engine.process_bytes(&data[prev..split]);
        prev = split;
      }
      assert_eq!(engine.checksum(), expected, "{alg} {force:?} streaming mismatch");
      assert_eq!(engine.checksum(), expected, "{alg} {force:?} checksum not repeatable");
    }
  }
});

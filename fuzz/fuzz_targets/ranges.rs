//! Fuzz target for byte-range selection and the handle layer.

#![no_main]

use arbitrary::Arbitrary;
use bcrc::{CrcHandle, StandardAlgorithm, select_range};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  start: Option<isize>,
  end: Option<isize>,
}

fuzz_target!(|input: Input| {
  let selected = select_range(&input.data, input.start, input.end);
  assert!(selected.len() <= input.data.len());

  // The selection is always a contiguous window of the input.
  if !selected.is_empty() {
    let offset = selected.as_ptr() as usize - input.data.as_ptr() as usize;
    assert_eq!(&input.data[offset..offset + selected.len()], selected);
  }

  let mut handle = CrcHandle::standard(StandardAlgorithm::Crc32);
  let via_range = handle.compute_range(&input.data, input.start, input.end).unwrap();
  let via_slice = handle.compute(selected).unwrap();
  assert_eq!(via_range, via_slice);
});

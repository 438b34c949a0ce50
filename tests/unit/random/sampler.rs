use std::collections::VecDeque;

use super::*;
use crate::random::stream::KeyStream;

struct FixedBytes(VecDeque<u8>);

impl FixedBytes {
    fn new(bytes: &[u8]) -> Self {
        Self(bytes.iter().copied().collect())
    }
}

impl ByteSource for FixedBytes {
    fn fill(&mut self, buf: &mut [u8]) -> AdorableResult<()> {
        if buf.len() > self.0.len() {
            return Err(AdorableError::StreamExhausted {
                requested: buf.len(),
                remaining: self.0.len(),
            });
        }
        for b in buf.iter_mut() {
            *b = self.0.pop_front().unwrap();
        }
        Ok(())
    }
}

#[test]
fn zero_bound_is_rejected() {
    let mut src = FixedBytes::new(&[1, 2, 3]);
    assert!(matches!(
        next_below(&mut src, 0),
        Err(AdorableError::Validation(_))
    ));
}

#[test]
fn bound_one_consumes_nothing() {
    let mut src = FixedBytes::new(&[]);
    assert_eq!(next_below(&mut src, 1).unwrap(), 0);
}

#[test]
fn small_bound_masks_high_bits() {
    // bound 8 needs three bits: 0xfd & 0x07 == 5
    let mut src = FixedBytes::new(&[0xfd]);
    assert_eq!(next_below(&mut src, 8).unwrap(), 5);
    assert!(src.0.is_empty());
}

#[test]
fn out_of_range_values_are_rejected_and_redrawn() {
    // bound 9 needs four bits: 0xf9 -> 9 (rejected), 0xfc -> 12 (rejected), 0x03 -> 3
    let mut src = FixedBytes::new(&[0xf9, 0xfc, 0x03, 0xaa]);
    assert_eq!(next_below(&mut src, 9).unwrap(), 3);
    assert_eq!(src.0.len(), 1);
}

#[test]
fn multi_byte_bounds_read_big_endian() {
    // bound 300 needs nine bits: two bytes, first masked to one bit
    let mut src = FixedBytes::new(&[0xff, 0x10]);
    assert_eq!(next_below(&mut src, 300).unwrap(), 0x110);
}

#[test]
fn full_width_bound_rejects_only_the_maximum() {
    let mut bytes = vec![0xff; 8];
    bytes.extend([0, 0, 0, 0, 0, 0, 0, 1]);
    let mut src = FixedBytes::new(&bytes);
    assert_eq!(next_below(&mut src, u64::MAX).unwrap(), 1);
}

#[test]
fn float_scaling_spans_unit_interval() {
    let mut zero = FixedBytes::new(&[0; 8]);
    assert_eq!(next_f64(&mut zero).unwrap(), 0.0);

    let mut half = FixedBytes::new(&[0x80, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(next_f64(&mut half).unwrap(), 0.5);
}

#[test]
fn floats_from_known_seed() {
    let mut s = KeyStream::expand(b"seed");
    assert_eq!(next_f64(&mut s).unwrap(), 0.4261756628996293);
    assert_eq!(next_f64(&mut s).unwrap(), 0.9310722052001276);
    assert_eq!(next_f64(&mut s).unwrap(), 0.37441215865666017);
    assert_eq!(s.consumed(), 24);
}

#[test]
fn exhausted_source_propagates() {
    let mut src = FixedBytes::new(&[0, 0, 0]);
    assert!(matches!(
        next_f64(&mut src),
        Err(AdorableError::StreamExhausted { .. })
    ));
}

use crate::foundation::error::{AdorableError, AdorableResult};
use crate::random::stream::ByteSource;

/// Draw an integer uniformly from `[0, bound)`.
///
/// Reads just enough big-endian bytes to cover `bound - 1`, masks the excess high bits and
/// rejects values `>= bound`, so every outcome is equally likely. A `bound` of 1 consumes
/// nothing.
pub fn next_below<S: ByteSource + ?Sized>(src: &mut S, bound: u64) -> AdorableResult<u64> {
    if bound == 0 {
        return Err(AdorableError::validation("next_below bound must be > 0"));
    }

    let max = bound - 1;
    let bits = u64::BITS - max.leading_zeros();
    if bits == 0 {
        return Ok(0);
    }

    let len = bits.div_ceil(8) as usize;
    let top_bits = match bits % 8 {
        0 => 8,
        b => b,
    };
    let mask = (0xffu16 >> (8 - top_bits)) as u8;

    let start = 8 - len;
    let mut buf = [0u8; 8];
    loop {
        src.fill(&mut buf[start..])?;
        buf[start] &= mask;
        let v = u64::from_be_bytes(buf);
        if v < bound {
            return Ok(v);
        }
    }
}

/// Draw a float from `[0, 1]` by scaling a uniform integer below `u64::MAX`.
///
/// The integer-to-float conversion rounds, so values within 2^-54 of 1 come back as exactly
/// 1.0.
pub fn next_f64<S: ByteSource + ?Sized>(src: &mut S) -> AdorableResult<f64> {
    let n = next_below(src, u64::MAX)?;
    Ok(n as f64 / u64::MAX as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/random/sampler.rs"]
mod tests;

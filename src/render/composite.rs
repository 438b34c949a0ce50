use crate::foundation::error::{AdorableError, AdorableResult};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// One straight (non-premultiplied) RGBA8 pixel.
pub type StraightRgba8 = [u8; 4];

const M: u32 = 0xffff;

/// Source-over of a straight `src` onto a premultiplied `dst`.
///
/// The source is widened to 16 bits and premultiplied there, the destination is scaled by
/// `1 - src.a`, and each channel is truncated back to 8 bits. Fully transparent sources leave
/// `dst` untouched and fully opaque ones replace it.
pub fn over(dst: PremulRgba8, src: StraightRgba8) -> PremulRgba8 {
    let sa = u32::from(src[3]) * 0x101;
    let inv = (M - sa) * 0x101;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let sc = u32::from(src[i]) * sa / 0xff;
        out[i] = ((u32::from(dst[i]) * inv / M + sc) >> 8) as u8;
    }
    out[3] = ((u32::from(dst[3]) * inv / M + sa) >> 8) as u8;
    out
}

/// Blend straight `src` over premultiplied `dst` pixel by pixel.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> AdorableResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(AdorableError::asset(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Overwrite every pixel of `dst` with `px`.
pub fn fill_in_place(dst: &mut [u8], px: PremulRgba8) {
    for d in dst.chunks_exact_mut(4) {
        d.copy_from_slice(&px);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

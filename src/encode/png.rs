use image::{
    ExtendedColorType, ImageEncoder,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::{
    foundation::error::{AdorableError, AdorableResult},
    foundation::math::div_alpha_u8,
    render::canvas::Canvas,
};

/// Serialize `canvas` as an 8-bit RGBA PNG with no ancillary chunks.
///
/// Compression and filter settings are pinned so identical canvases always encode to identical
/// bytes. `Fast` selects the png crate's fixed-table deflater.
pub fn encode_png(canvas: &Canvas) -> AdorableResult<Vec<u8>> {
    let expected = canvas.width as usize * canvas.height as usize * 4;
    if canvas.data.len() != expected {
        return Err(AdorableError::encode(format!(
            "canvas buffer is {} bytes, expected {expected}",
            canvas.data.len()
        )));
    }

    let straight = unpremultiply(&canvas.data);
    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, CompressionType::Fast, FilterType::Adaptive)
        .write_image(
            &straight,
            canvas.width,
            canvas.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| AdorableError::encode(format!("write png: {e}")))?;
    Ok(out)
}

fn unpremultiply(premul: &[u8]) -> Vec<u8> {
    let mut out = premul.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = px[3];
        if a == 255 {
            continue;
        }
        px[0] = div_alpha_u8(px[0], a);
        px[1] = div_alpha_u8(px[1], a);
        px[2] = div_alpha_u8(px[2], a);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;

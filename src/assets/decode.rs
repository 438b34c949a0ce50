use std::sync::Arc;

use crate::{
    assets::store::FeatureBitmap,
    foundation::error::{AdorableError, AdorableResult},
};

/// Decode PNG bytes into straight RGBA8.
///
/// Pixels keep their stored color even where alpha is zero; compositing premultiplies them.
pub fn decode_image(bytes: &[u8]) -> AdorableResult<FeatureBitmap> {
    let dyn_img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map_err(|e| AdorableError::asset(format!("decode png: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(AdorableError::asset("decoded image has zero area"));
    }

    Ok(FeatureBitmap {
        width,
        height,
        rgba8: Arc::new(rgba.into_raw()),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

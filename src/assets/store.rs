use std::{collections::HashMap, sync::Arc};

use crate::{
    assets::catalog::{FeatureCategory, bundled_asset, pick_variant},
    assets::decode::decode_image,
    foundation::error::{AdorableError, AdorableResult},
    random::stream::ByteSource,
};

/// Decoded feature layer in straight RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureBitmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major straight RGBA8.
    pub rgba8: Arc<Vec<u8>>,
}

impl FeatureBitmap {
    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Read-only lookup of feature bitmaps by `(category, index)`.
///
/// Implementations must be safe to share between threads; the generator never mutates them.
pub trait FeatureStore: Send + Sync {
    /// Resolve one variant. A missing pair or an undecodable asset is an
    /// [`AdorableError::Asset`].
    fn feature(&self, category: FeatureCategory, index: u32) -> AdorableResult<FeatureBitmap>;
}

/// Decodes the compiled-in PNG set on every lookup.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledFeatures;

impl FeatureStore for BundledFeatures {
    fn feature(&self, category: FeatureCategory, index: u32) -> AdorableResult<FeatureBitmap> {
        let name = category.asset_name(index);
        let bytes = bundled_asset(&name)
            .ok_or_else(|| AdorableError::asset(format!("missing bundled asset '{name}'")))?;
        decode_image(bytes).map_err(|e| AdorableError::asset(format!("'{name}': {e}")))
    }
}

/// Every variant of a source store, decoded once up front.
///
/// Preparation checks that all variants share the same dimensions, so a prepared store can be
/// handed to any number of threads without further validation.
#[derive(Clone, Debug)]
pub struct PreparedFeatures {
    width: u32,
    height: u32,
    by_key: HashMap<(FeatureCategory, u32), FeatureBitmap>,
}

impl PreparedFeatures {
    /// Decode every variant of `source`.
    #[tracing::instrument(skip(source))]
    pub fn prepare(source: &dyn FeatureStore) -> AdorableResult<Self> {
        let mut by_key = HashMap::new();
        let mut dims: Option<(u32, u32)> = None;

        for category in FeatureCategory::ALL {
            for index in 0..category.variants() {
                let bitmap = source.feature(category, index)?;
                match dims {
                    None => dims = Some(bitmap.dimensions()),
                    Some(d) if d != bitmap.dimensions() => {
                        return Err(AdorableError::asset(format!(
                            "{} is {}x{}, expected {}x{}",
                            category.asset_name(index),
                            bitmap.width,
                            bitmap.height,
                            d.0,
                            d.1
                        )));
                    }
                    Some(_) => {}
                }
                by_key.insert((category, index), bitmap);
            }
        }

        let (width, height) = dims.ok_or_else(|| AdorableError::asset("feature set is empty"))?;
        tracing::debug!(variants = by_key.len(), width, height, "prepared feature set");
        Ok(Self {
            width,
            height,
            by_key,
        })
    }

    /// Decode the compiled-in feature set.
    pub fn bundled() -> AdorableResult<Self> {
        Self::prepare(&BundledFeatures)
    }

    /// Shared dimensions of every variant.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl FeatureStore for PreparedFeatures {
    fn feature(&self, category: FeatureCategory, index: u32) -> AdorableResult<FeatureBitmap> {
        self.by_key
            .get(&(category, index))
            .cloned()
            .ok_or_else(|| {
                AdorableError::asset(format!(
                    "missing prepared asset '{}'",
                    category.asset_name(index)
                ))
            })
    }
}

/// Draw a variant of `category` and resolve its bitmap.
pub fn pick_feature<S: ByteSource + ?Sized>(
    src: &mut S,
    category: FeatureCategory,
    store: &dyn FeatureStore,
) -> AdorableResult<(u32, FeatureBitmap)> {
    let index = pick_variant(src, category)?;
    let bitmap = store.feature(category, index)?;
    Ok((index, bitmap))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;

use std::fmt;
use std::str::FromStr;

use crate::{
    foundation::error::{AdorableError, AdorableResult},
    random::{sampler::next_below, stream::ByteSource},
};

/// Facial feature layer. Variants are listed in composite (and sampling) order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    /// Eye pair, drawn first.
    Eyes,
    /// Nose, drawn over the eyes.
    Nose,
    /// Mouth, drawn last.
    Mouth,
}

/// Static description of one feature category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Category this row describes.
    pub category: FeatureCategory,
    /// Asset file prefix, e.g. `eyes` for `eyes3.png`.
    pub name: &'static str,
    /// Number of bundled variants.
    pub variants: u32,
}

/// The fixed feature table. Row order is the draw order and the composite order.
pub static CATEGORIES: [CategoryInfo; 3] = [
    CategoryInfo {
        category: FeatureCategory::Eyes,
        name: "eyes",
        variants: 9,
    },
    CategoryInfo {
        category: FeatureCategory::Nose,
        name: "nose",
        variants: 8,
    },
    CategoryInfo {
        category: FeatureCategory::Mouth,
        name: "mouth",
        variants: 8,
    },
];

impl FeatureCategory {
    /// All categories in composite order.
    pub const ALL: [Self; 3] = [Self::Eyes, Self::Nose, Self::Mouth];

    /// Table row for this category.
    pub fn info(self) -> &'static CategoryInfo {
        &CATEGORIES[self.layer()]
    }

    /// Zero-based position in the composite order.
    pub fn layer(self) -> usize {
        match self {
            Self::Eyes => 0,
            Self::Nose => 1,
            Self::Mouth => 2,
        }
    }

    /// Asset name prefix.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Number of available variants.
    pub fn variants(self) -> u32 {
        self.info().variants
    }

    /// Bundled file name of a variant, e.g. `nose4.png`.
    pub fn asset_name(self, index: u32) -> String {
        format!("{}{index}.png", self.name())
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureCategory {
    type Err = AdorableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORIES
            .iter()
            .find(|row| row.name == s)
            .map(|row| row.category)
            .ok_or_else(|| AdorableError::validation(format!("unknown feature category '{s}'")))
    }
}

/// Draw a variant index for `category`.
pub fn pick_variant<S: ByteSource + ?Sized>(
    src: &mut S,
    category: FeatureCategory,
) -> AdorableResult<u32> {
    let v = next_below(src, u64::from(category.variants()))?;
    // bounded by `variants`, which is a u32
    Ok(v as u32)
}

macro_rules! bundled {
    ($($file:literal),* $(,)?) => {
        &[$(
            (
                $file,
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/bodyparts/", $file))
                    as &[u8],
            ),
        )*]
    };
}

static BUNDLED: &[(&str, &[u8])] = bundled![
    "eyes0.png",
    "eyes1.png",
    "eyes2.png",
    "eyes3.png",
    "eyes4.png",
    "eyes5.png",
    "eyes6.png",
    "eyes7.png",
    "eyes8.png",
    "nose0.png",
    "nose1.png",
    "nose2.png",
    "nose3.png",
    "nose4.png",
    "nose5.png",
    "nose6.png",
    "nose7.png",
    "mouth0.png",
    "mouth1.png",
    "mouth2.png",
    "mouth3.png",
    "mouth4.png",
    "mouth5.png",
    "mouth6.png",
    "mouth7.png",
];

/// Encoded PNG bytes compiled into the library, keyed by asset file name.
pub fn bundled_asset(name: &str) -> Option<&'static [u8]> {
    BUNDLED
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(_, bytes)| *bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/catalog.rs"]
mod tests;

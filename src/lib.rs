//! adorable derives small cartoon avatars from a seed.
//!
//! The same seed always yields the same PNG bytes; different seeds vary the background color
//! and the eyes, nose and mouth layers.
//!
//! # Pipeline overview
//!
//! 1. **Expand**: `seed -> KeyStream` (HKDF over SHA3-256, empty salt and info)
//! 2. **Select**: background color (HCL, clamped to sRGB), then one variant per feature in the
//!    order eyes, nose, mouth, all drawn from the same stream
//! 3. **Composite**: fill with the background, then source-over each feature layer
//! 4. **Encode**: PNG, 8-bit RGBA
//!
//! The order of stream draws is part of the output contract. An explicit background color
//! still consumes the color draws, so fixed-color avatars share their features with the
//! auto-color avatar of the same seed.
//!
//! # Getting started
//!
//! ```no_run
//! let png = adorable::from_seed(b"alice@example.com")?;
//! std::fs::write("alice.png", png)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod color;
mod foundation;
mod random;

/// Seed-to-avatar pipeline.
pub mod avatar;
/// Output encoding.
pub mod encode;
/// Canvas and compositing.
pub mod render;

pub use assets::catalog::{
    CATEGORIES, CategoryInfo, FeatureCategory, bundled_asset, pick_variant,
};
pub use assets::decode::decode_image;
pub use assets::store::{
    BundledFeatures, FeatureBitmap, FeatureStore, PreparedFeatures, pick_feature,
};
pub use avatar::config::GeneratorConfig;
pub use avatar::generator::{
    AvatarSpec, Generator, RANDOM_SEED_LEN, from_seed, from_seed_with_color, random,
    random_seed, random_with_color,
};
pub use color::hcl::{Hcl, Srgb};
pub use color::pick::{ColorBounds, UnitRange, pick_color};
pub use encode::png::encode_png;
pub use foundation::core::{Rgba8, Rgba8Premul};
pub use foundation::error::{AdorableError, AdorableResult};
pub use random::sampler::{next_below, next_f64};
pub use random::stream::{ByteSource, KeyStream, MAX_STREAM_LEN};
pub use render::canvas::{Canvas, compose, compose_layers};

use std::sync::Arc;

use rand::RngCore;

use crate::{
    assets::catalog::{FeatureCategory, pick_variant},
    assets::store::{BundledFeatures, FeatureStore, pick_feature},
    avatar::config::GeneratorConfig,
    color::pick::pick_color,
    encode::png::encode_png,
    foundation::core::Rgba8,
    foundation::error::{AdorableError, AdorableResult},
    random::stream::KeyStream,
    render::canvas::{Canvas, compose},
};

/// Length of seeds drawn from the operating system.
pub const RANDOM_SEED_LEN: usize = 32;

/// Everything the stream decided for one avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AvatarSpec {
    /// Background color.
    pub color: Rgba8,
    /// Eyes variant index.
    pub eyes: u32,
    /// Nose variant index.
    pub nose: u32,
    /// Mouth variant index.
    pub mouth: u32,
}

impl AvatarSpec {
    /// Variant index chosen for `category`.
    pub fn variant(&self, category: FeatureCategory) -> u32 {
        match category {
            FeatureCategory::Eyes => self.eyes,
            FeatureCategory::Nose => self.nose,
            FeatureCategory::Mouth => self.mouth,
        }
    }

    fn set_variant(&mut self, category: FeatureCategory, index: u32) {
        match category {
            FeatureCategory::Eyes => self.eyes = index,
            FeatureCategory::Nose => self.nose = index,
            FeatureCategory::Mouth => self.mouth = index,
        }
    }
}

/// Deterministic avatar generator.
///
/// A generator is immutable and cheap to clone; one instance can serve many threads.
#[derive(Clone)]
pub struct Generator {
    config: GeneratorConfig,
    store: Arc<dyn FeatureStore>,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            store: Arc::new(BundledFeatures),
        }
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Generator {
    /// Generator over the bundled feature set.
    pub fn new(config: GeneratorConfig) -> AdorableResult<Self> {
        Self::with_store(config, Arc::new(BundledFeatures))
    }

    /// Generator over a caller-provided feature store.
    pub fn with_store(config: GeneratorConfig, store: Arc<dyn FeatureStore>) -> AdorableResult<Self> {
        config.validate()?;
        Ok(Self { config, store })
    }

    /// Active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Derive the avatar selection for `seed` without rendering it.
    pub fn derive(&self, seed: &[u8]) -> AdorableResult<AvatarSpec> {
        self.select(seed, None)
    }

    /// Derive the selection for `seed` with a fixed background.
    ///
    /// The color draws still happen, so the features match [`Generator::derive`] for the same
    /// seed.
    pub fn derive_with_color(&self, seed: &[u8], color: Rgba8) -> AdorableResult<AvatarSpec> {
        self.select(seed, Some(color))
    }

    /// Composite the layers named by `spec`.
    pub fn render(&self, spec: &AvatarSpec) -> AdorableResult<Canvas> {
        for category in FeatureCategory::ALL {
            let index = spec.variant(category);
            if index >= category.variants() {
                return Err(AdorableError::validation(format!(
                    "{category} variant {index} out of range (have {})",
                    category.variants()
                )));
            }
        }

        let eyes = self.store.feature(FeatureCategory::Eyes, spec.eyes)?;
        let nose = self.store.feature(FeatureCategory::Nose, spec.nose)?;
        let mouth = self.store.feature(FeatureCategory::Mouth, spec.mouth)?;
        compose(spec.color, &eyes, &nose, &mouth)
    }

    /// PNG avatar for `seed`.
    #[tracing::instrument(skip(self, seed), fields(seed_len = seed.len()))]
    pub fn from_seed(&self, seed: &[u8]) -> AdorableResult<Vec<u8>> {
        encode_png(&self.assemble(seed, None)?)
    }

    /// PNG avatar for `seed` on a fixed background.
    #[tracing::instrument(skip(self, seed), fields(seed_len = seed.len(), color = %color))]
    pub fn from_seed_with_color(&self, seed: &[u8], color: Rgba8) -> AdorableResult<Vec<u8>> {
        encode_png(&self.assemble(seed, Some(color))?)
    }

    /// PNG avatar from a fresh OS-random seed.
    pub fn random(&self) -> AdorableResult<Vec<u8>> {
        self.from_seed(&random_seed()?)
    }

    /// PNG avatar from a fresh OS-random seed on a fixed background.
    pub fn random_with_color(&self, color: Rgba8) -> AdorableResult<Vec<u8>> {
        self.from_seed_with_color(&random_seed()?, color)
    }

    fn select(&self, seed: &[u8], color: Option<Rgba8>) -> AdorableResult<AvatarSpec> {
        let mut stream = KeyStream::expand(seed);
        let drawn = pick_color(&mut stream, &self.config.colors)?;

        let mut spec = AvatarSpec {
            color: color.unwrap_or(drawn),
            eyes: 0,
            nose: 0,
            mouth: 0,
        };
        for category in FeatureCategory::ALL {
            spec.set_variant(category, pick_variant(&mut stream, category)?);
        }

        tracing::debug!(
            color = %spec.color,
            eyes = spec.eyes,
            nose = spec.nose,
            mouth = spec.mouth,
            consumed = stream.consumed(),
            "derived avatar"
        );
        Ok(spec)
    }

    // Same draw order as `select`, resolving each bitmap as its variant is drawn.
    fn assemble(&self, seed: &[u8], color: Option<Rgba8>) -> AdorableResult<Canvas> {
        let mut stream = KeyStream::expand(seed);
        let drawn = pick_color(&mut stream, &self.config.colors)?;
        let color = color.unwrap_or(drawn);

        let store = self.store.as_ref();
        let (eyes_index, eyes) = pick_feature(&mut stream, FeatureCategory::Eyes, store)?;
        let (nose_index, nose) = pick_feature(&mut stream, FeatureCategory::Nose, store)?;
        let (mouth_index, mouth) = pick_feature(&mut stream, FeatureCategory::Mouth, store)?;

        tracing::debug!(
            color = %color,
            eyes = eyes_index,
            nose = nose_index,
            mouth = mouth_index,
            consumed = stream.consumed(),
            "assembled avatar"
        );
        compose(color, &eyes, &nose, &mouth)
    }
}

/// Draw a fresh seed from the operating system.
pub fn random_seed() -> AdorableResult<[u8; RANDOM_SEED_LEN]> {
    let mut seed = [0u8; RANDOM_SEED_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut seed)
        .map_err(|e| AdorableError::entropy(e.to_string()))?;
    Ok(seed)
}

/// PNG avatar from a fresh OS-random seed, default configuration.
pub fn random() -> AdorableResult<Vec<u8>> {
    Generator::default().random()
}

/// PNG avatar from a fresh OS-random seed on a fixed background.
pub fn random_with_color(color: Rgba8) -> AdorableResult<Vec<u8>> {
    Generator::default().random_with_color(color)
}

/// PNG avatar for `seed`, default configuration.
pub fn from_seed(seed: &[u8]) -> AdorableResult<Vec<u8>> {
    Generator::default().from_seed(seed)
}

/// PNG avatar for `seed` on a fixed background.
pub fn from_seed_with_color(seed: &[u8], color: Rgba8) -> AdorableResult<Vec<u8>> {
    Generator::default().from_seed_with_color(seed, color)
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/generator.rs"]
mod tests;

use std::path::Path;

use anyhow::Context;

use crate::{
    color::pick::ColorBounds,
    foundation::error::{AdorableError, AdorableResult},
};

/// Tunables for [`crate::Generator`].
///
/// ```json
/// { "colors": { "saturation": { "min": 0.5, "max": 1.0 },
///               "value": { "min": 0.5, "max": 0.9 } } }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Bounds for randomly drawn backgrounds.
    pub colors: ColorBounds,
}

impl GeneratorConfig {
    /// Check every bound.
    pub fn validate(&self) -> AdorableResult<()> {
        self.colors.validate()
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> AdorableResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| AdorableError::validation(format!("parse generator config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> AdorableResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read generator config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/config.rs"]
mod tests;

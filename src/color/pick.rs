use crate::{
    color::hcl::Hcl,
    foundation::core::Rgba8,
    foundation::error::{AdorableError, AdorableResult},
    random::{sampler::next_f64, stream::ByteSource},
};

/// Inclusive range used to scale a uniform draw.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UnitRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl UnitRange {
    /// Build a range, rejecting non-finite or inverted bounds.
    pub fn new(min: f64, max: f64) -> AdorableResult<Self> {
        let r = Self { min, max };
        r.validate()?;
        Ok(r)
    }

    /// Check that both ends are finite and `min <= max`.
    pub fn validate(&self) -> AdorableResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(AdorableError::validation("range bounds must be finite"));
        }
        if self.min > self.max {
            return Err(AdorableError::validation(format!(
                "range min {} must be <= max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Map `t` in `[0, 1]` onto the range.
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t
    }
}

/// Chroma and lightness ranges for random backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorBounds {
    /// Chroma range.
    pub saturation: UnitRange,
    /// Lightness range.
    pub value: UnitRange,
}

impl Default for ColorBounds {
    fn default() -> Self {
        Self {
            saturation: UnitRange { min: 0.5, max: 1.0 },
            value: UnitRange { min: 0.5, max: 0.9 },
        }
    }
}

impl ColorBounds {
    /// Validate both ranges.
    pub fn validate(&self) -> AdorableResult<()> {
        self.saturation.validate()?;
        self.value.validate()
    }
}

/// Pick a random opaque background color.
///
/// Draws hue, chroma and lightness fractions in that order; callers that override the color
/// still call this so later draws land on the same stream offset.
pub fn pick_color<S: ByteSource + ?Sized>(
    src: &mut S,
    bounds: &ColorBounds,
) -> AdorableResult<Rgba8> {
    let hue = 360.0 * next_f64(src)?;
    let chroma = bounds.saturation.lerp(next_f64(src)?);
    let lightness = bounds.value.lerp(next_f64(src)?);

    let hcl = Hcl {
        h: hue,
        c: chroma,
        l: lightness,
    };
    Ok(hcl.to_srgb().to_rgba8_truncated())
}

#[cfg(test)]
#[path = "../../tests/unit/color/pick.rs"]
mod tests;

//! HCL (polar CIE L*a*b*) to sRGB conversion.
//!
//! Lightness and chroma use the `[0, 1]` scale rather than the usual `[0, 100]`; the white
//! reference is D65.

use crate::foundation::core::Rgba8;

const D65: [f64; 3] = [0.95047, 1.00000, 1.08883];
const DEG_TO_RAD: f64 = 0.017_453_292_519_943_295;

/// A color in the cylindrical HCL space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hcl {
    /// Hue in degrees.
    pub h: f64,
    /// Chroma, nominally `[0, 1]`.
    pub c: f64,
    /// Lightness, `[0, 1]`.
    pub l: f64,
}

/// Gamma-encoded sRGB with unclamped channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Srgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Hcl {
    /// Convert to sRGB. Results may fall outside `[0, 1]` for colors outside the gamut.
    pub fn to_srgb(self) -> Srgb {
        let hr = DEG_TO_RAD * self.h;
        let a = self.c * hr.cos();
        let b = self.c * hr.sin();
        let (x, y, z) = lab_to_xyz(self.l, a, b);
        let (r, g, bl) = xyz_to_linear_rgb(x, y, z);
        Srgb {
            r: delinearize(r),
            g: delinearize(g),
            b: delinearize(bl),
        }
    }
}

impl Srgb {
    /// Clip every channel into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Scale by 255 and truncate, producing an opaque color.
    pub fn to_rgba8_truncated(self) -> Rgba8 {
        let c = self.clamped();
        Rgba8::opaque(
            (255.0 * c.r) as u8,
            (255.0 * c.g) as u8,
            (255.0 * c.b) as u8,
        )
    }
}

fn lab_finv(t: f64) -> f64 {
    if t > 6.0 / 29.0 {
        t * t * t
    } else {
        3.0 * 6.0 / 29.0 * 6.0 / 29.0 * (t - 4.0 / 29.0)
    }
}

fn lab_to_xyz(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l2 = (l + 0.16) / 1.16;
    (
        D65[0] * lab_finv(l2 + a / 5.0),
        D65[1] * lab_finv(l2),
        D65[2] * lab_finv(l2 - b / 2.0),
    )
}

fn xyz_to_linear_rgb(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    (
        3.240_969_941_904_521_4 * x - 1.537_383_177_570_093_5 * y - 0.498_610_760_293_003_28 * z,
        -0.969_243_636_280_879_83 * x + 1.875_967_501_507_720_7 * y + 0.041_555_057_407_175_613 * z,
        0.055_630_079_696_993_609 * x - 0.203_976_958_888_976_57 * y + 1.056_971_514_242_878_6 * z,
    )
}

fn delinearize(v: f64) -> f64 {
    if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hcl.rs"]
mod tests;

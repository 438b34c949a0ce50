use crate::{
    assets::store::FeatureBitmap,
    foundation::core::Rgba8,
    foundation::error::{AdorableError, AdorableResult},
    render::composite::{fill_in_place, over_in_place},
};

/// Composited avatar pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl Canvas {
    /// A transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Premultiplied pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Overwrite the whole canvas with `color` at full opacity; its alpha is ignored.
    pub fn fill(&mut self, color: Rgba8) {
        let opaque = Rgba8 { a: 255, ..color };
        fill_in_place(&mut self.data, opaque.premultiplied().to_array());
    }

    /// Source-over the straight-alpha `layer` onto the canvas. The layer must match the canvas
    /// size.
    pub fn draw(&mut self, layer: &FeatureBitmap) -> AdorableResult<()> {
        if layer.dimensions() != (self.width, self.height) {
            return Err(AdorableError::asset(format!(
                "layer is {}x{}, canvas is {}x{}",
                layer.width, layer.height, self.width, self.height
            )));
        }
        over_in_place(&mut self.data, &layer.rgba8)
    }
}

/// Fill with `color`, then draw `layers` bottom to top.
///
/// The canvas takes the size of the first layer; an empty layer list is an error.
pub fn compose_layers(color: Rgba8, layers: &[&FeatureBitmap]) -> AdorableResult<Canvas> {
    let base = layers
        .first()
        .ok_or_else(|| AdorableError::asset("no feature layers to compose"))?;

    let mut canvas = Canvas::new(base.width, base.height);
    canvas.fill(color);
    for layer in layers {
        canvas.draw(layer)?;
    }
    Ok(canvas)
}

/// Build the avatar canvas: background, eyes, nose, mouth.
pub fn compose(
    color: Rgba8,
    eyes: &FeatureBitmap,
    nose: &FeatureBitmap,
    mouth: &FeatureBitmap,
) -> AdorableResult<Canvas> {
    compose_layers(color, &[eyes, nose, mouth])
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;

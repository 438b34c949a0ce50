//! Layer compositing onto the avatar canvas.

/// Output canvas and the fixed layering sequence.
pub mod canvas;
/// Premultiplied RGBA8 blend primitives.
pub mod composite;

//! Output container encoding.

/// PNG serialization of a finished canvas.
pub mod png;

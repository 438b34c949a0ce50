/// Convenience result type used across adorable.
pub type AdorableResult<T> = Result<T, AdorableError>;

/// Top-level error taxonomy used by the avatar pipeline.
///
/// Every variant except [`AdorableError::Validation`] indicates either an unusable host
/// (no entropy) or a broken build (bad bundled assets); callers are not expected to recover.
#[derive(thiserror::Error, Debug)]
pub enum AdorableError {
    /// Invalid caller-provided input.
    #[error("validation error: {0}")]
    Validation(String),

    /// The operating system random source could not produce a seed.
    #[error("entropy error: {0}")]
    Entropy(String),

    /// A bundled feature bitmap is missing, corrupt or has the wrong shape.
    #[error("asset error: {0}")]
    Asset(String),

    /// The derived byte stream ran past the key-derivation output limit.
    #[error("stream exhausted: requested {requested} bytes with {remaining} remaining")]
    StreamExhausted {
        /// Number of bytes the caller asked for.
        requested: usize,
        /// Number of bytes still available in the stream.
        remaining: usize,
    },

    /// The final canvas could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AdorableError {
    /// Build a [`AdorableError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`AdorableError::Entropy`] value.
    pub fn entropy(msg: impl Into<String>) -> Self {
        Self::Entropy(msg.into())
    }

    /// Build a [`AdorableError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`AdorableError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

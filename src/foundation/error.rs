/// Convenience result type used across mapstack.
pub type StackResult<T> = Result<T, StackError>;

/// Top-level error taxonomy used by mapstack APIs.
#[derive(thiserror::Error, Debug)]
pub enum StackError {
    /// Invalid registry construction input.
    #[error("validation error: {0}")]
    Validation(String),

    /// An identifier passed to the resolver is not in the z-order registry.
    ///
    /// This is a configuration error: a layer was wired into the UI without
    /// being declared in the draw-order list. It should surface during
    /// development, never in a correctly configured deployment.
    #[error("registry error: {0}")]
    Registry(String),

    /// Errors when serializing or deserializing a registry.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StackError {
    /// Build a [`StackError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StackError::Registry`] value.
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Build a [`StackError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

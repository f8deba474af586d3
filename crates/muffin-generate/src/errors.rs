use thiserror::Error;

/// Errors raised while parsing an attribute kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindError {
    #[error("attribute '{0}' does not reference a factory definition")]
    MissingPrefix(String),
    #[error("attribute '{0}' names an empty factory definition")]
    EmptyDefinition(String),
}

/// Errors emitted by [`crate::RelatedAttributeGenerator::generate_raw`].
#[derive(Debug, Error)]
pub enum GenerationError<E: std::error::Error + 'static> {
    #[error("invalid attribute kind: {0}")]
    Kind(#[from] KindError),
    /// Error returned by the registry, passed through untouched.
    #[error("registry error: {0}")]
    Registry(#[source] E),
}

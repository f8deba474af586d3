use muffin_core::Model;

/// Factory registry that owns definitions and persistence.
///
/// Implemented outside this crate; generators only ask it for models.
pub trait FactoryRegistry {
    type Model: Model;
    type Error: std::error::Error + 'static;

    /// Whether `model` has been, or will be, persisted in the current run.
    fn is_pending_or_saved(&self, model: &Self::Model) -> bool;

    /// Builds and persists a model from the named definition.
    fn create(&mut self, definition: &str) -> Result<Self::Model, Self::Error>;

    /// Builds a model from the named definition without persisting it.
    fn instance(&mut self, definition: &str) -> Result<Self::Model, Self::Error>;
}

use tracing::debug;

use muffin_core::{Identifier, Model};

use crate::errors::GenerationError;
use crate::kind::RelatedAttribute;
use crate::registry::FactoryRegistry;

/// Fills `factory|<definition>` attributes with the identifier of a related model.
///
/// When the owning model is pending or saved the related model is created
/// (and persisted) through the registry; otherwise only an unsaved instance
/// is built. The returned value is that model's [`Model::identifier`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RelatedAttributeGenerator;

impl RelatedAttributeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Registry errors are returned as-is. `Ok(None)` means the related model
    /// exposes no identifier.
    pub fn generate<R: FactoryRegistry>(
        &self,
        attribute: &RelatedAttribute,
        owner: &R::Model,
        registry: &mut R,
    ) -> Result<Option<Identifier>, R::Error> {
        let definition = attribute.definition();
        let persist = registry.is_pending_or_saved(owner);
        debug!(definition, persist, "generating related model");

        let related = if persist {
            registry.create(definition)?
        } else {
            registry.instance(definition)?
        };

        let identifier = related.identifier();
        if identifier.is_none() {
            debug!(definition, "related model has no identifier");
        }
        Ok(identifier)
    }

    /// Parses `raw` as a related attribute kind and generates it.
    pub fn generate_raw<R: FactoryRegistry>(
        &self,
        raw: &str,
        owner: &R::Model,
        registry: &mut R,
    ) -> Result<Option<Identifier>, GenerationError<R::Error>> {
        let attribute = RelatedAttribute::parse(raw)?;
        self.generate(&attribute, owner, registry)
            .map_err(GenerationError::Registry)
    }
}

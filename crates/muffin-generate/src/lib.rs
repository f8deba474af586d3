//! Related-attribute generation for muffin factories.
//!
//! Attributes named `factory|<definition>` are filled with the identifier of
//! a model built from `<definition>` through a [`FactoryRegistry`].

pub mod errors;
pub mod kind;
pub mod registry;
pub mod related;

pub use errors::{GenerationError, KindError};
pub use kind::{AttributeKind, RELATED_PREFIX, RelatedAttribute};
pub use registry::FactoryRegistry;
pub use related::RelatedAttributeGenerator;

//! Core contracts for muffin.
//!
//! This crate defines the identifier and model capability types shared by the
//! generators, plus the settings and logging helpers used by callers.

pub mod error;
pub mod identifier;
pub mod logging;
pub mod model;
pub mod record;
pub mod settings;

pub use error::{Error, Result};
pub use identifier::Identifier;
pub use logging::init_logging;
pub use model::{AccessorResult, KeyAccessor, KeyField, KeyProbe, Model};
pub use record::Record;
pub use settings::{FactorySettings, LogFormat, LoggingSettings, load_settings, parse_settings};

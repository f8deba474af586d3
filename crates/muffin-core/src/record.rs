use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::identifier::Identifier;
use crate::model::{KeyField, Model};

/// Dynamic model made of named JSON attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    definition: String,
    #[serde(default)]
    attributes: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}

// Records have no accessor methods, only attributes.
impl Model for Record {
    fn key_field(&self, field: KeyField) -> Option<Identifier> {
        self.get(field.name()).and_then(Identifier::from_json)
    }
}

use std::collections::BTreeMap;

use thiserror::Error;

use muffin_core::Model;
use muffin_generate::FactoryRegistry;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("no factory definition named '{0}'")]
    UnknownDefinition(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Create,
    Instance,
}

type Builder<M> = Box<dyn Fn(usize) -> M>;

/// Registry keeping definitions as closures and "persisting" into a vector.
pub struct MemoryRegistry<M> {
    definitions: BTreeMap<String, Builder<M>>,
    pub saved: Vec<M>,
    pub calls: Vec<(Call, String)>,
    built: usize,
}

impl<M: Clone + PartialEq + Model> MemoryRegistry<M> {
    pub fn new() -> Self {
        Self {
            definitions: BTreeMap::new(),
            saved: Vec::new(),
            calls: Vec::new(),
            built: 0,
        }
    }

    pub fn define(mut self, name: &str, builder: impl Fn(usize) -> M + 'static) -> Self {
        self.definitions.insert(name.to_string(), Box::new(builder));
        self
    }

    fn build(&mut self, definition: &str) -> Result<M, MemoryError> {
        let builder = self
            .definitions
            .get(definition)
            .ok_or_else(|| MemoryError::UnknownDefinition(definition.to_string()))?;
        self.built += 1;
        Ok(builder(self.built))
    }
}

impl<M: Clone + PartialEq + Model> FactoryRegistry for MemoryRegistry<M> {
    type Model = M;
    type Error = MemoryError;

    fn is_pending_or_saved(&self, model: &M) -> bool {
        self.saved.contains(model)
    }

    fn create(&mut self, definition: &str) -> Result<M, MemoryError> {
        self.calls.push((Call::Create, definition.to_string()));
        let model = self.build(definition)?;
        self.saved.push(model.clone());
        Ok(model)
    }

    fn instance(&mut self, definition: &str) -> Result<M, MemoryError> {
        self.calls.push((Call::Instance, definition.to_string()));
        self.build(definition)
    }
}

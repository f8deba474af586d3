use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// Accessor methods a model may expose to report its own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAccessor {
    /// Key getter (`get_key`).
    GetKey,
    /// Primary-key getter (`pk`).
    Pk,
}

/// Key fields a model may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyField {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "_id")]
    UnderscoreId,
}

impl KeyField {
    pub fn name(self) -> &'static str {
        match self {
            KeyField::Id => "id",
            KeyField::UnderscoreId => "_id",
        }
    }
}

/// Outcome of calling a key accessor on a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorResult {
    /// The model has no such accessor.
    Unsupported,
    /// The accessor exists and returned this value.
    Returned(Option<Identifier>),
}

/// A model produced by a factory definition.
///
/// Implementors describe which key accessors and key fields they have; the
/// default [`Model::identifier`] probes them in [`KeyProbe::default`] order.
/// Types that know their key statically can override `identifier` instead.
pub trait Model {
    fn call_accessor(&self, _accessor: KeyAccessor) -> AccessorResult {
        AccessorResult::Unsupported
    }

    /// Value of a key field, `None` when the field is missing or unset.
    fn key_field(&self, _field: KeyField) -> Option<Identifier> {
        None
    }

    fn identifier(&self) -> Option<Identifier> {
        KeyProbe::default().extract(self)
    }
}

/// Ordered accessor and field lists used to discover a model's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyProbe {
    pub accessors: Vec<KeyAccessor>,
    pub fields: Vec<KeyField>,
}

impl Default for KeyProbe {
    fn default() -> Self {
        Self {
            accessors: vec![KeyAccessor::GetKey, KeyAccessor::Pk],
            fields: vec![KeyField::Id, KeyField::UnderscoreId],
        }
    }
}

impl KeyProbe {
    /// Accessors win over fields. The first accessor the model supports
    /// decides the result even when it returns `None`.
    pub fn extract<M: Model + ?Sized>(&self, model: &M) -> Option<Identifier> {
        for accessor in &self.accessors {
            if let AccessorResult::Returned(value) = model.call_accessor(*accessor) {
                return value;
            }
        }

        self.fields.iter().find_map(|field| model.key_field(*field))
    }
}

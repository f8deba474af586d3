use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of a generated model, as stored in a foreign-key attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Int(i64),
    UInt(u64),
    Text(String),
}

impl Identifier {
    /// Reads an identifier out of a JSON attribute value.
    ///
    /// Only integers and strings qualify; null, floats, booleans and
    /// containers are treated as "not set". Integers above `i64::MAX` keep
    /// their unsigned value.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number
                .as_i64()
                .map(Identifier::Int)
                .or_else(|| number.as_u64().map(Identifier::UInt)),
            Value::String(text) => Some(Identifier::Text(text.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Int(value) => write!(f, "{value}"),
            Identifier::UInt(value) => write!(f, "{value}"),
            Identifier::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Int(value)
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Identifier::UInt(value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Text(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

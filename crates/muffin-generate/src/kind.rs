use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::KindError;

/// Prefix marking an attribute as a reference to another factory definition.
pub const RELATED_PREFIX: &str = "factory|";

/// Attribute whose value is the identifier of a model from another definition.
///
/// Serialized as its raw `factory|<definition>` form; deserializing goes
/// through [`RelatedAttribute::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelatedAttribute {
    definition: String,
}

impl RelatedAttribute {
    pub fn parse(raw: &str) -> Result<Self, KindError> {
        let definition = raw
            .strip_prefix(RELATED_PREFIX)
            .ok_or_else(|| KindError::MissingPrefix(raw.to_string()))?;
        if definition.is_empty() {
            return Err(KindError::EmptyDefinition(raw.to_string()));
        }
        Ok(Self {
            definition: definition.to_string(),
        })
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }
}

impl fmt::Display for RelatedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{RELATED_PREFIX}{}", self.definition)
    }
}

impl TryFrom<String> for RelatedAttribute {
    type Error = KindError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<RelatedAttribute> for String {
    fn from(attribute: RelatedAttribute) -> Self {
        attribute.to_string()
    }
}

/// Attribute kinds as seen by the generator dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeKind {
    Related(RelatedAttribute),
    /// Anything else, left to the caller's own generators.
    Plain(String),
}

impl AttributeKind {
    pub fn parse(raw: &str) -> Result<Self, KindError> {
        if raw.starts_with(RELATED_PREFIX) {
            return RelatedAttribute::parse(raw).map(AttributeKind::Related);
        }
        Ok(AttributeKind::Plain(raw.to_string()))
    }

    pub fn is_related(&self) -> bool {
        matches!(self, AttributeKind::Related(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_stripped() {
        let attribute = RelatedAttribute::parse("factory|author").expect("parse kind");
        assert_eq!(attribute.definition(), "author");
        assert_eq!(attribute.to_string(), "factory|author");
    }

    #[test]
    fn definition_keeps_inner_separators() {
        let attribute = RelatedAttribute::parse("factory|blog|post").expect("parse kind");
        assert_eq!(attribute.definition(), "blog|post");
    }

    #[test]
    fn missing_prefix_is_rejected() {
        assert_eq!(
            RelatedAttribute::parse("author"),
            Err(KindError::MissingPrefix("author".to_string()))
        );
        assert!(matches!(
            RelatedAttribute::parse("Factory|author"),
            Err(KindError::MissingPrefix(_))
        ));
    }

    #[test]
    fn empty_definition_is_rejected() {
        assert_eq!(
            RelatedAttribute::parse("factory|"),
            Err(KindError::EmptyDefinition("factory|".to_string()))
        );
    }

    #[test]
    fn serde_uses_the_raw_form() {
        let attribute = RelatedAttribute::parse("factory|author").expect("parse kind");
        let encoded = serde_json::to_string(&attribute).expect("serialize kind");
        assert_eq!(encoded, r#""factory|author""#);

        let decoded: RelatedAttribute = serde_json::from_str(&encoded).expect("deserialize kind");
        assert_eq!(decoded, attribute);
    }

    #[test]
    fn deserializing_enforces_parse_rules() {
        assert!(serde_json::from_str::<RelatedAttribute>(r#""factory|""#).is_err());
        assert!(serde_json::from_str::<RelatedAttribute>(r#""author""#).is_err());
        assert!(serde_json::from_str::<RelatedAttribute>(r#"{"definition":"author"}"#).is_err());
    }

    #[test]
    fn plain_kinds_pass_through() {
        let kind = AttributeKind::parse("email").expect("parse kind");
        assert_eq!(kind, AttributeKind::Plain("email".to_string()));
        assert!(!kind.is_related());

        let kind = AttributeKind::parse("factory|user").expect("parse kind");
        assert!(kind.is_related());
        assert!(AttributeKind::parse("factory|").is_err());
    }
}

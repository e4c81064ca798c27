//! Serde helpers for term-valued fields.
//!
//! [`Term`] serializes as its qualified name out of the box; deserializing
//! needs a registry to turn the string back into the shared instance, so the
//! `Deserialize` side lives here as `#[serde(with = ...)]` modules bound to
//! [`default_registry`]:
//!
//! ```
//! use serde::Deserialize;
//! use vocab_registry::{Term, serde_support};
//!
//! #[derive(Deserialize)]
//! struct FieldMapping {
//!     #[serde(with = "serde_support::property")]
//!     source: Term,
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use vocab_model::Term;

use crate::registry::default_registry;

/// Terms resolved in both spaces, class terms first.
pub mod term {
    use super::*;

    pub fn serialize<S: Serializer>(term: &Term, serializer: S) -> Result<S::Ok, S::Error> {
        term.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Term, D::Error> {
        let spelling = String::deserialize(deserializer)?;
        default_registry().resolve(&spelling).map_err(de::Error::custom)
    }
}

/// Terms resolved in the class space only.
pub mod class {
    use super::*;

    pub fn serialize<S: Serializer>(term: &Term, serializer: S) -> Result<S::Ok, S::Error> {
        term.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Term, D::Error> {
        let spelling = String::deserialize(deserializer)?;
        default_registry().resolve_class(&spelling).map_err(de::Error::custom)
    }
}

/// Terms resolved in the property space only.
pub mod property {
    use super::*;

    pub fn serialize<S: Serializer>(term: &Term, serializer: S) -> Result<S::Ok, S::Error> {
        term.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Term, D::Error> {
        let spelling = String::deserialize(deserializer)?;
        default_registry().resolve_property(&spelling).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use vocab_model::Term;

    #[derive(Debug, Serialize, Deserialize)]
    struct Mapping {
        #[serde(with = "super::property")]
        source: Term,
    }

    #[test]
    fn round_trips_through_the_qualified_name() {
        let json = r#"{"source":"dwc:scientificName"}"#;
        let mapping: Mapping = serde_json::from_str(json).unwrap();
        assert_eq!(
            mapping.source.qualified_name(),
            "http://rs.tdwg.org/dwc/terms/scientificName"
        );

        let out = serde_json::to_string(&mapping).unwrap();
        assert_eq!(out, r#"{"source":"http://rs.tdwg.org/dwc/terms/scientificName"}"#);
    }

    #[test]
    fn rejects_blank_spellings() {
        let err = serde_json::from_str::<Mapping>(r#"{"source":"  "}"#).unwrap_err();
        assert!(err.to_string().contains("blank"));
    }
}

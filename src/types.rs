//! Common types used throughout the SWAPI client
//!
//! This module contains the resource kind tag, its static registry,
//! and the JSON type aliases shared by the transport and record layers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, the shape of a single item payload
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Resource Kind
// ============================================================================

/// Upstream resource category an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// `/people/`
    Person,
    /// `/films/`
    Film,
}

/// Static per-kind registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Path segment under the API root
    pub path: &'static str,
    /// Payload field used as the human-readable label
    pub label_field: &'static str,
    /// Prefix used when rendering a display label
    pub display_prefix: &'static str,
}

const PERSON_SPEC: ResourceSpec = ResourceSpec {
    path: "people",
    label_field: "name",
    display_prefix: "Person",
};

const FILM_SPEC: ResourceSpec = ResourceSpec {
    path: "films",
    label_field: "title",
    display_prefix: "Film",
};

impl ResourceKind {
    /// All known kinds
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Person, ResourceKind::Film];

    /// Registry entry for this kind
    pub fn spec(self) -> &'static ResourceSpec {
        match self {
            ResourceKind::Person => &PERSON_SPEC,
            ResourceKind::Film => &FILM_SPEC,
        }
    }

    /// Path segment under the API root (`people`, `films`)
    pub fn path(self) -> &'static str {
        self.spec().path
    }

    /// Field carrying the display label (`name`, `title`)
    pub fn label_field(self) -> &'static str {
        self.spec().label_field
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().display_prefix)
    }
}

impl FromStr for ResourceKind {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "person" | "people" => Ok(ResourceKind::Person),
            "film" | "films" => Ok(ResourceKind::Film),
            other => Err(crate::error::Error::config(format!(
                "Unknown resource kind: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("person", ResourceKind::Person ; "singular person")]
    #[test_case("People", ResourceKind::Person ; "plural people")]
    #[test_case("film", ResourceKind::Film ; "singular film")]
    #[test_case(" FILMS ", ResourceKind::Film ; "padded plural films")]
    fn test_parse_kind(input: &str, expected: ResourceKind) {
        assert_eq!(input.parse::<ResourceKind>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "starships".parse::<ResourceKind>().unwrap_err();
        assert!(err.to_string().contains("starships"));
    }

    #[test]
    fn test_registry() {
        assert_eq!(ResourceKind::Person.path(), "people");
        assert_eq!(ResourceKind::Person.label_field(), "name");
        assert_eq!(ResourceKind::Film.path(), "films");
        assert_eq!(ResourceKind::Film.label_field(), "title");
        assert_eq!(ResourceKind::Film.to_string(), "Film");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ResourceKind::Person).unwrap();
        assert_eq!(json, "\"person\"");
        let kind: ResourceKind = serde_json::from_str("\"film\"").unwrap();
        assert_eq!(kind, ResourceKind::Film);
    }
}

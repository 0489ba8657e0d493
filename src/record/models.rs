//! Typed views over SWAPI payloads
//!
//! Every known field is optional so that partial payloads still parse.
//! Unknown fields are kept in `extra`.

use super::Record;
use crate::error::{Error, Result};
use crate::types::{JsonObject, ResourceKind};
use serde::{Deserialize, Serialize};

/// A person from `/people/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub mass: Option<String>,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub skin_color: Option<String>,
    #[serde(default)]
    pub eye_color: Option<String>,
    #[serde(default)]
    pub birth_year: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub homeworld: Option<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A film from `/films/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Film {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub episode_id: Option<u32>,
    #[serde(default)]
    pub opening_crawl: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub producer: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl TryFrom<&Record> for Person {
    type Error = Error;

    fn try_from(record: &Record) -> Result<Self> {
        record.expect_kind(ResourceKind::Person)?;
        record.parse()
    }
}

impl TryFrom<&Record> for Film {
    type Error = Error;

    fn try_from(record: &Record) -> Result<Self> {
        record.expect_kind(ResourceKind::Film)?;
        record.parse()
    }
}

//! Flat records consumed by the global search ranker
//!
//! Unlike full [`Property`](crate::Property) records these are shallow: one
//! row per searchable entity (complex, district, developer, street), with a
//! keyword list and just enough context to render a suggestion.

use serde::{Deserialize, Serialize};

/// What kind of entity a search index row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchDomain {
    ResidentialComplex,
    District,
    Developer,
    Street,
}

/// One row of the global search index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchIndexRecord {
    pub id: i64,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: SearchDomain,

    /// Canonical page for this entity.
    pub url: String,

    /// Alternate spellings and colloquial names, matched case-insensitively.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Context: set for complexes and streets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Context: set for complexes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
}

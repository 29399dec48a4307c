//! Property and residential-complex records
//!
//! Shapes mirror the JSON the surrounding system already persists: catalog
//! feeds use snake_case keys with a number of legacy spellings, so several
//! fields carry serde aliases. Optional keys are explicit `Option<T>`.

use serde::{Deserialize, Serialize};

/// A real-estate unit offered for sale.
///
/// Records are read-only for the engine: computed presentation fields
/// (cashback) are attached to copies, never to the catalog record itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    /// Stable unique identifier.
    pub id: i64,

    /// Listing title, e.g. "2-комнатная квартира, 54 м²".
    #[serde(default)]
    pub title: String,

    /// Number of rooms; 0 denotes a studio.
    #[serde(default)]
    pub rooms: i64,

    /// Secondary room classification ("2-комн", "студия", "4+-комн").
    ///
    /// Coexists with `rooms` and may disagree with it in source data; room
    /// filters honor both fields independently, so keep them in sync at
    /// ingestion rather than deriving one from the other here.
    #[serde(default, rename = "type")]
    pub unit_type: Option<String>,

    /// apartment / townhouse / house / penthouse / studio.
    #[serde(default)]
    pub property_type: String,

    /// Free-form class: comfort / business / premium / ...
    #[serde(default)]
    pub property_class: String,

    #[serde(default)]
    pub wall_material: String,

    /// Area in m².
    #[serde(default)]
    pub area: f64,

    #[serde(default)]
    pub floor: i64,

    #[serde(default)]
    pub total_floors: i64,

    /// Price in whole currency units.
    #[serde(default)]
    pub price: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_sqm: Option<i64>,

    #[serde(default)]
    pub mortgage_available: bool,

    pub district: String,

    /// Free-form location string, e.g. "ул. Красная, 45".
    #[serde(default)]
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// Developer name; matching is by string equality, there is no foreign key.
    #[serde(default)]
    pub developer: String,

    /// Complex name; some feeds spell this `residential_complex`.
    #[serde(default, alias = "residential_complex")]
    pub complex_name: String,

    /// Complex id; absent in older feeds, which link by name only.
    #[serde(
        default,
        alias = "residential_complex_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub complex_id: Option<i64>,

    #[serde(default)]
    pub features: Vec<String>,

    /// available / sold / reserved.
    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling_height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

fn default_status() -> String {
    "available".to_string()
}

impl Property {
    /// Human-readable room description used on listing cards and in
    /// free-text search haystacks.
    pub fn room_description(&self) -> String {
        match self.rooms {
            0 => "Студия".to_string(),
            1 => "1-комнатная".to_string(),
            n @ 2..=4 => format!("{n}-комнатная"),
            n => format!("{n}-комн."),
        }
    }
}

/// A building project grouping zero or more properties.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResidentialComplex {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub developer: String,
    /// Entry price across the complex's units, whole currency units.
    #[serde(default)]
    pub price_from: i64,
    #[serde(default)]
    pub cashback_percent: f64,
    #[serde(default)]
    pub apartments_count: i64,
}

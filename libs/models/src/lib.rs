//! Property catalog data models
//!
//! This crate provides the record types shared by the search engine and its
//! callers, plus the catalog snapshot the engine operates on.
//!
//! # Module Organization
//!
//! - `property`: Property and ResidentialComplex records
//! - `search_index`: flat records consumed by the global search ranker
//! - `catalog`: immutable catalog snapshots and the provider trait
//!
//! # Design Philosophy
//!
//! - **Loosely-shaped input, strongly-typed core**: catalog feeds carry
//!   optional and inconsistently-named fields; every optional field is an
//!   explicit `Option<T>` rather than a sentinel value
//! - **Read-only records**: the engine never mutates a catalog record;
//!   presentation-facing copies carry computed fields instead
//! - **Compatible**: serializes to/from the JSON shapes the surrounding
//!   system already persists

mod catalog;
mod error;
mod property;
mod search_index;

pub use catalog::{Catalog, CatalogProvider, StaticCatalog};
pub use error::{Error, Result};
pub use property::{Property, ResidentialComplex};
pub use search_index::{SearchDomain, SearchIndexRecord};

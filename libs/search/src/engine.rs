//! Search facade
//!
//! Composes the pipeline the listing, map and dashboard pages share:
//! filter → sort → paginate → presentation rows. The engine is stateless
//! apart from its cashback schedule; every call works on the snapshot it is
//! handed.

use crate::cashback::CashbackSchedule;
use crate::filter::{filter_catalog, property_matches};
use crate::page::{paginate, PageMeta};
use crate::params::SearchRequest;
use crate::saved::resolve_saved_filter;
use crate::sort::sort_properties_with;
use domus_models::{Catalog, Property};
use serde::Serialize;

/// A presentation-owned copy of a property with its computed cashback.
///
/// Serializes flat — the property fields plus `cashback` and
/// `cashback_percent` — which is the record shape the templates consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyCard {
    #[serde(flatten)]
    pub property: Property,
    pub cashback: i64,
    pub cashback_percent: f64,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub items: Vec<PropertyCard>,
    pub meta: PageMeta,
}

/// The property search engine.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    schedule: CashbackSchedule,
}

impl SearchEngine {
    /// Engine with the marketplace-wide cashback schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a deal-specific cashback schedule.
    pub fn with_schedule(schedule: CashbackSchedule) -> Self {
        Self { schedule }
    }

    /// Run a full search request against a catalog snapshot.
    pub fn search(&self, catalog: &Catalog, request: &SearchRequest) -> SearchPage {
        let mut matched = filter_catalog(&catalog.properties, &request.filter);
        tracing::debug!(
            "Search matched {} of {} properties",
            matched.len(),
            catalog.len()
        );

        sort_properties_with(&mut matched, request.sort, &self.schedule);
        let (slice, meta) = paginate(&matched, request.page, request.per_page);

        let items = slice.iter().map(|p| self.card(p)).collect();
        SearchPage { items, meta }
    }

    /// Replay a persisted saved-search blob against the live catalog.
    ///
    /// A malformed blob degrades to an unfiltered first page.
    pub fn run_saved_search(&self, catalog: &Catalog, blob: &str) -> SearchPage {
        let request = SearchRequest {
            filter: resolve_saved_filter(blob),
            ..SearchRequest::default()
        };
        self.search(catalog, &request)
    }

    /// Whether a single property matches a persisted saved search; used when
    /// deciding if a fresh listing should notify subscribers.
    pub fn saved_search_matches(&self, property: &Property, blob: &str) -> bool {
        let spec = resolve_saved_filter(blob);
        !spec.is_empty() && property_matches(property, &spec)
    }

    fn card(&self, property: &Property) -> PropertyCard {
        PropertyCard {
            property: property.clone(),
            cashback: self.schedule.amount(property.price),
            cashback_percent: self.schedule.percent_for(property.price),
        }
    }
}

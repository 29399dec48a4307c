//! Filter criteria parsing
//!
//! Handles the flat string-keyed maps the site already produces:
//! - listing/map query strings (`rooms` repeatable, `priceFrom`/`priceTo`,
//!   `district`, `developer`, `residential_complex`, `street`, `mortgage`,
//!   `search`, `keywords`, `sort`, `page`)
//! - the legacy spellings `price_min`/`price_max`, which older templates
//!   still emit
//!
//! All values go through [`lenient`](crate::lenient) parsing: a malformed
//! value drops its constraint, never the whole request.

use crate::lenient;
use crate::sort::SortKey;
use serde::{Deserialize, Serialize};

/// Canonical, engine-internal filter criteria.
///
/// Every absent or empty criterion matches everything. Criteria combine
/// conjunctively; `rooms` tokens and `keywords` are each OR within
/// themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Room tokens: "2", "2-комн", "студия", "4+", "4+-комн". Empty = any.
    #[serde(default)]
    pub rooms: Vec<String>,

    /// Inclusive lower price bound. May still be in millions; the filter
    /// normalizes units before comparing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<i64>,

    /// Inclusive upper price bound, same unit handling as `price_min`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<i64>,

    /// Exact district name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Exact developer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,

    /// Case-insensitive substring over the complex name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential_complex: Option<String>,

    /// Case-insensitive substring over location / full address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// When true, only mortgage-eligible properties pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mortgage: Option<bool>,

    /// Free-text token matched against the synthesized haystack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Free-form tokens matched against type/class/material/features.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl FilterSpec {
    /// True when no criterion is present, i.e. the spec matches everything.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.district.is_none()
            && self.developer.is_none()
            && self.residential_complex.is_none()
            && self.street.is_none()
            && self.mortgage.is_none()
            && self.search.is_none()
            && self.keywords.is_empty()
    }

    /// Build a spec from decoded query pairs.
    ///
    /// Repeated keys accumulate for `rooms` and `keywords`; for scalar
    /// criteria the last occurrence wins, matching the site's historical
    /// behavior. Comma-separated values inside one `rooms`/`keywords`
    /// occurrence are split.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let mut spec = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "rooms" => push_tokens(&mut spec.rooms, value),
                "keywords" => push_tokens(&mut spec.keywords, value),
                "priceFrom" | "price_min" => spec.price_min = lenient::price_bound(value),
                "priceTo" | "price_max" => spec.price_max = lenient::price_bound(value),
                "district" => spec.district = non_empty(value),
                "developer" => spec.developer = non_empty(value),
                "residential_complex" => spec.residential_complex = non_empty(value),
                "street" => spec.street = non_empty(value),
                "mortgage" => spec.mortgage = lenient::parse_flag(value),
                "search" => spec.search = non_empty(value),
                _ => {}
            }
        }
        spec
    }
}

/// A full search request: criteria plus ordering and paging.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub filter: FilterSpec,
    pub sort: SortKey,
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

/// Listing pages show 24 cards.
pub const DEFAULT_PER_PAGE: usize = 24;

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            filter: FilterSpec::default(),
            sort: SortKey::Default,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl SearchRequest {
    /// Parse a request from decoded query pairs; unknown keys are ignored,
    /// malformed `page` values fall back to 1.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let mut request = Self {
            filter: FilterSpec::from_query_pairs(pairs),
            ..Self::default()
        };
        for (key, value) in pairs {
            match key.as_str() {
                "sort" => request.sort = SortKey::parse(value),
                "page" => {
                    request.page = lenient::parse_lenient::<usize>(value)
                        .filter(|p| *p >= 1)
                        .unwrap_or(1);
                }
                _ => {}
            }
        }
        request
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn push_tokens(into: &mut Vec<String>, value: &str) {
    for token in value.split(',') {
        let token = token.trim();
        if !token.is_empty() {
            into.push(token.to_string());
        }
    }
}

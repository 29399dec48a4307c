//! Property search and filtering engine
//!
//! A pure, stateless function set over in-memory catalog snapshots: filter a
//! catalog by a [`FilterSpec`], order the survivors, slice a page, rank
//! free-text suggestions and replay persisted saved searches. No I/O, no
//! internal mutable state; every operation is safe to call concurrently
//! against the same snapshot.
//!
//! # Error philosophy
//!
//! End-user-facing search favors permissive degradation over failure: a
//! malformed filter value drops that one constraint rather than failing the
//! query (see [`lenient`]). Errors exist only where callers opt into strict
//! parsing of persisted blobs.
//!
//! # Example
//!
//! ```rust
//! use domus_models::Catalog;
//! use domus_search::{SearchEngine, SearchRequest};
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     {"id": 1, "district": "Центральный", "rooms": 2, "type": "2-комн",
//!      "price": 4200000}
//! ]"#).unwrap();
//!
//! let request = SearchRequest::from_query_pairs(&[
//!     ("rooms".to_string(), "2".to_string()),
//!     ("priceTo".to_string(), "5".to_string()),
//! ]);
//!
//! let page = SearchEngine::new().search(&catalog, &request);
//! assert_eq!(page.meta.total, 1);
//! assert_eq!(page.items[0].cashback, 294_000);
//! ```

#![forbid(unsafe_code)]

mod cashback;
mod engine;
mod error;
mod filter;
pub mod lenient;
mod page;
mod params;
mod rank;
mod saved;
mod sort;

pub use cashback::{calculate_cashback, cashback_percent, CashbackSchedule, CashbackTier};
pub use engine::{PropertyCard, SearchEngine, SearchPage};
pub use error::{Error, Result};
pub use filter::{filter_catalog, property_matches};
pub use page::{paginate, PageMeta};
pub use params::{FilterSpec, SearchRequest, DEFAULT_PER_PAGE};
pub use rank::{rank_records, ScoredResult};
pub use saved::{resolve_saved_filter, try_resolve_saved_filter};
pub use sort::{sort_properties, sort_properties_with, SortKey};

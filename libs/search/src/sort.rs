//! Result ordering
//!
//! Five named strategies plus a stable no-op default. Sorting happens after
//! filtering and always on borrowed records; ties keep catalog order.

use crate::cashback::{calculate_cashback, CashbackSchedule};
use domus_models::Property;
use std::cmp::Reverse;

/// A named sort strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    CashbackDesc,
    AreaAsc,
    AreaDesc,
    /// Unknown or absent key: keep catalog order.
    #[default]
    Default,
}

impl SortKey {
    /// Parse a wire value. Unknown values are the no-op default, not an
    /// error; a stale sort link should still render a page.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "cashback_desc" => Self::CashbackDesc,
            "area_asc" => Self::AreaAsc,
            "area_desc" => Self::AreaDesc,
            _ => Self::Default,
        }
    }
}

/// Order `properties` in place by `key` under the default cashback
/// schedule. All sorts are stable.
pub fn sort_properties(properties: &mut [&Property], key: SortKey) {
    match key {
        SortKey::PriceAsc => properties.sort_by_key(|p| p.price),
        SortKey::PriceDesc => properties.sort_by_key(|p| Reverse(p.price)),
        SortKey::CashbackDesc => {
            properties.sort_by_key(|p| Reverse(calculate_cashback(p.price)))
        }
        SortKey::AreaAsc => properties.sort_by(|a, b| a.area.total_cmp(&b.area)),
        SortKey::AreaDesc => properties.sort_by(|a, b| b.area.total_cmp(&a.area)),
        SortKey::Default => {}
    }
}

/// Like [`sort_properties`], with cashback amounts computed under a specific
/// schedule rather than the marketplace default.
///
/// Cashback is computed per element at sort time rather than read from a
/// stored field, so the ordering always reflects the schedule in effect.
pub fn sort_properties_with(
    properties: &mut [&Property],
    key: SortKey,
    schedule: &CashbackSchedule,
) {
    match key {
        SortKey::CashbackDesc => {
            properties.sort_by_key(|p| Reverse(schedule.amount(p.price)))
        }
        other => sort_properties(properties, other),
    }
}

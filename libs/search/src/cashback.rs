//! Cashback calculation
//!
//! Tiered percentage of the purchase price, capped at the top tier. The
//! default schedule is the marketplace-wide rule; complex-specific deals
//! construct their own [`CashbackSchedule`].

use once_cell::sync::Lazy;

/// One tier of a cashback schedule.
///
/// Applies to prices at or above `min_price`, up to the next tier's bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashbackTier {
    /// Inclusive lower price bound, whole currency units.
    pub min_price: i64,
    /// Whole-percent rate.
    pub percent: u8,
    /// Absolute cap on the computed amount, if any.
    pub cap: Option<i64>,
}

/// An ordered tier table. Tiers must be sorted ascending by `min_price`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashbackSchedule {
    tiers: Vec<CashbackTier>,
}

impl CashbackSchedule {
    /// Build a schedule from tiers sorted ascending by `min_price`.
    pub fn new(tiers: Vec<CashbackTier>) -> Self {
        debug_assert!(
            tiers.windows(2).all(|w| w[0].min_price <= w[1].min_price),
            "tiers must be sorted ascending by min_price"
        );
        debug_assert!(!tiers.is_empty(), "schedule needs at least one tier");
        Self { tiers }
    }

    /// Cashback amount for `price`, truncated to whole currency units.
    ///
    /// Prices below every tier bound (including negative prices) fall into
    /// the first tier; the result is then zero or negative accordingly,
    /// which is the caller's problem to guard.
    pub fn amount(&self, price: i64) -> i64 {
        let tier = self.tier_for(price);
        let raw = price * i64::from(tier.percent) / 100;
        match tier.cap {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }

    /// The percent rate applied at `price`, for listing cards.
    pub fn percent_for(&self, price: i64) -> f64 {
        f64::from(self.tier_for(price).percent)
    }

    fn tier_for(&self, price: i64) -> &CashbackTier {
        self.tiers
            .iter()
            .rev()
            .find(|t| price >= t.min_price)
            .unwrap_or(&self.tiers[0])
    }
}

impl Default for CashbackSchedule {
    /// The marketplace-wide rule: 5% under 3M, 7% from 3M, 10% from 5M
    /// capped at 500k.
    fn default() -> Self {
        Self::new(vec![
            CashbackTier {
                min_price: 0,
                percent: 5,
                cap: None,
            },
            CashbackTier {
                min_price: 3_000_000,
                percent: 7,
                cap: None,
            },
            CashbackTier {
                min_price: 5_000_000,
                percent: 10,
                cap: Some(500_000),
            },
        ])
    }
}

static DEFAULT_SCHEDULE: Lazy<CashbackSchedule> = Lazy::new(CashbackSchedule::default);

/// Cashback amount for `price` under the default schedule.
pub fn calculate_cashback(price: i64) -> i64 {
    DEFAULT_SCHEDULE.amount(price)
}

/// Percent rate for `price` under the default schedule.
pub fn cashback_percent(price: i64) -> f64 {
    DEFAULT_SCHEDULE.percent_for(price)
}

use rust_decimal::Decimal;
use serde::Serialize;

use super::catalog::{BrandId, Item};

// ---------------------------------------------------------------------------
// RankLabel / RankedItem: Extremes within one category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RankLabel {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedItem<'a> {
    pub item: &'a Item,
    pub label: RankLabel,
}

// ---------------------------------------------------------------------------
// BrandTotal: One brand's per-category cheapest items and their sum
// ---------------------------------------------------------------------------

/// The cheapest item of each category a brand sells, ordered by category id,
/// together with the exact sum of their prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BrandTotal<'a> {
    pub brand_id: BrandId,
    pub items: Vec<&'a Item>,
    pub total_price: Decimal,
}

// ---------------------------------------------------------------------------
// CategoryExtremes: Cheapest and most expensive items of one category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryExtremes<'a> {
    pub cheapest: Vec<&'a Item>,
    pub most_expensive: Vec<&'a Item>,
}

impl CategoryExtremes<'_> {
    pub fn is_empty(&self) -> bool {
        self.cheapest.is_empty() && self.most_expensive.is_empty()
    }
}

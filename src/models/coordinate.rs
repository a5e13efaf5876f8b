use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::{Brand, Category, Item};

// ---------------------------------------------------------------------------
// CatalogEntry: An item with its brand and category resolved
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub item: Item,
    pub brand: Brand,
    pub category: Category,
}

fn sum_prices(entries: &[CatalogEntry]) -> Decimal {
    entries.iter().map(|e| e.item.price).sum()
}

// ---------------------------------------------------------------------------
// Coordinate: Cheapest item of every category, across brands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Coordinate {
    pub entries: Vec<CatalogEntry>,
    pub total_price: Decimal,
}

impl Coordinate {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let total_price = sum_prices(&entries);
        Self {
            entries,
            total_price,
        }
    }
}

// ---------------------------------------------------------------------------
// BrandCoordinate: Cheapest items of a single brand
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BrandCoordinate {
    pub brand: Brand,
    pub entries: Vec<CatalogEntry>,
    pub total_price: Decimal,
}

impl BrandCoordinate {
    pub fn new(brand: Brand, entries: Vec<CatalogEntry>) -> Self {
        let total_price = sum_prices(&entries);
        Self {
            brand,
            entries,
            total_price,
        }
    }
}

// ---------------------------------------------------------------------------
// CategoryExtremesResult: Cheapest and most expensive items of a category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryExtremesResult {
    pub category: Category,
    pub cheapest: Vec<CatalogEntry>,
    pub most_expensive: Vec<CatalogEntry>,
}

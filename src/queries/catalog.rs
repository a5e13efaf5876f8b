//! Read-only lookups of catalog records.

use crate::models::{Brand, BrandId, Category, CategoryId, Item};
use crate::snapshot::CatalogSnapshot;

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

/// Query interface for brands, categories and items of a snapshot.
pub struct CatalogQuery<'a> {
    snapshot: &'a CatalogSnapshot,
}

impl<'a> CatalogQuery<'a> {
    /// Create a new `CatalogQuery` bound to the given snapshot.
    pub fn new(snapshot: &'a CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    /// All brands, in snapshot order.
    pub fn brands(&self) -> &'a [Brand] {
        self.snapshot.brands()
    }

    /// All categories, in snapshot order.
    pub fn categories(&self) -> &'a [Category] {
        self.snapshot.categories()
    }

    pub fn brand_by_name(&self, name: &str) -> Option<&'a Brand> {
        self.snapshot.brand_by_name(name)
    }

    pub fn category_by_name(&self, name: &str) -> Option<&'a Category> {
        self.snapshot.category_by_name(name)
    }

    /// Items of one category, in snapshot order.
    pub fn items_in_category(&self, category_id: CategoryId) -> Vec<&'a Item> {
        self.snapshot
            .items()
            .iter()
            .filter(|item| item.category_id == category_id)
            .collect()
    }

    /// Items of one brand, in snapshot order.
    pub fn items_by_brand(&self, brand_id: BrandId) -> Vec<&'a Item> {
        self.snapshot
            .items()
            .iter()
            .filter(|item| item.brand_id == brand_id)
            .collect()
    }

    /// Number of items a brand sells.
    pub fn count_by_brand(&self, brand_id: BrandId) -> usize {
        self.snapshot
            .items()
            .iter()
            .filter(|item| item.brand_id == brand_id)
            .count()
    }
}

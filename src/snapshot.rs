//! Immutable point-in-time view of the catalog.
//!
//! A [`CatalogSnapshot`] is what every ranking query runs against. It is
//! built once (from DuckDB via [`Connection::load_snapshot`](crate::Connection::load_snapshot),
//! from a JSON document, or directly from records) and never changes
//! afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoordiError, Result};
use crate::models::{Brand, BrandId, CatalogEntry, Category, CategoryId, Item};

/// JSON document layout accepted by [`CatalogSnapshot::from_json_str`].
#[derive(Debug, Default, Serialize, Deserialize)]
struct SnapshotDocument {
    #[serde(default)]
    brands: Vec<Brand>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    products: Vec<Item>,
}

/// Brands, categories and items of the catalog at one point in time.
///
/// Construction validates that every item references a known brand and
/// category and carries a non-negative price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    brands: Vec<Brand>,
    categories: Vec<Category>,
    items: Vec<Item>,
    brand_index: HashMap<BrandId, usize>,
    category_index: HashMap<CategoryId, usize>,
}

impl CatalogSnapshot {
    /// Build a snapshot from records, validating item references.
    pub fn new(brands: Vec<Brand>, categories: Vec<Category>, items: Vec<Item>) -> Result<Self> {
        let brand_index = index_by(&brands, |b| b.id);
        let category_index = index_by(&categories, |c| c.id);

        for item in &items {
            if !brand_index.contains_key(&item.brand_id) {
                return Err(CoordiError::InvalidArgument(format!(
                    "item {} references unknown brand {}",
                    item.id, item.brand_id
                )));
            }
            if !category_index.contains_key(&item.category_id) {
                return Err(CoordiError::InvalidArgument(format!(
                    "item {} references unknown category {}",
                    item.id, item.category_id
                )));
            }
            if item.price < Decimal::ZERO {
                return Err(CoordiError::InvalidArgument(format!(
                    "item {} has negative price {}",
                    item.id, item.price
                )));
            }
        }

        Ok(Self {
            brands,
            categories,
            items,
            brand_index,
            category_index,
        })
    }

    /// A snapshot with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a `{"brands": [...], "categories": [...], "products": [...]}` document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: SnapshotDocument = serde_json::from_str(json)?;
        Self::new(doc.brands, doc.categories, doc.products)
    }

    /// Read and parse a JSON snapshot document from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CoordiError::NotFound(format!(
                "snapshot file not found: {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serialize the snapshot into the document layout read by [`from_json_str`](Self::from_json_str).
    pub fn to_json_string(&self) -> Result<String> {
        let doc = SnapshotDocument {
            brands: self.brands.clone(),
            categories: self.categories.clone(),
            products: self.items.clone(),
        };
        Ok(serde_json::to_string(&doc)?)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn brand(&self, id: BrandId) -> Option<&Brand> {
        self.brand_index.get(&id).map(|&i| &self.brands[i])
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.category_index.get(&id).map(|&i| &self.categories[i])
    }

    /// First brand with this exact name.
    pub fn brand_by_name(&self, name: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.name == name)
    }

    /// First category with this exact name.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Resolve an item's brand and category records.
    pub fn entry(&self, item: &Item) -> Result<CatalogEntry> {
        let brand = self.brand(item.brand_id).ok_or_else(|| {
            CoordiError::NotFound(format!("brand {} of item {}", item.brand_id, item.id))
        })?;
        let category = self.category(item.category_id).ok_or_else(|| {
            CoordiError::NotFound(format!("category {} of item {}", item.category_id, item.id))
        })?;
        Ok(CatalogEntry {
            item: *item,
            brand: brand.clone(),
            category: category.clone(),
        })
    }

    /// Resolve a sequence of items, keeping order.
    pub fn entries<'a, I>(&self, items: I) -> Result<Vec<CatalogEntry>>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        items.into_iter().map(|item| self.entry(item)).collect()
    }
}

/// Map each id to the position of its first record.
fn index_by<T, K, F>(records: &[T], key: F) -> HashMap<K, usize>
where
    K: std::hash::Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        index.entry(key(record)).or_insert(i);
    }
    index
}

//! Coordinate queries: cheapest outfits and per-category price extremes.

use tracing::debug;

use crate::error::{CoordiError, Result};
use crate::models::{BrandCoordinate, CategoryExtremesResult, Coordinate};
use crate::ranking;
use crate::snapshot::CatalogSnapshot;

// ---------------------------------------------------------------------------
// CoordinateQuery
// ---------------------------------------------------------------------------

/// Query interface answering the three coordinate questions over a snapshot.
///
/// Results own copies of the records they mention, so they outlive the
/// snapshot they were computed from.
pub struct CoordinateQuery<'a> {
    snapshot: &'a CatalogSnapshot,
}

impl<'a> CoordinateQuery<'a> {
    /// Create a new `CoordinateQuery` bound to the given snapshot.
    pub fn new(snapshot: &'a CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    /// The cheapest item of every category regardless of brand, in category
    /// id order, with the total price.
    ///
    /// An empty catalog gives an empty coordinate with a zero total.
    pub fn cheapest(&self) -> Result<Coordinate> {
        let winners = ranking::cheapest_per_category(self.snapshot.items());
        let coordinate = Coordinate::new(self.snapshot.entries(winners)?);
        debug!(
            categories = coordinate.entries.len(),
            total = %coordinate.total_price,
            "cheapest coordinate"
        );
        Ok(coordinate)
    }

    /// The single brand whose cheapest item per category sums lowest.
    ///
    /// Fails with [`CoordiError::NotFound`] on an empty catalog.
    pub fn cheapest_by_brand(&self) -> Result<BrandCoordinate> {
        let bundle = ranking::cheapest_brand_bundle(self.snapshot.items())?;
        let brand = self.snapshot.brand(bundle.brand_id).ok_or_else(|| {
            CoordiError::NotFound(format!("brand {} is not in the catalog", bundle.brand_id))
        })?;
        let coordinate = BrandCoordinate::new(
            brand.clone(),
            self.snapshot.entries(bundle.items.iter().copied())?,
        );
        debug!(
            brand = %coordinate.brand.name,
            total = %coordinate.total_price,
            "cheapest brand coordinate"
        );
        Ok(coordinate)
    }

    /// Cheapest and most expensive items of the category named `category_name`.
    ///
    /// Surrounding whitespace is ignored; otherwise the name must match exactly.
    /// A blank name is [`CoordiError::InvalidArgument`]; a name that matches no
    /// category is [`CoordiError::NotFound`]. A known category without items
    /// gives two empty lists.
    pub fn extremes_by_category_name(&self, category_name: &str) -> Result<CategoryExtremesResult> {
        let category_name = category_name.trim();
        if category_name.is_empty() {
            return Err(CoordiError::InvalidArgument(
                "category name must not be blank".into(),
            ));
        }
        let category = self
            .snapshot
            .category_by_name(category_name)
            .ok_or_else(|| {
                CoordiError::NotFound(format!("cannot find category {}", category_name))
            })?;

        let extremes = ranking::extremes_in_category(self.snapshot.items(), category.id);
        let result = CategoryExtremesResult {
            category: category.clone(),
            cheapest: self.snapshot.entries(extremes.cheapest.iter().copied())?,
            most_expensive: self
                .snapshot
                .entries(extremes.most_expensive.iter().copied())?,
        };
        debug!(
            category = %result.category.name,
            cheapest = result.cheapest.len(),
            most_expensive = result.most_expensive.len(),
            "category extremes"
        );
        Ok(result)
    }
}

use crate::error::{CoordiError, Result};
use crate::models::{BrandTotal, Item};

use super::cheapest_by;

/// Per-brand totals of each brand's cheapest item per category.
///
/// Brands are ordered by ascending id and each brand's items by ascending
/// category id. A brand only contributes the categories it has items in.
pub fn brand_totals(items: &[Item]) -> Vec<BrandTotal<'_>> {
    let mut totals: Vec<BrandTotal<'_>> = Vec::new();

    // Keys sort by (brand, category), so each brand's items arrive contiguously.
    for ((brand_id, _), item) in cheapest_by(items, |item| (item.brand_id, item.category_id)) {
        match totals.last_mut() {
            Some(total) if total.brand_id == brand_id => {
                total.items.push(item);
                total.total_price += item.price;
            }
            _ => totals.push(BrandTotal {
                brand_id,
                items: vec![item],
                total_price: item.price,
            }),
        }
    }

    totals
}

/// The brand whose per-category cheapest items sum to the lowest total.
///
/// Equal totals go to the lowest brand id. Fails with
/// [`CoordiError::NotFound`] when `items` is empty.
pub fn cheapest_brand_bundle(items: &[Item]) -> Result<BrandTotal<'_>> {
    brand_totals(items)
        .into_iter()
        .min_by(|a, b| {
            a.total_price
                .cmp(&b.total_price)
                .then_with(|| a.brand_id.cmp(&b.brand_id))
        })
        .ok_or_else(|| CoordiError::NotFound("no brand to compare: item set is empty".into()))
}

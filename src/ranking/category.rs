use crate::models::Item;

use super::cheapest_by;

/// Cheapest item of every category present in `items`, ordered by ascending
/// category id.
///
/// Equal prices go to the item with the highest id. Categories without items
/// do not appear, and an empty input gives an empty result.
pub fn cheapest_per_category(items: &[Item]) -> Vec<&Item> {
    cheapest_by(items, |item| item.category_id)
        .into_values()
        .collect()
}

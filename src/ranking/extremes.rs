use crate::models::{CategoryExtremes, CategoryId, Item, RankLabel, RankedItem};

/// Label the cheapest and most expensive items of one category.
///
/// All items at the minimum price are [`RankLabel::Min`] and all items at the
/// maximum price are [`RankLabel::Max`]. When the category holds a single
/// distinct price, its items are labelled `Min` only. Items keep input order;
/// items at neither extreme are dropped.
pub fn rank_category(items: &[Item], category_id: CategoryId) -> Vec<RankedItem<'_>> {
    let in_category: Vec<&Item> = items
        .iter()
        .filter(|item| item.category_id == category_id)
        .collect();

    let min_price = in_category.iter().map(|item| item.price).min();
    let max_price = in_category.iter().map(|item| item.price).max();
    let (Some(min_price), Some(max_price)) = (min_price, max_price) else {
        return Vec::new();
    };

    in_category
        .into_iter()
        .filter_map(|item| {
            let label = if item.price == min_price {
                RankLabel::Min
            } else if item.price == max_price {
                RankLabel::Max
            } else {
                return None;
            };
            Some(RankedItem { item, label })
        })
        .collect()
}

/// Split [`rank_category`] into its cheapest and most expensive sequences.
///
/// An unknown or empty category yields two empty sequences.
pub fn extremes_in_category(items: &[Item], category_id: CategoryId) -> CategoryExtremes<'_> {
    let mut extremes = CategoryExtremes::default();
    for ranked in rank_category(items, category_id) {
        match ranked.label {
            RankLabel::Min => extremes.cheapest.push(ranked.item),
            RankLabel::Max => extremes.most_expensive.push(ranked.item),
        }
    }
    extremes
}

//! Price ranking over an in-memory item set.
//!
//! Every function here is pure: it borrows a slice of [`Item`]s, never
//! mutates it, and returns the same output for the same input. Two selection
//! rules are used:
//!
//! - **single winner** ([`cheapest_per_category`], [`cheapest_brand_bundle`]):
//!   lowest price, and among equal prices the highest item id.
//! - **dense ties** ([`extremes_in_category`]): every item sharing the
//!   minimum or maximum price is returned.

mod brand;
mod category;
mod extremes;

pub use brand::{brand_totals, cheapest_brand_bundle};
pub use category::cheapest_per_category;
pub use extremes::{extremes_in_category, rank_category};

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::Item;

/// Single-winner ordering: lower price first, then higher id first.
pub fn cheapest_first(a: &Item, b: &Item) -> Ordering {
    a.price.cmp(&b.price).then_with(|| b.id.cmp(&a.id))
}

/// Keep the single-winner item for each partition key, ordered by key.
fn cheapest_by<K, F>(items: &[Item], key: F) -> BTreeMap<K, &Item>
where
    K: Ord,
    F: Fn(&Item) -> K,
{
    let mut winners: BTreeMap<K, &Item> = BTreeMap::new();
    for item in items {
        winners
            .entry(key(item))
            .and_modify(|current| {
                if cheapest_first(item, *current) == Ordering::Less {
                    *current = item;
                }
            })
            .or_insert(item);
    }
    winners
}

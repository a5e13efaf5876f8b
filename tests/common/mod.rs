//! Shared test fixtures for the coordi SDK integration tests.
//!
//! Provides the sample catalog (brands A..I, eight categories) both as an
//! in-memory [`CatalogSnapshot`] and as NDJSON files loaded into DuckDB.

#![allow(dead_code)]

use coordi_sdk::models::{Brand, Category, Item};
use coordi_sdk::{CatalogSnapshot, Connection};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fs;
use std::io::Write;
use std::path::Path;

pub const CATEGORY_NAMES: [&str; 8] = [
    "상의", "아우터", "바지", "스니커즈", "가방", "모자", "양말", "액세서리",
];

pub const BRAND_NAMES: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];

/// Prices per brand (rows, A..I) and category (columns, in `CATEGORY_NAMES` order).
pub const PRICES: [[i64; 8]; 9] = [
    [11200, 5500, 4200, 9000, 2000, 1700, 1800, 2300],
    [10500, 5900, 3800, 9100, 2100, 2000, 2000, 2200],
    [10000, 6200, 3300, 9200, 2200, 1900, 2200, 2100],
    [10100, 5100, 3000, 9500, 2500, 1500, 2400, 2000],
    [10700, 5000, 3800, 9900, 2300, 1800, 2100, 2100],
    [11200, 7200, 4000, 9300, 2100, 1600, 2300, 1900],
    [10500, 5800, 3900, 9000, 2200, 1700, 2100, 2000],
    [10800, 6300, 3100, 9700, 2100, 1600, 2000, 2000],
    [11400, 6700, 3200, 9500, 2400, 1700, 1700, 2400],
];

pub fn brands() -> Vec<Brand> {
    BRAND_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Brand::new(i as u64 + 1, *name))
        .collect()
}

pub fn categories() -> Vec<Category> {
    CATEGORY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Category::new(i as u64 + 1, *name))
        .collect()
}

/// Items are numbered brand by brand, so brand G's items have higher ids
/// than brand A's.
pub fn items() -> Vec<Item> {
    let mut items = Vec::new();
    for (b, row) in PRICES.iter().enumerate() {
        for (c, price) in row.iter().enumerate() {
            let id = (b * CATEGORY_NAMES.len() + c + 1) as u64;
            items.push(Item::new(
                id,
                c as u64 + 1,
                b as u64 + 1,
                Decimal::from(*price),
            ));
        }
    }
    items
}

pub fn sample_snapshot() -> CatalogSnapshot {
    CatalogSnapshot::new(brands(), categories(), items()).unwrap()
}

/// Write the sample catalog as NDJSON files into `dir`.
pub fn write_sample_files(dir: &Path) {
    write_ndjson(
        &dir.join("brands.ndjson"),
        brands()
            .iter()
            .map(|b| serde_json::json!({"id": b.id.0, "name": b.name})),
    );
    write_ndjson(
        &dir.join("categories.ndjson"),
        categories()
            .iter()
            .map(|c| serde_json::json!({"id": c.id.0, "name": c.name})),
    );
    write_ndjson(
        &dir.join("products.ndjson"),
        items().iter().map(|i| {
            serde_json::json!({
                "id": i.id.0,
                "categoryId": i.category_id.0,
                "brandId": i.brand_id.0,
                "price": i.price.to_i64().unwrap()
            })
        }),
    );
}

/// Create a `Connection` with the sample catalog registered from NDJSON
/// files in a temporary directory.
///
/// Returns `(Connection, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive while the files may still be re-read.
pub fn setup_sample_db() -> (Connection, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    write_sample_files(tmp_dir.path());

    let conn = Connection::open_in_memory().unwrap();
    conn.register_data_dir(tmp_dir.path()).unwrap();
    (conn, tmp_dir)
}

pub fn write_ndjson<I>(path: &Path, rows: I)
where
    I: IntoIterator<Item = serde_json::Value>,
{
    let mut file = fs::File::create(path).unwrap();
    for row in rows {
        writeln!(file, "{}", serde_json::to_string(&row).unwrap()).unwrap();
    }
    file.flush().unwrap();
}

/// Shorthand for an item in tests that build their own item sets.
pub fn item(id: u64, category: u64, brand: u64, price: i64) -> Item {
    Item::new(id, category, brand, Decimal::from(price))
}

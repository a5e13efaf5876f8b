use std::collections::HashMap;
use std::path::PathBuf;

pub const BRANDS_TABLE: &str = "brands";
pub const CATEGORIES_TABLE: &str = "categories";
pub const PRODUCTS_TABLE: &str = "products";

/// Table name -> newline-delimited JSON file name inside a data directory.
pub fn snapshot_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        (BRANDS_TABLE, "brands.ndjson"),
        (CATEGORIES_TABLE, "categories.ndjson"),
        (PRODUCTS_TABLE, "products.ndjson"),
    ])
}

/// Column names and DuckDB types of a catalog table.
///
/// Prices are kept as text so they reach `rust_decimal` unchanged.
pub fn table_columns(table: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match table {
        BRANDS_TABLE => Some(&[("id", "BIGINT"), ("name", "VARCHAR")]),
        CATEGORIES_TABLE => Some(&[("id", "BIGINT"), ("name", "VARCHAR")]),
        PRODUCTS_TABLE => Some(&[
            ("id", "BIGINT"),
            ("categoryId", "BIGINT"),
            ("brandId", "BIGINT"),
            ("price", "VARCHAR"),
        ]),
        _ => None,
    }
}

/// Tables in load order. Products reference both brands and categories.
pub fn snapshot_tables() -> [&'static str; 3] {
    [BRANDS_TABLE, CATEGORIES_TABLE, PRODUCTS_TABLE]
}

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("coordi-sdk")
    } else {
        PathBuf::from(".coordi-sdk-data")
    }
}

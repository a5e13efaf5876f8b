//! DuckDB connection wrapper used to acquire catalog snapshots.
//!
//! Catalog tables (`brands`, `categories`, `products`) are either registered
//! from newline-delimited JSON files or found in an existing database file.
//! The connection only ever reads them; [`Connection::load_snapshot`] turns
//! the current table contents into an immutable [`CatalogSnapshot`].

use crate::config;
use crate::error::{CoordiError, Result};
use crate::models::{Brand, Category, Item};
use crate::snapshot::CatalogSnapshot;
use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// Wraps a DuckDB connection and tracks which catalog tables are available.
#[derive(Debug)]
pub struct Connection {
    conn: DuckDbConnection,
    registered_tables: RefCell<HashSet<String>>,
}

impl Connection {
    /// Open an empty in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Ok(Self {
            conn,
            registered_tables: RefCell::new(HashSet::new()),
        })
    }

    /// Open an existing DuckDB database file.
    ///
    /// Catalog tables already present in the `main` schema are registered
    /// immediately.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CoordiError::NotFound(format!(
                "database file not found: {}",
                path.display()
            )));
        }
        let conn = Self {
            conn: DuckDbConnection::open(path)?,
            registered_tables: RefCell::new(HashSet::new()),
        };
        conn.discover_tables()?;
        Ok(conn)
    }

    /// Create a catalog table from a newline-delimited JSON file.
    ///
    /// The table gets its fixed column layout from
    /// [`config::table_columns`], so an empty file yields an empty table.
    pub fn register_table_from_ndjson(&self, table_name: &str, ndjson_path: &str) -> Result<()> {
        let columns = config::table_columns(table_name).ok_or_else(|| {
            CoordiError::InvalidArgument(format!("unknown catalog table: {}", table_name))
        })?;
        let path_fwd = ndjson_path.replace('\\', "/");

        let column_defs = columns
            .iter()
            .map(|(name, ty)| format!("\"{}\" {}", name, ty))
            .collect::<Vec<_>>()
            .join(", ");
        self.conn.execute_batch(&format!(
            "DROP TABLE IF EXISTS {table}; CREATE TABLE {table} ({column_defs})",
            table = table_name,
        ))?;

        let is_empty = std::fs::metadata(ndjson_path)?.len() == 0;
        if !is_empty {
            let column_names = columns
                .iter()
                .map(|(name, _)| format!("\"{}\"", name))
                .collect::<Vec<_>>()
                .join(", ");
            let column_types = columns
                .iter()
                .map(|(name, ty)| format!("'{}': '{}'", name, ty))
                .collect::<Vec<_>>()
                .join(", ");
            self.conn.execute_batch(&format!(
                "INSERT INTO {table} SELECT {column_names} FROM read_json('{path}', \
                 format='newline_delimited', columns={{{column_types}}})",
                table = table_name,
                path = sql_quote(&path_fwd),
            ))?;
        }

        self.registered_tables
            .borrow_mut()
            .insert(table_name.to_string());
        debug!(table = table_name, path = %path_fwd, "registered table");
        Ok(())
    }

    /// Register every catalog table from its NDJSON file inside `dir`.
    ///
    /// Fails with [`CoordiError::NotFound`] if any file is missing.
    pub fn register_data_dir<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        let files = config::snapshot_files();
        for table in config::snapshot_tables() {
            let path = dir.join(files[table]);
            if !path.exists() {
                return Err(CoordiError::NotFound(format!(
                    "catalog file not found: {}",
                    path.display()
                )));
            }
            self.register_table_from_ndjson(table, &path.to_string_lossy())?;
        }
        Ok(())
    }

    /// Read the current catalog tables into a [`CatalogSnapshot`].
    pub fn load_snapshot(&self) -> Result<CatalogSnapshot> {
        for table in config::snapshot_tables() {
            if !self.has_table(table) {
                return Err(CoordiError::NotFound(format!(
                    "catalog table not loaded: {}",
                    table
                )));
            }
        }

        let brands = self.load_brands()?;
        let categories = self.load_categories()?;
        let items = self.load_items()?;
        info!(
            brands = brands.len(),
            categories = categories.len(),
            items = items.len(),
            "loaded catalog snapshot"
        );

        CatalogSnapshot::new(brands, categories, items)
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// Each row is represented as a `HashMap<String, serde_json::Value>`.
    pub fn execute(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        // Column metadata is only available once the query has run.
        let stmt_ref = rows.as_ref().ok_or_else(|| {
            CoordiError::InvalidArgument("statement metadata unavailable".into())
        })?;
        let column_names: Vec<String> = stmt_ref
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        let mut out: Vec<HashMap<String, serde_json::Value>> = Vec::new();
        while let Some(row) = rows.next()? {
            let mut map = HashMap::with_capacity(column_names.len());
            for (i, col_name) in column_names.iter().enumerate() {
                map.insert(col_name.clone(), convert_value_ref(row.get_ref(i)?));
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute SQL and return the first column of the first row.
    ///
    /// Returns `None` if the result set is empty.
    pub fn execute_scalar(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Option<serde_json::Value>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        if let Some(row) = rows.next()? {
            Ok(Some(convert_value_ref(row.get_ref(0)?)))
        } else {
            Ok(None)
        }
    }

    /// Check whether a table has been registered.
    pub fn has_table(&self, name: &str) -> bool {
        self.registered_tables.borrow().contains(name)
    }

    /// Return the registered table names, sorted.
    pub fn tables(&self) -> Vec<String> {
        let mut tables: Vec<String> = self.registered_tables.borrow().iter().cloned().collect();
        tables.sort();
        tables
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }

    fn discover_tables(&self) -> Result<()> {
        let mut stmt = self.conn.prepare(
            "SELECT table_name FROM information_schema.tables WHERE table_schema = 'main'",
        )?;
        let mut rows = stmt.query([])?;
        let known: HashSet<&str> = config::snapshot_tables().into_iter().collect();

        while let Some(row) = rows.next()? {
            let name: String = row.get(0)?;
            if known.contains(name.as_str()) {
                debug!(table = %name, "found catalog table");
                self.registered_tables.borrow_mut().insert(name);
            }
        }
        Ok(())
    }

    fn load_brands(&self) -> Result<Vec<Brand>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT CAST(id AS BIGINT), CAST(name AS VARCHAR) FROM {} ORDER BY id",
            config::BRANDS_TABLE
        ))?;
        let mut rows = stmt.query([])?;
        let mut brands = Vec::new();
        while let Some(row) = rows.next()? {
            let id: i64 = row.get(0)?;
            let name: String = row.get(1)?;
            brands.push(Brand::new(to_id(id, "brand")?, name));
        }
        Ok(brands)
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT CAST(id AS BIGINT), CAST(name AS VARCHAR) FROM {} ORDER BY id",
            config::CATEGORIES_TABLE
        ))?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            let id: i64 = row.get(0)?;
            let name: String = row.get(1)?;
            categories.push(Category::new(to_id(id, "category")?, name));
        }
        Ok(categories)
    }

    /// Prices are read as text so they never pass through binary floating point.
    fn load_items(&self) -> Result<Vec<Item>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT CAST(id AS BIGINT), CAST(\"categoryId\" AS BIGINT), \
             CAST(\"brandId\" AS BIGINT), CAST(price AS VARCHAR) \
             FROM {} ORDER BY id",
            config::PRODUCTS_TABLE
        ))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            let id: i64 = row.get(0)?;
            let category_id: i64 = row.get(1)?;
            let brand_id: i64 = row.get(2)?;
            let price: String = row.get(3)?;
            items.push(Item::new(
                to_id(id, "product")?,
                to_id(category_id, "category")?,
                to_id(brand_id, "brand")?,
                parse_price(&price)?,
            ));
        }
        Ok(items)
    }
}

/// Escape a value for use inside a single-quoted SQL string literal.
fn sql_quote(raw: &str) -> String {
    raw.replace('\'', "''")
}

fn to_id(raw: i64, kind: &str) -> Result<u64> {
    u64::try_from(raw)
        .map_err(|_| CoordiError::InvalidArgument(format!("negative {} id: {}", kind, raw)))
}

/// Parse a textual price, accepting scientific notation as DuckDB prints
/// large doubles that way.
fn parse_price(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    Ok(trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))?)
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::UTinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::USmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::UInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::UBigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::HugeInt(n) => match i64::try_from(n) {
            Ok(i) => serde_json::Value::Number(i.into()),
            Err(_) => serde_json::Value::String(n.to_string()),
        },
        // Exact decimals stay textual, the same way models serialize prices.
        ValueRef::Decimal(d) => serde_json::Value::String(d.to_string()),
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => {
            serde_json::Value::String(String::from_utf8_lossy(bytes).to_string())
        }
        _ => serde_json::Value::Null,
    }
}

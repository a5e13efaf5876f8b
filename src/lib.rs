//! Coordi SDK for Rust.
//!
//! Ranks a product catalog by price to answer three questions: the cheapest
//! item of every category, the single brand whose cheapest items add up to
//! the lowest total, and the cheapest and most expensive items of one
//! category. Catalog data is read into DuckDB, captured as an immutable
//! [`CatalogSnapshot`], and ranked in-process by the pure functions in
//! [`ranking`].
//!
//! # Quick start
//!
//! ```no_run
//! use coordi_sdk::CoordiSdk;
//!
//! let sdk = CoordiSdk::builder().data_dir("./catalog").build().unwrap();
//!
//! // Cheapest item of every category
//! let coordinate = sdk.coordinates().cheapest().unwrap();
//!
//! // Display view with grouped prices
//! let view = sdk.views().coordinate(&coordinate);
//! println!("{}", serde_json::to_string(&view).unwrap());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod format;
pub mod models;
pub mod queries;
pub mod ranking;
pub mod snapshot;
pub mod views;

#[cfg(feature = "async")]
pub use async_client::AsyncCoordiSdk;
pub use connection::Connection;
pub use error::{CoordiError, Result};
pub use format::{format_price, PriceFormat};
pub use snapshot::CatalogSnapshot;
pub use views::ViewAssembler;

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

// ---------------------------------------------------------------------------
// SnapshotSource
// ---------------------------------------------------------------------------

/// Where the SDK reads its catalog from.
#[derive(Debug, Clone)]
pub enum SnapshotSource {
    /// Directory holding `brands.ndjson`, `categories.ndjson` and `products.ndjson`.
    DataDir(PathBuf),
    /// Existing DuckDB database file with the catalog tables.
    Database(PathBuf),
    /// A snapshot supplied by the caller; nothing is read from disk.
    Snapshot(CatalogSnapshot),
}

impl fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotSource::DataDir(dir) => write!(f, "data_dir={}", dir.display()),
            SnapshotSource::Database(path) => write!(f, "database={}", path.display()),
            SnapshotSource::Snapshot(_) => write!(f, "snapshot"),
        }
    }
}

// ---------------------------------------------------------------------------
// CoordiSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CoordiSdk`] instance.
///
/// Use [`CoordiSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CoordiSdkBuilder::build) to create the SDK.
/// Of `data_dir`, `database` and `snapshot`, the last one called wins.
pub struct CoordiSdkBuilder {
    source: SnapshotSource,
    price_format: PriceFormat,
}

impl Default for CoordiSdkBuilder {
    fn default() -> Self {
        Self {
            source: SnapshotSource::DataDir(config::default_data_dir()),
            price_format: PriceFormat::default(),
        }
    }
}

impl CoordiSdkBuilder {
    /// Read the catalog from NDJSON files in `path`.
    ///
    /// If no source is set, the platform data directory is used
    /// (e.g. `~/.local/share/coordi-sdk` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = SnapshotSource::DataDir(path.as_ref().to_path_buf());
        self
    }

    /// Read the catalog from an existing DuckDB database file.
    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = SnapshotSource::Database(path.as_ref().to_path_buf());
        self
    }

    /// Use an already-built snapshot.
    pub fn snapshot(mut self, snapshot: CatalogSnapshot) -> Self {
        self.source = SnapshotSource::Snapshot(snapshot);
        self
    }

    /// Set the display format used by [`CoordiSdk::views`].
    ///
    /// Defaults to comma grouping by three with no fraction digits.
    pub fn price_format(mut self, format: PriceFormat) -> Self {
        self.price_format = format;
        self
    }

    /// Build the SDK, opening DuckDB and loading the first snapshot.
    pub fn build(self) -> Result<CoordiSdk> {
        let (conn, snapshot) = match &self.source {
            SnapshotSource::DataDir(dir) => {
                let conn = Connection::open_in_memory()?;
                conn.register_data_dir(dir)?;
                let snapshot = conn.load_snapshot()?;
                (conn, snapshot)
            }
            SnapshotSource::Database(path) => {
                let conn = Connection::open(path)?;
                let snapshot = conn.load_snapshot()?;
                (conn, snapshot)
            }
            SnapshotSource::Snapshot(snapshot) => {
                (Connection::open_in_memory()?, snapshot.clone())
            }
        };
        info!(source = %self.source, items = snapshot.items().len(), "coordi sdk ready");

        Ok(CoordiSdk {
            conn,
            source: self.source,
            snapshot,
            assembler: ViewAssembler::new(self.price_format),
        })
    }
}

// ---------------------------------------------------------------------------
// CoordiSdk
// ---------------------------------------------------------------------------

/// The main entry point for the coordi SDK.
///
/// Owns a [`Connection`] and the current [`CatalogSnapshot`], and exposes
/// query interfaces as lightweight borrowing wrappers over that snapshot.
///
/// Created via [`CoordiSdk::builder()`].
pub struct CoordiSdk {
    conn: Connection,
    source: SnapshotSource,
    snapshot: CatalogSnapshot,
    assembler: ViewAssembler,
}

impl CoordiSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CoordiSdkBuilder {
        CoordiSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the coordinate query interface.
    ///
    /// Returns a lightweight wrapper that borrows the current snapshot.
    pub fn coordinates(&self) -> queries::CoordinateQuery<'_> {
        queries::CoordinateQuery::new(&self.snapshot)
    }

    /// Access the catalog lookup interface.
    pub fn catalog(&self) -> queries::CatalogQuery<'_> {
        queries::CatalogQuery::new(&self.snapshot)
    }

    /// Access the view assembler configured with the builder's price format.
    pub fn views(&self) -> &ViewAssembler {
        &self.assembler
    }

    // -- Snapshot and utility methods --------------------------------------

    /// The snapshot queries currently run against.
    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    /// Re-read the catalog tables and swap in a new snapshot.
    ///
    /// NDJSON files are re-imported first. Returns `true` if the catalog
    /// changed. A caller-supplied snapshot is never refreshed, so this
    /// returns `false` for that source.
    pub fn refresh(&mut self) -> Result<bool> {
        match &self.source {
            SnapshotSource::Snapshot(_) => return Ok(false),
            SnapshotSource::DataDir(dir) => self.conn.register_data_dir(dir)?,
            SnapshotSource::Database(_) => {}
        }
        let fresh = self.conn.load_snapshot()?;
        let changed = fresh != self.snapshot;
        if changed {
            self.snapshot = fresh;
            info!(items = self.snapshot.items().len(), "catalog snapshot refreshed");
        }
        Ok(changed)
    }

    /// Execute a raw SQL query against the DuckDB database.
    ///
    /// # Arguments
    ///
    /// * `query` - SQL string with `?` positional placeholders.
    /// * `params` - Parameter values corresponding to the placeholders.
    pub fn sql(
        &self,
        query: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        self.conn.execute(query, params)
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CoordiSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CoordiSdk({}, tables=[{}], brands={}, categories={}, items={})",
            self.source,
            self.conn.tables().join(", "),
            self.snapshot.brands().len(),
            self.snapshot.categories().len(),
            self.snapshot.items().len()
        )
    }
}

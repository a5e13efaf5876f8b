//! Async wrapper around [`CoordiSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Ranking is CPU-bound and fast; snapshot loading touches DuckDB and disk.
//!
//! # Example
//!
//! ```no_run
//! use coordi_sdk::AsyncCoordiSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncCoordiSdk::builder().data_dir("./catalog").build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let coordinate = sdk.run(|s| s.coordinates().cheapest()).await.unwrap();
//! }
//! ```

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::{CoordiError, Result};
use crate::format::PriceFormat;
use crate::models::{BrandCoordinate, CategoryExtremesResult, Coordinate};
use crate::snapshot::CatalogSnapshot;
use crate::{CoordiSdk, CoordiSdkBuilder};

// ---------------------------------------------------------------------------
// AsyncCoordiSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCoordiSdk`] instance.
#[derive(Default)]
pub struct AsyncCoordiSdkBuilder {
    inner: CoordiSdkBuilder,
}

impl AsyncCoordiSdkBuilder {
    /// Read the catalog from NDJSON files in `path`.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.data_dir(path);
        self
    }

    /// Read the catalog from an existing DuckDB database file.
    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.database(path);
        self
    }

    /// Use an already-built snapshot.
    pub fn snapshot(mut self, snapshot: CatalogSnapshot) -> Self {
        self.inner = self.inner.snapshot(snapshot);
        self
    }

    /// Set the display format used by the view assembler.
    pub fn price_format(mut self, format: PriceFormat) -> Self {
        self.inner = self.inner.price_format(format);
        self
    }

    /// Build the async SDK.
    ///
    /// Snapshot loading runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncCoordiSdk> {
        let builder = self.inner;
        tokio::task::spawn_blocking(move || {
            let sdk = builder.build()?;
            Ok(AsyncCoordiSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| CoordiError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCoordiSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`CoordiSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`CoordiSdk`] is
/// protected by a [`Mutex`] since its DuckDB connection is not `Sync`.
pub struct AsyncCoordiSdk {
    inner: Arc<Mutex<CoordiSdk>>,
}

impl AsyncCoordiSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncCoordiSdkBuilder {
        AsyncCoordiSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&CoordiSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CoordiSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| CoordiError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| CoordiError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Cheapest item of every category.
    pub async fn cheapest(&self) -> Result<Coordinate> {
        self.run(|s| s.coordinates().cheapest()).await
    }

    /// Cheapest single-brand coordinate.
    pub async fn cheapest_by_brand(&self) -> Result<BrandCoordinate> {
        self.run(|s| s.coordinates().cheapest_by_brand()).await
    }

    /// Cheapest and most expensive items of a named category.
    pub async fn extremes_by_category_name(&self, name: &str) -> Result<CategoryExtremesResult> {
        let name = name.to_string();
        self.run(move |s| s.coordinates().extremes_by_category_name(&name))
            .await
    }

    /// Re-read the catalog and swap in a new snapshot.
    pub async fn refresh(&self) -> Result<bool> {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = sdk
                .lock()
                .map_err(|_| CoordiError::InvalidArgument("SDK lock poisoned".into()))?;
            guard.refresh()
        })
        .await
        .map_err(|e| CoordiError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

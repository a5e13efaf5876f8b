//! Query modules for the coordi SDK.
//!
//! Each module provides a query struct that borrows a
//! [`CatalogSnapshot`](crate::snapshot::CatalogSnapshot) and exposes typed
//! lookups or rankings over it.

pub mod catalog;
pub mod coordinates;

pub use catalog::CatalogQuery;
pub use coordinates::CoordinateQuery;

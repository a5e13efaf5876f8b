//! Display views of coordinate results.
//!
//! Views carry resolved names and formatted price strings, and serialize with
//! the catalog's Korean field names (`카테고리`, `브랜드`, `가격`, `총액`,
//! `최저가`, `최고가`).

use serde::{Deserialize, Serialize};

use crate::format::{format_price, PriceFormat};
use crate::models::{BrandCoordinate, CatalogEntry, CategoryExtremesResult, Coordinate};

// ---------------------------------------------------------------------------
// Item views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductView {
    #[serde(rename = "카테고리")]
    pub category_name: String,
    #[serde(rename = "가격")]
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductWithBrandView {
    #[serde(rename = "카테고리")]
    pub category_name: String,
    #[serde(rename = "브랜드")]
    pub brand_name: String,
    #[serde(rename = "가격")]
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandPriceView {
    #[serde(rename = "브랜드")]
    pub brand_name: String,
    #[serde(rename = "가격")]
    pub price: String,
}

// ---------------------------------------------------------------------------
// Result views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateView {
    #[serde(rename = "카테고리")]
    pub products: Vec<ProductWithBrandView>,
    #[serde(rename = "총액")]
    pub total_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandCoordinateView {
    #[serde(rename = "브랜드")]
    pub brand_name: String,
    #[serde(rename = "카테고리")]
    pub products: Vec<ProductView>,
    #[serde(rename = "총액")]
    pub total_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryExtremesView {
    #[serde(rename = "카테고리")]
    pub category_name: String,
    #[serde(rename = "최저가")]
    pub cheapest: Vec<BrandPriceView>,
    #[serde(rename = "최고가")]
    pub most_expensive: Vec<BrandPriceView>,
}

/// Envelope for the coordinate views, `{"최저가": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheapestView<T> {
    #[serde(rename = "최저가")]
    pub cheapest: T,
}

impl<T> CheapestView<T> {
    pub fn new(cheapest: T) -> Self {
        Self { cheapest }
    }
}

// ---------------------------------------------------------------------------
// Assembler
// ---------------------------------------------------------------------------

/// Builds views from coordinate results with a fixed [`PriceFormat`].
#[derive(Debug, Clone, Default)]
pub struct ViewAssembler {
    format: PriceFormat,
}

impl ViewAssembler {
    pub fn new(format: PriceFormat) -> Self {
        Self { format }
    }

    pub fn price_format(&self) -> &PriceFormat {
        &self.format
    }

    pub fn coordinate(&self, coordinate: &Coordinate) -> CoordinateView {
        CoordinateView {
            products: coordinate
                .entries
                .iter()
                .map(|e| self.product_with_brand(e))
                .collect(),
            total_price: format_price(coordinate.total_price, &self.format),
        }
    }

    pub fn brand_coordinate(&self, coordinate: &BrandCoordinate) -> BrandCoordinateView {
        BrandCoordinateView {
            brand_name: coordinate.brand.name.clone(),
            products: coordinate.entries.iter().map(|e| self.product(e)).collect(),
            total_price: format_price(coordinate.total_price, &self.format),
        }
    }

    pub fn category_extremes(&self, result: &CategoryExtremesResult) -> CategoryExtremesView {
        CategoryExtremesView {
            category_name: result.category.name.clone(),
            cheapest: result.cheapest.iter().map(|e| self.brand_price(e)).collect(),
            most_expensive: result
                .most_expensive
                .iter()
                .map(|e| self.brand_price(e))
                .collect(),
        }
    }

    fn product(&self, entry: &CatalogEntry) -> ProductView {
        ProductView {
            category_name: entry.category.name.clone(),
            price: format_price(entry.item.price, &self.format),
        }
    }

    fn product_with_brand(&self, entry: &CatalogEntry) -> ProductWithBrandView {
        ProductWithBrandView {
            category_name: entry.category.name.clone(),
            brand_name: entry.brand.name.clone(),
            price: format_price(entry.item.price, &self.format),
        }
    }

    fn brand_price(&self, entry: &CatalogEntry) -> BrandPriceView {
        BrandPriceView {
            brand_name: entry.brand.name.clone(),
            price: format_price(entry.item.price, &self.format),
        }
    }
}

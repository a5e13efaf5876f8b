//! SDK facade tests: builder sources, refresh, raw SQL, and the async wrapper.

mod common;

use coordi_sdk::{CatalogSnapshot, CoordiError, CoordiSdk, PriceFormat};
use rust_decimal_macros::dec;

#[test]
fn build_from_data_dir() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_sample_files(tmp.path());

    let sdk = CoordiSdk::builder().data_dir(tmp.path()).build().unwrap();
    assert_eq!(sdk.snapshot().items().len(), 72);
    assert_eq!(sdk.coordinates().cheapest().unwrap().total_price, dec!(34100));
    assert_eq!(sdk.coordinates().cheapest_by_brand().unwrap().brand.name, "D");
}

#[test]
fn build_from_missing_data_dir_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let result = CoordiSdk::builder()
        .data_dir(tmp.path().join("missing"))
        .build();
    assert!(matches!(result, Err(CoordiError::NotFound(_))));
}

#[test]
fn build_from_snapshot() {
    let sdk = CoordiSdk::builder()
        .snapshot(common::sample_snapshot())
        .build()
        .unwrap();

    let result = sdk
        .coordinates()
        .extremes_by_category_name("상의")
        .unwrap();
    assert_eq!(result.cheapest[0].brand.name, "C");
    assert_eq!(result.most_expensive[0].brand.name, "I");
    assert_eq!(sdk.catalog().brands().len(), 9);
}

#[test]
fn build_from_empty_snapshot() {
    let sdk = CoordiSdk::builder()
        .snapshot(CatalogSnapshot::empty())
        .build()
        .unwrap();

    assert!(sdk.coordinates().cheapest().unwrap().entries.is_empty());
    assert!(matches!(
        sdk.coordinates().cheapest_by_brand(),
        Err(CoordiError::NotFound(_))
    ));
}

#[test]
fn build_from_data_dir_without_products() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_sample_files(tmp.path());
    common::write_ndjson(&tmp.path().join("products.ndjson"), Vec::new());

    let sdk = CoordiSdk::builder().data_dir(tmp.path()).build().unwrap();
    let coordinate = sdk.coordinates().cheapest().unwrap();
    assert!(coordinate.entries.is_empty());
    assert_eq!(coordinate.total_price, dec!(0));
    assert!(matches!(
        sdk.coordinates().cheapest_by_brand(),
        Err(CoordiError::NotFound(_))
    ));
}

#[test]
fn build_from_data_dir_with_quote_in_path() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("o'brien");
    std::fs::create_dir(&dir).unwrap();
    common::write_sample_files(&dir);

    let sdk = CoordiSdk::builder().data_dir(&dir).build().unwrap();
    assert_eq!(sdk.coordinates().cheapest().unwrap().total_price, dec!(34100));
}

#[test]
fn last_source_wins() {
    let tmp = tempfile::tempdir().unwrap();
    let sdk = CoordiSdk::builder()
        .data_dir(tmp.path().join("missing"))
        .snapshot(common::sample_snapshot())
        .build()
        .unwrap();
    assert_eq!(sdk.snapshot().items().len(), 72);
}

#[test]
fn views_use_builder_price_format() {
    let sdk = CoordiSdk::builder()
        .snapshot(common::sample_snapshot())
        .price_format(PriceFormat::default().with_fraction_digits(1))
        .build()
        .unwrap();

    let coordinate = sdk.coordinates().cheapest().unwrap();
    assert_eq!(sdk.views().coordinate(&coordinate).total_price, "34,100.0");
}

#[test]
fn refresh_picks_up_changed_files() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_sample_files(tmp.path());
    let mut sdk = CoordiSdk::builder().data_dir(tmp.path()).build().unwrap();

    assert!(!sdk.refresh().unwrap());

    // Brand A now sells every category for 100.
    let mut items = common::items();
    for item in items.iter_mut().filter(|i| i.brand_id.0 == 1) {
        item.price = dec!(100);
    }
    common::write_ndjson(
        &tmp.path().join("products.ndjson"),
        items.iter().map(|i| {
            serde_json::json!({
                "id": i.id.0,
                "categoryId": i.category_id.0,
                "brandId": i.brand_id.0,
                "price": i.price.to_string()
            })
        }),
    );

    assert!(sdk.refresh().unwrap());
    let bundle = sdk.coordinates().cheapest_by_brand().unwrap();
    assert_eq!(bundle.brand.name, "A");
    assert_eq!(bundle.total_price, dec!(800));
}

#[test]
fn refresh_is_noop_for_supplied_snapshot() {
    let mut sdk = CoordiSdk::builder()
        .snapshot(common::sample_snapshot())
        .build()
        .unwrap();
    assert!(!sdk.refresh().unwrap());
}

#[test]
fn sql_escape_hatch() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_sample_files(tmp.path());
    let sdk = CoordiSdk::builder().data_dir(tmp.path()).build().unwrap();

    let rows = sdk
        .sql(
            "SELECT COUNT(*) AS n FROM products WHERE CAST(\"brandId\" AS VARCHAR) = ?",
            &["4".to_string()],
        )
        .unwrap();
    assert_eq!(rows[0]["n"], 8);
}

#[test]
fn display_summarizes_sdk() {
    let sdk = CoordiSdk::builder()
        .snapshot(common::sample_snapshot())
        .build()
        .unwrap();
    let text = sdk.to_string();
    assert!(text.starts_with("CoordiSdk(snapshot"));
    assert!(text.contains("items=72"));
}

#[cfg(feature = "async")]
mod async_sdk {
    use super::common;
    use coordi_sdk::{AsyncCoordiSdk, CoordiError};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn async_queries_run_on_blocking_pool() {
        let sdk = AsyncCoordiSdk::builder()
            .snapshot(common::sample_snapshot())
            .build()
            .await
            .unwrap();

        assert_eq!(sdk.cheapest().await.unwrap().total_price, dec!(34100));
        assert_eq!(sdk.cheapest_by_brand().await.unwrap().brand.name, "D");
        let extremes = sdk.extremes_by_category_name("상의").await.unwrap();
        assert_eq!(extremes.most_expensive[0].brand.name, "I");
        assert!(!sdk.refresh().await.unwrap());
    }

    #[tokio::test]
    async fn async_errors_propagate() {
        let sdk = AsyncCoordiSdk::builder()
            .snapshot(common::sample_snapshot())
            .build()
            .await
            .unwrap();

        let err = sdk.extremes_by_category_name("").await.unwrap_err();
        assert!(matches!(err, CoordiError::InvalidArgument(_)));
    }
}

//! Countries Service Tests

use pretty_assertions::assert_eq;
use tokio_test::{assert_err, assert_ok};
use uuid::Uuid;

use contacts_manager::application::dto::CountryAddRequest;
use contacts_manager::application::services::{CountriesService, CountryError};

use crate::common::{countries_workbook, country_request, unknown_id, TestServices};

#[tokio::test]
async fn test_add_country_requires_request() {
    let services = TestServices::new();

    let err = services.countries.add_country(None).await.unwrap_err();

    assert!(matches!(err, CountryError::NullArgument(_)));
}

#[tokio::test]
async fn test_add_country_requires_name() {
    let services = TestServices::new();

    let err = services
        .countries
        .add_country(Some(CountryAddRequest { name: None }))
        .await
        .unwrap_err();

    assert!(matches!(err, CountryError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_whitespace_only_country_name_is_rejected() {
    let services = TestServices::new();

    let err = assert_err!(services.countries.add_country(Some(country_request("   "))).await);

    assert!(matches!(err, CountryError::InvalidArgument(_)));
    assert!(services.countries.get_all_countries().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_country_name_is_rejected() {
    let services = TestServices::new();

    let poland = assert_ok!(services.countries.add_country(Some(country_request("Poland"))).await);
    assert_ne!(poland.id, Uuid::nil());

    let err = assert_err!(services.countries.add_country(Some(country_request("Poland"))).await);
    assert!(matches!(err, CountryError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_only_repeated_names_fail() {
    let services = TestServices::new();
    let names = ["Poland", "Canada", "Poland", "Japan", "Canada", "India"];

    let mut ids = Vec::new();
    let mut failures = 0;
    for name in names {
        match services.countries.add_country(Some(country_request(name))).await {
            Ok(country) => ids.push(country.id),
            Err(CountryError::InvalidArgument(_)) => failures += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(ids.len(), 4);
    assert_eq!(failures, 2);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[tokio::test]
async fn test_get_all_countries_empty_then_in_insertion_order() {
    let services = TestServices::new();
    assert!(services.countries.get_all_countries().await.unwrap().is_empty());

    for name in ["Poland", "Canada"] {
        services.countries.add_country(Some(country_request(name))).await.unwrap();
    }

    let names: Vec<String> = services
        .countries
        .get_all_countries()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Poland", "Canada"]);
}

#[tokio::test]
async fn test_get_country_by_id() {
    let services = TestServices::new();
    let added = services
        .countries
        .add_country(Some(country_request("Poland")))
        .await
        .unwrap();

    let found = services.countries.get_country_by_country_id(Some(added.id)).await.unwrap();
    assert_eq!(found, Some(added));

    assert_eq!(services.countries.get_country_by_country_id(None).await.unwrap(), None);
    assert_eq!(
        services.countries.get_country_by_country_id(Some(unknown_id())).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn test_upload_counts_only_new_names() {
    let services = TestServices::new();
    services.countries.add_country(Some(country_request("India"))).await.unwrap();

    let workbook = countries_workbook("Countries", &["India", "Japan", "Japan", " Brazil "]);
    let inserted = services.countries.upload_countries_from_excel(&workbook).await.unwrap();

    assert_eq!(inserted, 2);
    let names: Vec<String> = services
        .countries
        .get_all_countries()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["India", "Japan", "Brazil"]);
}

#[tokio::test]
async fn test_upload_skips_names_add_country_would_reject() {
    let services = TestServices::new();
    let too_long = "X".repeat(150);

    assert_err!(services.countries.add_country(Some(country_request(&too_long))).await);

    let workbook = countries_workbook("Countries", &[too_long.as_str(), "Japan"]);
    let inserted = assert_ok!(services.countries.upload_countries_from_excel(&workbook).await);

    assert_eq!(inserted, 1);
    let names: Vec<String> = services
        .countries
        .get_all_countries()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Japan"]);
}

#[tokio::test]
async fn test_upload_without_countries_sheet_fails() {
    let services = TestServices::new();
    let workbook = countries_workbook("Sheet1", &["India"]);

    let err = services
        .countries
        .upload_countries_from_excel(&workbook)
        .await
        .unwrap_err();

    assert!(matches!(err, CountryError::Import(_)));
}

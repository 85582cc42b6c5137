//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure. Everything runs against
//! the in-memory repositories; no database is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use axum_test::TestServer;
use chrono::NaiveDate;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::FirstName;
use fake::Fake;
use rust_xlsxwriter::Workbook;
use tower::ServiceExt;
use uuid::Uuid;

use contacts_manager::application::dto::{CountryAddRequest, PersonAddRequest};
use contacts_manager::application::services::{CountriesServiceImpl, PersonsServiceImpl};
use contacts_manager::config::CorsSettings;
use contacts_manager::domain::Gender;
use contacts_manager::infrastructure::repositories::{
    InMemoryCountryRepository, InMemoryPersonRepository,
};
use contacts_manager::startup::{build_router, AppState};

pub type TestPersonsService = PersonsServiceImpl<InMemoryPersonRepository, InMemoryCountryRepository>;
pub type TestCountriesService = CountriesServiceImpl<InMemoryCountryRepository>;

/// Both services sharing one in-memory country store
pub struct TestServices {
    pub persons: TestPersonsService,
    pub countries: TestCountriesService,
}

impl TestServices {
    pub fn new() -> Self {
        let country_repo = Arc::new(InMemoryCountryRepository::new());
        let person_repo = Arc::new(InMemoryPersonRepository::new());

        Self {
            persons: PersonsServiceImpl::new(person_repo, country_repo.clone()),
            countries: CountriesServiceImpl::new(country_repo),
        }
    }
}

/// Test application over a fresh in-memory state
pub struct TestApp {
    pub router: Router,
    pub server: TestServer,
}

impl TestApp {
    pub async fn new() -> Self {
        let cors = CorsSettings {
            allowed_origins: vec!["http://localhost:3000".into()],
        };
        let router = build_router(AppState::in_memory(), &cors);
        let server = TestServer::new(router.clone()).expect("Failed to start test server");

        Self { router, server }
    }

    /// Make a GET request straight through the router
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// A valid add-person request with generated name and email
pub fn fake_person_request() -> PersonAddRequest {
    let name: String = FirstName().fake();
    let email: String = SafeEmail().fake();

    PersonAddRequest {
        name: Some(name),
        email: Some(email),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
        gender: Some(Gender::Female),
        country_id: None,
        address: Some("12 Long Street".into()),
        receive_newsletters: false,
    }
}

/// A valid add-person request with a fixed name
pub fn person_request(name: &str) -> PersonAddRequest {
    PersonAddRequest {
        name: Some(name.to_string()),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        ..fake_person_request()
    }
}

/// A country request
pub fn country_request(name: &str) -> CountryAddRequest {
    CountryAddRequest::new(name)
}

/// An xlsx workbook with one worksheet holding a header and the given names
pub fn countries_workbook(sheet: &str, names: &[&str]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();
    worksheet.write_string(0, 0, "CountryName").unwrap();
    for (row, name) in names.iter().enumerate() {
        worksheet.write_string(row as u32 + 1, 0, *name).unwrap();
    }
    workbook.save_to_buffer().unwrap()
}

/// A random id no store has seen
pub fn unknown_id() -> Uuid {
    Uuid::new_v4()
}

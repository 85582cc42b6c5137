//! Person API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use contacts_manager::application::dto::{CountryResponse, PersonResponse};

use crate::common::{person_request, TestApp};

async fn add(app: &TestApp, name: &str) -> PersonResponse {
    let response = app
        .server
        .post("/api/v1/persons")
        .json(&person_request(name))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

fn names(persons: &[PersonResponse]) -> Vec<&str> {
    persons.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_create_and_fetch_person() {
    let app = TestApp::new().await;
    let created = add(&app, "Mary").await;

    let fetched: PersonResponse = app
        .server
        .get(&format!("/api/v1/persons/{}", created.id))
        .await
        .json();

    assert_eq!(fetched, created);
    assert_eq!(fetched.gender.as_deref(), Some("Female"));
}

#[tokio::test]
async fn test_create_person_without_name_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/v1/persons")
        .json(&json!({ "email": "x@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], 10007);
}

#[tokio::test]
async fn test_list_defaults_to_name_ascending() {
    let app = TestApp::new().await;
    for name in ["Mary", "julia", "Adam"] {
        add(&app, name).await;
    }

    let listed: Vec<PersonResponse> = app.server.get("/api/v1/persons").await.json();

    assert_eq!(names(&listed), vec!["Adam", "julia", "Mary"]);
}

#[tokio::test]
async fn test_list_filters_then_sorts() {
    let app = TestApp::new().await;
    for name in ["Mary", "Julia", "Marek", "Tom"] {
        add(&app, name).await;
    }

    let listed: Vec<PersonResponse> = app
        .server
        .get("/api/v1/persons")
        .add_query_param("search_by", "PersonName")
        .add_query_param("search_string", "mar")
        .add_query_param("sort_by", "PersonName")
        .add_query_param("sort_order", "DESC")
        .await
        .json();

    assert_eq!(names(&listed), vec!["Mary", "Marek"]);
}

#[tokio::test]
async fn test_list_with_unknown_sort_field_is_bad_request() {
    let app = TestApp::new().await;
    add(&app, "Mary").await;

    let response = app
        .server
        .get("/api/v1/persons")
        .add_query_param("sort_by", "ShoeSize")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_filter_by_country_name() {
    let app = TestApp::new().await;
    let poland: CountryResponse = app
        .server
        .post("/api/v1/countries")
        .json(&json!({ "name": "Poland" }))
        .await
        .json();

    let mut request = person_request("Mary");
    request.country_id = Some(poland.id);
    app.server.post("/api/v1/persons").json(&request).await;
    add(&app, "Julia").await;

    let listed: Vec<PersonResponse> = app
        .server
        .get("/api/v1/persons")
        .add_query_param("search_by", "Country")
        .add_query_param("search_string", "poland")
        .await
        .json();

    assert_eq!(names(&listed), vec!["Mary"]);
    assert_eq!(listed[0].country.as_deref(), Some("Poland"));
}

#[tokio::test]
async fn test_update_uses_path_id() {
    let app = TestApp::new().await;
    let created = add(&app, "Mary").await;

    let mut update = created.to_update_request();
    update.id = uuid::Uuid::nil();
    update.name = Some("Marie".into());

    let response = app
        .server
        .put(&format!("/api/v1/persons/{}", created.id))
        .json(&update)
        .await;

    response.assert_status_ok();
    let updated: PersonResponse = response.json();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Marie");
}

#[tokio::test]
async fn test_update_unknown_person_is_bad_request() {
    let app = TestApp::new().await;
    let created = add(&app, "Mary").await;

    let response = app
        .server
        .put(&format!("/api/v1/persons/{}", uuid::Uuid::new_v4()))
        .json(&created.to_update_request())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_not_found() {
    let app = TestApp::new().await;
    let created = add(&app, "Mary").await;
    let path = format!("/api/v1/persons/{}", created.id);

    app.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
    app.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_csv_export_download() {
    let app = TestApp::new().await;
    add(&app, "Mary").await;

    let response = app.server.get("/api/v1/persons/export/csv").await;

    response.assert_status_ok();
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"persons.csv\""
    );
    let text = response.text();
    assert!(text.starts_with("PersonName,Email,DateOfBirth,Age,Gender,Country,Address,ReceiveNewsLetters"));
    assert!(text.contains("Mary,mary@example.com"));
}

#[tokio::test]
async fn test_excel_export_download() {
    let app = TestApp::new().await;
    add(&app, "Mary").await;

    let response = app.server.get("/api/v1/persons/export/excel").await;

    response.assert_status_ok();
    assert_eq!(
        response.header("content-type"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(&response.as_bytes()[..2], b"PK");
}

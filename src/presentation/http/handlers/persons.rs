//! Person Handlers

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::dto::{PersonAddRequest, PersonResponse, PersonUpdateRequest};
use crate::domain::{PersonField, SortOrder};
use crate::shared::error::AppError;
use crate::startup::AppState;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Query parameters for listing persons
#[derive(Debug, Default, Deserialize)]
pub struct PersonsQuery {
    pub search_by: Option<String>,
    pub search_string: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

fn parse_person_id(person_id: &str) -> Result<Uuid, AppError> {
    person_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid person ID".into()))
}

/// List persons, filtered then sorted (by name ascending unless told otherwise)
pub async fn list_persons(
    State(state): State<AppState>,
    Query(query): Query<PersonsQuery>,
) -> Result<Json<Vec<PersonResponse>>, AppError> {
    let persons = state
        .persons
        .get_filtered_persons(query.search_by.as_deref(), query.search_string.as_deref())
        .await?;

    let sort_by = query
        .sort_by
        .unwrap_or_else(|| PersonField::Name.as_str().to_string());
    let sort_order = query.sort_order.unwrap_or_default();

    let sorted = state
        .persons
        .get_sorted_persons(persons, Some(sort_by.as_str()), Some(sort_order))?;

    Ok(Json(sorted))
}

/// Add a person
pub async fn create_person(
    State(state): State<AppState>,
    Json(body): Json<PersonAddRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), AppError> {
    let person = state.persons.add_person(Some(body)).await?;

    Ok((StatusCode::CREATED, Json(person)))
}

/// Get person by ID
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<Json<PersonResponse>, AppError> {
    let person_id = parse_person_id(&person_id)?;

    state
        .persons
        .get_person_by_person_id(Some(person_id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Person not found".into()))
}

/// Update a person; the id in the path wins over the body
pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    Json(mut body): Json<PersonUpdateRequest>,
) -> Result<Json<PersonResponse>, AppError> {
    body.id = parse_person_id(&person_id)?;

    let person = state.persons.update_person(Some(body)).await?;

    Ok(Json(person))
}

/// Delete a person
pub async fn delete_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let person_id = parse_person_id(&person_id)?;

    if state.persons.delete_person(Some(person_id)).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Person not found".into()))
    }
}

/// Download all persons as CSV
pub async fn export_csv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bytes = state.persons.get_persons_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"persons.csv\""),
        ],
        bytes,
    ))
}

/// Download all persons as an xlsx workbook
pub async fn export_excel(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bytes = state.persons.get_persons_excel().await?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"persons.xlsx\""),
        ],
        bytes,
    ))
}

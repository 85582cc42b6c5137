//! Country Handlers

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::dto::{CountryAddRequest, CountryResponse};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Multipart field carrying the workbook
const UPLOAD_FIELD: &str = "file";

/// Result of a workbook upload
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadCountriesResponse {
    pub inserted: usize,
}

/// List all countries
pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryResponse>>, AppError> {
    let countries = state.countries.get_all_countries().await?;

    Ok(Json(countries))
}

/// Add a country
pub async fn create_country(
    State(state): State<AppState>,
    Json(body): Json<CountryAddRequest>,
) -> Result<(StatusCode, Json<CountryResponse>), AppError> {
    let country = state.countries.add_country(Some(body)).await?;

    Ok((StatusCode::CREATED, Json(country)))
}

/// Get country by ID
pub async fn get_country(
    State(state): State<AppState>,
    Path(country_id): Path<String>,
) -> Result<Json<CountryResponse>, AppError> {
    let country_id: Uuid = country_id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid country ID".into()))?;

    state
        .countries
        .get_country_by_country_id(Some(country_id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Country not found".into()))
}

/// Import countries from an uploaded xlsx workbook
pub async fn upload_countries(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadCountriesResponse>, AppError> {
    let workbook = read_workbook(&mut multipart).await?;

    let inserted = state.countries.upload_countries_from_excel(&workbook).await?;

    Ok(Json(UploadCountriesResponse { inserted }))
}

/// Pull the xlsx bytes out of the `file` field.
async fn read_workbook(multipart: &mut Multipart) -> Result<Vec<u8>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let is_xlsx = field
            .file_name()
            .is_some_and(|name| name.to_ascii_lowercase().ends_with(".xlsx"));
        if !is_xlsx {
            return Err(AppError::BadRequest(
                "Unsupported file. 'xlsx' file is expected".into(),
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Please select an xlsx file".into()));
        }

        return Ok(bytes.to_vec());
    }

    Err(AppError::BadRequest("Please select an xlsx file".into()))
}

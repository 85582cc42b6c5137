//! Spreadsheet Module
//!
//! Reads the country list from uploaded xlsx workbooks (calamine) and renders
//! person listings as CSV (csv) or xlsx (rust_xlsxwriter).

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use crate::application::dto::PersonResponse;

/// Worksheet read by country import
pub const COUNTRIES_WORKSHEET: &str = "Countries";

/// Worksheet written by person export
pub const PERSONS_WORKSHEET: &str = "PersonsSheet";

/// Column headers of the CSV export
pub const CSV_HEADERS: [&str; 8] = [
    "PersonName",
    "Email",
    "DateOfBirth",
    "Age",
    "Gender",
    "Country",
    "Address",
    "ReceiveNewsLetters",
];

/// Column headers of the xlsx export
pub const EXCEL_HEADERS: [&str; 8] = [
    "Person Name",
    "Email",
    "Date Of Birth",
    "Age",
    "Gender",
    "Country",
    "Address",
    "Receive News Letters",
];

const HEADER_BACKGROUND: u32 = 0xADD8E6;

/// Spreadsheet errors
#[derive(Debug, thiserror::Error)]
pub enum SpreadsheetError {
    #[error("Unreadable workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("Worksheet '{0}' not found")]
    MissingWorksheet(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),

    #[error("Buffer error: {0}")]
    Buffer(String),
}

/// Country names from the first column of the `Countries` worksheet.
///
/// The first row is a header. Blank cells are skipped; names are trimmed.
pub fn read_country_names(bytes: &[u8]) -> Result<Vec<String>, SpreadsheetError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;

    if !workbook
        .sheet_names()
        .iter()
        .any(|name| name == COUNTRIES_WORKSHEET)
    {
        return Err(SpreadsheetError::MissingWorksheet(
            COUNTRIES_WORKSHEET.to_string(),
        ));
    }

    let range = workbook.worksheet_range(COUNTRIES_WORKSHEET)?;

    Ok(range
        .rows()
        .skip(1)
        .filter_map(|row| row.first())
        .filter(|cell| !matches!(cell, Data::Empty))
        .map(|cell| cell.to_string().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect())
}

/// Render persons as CSV with a header row.
pub fn write_persons_csv(persons: &[PersonResponse]) -> Result<Vec<u8>, SpreadsheetError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for person in persons {
        writer.write_record([
            person.name.clone(),
            person.email.clone(),
            person
                .date_of_birth
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            person.age.map(|a| a.to_string()).unwrap_or_default(),
            person.gender.clone().unwrap_or_default(),
            person.country.clone().unwrap_or_default(),
            person.address.clone().unwrap_or_default(),
            person.receive_newsletters.to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| SpreadsheetError::Buffer(e.to_string()))
}

/// Render persons as an xlsx workbook with a styled header row.
pub fn write_persons_excel(persons: &[PersonResponse]) -> Result<Vec<u8>, SpreadsheetError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(PERSONS_WORKSHEET)?;

    let header = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(HEADER_BACKGROUND));
    for (col, title) in EXCEL_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (index, person) in persons.iter().enumerate() {
        write_person_row(worksheet, index as u32 + 1, person)?;
    }

    worksheet.autofit();

    Ok(workbook.save_to_buffer()?)
}

fn write_person_row(
    worksheet: &mut Worksheet,
    row: u32,
    person: &PersonResponse,
) -> Result<(), SpreadsheetError> {
    worksheet.write_string(row, 0, &person.name)?;
    worksheet.write_string(row, 1, &person.email)?;
    if let Some(dob) = person.date_of_birth {
        worksheet.write_string(row, 2, dob.format("%Y-%m-%d").to_string())?;
    }
    if let Some(age) = person.age {
        worksheet.write_number(row, 3, age as f64)?;
    }
    if let Some(gender) = &person.gender {
        worksheet.write_string(row, 4, gender)?;
    }
    if let Some(country) = &person.country {
        worksheet.write_string(row, 5, country)?;
    }
    if let Some(address) = &person.address {
        worksheet.write_string(row, 6, address)?;
    }
    worksheet.write_boolean(row, 7, person.receive_newsletters)?;

    Ok(())
}

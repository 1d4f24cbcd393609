use crate::error::{AppError, AppResult, CsvError};
use crate::models::library_row::LibraryRow;
use std::path::Path;
use tokio::fs;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Load the library export from disk
///
/// # Arguments
/// - `csv_path`: exported CSV file
///
/// # Returns
/// One row per record, in file order
pub async fn load_library_export(csv_path: &Path) -> AppResult<Vec<LibraryRow>> {
    let display = csv_path.display().to_string();

    if !csv_path.exists() {
        return Err(AppError::file_not_found(display));
    }

    let content = fs::read_to_string(csv_path)
        .await
        .map_err(|e| AppError::file_read_failed(display.as_str(), e))?;

    tracing::info!(
        "Reading library export: {}",
        csv_path.file_name().unwrap_or_default().to_string_lossy()
    );

    let rows = parse_library_export(&content)?;
    tracing::info!("Loaded {} rows", rows.len());

    Ok(rows)
}

/// Parse library export text
///
/// The first record is the header. Quoted cells may contain commas and
/// newlines. Records shorter or longer than the header are accepted.
pub fn parse_library_export(content: &str) -> AppResult<Vec<LibraryRow>> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| AppError::Csv(CsvError::BadHeader { source }))?
        .clone();

    if headers.is_empty() {
        tracing::warn!("Library export has no header row");
        return Ok(Vec::new());
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            AppError::bad_record(line, e)
        })?;

        let row = LibraryRow::from_record(&headers, &record);
        tracing::trace!("line {}: {} cells", row.line, row.cell_count());
        rows.push(row);
    }

    Ok(rows)
}

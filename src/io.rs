use std::collections::HashSet;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use csv::StringRecord;

use crate::error::LoadError;
use crate::models::{CuisineRecord, CuisineRow, CuisineTable, REQUIRED_COLUMNS};

/// File extensions read as spreadsheet workbooks; anything else is CSV
const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Load and validate the cuisine data file at `path`.
///
/// Workbooks (`.xlsx`, `.xls`, ...) are read from their first sheet, any
/// other file as CSV. Both go through the same column and row checks.
pub fn read_cuisines<P: AsRef<Path>>(path: P) -> Result<CuisineTable, LoadError> {
    let path = path.as_ref();
    log::info!("Loading cuisine data from {}", path.display());

    if is_workbook(path) {
        let bytes = std::fs::read(path)?;
        return read_cuisines_from_workbook(Cursor::new(bytes));
    }

    let file = File::open(path)?;
    read_cuisines_from_reader(file)
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| WORKBOOK_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Load and validate cuisine data from any CSV source.
///
/// Fails on the first problem: unreadable input, no data, a missing
/// required column, or a row that does not convert to a [`CuisineRecord`].
pub fn read_cuisines_from_reader<R: Read>(reader: R) -> Result<CuisineTable, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let rows = rdr.into_records().map(|result| -> Result<_, LoadError> {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        Ok((line, record))
    });
    build_table(&headers, rows)
}

/// Load and validate cuisine data from the first sheet of a workbook.
///
/// The first non-empty row holds the column names. Line numbers in errors
/// are sheet row numbers, so the header of a sheet starting at A1 is line 1.
pub fn read_cuisines_from_workbook<RS>(reader: RS) -> Result<CuisineTable, LoadError>
where
    RS: Read + Seek + Clone,
{
    let mut workbook = open_workbook_auto_from_rs(reader)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Err(LoadError::Empty),
    };
    let first_row = range.start().map(|(row, _)| u64::from(row)).unwrap_or(0);

    let mut rows = range
        .rows()
        .enumerate()
        .map(|(i, cells)| (first_row + i as u64 + 1, cell_record(cells)))
        .filter(|(_, record)| record.iter().any(|c| !c.is_empty()));

    let Some((_, headers)) = rows.next() else {
        return Err(LoadError::Empty);
    };
    build_table(&headers, rows.map(Ok))
}

fn cell_record(cells: &[Data]) -> StringRecord {
    cells
        .iter()
        .map(|cell| match cell {
            Data::Empty => String::new(),
            other => other.to_string().trim().to_string(),
        })
        .collect()
}

/// Shared checks for every source: header, required columns, row validation
fn build_table<I>(headers: &StringRecord, rows: I) -> Result<CuisineTable, LoadError>
where
    I: IntoIterator<Item = Result<(u64, StringRecord), LoadError>>,
{
    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::Empty);
    }

    let missing = missing_columns(headers);
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    let mut seen_names = HashSet::new();

    for result in rows {
        let (line, record) = result?;

        let row: CuisineRow = record
            .deserialize(Some(headers))
            .map_err(|e| LoadError::InvalidRow {
                line,
                message: e.to_string(),
            })?;
        let cuisine =
            CuisineRecord::from_row(row).map_err(|message| LoadError::InvalidRow { line, message })?;

        if !seen_names.insert(cuisine.name.clone()) {
            log::warn!(
                "Duplicate cuisine name '{}' on line {}; wish list entries will refer to both",
                cuisine.name,
                line
            );
        }
        records.push(cuisine);
    }

    let table = CuisineTable::new(records);
    if table.is_empty() {
        return Err(LoadError::Empty);
    }

    log::info!("Loaded {} cuisines", table.len());
    Ok(table)
}

/// Required columns absent from `headers`, in canonical order
fn missing_columns(headers: &StringRecord) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h == **required))
        .map(|c| c.to_string())
        .collect()
}

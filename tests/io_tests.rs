use cuisine_explorer::error::LoadError;
use cuisine_explorer::io::{read_cuisines, read_cuisines_from_reader};
use rust_xlsxwriter::Workbook;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

// Test fixtures - sample data for testing

const HEADER: &str =
    "Cuisine Name,Region,Ingredients,Price Range,Star Rating,Specialty,Image URL";

fn create_sample_csv_content() -> String {
    format!(
        r#"{HEADER}
Hyderabadi Biryani,Telangana,"Basmati rice, mutton, saffron",350,5,Dum cooked,https://img.example.com/biryani.jpg
Masala Dosa,Karnataka,"Rice batter, potato",120,4,Crisp crepe,
Rogan Josh,Kashmir,"Lamb, Kashmiri chilli",450,5,,https://img.example.com/rogan.jpg
Dhokla,Gujarat,Gram flour,80,3,Steamed snack,"#
    )
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

// Tests for read_cuisines

#[test]
fn test_read_cuisines_valid_file() {
    let temp_file = write_temp(&create_sample_csv_content());

    let table = read_cuisines(temp_file.path()).unwrap();

    assert_eq!(table.len(), 4);
    let first = &table.records()[0];
    assert_eq!(first.name, "Hyderabadi Biryani");
    assert_eq!(first.region, "Telangana");
    assert_eq!(first.ingredients, "Basmati rice, mutton, saffron");
    assert_eq!(first.price, 350);
    assert_eq!(first.rating, 5);
    assert_eq!(first.specialty.as_deref(), Some("Dum cooked"));
    assert_eq!(
        first.image_url.as_deref(),
        Some("https://img.example.com/biryani.jpg")
    );
}

#[test]
fn test_read_cuisines_keeps_file_order() {
    let temp_file = write_temp(&create_sample_csv_content());
    let table = read_cuisines(temp_file.path()).unwrap();

    let names: Vec<&str> = table.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Hyderabadi Biryani", "Masala Dosa", "Rogan Josh", "Dhokla"]
    );
}

#[test]
fn test_read_cuisines_optional_fields() {
    let temp_file = write_temp(&create_sample_csv_content());
    let table = read_cuisines(temp_file.path()).unwrap();

    assert_eq!(table.records()[1].image_url, None);
    assert_eq!(table.records()[2].specialty, None);
    assert!(table.records()[2].image_url.is_some());
}

#[test]
fn test_read_cuisines_columns_in_any_order() {
    let content = "Star Rating,Image URL,Cuisine Name,Specialty,Price Range,Region,Ingredients\n\
                   4,,Appam,Lacy edges,60,Kerala,Rice";
    let table = read_cuisines_from_reader(content.as_bytes()).unwrap();
    let record = &table.records()[0];
    assert_eq!(record.name, "Appam");
    assert_eq!(record.rating, 4);
    assert_eq!(record.price, 60);
    assert_eq!(record.region, "Kerala");
}

#[test]
fn test_read_cuisines_extra_columns_are_ignored() {
    let content = format!("{HEADER},Chef\nAppam,Kerala,Rice,60,4,Lacy edges,,Anna");
    let table = read_cuisines_from_reader(content.as_bytes()).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn test_read_cuisines_nonexistent_file() {
    let result = read_cuisines("/this/file/does/not/exist.csv");
    assert!(matches!(result, Err(LoadError::Io(_))));
}

#[test]
fn test_read_cuisines_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();
    // File is empty, no content written

    let result = read_cuisines(temp_file.path());
    assert!(matches!(result, Err(LoadError::Empty)));
}

#[test]
fn test_read_cuisines_only_headers() {
    let temp_file = write_temp(HEADER);

    let result = read_cuisines(temp_file.path());
    assert!(matches!(result, Err(LoadError::Empty)));
}

#[test]
fn test_read_cuisines_missing_columns_are_all_reported() {
    let content = "Cuisine Name,Region,Ingredients,Star Rating\nDosa,Karnataka,Rice,4";

    match read_cuisines_from_reader(content.as_bytes()) {
        Err(LoadError::MissingColumns(columns)) => {
            assert_eq!(columns, vec!["Price Range", "Specialty", "Image URL"]);
        }
        other => panic!("Expected MissingColumns, got: {other:?}"),
    }
}

#[test]
fn test_missing_columns_message_lists_names() {
    let err = read_cuisines_from_reader("Region\nGoa".as_bytes()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("required columns are missing"));
    assert!(message.contains("Cuisine Name, Ingredients, Price Range"));
}

#[test]
fn test_read_cuisines_invalid_rating_reports_line() {
    let content = format!("{HEADER}\nDosa,Karnataka,Rice,120,4,Crisp,\nIdli,Karnataka,Rice,60,7,Soft,");

    match read_cuisines_from_reader(content.as_bytes()) {
        Err(LoadError::InvalidRow { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("Star Rating"));
        }
        other => panic!("Expected InvalidRow, got: {other:?}"),
    }
}

#[test]
fn test_read_cuisines_invalid_price() {
    let content = format!("{HEADER}\nDosa,Karnataka,Rice,cheap,4,Crisp,");
    let result = read_cuisines_from_reader(content.as_bytes());
    assert!(matches!(result, Err(LoadError::InvalidRow { line: 2, .. })));
}

#[test]
fn test_read_cuisines_short_row_is_invalid() {
    let content = format!("{HEADER}\nDosa,Karnataka");
    let result = read_cuisines_from_reader(content.as_bytes());
    assert!(matches!(result, Err(LoadError::InvalidRow { .. })));
}

#[test]
fn test_read_cuisines_trims_cells() {
    let content = format!("{HEADER}\n  Dosa  , Karnataka ,Rice, 120 , 4 , Crisp ,  ");
    let table = read_cuisines_from_reader(content.as_bytes()).unwrap();
    let record = &table.records()[0];
    assert_eq!(record.name, "Dosa");
    assert_eq!(record.region, "Karnataka");
    assert_eq!(record.price, 120);
    assert_eq!(record.specialty.as_deref(), Some("Crisp"));
    assert_eq!(record.image_url, None);
}

#[test]
fn test_read_cuisines_duplicate_names_are_kept() {
    let content = format!("{HEADER}\nDosa,Karnataka,Rice,120,4,Crisp,\nDosa,Tamil Nadu,Rice,100,5,Ghee roast,");
    let table = read_cuisines_from_reader(content.as_bytes()).unwrap();
    assert_eq!(table.len(), 2);
}

// Workbook fixtures

enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

const HEADER_CELLS: [&str; 7] = [
    "Cuisine Name",
    "Region",
    "Ingredients",
    "Price Range",
    "Star Rating",
    "Specialty",
    "Image URL",
];

fn write_workbook(dir: &Path, file_name: &str, header: &[&str], rows: &[Vec<Cell>]) -> PathBuf {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    sheet.write_string(r, col as u16, *text).unwrap();
                }
                Cell::Number(n) => {
                    sheet.write_number(r, col as u16, *n).unwrap();
                }
                Cell::Blank => {}
            }
        }
    }
    let path = dir.join(file_name);
    workbook.save(&path).unwrap();
    path
}

fn sample_workbook_rows() -> Vec<Vec<Cell<'static>>> {
    vec![
        vec![
            Cell::Text("Hyderabadi Biryani"),
            Cell::Text("Telangana"),
            Cell::Text("Basmati rice, mutton, saffron"),
            Cell::Number(350.0),
            Cell::Number(5.0),
            Cell::Text("Dum cooked"),
            Cell::Text("https://img.example.com/biryani.jpg"),
        ],
        vec![
            Cell::Text("Masala Dosa"),
            Cell::Text("Karnataka"),
            Cell::Text("Rice batter, potato"),
            Cell::Text("₹120"),
            Cell::Number(4.0),
            Cell::Blank,
            Cell::Blank,
        ],
    ]
}

#[test]
fn test_read_cuisines_xlsx_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_workbook(
        temp_dir.path(),
        "local_cuisines_data.xlsx",
        &HEADER_CELLS,
        &sample_workbook_rows(),
    );

    let table = read_cuisines(&path).unwrap();

    assert_eq!(table.len(), 2);
    let first = &table.records()[0];
    assert_eq!(first.name, "Hyderabadi Biryani");
    assert_eq!(first.ingredients, "Basmati rice, mutton, saffron");
    assert_eq!(first.price, 350);
    assert_eq!(first.rating, 5);
    assert_eq!(
        first.image_url.as_deref(),
        Some("https://img.example.com/biryani.jpg")
    );

    let second = &table.records()[1];
    assert_eq!(second.price, 120);
    assert_eq!(second.specialty, None);
    assert_eq!(second.image_url, None);
}

#[test]
fn test_read_cuisines_xlsx_extension_is_case_insensitive() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_workbook(temp_dir.path(), "DATA.XLSX", &HEADER_CELLS, &sample_workbook_rows());

    assert_eq!(read_cuisines(&path).unwrap().len(), 2);
}

#[test]
fn test_read_cuisines_xlsx_missing_columns() {
    let temp_dir = TempDir::new().unwrap();
    let header = ["Cuisine Name", "Region", "Ingredients", "Price Range", "Specialty"];
    let rows = vec![vec![
        Cell::Text("Dosa"),
        Cell::Text("Karnataka"),
        Cell::Text("Rice"),
        Cell::Number(120.0),
        Cell::Text("Crisp"),
    ]];
    let path = write_workbook(temp_dir.path(), "partial.xlsx", &header, &rows);

    match read_cuisines(&path) {
        Err(LoadError::MissingColumns(columns)) => {
            assert_eq!(columns, vec!["Star Rating", "Image URL"]);
        }
        other => panic!("Expected MissingColumns, got: {other:?}"),
    }
}

#[test]
fn test_read_cuisines_xlsx_invalid_rating_reports_sheet_row() {
    let temp_dir = TempDir::new().unwrap();
    let mut rows = sample_workbook_rows();
    rows[1][4] = Cell::Number(7.0);
    let path = write_workbook(temp_dir.path(), "bad.xlsx", &HEADER_CELLS, &rows);

    match read_cuisines(&path) {
        Err(LoadError::InvalidRow { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("Star Rating"));
        }
        other => panic!("Expected InvalidRow, got: {other:?}"),
    }
}

#[test]
fn test_read_cuisines_xlsx_only_headers() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_workbook(temp_dir.path(), "headers.xlsx", &HEADER_CELLS, &[]);

    assert!(matches!(read_cuisines(&path), Err(LoadError::Empty)));
}

#[test]
fn test_read_cuisines_xlsx_not_a_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.xlsx");
    std::fs::write(&path, create_sample_csv_content()).unwrap();

    assert!(matches!(read_cuisines(&path), Err(LoadError::Spreadsheet(_))));
}

#[test]
fn test_read_cuisines_xlsx_nonexistent_file() {
    let result = read_cuisines("/this/file/does/not/exist.xlsx");
    assert!(matches!(result, Err(LoadError::Io(_))));
}

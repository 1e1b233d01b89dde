use std::fmt;

/// Errors that abort loading the cuisine table
#[derive(Debug)]
pub enum LoadError {
    /// File could not be opened or read
    Io(std::io::Error),
    /// CSV structure could not be parsed
    Csv(csv::Error),
    /// Spreadsheet workbook could not be opened or parsed
    Spreadsheet(calamine::Error),
    /// The file holds no data rows
    Empty,
    /// One or more required columns are absent from the header
    MissingColumns(Vec<String>),
    /// A data row failed validation (line is 1-based, header is line 1)
    InvalidRow { line: u64, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Could not read the data file: {}", e),
            LoadError::Csv(e) => write!(f, "Could not parse the data file: {}", e),
            LoadError::Spreadsheet(e) => write!(f, "Could not read the workbook: {}", e),
            LoadError::Empty => write!(f, "The data file is empty."),
            LoadError::MissingColumns(columns) => write!(
                f,
                "The following required columns are missing from the data file: {}",
                columns.join(", ")
            ),
            LoadError::InvalidRow { line, message } => {
                write!(f, "Invalid record on line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            LoadError::Spreadsheet(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err)
    }
}

impl From<calamine::Error> for LoadError {
    fn from(err: calamine::Error) -> Self {
        LoadError::Spreadsheet(err)
    }
}

/// Errors raised while fetching or decoding a cuisine image
#[derive(Debug)]
pub enum ImageError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// Cache file I/O error
    Io(std::io::Error),
    /// Downloaded bytes are not a decodable image
    Decode(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Network(e) => write!(f, "Network error: {}", e),
            ImageError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            ImageError::Io(e) => write!(f, "I/O error: {}", e),
            ImageError::Decode(msg) => write!(f, "Image error: {}", msg),
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::Network(e) => Some(e),
            ImageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ImageError {
    fn from(err: reqwest::Error) -> Self {
        ImageError::Network(err)
    }
}

impl From<std::io::Error> for ImageError {
    fn from(err: std::io::Error) -> Self {
        ImageError::Io(err)
    }
}

impl From<image::ImageError> for ImageError {
    fn from(err: image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

/// Result type alias for image operations
pub type ImageResult<T> = Result<T, ImageError>;

use crate::types::ImportId;

/// Domain error for the import and analysis operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Uploaded file is empty")]
    EmptyInput,

    #[error("File must be of type CSV: {0}")]
    InvalidFileType(String),

    #[error("Error processing CSV file: {0}")]
    CsvProcessing(#[from] ParseError),

    #[error("No {entity} found for import id: {id}")]
    NotFound { entity: &'static str, id: ImportId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CoreError {
    /// Wrap any store-specific failure as an opaque [`CoreError::Storage`].
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }
}

/// Failure while turning uploaded bytes into movie records.
///
/// `line` is the 1-based physical line of the offending row.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: record must have at least 5 columns: year;title;studios;producers;winner")]
    MalformedRecord { line: u64 },

    #[error("line {line}: year must be a valid number: {value}")]
    InvalidYear { line: u64, value: String },

    #[error("failed to read delimited input: {0}")]
    Read(#[from] csv::Error),
}

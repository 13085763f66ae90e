use thiserror::Error;

/// Failures raised by the workbook access layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IoError {
    /// Lookup of a sheet that does not exist (create-if-missing was off).
    #[error("sheet `{name}` was not found in the workbook")]
    SheetNotFound { name: String },
}

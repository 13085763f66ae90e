use blockmap_workbook::IoError;
use thiserror::Error;

/// Failures surfaced while resolving layout metadata. All are fatal to the
/// resolution pass; nothing is retried or swallowed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlockMapError {
    /// A required option is absent, or present but not usable as a range.
    #[error("option `{key}` is missing or does not describe a usable range")]
    ConfigurationMissing { key: String },

    /// An option row resolved to an empty value.
    #[error("option `{key}` resolved to an empty value")]
    ConfigurationValueNull { key: String },

    /// Workbook-layer failure (metadata sheet lookup), passed through
    /// unchanged.
    #[error(transparent)]
    Io(#[from] IoError),
}

use thiserror::Error;

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur on the mapping facade.
///
/// Conversion itself is best-effort: unsupported variants and unresolved
/// references are logged and skipped, never surfaced as errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("update called before a successful load")]
    NotLoaded,
}

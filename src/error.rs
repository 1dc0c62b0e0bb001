//! Error types for precheck operations.
//!
//! Missing tools are not errors: they are accumulated into a
//! [`CheckReport`](crate::requirements::CheckReport) and reported in
//! aggregate at the end of the pass. [`PrecheckError`] covers only the
//! operational failures around that check.

use thiserror::Error;

/// Core error type for precheck operations.
#[derive(Debug, Error)]
pub enum PrecheckError {
    /// IO error wrapper (report writing is the only fallible operation).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for precheck operations.
pub type Result<T> = std::result::Result<T, PrecheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: PrecheckError = io_err.into();
        assert!(matches!(err, PrecheckError::Io(_)));
    }

    #[test]
    fn io_error_displays_cause() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: PrecheckError = io_err.into();
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom").into())
        }
        assert!(returns_error().is_err());
    }
}

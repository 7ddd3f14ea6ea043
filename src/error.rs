//! Error types for padel-sessions.

use thiserror::Error;

/// Main error type for padel-sessions operations.
#[derive(Error, Debug)]
pub enum PadelError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal lock was poisoned.
    #[error("internal lock poisoned")]
    LockPoisoned,

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Convenience Result type for padel-sessions operations.
pub type Result<T> = std::result::Result<T, PadelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: PadelError = io_err.into();
        assert!(matches!(err, PadelError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_lock_poisoned_display() {
        let err = PadelError::LockPoisoned;
        assert!(err.to_string().contains("poisoned"));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: PadelError = crate::config::ConfigError::InvalidHost("nowhere".into()).into();
        assert!(matches!(err, PadelError::Config(_)));
        assert!(err.to_string().contains("nowhere"));
    }
}

use thiserror::Error;

/// Top-level error type for the catering assistant.
///
/// Subsystem crates define their own error types and implement
/// `From<CaterError>` so that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CaterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown page context: {0}")]
    UnknownPageContext(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),
}

impl From<toml::de::Error> for CaterError {
    fn from(err: toml::de::Error) -> Self {
        CaterError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CaterError {
    fn from(err: toml::ser::Error) -> Self {
        CaterError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CaterError {
    fn from(err: serde_json::Error) -> Self {
        CaterError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for catering assistant operations.
pub type Result<T> = std::result::Result<T, CaterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CaterError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = CaterError::UnknownLanguage("de".to_string());
        assert_eq!(err.to_string(), "Unknown language: de");

        let err = CaterError::UnknownPageContext("gallery".to_string());
        assert_eq!(err.to_string(), "Unknown page context: gallery");

        let err = CaterError::UnknownService("bbq".to_string());
        assert_eq!(err.to_string(), "Unknown service: bbq");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CaterError = io_err.into();
        assert!(matches!(err, CaterError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: CaterError = parse_err.into();
        assert!(matches!(err, CaterError::Config(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CaterError = json_err.into();
        assert!(matches!(err, CaterError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}

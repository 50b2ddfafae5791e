//! Error types for Stellar Folio

use thiserror::Error;

/// Main error type for page behavior operations
///
/// None of these reach the visitor: behaviors log them and skip silently.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Page configuration was not valid JSON
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Page configuration parsed but holds an out-of-range value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A required element is absent from the document
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A browser API call failed
    #[error("DOM error: {0}")]
    Dom(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = FolioError::MissingElement("#hero-title".to_string());
        assert_eq!(err.to_string(), "Missing element: #hero-title");

        let err = FolioError::InvalidConfig("trail_capacity must be at least 2".to_string());
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FolioError = parse.into();
        assert!(matches!(err, FolioError::Config(_)));
    }
}

use thiserror::Error;

/// Release log error types
#[derive(Error, Debug)]
pub enum ReleaseLogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Lint error: {0}")]
    Lint(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("State file error: {0}")]
    State(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for release log operations
pub type Result<T> = std::result::Result<T, ReleaseLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = ReleaseLogError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_error_display_parse() {
        let err = ReleaseLogError::Parse {
            line: 12,
            message: "unexpected heading".to_string(),
        };
        assert_eq!(err.to_string(), "Parse error at line 12: unexpected heading");
    }

    #[test]
    fn test_error_display_lint() {
        let err = ReleaseLogError::Lint("3 violation(s)".to_string());
        assert_eq!(err.to_string(), "Lint error: 3 violation(s)");
    }

    #[test]
    fn test_error_display_document() {
        let err = ReleaseLogError::Document("no such version".to_string());
        assert_eq!(err.to_string(), "Document error: no such version");
    }
}

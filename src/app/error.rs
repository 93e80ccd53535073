use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please enter some text to explain.")]
    EmptyInput,

    #[error("No API key configured. Set EXPLAINPAD_API_KEY (or GROQ_API_KEY) and restart.")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Http(String),

    #[error("{message}")]
    Upstream { status: i32, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::EmptyInput;
        assert_eq!(err.to_string(), "Please enter some text to explain.");

        let err = AppError::Http("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = AppError::Upstream {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_missing_key_names_the_variable() {
        let err = AppError::MissingApiKey;
        assert!(err.to_string().contains("EXPLAINPAD_API_KEY"));
    }
}

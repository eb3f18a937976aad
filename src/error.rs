//! Listing Viewer Error Types
//!
//! 애플리케이션 전역 에러 타입 정의

use serde::Serialize;
use thiserror::Error;

/// 매물 뷰어 에러
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0} while fetching payload")]
    HttpStatus(u16),

    #[error("Invalid payload source: {0}")]
    InvalidSource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

/// 명령 응답용 직렬화 가능한 에러
#[derive(Debug, Serialize)]
pub struct CommandError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl From<ListingError> for CommandError {
    fn from(error: ListingError) -> Self {
        let code = match &error {
            ListingError::Io(_) => "IO_ERROR",
            ListingError::Serialization(_) => "SERIALIZATION_ERROR",
            ListingError::Http(_) => "HTTP_ERROR",
            ListingError::HttpStatus(_) => "HTTP_STATUS_ERROR",
            ListingError::InvalidSource(_) => "INVALID_SOURCE",
            ListingError::Config(_) => "CONFIG_ERROR",
            ListingError::InvalidEvent(_) => "INVALID_EVENT",
            ListingError::Render(_) => "RENDER_ERROR",
        };

        CommandError {
            code: code.to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

/// 명령 결과 타입
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_codes() {
        let err: CommandError = ListingError::HttpStatus(404).into();
        assert_eq!(err.code, "HTTP_STATUS_ERROR");
        assert!(err.message.contains("404"));

        let err: CommandError = ListingError::InvalidEvent("jump".to_string()).into();
        assert_eq!(err.code, "INVALID_EVENT");
    }
}

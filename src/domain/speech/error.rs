use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("text too large: {0}")]
    TooLarge(String),
    #[error("voice service error: {0}")]
    Upstream(String),
    #[error("stream read error: {0}")]
    StreamRead(String),
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Invalid(msg) => AppError::Validation(msg),
            SpeechServiceError::TooLarge(msg) => AppError::PayloadTooLarge(msg),
            SpeechServiceError::Upstream(msg) => AppError::Upstream(msg),
            SpeechServiceError::StreamRead(msg) => AppError::StreamRead(msg),
        }
    }
}

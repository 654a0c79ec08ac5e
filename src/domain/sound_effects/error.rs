use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SoundEffectServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("voice service error: {0}")]
    Upstream(String),
    #[error("stream read error: {0}")]
    StreamRead(String),
}

impl From<SoundEffectServiceError> for AppError {
    fn from(err: SoundEffectServiceError) -> Self {
        match err {
            SoundEffectServiceError::Invalid(msg) => AppError::Validation(msg),
            SoundEffectServiceError::Upstream(msg) => AppError::Upstream(msg),
            SoundEffectServiceError::StreamRead(msg) => AppError::StreamRead(msg),
        }
    }
}

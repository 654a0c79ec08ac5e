use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum VoiceLibraryServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("voice service error: {0}")]
    Upstream(String),
}

impl From<VoiceLibraryServiceError> for AppError {
    fn from(err: VoiceLibraryServiceError) -> Self {
        match err {
            VoiceLibraryServiceError::Invalid(msg) => AppError::Validation(msg),
            VoiceLibraryServiceError::Upstream(msg) => AppError::Upstream(msg),
        }
    }
}

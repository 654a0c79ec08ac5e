use crate::domain::jobs::PollError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum DubbingServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("submission rejected: {0}")]
    Submission(String),
    #[error("dubbing failed: {0}")]
    JobFailed(String),
    #[error("dubbing timed out: {0}")]
    Timeout(String),
    #[error("cancelled: {0}")]
    Cancelled(String),
    #[error("result retrieval failed: {0}")]
    Fetch(String),
    #[error("stream read error: {0}")]
    StreamRead(String),
    #[error("voice service error: {0}")]
    Upstream(String),
}

impl From<PollError> for DubbingServiceError {
    fn from(err: PollError) -> Self {
        match err {
            PollError::JobFailed => {
                DubbingServiceError::JobFailed("Dubbing process failed".to_string())
            }
            PollError::TimedOut { attempts } => DubbingServiceError::Timeout(format!(
                "Dubbing did not finish within {} status checks",
                attempts
            )),
            PollError::Cancelled => {
                DubbingServiceError::Cancelled("Dubbing was cancelled".to_string())
            }
            PollError::Probe(msg) => DubbingServiceError::Upstream(msg),
        }
    }
}

impl From<DubbingServiceError> for AppError {
    fn from(err: DubbingServiceError) -> Self {
        match err {
            DubbingServiceError::Invalid(msg) => AppError::Validation(msg),
            DubbingServiceError::Submission(msg) => AppError::Submission(msg),
            DubbingServiceError::JobFailed(msg) => AppError::JobFailed(msg),
            DubbingServiceError::Timeout(msg) => AppError::JobTimeout(msg),
            DubbingServiceError::Cancelled(msg) => AppError::Cancelled(msg),
            DubbingServiceError::Fetch(msg) => AppError::Fetch(msg),
            DubbingServiceError::StreamRead(msg) => AppError::StreamRead(msg),
            DubbingServiceError::Upstream(msg) => AppError::Upstream(msg),
        }
    }
}

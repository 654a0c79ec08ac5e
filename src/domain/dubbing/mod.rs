pub mod error;
pub mod service;

pub use error::DubbingServiceError;
pub use service::{DubbingService, DubbingServiceApi};

/// One outstanding dubbing job on the provider side.
///
/// The job id is assigned at submission and never changes; the target
/// language is carried alongside because fetching the finished audio is a
/// separate call from checking status. The job is forgotten as soon as the
/// result is fetched or the poll loop gives up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformJob {
    pub job_id: String,
    pub target_language: String,
}

/// Parameters for creating a dubbing job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DubbingSubmission {
    pub name: String,
    pub target_language: String,
    /// 0 lets the provider detect the speaker count
    pub num_speakers: u32,
}

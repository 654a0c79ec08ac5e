use crate::domain::dubbing::{DubbingSubmission, TransformJob};
use crate::domain::jobs::JobStatus;
use crate::domain::shared::AudioUpload;
use crate::domain::streaming::AudioStream;
use async_trait::async_trait;

/// Repository for asynchronous dubbing jobs.
///
/// Implementations normalize the provider's status vocabulary to
/// [`JobStatus`] so the poll loop never parses provider strings. Fetching
/// the dubbed audio is only defined once a `Succeeded` status has been
/// observed; callers enforce that ordering.
#[async_trait]
pub trait DubbingRepository: Send + Sync {
    /// Create a dubbing job from uploaded audio.
    async fn submit(
        &self,
        submission: &DubbingSubmission,
        audio: AudioUpload,
    ) -> Result<TransformJob, String>;

    /// Query the current status of a submitted job.
    async fn job_status(&self, job_id: &str) -> Result<JobStatus, String>;

    /// Retrieve the dubbed audio for the given target language.
    async fn fetch_audio(&self, job_id: &str, language_code: &str)
        -> Result<AudioStream, String>;
}

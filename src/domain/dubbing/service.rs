use super::error::DubbingServiceError;
use super::{DubbingSubmission, TransformJob};
use crate::domain::jobs::{JobPoller, PollPolicy, Sleeper, TokioSleeper};
use crate::domain::shared::AudioUpload;
use crate::domain::streaming::relay_buffered;
use crate::infrastructure::repositories::DubbingRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub struct DubbingService<S: Sleeper = TokioSleeper> {
    dubbing_repo: Arc<dyn DubbingRepository>,
    poller: JobPoller<S>,
}

impl DubbingService<TokioSleeper> {
    pub fn new(dubbing_repo: Arc<dyn DubbingRepository>, policy: PollPolicy) -> Self {
        Self {
            dubbing_repo,
            poller: JobPoller::new(policy),
        }
    }
}

impl<S: Sleeper> DubbingService<S> {
    pub fn with_sleeper(
        dubbing_repo: Arc<dyn DubbingRepository>,
        policy: PollPolicy,
        sleeper: S,
    ) -> Self {
        Self {
            dubbing_repo,
            poller: JobPoller::with_sleeper(policy, sleeper),
        }
    }
}

#[async_trait]
pub trait DubbingServiceApi: Send + Sync {
    /// Translate recorded audio into the target language.
    ///
    /// Drives the full submit-poll-fetch workflow: the job is created on the
    /// provider, its status is checked on the configured cadence until it
    /// reaches a terminal state, and the dubbed audio is fetched only after
    /// the success marker has been observed. Cancelling `cancel` aborts the
    /// wait between status checks.
    async fn translate(
        &self,
        audio: AudioUpload,
        target_language: String,
        num_speakers: u32,
        cancel: CancellationToken,
    ) -> Result<Vec<u8>, DubbingServiceError>;
}

#[async_trait]
impl<S: Sleeper> DubbingServiceApi for DubbingService<S> {
    async fn translate(
        &self,
        audio: AudioUpload,
        target_language: String,
        num_speakers: u32,
        cancel: CancellationToken,
    ) -> Result<Vec<u8>, DubbingServiceError> {
        if audio.is_empty() {
            return Err(DubbingServiceError::Invalid(
                "Audio file cannot be empty".to_string(),
            ));
        }
        if target_language.trim().is_empty() {
            return Err(DubbingServiceError::Invalid(
                "Target language cannot be empty".to_string(),
            ));
        }

        let submission = DubbingSubmission {
            name: format!("Translation_{}", Uuid::new_v4().simple()),
            target_language: target_language.clone(),
            num_speakers,
        };

        tracing::info!(
            target_language = %target_language,
            num_speakers = num_speakers,
            audio_size = audio.data.len(),
            audio_content_type = %audio.content_type,
            "Submitting dubbing job"
        );

        let job = self
            .dubbing_repo
            .submit(&submission, audio)
            .await
            .map_err(DubbingServiceError::Submission)?;

        tracing::info!(
            job_id = %job.job_id,
            target_language = %job.target_language,
            "Dubbing job created, waiting for completion"
        );

        self.wait_for_job(&job, &cancel).await?;

        // Only reached after the success marker was observed
        let stream = self
            .dubbing_repo
            .fetch_audio(&job.job_id, &job.target_language)
            .await
            .map_err(DubbingServiceError::Fetch)?;

        let audio_data = relay_buffered(stream)
            .await
            .map_err(|e| DubbingServiceError::StreamRead(e.0))?;

        tracing::info!(
            job_id = %job.job_id,
            audio_size = audio_data.len(),
            "Dubbing completed"
        );

        Ok(audio_data)
    }
}

impl<S: Sleeper> DubbingService<S> {
    async fn wait_for_job(
        &self,
        job: &TransformJob,
        cancel: &CancellationToken,
    ) -> Result<(), DubbingServiceError> {
        let policy = self.poller.policy();
        self.poller
            .wait_until_complete(cancel, |attempt| {
                let repo = self.dubbing_repo.clone();
                let job_id = job.job_id.clone();
                async move {
                    tracing::debug!(
                        job_id = %job_id,
                        attempt = attempt,
                        max_attempts = policy.max_attempts,
                        "Checking dubbing status"
                    );
                    repo.job_status(&job_id).await
                }
            })
            .await
            .map_err(DubbingServiceError::from)
    }
}

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How often to check a job's status, and for how long.
///
/// The ceiling is deliberate: the poll loop runs inside an HTTP request
/// handler, so the caller's own connection lifetime bounds how long it can
/// wait. The default is 5 seconds between checks, 24 checks, a 120-second
/// ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_attempts: 24,
        }
    }
}

/// Normalized status of a provider-tracked job.
///
/// Provider vocabulary is mapped onto these four states at the repository
/// boundary; the poller only distinguishes in-progress from terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Processing,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, JobStatus::Pending | JobStatus::Processing)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PollError {
    #[error("job failed on the provider side")]
    JobFailed,

    #[error("job did not reach a terminal state within {attempts} status checks")]
    TimedOut { attempts: u32 },

    #[error("poll loop cancelled before the job completed")]
    Cancelled,

    #[error("status check failed: {0}")]
    Probe(String),
}

/// Abstraction over the inter-poll delay so tests can simulate elapsed time
/// without real waits.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Drives a submitted job to a terminal state by checking its status on a
/// fixed cadence.
///
/// State machine: an in-progress status sleeps and retries; `Succeeded`
/// stops polling (the caller may then fetch the result); `Failed` aborts
/// immediately without further checks; exhausting the attempt budget yields
/// `TimedOut` even though the job may still be running on the provider side.
/// Neither terminal state is ever left once entered.
pub struct JobPoller<S: Sleeper = TokioSleeper> {
    policy: PollPolicy,
    sleeper: S,
}

impl JobPoller<TokioSleeper> {
    pub fn new(policy: PollPolicy) -> Self {
        Self::with_sleeper(policy, TokioSleeper)
    }
}

impl<S: Sleeper> JobPoller<S> {
    pub fn with_sleeper(policy: PollPolicy, sleeper: S) -> Self {
        Self { policy, sleeper }
    }

    pub fn policy(&self) -> PollPolicy {
        self.policy
    }

    /// Poll `check_status` until the job reaches a terminal state, the
    /// attempt budget runs out, or `cancel` fires.
    ///
    /// `check_status` receives the 1-based attempt number. It is invoked at
    /// most `max_attempts` times, strictly sequentially; the loop suspends
    /// for the configured interval between checks. A status-check error is
    /// propagated immediately - only in-progress statuses are retried, never
    /// a failed or timed-out job.
    pub async fn wait_until_complete<F, Fut>(
        &self,
        cancel: &CancellationToken,
        mut check_status: F,
    ) -> Result<(), PollError>
    where
        F: FnMut(u32) -> Fut + Send,
        Fut: Future<Output = Result<JobStatus, String>> + Send,
    {
        for attempt in 1..=self.policy.max_attempts {
            if cancel.is_cancelled() {
                return Err(PollError::Cancelled);
            }

            let status = check_status(attempt).await.map_err(PollError::Probe)?;

            match status {
                JobStatus::Succeeded => return Ok(()),
                JobStatus::Failed => return Err(PollError::JobFailed),
                JobStatus::Pending | JobStatus::Processing => {
                    tracing::debug!(
                        attempt = attempt,
                        max_attempts = self.policy.max_attempts,
                        "Job still in progress"
                    );

                    // No sleep after the final check; it cannot change the outcome
                    if attempt == self.policy.max_attempts {
                        break;
                    }

                    tokio::select! {
                        _ = cancel.cancelled() => return Err(PollError::Cancelled),
                        _ = self.sleeper.sleep(self.policy.interval) => {}
                    }
                }
            }
        }

        Err(PollError::TimedOut {
            attempts: self.policy.max_attempts,
        })
    }
}

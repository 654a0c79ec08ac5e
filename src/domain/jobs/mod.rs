pub mod poller;

pub use poller::{JobPoller, JobStatus, PollError, PollPolicy, Sleeper, TokioSleeper};

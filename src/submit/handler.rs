use tracing::info;

use super::error::SubmitError;
use crate::model::Submission;

/// Receives a validated [`Submission`] and reports whether it was accepted.
pub trait SubmitHandler {
    fn submit(&mut self, submission: &Submission) -> Result<(), SubmitError>;
}

/// Logs each submission at `info` level with secrets redacted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHandler;

impl SubmitHandler for LogHandler {
    fn submit(&mut self, submission: &Submission) -> Result<(), SubmitError> {
        let payload = submission.redacted_json()?;
        info!(form = %submission.kind(), %payload, "form submitted");
        Ok(())
    }
}

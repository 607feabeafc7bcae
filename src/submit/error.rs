/// Errors a [`SubmitHandler`](super::SubmitHandler) can report back to a form.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The submission could not be serialized.
    #[error("could not encode submission: {0}")]
    Json(#[from] serde_json::Error),

    /// The receiving side refused the submission.
    #[error("submission rejected: {0}")]
    Rejected(String),
}

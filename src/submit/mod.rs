//! Submission handlers: the collaborator that receives validated form payloads.
//!
//! The shipped [`LogHandler`] performs no network I/O; it writes the payload
//! to the structured log. Anything that implements [`SubmitHandler`] can stand
//! in for it, and its failures surface inline on the submitting form.

mod error;
mod handler;

pub use error::SubmitError;
pub use handler::{LogHandler, SubmitHandler};

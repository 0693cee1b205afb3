//! The conversational agent: line parsing, the checkup flow, and the
//! session orchestrator that routes between them.

pub mod checkup;
pub mod session;
pub mod submission;

pub use checkup::CheckupState;
pub use session::{Message, Role, Session};
pub use submission::{Submission, SubmissionParser};

mod service;
mod snapshot;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use service::{QuizSession, SessionPhase};
pub use snapshot::SessionSnapshot;

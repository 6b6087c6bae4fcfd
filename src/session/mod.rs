//! Quiz progression state machine.
//!
//! [`QuizSession`] owns the single mutable [`SessionState`] for one run
//! through the lesson catalog. Operations never fail: a call that makes no
//! sense in the current state leaves the session untouched. Anything the
//! outside world has to act on (media, navigation) is queued as an
//! [`Effect`] and drained by the presentation layer.

mod controller;
mod state;

pub use controller::QuizSession;
pub use state::{SessionPhase, SessionState};

/// Side effect requested by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start (or resume) the given media reference.
    Play(String),
    /// Pause the active media.
    Pause,
    /// Stop and rewind any active media.
    StopMedia,
    /// Leave the quiz screen.
    NavigateHome,
}

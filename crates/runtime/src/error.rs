//! Unified error types surfaced by the session API.
//!
//! Wraps planning-time command rejections and session misuse so clients can
//! bubble them up with consistent context.
use thiserror::Error;

use pitch_core::CommandError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("command rejected: {0}")]
    Rejected(#[from] CommandError),

    #[error("the match is already over")]
    MatchOver,
}

use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: Cow<'static, str>,
    },
    #[error("no qualifying trials for {puzzle} in {trials} iterations")]
    NoQualifyingTrials { puzzle: &'static str, trials: u64 },
    #[error("worker pool setup failed: {0}")]
    WorkerPool(String),
}

impl SimError {
    pub fn invalid(field: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulatorError {
    /// Network-level failure reaching a peer service, including timeouts
    /// and error statuses. Expected while peers restart; the loop logs it
    /// and keeps its normal cadence.
    #[error("peer unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// A peer answered 2xx with a body we could not interpret. Treated as
    /// unexpected: the loop backs off before retrying.
    #[error("unexpected payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl SimulatorError {
    /// Transient errors are retried on the next cycle at normal cadence;
    /// everything else doubles the sleep first.
    pub fn is_transient(&self) -> bool {
        matches!(self, SimulatorError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, SimulatorError>;

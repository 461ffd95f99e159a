use battle_core::SimError;

/// Runtime errors
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The simulation itself failed (missing row, selection defect).
    #[error(transparent)]
    Sim(#[from] SimError),

    /// A content file could not be read or parsed.
    #[error("content load failed: {0}")]
    ContentLoad(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

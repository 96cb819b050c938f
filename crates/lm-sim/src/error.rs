use lm_colony::ColonyError;
use lm_core::LmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("no valid routes to simulate")]
    NoRoutes,

    #[error("number of ants must be > 0")]
    NoUnits,

    #[error("quota length {got} does not match route count {expected}")]
    QuotaMismatch { expected: usize, got: usize },

    #[error("route {index} does not join the same start and end rooms as route 0")]
    MismatchedRoute { index: usize },

    #[error(transparent)]
    Config(#[from] LmError),

    #[error("colony error: {0}")]
    Colony(#[from] ColonyError),
}

pub type SimResult<T> = Result<T, SimError>;

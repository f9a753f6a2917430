use thiserror::Error;

use trail_core::TrailError;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("controller configuration rejected: {0}")]
    Config(#[from] TrailError),
}

pub type ControllerResult<T> = Result<T, ControllerError>;

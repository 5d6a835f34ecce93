//! Error types for Coindash

use thiserror::Error;

/// The main error type for Coindash operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Rigid body missing for entity: {0}")]
    BodyNotFound(String),

    #[error("Boulder slot index out of range: {0}")]
    SlotOutOfRange(usize),

    #[error("Boulder slot already occupied: {0}")]
    SlotOccupied(usize),

    #[error("A coin is already present")]
    CoinAlreadyPresent,

    #[error("Window error: {0}")]
    WindowError(String),
}

/// Result type alias for Coindash operations
pub type Result<T> = std::result::Result<T, GameError>;

use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("cannot place {requested} mines, only {available} cells are eligible")]
    UnplaceableMines {
        requested: CellCount,
        available: CellCount,
    },
    #[error("mine coordinates fall outside the board")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;

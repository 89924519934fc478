use thiserror::Error;

use super::moves::Move;
use super::player::Player;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("Cannot apply move {mv}, it is not legal for {player}")]
    IllegalMoveError { mv: Move, player: Player },
    #[error("Cell {cell} is outside of the {width}x{height} board")]
    OutOfBoundsError { cell: Move, width: u8, height: u8 },
    #[error("Cannot place a player on cell {cell}, it is not empty")]
    CellNotEmptyError { cell: Move },
    #[error("Board dimensions must be between 1 and 255, got {width}x{height}")]
    InvalidDimensionsError { width: usize, height: usize },
    #[error("Board encoding has no width, cannot rebuild its geometry")]
    MissingGeometryError,
    #[error("Board encoding is inconsistent: {msg}")]
    InconsistentEncodingError { msg: &'static str },
    #[error("Invalid board notation: {msg}")]
    InvalidNotationError { msg: String },
}

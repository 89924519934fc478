pub mod encoding;
pub mod error;
pub mod moves;
pub mod player;

mod display;
mod notation;

#[cfg(test)]
mod tests;

pub use encoding::{BoardEncoding, Cell};
pub use error::BoardError;
pub use moves::{Move, MoveList, KNIGHT_OFFSETS};
pub use player::Player;

use rand::seq::SliceRandom;
use rand::Rng;

/// An immutable Isolation position. Applying a move produces a new board and
/// leaves the receiver untouched, so search can hold on to every ancestor
/// without undo bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsolationBoard {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
    locations: [Move; 2],
    active_player: Player,
    move_count: u32,
}

impl IsolationBoard {
    /// Creates an otherwise empty board with both players placed. Player one
    /// moves first.
    pub fn new(
        width: u8,
        height: u8,
        player_one: Move,
        player_two: Move,
    ) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensionsError {
                width: width as usize,
                height: height as usize,
            });
        }

        let mut board = Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
            locations: [player_one, player_two],
            active_player: Player::One,
            move_count: 0,
        };

        for player in Player::ALL {
            let cell = board.locations[player.index()];
            board.check_bounds(cell)?;
            let index = board.index(cell);
            if !board.cells[index].is_empty() {
                return Err(BoardError::CellNotEmptyError { cell });
            }
            board.cells[index] = Cell::Occupied(player);
        }

        Ok(board)
    }

    /// Builds a board from row-major cell contents. Each player must appear
    /// exactly once.
    pub fn from_cells(width: usize, height: usize, cells: &[Cell]) -> Result<Self, BoardError> {
        if width == 0 || height == 0 || width > u8::MAX as usize || height > u8::MAX as usize {
            return Err(BoardError::InvalidDimensionsError { width, height });
        }
        if cells.len() != width * height {
            return Err(BoardError::InconsistentEncodingError {
                msg: "cell count does not match the board dimensions",
            });
        }

        let mut locations: [Option<Move>; 2] = [None, None];
        for (index, cell) in cells.iter().enumerate() {
            if let Cell::Occupied(player) = cell {
                if locations[player.index()].is_some() {
                    return Err(BoardError::InconsistentEncodingError {
                        msg: "a player occupies more than one cell",
                    });
                }
                locations[player.index()] = Some(Move::from_index(index, width as u8));
            }
        }

        match locations {
            [Some(player_one), Some(player_two)] => Ok(Self {
                width: width as u8,
                height: height as u8,
                cells: cells.to_vec(),
                locations: [player_one, player_two],
                active_player: Player::One,
                move_count: 0,
            }),
            _ => Err(BoardError::InconsistentEncodingError {
                msg: "each player must occupy exactly one cell",
            }),
        }
    }

    /// Rebuilds a board from its raw encoding. The move counter is not part of
    /// the encoding and starts at zero.
    pub fn from_encoding(encoding: &BoardEncoding) -> Result<Self, BoardError> {
        let width = encoding.width.ok_or(BoardError::MissingGeometryError)?;
        if width == 0 || encoding.cells.len() % width != 0 {
            return Err(BoardError::InconsistentEncodingError {
                msg: "cell count is not a multiple of the width",
            });
        }
        let height = encoding.cells.len() / width;
        let board = Self::from_cells(width, height, &encoding.cells)?;

        for player in Player::ALL {
            if board.location(player).to_index(board.width) != encoding.location(player) {
                return Err(BoardError::InconsistentEncodingError {
                    msg: "player location does not match the occupied cell",
                });
            }
        }

        Ok(board.with_active_player(encoding.active_player))
    }

    /// A random starting position: both players and `blocked` obstacles are
    /// scattered over distinct cells.
    pub fn random<R: Rng>(
        width: u8,
        height: u8,
        blocked: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let cell_count = width as usize * height as usize;
        if cell_count < blocked + 2 {
            return Err(BoardError::InconsistentEncodingError {
                msg: "not enough cells for both players and the requested obstacles",
            });
        }

        let mut indices: Vec<usize> = (0..cell_count).collect();
        indices.shuffle(rng);

        let board = Self::new(
            width,
            height,
            Move::from_index(indices[0], width),
            Move::from_index(indices[1], width),
        )?;
        let obstacles: Vec<Move> = indices[2..2 + blocked]
            .iter()
            .map(|&index| Move::from_index(index, width))
            .collect();

        board.with_blocked(&obstacles)
    }

    pub fn with_blocked(mut self, blocked: &[Move]) -> Result<Self, BoardError> {
        for &cell in blocked {
            self.check_bounds(cell)?;
            let index = self.index(cell);
            if !self.cells[index].is_empty() {
                return Err(BoardError::CellNotEmptyError { cell });
            }
            self.cells[index] = Cell::Blocked;
        }
        Ok(self)
    }

    pub fn with_active_player(mut self, player: Player) -> Self {
        self.active_player = player;
        self
    }

    pub fn with_move_count(mut self, move_count: u32) -> Self {
        self.move_count = move_count;
        self
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn inactive_player(&self) -> Player {
        self.active_player.opponent()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn location(&self, player: Player) -> Move {
        self.locations[player.index()]
    }

    pub fn get(&self, cell: Move) -> Option<Cell> {
        if cell.is_on_board(self.width, self.height) {
            Some(self.cells[self.index(cell)])
        } else {
            None
        }
    }

    pub fn is_blank(&self, cell: Move) -> bool {
        matches!(self.get(cell), Some(Cell::Empty))
    }

    pub fn blank_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| Move::from_index(index, self.width))
            .collect()
    }

    /// Knight steps from `player`'s cell onto empty cells, in `KNIGHT_OFFSETS`
    /// order.
    pub fn legal_moves(&self, player: Player) -> MoveList {
        self.location(player)
            .knight_destinations(self.width, self.height)
            .filter(|&cell| self.is_blank(cell))
            .collect()
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves(self.active_player).contains(&mv)
    }

    /// Returns the position after the active player moves to `mv`.
    pub fn forecast_move(&self, mv: Move) -> Result<Self, BoardError> {
        let player = self.active_player;
        if !self.is_legal(mv) {
            return Err(BoardError::IllegalMoveError { mv, player });
        }

        let mut next = self.clone();
        let from = next.index(next.location(player));
        let to = next.index(mv);
        next.cells[from] = Cell::Blocked;
        next.cells[to] = Cell::Occupied(player);
        next.locations[player.index()] = mv;
        next.active_player = player.opponent();
        next.move_count += 1;
        Ok(next)
    }

    /// A player wins once the opponent is to move and has nowhere to go.
    pub fn is_winner(&self, player: Player) -> bool {
        player != self.active_player && self.legal_moves(self.active_player).is_empty()
    }

    /// A player loses when it is their turn and they have nowhere to go.
    pub fn is_loser(&self, player: Player) -> bool {
        player == self.active_player && self.legal_moves(self.active_player).is_empty()
    }

    pub fn encoding(&self) -> BoardEncoding {
        BoardEncoding {
            width: Some(self.width as usize),
            cells: self.cells.clone(),
            locations: [
                self.locations[0].to_index(self.width),
                self.locations[1].to_index(self.width),
            ],
            active_player: self.active_player,
        }
    }

    fn index(&self, cell: Move) -> usize {
        cell.to_index(self.width)
    }

    fn check_bounds(&self, cell: Move) -> Result<(), BoardError> {
        if cell.is_on_board(self.width, self.height) {
            Ok(())
        } else {
            Err(BoardError::OutOfBoundsError {
                cell,
                width: self.width,
                height: self.height,
            })
        }
    }
}

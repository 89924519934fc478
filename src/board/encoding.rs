use super::player::Player;

/// Contents of a single board cell. Cells a player has left behind are
/// `Blocked`, the same as cells blocked before the game started.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Empty,
    Blocked,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Blocked => '#',
            Cell::Occupied(player) => player.to_char(),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Blocked),
            _ => Player::from_char(c).map(Cell::Occupied),
        }
    }
}

/// Raw, hashable encoding of a position: row-major occupancy plus the
/// players' cell indices and the side to move.
///
/// `width` is optional so that encodings produced without geometry can be
/// represented; the symmetry transforms need it and yield nothing without it.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BoardEncoding {
    pub width: Option<usize>,
    pub cells: Vec<Cell>,
    pub locations: [usize; 2],
    pub active_player: Player,
}

impl BoardEncoding {
    pub fn location(&self, player: Player) -> usize {
        self.locations[player.index()]
    }

    /// Height implied by the cell count, when the width is known.
    pub fn height(&self) -> Option<usize> {
        match self.width {
            Some(width) if width > 0 => Some(self.cells.len() / width),
            _ => None,
        }
    }

    pub fn is_square(&self) -> bool {
        match self.width {
            Some(width) if width > 0 => width * width == self.cells.len(),
            _ => false,
        }
    }
}

use smallvec::SmallVec;
use std::fmt;

/// Knight steps in the order legal moves are enumerated. Search tie-breaking
/// depends on this order, so it must stay stable.
pub const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A knight can reach at most 8 cells, so move lists never spill to the heap.
pub type MoveList = SmallVec<[Move; 8]>;

/// The destination cell of a knight step.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index of this cell on a board `width` cells wide.
    pub fn to_index(&self, width: u8) -> usize {
        self.row as usize * width as usize + self.col as usize
    }

    pub fn from_index(index: usize, width: u8) -> Self {
        let width = width as usize;
        Self::new((index / width) as u8, (index % width) as u8)
    }

    pub fn is_on_board(&self, width: u8, height: u8) -> bool {
        self.row < height && self.col < width
    }

    pub fn is_on_border(&self, width: u8, height: u8) -> bool {
        self.row == 0 || self.col == 0 || self.row + 1 == height || self.col + 1 == width
    }

    /// Cells a knight standing here can reach on a `width` x `height` board,
    /// ignoring occupancy.
    pub fn knight_destinations(self, width: u8, height: u8) -> impl Iterator<Item = Move> {
        KNIGHT_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = self.row as i16 + dr;
            let col = self.col as i16 + dc;
            if row < 0 || col < 0 || row >= height as i16 || col >= width as i16 {
                None
            } else {
                Some(Move::new(row as u8, col as u8))
            }
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

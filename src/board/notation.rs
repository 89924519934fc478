//! Compact text notation for positions, in the spirit of FEN:
//! `<rows separated by '/'> <active player> <move count>`, for example
//! `1.#..../......./...2... 1 0`.

use std::str::FromStr;

use super::{BoardError, Cell, IsolationBoard, Player};

impl IsolationBoard {
    pub fn from_notation(notation: &str) -> Result<Self, BoardError> {
        let invalid = |msg: &str| BoardError::InvalidNotationError {
            msg: format!("{} in `{}`", msg, notation),
        };

        let fields: Vec<&str> = notation.split_whitespace().collect();
        let (rows_field, active_field, count_field) = match fields.as_slice() {
            [rows] => (*rows, "1", "0"),
            [rows, active] => (*rows, *active, "0"),
            [rows, active, count] => (*rows, *active, *count),
            _ => return Err(invalid("expected `<rows> [active player] [move count]`")),
        };

        let rows: Vec<&str> = rows_field.split('/').collect();
        let width = rows[0].chars().count();
        if rows.iter().any(|row| row.chars().count() != width) {
            return Err(invalid("rows have different lengths"));
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for c in rows.iter().flat_map(|row| row.chars()) {
            match Cell::from_char(c) {
                Some(cell) => cells.push(cell),
                None => return Err(invalid(&format!("unexpected cell `{}`", c))),
            }
        }

        let active_player = match Player::from_char_str(active_field) {
            Some(player) => player,
            None => return Err(invalid("active player must be `1` or `2`")),
        };
        let move_count = count_field
            .parse::<u32>()
            .map_err(|_| invalid("move count must be a non-negative integer"))?;

        Ok(Self::from_cells(width, rows.len(), &cells)?
            .with_active_player(active_player)
            .with_move_count(move_count))
    }

    pub fn to_notation(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(Cell::to_char).collect())
            .collect();
        format!(
            "{} {} {}",
            rows.join("/"),
            self.active_player.to_char(),
            self.move_count
        )
    }
}

impl Player {
    fn from_char_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Player::from_char(c),
            _ => None,
        }
    }
}

// used for parsing cli args
impl FromStr for IsolationBoard {
    type Err = BoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        Self::from_notation(notation)
    }
}

use super::IsolationBoard;
use std::fmt;

impl fmt::Display for IsolationBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height {
            let line: Vec<String> = (0..self.width)
                .map(|col| {
                    let index = row as usize * self.width as usize + col as usize;
                    self.cells[index].to_char().to_string()
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        write!(
            f,
            "{} to move, {} moves played",
            self.active_player, self.move_count
        )
    }
}

/// Builds a square `IsolationBoard` from a grid of `.` (empty), `#` (blocked),
/// `1` and `2` (players). Player one is to move and the move counter is zero;
/// adjust with `with_active_player` / `with_move_count`.
#[macro_export]
macro_rules! isolation_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<$crate::board::Cell> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .map(|c| {
                $crate::board::Cell::from_char(c)
                    .unwrap_or_else(|| panic!("Invalid character `{}` in isolation position", c))
            })
            .collect();
        let width = (cells.len() as f64).sqrt() as usize;
        assert_eq!(
            width * width,
            cells.len(),
            "Isolation positions must be square, got {} cells",
            cells.len()
        );
        $crate::board::IsolationBoard::from_cells(width, width, &cells)
            .expect("isolation position should be valid")
    }};
}

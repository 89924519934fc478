use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player arrays such as `BoardEncoding::locations`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn to_char(&self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Player::One),
            '2' => Some(Player::Two),
            _ => None,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Player::One)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.to_char())
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "1" | "one" => Ok(Player::One),
            "2" | "two" => Ok(Player::Two),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: 1, 2, random"),
        }
    }
}

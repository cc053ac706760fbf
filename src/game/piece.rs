use std::fmt::{Display, Formatter};

use crate::board::Side;

/// The contents of a single square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Attacker,
    Defender,
    King,
}

impl Piece {
    pub const ALL: [Piece; 4] = [Piece::Empty, Piece::Attacker, Piece::Defender, Piece::King];

    /// The side owning this piece. The king belongs to the defenders.
    pub fn side(self) -> Option<Side> {
        match self {
            Piece::Empty => None,
            Piece::Attacker => Some(Side::Attacker),
            Piece::Defender | Piece::King => Some(Side::Defender),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    /// Single character representation, using the classic black/white naming for attackers/defenders.
    pub fn to_char(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::Attacker => 'B',
            Piece::Defender => 'W',
            Piece::King => 'K',
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        Piece::ALL.into_iter().find(|p| p.to_char() == c)
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

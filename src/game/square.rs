use std::fmt::{Debug, Display, Formatter};

/// The number of squares on a side of the board.
pub const SIZE: u8 = 9;

/// The number of squares on the board.
pub const AREA: u8 = SIZE * SIZE;

/// A square on the 9x9 board, stored as `col + 9 * row`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Square(u8);

/// One of the four orthogonal directions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// The central square, where the king starts.
pub const THRONE: Square = Square(4 + 9 * 4);

/// The four squares orthogonally adjacent to the throne: e6, f5, e4 and d5.
pub const THRONE_ADJACENT: [Square; 4] = [Square(4 + 9 * 5), Square(5 + 9 * 4), Square(4 + 9 * 3), Square(3 + 9 * 4)];

pub type SquareAllIter = std::iter::Map<std::ops::Range<u8>, fn(u8) -> Square>;

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    /// The `(dx, dy)` offset of a single step in this direction, with north towards higher rows.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

impl Square {
    pub fn new(col: u8, row: u8) -> Square {
        assert!(col < SIZE && row < SIZE, "square ({}, {}) is not on the board", col, row);
        Square(col + SIZE * row)
    }

    pub fn try_new(col: i16, row: i16) -> Option<Square> {
        let range = 0..SIZE as i16;
        if range.contains(&col) && range.contains(&row) {
            Some(Square::new(col as u8, row as u8))
        } else {
            None
        }
    }

    pub fn from_index(index: u8) -> Square {
        assert!(index < AREA, "square index {} is not on the board", index);
        Square(index)
    }

    /// All squares in index order: a1, b1, ..., i1, a2, ..., i9.
    pub fn all() -> SquareAllIter {
        (0..AREA).map(Square::from_index)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn col(self) -> u8 {
        self.0 % SIZE
    }

    pub fn row(self) -> u8 {
        self.0 / SIZE
    }

    /// The square `steps` squares away in direction `dir`, if it is still on the board.
    pub fn step(self, dir: Direction, steps: u8) -> Option<Square> {
        let (dx, dy) = dir.delta();
        let steps = steps as i16;
        Square::try_new(self.col() as i16 + dx as i16 * steps, self.row() as i16 + dy as i16 * steps)
    }

    /// The orthogonal neighbors of this square that are on the board, in north, east, south, west order.
    pub fn neighbors(self) -> impl Iterator<Item = Square> {
        Direction::ALL.into_iter().filter_map(move |dir| self.step(dir, 1))
    }

    /// The direction from this square towards `other` if both are on the same row or column and distinct.
    pub fn direction_to(self, other: Square) -> Option<Direction> {
        if self == other {
            None
        } else if self.col() == other.col() {
            Some(if other.row() > self.row() {
                Direction::North
            } else {
                Direction::South
            })
        } else if self.row() == other.row() {
            Some(if other.col() > self.col() {
                Direction::East
            } else {
                Direction::West
            })
        } else {
            None
        }
    }

    pub fn distance(self, other: Square) -> u8 {
        self.col().abs_diff(other.col()) + self.row().abs_diff(other.row())
    }

    /// The square halfway between `self` and `other`, which must be exactly two squares apart on a line.
    pub fn between(self, other: Square) -> Square {
        assert!(
            self.direction_to(other).is_some() && self.distance(other) == 2,
            "{} and {} are not two squares apart on a line",
            self,
            other
        );
        Square::new((self.col() + other.col()) / 2, (self.row() + other.row()) / 2)
    }

    /// All squares on the rook path from `self` to `to`, excluding `self` and including `to`.
    /// Empty if the squares are equal or not on a common row or column.
    pub fn all_between(self, to: Square) -> Vec<Square> {
        match self.direction_to(to) {
            None => vec![],
            Some(dir) => (1..=self.distance(to))
                .map(|steps| {
                    // SAFETY: every step up to `to` stays on the board
                    self.step(dir, steps).unwrap()
                })
                .collect(),
        }
    }

    pub fn is_edge(self) -> bool {
        let last = SIZE - 1;
        self.col() == 0 || self.row() == 0 || self.col() == last || self.row() == last
    }

    /// Whether this is the throne or one of its four neighbors.
    pub fn is_throne_area(self) -> bool {
        self == THRONE || THRONE_ADJACENT.contains(&self)
    }

    pub fn to_notation(self) -> String {
        format!("{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }
}

impl Debug for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

//! Core value types shared by the board, move generator, and search.
//!
//! Squares are indexed `rank * 9 + file` with `0 == a1` and `80 == i9`.

/// Board edge length in squares.
pub const BOARD_SIZE: u8 = 9;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 81;

/// Board square index (`0..=80`).
pub type Square = u8;

/// Sentinel for "no square", used as the `to` of wall moves.
pub const SQUARE_NONE: Square = 255;

#[inline]
pub const fn make_square(rank: u8, file: u8) -> Square {
    rank * BOARD_SIZE + file
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / BOARD_SIZE
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % BOARD_SIZE
}

/// Player colour. White starts on rank 1 and races to rank 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

/// Orthogonal step directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Signed square-index delta for one step.
    #[inline]
    pub const fn delta(self) -> i16 {
        match self {
            Direction::North => BOARD_SIZE as i16,
            Direction::East => 1,
            Direction::South => -(BOARD_SIZE as i16),
            Direction::West => -1,
        }
    }

    /// Direction of a single orthogonal step `from -> to`, if it is one.
    #[inline]
    pub fn between(from: Square, to: Square) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| step(from, d) == Some(to))
    }

    /// The two directions perpendicular to `self`.
    #[inline]
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::East, Direction::West],
            Direction::East | Direction::West => [Direction::North, Direction::South],
        }
    }
}

/// Square one step from `square` in `direction`, or `None` when that leaves
/// the board.
#[inline]
pub const fn step(square: Square, direction: Direction) -> Option<Square> {
    let rank = rank_of(square);
    let file = file_of(square);
    match direction {
        Direction::North if rank + 1 < BOARD_SIZE => Some(square + BOARD_SIZE),
        Direction::South if rank > 0 => Some(square - BOARD_SIZE),
        Direction::East if file + 1 < BOARD_SIZE => Some(square + 1),
        Direction::West if file > 0 => Some(square - 1),
        _ => None,
    }
}

/// Move discriminant; decides how `Move::from`/`Move::to` are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Pawn,
    HorizontalWall,
    VerticalWall,
}

/// A pawn step or a wall placement.
///
/// For wall moves `from` is the wall's anchor square and `to` is
/// `SQUARE_NONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub move_type: MoveType,
}

impl Move {
    #[inline]
    pub const fn pawn(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            move_type: MoveType::Pawn,
        }
    }

    #[inline]
    pub const fn horizontal_wall(anchor: Square) -> Self {
        Self {
            from: anchor,
            to: SQUARE_NONE,
            move_type: MoveType::HorizontalWall,
        }
    }

    #[inline]
    pub const fn vertical_wall(anchor: Square) -> Self {
        Self {
            from: anchor,
            to: SQUARE_NONE,
            move_type: MoveType::VerticalWall,
        }
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        !matches!(self.move_type, MoveType::Pawn)
    }
}

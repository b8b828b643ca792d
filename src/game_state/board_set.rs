//! 81-square bit-set split across two machine words.
//!
//! Bits `0..64` live in `lower`, bits `64..81` in `upper`. Shifts carry across
//! the word boundary so a set can be moved north/south by a whole rank.
//! Bits above 80 may appear after `!` or a left shift; callers mask with
//! `BoardTables::valid_squares` where that matters.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

use crate::game_state::quoridor_types::{Direction, Square};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoardSet {
    pub lower: u64,
    pub upper: u64,
}

impl BoardSet {
    pub const EMPTY: BoardSet = BoardSet { lower: 0, upper: 0 };

    #[inline]
    pub const fn from_square(square: Square) -> Self {
        if square < 64 {
            Self {
                lower: 1u64 << square,
                upper: 0,
            }
        } else {
            Self {
                lower: 0,
                upper: 1u64 << (square - 64),
            }
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        (self.lower | self.upper) == 0
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        if square < 64 {
            (self.lower >> square) & 1 == 1
        } else {
            (self.upper >> (square - 64)) & 1 == 1
        }
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        *self |= BoardSet::from_square(square);
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        *self &= !BoardSet::from_square(square);
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.lower.count_ones() + self.upper.count_ones()
    }

    /// Remove and return the lowest member.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        if self.lower != 0 {
            let square = self.lower.trailing_zeros() as Square;
            self.lower &= self.lower - 1;
            Some(square)
        } else if self.upper != 0 {
            let square = self.upper.trailing_zeros() as Square + 64;
            self.upper &= self.upper - 1;
            Some(square)
        } else {
            None
        }
    }

    /// Shift every member one step in `direction`.
    ///
    /// East/west steps wrap across rank edges; mask the result when the wrap
    /// matters.
    #[inline]
    pub fn shift(self, direction: Direction) -> Self {
        let delta = direction.delta();
        if delta >= 0 {
            self << delta as u32
        } else {
            self >> delta.unsigned_abs() as u32
        }
    }
}

impl BitOr for BoardSet {
    type Output = BoardSet;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        BoardSet {
            lower: self.lower | rhs.lower,
            upper: self.upper | rhs.upper,
        }
    }
}

impl BitAnd for BoardSet {
    type Output = BoardSet;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        BoardSet {
            lower: self.lower & rhs.lower,
            upper: self.upper & rhs.upper,
        }
    }
}

impl BitXor for BoardSet {
    type Output = BoardSet;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        BoardSet {
            lower: self.lower ^ rhs.lower,
            upper: self.upper ^ rhs.upper,
        }
    }
}

impl Not for BoardSet {
    type Output = BoardSet;

    #[inline]
    fn not(self) -> Self::Output {
        BoardSet {
            lower: !self.lower,
            upper: !self.upper,
        }
    }
}

impl BitOrAssign for BoardSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.lower |= rhs.lower;
        self.upper |= rhs.upper;
    }
}

impl BitAndAssign for BoardSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.lower &= rhs.lower;
        self.upper &= rhs.upper;
    }
}

impl BitXorAssign for BoardSet {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.lower ^= rhs.lower;
        self.upper ^= rhs.upper;
    }
}

impl Shl<u32> for BoardSet {
    type Output = BoardSet;

    #[inline]
    fn shl(self, shift: u32) -> Self::Output {
        match shift {
            0 => self,
            1..=63 => BoardSet {
                lower: self.lower << shift,
                upper: (self.upper << shift) | (self.lower >> (64 - shift)),
            },
            64..=127 => BoardSet {
                lower: 0,
                upper: self.lower << (shift - 64),
            },
            _ => BoardSet::EMPTY,
        }
    }
}

impl Shr<u32> for BoardSet {
    type Output = BoardSet;

    #[inline]
    fn shr(self, shift: u32) -> Self::Output {
        match shift {
            0 => self,
            1..=63 => BoardSet {
                lower: (self.lower >> shift) | (self.upper << (64 - shift)),
                upper: self.upper >> shift,
            },
            64..=127 => BoardSet {
                lower: self.upper >> (shift - 64),
                upper: 0,
            },
            _ => BoardSet::EMPTY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(squares: &[Square]) -> BoardSet {
        let mut set = BoardSet::EMPTY;
        for &sq in squares {
            set.insert(sq);
        }
        set
    }

    #[test]
    fn pop_lsb_visits_members_in_ascending_order() {
        let mut set = set_of(&[80, 3, 63, 64]);
        let mut seen = Vec::new();
        while let Some(sq) = set.pop_lsb() {
            seen.push(sq);
        }
        assert_eq!(seen, vec![3, 63, 64, 80]);
        assert!(set.is_empty());
    }

    #[test]
    fn left_shift_carries_into_upper_word() {
        let set = set_of(&[60, 62]);
        let shifted = set << 9;
        assert_eq!(shifted, set_of(&[69, 71]));
        assert_eq!(set.shift(Direction::North), shifted);
    }

    #[test]
    fn right_shift_carries_into_lower_word() {
        let set = set_of(&[64, 72, 80]);
        assert_eq!(set >> 9, set_of(&[55, 63, 71]));
        assert_eq!(set >> 1, set_of(&[63, 71, 79]));
        assert_eq!(set.shift(Direction::South), set >> 9);
    }

    #[test]
    fn wide_shifts_move_whole_words() {
        let set = set_of(&[0, 5]);
        assert_eq!(set << 64, set_of(&[64, 69]));
        assert_eq!(set_of(&[64, 69]) >> 64, set);
        assert_eq!(set << 0, set);
    }

    #[test]
    fn set_algebra_and_count() {
        let a = set_of(&[1, 40, 70]);
        let b = set_of(&[40, 70, 80]);
        assert_eq!(a & b, set_of(&[40, 70]));
        assert_eq!((a | b).count(), 4);
        assert_eq!(a ^ b, set_of(&[1, 80]));
        assert!(!(!a).contains(40));
        assert!((!a).contains(2));
    }
}

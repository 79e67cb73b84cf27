//! A set of board squares packed into one unsigned integer.
//!
//! Square `(x, y)` with both components in `[1, BOARD_SIZE]` maps to bit
//! `(y - 1) * BOARD_SIZE + (x - 1)`. Off-board coordinates are never stored.

use core::ops::BitOrAssign;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned};

use crate::common::Coord;
use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// Raised when the backing integer cannot hold every square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMaskError {
    SizeTooLarge { squares: usize, capacity: usize },
}

impl fmt::Display for CellMaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellMaskError::SizeTooLarge { squares, capacity } => write!(
                f,
                "SizeTooLarge: {} squares exceed {} bits",
                squares, capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CellMaskError {}

/// Bit set over the playable squares of one board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellMask<T = u128>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

/// The mask used by fleets and shot logs.
pub type BoardMask = CellMask<u128>;

impl<T> CellMask<T>
where
    T: PrimInt + Unsigned,
{
    /// Empty mask. With a `T` narrower than the board, squares past its last
    /// bit are never stored; use `try_new` to reject such a `T` up front.
    #[inline]
    pub fn new() -> Self {
        CellMask { bits: T::zero() }
    }

    /// Fallible constructor: `Err(SizeTooLarge)` if `T` cannot hold the board.
    pub fn try_new() -> Result<Self, CellMaskError> {
        if Self::capacity_ok() {
            Ok(Self::new())
        } else {
            Err(CellMaskError::SizeTooLarge {
                squares: N * N,
                capacity: Self::capacity(),
            })
        }
    }

    fn capacity() -> usize {
        mem::size_of::<T>() * 8
    }

    /// True when `T` has room for every square of the board.
    pub fn capacity_ok() -> bool {
        N * N <= Self::capacity()
    }

    #[inline]
    fn index(c: Coord) -> Option<usize> {
        if !c.is_on_board() {
            return None;
        }
        let idx = (c.y as usize - 1) * N + (c.x as usize - 1);
        (idx < Self::capacity()).then_some(idx)
    }

    pub fn contains(&self, c: Coord) -> bool {
        match Self::index(c) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `c`. Returns `false` if it was already present or off the board.
    pub fn insert(&mut self, c: Coord) -> bool {
        let Some(idx) = Self::index(c) else {
            return false;
        };
        let bit = T::one() << idx;
        if self.bits & bit != T::zero() {
            return false;
        }
        self.bits = self.bits | bit;
        true
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// True if any square is in both masks.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Squares in the mask, row-major.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |c| self.contains(*c))
    }
}

impl<T> Default for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Coord> for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut mask = Self::new();
        for c in iter {
            mask.insert(c);
        }
        mask
    }
}

impl<T> BitOrAssign for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

impl<T> fmt::Debug for CellMask<T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask:")?;
        for y in 1..=BOARD_SIZE {
            for x in 1..=BOARD_SIZE {
                let bit = if self.contains(Coord::new(x, y)) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

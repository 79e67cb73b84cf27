//! Ships: contiguous runs of squares with per-square hit tracking.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::bitboard::BoardMask;
use crate::common::{Coord, ShipError};
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Offset of the `i`th square from the origin.
    fn step(self, origin: Coord, i: u8) -> Coord {
        match self {
            Orientation::Horizontal => Coord::new(origin.x + i, origin.y),
            Orientation::Vertical => Coord::new(origin.x, origin.y + i),
        }
    }
}

impl FromStr for Orientation {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            other => Err(ShipError::InvalidOrientation(other.to_string())),
        }
    }
}

/// One square of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Coord,
    pub hit: bool,
}

/// A ship occupying `len()` contiguous squares starting at its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "ShipState", into = "ShipState"))]
pub struct Ship {
    cells: Vec<Cell>,
    orientation: Orientation,
    sunk: bool,
}

impl Ship {
    /// Place a ship of `length` squares at (`x`, `y`) extending along
    /// `orientation`.
    pub fn new(x: u8, y: u8, length: u8, orientation: Orientation) -> Result<Self, ShipError> {
        if !Ship::valid_dimension(x, y, length, orientation) {
            return Err(ShipError::InvalidDimension {
                x,
                y,
                length,
                orientation,
            });
        }
        let origin = Coord::new(x, y);
        let cells = (0..length)
            .map(|i| Cell {
                pos: orientation.step(origin, i),
                hit: false,
            })
            .collect();
        Ok(Ship {
            cells,
            orientation,
            sunk: false,
        })
    }

    /// Like [`Ship::new`] with the orientation given as text.
    pub fn parse(x: u8, y: u8, length: u8, orientation: &str) -> Result<Self, ShipError> {
        Ship::new(x, y, length, orientation.parse()?)
    }

    /// Whether a ship with these parameters fits on the board.
    pub fn valid_dimension(x: u8, y: u8, length: u8, orientation: Orientation) -> bool {
        let on_board = |v: u8| (1..=BOARD_SIZE).contains(&v);
        if length == 0 || !on_board(x) || !on_board(y) {
            return false;
        }
        let start = match orientation {
            Orientation::Horizontal => x as u16,
            Orientation::Vertical => y as u16,
        };
        start + length as u16 - 1 <= BOARD_SIZE as u16
    }

    /// True if the two ships share any square.
    pub fn overlap(&self, other: &Ship) -> bool {
        self.mask().intersects(&other.mask())
    }

    pub fn is_at(&self, x: u8, y: u8) -> bool {
        self.cells.iter().any(|c| c.pos == Coord::new(x, y))
    }

    /// Marks the square at (`x`, `y`) as hit. Returns `false`, with no
    /// effect, when the ship does not occupy that square.
    pub fn hit(&mut self, x: u8, y: u8) -> bool {
        let target = Coord::new(x, y);
        let Some(cell) = self.cells.iter_mut().find(|c| c.pos == target) else {
            return false;
        };
        cell.hit = true;
        self.sunk = self.cells.iter().all(|c| c.hit);
        true
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First square of the ship.
    pub fn origin(&self) -> Coord {
        self.cells[0].pos
    }

    /// Last square of the ship.
    pub fn end(&self) -> Coord {
        self.cells[self.cells.len() - 1].pos
    }

    /// Squares occupied by the ship.
    pub fn mask(&self) -> BoardMask {
        self.cells.iter().map(|c| c.pos).collect()
    }
}

/// Serialised form of a [`Ship`]: placement plus the squares already hit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipState {
    pub origin: Coord,
    pub length: u8,
    pub orientation: Orientation,
    pub hits: Vec<Coord>,
}

impl From<Ship> for ShipState {
    fn from(ship: Ship) -> Self {
        ShipState {
            origin: ship.origin(),
            length: ship.len() as u8,
            orientation: ship.orientation,
            hits: ship.cells.iter().filter(|c| c.hit).map(|c| c.pos).collect(),
        }
    }
}

impl TryFrom<ShipState> for Ship {
    type Error = ShipError;

    fn try_from(state: ShipState) -> Result<Self, Self::Error> {
        let mut ship = Ship::new(state.origin.x, state.origin.y, state.length, state.orientation)?;
        for c in state.hits {
            ship.hit(c.x, c.y);
        }
        Ok(ship)
    }
}

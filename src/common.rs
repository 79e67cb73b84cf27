//! Common types: board coordinates and the errors raised while building fleets.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// A board square as (column, row). Playable squares lie in `[1, BOARD_SIZE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Build a coordinate without range checking.
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate only if it names a playable square.
    pub fn on_board(x: u8, y: u8) -> Option<Self> {
        let c = Self { x, y };
        c.is_on_board().then_some(c)
    }

    pub fn is_on_board(&self) -> bool {
        (1..=BOARD_SIZE).contains(&self.x) && (1..=BOARD_SIZE).contains(&self.y)
    }

    /// Iterate every playable square in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (1..=BOARD_SIZE).flat_map(|y| (1..=BOARD_SIZE).map(move |x| Coord { x, y }))
    }
}

impl fmt::Display for Coord {
    /// Column letter then row number, as the grid labels show them (`C7`).
    /// Columns without a letter print as `(x, y)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.x {
            1..=26 => write!(f, "{}{}", (b'A' + self.x - 1) as char, self.y),
            _ => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

impl FromStr for Coord {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col = chars.next().ok_or(())?.to_ascii_uppercase();
        if !col.is_ascii_uppercase() {
            return Err(());
        }
        let x = (col as u8 - b'A') + 1;
        let y: u8 = chars.as_str().parse().map_err(|_| ())?;
        Coord::on_board(x, y).ok_or(())
    }
}

/// Errors raised when constructing a single ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// Origin off the board, zero length, or far end past the last square.
    InvalidDimension {
        x: u8,
        y: u8,
        length: u8,
        orientation: Orientation,
    },
    /// Orientation text was neither horizontal nor vertical.
    InvalidOrientation(String),
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::InvalidDimension {
                x,
                y,
                length,
                orientation,
            } => write!(
                f,
                "Invalid dimension: {}, {}, {} ({:?})",
                x, y, length, orientation
            ),
            ShipError::InvalidOrientation(o) => write!(f, "Invalid orientation: {}", o),
        }
    }
}

/// Errors returned while assembling a fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    Ship(ShipError),
    /// Ship at `index` shares a square with an earlier ship.
    Overlap { index: usize },
    /// Random placement gave up on a ship of `length` after `attempts` tries.
    PlacementExhausted { length: u8, attempts: usize },
}

impl From<ShipError> for FleetError {
    fn from(err: ShipError) -> Self {
        FleetError::Ship(err)
    }
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::Ship(e) => write!(f, "Ship error: {}", e),
            FleetError::Overlap { index } => {
                write!(f, "Ship {} overlaps a previously placed ship", index)
            }
            FleetError::PlacementExhausted { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShipError {}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FleetError::Ship(e) => Some(e),
            _ => None,
        }
    }
}

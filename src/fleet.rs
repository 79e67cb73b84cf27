//! A side's ships and the random fleet generator.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::BoardMask;
use crate::common::{Coord, FleetError};
use crate::config::{BOARD_SIZE, FLEET_LENGTHS, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Pairwise non-overlapping ships owned by one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    occupied: BoardMask,
}

impl Fleet {
    /// Empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fleet from ships, rejecting any ship that overlaps an earlier one.
    pub fn from_ships(ships: Vec<Ship>) -> Result<Self, FleetError> {
        let mut fleet = Fleet::new();
        for ship in ships {
            fleet.add(ship)?;
        }
        Ok(fleet)
    }

    /// Add a ship unless it shares a square with one already in the fleet.
    pub fn add(&mut self, ship: Ship) -> Result<(), FleetError> {
        let mask = ship.mask();
        if self.occupied.intersects(&mask) {
            return Err(FleetError::Overlap {
                index: self.ships.len(),
            });
        }
        self.occupied |= mask;
        self.ships.push(ship);
        Ok(())
    }

    /// Random fleet with the standard ship lengths.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, FleetError> {
        Fleet::random_with(rng, &FLEET_LENGTHS, MAX_PLACEMENT_ATTEMPTS)
    }

    /// Place one ship per entry of `lengths` by rejection sampling: draw an
    /// origin uniformly from the board and a fair-coin orientation until the
    /// ship fits and clears every ship placed so far.
    pub fn random_with<R: Rng + ?Sized>(
        rng: &mut R,
        lengths: &[u8],
        max_attempts: usize,
    ) -> Result<Self, FleetError> {
        let mut fleet = Fleet::new();
        for &length in lengths {
            let mut placed = false;
            for _ in 0..max_attempts {
                let x = rng.random_range(1..=BOARD_SIZE);
                let y = rng.random_range(1..=BOARD_SIZE);
                let orientation = if rng.random_bool(0.5) {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                if !Ship::valid_dimension(x, y, length, orientation) {
                    continue;
                }
                let ship = Ship::new(x, y, length, orientation)?;
                if fleet.add(ship).is_ok() {
                    placed = true;
                    break;
                }
            }
            if !placed {
                log::warn!(
                    "gave up placing ship of length {} after {} attempts",
                    length,
                    max_attempts
                );
                return Err(FleetError::PlacementExhausted {
                    length,
                    attempts: max_attempts,
                });
            }
        }
        Ok(fleet)
    }

    /// Apply a shot to the first ship occupying (`x`, `y`). Returns whether a
    /// ship was hit.
    pub fn hit(&mut self, x: u8, y: u8) -> bool {
        self.ships.iter_mut().any(|s| s.hit(x, y))
    }

    /// True when every ship is sunk. An empty fleet counts as sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    pub fn ship_at(&self, c: Coord) -> Option<&Ship> {
        if !self.occupied.contains(c) {
            return None;
        }
        self.ships.iter().find(|s| s.is_at(c.x, c.y))
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Squares covered by any ship.
    pub fn occupied(&self) -> BoardMask {
        self.occupied
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn into_ships(self) -> Vec<Ship> {
        self.ships
    }
}

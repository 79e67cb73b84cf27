//! Computer opponent strategies.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{Coord, FleetError};
use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::player::ShotLog;

/// Interface implemented by computer opponents.
pub trait Strategy: Send {
    /// Produce the fleet this side defends.
    fn place_fleet(&mut self, rng: &mut SmallRng) -> Result<Fleet, FleetError> {
        Fleet::random(rng)
    }

    /// Choose the next square to fire at, given the shots already made
    /// against the target fleet.
    fn select_target(&mut self, rng: &mut SmallRng, history: &ShotLog) -> Coord;

    /// Inform the strategy of the result of its last shot. `accepted` is
    /// `false` when the square had already been shot.
    fn handle_shot_result(&mut self, _target: Coord, _accepted: bool, _hit: bool) {}
}

/// Fires uniformly at random over the whole board, repeats included.
///
/// A repeat is rejected by the target's shot log and the turn is lost.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAi;

impl RandomAi {
    pub fn new() -> Self {
        Self
    }
}

/// Uniformly random playable square.
pub fn random_square<R: Rng + ?Sized>(rng: &mut R) -> Coord {
    Coord::new(
        rng.random_range(1..=BOARD_SIZE),
        rng.random_range(1..=BOARD_SIZE),
    )
}

impl Strategy for RandomAi {
    fn select_target(&mut self, rng: &mut SmallRng, _history: &ShotLog) -> Coord {
        random_square(rng)
    }
}

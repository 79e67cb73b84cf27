use alloc::vec::Vec;

use crate::bitboard::BoardMask;
use crate::common::{Coord, FleetError};
use crate::fleet::Fleet;
use crate::ship::Ship;

/// A resolved attack. `hit` is fixed when the shot is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub pos: Coord,
    pub hit: bool,
}

/// Ordered record of attacks made against one fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotLog {
    shots: Vec<Shot>,
    fired: BoardMask,
    hits: usize,
}

impl ShotLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.fired.contains(c)
    }

    /// Append `shot`. Returns `false` if its square was already logged.
    fn record(&mut self, shot: Shot) -> bool {
        if !self.fired.insert(shot.pos) {
            return false;
        }
        if shot.hit {
            self.hits += 1;
        }
        self.shots.push(shot);
        true
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn shot_count(&self) -> usize {
        self.shots.len()
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    /// Squares already shot at.
    pub fn fired(&self) -> BoardMask {
        self.fired
    }

    pub fn last(&self) -> Option<&Shot> {
        self.shots.last()
    }
}

/// Fire at (`x`, `y`): test the square against `fleet` and append the outcome
/// to `history`.
///
/// Returns `false` with no state change when the square is off the board or
/// `history` already holds a shot there. Otherwise the first ship occupying the
/// square takes the hit and the call returns `true`.
pub fn resolve_shot(fleet: &mut Fleet, history: &mut ShotLog, x: u8, y: u8) -> bool {
    let Some(pos) = Coord::on_board(x, y) else {
        log::debug!("ignoring off-board shot at ({}, {})", x, y);
        return false;
    };
    if history.contains(pos) {
        log::debug!("duplicate shot at {}", pos);
        return false;
    }
    let hit = fleet.hit(x, y);
    history.record(Shot { pos, hit });
    log::debug!("shot at {} -> {}", pos, if hit { "hit" } else { "miss" });
    true
}

/// One side of the game: its own fleet and the log of shots fired at it.
///
/// Shots land on the fleet of the `Player` they are called on and are logged
/// against that same `Player`; the caller picks which side is under attack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "PlayerState", into = "PlayerState"))]
pub struct Player {
    fleet: Fleet,
    history: ShotLog,
}

impl Player {
    pub fn new(fleet: Fleet) -> Self {
        Player {
            fleet,
            history: ShotLog::new(),
        }
    }

    /// Incoming shot at (`x`, `y`). See [`resolve_shot`].
    pub fn shot(&mut self, x: u8, y: u8) -> bool {
        resolve_shot(&mut self.fleet, &mut self.history, x, y)
    }

    pub fn has_lost(&self) -> bool {
        self.fleet.all_sunk()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn shot_log(&self) -> &ShotLog {
        &self.history
    }

    pub fn shots(&self) -> &[Shot] {
        self.history.shots()
    }

    pub fn shot_count(&self) -> usize {
        self.history.shot_count()
    }

    pub fn hit_count(&self) -> usize {
        self.history.hit_count()
    }
}

/// Serialised form of a [`Player`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub ships: Vec<Ship>,
    pub shots: Vec<Shot>,
}

impl From<Player> for PlayerState {
    fn from(p: Player) -> Self {
        PlayerState {
            ships: p.fleet.into_ships(),
            shots: p.history.shots,
        }
    }
}

impl TryFrom<PlayerState> for Player {
    type Error = FleetError;

    /// Rebuilds the fleet (checking overlap) and replays the logged shots so
    /// counters and the duplicate mask match. Hit flags are taken from the
    /// fleet, not from the stored shots.
    fn try_from(state: PlayerState) -> Result<Self, Self::Error> {
        let mut fleet = Fleet::from_ships(state.ships)?;
        let mut history = ShotLog::new();
        for shot in state.shots {
            let hit = fleet.hit(shot.pos.x, shot.pos.y);
            history.record(Shot { pos: shot.pos, hit });
        }
        Ok(Player { fleet, history })
    }
}

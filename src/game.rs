//! Game session: both sides, the opponent strategy and the turn state machine.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::ai::{RandomAi, Strategy};
use crate::common::{Coord, FleetError};
use crate::config::LayoutConfig;
use crate::fleet::Fleet;
use crate::grid::BoardLayout;
use crate::player::{Player, Shot};

/// Whose move it is, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    /// Waiting for a click on the opponent grid.
    PlayerTurn,
    /// The computer fires next.
    OpponentTurn,
    Won,
    Lost,
}

impl TurnState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::Won | TurnState::Lost)
    }
}

/// Final result from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Won,
    Lost,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won => write!(f, "won"),
            Outcome::Lost => write!(f, "lost"),
        }
    }
}

/// Result of a click during the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not the human's turn; nothing happened.
    NotPlayerTurn,
    /// Click landed outside the opponent's playable squares.
    OutsideGrid,
    /// Square already shot; the turn is not consumed.
    AlreadyShot(Coord),
    /// Shot resolved. The session moved to `OpponentTurn` or `Won`.
    Fired(Shot),
}

/// One computer turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentMove {
    pub target: Coord,
    /// `None` when the target had already been shot and the turn was wasted.
    pub shot: Option<Shot>,
}

/// Snapshot of a session, sufficient to resume it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub human: Player,
    pub opponent: Player,
    pub turn: TurnState,
}

#[cfg(feature = "std")]
impl GameState {
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// One game between the human and a computer opponent.
///
/// `human` defends the left grid and `opponent` the right one; each side's
/// shot log records the shots fired at it.
pub struct Session {
    layout: BoardLayout,
    human: Player,
    opponent: Player,
    strategy: Box<dyn Strategy>,
    rng: SmallRng,
    turn: TurnState,
}

impl Session {
    /// New game against [`RandomAi`] with random fleets and a coin flip for
    /// the first move.
    pub fn new(config: LayoutConfig, rng: SmallRng) -> Result<Self, FleetError> {
        Session::with_strategy(config, rng, Box::new(RandomAi::new()))
    }

    pub fn with_strategy(
        config: LayoutConfig,
        mut rng: SmallRng,
        mut strategy: Box<dyn Strategy>,
    ) -> Result<Self, FleetError> {
        let human = Player::new(Fleet::random(&mut rng)?);
        let opponent = Player::new(strategy.place_fleet(&mut rng)?);
        let turn = if rng.random_bool(0.5) {
            TurnState::PlayerTurn
        } else {
            TurnState::OpponentTurn
        };
        log::info!("new game, {:?} first", turn);
        Ok(Session {
            layout: BoardLayout::new(config),
            human,
            opponent,
            strategy,
            rng,
            turn,
        })
    }

    /// Assemble a session from explicit parts.
    pub fn from_parts(
        layout: BoardLayout,
        human: Player,
        opponent: Player,
        turn: TurnState,
        strategy: Box<dyn Strategy>,
        rng: SmallRng,
    ) -> Self {
        Session {
            layout,
            human,
            opponent,
            strategy,
            rng,
            turn,
        }
    }

    /// Resume a saved game against [`RandomAi`]. A sunk fleet in the
    /// snapshot overrides the stored turn.
    pub fn restore(state: GameState, config: LayoutConfig, rng: SmallRng) -> Self {
        let turn = if state.opponent.has_lost() {
            TurnState::Won
        } else if state.human.has_lost() {
            TurnState::Lost
        } else {
            state.turn
        };
        if turn != state.turn {
            log::warn!("saved turn {:?} contradicts the fleets, resuming as {:?}", state.turn, turn);
        }
        Session::from_parts(
            BoardLayout::new(config),
            state.human,
            state.opponent,
            turn,
            Box::new(RandomAi::new()),
            rng,
        )
    }

    pub fn snapshot(&self) -> GameState {
        GameState {
            human: self.human.clone(),
            opponent: self.opponent.clone(),
            turn: self.turn,
        }
    }

    pub fn state(&self) -> TurnState {
        self.turn
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn opponent(&self) -> &Player {
        &self.opponent
    }

    /// Handle a click at canvas pixel (`px`, `py`).
    ///
    /// Only acts during `PlayerTurn` and only on playable squares of the
    /// opponent grid. A fresh shot moves the session to `Won` if it sank the
    /// last enemy ship, otherwise to `OpponentTurn`.
    pub fn click(&mut self, px: f64, py: f64) -> ClickOutcome {
        if self.turn != TurnState::PlayerTurn {
            return ClickOutcome::NotPlayerTurn;
        }
        let Some(target) = self.layout.opponent_grid.to_square(px, py) else {
            return ClickOutcome::OutsideGrid;
        };
        if !self.opponent.shot(target.x, target.y) {
            return ClickOutcome::AlreadyShot(target);
        }
        let shot = match self.opponent.shot_log().last() {
            Some(shot) => *shot,
            None => return ClickOutcome::AlreadyShot(target),
        };
        self.turn = if self.opponent.has_lost() {
            TurnState::Won
        } else {
            TurnState::OpponentTurn
        };
        log::debug!("player fired at {} -> {:?}", target, self.turn);
        if self.turn == TurnState::Won {
            log::info!("player won after {} shots", self.opponent.shot_count());
        }
        ClickOutcome::Fired(shot)
    }

    /// Click the centre of `target` on the opponent grid.
    pub fn fire_at(&mut self, target: Coord) -> ClickOutcome {
        match self.layout.opponent_grid.center_of(target) {
            Some(p) => self.click(p.x, p.y),
            None => ClickOutcome::OutsideGrid,
        }
    }

    /// Run the computer's turn if it is due. The strategy's target is fired
    /// at once; a repeat target wastes the turn. Afterwards the session is in
    /// `Lost` or back in `PlayerTurn`.
    pub fn play_opponent_turn(&mut self) -> Option<OpponentMove> {
        if self.turn != TurnState::OpponentTurn {
            return None;
        }
        let target = self
            .strategy
            .select_target(&mut self.rng, self.human.shot_log());
        let accepted = self.human.shot(target.x, target.y);
        let shot = if accepted {
            self.human.shot_log().last().copied()
        } else {
            None
        };
        self.strategy
            .handle_shot_result(target, accepted, shot.is_some_and(|s| s.hit));
        self.turn = if self.human.has_lost() {
            TurnState::Lost
        } else {
            TurnState::PlayerTurn
        };
        log::debug!(
            "opponent fired at {} ({}) -> {:?}",
            target,
            if accepted { "accepted" } else { "wasted" },
            self.turn
        );
        if self.turn == TurnState::Lost {
            log::info!("player lost after {} opponent shots", self.human.shot_count());
        }
        Some(OpponentMove { target, shot })
    }

    /// Run any pending computer turn so the session either waits for input
    /// or has ended.
    pub fn advance(&mut self) -> Option<OpponentMove> {
        self.play_opponent_turn()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.turn {
            TurnState::Won => Some(Outcome::Won),
            TurnState::Lost => Some(Outcome::Lost),
            _ => None,
        }
    }

    /// Human-readable status for a finished game.
    pub fn status_message(&self) -> Option<String> {
        let msg = match self.outcome()? {
            Outcome::Won => format!(
                "You won! Enemy fleet sunk in {} shots ({} hits).",
                self.opponent.shot_count(),
                self.opponent.hit_count()
            ),
            Outcome::Lost => format!(
                "You lost. Your fleet was sunk after {} enemy shots ({} hits).",
                self.human.shot_count(),
                self.human.hit_count()
            ),
        };
        Some(msg)
    }
}

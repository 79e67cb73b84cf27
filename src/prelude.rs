//! Commonly used types and utilities for ease of import.

pub use crate::{
    resolve_shot, BoardLayout, ClickOutcome, Coord, Fleet, LayoutConfig, Orientation, Outcome,
    Player, RandomAi, Session, Ship, Strategy, TurnState,
};

#[cfg(feature = "std")]
pub use crate::driver::{run_session, ChannelInput, InputSource, Renderer, StatusReporter};

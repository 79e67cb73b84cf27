#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod bitboard;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod driver;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
pub mod render;
pub mod scene;
mod ship;

pub use ai::*;
pub use bitboard::{BoardMask, CellMask, CellMaskError};
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use ship::*;

//! Round logic for a 3x3 whack-a-mole board.
//!
//! Moles and hazards pop up on a timer; hitting a mole scores, hitting a
//! hazard ends the round on the spot. [`GameSession`] holds the state of one
//! round, [`GameController`] runs it against a [`Host`] that provides timers,
//! rendering, audio and high-score storage.

#![no_std]

extern crate alloc;

pub use controller::*;
pub use difficulty::*;
pub use error::*;
pub use ports::*;
pub use session::*;
pub use spawner::*;
pub use stats::*;
pub use tile::*;
pub use types::*;

mod controller;
mod difficulty;
mod error;
mod ports;
mod session;
mod spawner;
mod stats;
mod tile;
mod types;

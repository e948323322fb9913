//! Core engine types: seats, configuration, decisions, errors, RNG.
//!
//! Everything here is independent of the President rules themselves.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionRecord, Decision, Selection};
pub use config::{GameConfig, RoundLimit, MAX_PLAYERS, MIN_PLAYERS};
pub use error::GameError;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;

//! Game configuration.
//!
//! The engine is configured once, at game construction:
//! - `player_count`: 3 to 8 participants, seated in a fixed order
//! - `rounds`: a fixed number of rounds, or open-ended play that ends
//!   when an external stop signal fires
//! - `seed`: drives every shuffle, so a game replays exactly
//! - `max_attempts`: how many rejected actions an action source may
//!   produce in a row before the engine gives up on it (at least 1)

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 3;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 8;

/// How many rounds a game lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundLimit {
    /// Exactly this many rounds (unless a stop signal ends the game early).
    Fixed(u32),
    /// Play until a stop signal fires.
    OpenEnded,
}

impl RoundLimit {
    /// Is `round` (1-based) the last round this limit allows?
    #[must_use]
    pub fn is_last(self, round: u32) -> bool {
        match self {
            RoundLimit::Fixed(total) => round >= total,
            RoundLimit::OpenEnded => false,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of participants (3-8).
    pub player_count: usize,

    /// Round count or open-ended mode.
    pub rounds: RoundLimit,

    /// Seed for the shuffle RNG.
    pub seed: u64,

    /// Consecutive rejected actions tolerated from one action source.
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            rounds: RoundLimit::Fixed(3),
            seed: 42,
            max_attempts: 64,
        }
    }
}

impl GameConfig {
    /// Create a config for `player_count` participants and `rounds` rounds.
    #[must_use]
    pub fn new(player_count: usize, rounds: u32) -> Self {
        Self {
            player_count,
            rounds: RoundLimit::Fixed(rounds),
            ..Self::default()
        }
    }

    /// Set the participant count.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_rounds(mut self, rounds: RoundLimit) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the rejected-action retry cap.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Check the configuration before a game is built from it.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }
        if self.rounds == RoundLimit::Fixed(0) {
            return Err(GameError::InvalidRoundCount);
        }
        if self.max_attempts == 0 {
            return Err(GameError::InvalidAttemptLimit);
        }
        Ok(())
    }
}

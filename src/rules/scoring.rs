//! Score keeping across rounds.
//!
//! Only the President scores: 1 point for an ordinary round, and
//! `max(2, N - 2)` for the final round `N` (1-based). Scores only ever grow.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Points for the President of an ordinary round.
pub const ROUND_POINTS: u32 = 1;

/// Points for the President of final round `round` (1-based).
///
/// ```
/// use president::rules::final_round_points;
///
/// assert_eq!(final_round_points(1), 2);
/// assert_eq!(final_round_points(4), 2);
/// assert_eq!(final_round_points(6), 4);
/// ```
#[must_use]
pub fn final_round_points(round: u32) -> u32 {
    round.saturating_sub(2).max(2)
}

/// How a finished game came out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Single highest score.
    Winner(PlayerId),
    /// Several seats share the highest score. No tiebreak is applied.
    Tie(Vec<PlayerId>),
}

impl GameOutcome {
    /// Did `player` finish with the highest score (alone or tied)?
    #[must_use]
    pub fn is_top(&self, player: PlayerId) -> bool {
        match self {
            GameOutcome::Winner(p) => *p == player,
            GameOutcome::Tie(ps) => ps.contains(&player),
        }
    }
}

/// Cumulative per-seat scores for the lifetime of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    scores: PlayerMap<u32>,
}

impl ScoreKeeper {
    /// All seats at zero.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            scores: PlayerMap::with_value(player_count, 0),
        }
    }

    /// Credit the President of round `round`. Returns the points awarded.
    pub fn award(&mut self, president: PlayerId, round: u32, is_final: bool) -> u32 {
        let points = if is_final {
            final_round_points(round)
        } else {
            ROUND_POINTS
        };
        self.scores[president] += points;
        info!("{president} scores {points} for round {round} (total {})", self.scores[president]);
        points
    }

    /// One seat's score.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Every seat's score.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// (seat, score) pairs, highest score first, seat order among equals.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, u32)> {
        let mut standings: Vec<_> = self.scores.iter().map(|(p, &s)| (p, s)).collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        standings
    }

    /// The seat(s) with the highest score.
    #[must_use]
    pub fn determine_winner(&self) -> GameOutcome {
        let best = self.scores.iter().map(|(_, &s)| s).max().unwrap_or(0);
        let mut top: Vec<PlayerId> = self
            .scores
            .iter()
            .filter(|(_, s)| **s == best)
            .map(|(p, _)| p)
            .collect();

        if top.len() == 1 {
            GameOutcome::Winner(top.remove(0))
        } else {
            GameOutcome::Tie(top)
        }
    }
}

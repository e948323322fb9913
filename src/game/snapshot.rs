//! Read-only views of the game, handed to observers.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::{Play, SocialRank, Trick, TrickPhase};

/// The trick on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickView {
    /// Trick number within the round (1-based).
    pub number: u32,
    pub phase: TrickPhase,
    pub leader: PlayerId,
    pub to_act: Option<PlayerId>,
    pub current: Option<Play>,
    pub passed: Vec<PlayerId>,
    /// Plays made so far this trick.
    pub plays: usize,
}

impl TrickView {
    #[must_use]
    pub fn of(trick: &Trick, number: u32) -> Self {
        Self {
            number,
            phase: trick.phase(),
            leader: trick.leader(),
            to_act: trick.to_act(),
            current: trick.current_play().cloned(),
            passed: trick.passed(),
            plays: trick.history().len(),
        }
    }
}

/// What everyone at the table can see about one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub player: PlayerId,
    pub hand_size: usize,
    pub score: u32,
    /// Rank from the last completed round.
    pub rank: Option<SocialRank>,
    /// Out of cards this round.
    pub finished: bool,
}

/// Public game state at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current round (1-based); 0 before the first deal.
    pub round: u32,
    pub trick: Option<TrickView>,
    pub finishing_order: Vec<PlayerId>,
    pub players: Vec<PlayerView>,
    pub game_over: bool,
}

impl Snapshot {
    /// View of one seat.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|view| view.player == player)
    }

    /// Seat whose turn it is, if any.
    #[must_use]
    pub fn to_act(&self) -> Option<PlayerId> {
        self.trick.as_ref().and_then(|trick| trick.to_act)
    }
}

//! Events reported to observers, and the stop signal.
//!
//! The engine describes every state transition with a `GameEvent` and hands
//! it to an `Observer` together with a `Snapshot` taken right after the
//! transition. Observers cannot change the game.

use super::snapshot::Snapshot;
use super::RoundSummary;
use crate::core::{GameError, PlayerId};
use crate::rules::{GameOutcome, Play, ScoreKeeper, Transfer};

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Cards are dealt and `leader` is about to lead the first trick.
    RoundStarted { round: u32, leader: PlayerId },

    /// The exchange ran. Transfers are listed tribute first.
    CardsExchanged { transfers: Vec<Transfer> },

    /// A play was accepted.
    Played { play: Play },

    /// A pass was accepted.
    Passed { player: PlayerId },

    /// An action was rejected; the seat will be asked again.
    Rejected { player: PlayerId, error: GameError },

    /// `player` emptied their hand (or was the last seat holding cards).
    /// `position` is 1-based.
    PlayerFinished { player: PlayerId, position: usize },

    /// A trick resolved.
    TrickWon { player: PlayerId },

    /// Ranks were assigned and points awarded.
    RoundEnded { summary: RoundSummary },

    /// The final round has been scored.
    GameEnded { outcome: GameOutcome },
}

/// Receives every event along with the state right after it.
pub trait Observer {
    fn on_event(&mut self, event: &GameEvent, snapshot: &Snapshot);
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn on_event(&mut self, _event: &GameEvent, _snapshot: &Snapshot) {}
}

/// Records every event, and the most recent snapshot.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
    last_snapshot: Option<Snapshot>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in the order they happened.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Snapshot taken after the latest event.
    #[must_use]
    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.last_snapshot.as_ref()
    }

    /// Accepted plays, in order.
    pub fn plays(&self) -> impl Iterator<Item = &Play> {
        self.events.iter().filter_map(|event| match event {
            GameEvent::Played { play } => Some(play),
            _ => None,
        })
    }

    /// Round summaries, in order.
    pub fn summaries(&self) -> impl Iterator<Item = &RoundSummary> {
        self.events.iter().filter_map(|event| match event {
            GameEvent::RoundEnded { summary } => Some(summary),
            _ => None,
        })
    }

    /// Number of rejected actions seen.
    #[must_use]
    pub fn rejections(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, GameEvent::Rejected { .. }))
            .count()
    }
}

impl Observer for EventLog {
    fn on_event(&mut self, event: &GameEvent, snapshot: &Snapshot) {
        self.events.push(event.clone());
        self.last_snapshot = Some(snapshot.clone());
    }
}

/// Asked once per round, after ranks are assigned and before points are
/// awarded, whether the round just played should be the last one.
pub trait StopSignal {
    fn should_stop(&mut self, round: u32, scores: &ScoreKeeper) -> bool;

    /// Whether this signal can ever fire. An open-ended game refuses to
    /// run on a signal that cannot.
    fn can_stop(&self) -> bool {
        true
    }
}

/// Never asks to stop; a fixed round limit ends the game.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverStop;

impl StopSignal for NeverStop {
    fn should_stop(&mut self, _round: u32, _scores: &ScoreKeeper) -> bool {
        false
    }

    fn can_stop(&self) -> bool {
        false
    }
}

impl<F> StopSignal for F
where
    F: FnMut(u32, &ScoreKeeper) -> bool,
{
    fn should_stop(&mut self, round: u32, scores: &ScoreKeeper) -> bool {
        self(round, scores)
    }
}

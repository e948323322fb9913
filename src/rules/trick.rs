//! The trick state machine.
//!
//! ```text
//!   Open ──play──▶ Contested ──play (beats)──▶ Contested
//!                      │  ▲
//!                      │  └──────pass───────────┘
//!                      └──every other eligible seat passed──▶ Resolved
//! ```
//!
//! The trick owns the set of seats still eligible to act. A seat leaves it
//! by passing, or by emptying its hand (which also keeps it out of every
//! later trick this round, since new tricks only seat players with cards).
//! Turn order follows seat order, skipping seats that are not eligible.
//!
//! A rejected action leaves the trick and every hand untouched.

use im::Vector;
use log::{debug, info};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::play::{validate, Play};
use crate::cards::{Card, Hand};
use crate::core::{Decision, GameError, PlayerId, PlayerMap};

/// Where a trick is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrickPhase {
    /// Waiting on the leader's first play.
    Open,
    /// A winning play exists; the others may beat it or pass.
    Contested,
    /// Terminal. The owner of the last winning play took the trick.
    Resolved,
}

/// What an accepted action changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrickStep {
    /// The acting seat played its last card.
    pub emptied_hand: bool,
    /// The trick resolved, won by this seat.
    pub winner: Option<PlayerId>,
}

/// One trick, from open lead to resolution.
#[derive(Clone, Debug)]
pub struct Trick {
    player_count: usize,
    leader: PlayerId,
    to_act: Option<PlayerId>,
    current: Option<Play>,
    eligible: FxHashSet<PlayerId>,
    passed: FxHashSet<PlayerId>,
    history: Vector<Play>,
    winner: Option<PlayerId>,
}

impl Trick {
    /// Open a trick led by `leader`. Every seat still holding cards may act.
    pub fn new(leader: PlayerId, hands: &PlayerMap<Hand>) -> Self {
        let eligible: FxHashSet<PlayerId> = hands
            .iter()
            .filter(|(_, hand)| !hand.is_empty())
            .map(|(player, _)| player)
            .collect();
        debug_assert!(eligible.contains(&leader), "trick leader must hold cards");

        Self {
            player_count: hands.player_count(),
            leader,
            to_act: Some(leader),
            current: None,
            eligible,
            passed: FxHashSet::default(),
            history: Vector::new(),
            winner: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TrickPhase {
        if self.winner.is_some() {
            TrickPhase::Resolved
        } else if self.current.is_some() {
            TrickPhase::Contested
        } else {
            TrickPhase::Open
        }
    }

    /// Seat that led.
    #[must_use]
    pub fn leader(&self) -> PlayerId {
        self.leader
    }

    /// Seat whose turn it is. `None` once resolved.
    #[must_use]
    pub fn to_act(&self) -> Option<PlayerId> {
        self.to_act
    }

    /// The play currently winning the trick.
    #[must_use]
    pub fn current_play(&self) -> Option<&Play> {
        self.current.as_ref()
    }

    /// Every play made this trick, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<Play> {
        &self.history
    }

    /// Winner, once resolved.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Has `player` passed this trick?
    #[must_use]
    pub fn has_passed(&self, player: PlayerId) -> bool {
        self.passed.contains(&player)
    }

    /// Seats that have passed, in seat order.
    #[must_use]
    pub fn passed(&self) -> Vec<PlayerId> {
        let mut seats: Vec<_> = self.passed.iter().copied().collect();
        seats.sort_unstable();
        seats
    }

    /// Seats still eligible to act, in seat order.
    #[must_use]
    pub fn eligible(&self) -> Vec<PlayerId> {
        let mut seats: Vec<_> = self.eligible.iter().copied().collect();
        seats.sort_unstable();
        seats
    }

    /// Apply a decision from `player`.
    pub fn apply(
        &mut self,
        player: PlayerId,
        decision: &Decision,
        hands: &mut PlayerMap<Hand>,
    ) -> Result<TrickStep, GameError> {
        match decision {
            Decision::Pass => self.pass(player),
            Decision::Play(cards) => self.play(player, cards, hands),
        }
    }

    /// `player` puts down `cards`.
    pub fn play(
        &mut self,
        player: PlayerId,
        cards: &[Card],
        hands: &mut PlayerMap<Hand>,
    ) -> Result<TrickStep, GameError> {
        self.check_turn(player)?;
        hands[player].check_owns(cards)?;
        let play = validate(player, cards, self.current.as_ref())?;

        // Ownership was checked above, so removal cannot fail.
        hands[player].remove_all(play.cards())?;
        debug!("{play}");

        self.history.push_back(play.clone());
        self.current = Some(play);

        let emptied_hand = hands[player].is_empty();
        if emptied_hand {
            self.eligible.remove(&player);
        }

        Ok(TrickStep {
            emptied_hand,
            winner: self.advance(player),
        })
    }

    /// `player` passes for the rest of this trick.
    pub fn pass(&mut self, player: PlayerId) -> Result<TrickStep, GameError> {
        self.check_turn(player)?;
        if self.current.is_none() {
            return Err(GameError::LeaderMustPlay);
        }

        debug!("{player} passes");
        self.passed.insert(player);
        self.eligible.remove(&player);

        Ok(TrickStep {
            emptied_hand: false,
            winner: self.advance(player),
        })
    }

    /// Take the played cards out of the trick. Only meaningful once the
    /// trick is over; the trick keeps its winner but forgets its history.
    pub fn set_aside(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.history)
            .into_iter()
            .flat_map(|play| play.cards().to_vec())
            .collect()
    }

    fn check_turn(&self, player: PlayerId) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::TrickResolved);
        }
        if self.passed.contains(&player) {
            return Err(GameError::PlayAfterPass(player));
        }
        match self.to_act {
            Some(expected) if expected == player => Ok(()),
            Some(expected) => Err(GameError::NotYourTurn {
                expected,
                actual: player,
            }),
            None => Err(GameError::TrickResolved),
        }
    }

    /// Resolve if nobody but the current winner may still act, otherwise
    /// hand the turn to the next eligible seat after `from`.
    fn advance(&mut self, from: PlayerId) -> Option<PlayerId> {
        let owner = self.current.as_ref().map(Play::player)?;

        if self.eligible.iter().all(|&seat| seat == owner) {
            info!("{owner} wins the trick led by {}", self.leader);
            self.winner = Some(owner);
            self.to_act = None;
            return Some(owner);
        }

        self.to_act = from
            .clockwise(self.player_count)
            .skip(1)
            .find(|seat| self.eligible.contains(seat));
        None
    }
}

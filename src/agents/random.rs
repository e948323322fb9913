//! Uniformly random legal decisions.

use super::source::ActionSource;
use crate::cards::{Card, Hand};
use crate::core::{Decision, GameRng, PlayerId};
use crate::rules::{legal_plays, Play};

/// Picks uniformly among the legal plays, plus passing when allowed.
///
/// Seeded, so a table of random agents replays exactly.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent with its own seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl ActionSource for RandomAgent {
    fn get_action(&mut self, player: PlayerId, hand: &Hand, current: Option<&Play>) -> Decision {
        let mut options: Vec<Decision> = legal_plays(player, hand, current)
            .iter()
            .map(|play| Decision::play(play.cards()))
            .collect();
        if current.is_some() {
            options.push(Decision::Pass);
        }

        self.rng.choose(&options).cloned().unwrap_or(Decision::Pass)
    }

    fn choose_exchange(&mut self, _player: PlayerId, hand: &Hand, count: usize) -> Vec<Card> {
        let mut cards = hand.cards().to_vec();
        self.rng.shuffle(&mut cards);
        cards.truncate(count);
        cards
    }
}

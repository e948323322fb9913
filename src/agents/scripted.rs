//! Replays a fixed list of decisions.

use std::collections::VecDeque;

use super::first_legal::FirstLegalAgent;
use super::source::ActionSource;
use crate::cards::{parse_cards, Card, Hand, ParseCardError};
use crate::core::{Decision, GameError, PlayerId};
use crate::rules::Play;

/// Hands out queued decisions in order, then falls back to
/// `FirstLegalAgent` once the queue runs dry.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    decisions: VecDeque<Decision>,
    exchanges: VecDeque<Vec<Card>>,
    rejections: Vec<GameError>,
}

impl ScriptedAgent {
    /// Empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a play, written as card text (`"9C 9H"`). Empty text queues a pass.
    pub fn then(mut self, cards: &str) -> Result<Self, ParseCardError> {
        let cards = parse_cards(cards)?;
        self.decisions.push_back(if cards.is_empty() {
            Decision::Pass
        } else {
            Decision::play(&cards)
        });
        Ok(self)
    }

    /// Queue a pass.
    #[must_use]
    pub fn then_pass(mut self) -> Self {
        self.decisions.push_back(Decision::Pass);
        self
    }

    /// Queue the cards to return in the next exchange.
    pub fn then_return(mut self, cards: &str) -> Result<Self, ParseCardError> {
        self.exchanges.push_back(parse_cards(cards)?);
        Ok(self)
    }

    /// Decisions not yet used.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.decisions.len()
    }

    /// Rejections reported so far.
    #[must_use]
    pub fn rejections(&self) -> &[GameError] {
        &self.rejections
    }
}

impl ActionSource for ScriptedAgent {
    fn get_action(&mut self, player: PlayerId, hand: &Hand, current: Option<&Play>) -> Decision {
        self.decisions
            .pop_front()
            .unwrap_or_else(|| FirstLegalAgent.get_action(player, hand, current))
    }

    fn choose_exchange(&mut self, _player: PlayerId, hand: &Hand, count: usize) -> Vec<Card> {
        self.exchanges
            .pop_front()
            .unwrap_or_else(|| hand.weakest(count))
    }

    fn rejected(&mut self, _player: PlayerId, error: &GameError) {
        self.rejections.push(error.clone());
    }
}

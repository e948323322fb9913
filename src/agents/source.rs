//! The action source trait.

use crate::cards::{Card, Hand};
use crate::core::{Decision, GameError, PlayerId, PlayerMap};
use crate::rules::Play;

/// Supplies decisions for one seat.
///
/// ## Implementation Notes
///
/// - `get_action`: should draw cards only from `hand`; anything else is
///   rejected and asked again
/// - `choose_exchange`: which `count` cards to return after receiving
///   tribute as President or Vice-President
/// - `rejected`: called with the reason before every re-ask
pub trait ActionSource {
    /// Decide this turn: pass, or a selection from `hand`.
    ///
    /// `current` is the play to beat, or `None` on an open lead.
    fn get_action(&mut self, player: PlayerId, hand: &Hand, current: Option<&Play>) -> Decision;

    /// Pick `count` cards from `hand` to give back during the exchange.
    fn choose_exchange(&mut self, _player: PlayerId, hand: &Hand, count: usize) -> Vec<Card> {
        hand.weakest(count)
    }

    /// The last decision was rejected.
    fn rejected(&mut self, _player: PlayerId, _error: &GameError) {}
}

impl<T: ActionSource + ?Sized> ActionSource for Box<T> {
    fn get_action(&mut self, player: PlayerId, hand: &Hand, current: Option<&Play>) -> Decision {
        (**self).get_action(player, hand, current)
    }

    fn choose_exchange(&mut self, player: PlayerId, hand: &Hand, count: usize) -> Vec<Card> {
        (**self).choose_exchange(player, hand, count)
    }

    fn rejected(&mut self, player: PlayerId, error: &GameError) {
        (**self).rejected(player, error);
    }
}

/// One action source per seat.
pub type Seats = PlayerMap<Box<dyn ActionSource>>;

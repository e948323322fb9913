//! The 52-card deck and the round-robin deal.

use log::trace;

use super::card::{Card, Rank, Suit};
use super::hand::Hand;
use crate::core::{GameError, GameRng, PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};

/// Number of cards in play at all times.
pub const DECK_SIZE: usize = 52;

/// A standard 52-card deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards, suit-major in suit order, each suit lowest rank first.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Cards in deck order (top of the deck first).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deal every card, one at a time in seat order, starting at seat 0.
    ///
    /// When the deck does not divide evenly, the first `len % player_count`
    /// seats receive one extra card. Hands come back sorted.
    pub fn deal(self, player_count: usize) -> Result<PlayerMap<Hand>, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount(player_count));
        }

        let mut hands: PlayerMap<Hand> = PlayerMap::with_default(player_count);
        for (i, card) in self.cards.into_iter().enumerate() {
            hands.get_mut(PlayerId::new((i % player_count) as u8)).add(card);
        }
        for (player, hand) in hands.iter_mut() {
            hand.sort();
            trace!("dealt {} cards to {}", hand.len(), player);
        }

        Ok(hands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_deck_is_unique() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: FxHashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
        assert_eq!(deck.cards()[0], Card::CLUB_THREE);
    }

    #[test]
    fn test_shuffle_changes_order() {
        let mut deck = Deck::standard();
        deck.shuffle(&mut GameRng::new(42));
        assert_ne!(deck, Deck::standard());
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn test_deal_three_players() {
        let hands = Deck::standard().deal(3).unwrap();
        // 52 = 3 * 17 + 1
        assert_eq!(hands[PlayerId::new(0)].len(), 18);
        assert_eq!(hands[PlayerId::new(1)].len(), 17);
        assert_eq!(hands[PlayerId::new(2)].len(), 17);
    }

    #[test]
    fn test_deal_round_robin() {
        let deck = Deck::standard();
        let order = deck.cards().to_vec();
        let hands = deck.deal(4).unwrap();

        // Seat 1 gets the 2nd, 6th, 10th... card off the top
        for card in order.iter().skip(1).step_by(4) {
            assert!(hands[PlayerId::new(1)].contains(*card));
        }
    }

    #[test]
    fn test_deal_rejects_bad_counts() {
        assert_eq!(Deck::standard().deal(2), Err(GameError::InvalidPlayerCount(2)));
        assert_eq!(Deck::standard().deal(9), Err(GameError::InvalidPlayerCount(9)));
    }
}

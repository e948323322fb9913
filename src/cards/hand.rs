//! A participant's hand.
//!
//! Hands change only three ways: dealing, exchange, and removing played
//! cards. Removal is all-or-nothing.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Rank};
use crate::core::GameError;

/// Cards of one rank held together, lowest suit first.
pub type RankGroup = (Rank, SmallVec<[Card; 4]>);

/// An ordered multiset of cards owned by one participant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand holding `cards`, sorted.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self {
            cards: cards.into_iter().collect(),
        };
        hand.sort();
        hand
    }

    /// Cards in hand order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Has this participant run out of cards?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Is `card` in this hand?
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Does this hand hold the 3♣?
    #[must_use]
    pub fn has_club_three(&self) -> bool {
        self.contains(Card::CLUB_THREE)
    }

    /// Add one card at the end.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Add several cards at the end.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Check that `selection` names distinct cards that are all in this hand.
    pub fn check_owns(&self, selection: &[Card]) -> Result<(), GameError> {
        let mut seen = FxHashSet::default();
        for &card in selection {
            if !seen.insert(card) {
                return Err(GameError::DuplicateCard(card));
            }
            if !self.contains(card) {
                return Err(GameError::CardNotInHand(card));
            }
        }
        Ok(())
    }

    /// Remove every card in `selection`, or none of them.
    pub fn remove_all(&mut self, selection: &[Card]) -> Result<(), GameError> {
        self.check_owns(selection)?;
        self.cards.retain(|card| !selection.contains(card));
        Ok(())
    }

    /// Sort weakest to strongest.
    ///
    /// Cards order by value, then suit. When the only three held is the
    /// 3♠, it goes last: alone it outranks everything.
    pub fn sort(&mut self) {
        self.cards.sort_unstable();

        let threes = self.cards.iter().filter(|c| c.rank == Rank::Three).count();
        if threes == 1 {
            if let Some(pos) = self.cards.iter().position(|c| c.is_spade_three()) {
                let spade = self.cards.remove(pos);
                self.cards.push(spade);
            }
        }
    }

    /// The `n` strongest cards, in sorted order. Does not change the hand.
    #[must_use]
    pub fn strongest(&self, n: usize) -> Vec<Card> {
        let sorted = self.sorted();
        let start = sorted.cards.len().saturating_sub(n);
        sorted.cards[start..].to_vec()
    }

    /// The `n` weakest cards, in sorted order. Does not change the hand.
    #[must_use]
    pub fn weakest(&self, n: usize) -> Vec<Card> {
        let sorted = self.sorted();
        sorted.cards.into_iter().take(n).collect()
    }

    /// Cards grouped by rank, lowest rank first.
    #[must_use]
    pub fn rank_groups(&self) -> Vec<RankGroup> {
        let mut by_rank: Vec<Card> = self.cards.clone();
        by_rank.sort_unstable();

        let mut groups: Vec<RankGroup> = Vec::new();
        for card in by_rank {
            match groups.last_mut() {
                Some((rank, cards)) if *rank == card.rank => cards.push(card),
                _ => groups.push((card.rank, smallvec::smallvec![card])),
            }
        }
        groups
    }

    fn sorted(&self) -> Self {
        let mut copy = self.clone();
        copy.sort();
        copy
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", text.join(" "))
    }
}

//! Plays and the play validator.
//!
//! A `Play` is one or more cards of a single rank put down together. Plays
//! can only be built from a selection that passes these checks, so every
//! `Play` value is well formed.
//!
//! ## Beating a play
//!
//! - Sizes must match: a pair only answers a pair.
//! - A higher rank value wins; equal ranks never beat each other.
//! - A lone 3♠ beats every other single, and no single beats it. The rule
//!   does not apply to sets of two or more, where threes are the lowest rank.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Hand, Rank};
use crate::core::{GameError, PlayerId};

/// An accepted set of same-rank cards and who put it down.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    player: PlayerId,
    rank: Rank,
    cards: SmallVec<[Card; 4]>,
}

impl Play {
    /// Build a play, checking that `cards` is a non-empty set of one rank.
    pub fn new(player: PlayerId, cards: &[Card]) -> Result<Self, GameError> {
        let first = cards.first().ok_or(GameError::EmptyPlay)?;

        if cards.iter().any(|card| card.rank != first.rank) {
            return Err(GameError::MixedRank);
        }
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(GameError::DuplicateCard(*card));
            }
        }

        Ok(Self {
            player,
            rank: first.rank,
            cards: SmallVec::from_slice(cards),
        })
    }

    /// Who made this play.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The shared rank.
    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Number of cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// The cards played.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Is this the 3♠ played alone?
    #[must_use]
    pub fn is_lone_spade_three(&self) -> bool {
        self.cards.len() == 1 && self.cards[0].is_spade_three()
    }

    /// Does this play beat `other`? Plays of different sizes never do.
    #[must_use]
    pub fn beats(&self, other: &Play) -> bool {
        if self.size() != other.size() {
            return false;
        }
        if other.is_lone_spade_three() {
            return false;
        }
        if self.is_lone_spade_three() {
            return true;
        }
        self.rank.value() > other.rank.value()
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        write!(f, "{} plays {}", self.player, text.join(" "))
    }
}

/// Decide whether `proposed` may be played on top of `current`.
///
/// With no current play (an open lead) any well-formed set is accepted.
/// Pure: nothing is removed from any hand here.
pub fn validate(player: PlayerId, proposed: &[Card], current: Option<&Play>) -> Result<Play, GameError> {
    let play = Play::new(player, proposed)?;

    if let Some(current) = current {
        if play.size() != current.size() {
            return Err(GameError::SizeMismatch {
                expected: current.size(),
                actual: play.size(),
            });
        }
        if !play.beats(current) {
            return Err(GameError::DoesNotBeat);
        }
    }

    Ok(play)
}

/// Candidate plays `player` could make from `hand`, weakest first.
///
/// On an open lead: one play per rank and size the hand can form. Against
/// a current play: one play per rank that outranks it with enough copies,
/// plus the lone 3♠ when answering a single.
#[must_use]
pub fn legal_plays(player: PlayerId, hand: &Hand, current: Option<&Play>) -> Vec<Play> {
    let groups = hand.rank_groups();

    let Some(current) = current else {
        return groups
            .iter()
            .flat_map(|(_, cards)| (1..=cards.len()).map(move |size| &cards[..size]))
            .filter_map(|cards| Play::new(player, cards).ok())
            .collect();
    };

    if current.is_lone_spade_three() {
        return Vec::new();
    }

    let size = current.size();
    let mut plays: Vec<Play> = groups
        .iter()
        .filter(|(rank, cards)| rank.value() > current.rank().value() && cards.len() >= size)
        .filter_map(|(_, cards)| Play::new(player, &cards[..size]).ok())
        .collect();

    if size == 1 && hand.contains(Card::SPADE_THREE) {
        plays.push(Play {
            player,
            rank: Rank::Three,
            cards: smallvec::smallvec![Card::SPADE_THREE],
        });
    }

    plays
}

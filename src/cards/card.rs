//! Card values and the rank model.
//!
//! Ranks compare by a fixed value table, threes low and twos high:
//!
//! | rank  | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | J | Q | K  | A  | 2  |
//! |-------|---|---|---|---|---|---|---|----|---|---|----|----|----|
//! | value | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7  | 8 | 9 | 10 | 11 | 12 |
//!
//! Suits never affect comparison. The one exception is the 3♠, which beats
//! every other card when played alone (see [`Card::is_spade_three`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Card rank, declared in ascending value order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Rank {
    /// All ranks, lowest value first.
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Comparison value from the rank table (3 → 0 … 2 → 12).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Short symbol used in card text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit. Only identifies the 3♠ and the 3♣; never compared for strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit glyph used in card text.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '♣' | 'c' | 'C' => Some(Suit::Clubs),
            '♦' | 'd' | 'D' => Some(Suit::Diamonds),
            '♥' | 'h' | 'H' => Some(Suit::Hearts),
            '♠' | 's' | 'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// An immutable playing card.
///
/// The derived ordering is value first, suit second. It is a total order
/// for sorting only; play strength is decided by [`crate::rules::Play::beats`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// The 3♠: the strongest single card.
    pub const SPADE_THREE: Card = Card::new(Rank::Three, Suit::Spades);

    /// The 3♣: its holder leads the first trick of the game.
    pub const CLUB_THREE: Card = Card::new(Rank::Three, Suit::Clubs);

    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Comparison value of this card's rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Is this the 3♠?
    #[must_use]
    pub fn is_spade_three(self) -> bool {
        self == Self::SPADE_THREE
    }

    /// Is this the 3♣?
    #[must_use]
    pub fn is_club_three(self) -> bool {
        self == Self::CLUB_THREE
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Card text that names no card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot parse card from {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse `"10♥"`, `"10H"`, `"qs"` and similar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseCardError(s.to_string());

        let suit_char = trimmed.chars().last().ok_or_else(err)?;
        let suit = Suit::from_char(suit_char).ok_or_else(err)?;
        let rank_text = &trimmed[..trimmed.len() - suit_char.len_utf8()];
        let rank = Rank::from_symbol(rank_text).ok_or_else(err)?;

        Ok(Card::new(rank, suit))
    }
}

/// Parse a whitespace- or comma-separated list of cards.
///
/// ```
/// use president::cards::parse_cards;
///
/// let cards = parse_cards("3C, 3S 10♥").unwrap();
/// assert_eq!(cards.len(), 3);
/// ```
pub fn parse_cards(text: &str) -> Result<Vec<Card>, ParseCardError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

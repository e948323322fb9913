//! Cards, hands, and the deck.
//!
//! ## Key Types
//!
//! - `Rank` / `Suit` / `Card`: immutable card values and the rank model
//! - `Hand`: one participant's cards
//! - `Deck`: the 52-card deck and the round-robin deal

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{parse_cards, Card, ParseCardError, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use hand::{Hand, RankGroup};

//! # president
//!
//! Round and trick resolution engine for the card game President.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: 3 to 8 seats. Every API takes `player_count` or a
//!    `PlayerMap` as context; nothing assumes a table size.
//!
//! 2. **Rejections Are Values**: an illegal action returns a `GameError`
//!    and leaves every hand, trick and score exactly as it was.
//!
//! 3. **Deterministic**: all shuffling goes through `GameRng`, so a game
//!    replays exactly from its `GameConfig` and its action sources.
//!
//! ## Architecture
//!
//! - **Pure rules, thin driver**: `rules` holds the validator, the trick
//!   state machine, rank assignment, the exchange and scoring as plain
//!   functions and values. `game` sequences them into rounds and asks
//!   `ActionSource`s for decisions.
//!
//! - **Persistent Data Structures**: trick history and finishing order use
//!   `im` vectors so snapshots clone cheaply.
//!
//! ## Modules
//!
//! - `core`: seats, configuration, decisions, errors, RNG
//! - `cards`: cards, the deck, hands
//! - `rules`: plays, tricks, ranks, exchange, scoring
//! - `game`: rounds, the game driver, events and snapshots
//! - `agents`: the `ActionSource` trait and mechanical sources
//!
//! ## Example
//!
//! ```
//! use president::{ActionSource, FirstLegalAgent, Game, GameConfig, NeverStop, NullObserver, PlayerMap, Seats};
//!
//! let mut game = Game::new(GameConfig::new(4, 3)).unwrap();
//! let mut seats: Seats = PlayerMap::new(4, |_| Box::new(FirstLegalAgent) as Box<dyn ActionSource>);
//!
//! let outcome = game.play(&mut seats, &mut NullObserver, &mut NeverStop).unwrap();
//! assert_eq!(game.summaries().len(), 3);
//! println!("{outcome:?}");
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod agents;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng,
    GameConfig, RoundLimit,
    Decision, ActionRecord, Selection,
    GameError,
};

pub use crate::cards::{parse_cards, Card, Rank, Suit, Deck, Hand};

pub use crate::rules::{
    Play, validate, legal_plays,
    Trick, TrickPhase, TrickStep,
    SocialRank, RankTable, assign_ranks,
    Transfer, exchange,
    ScoreKeeper, GameOutcome, final_round_points,
};

pub use crate::game::{
    Game, Round, RoundStep, RoundSummary,
    GameEvent, Observer, NullObserver, EventLog,
    StopSignal, NeverStop,
    Snapshot, TrickView, PlayerView,
};

pub use crate::agents::{ActionSource, Seats, FirstLegalAgent, RandomAgent, ScriptedAgent};

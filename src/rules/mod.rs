//! President rules: play validation, tricks, ranks, exchange, scoring.
//!
//! Everything here is deterministic and free of I/O. Operations take the
//! state they act on as explicit parameters and report rejections as
//! `GameError` without changing that state.

pub mod exchange;
pub mod play;
pub mod ranks;
pub mod scoring;
pub mod trick;

pub use exchange::{exchange, exchange_pairs, Transfer, PRESIDENT_SWAP, VICE_SWAP};
pub use play::{legal_plays, validate, Play};
pub use ranks::{assign_ranks, holder_of, RankTable, SocialRank};
pub use scoring::{final_round_points, GameOutcome, ScoreKeeper, ROUND_POINTS};
pub use trick::{Trick, TrickPhase, TrickStep};

//! Action sources: where decisions come from.
//!
//! The engine asks every participant for decisions through the same
//! `ActionSource` trait, whether the answer comes from a person at a
//! prompt, a script, or an automated player. Rejected decisions are
//! reported back and the same source is asked again.
//!
//! - `FirstLegalAgent`: plays the weakest legal play, passes otherwise
//! - `RandomAgent`: picks uniformly among legal plays and passing
//! - `ScriptedAgent`: replays queued decisions, for tests

pub mod first_legal;
pub mod random;
pub mod scripted;
pub mod source;

pub use first_legal::FirstLegalAgent;
pub use random::RandomAgent;
pub use scripted::ScriptedAgent;
pub use source::{ActionSource, Seats};

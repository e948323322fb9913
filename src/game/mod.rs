//! Rounds, the game driver, and what observers see.

pub mod engine;
pub mod events;
pub mod round;
pub mod snapshot;

pub use engine::{Game, RoundSummary};
pub use events::{EventLog, GameEvent, NeverStop, NullObserver, Observer, StopSignal};
pub use round::{deal, find_starting_leader, Round, RoundStep};
pub use snapshot::{PlayerView, Snapshot, TrickView};

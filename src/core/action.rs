//! Participant decisions and the action history.
//!
//! A turn produces exactly one `Decision`: pass, or a selection of cards.
//! A selection is unchecked until the trick validates it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::Card;

/// Card selection. At most four cards share a rank, so the common case
/// never allocates.
pub type Selection = SmallVec<[Card; 4]>;

/// A participant's decision for one turn.
///
/// ```
/// use president::cards::Card;
/// use president::core::Decision;
///
/// let pair = Decision::play(&["9C".parse::<Card>().unwrap(), "9H".parse().unwrap()]);
/// assert!(!pair.is_pass());
/// assert!(Decision::Pass.is_pass());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Sit out the rest of this trick.
    Pass,
    /// Submit these cards.
    Play(Selection),
}

impl Decision {
    /// Build a play decision from a slice.
    #[must_use]
    pub fn play(cards: &[Card]) -> Self {
        Decision::Play(SmallVec::from_slice(cards))
    }

    /// Is this a pass?
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Decision::Pass)
    }
}

/// An accepted decision with its position in the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The participant who acted.
    pub player: PlayerId,

    /// What they did.
    pub decision: Decision,

    /// Trick number within the round (starts at 1).
    pub trick: u32,

    /// Sequence number within the round (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, decision: Decision, trick: u32, sequence: u32) -> Self {
        Self {
            player,
            decision,
            trick,
            sequence,
        }
    }
}

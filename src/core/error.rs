//! Rejection kinds for engine operations.
//!
//! Every variant is an anticipated, recoverable outcome. An operation that
//! returns an error has not changed any hand, trick, round, or score.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A play with no cards.
    #[error("a play needs at least one card")]
    EmptyPlay,

    /// Cards in one play do not all share a rank.
    #[error("all cards in a play must share one rank")]
    MixedRank,

    /// The same card named twice in one selection.
    #[error("card {0} selected more than once")]
    DuplicateCard(Card),

    /// A selected card is not in the acting participant's hand.
    #[error("card {0} is not in hand")]
    CardNotInHand(Card),

    /// Play size differs from the current winning play.
    #[error("expected {expected} card(s), got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Play does not outrank the current winning play.
    #[error("play does not beat the current play")]
    DoesNotBeat,

    /// A participant acted after passing in the same trick.
    #[error("{0} already passed this trick")]
    PlayAfterPass(PlayerId),

    /// The trick leader tried to pass on an open lead.
    #[error("the leader must play on an open lead")]
    LeaderMustPlay,

    /// Acted out of turn.
    #[error("not {actual}'s turn (waiting on {expected})")]
    NotYourTurn { expected: PlayerId, actual: PlayerId },

    /// Action submitted to a trick that already has a winner.
    #[error("trick already resolved")]
    TrickResolved,

    /// Action submitted after the round-end condition held.
    #[error("round is over")]
    RoundOver,

    /// A new round requested, or scoring asked for, before the current
    /// round reached its end condition.
    #[error("round still in progress")]
    RoundInProgress,

    /// Round requested after the final round was played.
    #[error("game is over")]
    GameOver,

    /// Participant count outside 3-8.
    #[error("player count must be between 3 and 8, got {0}")]
    InvalidPlayerCount(usize),

    /// Fixed round count of zero.
    #[error("a game needs at least one round")]
    InvalidRoundCount,

    /// Retry cap of zero: no source would ever be asked.
    #[error("max_attempts must be at least 1")]
    InvalidAttemptLimit,

    /// An open-ended game driven with a stop signal that never fires.
    #[error("an open-ended game needs a stop signal that can fire")]
    NoStopCondition,

    /// Exchange source holds fewer cards than it must hand over.
    #[error("{player} holds {held} card(s) but must give {required}")]
    InsufficientCards {
        player: PlayerId,
        required: usize,
        held: usize,
    },

    /// An action source kept producing rejected actions.
    #[error("{player} produced {attempts} rejected actions in a row")]
    AgentStalled { player: PlayerId, attempts: u32 },
}

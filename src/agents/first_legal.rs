//! Plays the first legal option.

use super::source::ActionSource;
use crate::cards::Hand;
use crate::core::{Decision, PlayerId};
use crate::rules::{legal_plays, Play};

/// Plays the weakest legal play; passes only when nothing is legal.
///
/// Deterministic and rule-abiding, so a table of these always finishes
/// a game without a single rejected action.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalAgent;

impl ActionSource for FirstLegalAgent {
    fn get_action(&mut self, player: PlayerId, hand: &Hand, current: Option<&Play>) -> Decision {
        legal_plays(player, hand, current)
            .first()
            .map_or(Decision::Pass, |play| Decision::play(play.cards()))
    }
}

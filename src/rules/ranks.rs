//! Social ranks derived from a round's finishing order.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// A participant's standing after a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialRank {
    President,
    VicePresident,
    Neutral,
    ViceScum,
    Scum,
}

impl std::fmt::Display for SocialRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SocialRank::President => "President",
            SocialRank::VicePresident => "Vice-President",
            SocialRank::Neutral => "Neutral",
            SocialRank::ViceScum => "Vice-Scum",
            SocialRank::Scum => "Scum",
        };
        f.write_str(name)
    }
}

/// Ranks for every seat; `None` until the first round ends.
pub type RankTable = PlayerMap<Option<SocialRank>>;

/// Assign ranks from a complete finishing order.
///
/// First out is President and last out is Scum. With four or more seats,
/// second out is Vice-President and second-to-last is Vice-Scum. Everyone
/// else is Neutral.
#[must_use]
pub fn assign_ranks(finishing_order: &[PlayerId], player_count: usize) -> RankTable {
    debug_assert_eq!(finishing_order.len(), player_count, "finishing order must be complete");

    let mut ranks: RankTable = PlayerMap::with_value(player_count, None);
    let last = finishing_order.len().saturating_sub(1);

    for (position, &player) in finishing_order.iter().enumerate() {
        let rank = match position {
            0 => SocialRank::President,
            p if p == last => SocialRank::Scum,
            1 if player_count >= 4 => SocialRank::VicePresident,
            p if player_count >= 4 && p + 1 == last => SocialRank::ViceScum,
            _ => SocialRank::Neutral,
        };
        ranks[player] = Some(rank);
    }

    ranks
}

/// Seat holding `rank`, if anyone does.
#[must_use]
pub fn holder_of(ranks: &RankTable, rank: SocialRank) -> Option<PlayerId> {
    ranks
        .iter()
        .find(|(_, held)| **held == Some(rank))
        .map(|(player, _)| player)
}

//! Property tests for dealing, play comparison, ranks and whole rounds.

use std::collections::HashSet;

use president::game::deal;
use president::{
    assign_ranks, ActionSource, Card, Game, GameConfig, GameRng, Play, PlayerId, RandomAgent, Rank, SocialRank, Suit,
};
use proptest::prelude::*;

fn rank_at(index: usize) -> Rank {
    Rank::ALL[index]
}

/// A set of `size` cards of `rank`, never the lone 3♠.
fn set_of(player: PlayerId, rank: Rank, size: usize) -> Play {
    let cards: Vec<Card> = Suit::ALL[..size].iter().map(|&suit| Card::new(rank, suit)).collect();
    Play::new(player, &cards).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every deal hands out all 52 cards once, as evenly as possible.
    #[test]
    fn prop_deal_is_complete_and_even(count in 3usize..=8, seed in any::<u64>()) {
        let hands = deal(count, &mut GameRng::new(seed)).unwrap();

        let all: Vec<Card> = hands.iter().flat_map(|(_, hand)| hand.cards().to_vec()).collect();
        let unique: HashSet<Card> = all.iter().copied().collect();
        prop_assert_eq!(all.len(), 52);
        prop_assert_eq!(unique.len(), 52);

        let sizes: Vec<usize> = hands.iter().map(|(_, hand)| hand.len()).collect();
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        prop_assert!(max - min <= 1, "sizes {:?}", sizes);
    }

    /// Property: for equal sizes, a play beats another exactly when its
    /// rank value is higher.
    #[test]
    fn prop_beats_follows_rank_value(a in 0usize..13, b in 0usize..13, size in 1usize..=4) {
        let p = set_of(PlayerId::new(0), rank_at(a), size);
        let q = set_of(PlayerId::new(1), rank_at(b), size);

        prop_assert_eq!(p.beats(&q), rank_at(a).value() > rank_at(b).value());
        prop_assert!(!(p.beats(&q) && q.beats(&p)));
    }

    /// Property: plays of different sizes never beat each other.
    #[test]
    fn prop_different_sizes_never_beat(
        a in 0usize..13,
        b in 0usize..13,
        size_a in 1usize..=4,
        size_b in 1usize..=4,
    ) {
        prop_assume!(size_a != size_b);
        let p = set_of(PlayerId::new(0), rank_at(a), size_a);
        let q = set_of(PlayerId::new(1), rank_at(b), size_b);

        prop_assert!(!p.beats(&q));
        prop_assert!(!q.beats(&p));
    }

    /// Property: any finishing order yields one President and one Scum, and
    /// vice roles exactly when four or more seats play.
    #[test]
    fn prop_rank_assignment(order in (3usize..=8).prop_flat_map(|count| {
        Just((0..count as u8).map(PlayerId::new).collect::<Vec<_>>()).prop_shuffle()
    })) {
        let count = order.len();
        let ranks = assign_ranks(&order, count);
        let held = |rank: SocialRank| ranks.iter().filter(|(_, r)| **r == Some(rank)).count();

        prop_assert_eq!(ranks[order[0]], Some(SocialRank::President));
        prop_assert_eq!(ranks[order[count - 1]], Some(SocialRank::Scum));
        prop_assert_eq!(held(SocialRank::President), 1);
        prop_assert_eq!(held(SocialRank::Scum), 1);

        let vice = usize::from(count >= 4);
        prop_assert_eq!(held(SocialRank::VicePresident), vice);
        prop_assert_eq!(held(SocialRank::ViceScum), vice);
        prop_assert_eq!(held(SocialRank::Neutral), count - 2 - 2 * vice);
    }

    /// Property: random play keeps all 52 cards accounted for after every
    /// action, and every round finishes with each seat ranked once.
    #[test]
    fn prop_rounds_conserve_cards(count in 3usize..=8, seed in any::<u64>()) {
        let mut game = Game::new(GameConfig::new(count, 2).with_seed(seed)).unwrap();
        let mut seats = president::PlayerMap::new(count, |player| {
            Box::new(RandomAgent::new(seed.wrapping_add(player.index() as u64))) as Box<dyn ActionSource>
        });

        for _ in 0..2 {
            game.start_round(&mut seats).unwrap();
            prop_assert_eq!(game.round().unwrap().card_count(), 52);

            while let Some(player) = game.to_act() {
                let round = game.round().unwrap();
                let decision = seats[player].get_action(player, round.hand(player), round.trick().current_play());
                game.apply(player, &decision).unwrap();
                prop_assert_eq!(game.round().unwrap().card_count(), 52);
            }

            let summary = game.end_round(&mut president::NeverStop).unwrap();
            let unique: HashSet<PlayerId> = summary.finishing_order.iter().copied().collect();
            prop_assert_eq!(unique.len(), count);
        }
        prop_assert!(game.is_over());
    }
}

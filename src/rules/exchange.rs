//! Card exchange between rounds.
//!
//! Reads the ranks assigned at the end of the previous round:
//! - Scum hands their 2 strongest cards to the President, who returns any 2.
//! - Vice-Scum hands their strongest card to the Vice-President, who
//!   returns any 1 (only when those ranks exist, i.e. 4+ seats).
//!
//! The exchange is atomic: it works on a copy of the hands and commits only
//! when every transfer succeeded.

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use super::ranks::{holder_of, RankTable, SocialRank};
use crate::cards::{Card, Hand};
use crate::core::{GameError, PlayerId, PlayerMap};

/// Cards the President and Scum swap.
pub const PRESIDENT_SWAP: usize = 2;

/// Cards the Vice-President and Vice-Scum swap.
pub const VICE_SWAP: usize = 1;

/// One movement of cards between two seats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: PlayerId,
    pub to: PlayerId,
    pub cards: Vec<Card>,
}

/// The (giver, receiver, count) pairs implied by `ranks`.
#[must_use]
pub fn exchange_pairs(ranks: &RankTable) -> Vec<(PlayerId, PlayerId, usize)> {
    let mut pairs = Vec::new();
    if let (Some(scum), Some(president)) = (
        holder_of(ranks, SocialRank::Scum),
        holder_of(ranks, SocialRank::President),
    ) {
        pairs.push((scum, president, PRESIDENT_SWAP));
    }
    if let (Some(vice_scum), Some(vice_president)) = (
        holder_of(ranks, SocialRank::ViceScum),
        holder_of(ranks, SocialRank::VicePresident),
    ) {
        pairs.push((vice_scum, vice_president, VICE_SWAP));
    }
    pairs
}

/// Run the exchange on `hands`.
///
/// `choose(player, hand, count)` asks a receiving seat which cards to give
/// back. A choice of the wrong size, or naming cards the seat does not hold,
/// is asked again up to `max_attempts` times.
pub fn exchange(
    hands: &mut PlayerMap<Hand>,
    ranks: &RankTable,
    max_attempts: u32,
    mut choose: impl FnMut(PlayerId, &Hand, usize) -> Vec<Card>,
) -> Result<Vec<Transfer>, GameError> {
    let pairs = exchange_pairs(ranks);

    for &(giver, receiver, count) in &pairs {
        for seat in [giver, receiver] {
            let held = hands[seat].len();
            if held < count {
                return Err(GameError::InsufficientCards {
                    player: seat,
                    required: count,
                    held,
                });
            }
        }
    }

    let mut staged = hands.clone();
    let mut transfers = Vec::with_capacity(pairs.len() * 2);

    for (giver, receiver, count) in pairs {
        let tribute = staged[giver].strongest(count);
        move_cards(&mut staged, giver, receiver, &tribute)?;
        trace!("{giver} gives {receiver} {tribute:?}");
        transfers.push(Transfer {
            from: giver,
            to: receiver,
            cards: tribute,
        });

        let returned = choose_return(&staged[receiver], receiver, count, max_attempts, &mut choose)?;
        move_cards(&mut staged, receiver, giver, &returned)?;
        trace!("{receiver} returns {giver} {returned:?}");
        transfers.push(Transfer {
            from: receiver,
            to: giver,
            cards: returned,
        });
    }

    *hands = staged;
    Ok(transfers)
}

fn choose_return(
    hand: &Hand,
    player: PlayerId,
    count: usize,
    max_attempts: u32,
    choose: &mut impl FnMut(PlayerId, &Hand, usize) -> Vec<Card>,
) -> Result<Vec<Card>, GameError> {
    for _ in 0..max_attempts {
        let choice = choose(player, hand, count);
        let checked = if choice.len() == count {
            hand.check_owns(&choice)
        } else {
            Err(GameError::SizeMismatch {
                expected: count,
                actual: choice.len(),
            })
        };
        match checked {
            Ok(()) => return Ok(choice),
            Err(err) => warn!("{player} exchange choice rejected: {err}"),
        }
    }
    Err(GameError::AgentStalled {
        player,
        attempts: max_attempts,
    })
}

fn move_cards(
    hands: &mut PlayerMap<Hand>,
    from: PlayerId,
    to: PlayerId,
    cards: &[Card],
) -> Result<(), GameError> {
    let (source, target) = hands.pair_mut(from, to);
    source.remove_all(cards)?;
    target.extend(cards.iter().copied());
    source.sort();
    target.sort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::rules::ranks::assign_ranks;

    const ALICE: PlayerId = PlayerId::new(0);
    const BOB: PlayerId = PlayerId::new(1);
    const CARL: PlayerId = PlayerId::new(2);
    const DANA: PlayerId = PlayerId::new(3);

    fn hands(texts: &[&str]) -> PlayerMap<Hand> {
        PlayerMap::from_vec(
            texts
                .iter()
                .map(|text| Hand::from_cards(parse_cards(text).unwrap()))
                .collect(),
        )
    }

    fn weakest(_: PlayerId, hand: &Hand, count: usize) -> Vec<Card> {
        hand.weakest(count)
    }

    #[test]
    fn test_president_and_scum_swap() {
        // Alice President, Carl Neutral, Bob Scum
        let ranks = assign_ranks(&[ALICE, CARL, BOB], 3);
        let mut h = hands(&["4C 5D 6H", "2S AH 7D 8C", "9C 9D"]);

        let transfers = exchange(&mut h, &ranks, 3, weakest).unwrap();

        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].from, BOB);
        assert_eq!(transfers[0].cards, parse_cards("AH 2S").unwrap());
        assert_eq!(transfers[1].from, ALICE);
        assert_eq!(transfers[1].cards, parse_cards("4C 5D").unwrap());

        assert_eq!(h[ALICE].len(), 3);
        assert_eq!(h[BOB].len(), 4);
        assert!(h[ALICE].contains("2S".parse().unwrap()));
        assert!(h[BOB].contains("4C".parse().unwrap()));
        assert_eq!(h[CARL].len(), 2);
    }

    #[test]
    fn test_vice_roles_swap_one_card() {
        let ranks = assign_ranks(&[ALICE, BOB, CARL, DANA], 4);
        let mut h = hands(&["4C 5D", "6C 7C", "KH 8D", "2C 9H"]);

        let transfers = exchange(&mut h, &ranks, 3, weakest).unwrap();

        assert_eq!(transfers.len(), 4);
        // Vice-Scum Carl hands over his king, Bob returns his six
        assert_eq!(transfers[2].cards, parse_cards("KH").unwrap());
        assert_eq!(transfers[3].cards, parse_cards("6C").unwrap());
        assert!(h[BOB].contains("KH".parse().unwrap()));
        assert!(h[CARL].contains("6C".parse().unwrap()));
    }

    #[test]
    fn test_president_may_return_strong_cards() {
        let ranks = assign_ranks(&[ALICE, CARL, BOB], 3);
        let mut h = hands(&["4C 5D KS", "2S AH 7D", "9C"]);

        exchange(&mut h, &ranks, 3, |_, hand: &Hand, count| hand.strongest(count)).unwrap();

        // Alice gave back the two cards she had just received
        assert_eq!(h[BOB], Hand::from_cards(parse_cards("2S AH 7D").unwrap()));
    }

    #[test]
    fn test_insufficient_cards() {
        let ranks = assign_ranks(&[ALICE, CARL, BOB], 3);
        let mut h = hands(&["4C 5D", "2S", "9C"]);
        let before = h.clone();

        assert_eq!(
            exchange(&mut h, &ranks, 3, weakest),
            Err(GameError::InsufficientCards {
                player: BOB,
                required: 2,
                held: 1
            })
        );
        assert_eq!(h, before);
    }

    #[test]
    fn test_bad_choices_are_retried_then_stall() {
        let ranks = assign_ranks(&[ALICE, CARL, BOB], 3);
        let mut h = hands(&["4C 5D", "2S AH", "9C"]);
        let before = h.clone();

        let mut calls = 0;
        let result = exchange(&mut h, &ranks, 3, |_, _: &Hand, _| {
            calls += 1;
            parse_cards("KD KH").unwrap()
        });

        assert_eq!(result, Err(GameError::AgentStalled { player: ALICE, attempts: 3 }));
        assert_eq!(calls, 3);
        assert_eq!(h, before);
    }

    #[test]
    fn test_wrong_size_choice_is_retried() {
        let ranks = assign_ranks(&[ALICE, CARL, BOB], 3);
        let mut h = hands(&["4C 5D", "2S AH", "9C"]);

        let mut calls = 0;
        exchange(&mut h, &ranks, 3, |_, hand: &Hand, count| {
            calls += 1;
            if calls == 1 {
                hand.weakest(1)
            } else {
                hand.weakest(count)
            }
        })
        .unwrap();

        assert_eq!(calls, 2);
    }

    #[test]
    fn test_no_ranks_no_exchange() {
        let ranks: RankTable = PlayerMap::with_value(3, None);
        let mut h = hands(&["4C", "5C", "6C"]);
        assert!(exchange(&mut h, &ranks, 3, weakest).unwrap().is_empty());
    }
}

//! Play validation and trick resolution through the public API.

use president::game::find_starting_leader;
use president::{
    parse_cards, validate, Card, Decision, GameError, Hand, Play, PlayerId, PlayerMap, Rank, Round, Suit, Trick,
    TrickPhase,
};

const A: PlayerId = PlayerId::new(0);
const B: PlayerId = PlayerId::new(1);
const C: PlayerId = PlayerId::new(2);

fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).unwrap()
}

fn hands(texts: &[&str]) -> PlayerMap<Hand> {
    PlayerMap::from_vec(texts.iter().map(|text| Hand::from_cards(cards(text))).collect())
}

fn play(text: &str) -> Decision {
    Decision::play(&cards(text))
}

/// Test that a lone 3♠ tops every other single, the 2s included.
#[test]
fn test_spade_three_is_the_single_ceiling() {
    let spade_three = Play::new(A, &[Card::SPADE_THREE]).unwrap();

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let card = Card::new(rank, suit);
            if card == Card::SPADE_THREE {
                continue;
            }
            let single = Play::new(B, &[card]).unwrap();

            assert!(spade_three.beats(&single), "3♠ should beat {card}");
            assert!(!single.beats(&spade_three), "{card} should not beat 3♠");
            assert_eq!(validate(B, &[card], Some(&spade_three)), Err(GameError::DoesNotBeat));
        }
    }
}

/// Test that the 3♠ is an ordinary three inside a set.
#[test]
fn test_spade_three_in_a_pair_is_low() {
    let threes = Play::new(A, &cards("3S 3H")).unwrap();
    let fours = Play::new(B, &cards("4C 4D")).unwrap();

    assert!(fours.beats(&threes));
    assert!(!threes.beats(&fours));
}

/// Test that sizes must match regardless of rank.
#[test]
fn test_size_mismatch_regardless_of_rank() {
    let single_four = Play::new(A, &cards("4C")).unwrap();
    assert_eq!(
        validate(B, &cards("2C 2D"), Some(&single_four)),
        Err(GameError::SizeMismatch { expected: 1, actual: 2 })
    );

    let pair_fours = Play::new(A, &cards("4C 4D")).unwrap();
    assert_eq!(
        validate(B, &[Card::SPADE_THREE], Some(&pair_fours)),
        Err(GameError::SizeMismatch { expected: 2, actual: 1 })
    );
}

/// Test that mixed ranks and empty selections are rejected on a lead.
#[test]
fn test_lead_must_be_one_rank() {
    assert_eq!(validate(A, &cards("5C 6C"), None), Err(GameError::MixedRank));
    assert_eq!(validate(A, &[], None), Err(GameError::EmptyPlay));
    assert!(validate(A, &cards("5C 5D 5H 5S"), None).is_ok());
}

/// Test the full OPEN -> CONTESTED -> RESOLVED cycle and that the winning
/// cards have left the winner's hand.
#[test]
fn test_trick_lifecycle() {
    let mut h = hands(&["3C 9D", "5C 6D", "7C 8D"]);
    let mut trick = Trick::new(A, &h);
    assert_eq!(trick.phase(), TrickPhase::Open);

    trick.apply(A, &play("3C"), &mut h).unwrap();
    assert_eq!(trick.phase(), TrickPhase::Contested);
    trick.apply(B, &play("6D"), &mut h).unwrap();
    trick.apply(C, &Decision::Pass, &mut h).unwrap();
    trick.apply(A, &play("9D"), &mut h).unwrap();
    trick.apply(B, &Decision::Pass, &mut h).unwrap();

    assert_eq!(trick.phase(), TrickPhase::Resolved);
    assert_eq!(trick.winner(), Some(A));
    assert!(!h[A].contains("9D".parse().unwrap()));
    assert_eq!(trick.history().len(), 3);
}

/// Test that rejected actions change nothing and the same seat acts again.
#[test]
fn test_rejected_actions_are_no_ops() {
    let mut h = hands(&["3C 9D", "5C 5D 6D", "7C 8D"]);
    let mut trick = Trick::new(A, &h);

    assert_eq!(trick.apply(A, &Decision::Pass, &mut h), Err(GameError::LeaderMustPlay));
    trick.apply(A, &play("9D"), &mut h).unwrap();

    let before_hands = h.clone();
    let before_history = trick.history().clone();

    assert_eq!(
        trick.apply(B, &play("5C 5D"), &mut h),
        Err(GameError::SizeMismatch { expected: 1, actual: 2 })
    );
    assert_eq!(trick.apply(B, &play("6D"), &mut h), Err(GameError::DoesNotBeat));
    assert_eq!(
        trick.apply(B, &play("KS"), &mut h),
        Err(GameError::CardNotInHand("KS".parse().unwrap()))
    );
    assert_eq!(
        trick.apply(C, &play("8D"), &mut h),
        Err(GameError::NotYourTurn { expected: B, actual: C })
    );

    assert_eq!(h, before_hands);
    assert_eq!(trick.history(), &before_history);
    assert_eq!(trick.to_act(), Some(B));
}

/// Test that a seat that passed cannot come back into the same trick.
#[test]
fn test_no_play_after_pass() {
    let mut h = hands(&["3C 9D", "5C 6D", "7C 8D KH"]);
    let mut trick = Trick::new(A, &h);

    trick.apply(A, &play("3C"), &mut h).unwrap();
    trick.apply(B, &Decision::Pass, &mut h).unwrap();
    trick.apply(C, &play("7C"), &mut h).unwrap();
    trick.apply(A, &play("9D"), &mut h).unwrap();

    // B passed earlier, so C is next
    assert_eq!(trick.to_act(), Some(C));
    assert!(trick.has_passed(B));
    assert_eq!(trick.apply(B, &play("6D"), &mut h), Err(GameError::PlayAfterPass(B)));
}

/// Three players: the 3♣ holder leads a single, the others pass, and the
/// leader takes the trick and leads again.
#[test]
fn test_three_player_opening_trick() {
    let dealt = hands(&["5C 9D KH", "3C 4D 8S", "6C 7D JS"]);
    let leader = find_starting_leader(&dealt).unwrap();
    assert_eq!(leader, B);

    let mut round = Round::new(1, dealt, leader);
    assert_eq!(round.apply(A, &play("5C")), Err(GameError::NotYourTurn { expected: B, actual: A }));

    round.apply(B, &play("3C")).unwrap();
    assert_eq!(round.to_act(), Some(C));
    round.apply(C, &Decision::Pass).unwrap();
    let step = round.apply(A, &Decision::Pass).unwrap();

    assert_eq!(step.trick_winner, Some(B));
    assert_eq!(round.to_act(), Some(B));
    assert_eq!(round.trick().phase(), TrickPhase::Open);
    assert_eq!(round.hand(B).len(), 2);
}

/// Three players: the next seat answers a single with a higher single.
#[test]
fn test_three_player_contested_single() {
    let dealt = hands(&["5C 9D KH", "3C 4D 8S", "6C 7D JS"]);
    let mut round = Round::new(1, dealt, B);

    round.apply(B, &play("3C")).unwrap();
    round.apply(C, &play("JS")).unwrap();
    round.apply(A, &play("KH")).unwrap();
    round.apply(B, &Decision::Pass).unwrap();
    let step = round.apply(C, &Decision::Pass).unwrap();

    assert_eq!(step.trick_winner, Some(A));
    assert_eq!(round.to_act(), Some(A));
}

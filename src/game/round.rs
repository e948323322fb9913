//! One round: deal, tricks back to back, finishing order.
//!
//! A round ends the moment only one seat still holds cards, even in the
//! middle of a trick. That seat is appended to the finishing order as the
//! last entry, and whatever is on the table is set aside.

use im::Vector;
use log::{debug, info};

use crate::cards::{Card, Deck, Hand};
use crate::core::{ActionRecord, Decision, GameError, GameRng, PlayerId, PlayerMap};
use crate::rules::{Play, Trick};

/// Shuffle a fresh deck with `rng` and deal it round-robin.
pub fn deal(player_count: usize, rng: &mut GameRng) -> Result<PlayerMap<Hand>, GameError> {
    let mut deck = Deck::standard();
    deck.shuffle(rng);
    deck.deal(player_count)
}

/// The seat holding the 3♣, who leads the first trick of the game.
#[must_use]
pub fn find_starting_leader(hands: &PlayerMap<Hand>) -> Option<PlayerId> {
    hands
        .iter()
        .find(|(_, hand)| hand.has_club_three())
        .map(|(player, _)| player)
}

/// What an accepted action did to the round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundStep {
    /// The play made, if the action was a play.
    pub play: Option<Play>,
    /// Seats added to the finishing order by this action, in order.
    pub finished: Vec<PlayerId>,
    /// The trick resolved, won by this seat.
    pub trick_winner: Option<PlayerId>,
    /// The round-end condition now holds.
    pub round_over: bool,
}

/// State of the round in progress.
#[derive(Clone, Debug)]
pub struct Round {
    number: u32,
    hands: PlayerMap<Hand>,
    trick: Trick,
    trick_number: u32,
    finishing_order: Vector<PlayerId>,
    set_aside: Vec<Card>,
    last_trick_winner: Option<PlayerId>,
    history: Vec<ActionRecord>,
    over: bool,
}

impl Round {
    /// Start round `number` on already dealt (and exchanged) hands.
    pub fn new(number: u32, hands: PlayerMap<Hand>, leader: PlayerId) -> Self {
        let trick = Trick::new(leader, &hands);
        info!("round {number} begins, {leader} leads");

        Self {
            number,
            hands,
            trick,
            trick_number: 1,
            finishing_order: Vector::new(),
            set_aside: Vec::new(),
            last_trick_winner: None,
            history: Vec::new(),
            over: false,
        }
    }

    /// Round number (1-based).
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// All hands.
    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    /// One seat's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// The trick in progress (or the last one, once the round is over).
    #[must_use]
    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    /// Trick number within the round (1-based).
    #[must_use]
    pub fn trick_number(&self) -> u32 {
        self.trick_number
    }

    /// Seats in the order they emptied their hands.
    #[must_use]
    pub fn finishing_order(&self) -> &Vector<PlayerId> {
        &self.finishing_order
    }

    /// Winner of the most recent trick. Once the round is over, this is
    /// the seat that leads the next round.
    #[must_use]
    pub fn last_trick_winner(&self) -> Option<PlayerId> {
        self.last_trick_winner
    }

    /// Accepted actions, in order.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Has the round-end condition been reached?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Seat whose turn it is; `None` once the round is over.
    #[must_use]
    pub fn to_act(&self) -> Option<PlayerId> {
        if self.over {
            None
        } else {
            self.trick.to_act()
        }
    }

    /// Seats that still hold cards.
    #[must_use]
    pub fn players_with_cards(&self) -> Vec<PlayerId> {
        self.hands
            .iter()
            .filter(|(_, hand)| !hand.is_empty())
            .map(|(player, _)| player)
            .collect()
    }

    /// Cards in hands, on the table, and set aside. Constant for the
    /// whole round: 52 after a full deal.
    #[must_use]
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.hands.iter().map(|(_, hand)| hand.len()).sum();
        let on_table: usize = self.trick.history().iter().map(Play::size).sum();
        in_hands + on_table + self.set_aside.len()
    }

    /// Apply `decision` from `player`. Rejections leave the round untouched.
    pub fn apply(&mut self, player: PlayerId, decision: &Decision) -> Result<RoundStep, GameError> {
        if self.over {
            return Err(GameError::RoundOver);
        }

        let trick_step = self.trick.apply(player, decision, &mut self.hands)?;

        self.history.push(ActionRecord::new(
            player,
            decision.clone(),
            self.trick_number,
            self.history.len() as u32,
        ));

        let mut step = RoundStep {
            play: match decision {
                Decision::Play(_) => self.trick.current_play().cloned(),
                Decision::Pass => None,
            },
            trick_winner: trick_step.winner,
            ..RoundStep::default()
        };

        if trick_step.emptied_hand {
            self.finish(player, &mut step);
        }

        let holding = self.players_with_cards();
        if holding.len() <= 1 {
            if let Some(&last) = holding.first() {
                self.finish(last, &mut step);
            }
            self.end(&mut step);
            return Ok(step);
        }

        if let Some(winner) = trick_step.winner {
            self.last_trick_winner = Some(winner);
            self.set_aside.extend(self.trick.set_aside());
            self.trick_number += 1;

            let leader = self.next_leader(winner);
            debug!("trick {} led by {leader}", self.trick_number);
            self.trick = Trick::new(leader, &self.hands);
        }

        Ok(step)
    }

    fn finish(&mut self, player: PlayerId, step: &mut RoundStep) {
        self.finishing_order.push_back(player);
        step.finished.push(player);
        info!("{player} finishes round {} in position {}", self.number, self.finishing_order.len());
    }

    fn end(&mut self, step: &mut RoundStep) {
        self.last_trick_winner = self
            .trick
            .winner()
            .or_else(|| self.trick.current_play().map(Play::player))
            .or(self.last_trick_winner);
        self.set_aside.extend(self.trick.set_aside());
        self.over = true;
        step.round_over = true;
        info!("round {} over after {} trick(s)", self.number, self.trick_number);
    }

    /// The trick winner leads again; if they went out, the next seat
    /// around the table that still holds cards leads instead.
    fn next_leader(&self, winner: PlayerId) -> PlayerId {
        winner
            .clockwise(self.hands.player_count())
            .find(|seat| !self.hands[*seat].is_empty())
            .unwrap_or(winner)
    }
}

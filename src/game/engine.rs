//! The game driver.
//!
//! A `Game` plays rounds back to back. Each round goes through four steps:
//!
//! 1. **Deal**: a fresh deck, shuffled with the round's own RNG stream.
//! 2. **Exchange**: from round 2 on, using the ranks of the round before.
//! 3. **Tricks**: action sources are asked in turn until one seat holds cards.
//! 4. **Scoring**: ranks are assigned, the stop signal is asked whether this
//!    round is the last, and the President is credited.
//!
//! `play_round` and `play` run these steps with action sources. The same
//! steps are also exposed one at a time (`start_round`, `apply`,
//! `end_round`) for callers that drive turns themselves.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::events::{GameEvent, Observer, StopSignal};
use super::round::{deal, find_starting_leader, Round, RoundStep};
use super::snapshot::{PlayerView, Snapshot, TrickView};
use crate::agents::Seats;
use crate::core::{Decision, GameConfig, GameError, GameRng, PlayerId, PlayerMap, RoundLimit};
use crate::rules::{assign_ranks, exchange, GameOutcome, RankTable, ScoreKeeper, Transfer};

/// Result of one completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number (1-based).
    pub round: u32,
    pub finishing_order: Vec<PlayerId>,
    pub ranks: RankTable,
    pub president: PlayerId,
    /// Points credited to the President.
    pub points: u32,
    pub is_final: bool,
    /// Exchange performed before the round's first trick.
    pub exchanges: Vec<Transfer>,
    /// Tricks played, counting one cut short by the round ending.
    pub tricks: u32,
}

/// A game of President.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    rng: GameRng,
    scores: ScoreKeeper,
    ranks: RankTable,
    round_number: u32,
    round: Option<Round>,
    /// A round has been dealt and not yet scored.
    in_round: bool,
    exchanges: Vec<Transfer>,
    next_leader: Option<PlayerId>,
    summaries: Vec<RoundSummary>,
    finished: bool,
}

impl Game {
    /// Create a game. Nothing is dealt until the first round starts.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let player_count = config.player_count;

        Ok(Self {
            rng: GameRng::new(config.seed),
            scores: ScoreKeeper::new(player_count),
            ranks: PlayerMap::with_value(player_count, None),
            round_number: 0,
            round: None,
            in_round: false,
            exchanges: Vec::new(),
            next_leader: None,
            summaries: Vec::new(),
            finished: false,
            config,
        })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of participants.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    /// Current (or last played) round number; 0 before the first deal.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// The current round, or the last one once it has been scored.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Cumulative scores.
    #[must_use]
    pub fn scores(&self) -> &ScoreKeeper {
        &self.scores
    }

    /// Ranks from the last completed round.
    #[must_use]
    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    /// Exchange performed before the current round.
    #[must_use]
    pub fn exchanges(&self) -> &[Transfer] {
        &self.exchanges
    }

    /// Summaries of every completed round.
    #[must_use]
    pub fn summaries(&self) -> &[RoundSummary] {
        &self.summaries
    }

    /// Has the final round been scored?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.finished
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.finished.then(|| self.scores.determine_winner())
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn to_act(&self) -> Option<PlayerId> {
        self.active_round().and_then(Round::to_act)
    }

    fn active_round(&self) -> Option<&Round> {
        self.round.as_ref().filter(|_| self.in_round)
    }

    /// Deal the next round and run the exchange.
    ///
    /// Round 1 is led by the 3♣ holder. Later rounds are led by whoever
    /// won the previous round's last trick.
    pub fn start_round(&mut self, seats: &mut Seats) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::GameOver);
        }
        if self.in_round {
            return Err(GameError::RoundInProgress);
        }
        if seats.player_count() != self.config.player_count {
            return Err(GameError::InvalidPlayerCount(seats.player_count()));
        }

        let number = self.round_number + 1;
        let mut hands = deal(self.config.player_count, &mut self.rng.for_round(number))?;

        let exchanges = exchange(&mut hands, &self.ranks, self.config.max_attempts, |player, hand, count| {
            seats[player].choose_exchange(player, hand, count)
        })?;

        let leader = match self.next_leader {
            Some(leader) => leader,
            // a full deal always places the 3♣
            None => find_starting_leader(&hands).unwrap_or(PlayerId::new(0)),
        };

        self.round_number = number;
        self.round = Some(Round::new(number, hands, leader));
        self.exchanges = exchanges;
        self.in_round = true;
        Ok(())
    }

    /// Apply one decision to the current round.
    pub fn apply(&mut self, player: PlayerId, decision: &Decision) -> Result<RoundStep, GameError> {
        match self.round.as_mut() {
            Some(round) if self.in_round => round.apply(player, decision),
            _ => Err(GameError::RoundOver),
        }
    }

    /// Assign ranks and score the round that just ended.
    ///
    /// `stop` is asked, after ranks are known and before points are awarded,
    /// whether this round should be the last. A fixed round limit ends the
    /// game regardless.
    pub fn end_round(&mut self, stop: &mut dyn StopSignal) -> Result<RoundSummary, GameError> {
        let Some(round) = self.active_round() else {
            return Err(GameError::RoundOver);
        };
        if !round.is_over() {
            return Err(GameError::RoundInProgress);
        }

        let finishing_order: Vec<PlayerId> = round.finishing_order().iter().copied().collect();
        let Some(&president) = finishing_order.first() else {
            return Err(GameError::RoundInProgress);
        };
        let next_leader = round.last_trick_winner();
        let tricks = round.trick_number();

        let number = self.round_number;
        let ranks = assign_ranks(&finishing_order, self.config.player_count);
        let is_final = self.config.rounds.is_last(number) || stop.should_stop(number, &self.scores);
        let points = self.scores.award(president, number, is_final);

        let summary = RoundSummary {
            round: number,
            finishing_order,
            ranks: ranks.clone(),
            president,
            points,
            is_final,
            exchanges: std::mem::take(&mut self.exchanges),
            tricks,
        };

        self.ranks = ranks;
        self.next_leader = next_leader;
        self.in_round = false;
        self.finished = is_final;
        self.summaries.push(summary.clone());

        if is_final {
            info!("game over after {number} round(s): {:?}", self.scores.determine_winner());
        }
        Ok(summary)
    }

    /// Play one whole round with `seats` choosing every action.
    pub fn play_round(
        &mut self,
        seats: &mut Seats,
        observer: &mut dyn Observer,
        stop: &mut dyn StopSignal,
    ) -> Result<RoundSummary, GameError> {
        self.start_round(seats)?;

        if let Some(leader) = self.to_act() {
            self.emit(
                observer,
                GameEvent::RoundStarted {
                    round: self.round_number,
                    leader,
                },
            );
        }
        if !self.exchanges.is_empty() {
            let transfers = self.exchanges.clone();
            self.emit(observer, GameEvent::CardsExchanged { transfers });
        }

        self.run_tricks(seats, observer)?;

        let summary = self.end_round(stop)?;
        self.emit(
            observer,
            GameEvent::RoundEnded {
                summary: summary.clone(),
            },
        );
        if let Some(outcome) = self.outcome() {
            self.emit(observer, GameEvent::GameEnded { outcome });
        }
        Ok(summary)
    }

    /// Play rounds until the game ends and return the outcome.
    ///
    /// An open-ended game only ends through `stop`, so a signal whose
    /// `can_stop` is false (such as `NeverStop`) is refused with
    /// `NoStopCondition` before any round is dealt.
    pub fn play(
        &mut self,
        seats: &mut Seats,
        observer: &mut dyn Observer,
        stop: &mut dyn StopSignal,
    ) -> Result<GameOutcome, GameError> {
        if self.config.rounds == RoundLimit::OpenEnded && !stop.can_stop() {
            return Err(GameError::NoStopCondition);
        }
        while !self.finished {
            self.play_round(seats, observer, stop)?;
        }
        Ok(self.scores.determine_winner())
    }

    /// Ask for actions until the round ends. A rejected action is reported
    /// back to its source and asked again, up to `max_attempts` in a row.
    fn run_tricks(&mut self, seats: &mut Seats, observer: &mut dyn Observer) -> Result<(), GameError> {
        let max_attempts = self.config.max_attempts;
        let mut attempts = 0;

        while let Some(player) = self.to_act() {
            let Some(round) = self.active_round() else {
                break;
            };
            let decision = seats[player].get_action(player, round.hand(player), round.trick().current_play());

            match self.apply(player, &decision) {
                Ok(step) => {
                    attempts = 0;
                    self.report(observer, player, step);
                }
                Err(error) => {
                    attempts += 1;
                    warn!("{player} action rejected ({attempts}/{max_attempts}): {error}");
                    seats[player].rejected(player, &error);
                    self.emit(observer, GameEvent::Rejected { player, error });
                    if attempts >= max_attempts {
                        return Err(GameError::AgentStalled { player, attempts });
                    }
                }
            }
        }
        Ok(())
    }

    fn report(&self, observer: &mut dyn Observer, player: PlayerId, step: RoundStep) {
        match step.play {
            Some(play) => self.emit(observer, GameEvent::Played { play }),
            None => self.emit(observer, GameEvent::Passed { player }),
        }

        let finished_total = self.round.as_ref().map_or(0, |round| round.finishing_order().len());
        let first_position = finished_total - step.finished.len() + 1;
        for (offset, &finisher) in step.finished.iter().enumerate() {
            self.emit(
                observer,
                GameEvent::PlayerFinished {
                    player: finisher,
                    position: first_position + offset,
                },
            );
        }

        if let Some(winner) = step.trick_winner {
            self.emit(observer, GameEvent::TrickWon { player: winner });
        }
    }

    fn emit(&self, observer: &mut dyn Observer, event: GameEvent) {
        observer.on_event(&event, &self.snapshot());
    }

    /// Public view of the whole table.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let round = self.round.as_ref();
        let players = PlayerId::all(self.config.player_count)
            .map(|player| PlayerView {
                player,
                hand_size: round.map_or(0, |r| r.hand(player).len()),
                score: self.scores.score(player),
                rank: self.ranks[player],
                finished: round.is_some_and(|r| r.finishing_order().contains(&player)),
            })
            .collect();

        Snapshot {
            round: self.round_number,
            trick: self
                .active_round()
                .map(|r| TrickView::of(r.trick(), r.trick_number())),
            finishing_order: round
                .map(|r| r.finishing_order().iter().copied().collect())
                .unwrap_or_default(),
            players,
            game_over: self.finished,
        }
    }
}

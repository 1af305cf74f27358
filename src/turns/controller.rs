//! The turn controller: applies events to a game state.
//!
//! ## Phases
//!
//! ```text
//! Waiting --StartTurn--> Playing --Tick (clock hits 0)--> TurnEnd --NextTurn--> Waiting
//!                           |
//!                           +--Guessed (queue empty, rounds left)--> Waiting (same explainer)
//!                           +--Guessed (queue empty, last round)---> GameOver
//! ```
//!
//! `HatGame` holds what never changes during a game (config and word pool);
//! `GameState` holds everything that does. `apply` mutates a state in place,
//! `step` returns a new state and leaves its input alone.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::event::{GameEvent, Transition};
use super::phase::{TurnPhase, TurnState};
use super::round::{RoundOutcome, RoundState};
use super::view::TurnView;
use crate::core::{EngineConfig, EngineError, GameRng, Team, TeamId, TeamMap};
use crate::scoring::{GameReport, ScoreLedger, TeamTimeBank};
use crate::words::{QueueStatus, WordPool};

/// Mutable state of one game session.
#[derive(Clone, Debug)]
pub struct GameState {
    pub turn: TurnState,
    pub round: RoundState,
    pub ledger: ScoreLedger,
    pub time_bank: TeamTimeBank,
    pub rng: GameRng,
}

impl GameState {
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    #[must_use]
    pub fn current_team(&self) -> TeamId {
        self.turn.current_team
    }

    /// Name of the player explaining for the current team.
    #[must_use]
    pub fn current_player(&self) -> &str {
        self.player_for(self.turn.current_team)
    }

    /// Name of the player who explains on `team`'s next turn.
    #[must_use]
    pub fn player_for(&self, team: TeamId) -> &str {
        let players = &self.ledger.team(team).players;
        &players[self.turn.player_index[team] % players.len()]
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.ledger.team_count()
    }
}

/// Immutable game definition.
#[derive(Clone, Debug)]
pub struct HatGame {
    config: EngineConfig,
    pool: Vec<String>,
}

/// Builder for a game and its initial state.
#[derive(Default)]
pub struct HatGameBuilder {
    config: EngineConfig,
    teams: Vec<Team>,
    words: Vec<String>,
    seed: Option<u64>,
}

impl HatGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Teams in turn order.
    pub fn teams(mut self, teams: impl IntoIterator<Item = Team>) -> Self {
        self.teams = teams.into_iter().collect();
        self
    }

    pub fn words(mut self, pool: WordPool) -> Self {
        self.words = pool.into_words();
        self
    }

    /// Seed for word shuffles. Without one the OS picks.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate inputs and build the game and its first state.
    ///
    /// Fails with `NotConfigured` without building anything when the team
    /// composition or word pool is unusable.
    pub fn build(self) -> Result<(HatGame, GameState), EngineError> {
        self.config.validate()?;

        if self.teams.len() < 2 {
            return Err(EngineError::not_configured(format!(
                "need at least 2 teams, got {}",
                self.teams.len()
            )));
        }
        if self.teams.len() > 255 {
            return Err(EngineError::not_configured("at most 255 teams supported"));
        }
        if let Some(team) = self.teams.iter().find(|t| t.players.is_empty()) {
            return Err(EngineError::not_configured(format!("team {} has no players", team.name)));
        }
        let mut names = FxHashSet::default();
        if let Some(team) = self.teams.iter().find(|t| !names.insert(t.name.as_str())) {
            return Err(EngineError::not_configured(format!("team name {} used twice", team.name)));
        }
        let player_count: usize = self.teams.iter().map(|t| t.players.len()).sum();
        if player_count < self.config.min_players {
            return Err(EngineError::not_configured(format!(
                "need at least {} players, got {player_count}",
                self.config.min_players
            )));
        }
        let mut players = FxHashSet::default();
        if let Some(player) = self
            .teams
            .iter()
            .flat_map(|t| t.players.iter())
            .find(|p| !players.insert(p.as_str()))
        {
            return Err(EngineError::not_configured(format!("player {player} listed twice")));
        }
        if self.words.is_empty() {
            return Err(EngineError::not_configured("word pool is empty"));
        }

        let rng = self.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
        let mut word_rng = rng.for_context("words");
        let team_count = self.teams.len();

        let state = GameState {
            turn: TurnState::new(team_count),
            round: RoundState::start(&self.words, &mut word_rng),
            ledger: ScoreLedger::new(TeamMap::from_vec(self.teams)),
            time_bank: TeamTimeBank::new(team_count, self.config.round_time),
            rng: word_rng,
        };

        info!(
            teams = team_count,
            words = self.words.len(),
            seed = rng.seed(),
            round_time = self.config.round_time,
            "game created"
        );

        let game = HatGame {
            config: self.config,
            pool: self.words,
        };
        Ok((game, state))
    }
}

impl HatGame {
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The full word pool in its original order.
    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Apply one event to `state`.
    ///
    /// Events with no transition in the current phase return
    /// `Transition::Ignored` and leave the state untouched. On error the
    /// state is also untouched.
    pub fn apply(&self, state: &mut GameState, event: GameEvent) -> Result<Transition, EngineError> {
        match (state.turn.phase, event) {
            (TurnPhase::Waiting, GameEvent::StartTurn) => self.start_turn(state),
            (TurnPhase::Playing, GameEvent::Guessed) => self.guessed(state),
            (TurnPhase::Playing, GameEvent::Tick) => Ok(self.tick(state)),
            (TurnPhase::TurnEnd, GameEvent::NextTurn) => Ok(self.next_turn(state)),
            (phase, event) => {
                debug!(?phase, ?event, "event ignored");
                Ok(Transition::Ignored)
            }
        }
    }

    /// Apply one event to a copy of `state`.
    pub fn step(&self, state: &GameState, event: GameEvent) -> Result<(GameState, Transition), EngineError> {
        let mut next = state.clone();
        let transition = self.apply(&mut next, event)?;
        Ok((next, transition))
    }

    #[must_use]
    pub fn is_over(&self, state: &GameState) -> bool {
        state.turn.phase == TurnPhase::GameOver
    }

    /// Final results, once the last round is cleared.
    #[must_use]
    pub fn report(&self, state: &GameState) -> Option<GameReport> {
        self.is_over(state).then(|| GameReport::from_ledger(&state.ledger))
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self, state: &GameState) -> TurnView {
        TurnView::new(state, self.pool.len())
    }

    fn start_turn(&self, state: &mut GameState) -> Result<Transition, EngineError> {
        let team = state.turn.current_team;
        let word = state.round.queue().peek()?.to_string();
        let time_left = state.time_bank.time_for(team);

        state.round.queue_mut().reset_cursor();
        state.turn.time_left = time_left;
        state.turn.guessed_this_turn = 0;
        state.turn.phase = TurnPhase::Playing;

        let player = state.current_player().to_string();
        info!(%team, %player, time_left, round = state.round.round().number(), "turn started");

        Ok(Transition::TurnStarted {
            team,
            player,
            time_left,
            word,
        })
    }

    fn guessed(&self, state: &mut GameState) -> Result<Transition, EngineError> {
        let team = state.turn.current_team;
        let word = state.round.queue().peek()?.to_string();
        let status = state.round.queue_mut().remove_current()?;

        let player = state.current_player().to_string();
        state.ledger.record_guess(team, &word, &player, state.round.round());
        state.turn.guessed_this_turn += 1;

        if let QueueStatus::Remaining(remaining) = status {
            return Ok(Transition::WordGuessed { word, remaining });
        }

        let bonus = state.turn.time_left;
        state.ledger.award_bonus(team, bonus);
        state.time_bank.store(team, bonus);

        let cleared = state.round.round();
        match state.round.on_exhausted(&self.pool, &mut state.rng, self.config.last_round()) {
            RoundOutcome::Advanced(next_round) => {
                state.turn.phase = TurnPhase::Waiting;
                info!(%team, bonus, cleared = cleared.number(), "round cleared");
                Ok(Transition::RoundAdvanced {
                    team,
                    word,
                    bonus,
                    next_round,
                })
            }
            RoundOutcome::Complete => {
                state.turn.phase = TurnPhase::GameOver;
                info!(%team, bonus, "game complete");
                Ok(Transition::GameComplete {
                    team,
                    word,
                    bonus,
                    report: GameReport::from_ledger(&state.ledger),
                })
            }
        }
    }

    fn tick(&self, state: &mut GameState) -> Transition {
        state.turn.time_left = state.turn.time_left.saturating_sub(1);
        if state.turn.time_left > 0 {
            return Transition::Ticked {
                time_left: state.turn.time_left,
            };
        }

        let team = state.turn.current_team;
        state.time_bank.store(team, 0);
        state.turn.phase = TurnPhase::TurnEnd;
        info!(%team, guessed = state.turn.guessed_this_turn, "time up");

        Transition::TimeUp {
            team,
            guessed: state.turn.guessed_this_turn,
        }
    }

    fn next_turn(&self, state: &mut GameState) -> Transition {
        let finished = state.turn.current_team;
        let player_count = state.ledger.team(finished).players.len();
        state.turn.rotate_player(finished, player_count);

        let team = finished.next(state.team_count());
        state.turn.current_team = team;
        state.turn.phase = TurnPhase::Waiting;

        let player = state.current_player().to_string();
        debug!(%team, %player, "turn passed");
        Transition::TurnPassed { team, player }
    }
}

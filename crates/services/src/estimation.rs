use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use metric_core::metrics::{self, GuessRating};
use metric_core::model::RoundRecord;
use metric_core::Clock;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("no round is in progress")]
    NotPlaying,
}

//
// ─── CONFIG ───────────────────────────────────────────────────────────────────
//

/// Tunable knobs for an estimation game. Defaults match the classic game:
/// five rounds of ten seconds, dot counts in `[20, 100)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub total_rounds: u32,
    pub round_seconds: u32,
    pub truth_min: i64,
    pub truth_max: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rounds: 5,
            round_seconds: 10,
            truth_min: 20,
            truth_max: 100,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_total_rounds(mut self, total_rounds: u32) -> Self {
        self.total_rounds = total_rounds.max(1);
        self
    }

    #[must_use]
    pub fn with_round_seconds(mut self, round_seconds: u32) -> Self {
        self.round_seconds = round_seconds.max(1);
        self
    }
}

//
// ─── DOT FIELD ────────────────────────────────────────────────────────────────
//

/// Number of entries in the UI dot palette `color_index` points into.
pub const DOT_COLOR_COUNT: usize = 7;

/// Canvas dimensions the marker coordinates are scattered over.
pub const DOT_CANVAS_SIZE: u32 = 300;

/// One scattered dot. Position and size are pixel offsets into the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotMarker {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub color_index: usize,
}

/// The scatter of dots shown for one round. Generated once when the round
/// starts and held stable until the next round; the marker count always
/// equals the round's ground truth.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DotField {
    markers: Vec<DotMarker>,
}

impl DotField {
    #[must_use]
    pub fn generate(count: i64, rng: &mut impl Rng) -> Self {
        let count = usize::try_from(count).unwrap_or(0);
        let markers = (0..count)
            .map(|_| DotMarker {
                x: rng.random_range(10..DOT_CANVAS_SIZE - 10),
                y: rng.random_range(10..DOT_CANVAS_SIZE - 10),
                size: rng.random_range(5..15),
                color_index: rng.random_range(0..DOT_COLOR_COUNT),
            })
            .collect();
        Self { markers }
    }

    #[must_use]
    pub fn markers(&self) -> &[DotMarker] {
        &self.markers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

//
// ─── OUTCOMES ─────────────────────────────────────────────────────────────────
//

/// What completing a round led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    NextRound,
    Finished,
}

/// What a one-second tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick arrived outside an active round; nothing changed.
    Ignored,
    /// One second consumed, round still running.
    Counted,
    /// Timer exhausted but the player has typed something; the round waits
    /// for a manual submit.
    AwaitingInput,
    /// Timer hit zero with nothing typed; a zero guess was recorded.
    AutoSubmitted(RoundOutcome),
}

//
// ─── INPUT PARSING ────────────────────────────────────────────────────────────
//

/// Permissive guess parsing: empty or non-numeric input coerces to 0.
#[must_use]
pub fn parse_guess(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

//
// ─── RESULTS ──────────────────────────────────────────────────────────────────
//

/// One line of the final results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResultRow {
    pub round: u32,
    pub guess: i64,
    pub actual: i64,
    pub error: i64,
    pub squared_error: i64,
}

/// Full per-round breakdown plus the aggregate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResults {
    pub rows: Vec<GameResultRow>,
    pub mean_squared_error: f64,
    pub rmse: f64,
    pub rating: GuessRating,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Phase of an estimation game session. `Welcome` is initial; `Results` is
/// terminal until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Welcome,
    Playing,
    Results,
}

/// In-memory estimation game: a fixed number of timed rounds where the
/// player guesses how many dots were shown, scored by RMSE at the end.
///
/// The session holds no timer of its own; the shell drives it by calling
/// `tick` once per elapsed second and `submit_guess` on player input.
#[derive(Debug, Clone)]
pub struct GameSession {
    clock: Clock,
    config: GameConfig,
    phase: GamePhase,
    current_round: u32,
    time_left: u32,
    current_truth: i64,
    records: Vec<RoundRecord>,
    dots: DotField,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl GameSession {
    #[must_use]
    pub fn new(clock: Clock, config: GameConfig) -> Self {
        Self {
            clock,
            config,
            phase: GamePhase::Welcome,
            current_round: 1,
            time_left: config.round_seconds,
            current_truth: 0,
            records: Vec::new(),
            dots: DotField::default(),
            started_at: None,
            completed_at: None,
        }
    }

    /// Starts a fresh game. Also serves as restart from the results screen:
    /// all per-game state is rebuilt wholesale.
    pub fn start(&mut self, rng: &mut impl Rng) {
        self.phase = GamePhase::Playing;
        self.current_round = 1;
        self.records.clear();
        self.time_left = self.config.round_seconds;
        self.started_at = Some(self.clock.now());
        self.completed_at = None;
        self.begin_round(rng);
    }

    fn begin_round(&mut self, rng: &mut impl Rng) {
        self.current_truth = rng.random_range(self.config.truth_min..self.config.truth_max);
        self.dots = DotField::generate(self.current_truth, rng);
        self.time_left = self.config.round_seconds;
    }

    /// Consumes one second of the round timer.
    ///
    /// `has_pending_input` reports whether the player has typed anything in
    /// the guess box; the timer only auto-submits a zero guess when the box
    /// is empty. Auto-submit happens at most once per round because it
    /// either resets the timer for the next round or ends the game.
    pub fn tick(&mut self, has_pending_input: bool, rng: &mut impl Rng) -> TickOutcome {
        if self.phase != GamePhase::Playing {
            return TickOutcome::Ignored;
        }
        if self.time_left > 0 {
            self.time_left -= 1;
        }
        if self.time_left > 0 {
            return TickOutcome::Counted;
        }
        if has_pending_input {
            return TickOutcome::AwaitingInput;
        }
        TickOutcome::AutoSubmitted(self.complete_round(0, rng))
    }

    /// Records the player's guess for the current round.
    ///
    /// Empty or non-numeric input coerces to a guess of 0; that permissive
    /// contract is deliberate.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotPlaying` when no round is in progress.
    pub fn submit_guess(
        &mut self,
        raw: &str,
        rng: &mut impl Rng,
    ) -> Result<RoundOutcome, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::NotPlaying);
        }
        Ok(self.complete_round(parse_guess(raw), rng))
    }

    fn complete_round(&mut self, guess: i64, rng: &mut impl Rng) -> RoundOutcome {
        self.records
            .push(RoundRecord::new(guess, self.current_truth));
        if self.current_round >= self.config.total_rounds {
            self.phase = GamePhase::Results;
            self.completed_at = Some(self.clock.now());
            RoundOutcome::Finished
        } else {
            self.current_round += 1;
            self.begin_round(rng);
            RoundOutcome::NextRound
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.config.total_rounds
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn current_truth(&self) -> i64 {
        self.current_truth
    }

    #[must_use]
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    #[must_use]
    pub fn dots(&self) -> &DotField {
        &self.dots
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// RMSE over the rounds recorded so far, rounded for display.
    #[must_use]
    pub fn rmse(&self) -> f64 {
        let pairs: Vec<(f64, f64)> = self.records.iter().map(|r| r.as_pair()).collect();
        metrics::round2(metrics::rmse(&pairs))
    }

    /// Full breakdown once the game has finished; `None` before then.
    #[must_use]
    pub fn results(&self) -> Option<GameResults> {
        if self.phase != GamePhase::Results {
            return None;
        }
        let rows = self
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| GameResultRow {
                round: index as u32 + 1,
                guess: record.guess,
                actual: record.actual,
                error: record.error(),
                squared_error: record.squared_error(),
            })
            .collect();
        let pairs: Vec<(f64, f64)> = self.records.iter().map(|r| r.as_pair()).collect();
        let rmse = metrics::round2(metrics::rmse(&pairs));
        Some(GameResults {
            rows,
            mean_squared_error: metrics::round2(metrics::mean_squared_error(&pairs)),
            rmse,
            rating: GuessRating::from_rmse(rmse),
        })
    }

    /// Serializable view of everything the shell needs to render.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            current_round: self.current_round,
            total_rounds: self.config.total_rounds,
            time_left: self.time_left,
            dots: self.dots.clone(),
            records: self.records.clone(),
            results: self.results(),
        }
    }
}

/// Stable observable state of a game session; the shell renders from this
/// shape and never reaches into the session internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub current_round: u32,
    pub total_rounds: u32,
    pub time_left: u32,
    pub dots: DotField,
    pub records: Vec<RoundRecord>,
    pub results: Option<GameResults>,
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

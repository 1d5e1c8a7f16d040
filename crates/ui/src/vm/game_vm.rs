use services::{DotMarker, GameError, GamePhase, GameResults, GameSession, RoundOutcome, TickOutcome};

/// Events the game view can dispatch. `Restart` from the results screen is
/// the same wholesale reset as `Start`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameIntent {
    Start,
    Submit,
    Restart,
}

/// Wraps a `GameSession` for the view, injecting the thread RNG so the view
/// code never touches randomness directly.
pub struct GameVm {
    session: GameSession,
}

impl GameVm {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    pub fn start(&mut self) {
        let mut rng = rand::rng();
        self.session.start(&mut rng);
    }

    pub fn tick(&mut self, has_pending_input: bool) -> TickOutcome {
        let mut rng = rand::rng();
        self.session.tick(has_pending_input, &mut rng)
    }

    /// # Errors
    ///
    /// Returns `GameError::NotPlaying` when no round is in progress.
    pub fn submit(&mut self, raw: &str) -> Result<RoundOutcome, GameError> {
        let mut rng = rand::rng();
        self.session.submit_guess(raw, &mut rng)
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.session.current_round()
    }

    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.session.total_rounds()
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.session.time_left()
    }

    #[must_use]
    pub fn round_seconds(&self) -> u32 {
        self.session.config().round_seconds
    }

    #[must_use]
    pub fn dots(&self) -> &[DotMarker] {
        self.session.dots().markers()
    }

    #[must_use]
    pub fn results(&self) -> Option<GameResults> {
        self.session.results()
    }
}

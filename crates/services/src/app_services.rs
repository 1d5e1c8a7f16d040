use metric_core::Clock;

use crate::estimation::{GameConfig, GameSession};
use crate::tutorial::TutorialSession;

/// Assembles the app-facing services. Sessions are created fresh each time
/// a view mounts; nothing outlives a visit, matching the no-persistence
/// design of the app.
#[derive(Debug, Clone)]
pub struct AppServices {
    clock: Clock,
    game_config: GameConfig,
}

impl AppServices {
    #[must_use]
    pub fn new(clock: Clock, game_config: GameConfig) -> Self {
        Self { clock, game_config }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        self.game_config
    }

    /// A fresh estimation game in its welcome phase.
    #[must_use]
    pub fn new_game(&self) -> GameSession {
        GameSession::new(self.clock, self.game_config)
    }

    /// A fresh RMSE walkthrough at the intro section.
    #[must_use]
    pub fn new_tutorial(&self) -> TutorialSession {
        TutorialSession::new()
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new(Clock::default_clock(), GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::GamePhase;
    use metric_core::time::fixed_clock;

    #[test]
    fn sessions_start_in_their_initial_states() {
        let services = AppServices::new(fixed_clock(), GameConfig::default());
        assert_eq!(services.new_game().phase(), GamePhase::Welcome);
        assert_eq!(services.new_tutorial().dataset().len(), 3);
    }

    #[test]
    fn game_config_is_threaded_through() {
        let config = GameConfig::default().with_total_rounds(7);
        let services = AppServices::new(fixed_clock(), config);
        assert_eq!(services.new_game().total_rounds(), 7);
    }
}

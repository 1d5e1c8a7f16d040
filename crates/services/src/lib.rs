#![forbid(unsafe_code)]

pub mod app_services;
pub mod estimation;
pub mod tutorial;

pub use metric_core::Clock;

pub use app_services::AppServices;
pub use estimation::{
    DOT_CANVAS_SIZE, DOT_COLOR_COUNT, DotField, DotMarker, GameConfig, GameError, GamePhase,
    GameResultRow, GameResults, GameSession, GameSnapshot, RoundOutcome, TickOutcome, parse_guess,
};
pub use tutorial::{
    AdvanceOutcome, CELEBRATION_DELAY_MS, Celebration, TutorialError, TutorialSession,
    TutorialSnapshot,
};

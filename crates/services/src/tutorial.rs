use serde::{Deserialize, Serialize};
use thiserror::Error;

use metric_core::metrics::PredictionRating;
use metric_core::model::{BreakdownRow, Dataset, DatasetError, DatasetField, DatasetRow, TutorialSection};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TutorialError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

//
// ─── CELEBRATION ──────────────────────────────────────────────────────────────
//

/// Delay between arriving at the final section and the celebration banner.
pub const CELEBRATION_DELAY_MS: u64 = 800;

/// Gate for the end-of-walkthrough banner. `Pending` means the shell has a
/// delay running; a stale callback after a reset finds `Idle` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Celebration {
    #[default]
    Idle,
    Pending,
    Shown,
}

/// What `advance_section` did, so the shell knows whether to start the
/// celebration delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceOutcome {
    pub section: TutorialSection,
    pub schedule_celebration: bool,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// The RMSE walkthrough: a linear sequence of revealable sections over a
/// small editable dataset, with all derived numbers recomputed from the
/// dataset on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorialSession {
    dataset: Dataset,
    current_section: TutorialSection,
    celebration: Celebration,
}

impl TutorialSession {
    /// Opens the walkthrough at the intro with the seed dataset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dataset: Dataset::seed(),
            current_section: TutorialSection::Intro,
            celebration: Celebration::Idle,
        }
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn current_section(&self) -> TutorialSection {
        self.current_section
    }

    /// Sections reveal cumulatively: everything up to the current one stays
    /// on screen.
    #[must_use]
    pub fn is_revealed(&self, section: TutorialSection) -> bool {
        section.index() <= self.current_section.index()
    }

    #[must_use]
    pub fn celebration(&self) -> Celebration {
        self.celebration
    }

    /// Edits one cell of the dataset in place.
    ///
    /// # Errors
    ///
    /// Returns `TutorialError::Dataset` when `row` does not exist.
    pub fn update_cell(
        &mut self,
        row: usize,
        field: DatasetField,
        value: f64,
    ) -> Result<(), TutorialError> {
        self.dataset.update(row, field, value)?;
        Ok(())
    }

    /// Appends a `{0, 0}` row to the dataset.
    pub fn add_row(&mut self) {
        self.dataset.add_row();
    }

    /// Moves one section forward, clamped at the last.
    ///
    /// The outcome asks for a celebration exactly once: when the move lands
    /// on the final section and no celebration has been scheduled or shown
    /// yet. Repeat calls at the end change nothing and never stack a second
    /// pending trigger.
    pub fn advance_section(&mut self) -> AdvanceOutcome {
        self.current_section = self.current_section.next();
        let schedule = self.current_section.is_last() && self.celebration == Celebration::Idle;
        if schedule {
            self.celebration = Celebration::Pending;
        }
        AdvanceOutcome {
            section: self.current_section,
            schedule_celebration: schedule,
        }
    }

    /// Fires the delayed celebration. Only a `Pending` celebration becomes
    /// `Shown`; callbacks that outlive a reset are ignored.
    pub fn celebrate(&mut self) {
        if self.celebration == Celebration::Pending {
            self.celebration = Celebration::Shown;
        }
    }

    /// Returns the walkthrough to its initial state. Any delay the shell
    /// still has running must be cancelled alongside this; a callback that
    /// fires anyway is a no-op because the celebration is back to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn rmse(&self) -> f64 {
        self.dataset.rmse()
    }

    #[must_use]
    pub fn breakdown(&self) -> Vec<BreakdownRow> {
        self.dataset.breakdown()
    }

    #[must_use]
    pub fn rating(&self) -> PredictionRating {
        self.dataset.rating()
    }

    /// Serializable view of everything the shell needs to render.
    #[must_use]
    pub fn snapshot(&self) -> TutorialSnapshot {
        TutorialSnapshot {
            rows: self.dataset.rows().to_vec(),
            breakdown: self.breakdown(),
            rmse: self.rmse(),
            rating: self.rating(),
            current_section: self.current_section,
            celebration: self.celebration,
        }
    }
}

impl Default for TutorialSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable observable state of the walkthrough for the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialSnapshot {
    pub rows: Vec<DatasetRow>,
    pub breakdown: Vec<BreakdownRow>,
    pub rmse: f64,
    pub rating: PredictionRating,
    pub current_section: TutorialSection,
    pub celebration: Celebration,
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

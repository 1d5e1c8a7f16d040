use metric_core::metrics::PredictionRating;
use metric_core::model::{BreakdownRow, DatasetField, DatasetRow, TutorialSection};
use services::{AdvanceOutcome, Celebration, TutorialSession};

/// Events the walkthrough view can dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum TutorialIntent {
    Advance,
    AddRow,
    Edit {
        row: usize,
        field: DatasetField,
        raw: String,
    },
}

/// One bar of the squared-error chart, with a CSS-ready height.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub height_percent: f64,
}

/// Wraps a `TutorialSession` for the walkthrough view.
pub struct TutorialVm {
    session: TutorialSession,
}

impl TutorialVm {
    #[must_use]
    pub fn new(session: TutorialSession) -> Self {
        Self { session }
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        self.session.advance_section()
    }

    pub fn add_row(&mut self) {
        self.session.add_row();
    }

    /// Applies a cell edit. Non-numeric input is rejected here at the input
    /// surface; the engine below only ever sees parsed numbers.
    pub fn edit(&mut self, row: usize, field: DatasetField, raw: &str) {
        let Ok(value) = raw.trim().parse::<f64>() else {
            return;
        };
        // The row index comes from rendering this same dataset, so a miss
        // means the edit raced a reset; dropping it is correct.
        let _ = self.session.update_cell(row, field, value);
    }

    pub fn celebrate(&mut self) {
        self.session.celebrate();
    }

    #[must_use]
    pub fn rows(&self) -> &[DatasetRow] {
        self.session.dataset().rows()
    }

    #[must_use]
    pub fn breakdown(&self) -> Vec<BreakdownRow> {
        self.session.breakdown()
    }

    #[must_use]
    pub fn rmse(&self) -> f64 {
        self.session.rmse()
    }

    #[must_use]
    pub fn rating(&self) -> PredictionRating {
        self.session.rating()
    }

    #[must_use]
    pub fn current_section(&self) -> TutorialSection {
        self.session.current_section()
    }

    #[must_use]
    pub fn is_revealed(&self, section: TutorialSection) -> bool {
        self.session.is_revealed(section)
    }

    #[must_use]
    pub fn celebration_shown(&self) -> bool {
        self.session.celebration() == Celebration::Shown
    }

    /// Squared-error bars scaled so the tallest fills the chart.
    #[must_use]
    pub fn chart_bars(&self) -> Vec<ChartBar> {
        let breakdown = self.session.breakdown();
        let max = breakdown
            .iter()
            .map(|row| row.squared_error)
            .fold(0.0_f64, f64::max);
        breakdown
            .iter()
            .map(|row| ChartBar {
                label: format!("{}", row.actual),
                value: row.squared_error,
                height_percent: if max > 0.0 {
                    row.squared_error / max * 100.0
                } else {
                    0.0
                },
            })
            .collect()
    }
}

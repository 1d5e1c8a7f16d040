use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::{self, PredictionRating};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("row index {index} out of bounds (dataset has {len} rows)")]
    RowOutOfBounds { index: usize, len: usize },
}

//
// ─── ROWS ─────────────────────────────────────────────────────────────────────
//

/// One editable actual/predicted pair in the tutorial dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub actual: f64,
    pub predicted: f64,
}

impl DatasetRow {
    #[must_use]
    pub fn new(actual: f64, predicted: f64) -> Self {
        Self { actual, predicted }
    }

    #[must_use]
    pub fn error(self) -> f64 {
        self.predicted - self.actual
    }

    #[must_use]
    pub fn squared_error(self) -> f64 {
        let error = self.error();
        error * error
    }
}

/// Which side of a row an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetField {
    Actual,
    Predicted,
}

/// A row of the derived breakdown table shown in the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub actual: f64,
    pub predicted: f64,
    pub error: f64,
    pub squared_error: f64,
}

//
// ─── DATASET ──────────────────────────────────────────────────────────────────
//

/// Ordered, append-only-growing sequence of actual/predicted rows.
///
/// Derived quantities (per-row errors, RMSE, rating) are recomputed from the
/// current rows on every call, so no stale derived state is observable after
/// an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<DatasetRow>,
}

impl Dataset {
    #[must_use]
    pub fn new(rows: Vec<DatasetRow>) -> Self {
        Self { rows }
    }

    /// The canonical three example rows the walkthrough opens with.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(vec![
            DatasetRow::new(3.0, 2.5),
            DatasetRow::new(4.0, 4.2),
            DatasetRow::new(5.0, 5.1),
        ])
    }

    #[must_use]
    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a fresh `{0, 0}` row. Rows are never removed.
    pub fn add_row(&mut self) {
        self.rows.push(DatasetRow::new(0.0, 0.0));
    }

    /// Overwrites one field of an existing row in place.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::RowOutOfBounds` when `index` does not name an
    /// existing row.
    pub fn update(
        &mut self,
        index: usize,
        field: DatasetField,
        value: f64,
    ) -> Result<(), DatasetError> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(DatasetError::RowOutOfBounds { index, len })?;
        match field {
            DatasetField::Actual => row.actual = value,
            DatasetField::Predicted => row.predicted = value,
        }
        Ok(())
    }

    #[must_use]
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|row| (row.actual, row.predicted))
            .collect()
    }

    #[must_use]
    pub fn rmse(&self) -> f64 {
        metrics::rmse(&self.pairs())
    }

    #[must_use]
    pub fn mean_squared_error(&self) -> f64 {
        metrics::mean_squared_error(&self.pairs())
    }

    #[must_use]
    pub fn breakdown(&self) -> Vec<BreakdownRow> {
        self.rows
            .iter()
            .map(|row| BreakdownRow {
                actual: row.actual,
                predicted: row.predicted,
                error: row.error(),
                squared_error: row.squared_error(),
            })
            .collect()
    }

    #[must_use]
    pub fn actuals(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.actual).collect()
    }

    #[must_use]
    pub fn rating(&self) -> PredictionRating {
        PredictionRating::rate(self.rmse(), &self.actuals())
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::seed()
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_dataset_breakdown_matches_hand_computation() {
        let dataset = Dataset::seed();
        let breakdown = dataset.breakdown();
        let errors: Vec<f64> = breakdown.iter().map(|row| row.error).collect();
        for (got, want) in errors.iter().zip([-0.5, 0.2, 0.1]) {
            assert!((got - want).abs() < 1e-9, "error {got} != {want}");
        }
        let squared: Vec<f64> = breakdown.iter().map(|row| row.squared_error).collect();
        for (got, want) in squared.iter().zip([0.25, 0.04, 0.01]) {
            assert!((got - want).abs() < 1e-9, "squared {got} != {want}");
        }
        assert!((dataset.mean_squared_error() - 0.1).abs() < 1e-9);
        assert!((dataset.rmse() - 0.316_227_766).abs() < 1e-6);
    }

    #[test]
    fn add_row_appends_without_touching_existing_rows() {
        let mut dataset = Dataset::seed();
        let before = dataset.rows().to_vec();
        dataset.add_row();
        assert_eq!(dataset.len(), before.len() + 1);
        assert_eq!(&dataset.rows()[..before.len()], before.as_slice());
        assert_eq!(*dataset.rows().last().unwrap(), DatasetRow::new(0.0, 0.0));
    }

    #[test]
    fn update_edits_one_field_in_place() {
        let mut dataset = Dataset::seed();
        dataset.update(1, DatasetField::Predicted, 9.5).unwrap();
        assert_eq!(dataset.rows()[1], DatasetRow::new(4.0, 9.5));
        dataset.update(1, DatasetField::Actual, 10.0).unwrap();
        assert_eq!(dataset.rows()[1], DatasetRow::new(10.0, 9.5));
    }

    #[test]
    fn update_out_of_bounds_is_an_error() {
        let mut dataset = Dataset::seed();
        let err = dataset.update(3, DatasetField::Actual, 1.0).unwrap_err();
        assert_eq!(err, DatasetError::RowOutOfBounds { index: 3, len: 3 });
    }

    #[test]
    fn derived_values_follow_edits_immediately() {
        let mut dataset = Dataset::seed();
        dataset.update(0, DatasetField::Predicted, 3.0).unwrap();
        dataset.update(1, DatasetField::Predicted, 4.0).unwrap();
        dataset.update(2, DatasetField::Predicted, 5.0).unwrap();
        assert_eq!(dataset.rmse(), 0.0);
        assert_eq!(dataset.rating(), PredictionRating::Excellent);
    }
}

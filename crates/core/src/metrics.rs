use serde::{Deserialize, Serialize};

//
// ─── RMSE ─────────────────────────────────────────────────────────────────────
//

/// Mean of squared `(predicted - actual)` differences; 0.0 for an empty slice.
#[must_use]
pub fn mean_squared_error(pairs: &[(f64, f64)]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }
    let sum: f64 = pairs
        .iter()
        .map(|(actual, predicted)| {
            let error = predicted - actual;
            error * error
        })
        .sum();
    sum / pairs.len() as f64
}

/// Root mean squared error over `(actual, predicted)` pairs.
///
/// This is the single definition shared by the estimation game and the
/// tutorial; both breakdown tables and both score displays go through it.
#[must_use]
pub fn rmse(pairs: &[(f64, f64)]) -> f64 {
    mean_squared_error(pairs).sqrt()
}

/// Rounds to two decimal places for display.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//
// ─── GUESS RATING (ESTIMATION GAME) ───────────────────────────────────────────
//

/// Qualitative verdict on a finished estimation game, keyed off the RMSE of
/// the player's guesses against the dot counts they saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessRating {
    Excellent,
    Good,
    KeepPracticing,
}

impl GuessRating {
    /// Bands: RMSE below 10 is excellent, below 20 is good.
    #[must_use]
    pub fn from_rmse(rmse: f64) -> Self {
        if rmse < 10.0 {
            Self::Excellent
        } else if rmse < 20.0 {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Good => "Good job!",
            Self::KeepPracticing => "Keep practicing!",
        }
    }
}

//
// ─── PREDICTION RATING (TUTORIAL) ─────────────────────────────────────────────
//

/// Four-band verdict on a prediction dataset, based on RMSE as a percentage
/// of the spread of actual values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl PredictionRating {
    /// Rates `rmse` against the spread of `actuals`.
    ///
    /// When all actual values are equal the percentage is undefined; the
    /// deterministic fallback is `Excellent` for an exact fit (rmse == 0)
    /// and `Poor` otherwise, so no NaN ever reaches the UI.
    #[must_use]
    pub fn rate(rmse: f64, actuals: &[f64]) -> Self {
        match normalized_percent(rmse, actuals) {
            Some(percent) => Self::from_percent(percent),
            None if rmse == 0.0 => Self::Excellent,
            None => Self::Poor,
        }
    }

    /// Bands: `<10%` excellent, `<20%` good, `<30%` fair, else poor.
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent < 10.0 {
            Self::Excellent
        } else if percent < 20.0 {
            Self::Good
        } else if percent < 30.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent 👍",
            Self::Good => "Good 😀",
            Self::Fair => "Fair 🤔",
            Self::Poor => "Poor 😢",
        }
    }

    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            Self::Excellent => "Your predictions are very close to real values. Great job!",
            Self::Good => "Pretty good, some predictions need tuning.",
            Self::Fair => "Some predictions are off. Let's improve them!",
            Self::Poor => "Big errors found. Maybe we missed something important!",
        }
    }
}

/// RMSE as a percentage of the actual-value spread, or `None` when the
/// spread is zero (empty dataset or all actuals equal).
#[must_use]
pub fn normalized_percent(rmse: f64, actuals: &[f64]) -> Option<f64> {
    let max = actuals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = actuals.iter().copied().fold(f64::INFINITY, f64::min);
    let range = max - min;
    if actuals.is_empty() || range == 0.0 {
        None
    } else {
        Some(rmse / range * 100.0)
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//

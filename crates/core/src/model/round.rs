use serde::{Deserialize, Serialize};

/// One completed round of the estimation game: the player's guess against
/// the dot count that was actually shown. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub guess: i64,
    pub actual: i64,
}

impl RoundRecord {
    #[must_use]
    pub fn new(guess: i64, actual: i64) -> Self {
        Self { guess, actual }
    }

    #[must_use]
    pub fn error(self) -> i64 {
        self.guess - self.actual
    }

    #[must_use]
    pub fn squared_error(self) -> i64 {
        let error = self.error();
        error * error
    }

    /// `(actual, predicted)` pair for the shared RMSE function.
    #[must_use]
    pub fn as_pair(self) -> (f64, f64) {
        (self.actual as f64, self.guess as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_signed_guess_minus_actual() {
        let record = RoundRecord::new(40, 55);
        assert_eq!(record.error(), -15);
        assert_eq!(record.squared_error(), 225);
    }

    #[test]
    fn pair_puts_actual_first() {
        assert_eq!(RoundRecord::new(3, 7).as_pair(), (7.0, 3.0));
    }
}

/// Game-facing RMSE display, two decimal places.
#[must_use]
pub fn format_rmse2(value: f64) -> String {
    format!("{value:.2}")
}

/// Tutorial score display, three decimal places.
#[must_use]
pub fn format_rmse3(value: f64) -> String {
    format!("{value:.3}")
}

/// Signed error with two decimals, keeping the minus sign visible.
#[must_use]
pub fn format_signed(value: f64) -> String {
    format!("{value:.2}")
}

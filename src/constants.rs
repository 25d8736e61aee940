/// Deliveries in a standard over
pub const DEFAULT_BALLS_PER_OVER: i64 = 6;

/// Scorecard notation stores the balls of the current over as the first
/// fractional digit, so a remainder is scaled down by this base.
pub const SCORECARD_DIGIT_BASE: f64 = 10.0;

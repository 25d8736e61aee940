use crate::constants::SCORECARD_DIGIT_BASE;
use crate::overs::Overs;

/// Convert scorecard notation to a count of balls.
///
/// The digits after the point are added as a literal number of balls, so
/// with six balls per over `10.3` is `10 * 6 + 3 = 63` rather than
/// `10.3 * 6`.
pub fn overs_to_balls(overs: &Overs, balls_per_over: i64) -> f64 {
    let per_over = balls_per_over as f64;
    match overs.balls() {
        None => overs.value() * per_over,
        Some(balls) => overs.whole() * per_over + balls,
    }
}

/// Convert a count of balls back to scorecard notation.
///
/// The remainder is written as a single fractional digit, which only
/// reconstructs the notation faithfully while `balls_per_over <= 9`. A larger
/// over overflows the digit (twelve balls per over, 23 balls gives `2.1`
/// instead of one over and eleven balls).
///
/// # Returns
/// Whole overs plus `remainder / 10`, e.g. 63 balls of six is `10.3`
pub fn balls_to_overs(balls: f64, balls_per_over: i64) -> f64 {
    let per_over = balls_per_over as f64;
    let remainder = balls % per_over;
    if remainder == 0.0 {
        return balls / per_over;
    }
    (balls / per_over).floor() + remainder / SCORECARD_DIGIT_BASE
}

/// Balls expressed as a true fraction of overs, e.g. 20 balls of six is
/// 3.333 overs where scorecard notation would say `3.2`.
pub fn balls_to_decimal_overs(balls: f64, balls_per_over: i64) -> f64 {
    balls / balls_per_over as f64
}

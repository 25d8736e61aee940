use tracing::warn;

use crate::constants::DEFAULT_BALLS_PER_OVER;
use crate::conversion::{balls_to_decimal_overs, balls_to_overs, overs_to_balls};
use crate::error::Result;
use crate::overs::{Overs, OversInput};
use crate::stats;

/// Conversions and statistics for a fixed over length.
///
/// The over length is the only state. It is not range checked: zero or a
/// negative count is stored as given and every conversion then divides by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatsConverter {
    balls_per_over: i64,
}

impl Default for StatsConverter {
    fn default() -> Self {
        StatsConverter::new(DEFAULT_BALLS_PER_OVER)
    }
}

impl StatsConverter {
    pub fn new(balls_per_over: i64) -> Self {
        warn_if_not_positive(balls_per_over);
        StatsConverter { balls_per_over }
    }

    pub fn balls_per_over(&self) -> i64 {
        self.balls_per_over
    }

    pub fn set_balls_per_over(&mut self, balls_per_over: i64) {
        warn_if_not_positive(balls_per_over);
        self.balls_per_over = balls_per_over;
    }

    /// Convert scorecard notation (`10`, `10.3`, `"10.3"`) to balls.
    pub fn convert_overs_to_balls(&self, overs: impl Into<OversInput>) -> Result<f64> {
        let overs = Overs::try_from(overs.into())?;
        Ok(overs_to_balls(&overs, self.balls_per_over))
    }

    /// Convert balls to scorecard notation, e.g. 63 balls is `10.3`.
    pub fn convert_balls_to_overs(&self, balls: f64) -> f64 {
        balls_to_overs(balls, self.balls_per_over)
    }

    /// Convert balls to true decimal overs, e.g. 63 balls is `10.5`.
    pub fn convert_balls_to_decimal_overs(&self, balls: f64) -> f64 {
        balls_to_decimal_overs(balls, self.balls_per_over)
    }

    pub fn calculate_batting_average(
        &self,
        runs: i64,
        innings: i64,
        not_outs: i64,
    ) -> Result<Option<f64>> {
        stats::batting_average(runs, innings, not_outs)
    }

    pub fn calculate_bowling_average(&self, runs: i64, wickets: i64) -> Option<f64> {
        stats::bowling_average(runs, wickets)
    }

    /// Runs conceded per true over, `None` when no overs were bowled.
    pub fn calculate_bowling_economy(
        &self,
        overs: impl Into<OversInput>,
        runs: i64,
    ) -> Result<Option<f64>> {
        let overs = Overs::try_from(overs.into())?;
        Ok(stats::bowling_economy(&overs, runs, self.balls_per_over))
    }

    /// Balls bowled per wicket, `None` when no wickets were taken.
    pub fn calculate_bowling_strike_rate(
        &self,
        overs: impl Into<OversInput>,
        wickets: i64,
    ) -> Result<Option<f64>> {
        let overs = Overs::try_from(overs.into())?;
        Ok(stats::bowling_strike_rate(&overs, wickets, self.balls_per_over))
    }
}

fn warn_if_not_positive(balls_per_over: i64) {
    if balls_per_over <= 0 {
        warn!(balls_per_over, "balls per over is not positive, conversions are undefined");
    }
}

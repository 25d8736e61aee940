use tracing::debug;

use crate::conversion::{balls_to_decimal_overs, overs_to_balls};
use crate::error::{Result, StatsError};
use crate::overs::Overs;

/// Calculate a batting average.
///
/// Runs scored per dismissal, where dismissals are innings minus not outs.
///
/// # Returns
/// `Ok(None)` when the batsman has never been dismissed. Fails when
/// `not_outs` exceeds `innings`.
pub fn batting_average(runs: i64, innings: i64, not_outs: i64) -> Result<Option<f64>> {
    if not_outs > innings {
        return Err(StatsError::NotOutsExceedInnings { not_outs, innings });
    }
    let dismissals = innings - not_outs;
    if dismissals == 0 {
        debug!(runs, innings, "batting average undefined without a dismissal");
        return Ok(None);
    }
    Ok(Some(runs as f64 / dismissals as f64))
}

/// Calculate a bowling average: runs conceded per wicket taken.
pub fn bowling_average(runs: i64, wickets: i64) -> Option<f64> {
    if wickets == 0 {
        debug!(runs, "bowling average undefined without a wicket");
        return None;
    }
    Some(runs as f64 / wickets as f64)
}

/// Calculate bowling economy: runs conceded per true over.
///
/// The scorecard figure is converted to balls and then to a real fraction of
/// an over before dividing, so `12.3` overs counts as `12.5`.
pub fn bowling_economy(overs: &Overs, runs: i64, balls_per_over: i64) -> Option<f64> {
    if overs.is_zero() {
        debug!(runs, "bowling economy undefined without an over bowled");
        return None;
    }
    let balls = overs_to_balls(overs, balls_per_over);
    let decimal_overs = balls_to_decimal_overs(balls, balls_per_over);
    Some(runs as f64 / decimal_overs)
}

/// Calculate bowling strike rate: balls bowled per wicket taken.
pub fn bowling_strike_rate(overs: &Overs, wickets: i64, balls_per_over: i64) -> Option<f64> {
    if wickets == 0 {
        debug!(overs = overs.value(), "bowling strike rate undefined without a wicket");
        return None;
    }
    Some(overs_to_balls(overs, balls_per_over) / wickets as f64)
}

//! Cricket Stats - scorecard overs conversion and bowling/batting statistics.
//!
//! Overs are written in scorecard notation (`10.3` is ten overs and three
//! balls), which is not a decimal fraction. This library converts between that
//! notation and ball counts, and computes the averages and rates built on it.
//! Statistics with a zero denominator come back as `None`, never as `0` or
//! `NaN`. Python bindings via PyO3 are available behind the `python` feature.

pub mod constants;
pub mod conversion;
pub mod converter;
pub mod error;
pub mod overs;
#[cfg(feature = "python")]
mod python;
pub mod stats;

pub use constants::{DEFAULT_BALLS_PER_OVER, SCORECARD_DIGIT_BASE};
pub use conversion::{balls_to_decimal_overs, balls_to_overs, overs_to_balls};
pub use converter::StatsConverter;
pub use error::{Result, StatsError};
pub use overs::{Overs, OversInput};
pub use stats::{batting_average, bowling_average, bowling_economy, bowling_strike_rate};

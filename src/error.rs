use thiserror::Error;

/// Malformed arguments passed by the caller.
///
/// A statistic with a zero denominator (no dismissals, no wickets, no overs)
/// is not an error; those resolve to `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("overs must be an integer, float or numeric string, got {0:?}")]
    NotNumeric(String),

    #[error("{name} must be a whole number")]
    NotWholeNumber { name: &'static str },

    #[error("not outs ({not_outs}) may not be greater than innings ({innings})")]
    NotOutsExceedInnings { not_outs: i64, innings: i64 },
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(feature = "python")]
impl From<StatsError> for pyo3::PyErr {
    fn from(err: StatsError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

use pyo3::prelude::*;
use pyo3::types::{PyBool, PyFloat};

use crate::constants::DEFAULT_BALLS_PER_OVER;
use crate::converter::StatsConverter;
use crate::error::StatsError;
use crate::overs::OversInput;

/// Extract an integer argument, rejecting `float` and `bool` even when they
/// hold a whole value.
fn whole_number(value: &Bound<'_, PyAny>, name: &'static str) -> PyResult<i64> {
    if value.is_instance_of::<PyBool>() || value.is_instance_of::<PyFloat>() {
        return Err(StatsError::NotWholeNumber { name }.into());
    }
    value
        .extract()
        .map_err(|_| StatsError::NotWholeNumber { name }.into())
}

/// Python-facing wrapper around `StatsConverter`.
#[pyclass(name = "StatsConverter")]
#[derive(Clone, Debug)]
pub struct PyStatsConverter {
    inner: StatsConverter,
}

#[pymethods]
impl PyStatsConverter {
    #[new]
    #[pyo3(signature = (balls_per_over = None))]
    fn new(balls_per_over: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let balls_per_over = match balls_per_over {
            Some(value) => whole_number(value, "balls_per_over")?,
            None => DEFAULT_BALLS_PER_OVER,
        };
        Ok(PyStatsConverter {
            inner: StatsConverter::new(balls_per_over),
        })
    }

    #[getter(balls_per_over)]
    fn balls_per_over_prop(&self) -> i64 {
        self.inner.balls_per_over()
    }

    #[setter(balls_per_over)]
    fn set_balls_per_over_prop(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        self.set_balls_per_over(value)
    }

    fn get_balls_per_over(&self) -> i64 {
        self.inner.balls_per_over()
    }

    fn set_balls_per_over(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let balls_per_over = whole_number(value, "balls_per_over")?;
        self.inner.set_balls_per_over(balls_per_over);
        Ok(())
    }

    fn convert_overs_to_balls(&self, overs: OversInput) -> PyResult<f64> {
        Ok(self.inner.convert_overs_to_balls(overs)?)
    }

    fn convert_balls_to_overs(&self, balls: f64) -> f64 {
        self.inner.convert_balls_to_overs(balls)
    }

    fn convert_balls_to_decimal_overs(&self, balls: f64) -> f64 {
        self.inner.convert_balls_to_decimal_overs(balls)
    }

    fn calculate_batting_average(
        &self,
        runs: &Bound<'_, PyAny>,
        innings: &Bound<'_, PyAny>,
        not_outs: &Bound<'_, PyAny>,
    ) -> PyResult<Option<f64>> {
        let runs = whole_number(runs, "runs")?;
        let innings = whole_number(innings, "innings")?;
        let not_outs = whole_number(not_outs, "not_outs")?;
        Ok(self.inner.calculate_batting_average(runs, innings, not_outs)?)
    }

    fn calculate_bowling_average(
        &self,
        runs: &Bound<'_, PyAny>,
        wickets: &Bound<'_, PyAny>,
    ) -> PyResult<Option<f64>> {
        let runs = whole_number(runs, "runs")?;
        let wickets = whole_number(wickets, "wickets")?;
        Ok(self.inner.calculate_bowling_average(runs, wickets))
    }

    fn calculate_bowling_economy(
        &self,
        overs: OversInput,
        runs: &Bound<'_, PyAny>,
    ) -> PyResult<Option<f64>> {
        let runs = whole_number(runs, "runs")?;
        Ok(self.inner.calculate_bowling_economy(overs, runs)?)
    }

    fn calculate_bowling_strike_rate(
        &self,
        overs: OversInput,
        wickets: &Bound<'_, PyAny>,
    ) -> PyResult<Option<f64>> {
        let wickets = whole_number(wickets, "wickets")?;
        Ok(self.inner.calculate_bowling_strike_rate(overs, wickets)?)
    }

    fn __repr__(&self) -> String {
        format!("StatsConverter(balls_per_over={})", self.inner.balls_per_over())
    }
}

/// Python module definition
#[pymodule]
fn cricket_stats(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyStatsConverter>()?;
    m.add("DEFAULT_BALLS_PER_OVER", DEFAULT_BALLS_PER_OVER)?;
    Ok(())
}

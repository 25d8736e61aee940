use std::str::FromStr;

use crate::error::{Result, StatsError};

/// An overs argument as handed over by the caller, before validation.
#[derive(Clone, Debug, PartialEq)]
pub enum OversInput {
    Integer(i64),
    Float(f64),
    NumericString(String),
}

impl From<i64> for OversInput {
    fn from(value: i64) -> Self {
        OversInput::Integer(value)
    }
}

impl From<i32> for OversInput {
    fn from(value: i32) -> Self {
        OversInput::Integer(i64::from(value))
    }
}

impl From<u32> for OversInput {
    fn from(value: u32) -> Self {
        OversInput::Integer(i64::from(value))
    }
}

impl From<f64> for OversInput {
    fn from(value: f64) -> Self {
        OversInput::Float(value)
    }
}

impl From<&str> for OversInput {
    fn from(value: &str) -> Self {
        OversInput::NumericString(value.to_string())
    }
}

impl From<String> for OversInput {
    fn from(value: String) -> Self {
        OversInput::NumericString(value)
    }
}

#[cfg(feature = "python")]
impl<'py> pyo3::FromPyObject<'py> for OversInput {
    fn extract_bound(ob: &pyo3::Bound<'py, pyo3::PyAny>) -> pyo3::PyResult<Self> {
        use pyo3::prelude::*;
        use pyo3::types::{PyBool, PyFloat, PyLong, PyString};

        // bool subclasses int in Python
        if ob.is_instance_of::<PyBool>() {
            return Err(StatsError::NotNumeric(ob.to_string()).into());
        }
        if ob.is_instance_of::<PyLong>() {
            return Ok(OversInput::Integer(ob.extract()?));
        }
        if ob.is_instance_of::<PyFloat>() {
            return Ok(OversInput::Float(ob.extract()?));
        }
        if ob.is_instance_of::<PyString>() {
            return Ok(OversInput::NumericString(ob.extract()?));
        }
        Err(StatsError::NotNumeric(ob.to_string()).into())
    }
}

/// Overs in scorecard notation, validated and split into its parts.
///
/// `10.3` means ten whole overs plus three balls. The digits after the point
/// are kept as a literal ball count, so `"10.30"` carries thirty balls rather
/// than being read as the same number as `"10.3"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overs {
    whole: f64,
    balls: Option<f64>,
    value: f64,
}

impl Overs {
    pub fn from_integer(value: i64) -> Self {
        Overs {
            whole: value as f64,
            balls: None,
            value: value as f64,
        }
    }

    /// Floats are written out to 14 significant digits before splitting, so
    /// a computed `0.1 + 0.2` reads as `"0.3"` rather than carrying its binary
    /// tail into the ball digits.
    pub fn from_float(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(StatsError::NotNumeric(value.to_string()));
        }
        Ok(Self::split(&float_literal(value), value))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let literal = text.trim();
        let value: f64 = literal
            .parse()
            .map_err(|_| StatsError::NotNumeric(text.to_string()))?;
        if !value.is_finite() {
            return Err(StatsError::NotNumeric(text.to_string()));
        }
        Ok(Self::split(literal, value))
    }

    /// Split an already validated literal on its point. Each side is read as
    /// a number of its own, exponent included, so `"10.3e1"` is ten overs and
    /// thirty balls while `"1e1"` is simply ten overs.
    fn split(literal: &str, value: f64) -> Self {
        match literal.split_once('.') {
            None => Overs {
                whole: value,
                balls: None,
                value,
            },
            Some((whole, digits)) => Overs {
                whole: parse_or_zero(whole),
                balls: Some(parse_or_zero(digits)),
                value,
            },
        }
    }

    /// Whole overs, the part before the point.
    pub fn whole(&self) -> f64 {
        self.whole
    }

    /// Balls of the unfinished over, when the notation has a fractional part.
    pub fn balls(&self) -> Option<f64> {
        self.balls
    }

    /// The plain numeric value of the notation, e.g. `10.3`.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

// Empty or sign-only sides, as in "10." or "-.3"
fn parse_or_zero(part: &str) -> f64 {
    part.parse().unwrap_or(0.0)
}

const FLOAT_SIGNIFICANT_DIGITS: usize = 14;

/// Decimal text of `value` rounded to 14 significant digits with trailing
/// zeros dropped, e.g. `12.299999999999999` becomes `"12.3"`.
fn float_literal(value: f64) -> String {
    let rounded: f64 = format!("{:.*e}", FLOAT_SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value);
    // any decimal of at most 15 significant digits prints back unchanged
    rounded.to_string()
}

impl FromStr for Overs {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Overs::parse(s)
    }
}

impl TryFrom<OversInput> for Overs {
    type Error = StatsError;

    fn try_from(input: OversInput) -> Result<Self> {
        match input {
            OversInput::Integer(value) => Ok(Overs::from_integer(value)),
            OversInput::Float(value) => Overs::from_float(value),
            OversInput::NumericString(text) => Overs::parse(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_has_no_balls() {
        let overs = Overs::try_from(OversInput::from(10)).unwrap();
        assert_eq!(overs.whole(), 10.0);
        assert_eq!(overs.balls(), None);
        assert_eq!(overs.value(), 10.0);
    }

    #[test]
    fn test_float_splits_on_point() {
        let overs = Overs::from_float(10.3).unwrap();
        assert_eq!(overs.whole(), 10.0);
        assert_eq!(overs.balls(), Some(3.0));

        let whole = Overs::from_float(10.0).unwrap();
        assert_eq!(whole.balls(), None, "10.0 prints as 10");
    }

    #[test]
    fn test_string_keeps_digit_sequence() {
        let overs: Overs = "10.30".parse().unwrap();
        assert_eq!(overs.whole(), 10.0);
        assert_eq!(overs.balls(), Some(30.0));
        assert!((overs.value() - 10.3).abs() < 1e-12);
    }

    #[test]
    fn test_string_edge_forms() {
        let trailing_point = Overs::parse("10.").unwrap();
        assert_eq!(trailing_point.whole(), 10.0);
        assert_eq!(trailing_point.balls(), Some(0.0));

        let leading_point = Overs::parse(".3").unwrap();
        assert_eq!(leading_point.whole(), 0.0);
        assert_eq!(leading_point.balls(), Some(3.0));

        let padded = Overs::parse("  +4.2 ").unwrap();
        assert_eq!(padded.whole(), 4.0);
        assert_eq!(padded.balls(), Some(2.0));

        let exponent = Overs::parse("1e1").unwrap();
        assert_eq!(exponent.whole(), 10.0);
        assert_eq!(exponent.balls(), None);

        // split on the point first, then read "3e1" as thirty balls
        let point_and_exponent = Overs::parse("10.3e1").unwrap();
        assert_eq!(point_and_exponent.whole(), 10.0);
        assert_eq!(point_and_exponent.balls(), Some(30.0));
        assert_eq!(point_and_exponent.value(), 103.0);
    }

    #[test]
    fn test_computed_float_drops_binary_tail() {
        let overs = Overs::from_float(0.1 + 0.2).unwrap();
        assert_eq!(overs.whole(), 0.0);
        assert_eq!(overs.balls(), Some(3.0));

        let overs = Overs::from_float(12.0 + 0.3).unwrap();
        assert_eq!(overs.whole(), 12.0);
        assert_eq!(overs.balls(), Some(3.0));

        let overs = Overs::from_float(49.5).unwrap();
        assert_eq!(overs.balls(), Some(5.0));
    }

    #[test]
    fn test_float_literal_precision() {
        assert_eq!(float_literal(0.1 + 0.2), "0.3");
        assert_eq!(float_literal(10.0), "10");
        assert_eq!(float_literal(-2.3), "-2.3");
        assert_eq!(float_literal(7.12345678901239), "7.1234567890124");
    }

    #[test]
    fn test_rejects_non_numeric() {
        for bad in ["", "ten", "1.2.3", "10 overs", "inf", "NaN", "0x1A"] {
            assert!(
                matches!(Overs::parse(bad), Err(StatsError::NotNumeric(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(Overs::from_float(f64::NAN).is_err());
        assert!(Overs::from_float(f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_forms() {
        for zero in ["0", "0.0", "-0", "0."] {
            assert!(Overs::parse(zero).unwrap().is_zero(), "{zero:?} is zero overs");
        }
        assert!(Overs::from_integer(0).is_zero());
        assert!(Overs::from_float(0.0).unwrap().is_zero());
        assert!(!Overs::parse("0.1").unwrap().is_zero());
    }
}

//! Numeric values as reported in the database text.
//!
//! Bounds keep the integer/real distinction of their source token so that
//! `30` renders as `30` and `4.0` renders as `4.0`. Reals whose decimal
//! exponent is below -4 or at least 16 render in exponent form with a signed,
//! at least two-digit exponent (`1e-05`, `1.5e+16`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric token, typed by the presence of a decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Real(f64),
}

impl Number {
    /// Parse a numeric token. Tokens containing `.` are real, others integer.
    /// Integers too large for `i64` fall back to real.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        if token.contains('.') {
            return token.parse::<f64>().ok().map(Self::Real);
        }
        match token.parse::<i64>() {
            Ok(v) => Some(Self::Int(v)),
            Err(_) => token.parse::<f64>().ok().map(Self::Real),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Real(v) => v,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Numeric equality across variants (`2 == 2.0`).
    pub fn same_value(self, other: Self) -> bool {
        self.as_f64() == other.as_f64()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Real(v) if needs_exponent(v) => write_exponent(f, v),
            Self::Real(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Self::Real(v) => write!(f, "{}", v),
        }
    }
}

fn needs_exponent(v: f64) -> bool {
    v.is_finite() && v != 0.0 && !(1e-4..1e16).contains(&v.abs())
}

/// `1.5e-7` becomes `1.5e-07`, `1e16` becomes `1e+16`.
fn write_exponent(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let shortest = format!("{:e}", v);
    let (mantissa, exponent) = shortest.split_once('e').unwrap_or((shortest.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
}

/// A `min[-max]` range. A single reported value has `min == max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    min: Number,
    max: Number,
}

impl NumericRange {
    pub fn new(min: Number, max: Number) -> Self {
        Self { min, max }
    }

    pub fn single(value: Number) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Build a range from a required lower token and an optional upper token.
    pub fn from_tokens(min: &str, max: Option<&str>) -> Option<Self> {
        let min = Number::parse(min)?;
        let max = match max {
            Some(token) => Number::parse(token)?,
            None => min,
        };
        Some(Self::new(min, max))
    }

    pub fn min(&self) -> Number {
        self.min
    }

    pub fn max(&self) -> Number {
        self.max
    }

    /// Arithmetic midpoint of the bounds.
    pub fn mean(&self) -> f64 {
        (self.min.as_f64() + self.max.as_f64()) / 2.0
    }

    pub fn is_single(&self) -> bool {
        self.min.same_value(self.max)
    }

    /// True when the upper bound was reported below the lower bound.
    /// Such ranges are kept as reported.
    pub fn is_reversed(&self) -> bool {
        self.max.as_f64() < self.min.as_f64()
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_typing() {
        assert_eq!(Number::parse("30"), Some(Number::Int(30)));
        assert_eq!(Number::parse("2.5"), Some(Number::Real(2.5)));
        assert_eq!(Number::parse("4."), Some(Number::Real(4.0)));
        assert_eq!(Number::parse(""), None);
        assert_eq!(Number::parse("abc"), None);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(30).to_string(), "30");
        assert_eq!(Number::Real(4.0).to_string(), "4.0");
        assert_eq!(Number::Real(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_extreme_reals_use_exponent_form() {
        assert_eq!(Number::Real(0.00001).to_string(), "1e-05");
        assert_eq!(Number::Real(1.5e-7).to_string(), "1.5e-07");
        assert_eq!(Number::Real(-2.5e-5).to_string(), "-2.5e-05");
        assert_eq!(Number::Real(1e16).to_string(), "1e+16");
        assert_eq!(Number::Real(1.2e123).to_string(), "1.2e+123");
        assert_eq!(Number::parse("0.000012"), Some(Number::Real(1.2e-5)));
        assert_eq!(Number::Real(1.2e-5).to_string(), "1.2e-05");
    }

    #[test]
    fn test_reals_inside_plain_range_stay_positional() {
        assert_eq!(Number::Real(0.0001).to_string(), "0.0001");
        assert_eq!(Number::Real(0.0).to_string(), "0.0");
        assert_eq!(Number::Real(123456.5).to_string(), "123456.5");
        assert_eq!(Number::Real(1e15).to_string(), "1000000000000000.0");
    }

    #[test]
    fn test_range_display_and_mean() {
        let r = NumericRange::from_tokens("2.5", Some("4.0")).unwrap();
        assert_eq!(r.to_string(), "2.5-4.0");
        assert_eq!(r.mean(), 3.25);

        let s = NumericRange::from_tokens("7", None).unwrap();
        assert!(s.is_single());
        assert_eq!(s.to_string(), "7");
        assert_eq!(s.mean(), 7.0);
    }

    #[test]
    fn test_mixed_typing_is_preserved() {
        let r = NumericRange::from_tokens("2", Some("3.5")).unwrap();
        assert!(r.min().is_integer());
        assert!(!r.max().is_integer());
        assert_eq!(r.to_string(), "2-3.5");
    }

    #[test]
    fn test_reversed_range_passes_through() {
        let r = NumericRange::from_tokens("9", Some("3")).unwrap();
        assert!(r.is_reversed());
        assert_eq!(r.mean(), 6.0);
        assert_eq!(r.to_string(), "9-3");
    }
}

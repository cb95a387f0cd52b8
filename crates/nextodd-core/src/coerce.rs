//! Conversion of integer-like values into `i64`.
//!
//! [`Input`] is the typed union of everything the coercing policy accepts,
//! and [`ConvertibleToInteger`] is the single conversion capability shared
//! by primitives, strings, and [`Input`] itself.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// An integer-like value as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Input {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Input {
    /// Classify a raw token the way a literal would be read.
    ///
    /// `"4"` is an integer, `"2.9"` and `"1e3"` are floats, and everything
    /// else (including `"1_000"` and `"nan"`) is kept as text.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Integer(value);
        }

        if trimmed.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(value) = trimmed.parse::<f64>() {
                return Self::Float(value);
            }
        }

        Self::Text(raw.to_string())
    }

    /// Render the value for error messages, quoting text.
    pub fn describe(&self) -> String {
        match self {
            Self::Text(text) => format!("{:?}", text),
            other => other.to_string(),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            // Debug keeps the decimal point on whole floats (`3.0`)
            Self::Float(value) => write!(f, "{:?}", value),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A value that can be turned into an `i64`, or fail with
/// [`Error::InvalidInput`].
pub trait ConvertibleToInteger {
    fn to_integer(&self) -> Result<i64>;
}

macro_rules! impl_convertible_for_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ConvertibleToInteger for $t {
                fn to_integer(&self) -> Result<i64> {
                    i64::try_from(*self).map_err(|_| Error::invalid_input(self.to_string()))
                }
            }
        )+
    };
}

impl_convertible_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ConvertibleToInteger for f64 {
    fn to_integer(&self) -> Result<i64> {
        truncate_float(*self)
    }
}

impl ConvertibleToInteger for f32 {
    fn to_integer(&self) -> Result<i64> {
        truncate_float(f64::from(*self))
    }
}

impl ConvertibleToInteger for str {
    fn to_integer(&self) -> Result<i64> {
        parse_integer(self)
    }
}

impl ConvertibleToInteger for String {
    fn to_integer(&self) -> Result<i64> {
        parse_integer(self)
    }
}

impl ConvertibleToInteger for Input {
    fn to_integer(&self) -> Result<i64> {
        match self {
            Self::Integer(value) => Ok(*value),
            Self::Float(value) => truncate_float(*value),
            Self::Text(text) => parse_integer(text),
        }
    }
}

/// Truncate toward zero. `i64::MIN as f64` is exact while `i64::MAX as f64`
/// rounds up to 2^63, hence the asymmetric bounds.
fn truncate_float(value: f64) -> Result<i64> {
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = i64::MAX as f64;

    if !value.is_finite() {
        return Err(Error::invalid_input(value.to_string()));
    }

    let truncated = value.trunc();
    if !(LOWER..UPPER).contains(&truncated) {
        return Err(Error::invalid_input(value.to_string()));
    }

    Ok(truncated as i64)
}

/// Parse a base-10 integer literal: optional sign, digits, and single
/// underscores between digits. Surrounding whitespace is ignored.
fn parse_integer(raw: &str) -> Result<i64> {
    let invalid = || Error::invalid_input(format!("{:?}", raw));

    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if !is_digit_run(digits) {
        return Err(invalid());
    }

    let mut literal = String::with_capacity(digits.len() + 1);
    if negative {
        literal.push('-');
    }
    literal.extend(digits.chars().filter(|c| *c != '_'));

    literal.parse::<i64>().map_err(|_| invalid())
}

fn is_digit_run(digits: &str) -> bool {
    !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_')
}

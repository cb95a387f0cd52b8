//! Input policies and the checked entry point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::coerce::{ConvertibleToInteger, Input};
use crate::error::{Error, Result};
use crate::parity::NextOdd;

/// How non-integer inputs are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Only integers are accepted; anything else is rejected.
    Strict,
    /// Floats are truncated toward zero and base-10 strings are parsed.
    #[default]
    Coercing,
}

impl Policy {
    /// Compute the next odd number for `input` under this policy.
    pub fn evaluate(self, input: &Input) -> Result<i64> {
        let result = match (self, input) {
            (Self::Coercing, _) => next_odd_checked(input),
            (Self::Strict, Input::Integer(value)) => checked(*value),
            (Self::Strict, other) => Err(Error::NotAnInteger {
                input: other.describe(),
            }),
        };

        match &result {
            Ok(odd) => log::debug!("{} policy: {} -> {}", self, input, odd),
            Err(e) => log::warn!("{} policy rejected {}: {}", self, input.describe(), e),
        }

        result
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Coercing => write!(f, "coercing"),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "coercing" => Ok(Self::Coercing),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Coercing entry point: convert `n` to an integer, then compute the
/// smallest odd integer strictly greater than it.
///
/// ```
/// use nextodd_core::next_odd_checked;
///
/// assert_eq!(next_odd_checked(&4), Ok(5));
/// assert_eq!(next_odd_checked(&2.9), Ok(3));
/// assert_eq!(next_odd_checked("5"), Ok(7));
/// assert!(next_odd_checked("five").is_err());
/// ```
pub fn next_odd_checked<T: ConvertibleToInteger + ?Sized>(n: &T) -> Result<i64> {
    checked(n.to_integer()?)
}

fn checked(value: i64) -> Result<i64> {
    value.checked_next_odd().ok_or(Error::Overflow { value })
}

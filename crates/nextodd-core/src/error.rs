use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input could not be converted to an integer.
    #[error("input must be an integer or convertible to one: {input}")]
    InvalidInput { input: String },

    /// The strict policy was handed something other than an integer.
    #[error("strict policy requires an integer input: {input}")]
    NotAnInteger { input: String },

    /// The next odd number is past `i64::MAX`.
    #[error("next odd number after {value} does not fit in a 64-bit integer")]
    Overflow { value: i64 },

    /// A policy name other than `strict` or `coercing`.
    #[error("unknown policy: {0} (expected 'strict' or 'coercing')")]
    UnknownPolicy(String),
}

impl Error {
    pub(crate) fn invalid_input(input: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
        }
    }

    /// Returns `true` when the input failed integer conversion.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Errors reported by [`Regularity`](crate::Regularity).
///
/// All of them are usage errors and are reported by the call that causes them. The builder is left unchanged by a failed call.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A constraint got a wrong number of arguments.
    ///
    /// `max` is `None` if there is no upper limit.
    #[error("wrong number of arguments: got {received}, expected {}", expected(.min, .max))]
    InvalidArgumentCount {
        received: usize,
        min: usize,
        max: Option<usize>,
    },

    /// A pattern is missing or empty.
    #[error("unrecognized pattern: a pattern must be a non-empty string")]
    UnrecognizedPattern,

    /// The count of a counted constraint is not a non-negative integer.
    #[error("invalid count: the first of two arguments must be a count")]
    InvalidCount,

    /// A range is not made of 2 bounds, or none of the bounds is given.
    #[error("invalid range: you must provide 2 bounds, at least one of them must be an integer")]
    InvalidRange,

    /// A method that can only be called once on a builder was called again.
    #[error("{0} must only be called once")]
    CalledMoreThanOnce(&'static str),

    /// The assembled pattern is rejected by the regex engine, e.g. `(?:a){5,3}`.
    #[error(transparent)]
    NativeSyntax(#[from] regex::Error),

    /// The assembled pattern is rejected by the regex parser.
    #[cfg(feature = "syntax")]
    #[error(transparent)]
    Parse(#[from] regex_syntax::Error),
}

fn expected(min: &usize, max: &Option<usize>) -> String {
    match max {
        Some(max) if max == min => min.to_string(),
        Some(max) => format!("{min} to {max}"),
        None => format!("at least {min}"),
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

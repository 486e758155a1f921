use itertools::Itertools;

/// `(?:pattern)`
pub fn group(pattern: &str) -> String {
    format!("(?:{pattern})")
}

/// `(?:a|b|c)`
///
/// Choices are joined as is, escape them first if needed.
pub fn alternate<I>(choices: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    group(&choices.into_iter().join("|"))
}

/// `^pattern`
pub fn anchor_start(pattern: &str) -> String {
    format!("^{pattern}")
}

/// `pattern$`
pub fn anchor_end(pattern: &str) -> String {
    format!("{pattern}$")
}

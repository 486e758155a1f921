/*!
Repetition operators.

The pattern is always wrapped into a [non-capturing group](super::group) first, so a multi-character pattern repeats as a whole: `zero_or_more("ab")` is `(?:ab)*`, not `ab*`.
*/
use std::fmt::Write;

use super::group::group;

/// `(?:pattern)?`
pub fn zero_or_one(pattern: &str) -> String {
    group(pattern) + "?"
}

/// `(?:pattern)*`
pub fn zero_or_more(pattern: &str) -> String {
    group(pattern) + "*"
}

/// `(?:pattern)+`
pub fn one_or_more(pattern: &str) -> String {
    group(pattern) + "+"
}

/// `(?:pattern){count}`, or `pattern` as is if `count` is 1.
pub fn exactly(pattern: &str, count: u32) -> String {
    if count == 1 {
        return pattern.to_owned();
    }
    format!("{}{{{count}}}", group(pattern))
}

/// `(?:pattern){lower,upper}`.
///
/// - A missing `lower` is rendered as `0`.
/// - A missing `upper` is rendered as an open bound, e.g. `{3,}`.
///
/// `lower > upper` is not checked here. The regex engine will report it as a syntax error.
pub fn in_range(pattern: &str, lower: Option<u32>, upper: Option<u32>) -> String {
    let mut s = group(pattern);
    s.push('{');
    // Writing to a `String` never fails
    _ = write!(s, "{}", lower.unwrap_or(0));
    s.push(',');
    if let Some(upper) = upper {
        _ = write!(s, "{upper}");
    }
    s.push('}');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded() {
        assert_eq!(zero_or_one("a"), "(?:a)?");
        assert_eq!(zero_or_more("ab"), "(?:ab)*");
        assert_eq!(one_or_more("[0-9]"), "(?:[0-9])+");
    }

    #[test]
    fn exactly_test() {
        assert_eq!(exactly("a", 1), "a");
        assert_eq!(exactly("[0-9]", 1), "[0-9]");
        assert_eq!(exactly("a", 3), "(?:a){3}");
        assert_eq!(exactly("ab", 2), "(?:ab){2}");
        assert_eq!(exactly("a", 0), "(?:a){0}");
    }

    #[test]
    fn in_range_test() {
        assert_eq!(in_range("a", Some(3), Some(5)), "(?:a){3,5}");
        assert_eq!(in_range("a", Some(3), None), "(?:a){3,}");
        assert_eq!(in_range("a", None, Some(5)), "(?:a){0,5}");
        assert_eq!(in_range("a", Some(0), Some(0)), "(?:a){0,0}");
        // Left to the engine
        assert_eq!(in_range("a", Some(5), Some(3)), "(?:a){5,3}");
        assert!(regex::Regex::new(&in_range("a", Some(5), Some(3))).is_err());
    }

    #[test]
    fn repeats_as_unit() {
        let re = regex::Regex::new(&format!("^{}$", exactly("ab", 2))).unwrap();
        assert!(re.is_match("abab"));
        assert!(re.is_match("abb") == false);
    }
}

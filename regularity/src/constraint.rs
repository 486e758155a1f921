/*!
Constraints, i.e. the arguments of chain methods like [`Regularity::append`](crate::Regularity::append).

A constraint is either:
- A bare pattern: `"digits"`, `"$"`, `"foo"`.
- A counted pattern: `(3, "digits")`, `(2, "ab")`.

Patterns are [escaped](crate::pattern::escape) and then [translated](crate::pattern::ident::translate), so identifiers like `digits` become character classes and everything else is matched literally.

```
use regularity::constraint::{interpret, Constraint};

assert_eq!(interpret("digits")?, "[0-9]");
assert_eq!(interpret((3, "digits"))?, "(?:[0-9]){3}");
assert_eq!(interpret("1.5")?, r"1\.5");
assert_eq!(interpret(Constraint::counted(1, "a"))?, "a");
# Ok::<(), regularity::Error>(())
```

## Dynamic arguments
For argument lists only known at runtime (e.g. from a script or a config file), [`Arg`] slices can be used as constraints too. Their length and types are checked:
```
use regularity::{constraint::{interpret, Arg}, Error};

assert_eq!(interpret(&[Arg::Count(2), Arg::Pattern("x")][..])?, "(?:x){2}");
assert!(matches!(
    interpret(&[Arg::Null][..]),
    Err(Error::UnrecognizedPattern)
));
assert!(matches!(
    interpret(&[] as &[Arg]),
    Err(Error::InvalidArgumentCount { received: 0, .. })
));
# Ok::<(), regularity::Error>(())
```
*/
use std::{
    borrow::Cow,
    ops::{RangeFrom, RangeInclusive, RangeToInclusive},
};

use crate::{
    error::{Error, Result},
    pattern::{escape, ident::translate, quantify::exactly},
    Sealed,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint<'a> {
    /// A pattern or identifier, e.g. `"digits"`.
    Bare(Cow<'a, str>),
    /// A pattern or identifier repeated exactly `count` times, e.g. `(3, "digits")`.
    Counted(u32, Cow<'a, str>),
}

impl<'a> Constraint<'a> {
    pub fn bare(pattern: impl Into<Cow<'a, str>>) -> Self {
        Constraint::Bare(pattern.into())
    }

    pub fn counted(count: u32, pattern: impl Into<Cow<'a, str>>) -> Self {
        Constraint::Counted(count, pattern.into())
    }

    pub fn pattern(&self) -> &str {
        match self {
            Constraint::Bare(pattern) | Constraint::Counted(_, pattern) => pattern,
        }
    }

    /// Build the pattern fragment of this constraint.
    pub fn interpret(&self) -> Result<String> {
        match self {
            Constraint::Bare(pattern) => interpret_pattern(pattern),
            Constraint::Counted(count, pattern) => {
                Ok(exactly(&interpret_pattern(pattern)?, *count))
            }
        }
    }
}

/// Escape and translate a single pattern.
pub(crate) fn interpret_pattern(pattern: &str) -> Result<String> {
    if pattern.is_empty() {
        return Err(Error::UnrecognizedPattern);
    }
    // Identifiers are plain ASCII words that are never changed by escaping
    Ok(translate(&escape(pattern)).to_owned())
}

/// Build the pattern fragment of a constraint.
///
/// See [module docs](self) for details.
pub fn interpret<'a>(constraint: impl IntoConstraint<'a>) -> Result<String> {
    constraint.into_constraint()?.interpret()
}

/// An untyped argument of a constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arg<'a> {
    Count(u32),
    Pattern(&'a str),
    /// A missing argument, like `null` in a script.
    Null,
}

impl<'a> Arg<'a> {
    fn into_pattern(self) -> Result<&'a str> {
        match self {
            Arg::Pattern(pattern) if !pattern.is_empty() => Ok(pattern),
            _ => Err(Error::UnrecognizedPattern),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(pattern: &'a str) -> Self {
        Arg::Pattern(pattern)
    }
}

impl From<u32> for Arg<'_> {
    fn from(count: u32) -> Self {
        Arg::Count(count)
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(pattern: Option<&'a str>) -> Self {
        pattern.map_or(Arg::Null, Arg::Pattern)
    }
}

impl<'a> TryFrom<&[Arg<'a>]> for Constraint<'a> {
    type Error = Error;

    fn try_from(args: &[Arg<'a>]) -> Result<Self> {
        match *args {
            [pattern] => Ok(Constraint::Bare(pattern.into_pattern()?.into())),
            [count, pattern] => {
                let pattern = pattern.into_pattern()?;
                match count {
                    Arg::Count(count) => Ok(Constraint::Counted(count, pattern.into())),
                    _ => Err(Error::InvalidCount),
                }
            }
            _ => Err(Error::InvalidArgumentCount {
                received: args.len(),
                min: 1,
                max: Some(2),
            }),
        }
    }
}

/// Conversion into a [`Constraint`].
///
/// Implemented for:
/// - `&str`, `String`, `&String`: [`Constraint::Bare`]
/// - `(u32, &str)`, `(u32, String)`: [`Constraint::Counted`]
/// - `&[Arg]`, `[Arg; N]`, `Vec<Arg>`: checked at runtime
pub trait IntoConstraint<'a>: Sealed {
    fn into_constraint(self) -> Result<Constraint<'a>>;
}

impl Sealed for Constraint<'_> {}
impl<'a> IntoConstraint<'a> for Constraint<'a> {
    fn into_constraint(self) -> Result<Constraint<'a>> {
        Ok(self)
    }
}

impl Sealed for &str {}
impl<'a> IntoConstraint<'a> for &'a str {
    fn into_constraint(self) -> Result<Constraint<'a>> {
        Ok(Constraint::bare(self))
    }
}

impl Sealed for String {}
impl<'a> IntoConstraint<'a> for String {
    fn into_constraint(self) -> Result<Constraint<'a>> {
        Ok(Constraint::bare(self))
    }
}

impl Sealed for &String {}
impl<'a> IntoConstraint<'a> for &'a String {
    fn into_constraint(self) -> Result<Constraint<'a>> {
        Ok(Constraint::bare(self.as_str()))
    }
}

impl Sealed for (u32, &str) {}
impl<'a> IntoConstraint<'a> for (u32, &'a str) {
    fn into_constraint(self) -> Result<Constraint<'a>> {
        Ok(Constraint::counted(self.0, self.1))
    }
}

impl Sealed for (u32, String) {}
impl<'a> IntoConstraint<'a> for (u32, String) {
    fn into_constraint(self) -> Result<Constraint<'a>> {
        Ok(Constraint::counted(self.0, self.1))
    }
}

impl Sealed for &[Arg<'_>] {}
impl<'a> IntoConstraint<'a> for &[Arg<'a>] {
    fn into_constraint(self) -> Result<Constraint<'a>> {
        self.try_into()
    }
}

impl<const N: usize> Sealed for [Arg<'_>; N] {}
impl<'a, const N: usize> IntoConstraint<'a> for [Arg<'a>; N] {
    fn into_constraint(self) -> Result<Constraint<'a>> {
        self.as_slice().try_into()
    }
}

impl Sealed for Vec<Arg<'_>> {}
impl<'a> IntoConstraint<'a> for Vec<Arg<'a>> {
    fn into_constraint(self) -> Result<Constraint<'a>> {
        self.as_slice().try_into()
    }
}

/// Bounds of a ranged repetition. At least one of them is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    lower: Option<u32>,
    upper: Option<u32>,
}

impl Bounds {
    /// Returns [`Error::InvalidRange`] if both bounds are missing.
    ///
    /// `lower > upper` is allowed here and will be reported by the regex engine.
    pub fn new(lower: Option<u32>, upper: Option<u32>) -> Result<Self> {
        if lower.is_none() && upper.is_none() {
            return Err(Error::InvalidRange);
        }
        Ok(Self { lower, upper })
    }

    pub fn at_least(lower: u32) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    pub fn at_most(upper: u32) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    pub fn lower(&self) -> Option<u32> {
        self.lower
    }

    pub fn upper(&self) -> Option<u32> {
        self.upper
    }
}

/// Conversion into [`Bounds`].
///
/// Implemented for:
/// - `(u32, u32)`, `3..=5`: both bounds.
/// - `3..`: lower bound only.
/// - `..=5`: upper bound only.
/// - `(Option<u32>, Option<u32>)`, `[Option<u32>; 2]`, `&[Option<u32>]`: checked at runtime.
pub trait IntoBounds: Sealed {
    fn into_bounds(self) -> Result<Bounds>;
}

impl Sealed for Bounds {}
impl IntoBounds for Bounds {
    fn into_bounds(self) -> Result<Bounds> {
        Ok(self)
    }
}

impl Sealed for (u32, u32) {}
impl IntoBounds for (u32, u32) {
    fn into_bounds(self) -> Result<Bounds> {
        Bounds::new(Some(self.0), Some(self.1))
    }
}

impl Sealed for (Option<u32>, Option<u32>) {}
impl IntoBounds for (Option<u32>, Option<u32>) {
    fn into_bounds(self) -> Result<Bounds> {
        Bounds::new(self.0, self.1)
    }
}

impl Sealed for [Option<u32>; 2] {}
impl IntoBounds for [Option<u32>; 2] {
    fn into_bounds(self) -> Result<Bounds> {
        Bounds::new(self[0], self[1])
    }
}

impl Sealed for &[Option<u32>] {}
impl IntoBounds for &[Option<u32>] {
    fn into_bounds(self) -> Result<Bounds> {
        match *self {
            [lower, upper] => Bounds::new(lower, upper),
            _ => Err(Error::InvalidRange),
        }
    }
}

impl Sealed for RangeInclusive<u32> {}
impl IntoBounds for RangeInclusive<u32> {
    fn into_bounds(self) -> Result<Bounds> {
        Bounds::new(Some(*self.start()), Some(*self.end()))
    }
}

impl Sealed for RangeFrom<u32> {}
impl IntoBounds for RangeFrom<u32> {
    fn into_bounds(self) -> Result<Bounds> {
        Ok(Bounds::at_least(self.start))
    }
}

impl Sealed for RangeToInclusive<u32> {}
impl IntoBounds for RangeToInclusive<u32> {
    fn into_bounds(self) -> Result<Bounds> {
        Ok(Bounds::at_most(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare() {
        assert_eq!(interpret("a").unwrap(), "a");
        assert_eq!(interpret("digit").unwrap(), "[0-9]");
        assert_eq!(interpret("digits").unwrap(), "[0-9]");
        assert_eq!(interpret("$").unwrap(), r"\$");
        assert_eq!(interpret("a.b").unwrap(), r"a\.b");
        assert_eq!(interpret("xyzs").unwrap(), "xyzs");
        assert_eq!(interpret(String::from("letters")).unwrap(), "[A-Za-z]");
        let s = String::from("tab");
        assert_eq!(interpret(&s).unwrap(), r"\t");
        // No implicit group
        assert_eq!(interpret("abc").unwrap(), "abc");
    }

    #[test]
    fn bare_empty() {
        assert!(matches!(interpret(""), Err(Error::UnrecognizedPattern)));
        assert!(matches!(
            interpret((3, "")),
            Err(Error::UnrecognizedPattern)
        ));
    }

    #[test]
    fn counted() {
        assert_eq!(interpret((4, "digits")).unwrap(), "(?:[0-9]){4}");
        assert_eq!(interpret((1, "digits")).unwrap(), "[0-9]");
        assert_eq!(interpret((2, "ab")).unwrap(), "(?:ab){2}");
        assert_eq!(interpret((3, "*")).unwrap(), r"(?:\*){3}");
        assert_eq!(interpret((2, String::from("x"))).unwrap(), "(?:x){2}");
        assert_eq!(
            interpret(Constraint::counted(5, "space")).unwrap(),
            "(?: ){5}"
        );
    }

    #[test]
    fn escape_before_translate() {
        // An escaped identifier is no longer an identifier
        assert_eq!(interpret("digit.").unwrap(), r"digit\.");
        assert_eq!(interpret("[digit]").unwrap(), r"\[digit\]");
    }

    #[test]
    fn args() {
        assert_eq!(
            interpret(&[Arg::Pattern("digits")][..]).unwrap(),
            "[0-9]"
        );
        assert_eq!(
            interpret([Arg::Count(3), Arg::Pattern("a")]).unwrap(),
            "(?:a){3}"
        );
        assert_eq!(
            interpret(vec![Arg::from(2), Arg::from("b")]).unwrap(),
            "(?:b){2}"
        );

        assert!(matches!(
            interpret(&[] as &[Arg]),
            Err(Error::InvalidArgumentCount {
                received: 0,
                min: 1,
                max: Some(2)
            })
        ));
        assert!(matches!(
            interpret([Arg::Count(1), Arg::Pattern("a"), Arg::Pattern("b")]),
            Err(Error::InvalidArgumentCount { received: 3, .. })
        ));
        assert!(matches!(
            interpret([Arg::Null]),
            Err(Error::UnrecognizedPattern)
        ));
        assert!(matches!(
            interpret([Arg::from(None)]),
            Err(Error::UnrecognizedPattern)
        ));
        assert!(matches!(
            interpret([Arg::Pattern("")]),
            Err(Error::UnrecognizedPattern)
        ));
        assert!(matches!(
            interpret([Arg::Count(3)]),
            Err(Error::UnrecognizedPattern)
        ));
        assert!(matches!(
            interpret([Arg::Count(3), Arg::Null]),
            Err(Error::UnrecognizedPattern)
        ));
        assert!(matches!(
            interpret([Arg::Pattern("3"), Arg::Pattern("a")]),
            Err(Error::InvalidCount)
        ));
    }

    #[test]
    fn bounds() {
        assert_eq!(
            (3u32, 5u32).into_bounds().unwrap(),
            Bounds::new(Some(3), Some(5)).unwrap()
        );
        assert_eq!(
            (3u32..=5).into_bounds().unwrap(),
            (3u32, 5u32).into_bounds().unwrap()
        );
        assert_eq!((3u32..).into_bounds().unwrap(), Bounds::at_least(3));
        assert_eq!((..=5u32).into_bounds().unwrap(), Bounds::at_most(5));
        assert_eq!(
            [None, Some(5u32)].into_bounds().unwrap(),
            Bounds::at_most(5)
        );
        assert_eq!(
            (Some(3u32), None).into_bounds().unwrap(),
            Bounds::at_least(3)
        );
        assert_eq!(
            (&[Some(1u32), Some(2)][..]).into_bounds().unwrap().upper(),
            Some(2)
        );

        // Inverted bounds are left to the engine
        assert_eq!((5u32, 3u32).into_bounds().unwrap().lower(), Some(5));
    }

    #[test]
    fn invalid_bounds() {
        assert!(matches!(
            (None::<u32>, None::<u32>).into_bounds(),
            Err(Error::InvalidRange)
        ));
        assert!(matches!(
            [None::<u32>, None].into_bounds(),
            Err(Error::InvalidRange)
        ));
        assert!(matches!(
            (&[Some(1u32)][..]).into_bounds(),
            Err(Error::InvalidRange)
        ));
        assert!(matches!(
            (&[Some(1u32), Some(2), Some(3)][..]).into_bounds(),
            Err(Error::InvalidRange)
        ));
    }
}

/*!
Regular expressions for humans.

Build a regular expression by chaining readable operations instead of writing the pattern syntax by hand:
```
// cargo add regularity
use regularity::Regularity;

let re = Regularity::new()
    .start_with((3, "digits"))?
    .then("-")?
    .then((2, "letters"))?
    .maybe("#")?
    .one_of(["a", "b"])?
    .between((2, 4), "a")?
    .end_with("$")?
    .done()?;
assert_eq!(re.source(), r"^(?:[0-9]){3}-(?:[A-Za-z]){2}(?:#)?(?:a|b)(?:a){2,4}\$$");
assert!(re.is_match("123-xy#baa$"));
# Ok::<(), regularity::Error>(())
```

## Constraints
Most methods take a [constraint](constraint), which is either a pattern like `"a"`, or a count and a pattern like `(3, "a")`.

Patterns are matched literally, metacharacters like `.` and `$` are [escaped](pattern::escape) automatically. Except the following [special identifiers](pattern::ident), which can also be written in plural form:

| Identifier | Pattern |
| --- | --- |
| `digit` | `[0-9]` |
| `lowercase` | `[a-z]` |
| `uppercase` | `[A-Z]` |
| `letter` | `[A-Za-z]` |
| `alphanumeric` | `[A-Za-z0-9]` |
| `whitespace` | `\s` |
| `space` | `" "` |
| `tab` | `\t` |

## Methods
| Method | Pattern |
| --- | --- |
| [`start_with(c)`](Regularity::start_with) | `^c`, at most once |
| [`end_with(c)`](Regularity::end_with) | `c$`, at most once |
| [`append(c)`](Regularity::append), [`then(c)`](Regularity::then) | `c` |
| [`maybe(c)`](Regularity::maybe) | `(?:c)?` |
| [`one_of([a, b])`](Regularity::one_of) | `(?:a\|b)` |
| [`zero_or_more(c)`](Regularity::zero_or_more) | `(?:c)*` |
| [`one_or_more(c)`](Regularity::one_or_more) | `(?:c)+` |
| [`between((n, m), p)`](Regularity::between) | `(?:p){n,m}` |
| [`at_least(n, p)`](Regularity::at_least) | `(?:p){n,}` |
| [`at_most(m, p)`](Regularity::at_most) | `(?:p){0,m}` |
| [`insensitive()`](Regularity::insensitive) | flag `i`, at most once |
| [`global()`](Regularity::global) | flag `g`, at most once |
| [`multi_line()`](Regularity::multi_line) | flag `m`, at most once |
| [`done()`](Regularity::done), [`regexp()`](Regularity::regexp) | compile |

The anchors set by `start_with()` and `end_with()` are always placed at the start and end of the pattern, no matter where they are called in the chain.

## Regex engine
[`done()`](Regularity::done) compiles the pattern with the [`regex`] crate and returns a [`Regexp`], which derefs to [`regex::Regex`]. Options of the engine can be set with [`Config`].

Invalid patterns, e.g. `between((5, 3), "a")`, are not checked while building and are reported by the engine in `done()` instead:
```
use regularity::{Error, Regularity};

let mut r = Regularity::new();
r.between((5, 3), "a")?;
assert!(matches!(r.done(), Err(Error::NativeSyntax(_))));
# Ok::<(), regularity::Error>(())
```

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => { log::trace!($($arg)+) };
}
#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)+) => {};
}

mod builder;
pub mod constraint;
mod error;
pub mod pattern;
mod regexp;

pub use builder::Regularity;
pub use constraint::{Arg, Bounds, Constraint, IntoBounds, IntoConstraint};
pub use error::{Error, Result};
pub use regexp::{Config, Flags, Regexp};

pub use regex;
#[cfg(feature = "syntax")]
pub use regex_syntax as syntax;

mod private {
    pub trait Sealed {}
}
use private::Sealed;

use std::{fmt, ops::Deref};

use bitflags::bitflags;
use bon::Builder;
use regex::{Match, Matches, Regex, RegexBuilder};

use crate::error::Result;

bitflags! {
    /// Flags of a [`Regexp`]. Each of them can only be enabled once on a [`Regularity`](crate::Regularity).
    ///
    /// Displayed as letters in the order of `gim`:
    /// ```
    /// use regularity::Flags;
    ///
    /// assert_eq!((Flags::MULTI_LINE | Flags::GLOBAL).to_string(), "gm");
    /// assert_eq!(Flags::empty().to_string(), "");
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        /// `g`: All matches are wanted instead of the first one. See [`Regexp::find_all`].
        const GLOBAL = 1 << 0;
        /// `i`: Letters match both upper and lower case.
        const IGNORE_CASE = 1 << 1;
        /// `m`: `^` and `$` match the start and end of lines.
        const MULTI_LINE = 1 << 2;
    }
}

impl Flags {
    const LETTERS: [(Flags, char); 3] = [
        (Flags::GLOBAL, 'g'),
        (Flags::IGNORE_CASE, 'i'),
        (Flags::MULTI_LINE, 'm'),
    ];

    /// The letter of a single flag.
    pub fn letter(self) -> Option<char> {
        Self::LETTERS
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|&(_, letter)| letter)
    }

    /// The flag of a letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::LETTERS
            .iter()
            .find(|(_, l)| *l == letter)
            .map(|&(flag, _)| flag)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, letter) in Self::LETTERS {
            if self.contains(flag) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Options of the regex engine.
///
/// ```
/// use regularity::{Config, Regularity};
///
/// let re = Regularity::with_config(Config::builder().unicode(false).build())
///     .append("whitespace")?
///     .done()?;
/// assert!(re.is_match(" "));
/// assert!(re.is_match("\u{3000}") == false);
/// # Ok::<(), regularity::Error>(())
/// ```
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Unicode aware `whitespace` (`\s`) and case insensitivity.
    ///
    /// Defaults to `true` if feature `unicode` is enabled, `false` otherwise.
    #[builder(default = cfg!(feature = "unicode"))]
    pub(crate) unicode: bool,

    /// Treat `\r` as a line terminator too in [multi-line mode](Flags::MULTI_LINE).
    #[builder(default)]
    pub(crate) crlf: bool,

    /// See [`RegexBuilder::size_limit`].
    pub(crate) size_limit: Option<usize>,

    /// See [`RegexBuilder::dfa_size_limit`].
    pub(crate) dfa_size_limit: Option<usize>,

    /// See [`RegexBuilder::nest_limit`].
    pub(crate) nest_limit: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Config {
    fn regex_builder(&self, source: &str, flags: Flags) -> RegexBuilder {
        let mut b = RegexBuilder::new(source);
        b.case_insensitive(flags.contains(Flags::IGNORE_CASE))
            .multi_line(flags.contains(Flags::MULTI_LINE))
            .unicode(self.unicode)
            .crlf(self.crlf);
        if let Some(limit) = self.size_limit {
            b.size_limit(limit);
        }
        if let Some(limit) = self.dfa_size_limit {
            b.dfa_size_limit(limit);
        }
        if let Some(limit) = self.nest_limit {
            b.nest_limit(limit);
        }
        b
    }

    #[cfg(feature = "syntax")]
    pub(crate) fn parser(&self, flags: Flags) -> regex_syntax::Parser {
        let mut b = regex_syntax::ParserBuilder::new();
        b.case_insensitive(flags.contains(Flags::IGNORE_CASE))
            .multi_line(flags.contains(Flags::MULTI_LINE))
            .unicode(self.unicode)
            .crlf(self.crlf);
        if let Some(limit) = self.nest_limit {
            b.nest_limit(limit);
        }
        b.build()
    }
}

/// A compiled regular expression, together with its source and flags.
///
/// Derefs to [`regex::Regex`] for the full search API.
#[derive(Clone, Debug)]
pub struct Regexp {
    regex: Regex,
    flags: Flags,
}

impl Regexp {
    pub(crate) fn new(source: &str, flags: Flags, config: &Config) -> Result<Self> {
        let regex = config
            .regex_builder(source, flags)
            .build()
            .map_err(|e| {
                debug!("failed to compile {source:?}: {e}");
                e
            })?;
        Ok(Self { regex, flags })
    }

    /// The pattern, without flags.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn ignore_case(&self) -> bool {
        self.flags.contains(Flags::IGNORE_CASE)
    }

    pub fn global(&self) -> bool {
        self.flags.contains(Flags::GLOBAL)
    }

    pub fn multi_line(&self) -> bool {
        self.flags.contains(Flags::MULTI_LINE)
    }

    #[inline]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    #[inline]
    pub fn find<'h>(&self, haystack: &'h str) -> Option<Match<'h>> {
        self.regex.find(haystack)
    }

    /// All non-overlapping matches if [`global()`](Self::global), otherwise only the first one.
    ///
    /// ```
    /// use regularity::Regularity;
    ///
    /// let re = Regularity::new().append("digit")?.done()?;
    /// assert_eq!(re.find_all("a1b2").count(), 1);
    ///
    /// let re = Regularity::new().append("digit")?.global()?.done()?;
    /// let digits: Vec<&str> = re.find_all("a1b2").map(|m| m.as_str()).collect();
    /// assert_eq!(digits, ["1", "2"]);
    /// # Ok::<(), regularity::Error>(())
    /// ```
    pub fn find_all<'r, 'h>(&'r self, haystack: &'h str) -> std::iter::Take<Matches<'r, 'h>> {
        let n = if self.global() { usize::MAX } else { 1 };
        self.regex.find_iter(haystack).take(n)
    }

    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl Deref for Regexp {
    type Target = Regex;

    fn deref(&self) -> &Self::Target {
        &self.regex
    }
}

impl From<Regexp> for Regex {
    fn from(re: Regexp) -> Self {
        re.regex
    }
}

/// `/source/flags`
impl fmt::Display for Regexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source(), self.flags)
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::*;

    #[test]
    fn flags() {
        assert_eq!(Flags::all().to_string(), "gim");
        assert_eq!((Flags::MULTI_LINE | Flags::IGNORE_CASE).to_string(), "im");
        assert_eq!(Flags::GLOBAL.letter(), Some('g'));
        assert_eq!(Flags::all().letter(), None);
        assert_eq!(Flags::from_letter('m'), Some(Flags::MULTI_LINE));
        assert_eq!(Flags::from_letter('x'), None);
    }

    #[test]
    fn compile() {
        let re = Regexp::new("a", Flags::IGNORE_CASE, &Config::default()).unwrap();
        assert_eq!(re.source(), "a");
        assert!(re.ignore_case());
        assert!(re.global() == false);
        assert!(re.is_match("A"));
        assert_eq!(re.to_string(), "/a/i");

        let re = Regexp::new("^b$", Flags::MULTI_LINE, &Config::default()).unwrap();
        assert!(re.is_match("a\nb\nc"));
        let re = Regexp::new("^b$", Flags::empty(), &Config::default()).unwrap();
        assert!(re.is_match("a\nb\nc") == false);

        let re = Regexp::new("", Flags::empty(), &Config::default()).unwrap();
        assert!(re.is_match(""));
        assert!(re.is_match("anything"));
    }

    #[test]
    fn compile_error() {
        assert!(matches!(
            Regexp::new("(?:k){5,3}", Flags::empty(), &Config::default()),
            Err(Error::NativeSyntax(_))
        ));
        let config = Config::builder().size_limit(16).build();
        assert!(matches!(
            Regexp::new("(?:[0-9]){100}", Flags::empty(), &config),
            Err(Error::NativeSyntax(_))
        ));
    }

    #[test]
    fn config() {
        let config = Config::default();
        assert_eq!(config.unicode, cfg!(feature = "unicode"));
        assert!(config.crlf == false);
        assert_eq!(config.size_limit, None);

        let config = Config::builder().crlf(true).nest_limit(10).build();
        let re = Regexp::new("^b$", Flags::MULTI_LINE, &config).unwrap();
        assert!(re.is_match("a\r\nb\r\nc"));
    }
}

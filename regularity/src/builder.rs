use crate::{
    constraint::{interpret_pattern, IntoBounds, IntoConstraint},
    error::{Error, Result},
    pattern::{
        group::{alternate, anchor_end, anchor_start},
        quantify::{in_range, one_or_more, zero_or_more, zero_or_one},
    },
    regexp::{Config, Flags, Regexp},
};

/// A regular expression builder.
///
/// Every chain method returns `Result<&mut Self>`, so calls can be chained with `?`.
/// If a call fails, the builder is left unchanged.
///
/// ## Example
/// ```
/// use regularity::Regularity;
///
/// let re = Regularity::new()
///     .start_with((3, "digits"))?
///     .then("-")?
///     .then((2, "letters"))?
///     .maybe("#")?
///     .one_of(["a", "b"])?
///     .between((2, 4), "a")?
///     .insensitive()?
///     .end_with("$")?
///     .done()?;
/// assert_eq!(re.source(), r"^(?:[0-9]){3}-(?:[A-Za-z]){2}(?:#)?(?:a|b)(?:a){2,4}\$$");
/// assert!(re.is_match("123-xy#baa$"));
/// # Ok::<(), regularity::Error>(())
/// ```
///
/// ## Anchors
/// [`start_with()`](Self::start_with) and [`end_with()`](Self::end_with) can be called at any point of the chain, but are always placed at the start and end of the pattern respectively:
/// ```
/// use regularity::Regularity;
///
/// let re = Regularity::new().append("x")?.start_with("a")?.done()?;
/// assert_eq!(re.source(), "^ax");
/// # Ok::<(), regularity::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Regularity {
    start: Option<String>,
    body: String,
    end: Option<String>,
    flags: Flags,
    config: Config,
}

impl Default for Regularity {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl Regularity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            start: None,
            body: String::new(),
            end: None,
            flags: Flags::empty(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn push(&mut self, fragment: String) -> &mut Self {
        trace!("append {fragment:?}");
        self.body.push_str(&fragment);
        self
    }

    /// The input must start with the constraint.
    ///
    /// Can only be called once.
    pub fn start_with<'a>(&mut self, constraint: impl IntoConstraint<'a>) -> Result<&mut Self> {
        if self.start.is_some() {
            return Err(Error::CalledMoreThanOnce("start_with"));
        }
        let fragment = anchor_start(&constraint.into_constraint()?.interpret()?);
        trace!("start with {fragment:?}");
        self.start = Some(fragment);
        Ok(self)
    }

    /// The input must end with the constraint.
    ///
    /// Can only be called once.
    pub fn end_with<'a>(&mut self, constraint: impl IntoConstraint<'a>) -> Result<&mut Self> {
        if self.end.is_some() {
            return Err(Error::CalledMoreThanOnce("end_with"));
        }
        let fragment = anchor_end(&constraint.into_constraint()?.interpret()?);
        trace!("end with {fragment:?}");
        self.end = Some(fragment);
        Ok(self)
    }

    /// Append the constraint. Also aliased as [`then()`](Self::then).
    pub fn append<'a>(&mut self, constraint: impl IntoConstraint<'a>) -> Result<&mut Self> {
        let fragment = constraint.into_constraint()?.interpret()?;
        Ok(self.push(fragment))
    }

    /// Alias of [`append()`](Self::append).
    #[inline]
    pub fn then<'a>(&mut self, constraint: impl IntoConstraint<'a>) -> Result<&mut Self> {
        self.append(constraint)
    }

    /// Zero or one of the constraint.
    pub fn maybe<'a>(&mut self, constraint: impl IntoConstraint<'a>) -> Result<&mut Self> {
        let fragment = zero_or_one(&constraint.into_constraint()?.interpret()?);
        Ok(self.push(fragment))
    }

    /// One of the given literals or identifiers, e.g. `one_of(["a", "digit"])`.
    ///
    /// At least one choice must be given.
    pub fn one_of<I>(&mut self, choices: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let choices = choices
            .into_iter()
            .map(|choice| interpret_pattern(choice.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if choices.is_empty() {
            return Err(Error::InvalidArgumentCount {
                received: 0,
                min: 1,
                max: None,
            });
        }
        Ok(self.push(alternate(choices)))
    }

    /// Zero or more of the constraint.
    pub fn zero_or_more<'a>(&mut self, constraint: impl IntoConstraint<'a>) -> Result<&mut Self> {
        let fragment = zero_or_more(&constraint.into_constraint()?.interpret()?);
        Ok(self.push(fragment))
    }

    /// One or more of the constraint.
    pub fn one_or_more<'a>(&mut self, constraint: impl IntoConstraint<'a>) -> Result<&mut Self> {
        let fragment = one_or_more(&constraint.into_constraint()?.interpret()?);
        Ok(self.push(fragment))
    }

    /// Between `lower` and `upper` (inclusive) of the pattern, e.g. `between((2, 4), "digits")` or `between(2..=4, "digits")`.
    ///
    /// See [`IntoBounds`] for accepted bounds. `lower > upper` is reported by [`done()`](Self::done).
    ///
    /// Note that like other constraints, this is not anchored: `between((3, 5), "a")` matches `aaaaaa` too, as it contains `aaa`.
    pub fn between(&mut self, bounds: impl IntoBounds, pattern: &str) -> Result<&mut Self> {
        let bounds = bounds.into_bounds()?;
        let fragment = in_range(&interpret_pattern(pattern)?, bounds.lower(), bounds.upper());
        Ok(self.push(fragment))
    }

    /// At least `times` of the pattern. Same as `between(times.., pattern)`.
    pub fn at_least(&mut self, times: u32, pattern: &str) -> Result<&mut Self> {
        self.between((Some(times), None), pattern)
    }

    /// At most `times` of the pattern. Same as `between(..=times, pattern)`.
    pub fn at_most(&mut self, times: u32, pattern: &str) -> Result<&mut Self> {
        self.between((None, Some(times)), pattern)
    }

    fn enable_flag(&mut self, flag: Flags, method: &'static str) -> Result<&mut Self> {
        if self.flags.contains(flag) {
            return Err(Error::CalledMoreThanOnce(method));
        }
        self.flags.insert(flag);
        Ok(self)
    }

    /// Case insensitive, i.e. [`Flags::IGNORE_CASE`].
    pub fn insensitive(&mut self) -> Result<&mut Self> {
        self.enable_flag(Flags::IGNORE_CASE, "insensitive")
    }

    /// Find all matches, i.e. [`Flags::GLOBAL`].
    pub fn global(&mut self) -> Result<&mut Self> {
        self.enable_flag(Flags::GLOBAL, "global")
    }

    /// `^` and `$` match lines, i.e. [`Flags::MULTI_LINE`].
    pub fn multi_line(&mut self) -> Result<&mut Self> {
        self.enable_flag(Flags::MULTI_LINE, "multi_line")
    }

    /// The assembled pattern, without compiling it.
    pub fn source(&self) -> String {
        let start = self.start.as_deref().unwrap_or_default();
        let end = self.end.as_deref().unwrap_or_default();
        let mut source = String::with_capacity(start.len() + self.body.len() + end.len());
        source.push_str(start);
        source.push_str(&self.body);
        source.push_str(end);
        source
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Compile the pattern. Also aliased as [`regexp()`](Self::regexp).
    ///
    /// The builder is not changed, so this can be called again after more constraints are chained.
    ///
    /// Returns [`Error::NativeSyntax`] if the pattern is rejected by the regex engine, e.g. `between((5, 3), "a")`.
    pub fn done(&self) -> Result<Regexp> {
        let source = self.source();
        #[cfg(test)]
        dbg!(&source);
        trace!("compile {source:?} with flags {:?}", self.flags.to_string());
        Regexp::new(&source, self.flags, &self.config)
    }

    /// Alias of [`done()`](Self::done).
    #[inline]
    pub fn regexp(&self) -> Result<Regexp> {
        self.done()
    }

    /// Parse the pattern into [`Hir`](regex_syntax::hir::Hir), which can be used to build engines from `regex-automata`, etc.
    ///
    /// Flags are applied during parsing, except [`Flags::GLOBAL`], which is not a part of the pattern.
    ///
    /// ```
    /// use regularity::{syntax::hir::Hir, Regularity};
    ///
    /// let hir = Regularity::new().append("ab")?.hir()?;
    /// assert_eq!(hir, Hir::literal(*b"ab"));
    /// # Ok::<(), regularity::Error>(())
    /// ```
    #[cfg(feature = "syntax")]
    pub fn hir(&self) -> Result<regex_syntax::hir::Hir> {
        Ok(self.config.parser(self.flags).parse(&self.source())?)
    }
}

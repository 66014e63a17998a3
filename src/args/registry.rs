//! Flag and parser registrations — immutable descriptions of what to match.

use std::fmt;
use std::sync::Arc;

use crate::args::error::ResolveError;

/// Side effect invoked with the values extracted for one flag occurrence.
pub trait FlagAction: Send + Sync {
    fn invoke(&self, values: &[String]);
}

impl<F> FlagAction for F
where
    F: Fn(&[String]) + Send + Sync,
{
    fn invoke(&self, values: &[String]) {
        self(values)
    }
}

/// Collapses a parser window into a single replacement token.
pub trait Reducer: Send + Sync {
    fn reduce(&self, window: &[String]) -> String;
}

impl<F> Reducer for F
where
    F: Fn(&[String]) -> String + Send + Sync,
{
    fn reduce(&self, window: &[String]) -> String {
        self(window)
    }
}

/// How a flag's values are laid out in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Values are the following whole tokens (`--name v1 v2`).
    Space,
    /// Values are segments of the flag token itself (`--name-v1-v2`).
    Inline(char),
}

impl Separator {
    /// Parse a separator from its textual form.
    ///
    /// Exactly one character is accepted. A single space selects
    /// [`Separator::Space`]; any other whitespace is rejected.
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(' '), None) => Ok(Separator::Space),
            (Some(c), None) if !c.is_whitespace() => Ok(Separator::Inline(c)),
            _ => Err(ResolveError::invalid(format!(
                "invalid value separator {:?}: expected a single space or a single non-whitespace character",
                raw
            ))),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Space => f.write_str(" "),
            Separator::Inline(c) => write!(f, "{}", c),
        }
    }
}

/// Defaults applied to registrations that don't specify a shape explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDefaults {
    pub flag_arity: usize,
    pub separator: Separator,
    pub allow_multiple: bool,
    pub parser_arity: usize,
    pub suffix: Option<String>,
}

impl Default for RegistrationDefaults {
    fn default() -> Self {
        Self {
            flag_arity: 1,
            separator: Separator::Inline('-'),
            allow_multiple: false,
            parser_arity: 1,
            suffix: None,
        }
    }
}

impl RegistrationDefaults {
    /// Build a flag using these defaults.
    pub fn flag(&self, name: &str, action: impl FlagAction + 'static) -> Result<Flag, ResolveError> {
        validate_name("flag", name)?;
        Ok(Flag {
            name: name.to_string(),
            arity: self.flag_arity,
            separator: self.separator,
            allow_multiple: self.allow_multiple,
            action: Arc::new(action),
        })
    }

    /// Build a parser using these defaults.
    pub fn parser(&self, name: &str, reducer: impl Reducer + 'static) -> Result<Parser, ResolveError> {
        validate_name("parser", name)?;
        let parser = Parser {
            name: name.to_string(),
            arity: self.parser_arity,
            suffix: None,
            reducer: Arc::new(reducer),
        };
        match &self.suffix {
            Some(suffix) => parser.with_suffix(suffix),
            None => Ok(parser),
        }
    }
}

/// A registered flag.
#[derive(Clone)]
pub struct Flag {
    name: String,
    arity: usize,
    separator: Separator,
    allow_multiple: bool,
    action: Arc<dyn FlagAction>,
}

impl Flag {
    /// Create a flag with [`RegistrationDefaults::default`] shape.
    pub fn new(name: &str, action: impl FlagAction + 'static) -> Result<Self, ResolveError> {
        RegistrationDefaults::default().flag(name, action)
    }

    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Allow (or forbid) more than one occurrence per resolution.
    pub fn with_multiple(mut self, allow_multiple: bool) -> Self {
        self.allow_multiple = allow_multiple;
        self
    }

    /// Name without the flag indicator.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn allows_multiple(&self) -> bool {
        self.allow_multiple
    }

    /// Whether the values of an occurrence are separate tokens.
    ///
    /// Zero-arity flags behave like space-separated ones: the whole token is
    /// the name.
    pub fn takes_following_tokens(&self) -> bool {
        self.separator == Separator::Space || self.arity == 0
    }

    pub(crate) fn invoke(&self, values: &[String]) {
        self.action.invoke(values)
    }
}

impl fmt::Debug for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("separator", &self.separator)
            .field("allow_multiple", &self.allow_multiple)
            .finish_non_exhaustive()
    }
}

/// A registered parser.
#[derive(Clone)]
pub struct Parser {
    name: String,
    arity: usize,
    suffix: Option<String>,
    reducer: Arc<dyn Reducer>,
}

impl Parser {
    /// Create a parser with [`RegistrationDefaults::default`] shape.
    pub fn new(name: &str, reducer: impl Reducer + 'static) -> Result<Self, ResolveError> {
        RegistrationDefaults::default().parser(name, reducer)
    }

    /// Number of non-flag tokens that close the window when no suffix is set.
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Close the window at an explicit token instead of by arity.
    pub fn with_suffix(mut self, suffix: &str) -> Result<Self, ResolveError> {
        if suffix.is_empty() || suffix.chars().any(char::is_whitespace) {
            return Err(ResolveError::invalid(format!(
                "invalid suffix {:?} for parser '{}'",
                suffix, self.name
            )));
        }
        self.suffix = Some(suffix.to_string());
        Ok(self)
    }

    /// Name without the parser indicator.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub(crate) fn reduce(&self, window: &[String]) -> String {
        self.reducer.reduce(window)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("suffix", &self.suffix)
            .finish_non_exhaustive()
    }
}

fn validate_name(kind: &str, name: &str) -> Result<(), ResolveError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ResolveError::invalid(format!(
            "invalid {} name {:?}",
            kind, name
        )));
    }
    Ok(())
}

//! Indicator syntax — how flag and parser tokens are recognised.

use crate::args::error::ResolveError;
use crate::args::registry::{Flag, Parser, Separator};

/// Indicator prefixes for one resolution context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    flag_indicator: String,
    parser_indicator: String,
}

impl Syntax {
    /// Create a syntax from its two indicators.
    ///
    /// The flag indicator must be non-empty. The parser indicator may be empty,
    /// in which case parser names are matched literally.
    pub fn new(flag_indicator: &str, parser_indicator: &str) -> Result<Self, ResolveError> {
        if flag_indicator.is_empty() {
            return Err(ResolveError::invalid("flag indicator must not be empty"));
        }
        for (kind, indicator) in [("flag", flag_indicator), ("parser", parser_indicator)] {
            if indicator.chars().any(char::is_whitespace) {
                return Err(ResolveError::invalid(format!(
                    "{} indicator {:?} contains whitespace",
                    kind, indicator
                )));
            }
        }

        let syntax = Self {
            flag_indicator: flag_indicator.to_string(),
            parser_indicator: parser_indicator.to_string(),
        };
        if syntax.indicators_overlap() {
            tracing::warn!(
                flag_indicator,
                parser_indicator,
                "indicators share a prefix; ambiguous tokens resolve as parsers"
            );
        }
        Ok(syntax)
    }

    pub fn flag_indicator(&self) -> &str {
        &self.flag_indicator
    }

    pub fn parser_indicator(&self) -> &str {
        &self.parser_indicator
    }

    /// Whether one indicator is a prefix of the other.
    pub fn indicators_overlap(&self) -> bool {
        !self.parser_indicator.is_empty()
            && (self.flag_indicator.starts_with(&self.parser_indicator)
                || self.parser_indicator.starts_with(&self.flag_indicator))
    }

    /// Whether the token carries the flag indicator at all.
    pub fn is_flag_like(&self, token: &str) -> bool {
        token.starts_with(&self.flag_indicator)
    }

    /// Whether the token is an occurrence of `flag`.
    pub fn flag_matches(&self, flag: &Flag, token: &str) -> bool {
        let Some(rest) = token.strip_prefix(&self.flag_indicator) else {
            return false;
        };
        if flag.takes_following_tokens() {
            return rest == flag.name();
        }
        match flag.separator() {
            Separator::Inline(sep) => rest
                .strip_prefix(flag.name())
                .is_some_and(|tail| tail.starts_with(sep)),
            Separator::Space => false,
        }
    }

    /// Whether the token opens `parser`.
    pub fn parser_matches(&self, parser: &Parser, token: &str) -> bool {
        token
            .strip_prefix(&self.parser_indicator)
            .is_some_and(|rest| rest == parser.name())
    }

    /// First flag in registration order that the token is an occurrence of.
    pub fn find_flag<'a>(&self, flags: &'a [Flag], token: &str) -> Option<&'a Flag> {
        flags.iter().find(|flag| self.flag_matches(flag, token))
    }

    /// First parser in registration order that the token opens.
    pub fn find_parser<'a>(&self, parsers: &'a [Parser], token: &str) -> Option<&'a Parser> {
        parsers.iter().find(|parser| self.parser_matches(parser, token))
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            flag_indicator: "--".to_string(),
            parser_indicator: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &[String]) {}

    #[test]
    fn space_flag_matches_exact_token() {
        let syntax = Syntax::default();
        let flag = Flag::new("out", noop).unwrap().with_separator(Separator::Space);
        assert!(syntax.flag_matches(&flag, "--out"));
        assert!(!syntax.flag_matches(&flag, "--output"));
        assert!(!syntax.flag_matches(&flag, "out"));
    }

    #[test]
    fn inline_flag_requires_separator_after_name() {
        let syntax = Syntax::default();
        let flag = Flag::new("opt", noop).unwrap();
        assert!(syntax.flag_matches(&flag, "--opt-a"));
        assert!(syntax.flag_matches(&flag, "--opt-"));
        assert!(!syntax.flag_matches(&flag, "--opt"));
        assert!(!syntax.flag_matches(&flag, "--options-a"));
    }

    #[test]
    fn parser_matching_uses_indicator() {
        let syntax = Syntax::new("--", "+").unwrap();
        let parser = Parser::new("sum", |w: &[String]| w.join("")).unwrap();
        assert!(syntax.parser_matches(&parser, "+sum"));
        assert!(!syntax.parser_matches(&parser, "sum"));
    }

    #[test]
    fn overlapping_indicators_detected() {
        assert!(Syntax::new("--", "-").unwrap().indicators_overlap());
        assert!(!Syntax::new("--", "").unwrap().indicators_overlap());
        assert!(!Syntax::new("--", "+").unwrap().indicators_overlap());
    }

    #[test]
    fn invalid_indicators_rejected() {
        assert!(Syntax::new("", "").is_err());
        assert!(Syntax::new("- ", "").is_err());
        assert!(Syntax::new("--", " ").is_err());
    }
}

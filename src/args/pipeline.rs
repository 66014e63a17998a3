//! Pipeline — ties parser reduction and flag dispatch together.

use crate::args::dispatcher::dispatch;
use crate::args::error::ResolveError;
use crate::args::reducer::reduce;
use crate::args::registry::{Flag, Parser};
use crate::args::syntax::Syntax;

/// Everything one resolution needs: indicators, flags and parsers.
///
/// The context is immutable once built. Each call works on its own copy of the
/// active flag set, so a single context can serve concurrent resolutions.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    syntax: Syntax,
    flags: Vec<Flag>,
    parsers: Vec<Parser>,
}

impl ResolutionContext {
    pub fn new(syntax: Syntax, flags: Vec<Flag>, parsers: Vec<Parser>) -> Self {
        Self {
            syntax,
            flags,
            parsers,
        }
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn parsers(&self) -> &[Parser] {
        &self.parsers
    }

    /// Run parser reduction, then flag dispatch, returning leftover tokens.
    pub fn resolve(&self, tokens: &[String]) -> Result<Vec<String>, ResolveError> {
        // Stage 1: Collapse parser windows
        let reduced = self.reduce(tokens)?;

        // Stage 2: Dispatch flags over the flat stream
        let leftover = self.dispatch(&reduced)?;

        tracing::debug!(
            input = tokens.len(),
            reduced = reduced.len(),
            leftover = leftover.len(),
            "resolved tokens"
        );
        Ok(leftover)
    }

    /// Parser reduction only.
    pub fn reduce(&self, tokens: &[String]) -> Result<Vec<String>, ResolveError> {
        reduce(&self.syntax, &self.parsers, &self.flags, tokens)
    }

    /// Flag dispatch only.
    pub fn dispatch(&self, tokens: &[String]) -> Result<Vec<String>, ResolveError> {
        dispatch(&self.syntax, &self.flags, tokens)
    }
}

/// Resolve `tokens` against `context`.
///
/// This is the main entry point for the resolution pipeline.
pub fn resolve(context: &ResolutionContext, tokens: &[String]) -> Result<Vec<String>, ResolveError> {
    context.resolve(tokens)
}

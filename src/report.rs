//! Resolution report — records which flags fired, for the `argfold` binary.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::args::{ResolutionContext, ResolveError};
use crate::config::{Config, ConfigError};

/// One honoured flag occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagHit {
    pub name: String,
    pub values: Vec<String>,
}

/// Outcome of resolving one token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Flag occurrences in invocation order.
    pub flags: Vec<FlagHit>,
    /// Tokens not claimed by any flag.
    pub leftover: Vec<String>,
}

/// Shared sink for flag actions built from a config.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    hits: Arc<Mutex<Vec<FlagHit>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, name: &str, values: &[String]) {
        self.hits.lock().push(FlagHit {
            name: name.to_string(),
            values: values.to_vec(),
        });
    }

    /// Take every hit recorded so far, leaving the recorder empty.
    pub fn drain(&self) -> Vec<FlagHit> {
        std::mem::take(&mut *self.hits.lock())
    }
}

/// Build a context from `config` whose flags record into `recorder`.
///
/// Declared parsers join their window with the configured delimiter.
pub fn build_context(config: &Config, recorder: &Recorder) -> Result<ResolutionContext, ConfigError> {
    config.validate()?;
    let syntax = config.syntax()?;
    let defaults = config.registration_defaults()?;

    let flags = config
        .flags
        .iter()
        .map(|decl| {
            let recorder = recorder.clone();
            let name = decl.name.clone();
            decl.register(&defaults, move |values: &[String]| recorder.record(&name, values))
        })
        .collect::<Result<Vec<_>, ResolveError>>()?;

    let parsers = config
        .parsers
        .iter()
        .map(|decl| {
            let delimiter = decl.delimiter.clone();
            decl.register(&defaults, move |window: &[String]| window.join(&delimiter))
        })
        .collect::<Result<Vec<_>, ResolveError>>()?;

    Ok(ResolutionContext::new(syntax, flags, parsers))
}

/// Resolve `tokens` and collect the recorded flag hits into a report.
///
/// On error the recorder is drained so a later run starts clean.
pub fn run(
    context: &ResolutionContext,
    recorder: &Recorder,
    tokens: &[String],
) -> Result<Report, ResolveError> {
    let result = context.resolve(tokens);
    let flags = recorder.drain();
    let leftover = result?;
    Ok(Report { flags, leftover })
}

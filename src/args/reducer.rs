//! Parser reducer — collapses parser windows into single tokens.
//!
//! The stream is scanned right to left. Each opener's window is reduced and
//! spliced back before the scan moves on, so nested parsers to the right are
//! already single tokens by the time their enclosing opener is reached, and
//! indices to the left of a splice stay valid.

use std::ops::Range;

use crate::args::error::ResolveError;
use crate::args::registry::{Flag, Parser, Separator};
use crate::args::syntax::Syntax;

/// Span claimed by one parser occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Window {
    /// Tokens handed to the reducer.
    content: Range<usize>,
    /// Exclusive end of the consumed span, suffix included.
    end: usize,
}

/// Reduce every parser occurrence in `tokens`, returning the rewritten stream.
///
/// `flags` should list every flag that may appear inside a window, including
/// ones only parsers care about; their value tokens don't count towards a
/// parser's arity. Reducer output is never re-scanned.
pub fn reduce(
    syntax: &Syntax,
    parsers: &[Parser],
    flags: &[Flag],
    tokens: &[String],
) -> Result<Vec<String>, ResolveError> {
    let mut stream = tokens.to_vec();

    for open in (0..stream.len()).rev() {
        let Some(parser) = syntax.find_parser(parsers, &stream[open]) else {
            continue;
        };

        let window = scan_window(syntax, parser, flags, &stream, open)?;
        let replacement = parser.reduce(&stream[window.content.clone()]);
        tracing::debug!(
            parser = parser.name(),
            position = open,
            consumed = window.end - open,
            replacement = %replacement,
            "reduced parser window"
        );
        stream.splice(open..window.end, std::iter::once(replacement));
    }

    Ok(stream)
}

/// Find where the window of the parser opened at `open` ends.
fn scan_window(
    syntax: &Syntax,
    parser: &Parser,
    flags: &[Flag],
    stream: &[String],
    open: usize,
) -> Result<Window, ResolveError> {
    let start = open + 1;
    let mut j = start;
    let mut counted = 0;

    loop {
        match parser.suffix() {
            Some(suffix) => {
                if j >= stream.len() {
                    break;
                }
                if stream[j] == suffix {
                    return Ok(Window {
                        content: start..j,
                        end: j + 1,
                    });
                }
            }
            None => {
                if counted == parser.arity() {
                    return Ok(Window {
                        content: start..j,
                        end: j,
                    });
                }
                if j >= stream.len() {
                    break;
                }
            }
        }

        let token = &stream[j];
        match syntax.find_flag(flags, token) {
            Some(flag) => {
                if flag.separator() == Separator::Space {
                    let available = stream.len() - j - 1;
                    if available < flag.arity() {
                        return Err(ResolveError::MissingValue {
                            token: token.clone(),
                            expected: flag.arity(),
                            found: available,
                        });
                    }
                    tracing::trace!(flag = flag.name(), position = j, "skipping flag values in window");
                    j += flag.arity();
                }
            }
            None => counted += 1,
        }
        j += 1;
    }

    Err(ResolveError::UnterminatedParser {
        name: stream[open].clone(),
        position: open,
    })
}

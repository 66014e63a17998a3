//! Value extractor — pulls a matched flag's values out of the token stream.

use crate::args::error::ResolveError;
use crate::args::registry::{Flag, Separator};
use crate::args::syntax::Syntax;

/// Values of one flag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Extracted values, `values.len() == flag.arity()`.
    pub values: Vec<String>,
    /// Index of the last token consumed by the occurrence.
    pub cursor: usize,
}

/// Extract the values of `flag`, whose occurrence sits at `tokens[cursor]`.
///
/// Space-separated flags take the next `arity` tokens verbatim. Inline flags
/// split their own token on the separator and leave the cursor in place, as
/// do zero-arity flags.
pub fn extract(
    syntax: &Syntax,
    flag: &Flag,
    tokens: &[String],
    cursor: usize,
) -> Result<Extracted, ResolveError> {
    let token = &tokens[cursor];
    let arity = flag.arity();

    if arity == 0 {
        return Ok(Extracted {
            values: Vec::new(),
            cursor,
        });
    }

    match flag.separator() {
        Separator::Space => {
            let available = tokens.len() - cursor - 1;
            if available < arity {
                return Err(ResolveError::MissingValue {
                    token: token.clone(),
                    expected: arity,
                    found: available,
                });
            }
            Ok(Extracted {
                values: tokens[cursor + 1..=cursor + arity].to_vec(),
                cursor: cursor + arity,
            })
        }
        Separator::Inline(sep) => {
            let head_len = syntax.flag_indicator().len() + flag.name().len() + sep.len_utf8();
            let segments: Vec<String> = token
                .get(head_len..)
                .map(|rest| rest.split(sep).map(String::from).collect())
                .unwrap_or_default();
            if segments.len() != arity {
                return Err(ResolveError::MalformedValue {
                    token: token.clone(),
                    expected: arity,
                    found: segments.len(),
                });
            }
            Ok(Extracted {
                values: segments,
                cursor,
            })
        }
    }
}

//! Flag dispatcher — raw tokens → flag actions + leftover tokens.

use crate::args::error::ResolveError;
use crate::args::extractor::extract;
use crate::args::registry::Flag;
use crate::args::syntax::Syntax;

/// Dispatch every flag occurrence in `tokens` and return the leftover tokens.
///
/// Tokens without the flag indicator are kept in their original order. An
/// indicator-prefixed token that matches no active flag aborts resolution;
/// this includes a second occurrence of a flag that doesn't allow multiples.
/// Actions already invoked before an error are not undone.
pub fn dispatch(
    syntax: &Syntax,
    flags: &[Flag],
    tokens: &[String],
) -> Result<Vec<String>, ResolveError> {
    // Working copy; the registrations themselves are never touched.
    let mut active: Vec<&Flag> = flags.iter().collect();
    let mut leftover = Vec::new();
    let mut cursor = 0;

    while cursor < tokens.len() {
        let token = &tokens[cursor];

        if !syntax.is_flag_like(token) {
            leftover.push(token.clone());
            cursor += 1;
            continue;
        }

        let Some(idx) = active
            .iter()
            .position(|flag| syntax.flag_matches(flag, token))
        else {
            return Err(ResolveError::UnknownFlag {
                token: token.clone(),
                position: cursor,
            });
        };

        let flag = active[idx];
        let extracted = extract(syntax, flag, tokens, cursor)?;
        if !flag.allows_multiple() {
            active.remove(idx);
        }

        tracing::debug!(
            flag = flag.name(),
            position = cursor,
            values = ?extracted.values,
            "dispatching flag"
        );
        flag.invoke(&extracted.values);

        cursor = extracted.cursor + 1;
    }

    Ok(leftover)
}

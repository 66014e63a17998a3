//! Token resolution engine.
//!
//! Turns an argv-style token stream into flag actions, parser reductions and
//! leftover tokens:
//!
//! ```text
//! Tokens → Reduce parsers (right to left) → Dispatch flags (left to right) → Leftover
//! ```
//!
//! Each stage is a plain function over a token slice and can be unit-tested
//! independently.

mod dispatcher;
mod error;
mod extractor;
mod pipeline;
mod reducer;
mod registry;
mod syntax;

pub use dispatcher::dispatch;
pub use error::ResolveError;
pub use extractor::{extract, Extracted};
pub use pipeline::{resolve, ResolutionContext};
pub use reducer::reduce;
pub use registry::{Flag, FlagAction, Parser, Reducer, RegistrationDefaults, Separator};
pub use syntax::Syntax;

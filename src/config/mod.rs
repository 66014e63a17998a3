//! Configuration file support: syntax, registration defaults and declared
//! flags/parsers.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, FlagConfig, ParserConfig, SyntaxConfig};

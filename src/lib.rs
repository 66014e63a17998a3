//! Command-line token resolution: flags with attached values, and parsers that
//! reduce delimited sub-sequences to a single token.

pub mod args;
pub mod config;
pub mod logging;
pub mod report;

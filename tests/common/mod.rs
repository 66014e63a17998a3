//! Shared test utilities: call recorders and registration helpers.

#![allow(dead_code, unused_imports)]

use argfold::args::{Flag, Parser, Separator};
use parking_lot::Mutex;
use std::sync::Arc;

/// Log of `(name, values)` for every action or reducer invocation.
pub type CallLog = Arc<Mutex<Vec<(String, Vec<String>)>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Snapshot of a log's recorded calls.
pub fn calls(log: &CallLog) -> Vec<(String, Vec<String>)> {
    log.lock().clone()
}

pub fn toks(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

pub fn call(name: &str, values: &[&str]) -> (String, Vec<String>) {
    (name.to_string(), toks(values))
}

/// Flag whose action appends `(name, values)` to `log`.
pub fn recording_flag(name: &str, log: &CallLog) -> Flag {
    let log = Arc::clone(log);
    let key = name.to_string();
    Flag::new(name, move |values: &[String]| {
        log.lock().push((key.clone(), values.to_vec()));
    })
    .expect("valid flag name")
}

/// Space-separated flag with the given arity.
pub fn space_flag(name: &str, arity: usize, log: &CallLog) -> Flag {
    recording_flag(name, log)
        .with_separator(Separator::Space)
        .with_arity(arity)
}

/// Parser that records its window and joins it with `+`.
pub fn joining_parser(name: &str, log: &CallLog) -> Parser {
    let log = Arc::clone(log);
    let key = name.to_string();
    Parser::new(name, move |window: &[String]| {
        log.lock().push((key.clone(), window.to_vec()));
        window.join("+")
    })
    .expect("valid parser name")
}

//! Flat external rendering of a trace result.

use std::fmt;

use super::Trace;
use crate::error::Result;

/// Token printed for every failure kind.
pub const ERROR_TOKEN: &str = "Error";

/// `letters` and `path` on two lines, or `Error` for any failure.
pub fn format_outcome(outcome: &Result<Trace>) -> String {
    match outcome {
        Ok(trace) => trace.to_string(),
        Err(_) => ERROR_TOKEN.to_string(),
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.letters, self.path)
    }
}

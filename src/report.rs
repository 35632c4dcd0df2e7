//! Warning sinks for recoverable parse failures.

use crate::parser::ParseError;
use tracing::warn;

/// Receives per-block parse failures. Parsing continues after each one.
pub trait Reporter {
    fn warn(&mut self, error: &ParseError);
}

/// Forwards warnings to the process-wide `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingReporter {
    count: usize,
}

impl TracingReporter {
    /// Number of warnings reported so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Reporter for TracingReporter {
    fn warn(&mut self, error: &ParseError) {
        self.count += 1;
        warn!("{}", error);
    }
}

/// Collects warnings in memory.
impl Reporter for Vec<ParseError> {
    fn warn(&mut self, error: &ParseError) {
        self.push(error.clone());
    }
}

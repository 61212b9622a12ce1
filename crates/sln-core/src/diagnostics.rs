//! Warning sinks for recoverable problems.
//!
//! Loaders never print. Anything they skip or default is reported through
//! the [`WarningSink`] handed to them, so the transformation itself stays
//! free of hidden I/O.

/// Receives one message per recoverable problem.
pub trait WarningSink {
    fn warn(&mut self, message: String);
}

/// Forwards warnings to `tracing` at WARN level.
#[derive(Debug, Default)]
pub struct TracingSink {
    count: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of warnings emitted so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl WarningSink for TracingSink {
    fn warn(&mut self, message: String) {
        self.count += 1;
        tracing::warn!("{}", message);
    }
}

/// Keeps warnings in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub messages: Vec<String>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WarningSink for CollectingSink {
    fn warn(&mut self, message: String) {
        self.messages.push(message);
    }
}

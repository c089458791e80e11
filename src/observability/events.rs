//! Observable events
//!
//! Every log line names one of these events, covering:
//! - Boot & lifecycle
//! - Configuration
//! - Store state changes
//! - Endpoint sessions
//! - Tokenizer ticks

use std::fmt;

/// Observable events in streambank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Engine startup begins
    BootStart,
    /// Engine startup complete, word logger running
    BootComplete,
    /// Shutdown initiated
    ShutdownStart,
    /// Shutdown complete, store destroyed
    ShutdownComplete,

    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Store
    /// Store emptied (logical reset, chunks freed)
    StoreTrimmed,

    // Endpoint sessions
    /// An endpoint session opened
    EndpointOpened,
    /// An endpoint session released
    EndpointReleased,

    // Tokenizer
    /// A word was extracted and emitted
    WordEmitted,
    /// A tick found the store empty
    TickEmpty,
    /// A tick landed in a hole and was skipped
    TickSkipped,
}

impl Event {
    /// Returns the event name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::BootComplete => "BOOT_COMPLETE",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreTrimmed => "STORE_TRIMMED",
            Event::EndpointOpened => "ENDPOINT_OPENED",
            Event::EndpointReleased => "ENDPOINT_RELEASED",
            Event::WordEmitted => "WORD_EMITTED",
            Event::TickEmpty => "TICK_EMPTY",
            Event::TickSkipped => "TICK_SKIPPED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::BootStart.name(), "BOOT_START");
        assert_eq!(Event::WordEmitted.name(), "WORD_EMITTED");
        assert_eq!(Event::ShutdownComplete.name(), "SHUTDOWN_COMPLETE");
    }

    #[test]
    fn test_event_display_matches_name() {
        assert_eq!(Event::TickEmpty.to_string(), "TICK_EMPTY");
    }
}

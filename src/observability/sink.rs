//! Log-backed word sink

use crate::tokenizer::WordSink;

use super::events::Event;
use super::logger::Logger;

/// Forwards tokenizer output to the structured log, one line per tick.
///
/// Ordering follows tick order; emission never fails the tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWordSink;

impl WordSink for LogWordSink {
    fn emit_word(&self, word: &str) {
        Logger::info(Event::WordEmitted, &[("word", word)]);
    }

    fn emit_diagnostic(&self, message: &str) {
        Logger::info(Event::TickEmpty, &[("message", message)]);
    }
}

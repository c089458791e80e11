//! Word sink contract

/// Receives one line of text per tokenizer tick.
///
/// Calls arrive in tick order. Emission is fire-and-forget: the sink has no
/// way to fail the tick that produced the line.
pub trait WordSink: Send + Sync {
    /// A word extracted from the stream. The trailing space is included
    /// when the word ended at a separator.
    fn emit_word(&self, word: &str);

    /// A diagnostic line, e.g. the empty-store message.
    fn emit_diagnostic(&self, message: &str);
}

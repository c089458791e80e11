//! Word extraction state machine

use crate::storage::ChunkedStore;

/// Diagnostic emitted when a tick finds the store empty.
pub const NO_DATA_MESSAGE: &str = "no data stored in stream";

/// Outcome of a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// A word was extracted and the cursor advanced past the bytes
    /// consumed.
    Word(String),
    /// The store holds no data; the cursor did not move.
    Empty,
    /// The cursor resolved into an absent chunk; nothing was extracted.
    Skipped,
}

/// Extracts one whitespace-delimited word from the store per tick.
///
/// The tokenizer owns no storage. It reads through the store's own
/// offset-addressed read path and moves only the store's cursor. A word is
/// a run of bytes ended by a space or newline; the separator is consumed
/// and replaced by a trailing space in the emitted word. Every
/// non-separator byte counts as word content.
#[derive(Debug, Clone, Copy)]
pub struct WordTokenizer {
    /// Upper bound on the emitted word, separator included. At most
    /// `max_word_len - 1` content bytes are copied per tick.
    max_word_len: usize,
}

impl WordTokenizer {
    /// Create a tokenizer with the given word length bound.
    pub fn new(max_word_len: usize) -> Self {
        Self { max_word_len }
    }

    /// Extract the next word at the store cursor.
    ///
    /// Caller holds the access guard for the full duration. The store's
    /// content is never mutated; only the cursor moves.
    pub fn tick(&self, store: &mut ChunkedStore) -> TickOutcome {
        if store.size() == 0 {
            return TickOutcome::Empty;
        }

        // One byte of the budget is reserved for the separator, so a
        // cursor within one byte of the end can no longer start a word:
        // wrap to the beginning.
        if store.cursor() + 1 >= store.size() {
            store.set_cursor(0);
        }

        let cursor = store.cursor();
        let budget = (self.max_word_len as u64).min(store.size() - cursor) as usize;

        // The read path clips to the chunk remainder and yields nothing
        // for holes.
        let window = store.read_at(cursor, budget);
        if window.is_empty() {
            return TickOutcome::Skipped;
        }

        let mut word: Vec<u8> = Vec::with_capacity(self.max_word_len);
        let mut consumed = 0u64;
        let mut ended = false;

        for &byte in &window[..window.len() - 1] {
            consumed += 1;
            if is_separator(byte) {
                word.push(b' ');
                ended = true;
                break;
            }
            word.push(byte);
        }

        // A separator sitting exactly on the budget boundary still ends
        // the word; a content byte there is left for the next tick,
        // unless it is the only byte in the window, where leaving it
        // would stall the cursor.
        if !ended {
            let last = window[window.len() - 1];
            if is_separator(last) {
                word.push(b' ');
                consumed += 1;
            } else if window.len() == 1 {
                word.push(last);
                consumed += 1;
            }
        }

        store.set_cursor(cursor + consumed);
        TickOutcome::Word(String::from_utf8_lossy(&word).into_owned())
    }
}

fn is_separator(byte: u8) -> bool {
    byte == b' ' || byte == b'\n'
}

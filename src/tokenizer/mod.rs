//! Periodic word extraction
//!
//! The tokenizer walks the store's logical address space one word per tick,
//! handing each word to a sink. It shares the store's offset arithmetic, so
//! it always reads exactly what writers stored.
//!
//! # Design Principles
//!
//! - One word per tick, bounded length
//! - The cursor wraps to the start once the stream is exhausted
//! - The tokenizer moves only the cursor, never stream content
//! - A tick that cannot extract (hole at the cursor) is skipped, not failed

mod extractor;
mod sink;

pub use extractor::{TickOutcome, WordTokenizer, NO_DATA_MESSAGE};
pub use sink::WordSink;

// src/lib.rs
//! Rule-based English tokenizer for social-media text.
//!
//! URLs, e-mail addresses, HTML entities, hashtags, mentions and emoticons
//! come out as single tokens; everything else is split into words, numbers
//! and punctuation with character offsets.

mod chars;
pub mod config;
pub mod decode;
pub mod error;
mod pattern;
mod plain;
mod recognizer;
mod rules;
pub mod token;
pub mod tokenizer;

use lazy_static::lazy_static;
use tracing::error;

pub use config::TokenizerConfig;
pub use decode::{Decoder, Document, InputFormat, DOC_DELIM, DOC_MAX_SIZE};
pub use error::{Result, TokenizerError};
pub use token::{Token, TokenKind, TokenizedText};
pub use tokenizer::{tokenize_batch, EnglishTokenizer, Tokenizer, WhitespaceTokenizer};

lazy_static! {
    static ref DEFAULT_TOKENIZER: Option<EnglishTokenizer> = EnglishTokenizer::new()
        .map_err(|e| error!(error = %e, "default tokenizer unavailable; splitting on whitespace"))
        .ok();
}

/// Tokenizes `text` with the default English rules.
pub fn tokenize(text: &str) -> Vec<String> {
    match DEFAULT_TOKENIZER.as_ref() {
        Some(tokenizer) => tokenizer.tokenize(text),
        None => WhitespaceTokenizer::new().tokenize(text),
    }
}

// src/tokenizer.rs

use rayon::prelude::*;
use tracing::trace;

use crate::chars::{is_delimiter, CharCursor};
use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::plain::split_plain;
use crate::rules::TokenizerRules;
use crate::token::{Token, TokenKind, TokenizedText};

/// Splits text into tokens. Implementations hold no mutable state, so one
/// instance can serve any number of threads.
pub trait Tokenizer: Send + Sync {
    /// Tokens of `text` with character offsets shifted by `offset`.
    fn tokenize_tokens(&self, text: &str, offset: usize) -> Vec<Token>;

    fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenize_tokens(text, 0)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    fn tokenize_with_offsets(&self, text: &str, offset: usize) -> TokenizedText {
        TokenizedText::from(self.tokenize_tokens(text, offset))
    }
}

/// A maximal run of non-delimiter characters.
pub(crate) struct Chunk<'a> {
    pub(crate) text: &'a str,
    /// Character offset of the chunk inside the tokenized text.
    pub(crate) char_offset: usize,
}

pub(crate) fn delimited_chunks(text: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut open: Option<(usize, usize)> = None; // (byte, char) where the chunk started

    for (char_idx, (byte_idx, c)) in text.char_indices().enumerate() {
        if is_delimiter(c) {
            if let Some((byte_start, char_start)) = open.take() {
                chunks.push(Chunk {
                    text: &text[byte_start..byte_idx],
                    char_offset: char_start,
                });
            }
        } else if open.is_none() {
            open = Some((byte_idx, char_idx));
        }
    }
    if let Some((byte_start, char_start)) = open {
        chunks.push(Chunk {
            text: &text[byte_start..],
            char_offset: char_start,
        });
    }
    chunks
}

/// Splits on whitespace only; every chunk is a `Word`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize_tokens(&self, text: &str, offset: usize) -> Vec<Token> {
        delimited_chunks(text)
            .into_iter()
            .map(|chunk| {
                let begin = offset + chunk.char_offset;
                let end = begin + chunk.text.chars().count();
                Token::new(chunk.text, TokenKind::Word, begin, end)
            })
            .collect()
    }
}

/// Rule-based tokenizer for English and social-media text.
///
/// Each whitespace-separated chunk runs through the recognizers in priority
/// order (URL, e-mail, HTML entity, hashtag, mention, named emoticon,
/// emoticon glyph). Text between the matches of one recognizer is handed to
/// the next. Whatever no recognizer claims is split into words, numbers and
/// punctuation.
pub struct EnglishTokenizer {
    rules: TokenizerRules,
}

impl EnglishTokenizer {
    pub fn new() -> Result<Self> {
        Self::with_config(TokenizerConfig::default())
    }

    pub fn with_config(config: TokenizerConfig) -> Result<Self> {
        Ok(EnglishTokenizer {
            rules: TokenizerRules::new(&config)?,
        })
    }

    fn tokenize_chunk(&self, chunk: &str, char_base: usize, out: &mut Vec<Token>) {
        trace!(chunk, char_base, "tokenizing chunk");

        // Whole-chunk abbreviations skip the recognizers ("U.S.", "e.g.").
        if self.rules.is_abbreviation(chunk) {
            let end = char_base + chunk.chars().count();
            out.push(Token::new(chunk, TokenKind::Word, char_base, end));
            return;
        }
        self.split_recognized(chunk, char_base, 0, out);
    }

    fn split_recognized(&self, text: &str, char_base: usize, level: usize, out: &mut Vec<Token>) {
        let Some(recognizer) = self.rules.recognizers.get(level) else {
            split_plain(text, char_base, &self.rules, out);
            return;
        };

        let mut cursor = CharCursor::new(text, char_base);
        let mut last = 0;

        for (start, end) in recognizer.find_spans(text) {
            if start > last {
                let gap_base = cursor.at(last);
                self.split_recognized(&text[last..start], gap_base, level + 1, out);
            }
            let begin = cursor.at(start);
            let finish = cursor.at(end);
            trace!(kind = %recognizer.kind(), token = &text[start..end], "recognized");
            out.push(Token::new(&text[start..end], recognizer.kind(), begin, finish));
            last = end;
        }

        if last < text.len() {
            let rest_base = cursor.at(last);
            self.split_recognized(&text[last..], rest_base, level + 1, out);
        }
    }
}

impl Tokenizer for EnglishTokenizer {
    fn tokenize_tokens(&self, text: &str, offset: usize) -> Vec<Token> {
        let mut tokens = Vec::new();
        for chunk in delimited_chunks(text) {
            self.tokenize_chunk(chunk.text, offset + chunk.char_offset, &mut tokens);
        }
        tokens
    }
}

/// Tokenizes every input in parallel; results keep the input order.
pub fn tokenize_batch<T, S>(tokenizer: &T, texts: &[S]) -> Vec<Vec<String>>
where
    T: Tokenizer + ?Sized,
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| tokenizer.tokenize(text.as_ref()))
        .collect()
}

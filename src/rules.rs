// src/rules.rs

use std::collections::HashSet;

use tracing::debug;

use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::pattern::{self, ABBREVIATIONS};
use crate::recognizer::Recognizer;
use crate::token::TokenKind;

/// Compiled rule set. Immutable after construction, shared between threads.
pub(crate) struct TokenizerRules {
    /// Tried in order; earlier recognizers win overlaps.
    pub(crate) recognizers: Vec<Recognizer>,
    abbreviations: Option<Abbreviations>,
}

struct Abbreviations {
    extra: HashSet<String>,
    shape: regex::Regex,
}

impl TokenizerRules {
    pub(crate) fn new(config: &TokenizerConfig) -> Result<Self> {
        let mut recognizers = Vec::new();

        if config.is_enabled(TokenKind::Url) {
            recognizers.push(Recognizer::pattern(TokenKind::Url, pattern::URL_PATTERN)?);
        }
        if config.is_enabled(TokenKind::Email) {
            recognizers.push(Recognizer::pattern(TokenKind::Email, pattern::EMAIL_PATTERN)?);
        }
        if config.is_enabled(TokenKind::Entity) {
            recognizers.push(Recognizer::literal(TokenKind::Entity, pattern::HTML_ENTITY_PATTERN)?);
        }
        if config.is_enabled(TokenKind::Hashtag) {
            recognizers.push(Recognizer::pattern(TokenKind::Hashtag, pattern::HASHTAG_PATTERN)?);
        }
        if config.is_enabled(TokenKind::Mention) {
            recognizers.push(Recognizer::pattern(TokenKind::Mention, pattern::MENTION_PATTERN)?);
        }
        if config.is_enabled(TokenKind::Emoticon) {
            recognizers.push(Recognizer::literal(TokenKind::Emoticon, pattern::NAMED_EMOTICON_PATTERN)?);
            let glyphs = pattern::emoticon_literals(&config.extra_emoticons);
            recognizers.push(Recognizer::glyphs(TokenKind::Emoticon, &glyphs)?);
        }

        let abbreviations = if config.abbreviations {
            Some(Abbreviations {
                extra: config.extra_abbreviations.iter().cloned().collect(),
                shape: regex::Regex::new(pattern::ABBREVIATION_SHAPE_PATTERN)?,
            })
        } else {
            None
        };

        for recognizer in &recognizers {
            debug!(rule = %recognizer.describe(), "loaded recognizer");
        }
        debug!(
            recognizers = recognizers.len(),
            abbreviations = abbreviations.is_some(),
            "tokenizer rules initialized"
        );

        Ok(TokenizerRules {
            recognizers,
            abbreviations,
        })
    }

    /// Whether `text` (period included) is kept whole as an abbreviation.
    pub(crate) fn is_abbreviation(&self, text: &str) -> bool {
        match &self.abbreviations {
            None => false,
            Some(abbr) => {
                ABBREVIATIONS.contains(text) || abbr.extra.contains(text) || abbr.shape.is_match(text)
            }
        }
    }
}

// src/config.rs
// Tokenizer switches. Every recognizer is on by default.

use crate::error::{Result, TokenizerError};
use crate::token::TokenKind;

#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerConfig {
    /// `scheme://...`, `mailto:...` and `www....` stay whole.
    pub urls: bool,
    /// `local@domain` and `user:password@host` stay whole.
    pub emails: bool,
    /// `&name;`, `&#123;` and `&#x1F;` character references.
    pub entities: bool,
    pub hashtags: bool,
    pub mentions: bool,
    /// Glyph emoticons (`:-)`) and named ones (`:smile:`).
    pub emoticons: bool,
    /// Keep the period on known abbreviations (`Dr.`, `U.S.`).
    pub abbreviations: bool,

    pub extra_emoticons: Vec<String>,
    pub extra_abbreviations: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            urls: true,
            emails: true,
            entities: true,
            hashtags: true,
            mentions: true,
            emoticons: true,
            abbreviations: true,
            extra_emoticons: Vec::new(),
            extra_abbreviations: Vec::new(),
        }
    }
}

impl TokenizerConfig {
    /// Turns the recognizer producing `kind` on or off.
    ///
    /// Plain-text kinds (`word`, `number`, `punctuation`, `symbol`) are the
    /// fallback and cannot be disabled.
    pub fn set_enabled(&mut self, kind: TokenKind, enabled: bool) -> Result<()> {
        let flag = match kind {
            TokenKind::Url => &mut self.urls,
            TokenKind::Email => &mut self.emails,
            TokenKind::Entity => &mut self.entities,
            TokenKind::Hashtag => &mut self.hashtags,
            TokenKind::Mention => &mut self.mentions,
            TokenKind::Emoticon => &mut self.emoticons,
            TokenKind::Word | TokenKind::Number | TokenKind::Punctuation | TokenKind::Symbol => {
                return Err(TokenizerError::NotConfigurable(kind));
            }
        };
        *flag = enabled;
        Ok(())
    }

    /// Applies a comma-separated list of kind names, e.g. `"url,hashtag"`.
    pub fn disable_list(&mut self, list: &str) -> Result<()> {
        for name in list.split(',').filter(|s| !s.trim().is_empty()) {
            let kind: TokenKind = name.parse()?;
            self.set_enabled(kind, false)?;
        }
        Ok(())
    }

    pub fn is_enabled(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Url => self.urls,
            TokenKind::Email => self.emails,
            TokenKind::Entity => self.entities,
            TokenKind::Hashtag => self.hashtags,
            TokenKind::Mention => self.mentions,
            TokenKind::Emoticon => self.emoticons,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_everything() {
        let config = TokenizerConfig::default();
        assert!(config.urls && config.emails && config.entities);
        assert!(config.hashtags && config.mentions && config.emoticons);
        assert!(config.abbreviations);
    }

    #[test]
    fn disable_list_switches_off_named_kinds() {
        let mut config = TokenizerConfig::default();
        config.disable_list("hashtag, Mention").unwrap();
        assert!(!config.hashtags);
        assert!(!config.mentions);
        assert!(!config.is_enabled(TokenKind::Hashtag));
        assert!(config.is_enabled(TokenKind::Url));
        assert!(config.is_enabled(TokenKind::Word));
    }

    #[test]
    fn plain_kinds_are_not_configurable() {
        let mut config = TokenizerConfig::default();
        assert!(matches!(
            config.set_enabled(TokenKind::Word, false),
            Err(TokenizerError::NotConfigurable(TokenKind::Word))
        ));
        assert!(matches!(
            config.disable_list("url,bogus"),
            Err(TokenizerError::UnknownKind(_))
        ));
    }
}

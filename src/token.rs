// src/token.rs

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TokenizerError;

/// Lexical category a token was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Url,
    Email,
    Entity,
    Hashtag,
    Mention,
    Emoticon,
    Word,
    Number,
    Punctuation,
    Symbol,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Url => "url",
            TokenKind::Email => "email",
            TokenKind::Entity => "entity",
            TokenKind::Hashtag => "hashtag",
            TokenKind::Mention => "mention",
            TokenKind::Emoticon => "emoticon",
            TokenKind::Word => "word",
            TokenKind::Number => "number",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "url" => Ok(TokenKind::Url),
            "email" => Ok(TokenKind::Email),
            "entity" => Ok(TokenKind::Entity),
            "hashtag" => Ok(TokenKind::Hashtag),
            "mention" => Ok(TokenKind::Mention),
            "emoticon" => Ok(TokenKind::Emoticon),
            "word" => Ok(TokenKind::Word),
            "number" => Ok(TokenKind::Number),
            "punctuation" => Ok(TokenKind::Punctuation),
            "symbol" => Ok(TokenKind::Symbol),
            _ => Err(TokenizerError::UnknownKind(s.to_string())),
        }
    }
}

/// A token with its character span in the tokenized text.
///
/// `begin` and `end` count Unicode scalar values (not bytes), end exclusive,
/// and include the base offset the caller passed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub begin: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: &str, kind: TokenKind, begin: usize, end: usize) -> Self {
        Token {
            text: text.to_string(),
            kind,
            begin,
            end,
        }
    }

    pub fn span(&self) -> (usize, usize) {
        (self.begin, self.end)
    }
}

/// Tokens of one text plus their offsets, as written by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenizedText {
    pub tokens: Vec<String>,
    pub offsets: Vec<(usize, usize)>,
}

impl TokenizedText {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl From<Vec<Token>> for TokenizedText {
    fn from(tokens: Vec<Token>) -> Self {
        let mut out = TokenizedText {
            tokens: Vec::with_capacity(tokens.len()),
            offsets: Vec::with_capacity(tokens.len()),
        };
        for token in tokens {
            out.offsets.push(token.span());
            out.tokens.push(token.text);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip_through_from_str() {
        for kind in [TokenKind::Url, TokenKind::Hashtag, TokenKind::Symbol] {
            assert_eq!(kind.as_str().parse::<TokenKind>().unwrap(), kind);
        }
        assert_eq!(" Mention ".parse::<TokenKind>().unwrap(), TokenKind::Mention);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        match "smiley".parse::<TokenKind>() {
            Err(TokenizerError::UnknownKind(name)) => assert_eq!(name, "smiley"),
            other => panic!("expected UnknownKind, got {:?}", other),
        }
    }

    #[test]
    fn tokenized_text_splits_tokens_and_offsets() {
        let tokens = vec![
            Token::new("Hi", TokenKind::Word, 0, 2),
            Token::new("!", TokenKind::Punctuation, 2, 3),
        ];
        let text = TokenizedText::from(tokens);
        assert_eq!(text.tokens, vec!["Hi", "!"]);
        assert_eq!(text.offsets, vec![(0, 2), (2, 3)]);
        assert_eq!(text.len(), 2);
        assert!(TokenizedText::default().is_empty());
    }

    #[test]
    fn tokenized_text_serializes_offsets_as_pairs() {
        let text = TokenizedText {
            tokens: vec!["a".to_string()],
            offsets: vec![(4, 5)],
        };
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, r#"{"tokens":["a"],"offsets":[[4,5]]}"#);
    }
}

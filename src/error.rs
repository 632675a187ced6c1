// src/error.rs

use thiserror::Error;

use crate::token::TokenKind;

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] fancy_regex::Error),

    #[error("failed to compile regex: {0}")]
    Regex(#[from] regex::Error),

    #[error("failed to build emoticon matcher: {0}")]
    Glyphs(#[from] aho_corasick::BuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to configure thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("unknown input format '{0}' (expected 'raw' or 'line')")]
    UnknownFormat(String),

    #[error("unknown token kind '{0}'")]
    UnknownKind(String),

    #[error("token kind '{0}' cannot be switched off")]
    NotConfigurable(TokenKind),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, TokenizerError>;

// src/decode.rs
// Streams text into documents and writes their tokens as JSON.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{Result, TokenizerError};
use crate::token::TokenizedText;
use crate::tokenizer::Tokenizer;

/// A line holding only this marker ends the current document.
pub const DOC_DELIM: &str = "@#DOC$%";

/// Maximum characters per document; lines past the limit are dropped.
pub const DOC_MAX_SIZE: usize = 10_485_760;

pub type Document = Vec<TokenizedText>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// The whole document is one text.
    Raw,
    /// Every line is tokenized on its own.
    #[default]
    Line,
}

impl FromStr for InputFormat {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(InputFormat::Raw),
            "line" => Ok(InputFormat::Line),
            _ => Err(TokenizerError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Raw => f.write_str("raw"),
            InputFormat::Line => f.write_str("line"),
        }
    }
}

pub struct Decoder {
    tokenizer: Box<dyn Tokenizer>,
    format: InputFormat,
    max_size: usize,
}

impl Decoder {
    pub fn new(tokenizer: Box<dyn Tokenizer>, format: InputFormat) -> Self {
        Decoder {
            tokenizer,
            format,
            max_size: DOC_MAX_SIZE,
        }
    }

    /// Overrides the per-document character limit.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    /// Decodes every document in `reader`.
    pub fn decode<R: BufRead>(&self, reader: R) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        self.for_each_document(reader, |document| {
            documents.push(document);
            Ok(())
        })?;
        Ok(documents)
    }

    /// Writes the documents of `reader` to `writer` as one JSON array,
    /// a document at a time. Returns the number of documents written.
    pub fn decode_to_writer<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<usize> {
        writer.write_all(b"[")?;
        let mut first = true;
        let count = self.for_each_document(reader, |document| {
            if !first {
                writer.write_all(b",")?;
            }
            first = false;
            serde_json::to_writer(&mut writer, &document)?;
            Ok(())
        })?;
        writer.write_all(b"]\n")?;
        writer.flush()?;
        Ok(count)
    }

    fn for_each_document<R, F>(&self, mut reader: R, mut emit: F) -> Result<usize>
    where
        R: BufRead,
        F: FnMut(Document) -> Result<()>,
    {
        let mut lines: Vec<(usize, String)> = Vec::new(); // (char offset in document, line)
        let mut size = 0;
        let mut count = 0;
        let mut buf = String::new();

        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }

            if buf.trim() == DOC_DELIM {
                emit(self.build_document(&lines))?;
                count += 1;
                lines.clear();
                size = 0;
                continue;
            }

            let len = buf.chars().count();
            if size + len <= self.max_size {
                lines.push((size, buf.clone()));
                size += len;
            } else {
                warn!(document = count, line_chars = len, limit = self.max_size, "document size limit reached; line dropped");
            }
        }

        if !lines.is_empty() {
            emit(self.build_document(&lines))?;
            count += 1;
        }
        debug!(documents = count, format = %self.format, "decoding finished");
        Ok(count)
    }

    fn build_document(&self, lines: &[(usize, String)]) -> Document {
        match self.format {
            InputFormat::Raw => {
                let text: String = lines.iter().map(|(_, line)| line.as_str()).collect();
                vec![self.tokenizer.tokenize_with_offsets(&text, 0)]
            }
            InputFormat::Line => lines
                .par_iter()
                .map(|(offset, line)| self.tokenizer.tokenize_with_offsets(line, *offset))
                .filter(|text| !text.is_empty())
                .collect(),
        }
    }
}

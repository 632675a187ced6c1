// src/plain.rs
// Fallback splitting for text no recognizer claimed: words, numbers and runs
// of punctuation, working on grapheme clusters so combining marks and emoji
// sequences stay intact.

use unicode_segmentation::UnicodeSegmentation;

use crate::chars::{is_connector, is_final_mark, is_symbol, is_word_char, lead, CharCursor};
use crate::rules::TokenizerRules;
use crate::token::{Token, TokenKind};

pub(crate) fn split_plain(text: &str, char_base: usize, rules: &TokenizerRules, out: &mut Vec<Token>) {
    let graphemes: Vec<(usize, &str)> = text.grapheme_indices(true).collect();
    let mut cursor = CharCursor::new(text, char_base);
    let mut i = 0;

    while i < graphemes.len() {
        let (next, kind) = if is_word_grapheme(graphemes[i].1) {
            scan_word(text, &graphemes, i, rules)
        } else {
            scan_marks(&graphemes, i)
        };

        let start = graphemes[i].0;
        let end = graphemes.get(next).map_or(text.len(), |(b, _)| *b);
        let begin = cursor.at(start);
        let finish = cursor.at(end);
        out.push(Token::new(&text[start..end], kind, begin, finish));
        i = next;
    }
}

#[inline]
fn is_word_grapheme(g: &str) -> bool {
    is_word_char(lead(g))
}

#[inline]
fn is_numeric_grapheme(g: &str) -> bool {
    lead(g).is_numeric()
}

/// A connector between `graphemes[j - 1]` and `graphemes[j + 1]` that keeps
/// the word together. Commas only join digits (`1,000`).
fn joins(graphemes: &[(usize, &str)], j: usize) -> bool {
    let Some(&(_, next)) = graphemes.get(j + 1) else {
        return false;
    };
    if !is_word_grapheme(next) {
        return false;
    }
    let mut chars = graphemes[j].1.chars();
    match (chars.next(), chars.next()) {
        (Some(','), None) => j > 0 && is_numeric_grapheme(graphemes[j - 1].1) && is_numeric_grapheme(next),
        (Some(c), None) => is_connector(c),
        _ => false,
    }
}

/// Scans a word starting at `i`; returns the index after it and its kind.
fn scan_word(text: &str, graphemes: &[(usize, &str)], i: usize, rules: &TokenizerRules) -> (usize, TokenKind) {
    let mut numeric = is_numeric_grapheme(graphemes[i].1);
    let mut j = i + 1;

    loop {
        match graphemes.get(j) {
            Some(&(_, g)) if is_word_grapheme(g) => {
                numeric &= is_numeric_grapheme(g);
                j += 1;
            }
            Some(_) if joins(graphemes, j) => {
                numeric &= is_numeric_grapheme(graphemes[j + 1].1);
                j += 2;
            }
            _ => break,
        }
    }

    // "Dr" + "." -> "Dr."
    if let Some(&(dot, ".")) = graphemes.get(j) {
        let end = dot + 1;
        if rules.is_abbreviation(&text[graphemes[i].0..end]) {
            return (j + 1, TokenKind::Word);
        }
    }

    let kind = if numeric { TokenKind::Number } else { TokenKind::Word };
    (j, kind)
}

/// Scans punctuation/symbols starting at `i`: a run of final marks, or a run
/// of one repeated grapheme.
fn scan_marks(graphemes: &[(usize, &str)], i: usize) -> (usize, TokenKind) {
    let first = graphemes[i].1;
    let final_run = is_final_mark(lead(first));
    let mut j = i + 1;

    while let Some(&(_, g)) = graphemes.get(j) {
        let same_run = if final_run { is_final_mark(lead(g)) } else { g == first };
        if !same_run {
            break;
        }
        j += 1;
    }

    let kind = if is_symbol(lead(first)) {
        TokenKind::Symbol
    } else {
        TokenKind::Punctuation
    };
    (j, kind)
}

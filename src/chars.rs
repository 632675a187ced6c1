// src/chars.rs
// Character classes shared by the recognizers and the plain-text splitter.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Characters that separate chunks and never appear in a token.
#[inline]
pub(crate) fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c.is_control() || c == '\u{200b}' || c == '\u{feff}'
}

/// Letters, digits, combining marks and connector punctuation (`_`).
pub(crate) fn is_word_char(c: char) -> bool {
    if c.is_alphanumeric() {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
    )
}

pub(crate) fn is_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Sentence-final marks; a run of these is kept as one token.
#[inline]
pub(crate) fn is_final_mark(c: char) -> bool {
    matches!(
        c,
        '.' | '!' | '?' | '…' | '‼' | '⁇' | '⁈' | '⁉' | '‽' | '。' | '！' | '？'
    )
}

/// Punctuation that may sit between two word characters without splitting
/// the word (`e.g`, `10:30`, `state-of-the-art`, `AT&T`).
#[inline]
pub(crate) fn is_connector(c: char) -> bool {
    matches!(c, '.' | ':' | '\'' | '’' | '-' | '‐' | '/' | '&' | '@')
}

/// First character of a grapheme cluster.
#[inline]
pub(crate) fn lead(grapheme: &str) -> char {
    grapheme.chars().next().unwrap_or(' ')
}

/// True when the character right before `byte` is part of a word.
pub(crate) fn continues_word_before(text: &str, byte: usize) -> bool {
    text[..byte].chars().next_back().is_some_and(is_word_char)
}

/// True when the character at `byte` is part of a word.
pub(crate) fn continues_word_after(text: &str, byte: usize) -> bool {
    text[byte..].chars().next().is_some_and(is_word_char)
}

/// Converts increasing byte positions in `text` into character offsets.
pub(crate) struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    pub(crate) fn new(text: &'a str, base: usize) -> Self {
        CharCursor {
            text,
            byte: 0,
            chars: base,
        }
    }

    /// Character offset of `byte`; positions must not go backwards.
    pub(crate) fn at(&mut self, byte: usize) -> usize {
        debug_assert!(byte >= self.byte, "CharCursor moved backwards");
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_cover_whitespace_and_controls() {
        for c in [' ', '\t', '\n', '\r', '\u{a0}', '\u{0}', '\u{200b}', '\u{feff}'] {
            assert!(is_delimiter(c), "{:?} should be a delimiter", c);
        }
        assert!(!is_delimiter('a'));
        assert!(!is_delimiter('\u{200d}'));
    }

    #[test]
    fn word_chars_include_marks_and_underscore() {
        assert!(is_word_char('a'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(is_word_char('\u{301}'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('😊'));
    }

    #[test]
    fn symbols_and_punctuation_are_distinguished() {
        assert!(is_symbol('$'));
        assert!(is_symbol('+'));
        assert!(is_symbol('😊'));
        assert!(!is_symbol('!'));
        assert!(!is_symbol(','));
    }

    #[test]
    fn glyph_neighbours() {
        assert!(continues_word_before("boxD", 3));
        assert!(continues_word_before("_xD", 1));
        assert!(!continues_word_before("1.0", 2));
        assert!(!continues_word_before("A:D", 1));
        assert!(!continues_word_before(" xD", 1));
        assert!(continues_word_after("10:30", 4));
        assert!(!continues_word_after(":D,thanks", 2));
        assert!(!continues_word_after(":3:p", 2));
        assert!(!continues_word_after("<3", 2));
    }

    #[test]
    fn cursor_counts_characters_not_bytes() {
        let text = "héllo wörld";
        let mut cursor = CharCursor::new(text, 10);
        assert_eq!(cursor.at(0), 10);
        assert_eq!(cursor.at(6), 15);
        assert_eq!(cursor.at(text.len()), 21);
    }
}

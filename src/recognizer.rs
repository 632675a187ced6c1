// src/recognizer.rs

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, Input, MatchKind};
use tracing::warn;

use crate::chars::{continues_word_after, continues_word_before};
use crate::error::Result;
use crate::token::TokenKind;

enum Matcher {
    /// Patterns with look-around (fancy-regex backtracking engine).
    Pattern(fancy_regex::Regex),
    /// Plain patterns (finite automaton, no runtime failure).
    Literal(regex::Regex),
    /// Emoticon glyph list.
    Glyphs(AhoCorasick),
}

/// One lexical category and the matcher that finds it.
pub(crate) struct Recognizer {
    kind: TokenKind,
    matcher: Matcher,
}

impl Recognizer {
    pub(crate) fn pattern(kind: TokenKind, pattern: &str) -> Result<Self> {
        Ok(Recognizer {
            kind,
            matcher: Matcher::Pattern(fancy_regex::Regex::new(pattern)?),
        })
    }

    pub(crate) fn literal(kind: TokenKind, pattern: &str) -> Result<Self> {
        Ok(Recognizer {
            kind,
            matcher: Matcher::Literal(regex::Regex::new(pattern)?),
        })
    }

    pub(crate) fn glyphs(kind: TokenKind, glyphs: &[String]) -> Result<Self> {
        // `glyphs` is sorted longest first, so LeftmostFirst prefers the
        // longest glyph among those starting at the same position.
        let matcher = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostFirst)
            .build(glyphs)?;
        Ok(Recognizer {
            kind,
            matcher: Matcher::Glyphs(matcher),
        })
    }

    pub(crate) fn kind(&self) -> TokenKind {
        self.kind
    }

    pub(crate) fn describe(&self) -> String {
        match &self.matcher {
            Matcher::Pattern(re) => format!("{} pattern /{}/", self.kind, re.as_str()),
            Matcher::Literal(re) => format!("{} regex /{}/", self.kind, re.as_str()),
            Matcher::Glyphs(ac) => format!("{} glyphs ({} literals)", self.kind, ac.patterns_len()),
        }
    }

    /// Non-overlapping, non-empty byte spans of every match in `text`, left
    /// to right.
    pub(crate) fn find_spans(&self, text: &str) -> Vec<(usize, usize)> {
        match &self.matcher {
            Matcher::Pattern(re) => {
                let mut spans = Vec::new();
                for found in re.find_iter(text) {
                    match found {
                        Ok(mat) if mat.start() < mat.end() => spans.push((mat.start(), mat.end())),
                        Ok(_) => {}
                        Err(e) => {
                            // Backtrack limit: leave the rest of the segment to
                            // the lower-priority rules.
                            warn!(kind = %self.kind, error = %e, segment = text, "pattern search aborted");
                            break;
                        }
                    }
                }
                spans
            }
            Matcher::Literal(re) => re
                .find_iter(text)
                .filter(|mat| mat.start() < mat.end())
                .map(|mat| (mat.start(), mat.end()))
                .collect(),
            Matcher::Glyphs(ac) => glyph_spans(ac, text),
        }
    }
}

/// Emoticon glyphs that stand on their own: a glyph starting (ending) with a
/// letter or digit is skipped when the character before (after) it is a word
/// character, so `boxDrive` keeps its `xD` and `10:30` has no `:3`. Only the
/// direct neighbour is looked at.
fn glyph_spans(ac: &AhoCorasick, text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(mat) = ac.find(Input::new(text).range(pos..)) else {
            break;
        };
        let (start, end) = (mat.start(), mat.end());
        let glyph = &text[start..end];

        let glued_left = glyph.chars().next().is_some_and(|c| c.is_alphanumeric())
            && continues_word_before(text, start);
        let glued_right = glyph.chars().next_back().is_some_and(|c| c.is_alphanumeric())
            && continues_word_after(text, end);

        if glued_left || glued_right {
            // Retry one character further on.
            pos = start + glyph.chars().next().map_or(1, char::len_utf8);
        } else {
            spans.push((start, end));
            pos = end;
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern;

    fn glyph_recognizer() -> Recognizer {
        Recognizer::glyphs(TokenKind::Emoticon, &pattern::emoticon_literals(&[])).unwrap()
    }

    fn found<'a>(recognizer: &Recognizer, text: &'a str) -> Vec<&'a str> {
        recognizer
            .find_spans(text)
            .into_iter()
            .map(|(s, e)| &text[s..e])
            .collect()
    }

    #[test]
    fn glyphs_split_from_adjacent_words() {
        let r = glyph_recognizer();
        assert_eq!(found(&r, "A:-("), vec![":-("]);
        assert_eq!(found(&r, "C:):(!"), vec![":)", ":("]);
        assert_eq!(found(&r, ":).,"), vec![":)"]);
    }

    #[test]
    fn longest_glyph_wins() {
        let r = glyph_recognizer();
        assert_eq!(found(&r, ":-)))"), vec![":-)))"]);
        assert_eq!(found(&r, "<333"), vec!["<333"]);
    }

    #[test]
    fn alphanumeric_glyphs_need_a_boundary() {
        let r = glyph_recognizer();
        assert!(found(&r, "boxDrive").is_empty());
        assert!(found(&r, "10:30").is_empty());
        assert_eq!(found(&r, "lol xD"), vec!["xD"]);
        assert_eq!(found(&r, "A:D"), vec![":D"]);
        assert_eq!(found(&r, "I<3NY"), Vec::<&str>::new());
    }

    #[test]
    fn punctuation_after_a_glyph_does_not_glue_it() {
        let r = glyph_recognizer();
        assert_eq!(found(&r, "great:D,thanks"), vec![":D"]);
        assert_eq!(found(&r, "aa:D,o"), vec![":D"]);
        assert_eq!(found(&r, "é:3:p"), vec![":3", ":p"]);
        assert_eq!(found(&r, "a.xD"), vec!["xD"]);
        assert!(found(&r, "a:Db").is_empty());
    }

    #[test]
    fn named_emoticons_are_found_back_to_back() {
        let r = Recognizer::literal(TokenKind::Emoticon, pattern::NAMED_EMOTICON_PATTERN).unwrap();
        assert_eq!(found(&r, "B:smile::sad:"), vec![":smile:", ":sad:"]);
        assert!(found(&r, "jinho:choi").is_empty());
    }

    #[test]
    fn pattern_recognizer_reports_every_match() {
        let r = Recognizer::pattern(TokenKind::Email, pattern::EMAIL_PATTERN).unwrap();
        let text = "jinho@elit.com,jinho.choi@elit.com,choi@elit.emory.edu,jinho:choi@0.0.0.0";
        assert_eq!(
            found(&r, text),
            vec!["jinho@elit.com", "jinho.choi@elit.com", "choi@elit.emory.edu", "jinho:choi@0.0.0.0"]
        );
    }

    #[test]
    fn hashtags_and_mentions_need_a_free_left_edge() {
        let tags = Recognizer::pattern(TokenKind::Hashtag, pattern::HASHTAG_PATTERN).unwrap();
        let mentions = Recognizer::pattern(TokenKind::Mention, pattern::MENTION_PATTERN).unwrap();
        assert_eq!(found(&tags, "#happy2018,@Jinho_Choi:"), vec!["#happy2018"]);
        assert_eq!(found(&mentions, ",@Jinho_Choi:"), vec!["@Jinho_Choi"]);
        assert!(found(&tags, "C#").is_empty());
        assert!(found(&mentions, "@_@").is_empty());
    }
}

//! Answer text normalization.
//!
//! Gold and predicted answers go through the same pipeline so they compare fairly:
//! lowercase, drop ASCII punctuation, drop the English articles `a`/`an`/`the`
//! as whole words, then collapse whitespace.
//!
//! **Punctuation scope:** only the ASCII punctuation set is removed. Full-width and
//! CJK punctuation (`。`, `、`, `「」`) survives normalization, so answers in those
//! scripts keep their native punctuation attached to tokens.
//!
//! **Step order:** punctuation is stripped before articles. `"don't"` becomes
//! `"dont"` first, and a fragment such as `"a-"` only turns into a standalone `"a"`
//! after its punctuation is gone.
//!
//! **Word boundaries:** articles are matched with the `regex` crate's Unicode `\b`,
//! whose word class is Alphabetic, marks (M), decimal digits (Nd) and connector
//! punctuation. Two consequences: `"aé"` is one word, so its `a` stays; combining
//! marks (Mn) count as word characters, so a decomposed `"a\u{301}"` keeps its `a`
//! too. Other numerics (No, e.g. `²`) are not word characters, so the `a` in
//! `"a²"` is a standalone article and is dropped. Python's `re` word class is the
//! opposite on both of those categories.
//!
//! **Whitespace:** tokens split on Unicode whitespace plus the ASCII information
//! separators U+001C..=U+001F, the same set `str.split()` uses.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Whole-word English articles (Unicode word boundaries).
    static ref ARTICLES: Regex = Regex::new(r"\b(a|an|the)\b").unwrap();
}

/// Canonical comparable form of an answer string.
pub fn normalize(s: &str) -> String {
    white_space_fix(&remove_articles(&remove_punc(&s.to_lowercase())))
}

/// Tokens of the normalized answer, order and duplicates preserved.
pub fn tokenize(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    normalize(s)
        .split(is_space)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn remove_punc(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

fn remove_articles(text: &str) -> String {
    ARTICLES.replace_all(text, " ").into_owned()
}

fn white_space_fix(text: &str) -> String {
    text.split(is_space)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello world");
    }

    #[test]
    fn strips_articles_as_whole_words_only() {
        assert_eq!(normalize("the cat sat on the mat"), "cat sat on mat");
        assert_eq!(normalize("A cat and AN owl"), "cat and owl");
        // substrings of longer words are untouched
        assert_eq!(normalize("than canto theme another"), "than canto theme another");
    }

    #[test]
    fn punctuation_goes_before_articles() {
        // "don't" merges into one word, "a-" becomes a bare article
        assert_eq!(normalize("don't a-b"), "dont ab");
        assert_eq!(normalize("x (a) y"), "x y");
        assert_eq!(normalize("the.end"), "theend");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  lots \t of\n\nspace  "), "lots of space");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn keeps_non_ascii_punctuation() {
        assert_eq!(
            normalize("まんがでも文字でも、よい方法だ。"),
            "まんがでも文字でも、よい方法だ。"
        );
        assert_eq!(normalize("Ünïcode, ÉTÉ!"), "ünïcode été");
    }

    #[test]
    fn unicode_neighbours_are_word_characters() {
        // "aé" is one word, so its leading "a" is not an article
        assert_eq!(normalize("aé a"), "aé");
    }

    #[test]
    fn marks_and_other_numerics_at_article_boundaries() {
        // Mn joins the word, No does not
        assert_eq!(normalize("a\u{301} b"), "a\u{301} b");
        assert_eq!(normalize("a²"), "²");
        assert_eq!(tokenize("x a² y"), vec!["x", "²", "y"]);
    }

    #[test]
    fn information_separators_are_whitespace() {
        assert_eq!(normalize("cat\x1fdog"), "cat dog");
        assert_eq!(tokenize("cat\x1cdog\x1d\x1eowl"), vec!["cat", "dog", "owl"]);
        assert!(tokenize("\x1f\x1f").is_empty());
    }

    #[test]
    fn tokenize_preserves_order_and_duplicates() {
        assert_eq!(
            tokenize("The dog, the DOG and a cat."),
            vec!["dog", "dog", "and", "cat"]
        );
    }

    #[test]
    fn tokenize_empty_inputs() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ").is_empty());
        assert!(tokenize("the a an ...").is_empty());
    }
}

//! Highlight overlays.
//!
//! Both modes work by the same primitive: split the text on a word, wrap
//! every segment in the base paint, and rejoin with the word wrapped in the
//! highlight paint. Words apply sequentially in list order, each pass
//! operating on the previous pass's output, so a word that is a substring of
//! an earlier word may no longer match the working copy (first-applied wins).

use crate::theme::Paint;
use itertools::Itertools;

/// how a list of highlight words combines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightMode {
    /// mark any occurrence of any listed word
    Or,
    /// mark only if every listed word is present; otherwise no marks at all
    And,
}

impl HighlightMode {
    /// flag value → mode; anything unrecognized falls back to Or
    pub fn from_flag(value: &str) -> Self {
        match value {
            "and" => Self::And,
            "or" => Self::Or,
            _ => Self::Or,
        }
    }
}

pub fn apply(mode: HighlightMode, text: &str, words: &[String], base: Paint, mark: Paint) -> String {
    match mode {
        HighlightMode::Or => apply_or(text, words, base, mark),
        HighlightMode::And => apply_and(text, words, base, mark),
    }
}

/// mark every occurrence of every word, in list order
pub fn apply_or(text: &str, words: &[String], base: Paint, mark: Paint) -> String {
    if words.is_empty() {
        return base.wrap(text);
    }
    let mut text = text.to_owned();
    for word in words {
        text = mark_word(&text, word, base, mark);
    }
    text
}

/// mark words only when all of them occur in the text; otherwise the whole
/// text gets the plain base wrap
pub fn apply_and(text: &str, words: &[String], base: Paint, mark: Paint) -> String {
    let mut missing = words.len();
    if missing == 0 {
        return base.wrap(text);
    }
    if missing == 1 {
        return apply_or(text, words, base, mark);
    }
    let mut marked = text.to_owned();
    for word in words {
        // presence is judged against the original text, not the working
        // copy: an earlier pass may have already split this word
        if text.contains(word.as_str()) {
            marked = mark_word(&marked, word, base, mark);
            missing -= 1;
        }
    }
    if missing == 0 { marked } else { base.wrap(text) }
}

fn mark_word(text: &str, word: &str, base: Paint, mark: Paint) -> String {
    text.split(word)
        .map(|segment| base.wrap(segment))
        .join(&mark.wrap(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use crossterm::style::force_color_output;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|word| word.to_string()).collect()
    }

    fn base() -> Paint {
        theme::base_paint("INFO")
    }

    fn mark() -> Paint {
        theme::highlight_paint()
    }

    #[test]
    fn test_or_empty_list_wraps_whole_text_in_base() {
        force_color_output(true);
        let out = apply_or("foo bar", &[], base(), mark());
        assert_eq!(out, base().wrap("foo bar"));
        assert!(!out.contains(&mark().wrap("foo")));
    }

    #[test]
    fn test_or_marks_every_occurrence() {
        force_color_output(true);
        let out = apply_or("foo bar foo", &words(&["foo"]), base(), mark());
        let expected = format!(
            "{}{}{}{}{}",
            base().wrap(""),
            mark().wrap("foo"),
            base().wrap(" bar "),
            mark().wrap("foo"),
            base().wrap("")
        );
        assert_eq!(out, expected);
        assert_eq!(out.matches(&mark().wrap("foo")).count(), 2);
    }

    #[test]
    fn test_or_word_without_occurrence_leaves_pass_unchanged() {
        force_color_output(true);
        let only_foo = apply_or("foo bar", &words(&["foo"]), base(), mark());
        let foo_then_miss = apply_or("foo bar", &words(&["foo", "zzz"]), base(), mark());
        // the "zzz" pass splits on a word that never occurs, so the text is
        // a single segment wrapped once more in base paint
        assert_eq!(foo_then_miss, base().wrap(&only_foo));
    }

    #[test]
    fn test_or_applies_words_sequentially() {
        force_color_output(true);
        let out = apply_or("foo bar", &words(&["foo", "bar"]), base(), mark());
        assert!(out.contains(&mark().wrap("foo")));
        assert!(out.contains(&mark().wrap("bar")));
    }

    #[test]
    fn test_and_empty_list_wraps_whole_text_in_base() {
        force_color_output(true);
        let out = apply_and("foo bar", &[], base(), mark());
        assert_eq!(out, base().wrap("foo bar"));
    }

    #[test]
    fn test_and_single_word_matches_or_mode() {
        force_color_output(true);
        let and_out = apply_and("foo bar foo", &words(&["foo"]), base(), mark());
        let or_out = apply_or("foo bar foo", &words(&["foo"]), base(), mark());
        assert_eq!(and_out, or_out);
    }

    #[test]
    fn test_and_missing_word_discards_all_marks() {
        force_color_output(true);
        let out = apply_and("foo bar", &words(&["foo", "baz"]), base(), mark());
        assert_eq!(out, base().wrap("foo bar"));
        assert!(!out.contains(&mark().wrap("foo")));
    }

    #[test]
    fn test_and_all_words_present_marks_each() {
        force_color_output(true);
        let out = apply_and("foo bar", &words(&["foo", "bar"]), base(), mark());
        assert!(out.contains(&mark().wrap("foo")));
        assert!(out.contains(&mark().wrap("bar")));
        assert!(out.contains(&base().wrap(" ")));
    }

    #[test]
    fn test_and_duplicate_words_still_require_one_presence_each() {
        force_color_output(true);
        let out = apply_and("foo x", &words(&["foo", "foo"]), base(), mark());
        // both list entries find "foo" in the original text, so the AND
        // condition is satisfied and marks survive
        assert!(out.contains(&mark().wrap("foo")));
    }

    #[test]
    fn test_substring_words_first_applied_wins_in_or_mode() {
        force_color_output(true);
        let out = apply_or("foobar baz", &words(&["foo", "foobar"]), base(), mark());
        // the "foo" pass fragments "foobar", so the second word no longer
        // occurs in the working copy and its pass is a no-op split
        assert!(out.contains(&mark().wrap("foo")));
        assert!(!out.contains(&mark().wrap("foobar")));
    }

    #[test]
    fn test_substring_words_presence_checked_against_original_in_and_mode() {
        force_color_output(true);
        let out = apply_and("foobar baz", &words(&["foo", "foobar"]), base(), mark());
        // "foobar" is present in the original text, so the remaining count
        // reaches zero and the accumulated marks are kept even though the
        // second pass could no longer find the word
        assert!(out.contains(&mark().wrap("foo")));
        assert_ne!(out, base().wrap("foobar baz"));
    }

    #[test]
    fn test_mode_from_flag_fallback() {
        assert_eq!(HighlightMode::from_flag("and"), HighlightMode::And);
        assert_eq!(HighlightMode::from_flag("or"), HighlightMode::Or);
        assert_eq!(HighlightMode::from_flag("xor"), HighlightMode::Or);
        assert_eq!(HighlightMode::from_flag(""), HighlightMode::Or);
        assert_eq!(HighlightMode::from_flag("AND"), HighlightMode::Or);
    }
}

use crate::lexicon::Lexicon;
use regex::Regex;
use std::collections::HashSet;

/// How a misspelled word should be corrected.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion {
    /// Curated correction from the misspelling map.
    Correction(String),
    /// Known words containing the misspelling as a substring. May be empty.
    Candidates(Vec<String>),
}

/// One flagged word, in normalized form.
#[derive(Debug, Clone, PartialEq)]
pub struct Misspelling {
    pub word: String,
    pub suggestion: Suggestion,
}

pub struct SpellChecker {
    lexicon: Lexicon,
    ignored: HashSet<String>,
    token_re: Regex,
}

impl SpellChecker {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            ignored: HashSet::new(),
            // Tokens are maximal ASCII-alphabetic runs; digits never appear
            // in a token.
            token_re: Regex::new("[A-Za-z]+").expect("token pattern is valid"),
        }
    }

    /// Tokenize `text` and check every token, collecting the flagged ones in
    /// order of appearance.
    pub fn check_text(&self, text: &str) -> Vec<Misspelling> {
        self.token_re
            .find_iter(text)
            .filter_map(|tok| self.check_word(tok.as_str()))
            .collect()
    }

    /// Check one word against the lexicon. Returns a report when the
    /// normalized word is unknown, `None` when it is known or normalizes to
    /// nothing.
    pub fn check_word(&self, word: &str) -> Option<Misspelling> {
        let normalized = Lexicon::normalize(word);
        if normalized.is_empty() || self.lexicon.contains(&normalized) {
            return None;
        }
        let suggestion = self.suggest(&normalized);
        Some(Misspelling {
            word: normalized,
            suggestion,
        })
    }

    /// Curated correction if the misspelling map knows the word, otherwise a
    /// substring scan over the known-word set.
    pub fn suggest(&self, word: &str) -> Suggestion {
        if let Some(correction) = self.lexicon.correction_for(word) {
            return Suggestion::Correction(correction.to_string());
        }
        Suggestion::Candidates(self.lexicon.words_containing(word))
    }

    /// Add a word to the known-word set; it will no longer be flagged.
    pub fn add_known_word(&mut self, word: &str) {
        self.lexicon.add_word(word);
    }

    /// Record a word in the ignore set. The set is not consulted by
    /// `check_word`, so ignored words keep being flagged; see DESIGN.md.
    pub fn ignore(&mut self, word: &str) {
        let normalized = Lexicon::normalize(word);
        if !normalized.is_empty() {
            self.ignored.insert(normalized);
        }
    }

    pub fn is_ignored(&self, word: &str) -> bool {
        self.ignored.contains(&Lexicon::normalize(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> SpellChecker {
        SpellChecker::new(Lexicon::new())
    }

    #[test]
    fn known_words_are_not_flagged() {
        let sc = checker();
        assert_eq!(sc.check_word("the"), None);
        assert_eq!(sc.check_word("The"), None);
    }

    #[test]
    fn mapped_misspelling_gets_its_curated_correction() {
        let sc = checker();
        let report = sc.check_word("teh").unwrap();
        assert_eq!(report.word, "teh");
        assert_eq!(report.suggestion, Suggestion::Correction("the".to_string()));
    }

    #[test]
    fn unmapped_unknown_word_gets_substring_candidates() {
        let sc = checker();
        let report = sc.check_word("cycl").unwrap();
        assert_eq!(
            report.suggestion,
            Suggestion::Candidates(vec!["bicycle".to_string()])
        );
    }

    #[test]
    fn unknown_word_with_no_candidates_is_still_reported() {
        let sc = checker();
        let report = sc.check_word("zzzznotaword").unwrap();
        assert_eq!(report.suggestion, Suggestion::Candidates(Vec::new()));
    }

    #[test]
    fn normalization_strips_punctuation_before_lookup() {
        let sc = checker();
        // "the!!" normalizes to "the", which is known.
        assert_eq!(sc.check_word("the!!"), None);
        // "t3h" normalizes to "th", not "teh".
        let report = sc.check_word("t3h").unwrap();
        assert_eq!(report.word, "th");
    }

    #[test]
    fn check_text_tokenizes_on_non_letters() {
        let sc = checker();
        let reports = sc.check_text("teh quick 42 brwn fox!");
        let words: Vec<&str> = reports.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["teh", "brwn"]);
    }

    #[test]
    fn check_text_on_clean_input_is_quiet() {
        let sc = checker();
        assert!(sc.check_text("the quick brown fox").is_empty());
    }

    #[test]
    fn added_words_stop_being_flagged() {
        let mut sc = checker();
        assert!(sc.check_word("zzzznotaword").is_some());
        sc.add_known_word("zzzznotaword");
        assert_eq!(sc.check_word("zzzznotaword"), None);
        assert_eq!(sc.check_word("Zzzznotaword!"), None);
    }

    // Pins the long-standing gap: `ignore` records the word but the check
    // path never consults the ignore set, so the word is still flagged.
    #[test]
    fn ignore_is_recorded_but_does_not_suppress_reports() {
        let mut sc = checker();
        sc.ignore("frobnicate");
        assert!(sc.is_ignored("frobnicate"));
        assert!(sc.check_word("frobnicate").is_some());
    }
}

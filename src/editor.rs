use crate::document::{Document, SearchHits};
use crate::lexicon::Lexicon;
use crate::spell::{Misspelling, SpellChecker};
use crate::undo::UndoManager;
use crate::word_graph::WordGraph;

/// Owning context for one editing session: the document, its undo history,
/// the word-relationship graph, and the spell checker. All state lives here
/// by value; the session layer only translates between user text and these
/// methods.
pub struct Editor {
    buffer: Document,
    undo: UndoManager,
    graph: WordGraph,
    spell: SpellChecker,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            buffer: Document::new(),
            undo: UndoManager::new(),
            graph: WordGraph::new(),
            spell: SpellChecker::new(Lexicon::new()),
        }
    }

    /// Append a line, snapshotting the pre-insert state so one `undo` removes
    /// the line again. Returns the spell-check reports for the new text.
    pub fn insert_line(&mut self, text: String) -> Vec<Misspelling> {
        self.undo.snapshot(self.buffer.clone());
        let reports = self.spell.check_text(&text);
        self.buffer.append(text);
        reports
    }

    /// Restore the most recent snapshot. Returns false when there is nothing
    /// to undo; the document is left untouched in that case.
    pub fn undo(&mut self) -> bool {
        match self.undo.undo() {
            Some(doc) => {
                self.buffer = doc;
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> Option<&[String]> {
        self.buffer.render()
    }

    pub fn search(&self, word: &str) -> SearchHits {
        self.buffer.find_whole(word)
    }

    /// Replace every whole-word occurrence. Snapshots only when something was
    /// actually replaced, so a no-op replace leaves no history entry.
    pub fn replace(&mut self, target: &str, replacement: &str) -> bool {
        let before = self.buffer.clone();
        if self.buffer.replace_whole(target, replacement) {
            self.undo.snapshot(before);
            true
        } else {
            false
        }
    }

    pub fn word_count(&self) -> usize {
        self.buffer.word_count()
    }

    pub fn add_relationship(&mut self, a: &str, b: &str) {
        self.graph.add_edge(a, b);
    }

    pub fn connections(&self, word: &str) -> Option<&[String]> {
        self.graph.neighbors_of(word)
    }

    pub fn add_known_word(&mut self, word: &str) {
        self.spell.add_known_word(word);
    }

    pub fn ignore_word(&mut self, word: &str) {
        self.spell.ignore(word);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::Suggestion;

    #[test]
    fn display_after_inserts_shows_lines_in_order() {
        let mut ed = Editor::new();
        ed.insert_line("first".to_string());
        ed.insert_line("second".to_string());
        ed.insert_line("third".to_string());
        assert_eq!(
            ed.render().unwrap(),
            &["first".to_string(), "second".to_string(), "third".to_string()]
        );
    }

    #[test]
    fn undo_restores_state_before_the_insert() {
        let mut ed = Editor::new();
        ed.insert_line("keep me".to_string());
        ed.insert_line("drop me".to_string());
        assert!(ed.undo());
        assert_eq!(ed.render().unwrap(), &["keep me".to_string()]);
        assert!(ed.undo());
        assert_eq!(ed.render(), None);
    }

    #[test]
    fn undo_past_history_reports_failure_and_leaves_document_alone() {
        let mut ed = Editor::new();
        ed.insert_line("only line".to_string());
        assert!(ed.undo());
        assert!(!ed.undo());
        assert_eq!(ed.render(), None);
    }

    #[test]
    fn undo_is_single_level_with_no_redo() {
        let mut ed = Editor::new();
        ed.insert_line("a".to_string());
        assert!(ed.undo());
        // The undone state is gone; undo again finds nothing.
        assert!(!ed.undo());
    }

    #[test]
    fn insert_reports_misspellings_in_the_new_text() {
        let mut ed = Editor::new();
        let reports = ed.insert_line("teh quick brown fox".to_string());
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].word, "teh");
        assert_eq!(
            reports[0].suggestion,
            Suggestion::Correction("the".to_string())
        );
    }

    #[test]
    fn replace_snapshots_and_undo_restores_original() {
        let mut ed = Editor::new();
        ed.insert_line("cat cat".to_string());
        assert!(ed.replace("cat", "cats"));
        assert_eq!(ed.render().unwrap(), &["cats cats".to_string()]);
        assert!(ed.undo());
        assert_eq!(ed.render().unwrap(), &["cat cat".to_string()]);
    }

    #[test]
    fn failed_replace_leaves_no_history_entry() {
        let mut ed = Editor::new();
        ed.insert_line("stable".to_string());
        assert!(!ed.replace("missing", "anything"));
        // Only the insert snapshot remains.
        assert!(ed.undo());
        assert_eq!(ed.render(), None);
        assert!(!ed.undo());
    }

    #[test]
    fn search_counts_occurrences_across_lines() {
        let mut ed = Editor::new();
        ed.insert_line("cat here".to_string());
        ed.insert_line("category".to_string());
        ed.insert_line("cat and cat".to_string());
        let hits = ed.search("cat");
        assert_eq!(hits.occurrences, 3);
        assert_eq!(hits.lines.len(), 2);
    }

    #[test]
    fn word_count_after_insert() {
        let mut ed = Editor::new();
        ed.insert_line("the quick brown fox".to_string());
        assert_eq!(ed.word_count(), 4);
    }

    #[test]
    fn relationships_round_trip_through_the_graph() {
        let mut ed = Editor::new();
        ed.add_relationship("sun", "moon");
        ed.add_relationship("sun", "star");
        assert_eq!(
            ed.connections("sun").unwrap(),
            &["moon".to_string(), "star".to_string()]
        );
        assert_eq!(ed.connections("comet"), None);
    }

    #[test]
    fn adddict_suppresses_future_flags() {
        let mut ed = Editor::new();
        assert_eq!(ed.insert_line("zzzznotaword".to_string()).len(), 1);
        ed.add_known_word("zzzznotaword");
        assert!(ed.insert_line("zzzznotaword".to_string()).is_empty());
    }

    #[test]
    fn ignored_words_are_still_flagged() {
        let mut ed = Editor::new();
        ed.ignore_word("frobnicate");
        assert_eq!(ed.insert_line("frobnicate".to_string()).len(), 1);
    }
}

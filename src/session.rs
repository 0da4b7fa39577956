use crate::command::{Command, MENU};
use crate::editor::Editor;
use crate::spell::{Misspelling, Suggestion};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

/// Blocking read-dispatch loop: one command runs to completion before the
/// next prompt. Generic over input/output so the loop itself is testable.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    editor: Editor,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            editor: Editor::new(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            match Command::parse(token) {
                Some(Command::Exit) => {
                    writeln!(self.output, "Exiting the text editor. Goodbye!")?;
                    break;
                }
                Some(command) => self.dispatch(command)?,
                None => writeln!(self.output, "Invalid command. Please try again.")?,
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Insert => self.insert(),
            Command::Display => self.display(),
            Command::Undo => self.undo(),
            Command::AddRelationship => self.add_relationship(),
            Command::Connections => self.connections(),
            Command::Search => self.search(),
            Command::Replace => self.replace(),
            Command::Ignore => self.ignore(),
            Command::AddToDictionary => self.add_to_dictionary(),
            Command::WordCount => self.word_count(),
            Command::Exit => unreachable!("exit is handled by the loop"),
        }
    }

    fn insert(&mut self) -> io::Result<()> {
        let text = self.prompt_line("Enter text to insert: ")?;
        let reports = self.editor.insert_line(text);
        self.report_misspellings(&reports)?;
        writeln!(self.output, "Line inserted successfully.")
    }

    fn display(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nCurrent Text:")?;
        match self.editor.render() {
            Some(lines) => {
                for line in lines {
                    writeln!(self.output, "{line}")?;
                }
            }
            None => writeln!(self.output, "[Empty]")?,
        }
        Ok(())
    }

    fn undo(&mut self) -> io::Result<()> {
        if self.editor.undo() {
            writeln!(self.output, "Undo successful.")
        } else {
            writeln!(self.output, "No actions to undo.")
        }
    }

    fn add_relationship(&mut self) -> io::Result<()> {
        let first = self.prompt_word("Enter the first word: ")?;
        let second = self.prompt_word("Enter the second word: ")?;
        if first.is_empty() || second.is_empty() {
            return writeln!(self.output, "Two words are required.");
        }
        self.editor.add_relationship(&first, &second);
        writeln!(
            self.output,
            "Relationship added between \"{first}\" and \"{second}\"."
        )
    }

    fn connections(&mut self) -> io::Result<()> {
        let word = self.prompt_word("Enter a word to see its connections: ")?;
        match self.editor.connections(&word) {
            Some(neighbors) => writeln!(
                self.output,
                "Words connected to \"{word}\": {}",
                neighbors.join(" ")
            ),
            None => writeln!(self.output, "No connections found for \"{word}\"."),
        }
    }

    fn search(&mut self) -> io::Result<()> {
        let word = self.prompt_word("Enter the word to search: ")?;
        let hits = self.editor.search(&word);
        if hits.is_empty() {
            return writeln!(self.output, "Word \"{word}\" not found in the text.");
        }
        for line in &hits.lines {
            writeln!(self.output, "Found in line: {line}")?;
        }
        writeln!(
            self.output,
            "Word \"{word}\" found {} time(s).",
            hits.occurrences
        )
    }

    fn replace(&mut self) -> io::Result<()> {
        let target = self.prompt_word("Enter the word to replace: ")?;
        let replacement = self.prompt_word("Enter the new word: ")?;
        if self.editor.replace(&target, &replacement) {
            writeln!(
                self.output,
                "Replaced all occurrences of \"{target}\" with \"{replacement}\"."
            )
        } else {
            writeln!(self.output, "Word \"{target}\" not found in the text.")
        }
    }

    fn ignore(&mut self) -> io::Result<()> {
        let word = self.prompt_word("Enter the word you want to ignore: ")?;
        self.editor.ignore_word(&word);
        writeln!(
            self.output,
            "The word \"{word}\" will be ignored in future spell checks."
        )
    }

    fn add_to_dictionary(&mut self) -> io::Result<()> {
        let word = self.prompt_word("Enter the word to add to your personal dictionary: ")?;
        self.editor.add_known_word(&word);
        writeln!(
            self.output,
            "The word \"{word}\" has been added to your personal dictionary."
        )
    }

    fn word_count(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "The document contains {} word(s).",
            self.editor.word_count()
        )
    }

    fn report_misspellings(&mut self, reports: &[Misspelling]) -> io::Result<()> {
        for report in reports {
            writeln!(
                self.output,
                "{} {}",
                "Misspelled word:".red(),
                report.word
            )?;
            match &report.suggestion {
                Suggestion::Correction(correction) => {
                    writeln!(self.output, "Did you mean: {correction}?")?;
                }
                Suggestion::Candidates(candidates) => {
                    writeln!(self.output, "Suggestions: {}", candidates.join(" "))?;
                }
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nCommands:")?;
        for (name, description) in MENU {
            writeln!(
                self.output,
                "  {} - {description}",
                format!("{name:<12}").cyan()
            )?;
        }
        Ok(())
    }

    /// Prompt and read one full line, without the trailing newline.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Prompt and read one word: the first whitespace-delimited token of the
    /// reply, or empty when the reply has none. Empty words fall through to
    /// the caller's not-found handling.
    fn prompt_word(&mut self, prompt: &str) -> io::Result<String> {
        let line = self.prompt_line(prompt)?;
        Ok(line
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string())
    }

    /// `None` on end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

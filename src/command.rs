/// One session command, parsed from the first token of a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert,
    Display,
    Undo,
    AddRelationship,
    Connections,
    Search,
    Replace,
    Ignore,
    AddToDictionary,
    WordCount,
    Exit,
}

impl Command {
    pub fn parse(token: &str) -> Option<Command> {
        match token {
            "insert" => Some(Command::Insert),
            "display" => Some(Command::Display),
            "undo" => Some(Command::Undo),
            "addrel" => Some(Command::AddRelationship),
            "connections" => Some(Command::Connections),
            "search" => Some(Command::Search),
            "replace" => Some(Command::Replace),
            "ignore" => Some(Command::Ignore),
            "adddict" => Some(Command::AddToDictionary),
            "wordcount" => Some(Command::WordCount),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Menu text shown before each prompt, one `(command, description)` row each.
pub const MENU: &[(&str, &str)] = &[
    ("insert", "Insert text"),
    ("display", "Display current text"),
    ("undo", "Undo last change"),
    ("addrel", "Add word relationship"),
    ("connections", "Display word connections"),
    ("search", "Search for a word"),
    ("replace", "Replace a word"),
    ("ignore", "Ignore a word for spellcheck"),
    ("adddict", "Add word to personal dictionary"),
    ("wordcount", "Count words in the document"),
    ("exit", "Exit the editor"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_menu_command() {
        for (token, _) in MENU {
            assert!(Command::parse(token).is_some(), "unparsed: {token}");
        }
    }

    #[test]
    fn rejects_unknown_and_misspelled_tokens() {
        assert_eq!(Command::parse("inser"), None);
        assert_eq!(Command::parse("INSERT"), None);
        assert_eq!(Command::parse(""), None);
    }
}

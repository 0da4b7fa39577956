/// Result of a whole-word search: total occurrences plus each matching line.
///
/// A word appearing twice in one line counts twice, but the line itself is
/// only listed once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHits {
    pub occurrences: usize,
    pub lines: Vec<String>,
}

impl SearchHits {
    pub fn is_empty(&self) -> bool {
        self.occurrences == 0
    }
}

/// Ordered sequence of text lines. Lines are only ever rewritten by
/// `replace_whole`; everything else appends or reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a line at the end. Empty text is allowed and becomes an empty line.
    pub fn append(&mut self, text: String) {
        self.lines.push(text);
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Full ordered content for display, or `None` when the document is empty.
    pub fn render(&self) -> Option<&[String]> {
        if self.lines.is_empty() {
            None
        } else {
            Some(&self.lines)
        }
    }

    /// Find every whole-word occurrence of `word` across all lines.
    pub fn find_whole(&self, word: &str) -> SearchHits {
        let mut hits = SearchHits::default();
        if word.is_empty() {
            return hits;
        }
        for line in &self.lines {
            let count = count_whole_word(line, word);
            if count > 0 {
                hits.occurrences += count;
                hits.lines.push(line.clone());
            }
        }
        hits
    }

    /// Rewrite every whole-word occurrence of `target` with `replacement`.
    /// Returns whether anything changed.
    pub fn replace_whole(&mut self, target: &str, replacement: &str) -> bool {
        if target.is_empty() {
            return false;
        }
        let mut replaced = false;
        for line in &mut self.lines {
            if let Some(new_line) = replace_whole_in_line(line, target, replacement) {
                *line = new_line;
                replaced = true;
            }
        }
        replaced
    }

    /// Count maximal ASCII-alphabetic runs across all lines. Digits,
    /// punctuation, and whitespace all separate words.
    pub fn word_count(&self) -> usize {
        let mut count = 0;
        for line in &self.lines {
            let mut in_word = false;
            for c in line.chars() {
                if c.is_ascii_alphabetic() {
                    if !in_word {
                        count += 1;
                        in_word = true;
                    }
                } else {
                    in_word = false;
                }
            }
        }
        count
    }
}

/// Whole-word test: the match at `pos..pos + len` must be bounded by a
/// non-alphanumeric byte or the string edge on both sides.
fn is_whole_word(line: &str, pos: usize, len: usize) -> bool {
    let bytes = line.as_bytes();
    let before_ok = pos == 0 || !bytes[pos - 1].is_ascii_alphanumeric();
    let end = pos + len;
    let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}

fn count_whole_word(line: &str, word: &str) -> usize {
    let bytes = line.as_bytes();
    let target = word.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i + target.len() <= bytes.len() {
        if bytes[i..].starts_with(target) && is_whole_word(line, i, target.len()) {
            count += 1;
            i += target.len();
        } else {
            i += char_len_at(line, i);
        }
    }
    count
}

/// Single left-to-right pass. The replacement is written to the output and the
/// scan continues in the source after the consumed target, so inserted text is
/// never re-matched even when the replacement contains the target.
fn replace_whole_in_line(line: &str, target: &str, replacement: &str) -> Option<String> {
    let bytes = line.as_bytes();
    let tlen = target.len();
    let mut out = String::with_capacity(line.len());
    let mut replaced = false;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i..].starts_with(target.as_bytes()) && is_whole_word(line, i, tlen) {
            out.push_str(replacement);
            replaced = true;
            i += tlen;
        } else {
            let step = char_len_at(line, i);
            out.push_str(&line[i..i + step]);
            i += step;
        }
    }
    replaced.then_some(out)
}

fn char_len_at(line: &str, i: usize) -> usize {
    line[i..].chars().next().map_or(1, char::len_utf8)
}

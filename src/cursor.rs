// Dump Line Cursor
// Forward-only pull iterator over the lines of a compiler dump

/// One physical line of the dump, with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct DumpLine {
    pub number: usize,
    pub text: String,
}

impl DumpLine {
    pub fn new(number: usize, text: &str) -> Self {
        DumpLine {
            number,
            text: text.to_string(),
        }
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.text.contains(pattern)
    }
}

pub struct DumpCursor {
    lines: Vec<String>,
    position: usize,
}

impl DumpCursor {
    /// Split `text` on `\n` exactly. A trailing newline produces a final
    /// empty line, which the exit scanner relies on when the last exit
    /// target sits on the last line of the dump.
    pub fn from_text(text: &str) -> Self {
        DumpCursor {
            lines: text.split('\n').map(str::to_string).collect(),
            position: 0,
        }
    }
}

impl Iterator for DumpCursor {
    type Item = DumpLine;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.lines.get(self.position)?;
        self.position += 1;
        Some(DumpLine::new(self.position, text))
    }
}

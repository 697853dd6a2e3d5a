/*!
 * Source and output document values.
 */

use std::fmt;

/// Line terminator used for splitting input and joining output
pub const LINE_SEPARATOR: char = '\n';

/// Which edition of the document a line sequence belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edition {
    /// Primary language (English)
    Primary,
    /// Secondary language (Traditional Chinese by default)
    Secondary,
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

/// A bilingual source document, immutable once read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    lines: Vec<String>,
}

impl Document {
    /// Create a document from raw text.
    ///
    /// A trailing newline yields a trailing empty line so that joining the
    /// output again reproduces it. CRLF line endings are read as LF.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = text
            .split(LINE_SEPARATOR)
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { text, lines }
    }

    /// Raw text of the document
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines of the document
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines, counting a trailing empty line
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// One finished monolingual document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    /// Edition this document was assembled for
    pub edition: Edition,
    /// Ordered output lines
    pub lines: Vec<String>,
}

impl OutputDocument {
    pub fn new(edition: Edition, lines: Vec<String>) -> Self {
        Self { edition, lines }
    }

    /// Join the lines into the final text
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Character count of the rendered text
    pub fn char_count(&self) -> usize {
        self.render().chars().count()
    }

    /// Check if any line equals the given text exactly
    pub fn contains_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl fmt::Display for OutputDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

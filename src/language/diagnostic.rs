//! Problems found while parsing, located in display coordinates.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Information => "info",
            Severity::Hint => "hint",
        };
        f.write_str(word)
    }
}

/// Zero-origin line and character, as an editor counts them against the raw
/// text (a tab is one character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Position {
        Position {
            line: line as u32,
            character: character as u32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Range {
        Range { start, end }
    }

    /// A span within a single line.
    pub fn on_line(line: usize, start: usize, end: usize) -> Range {
        Range {
            start: Position::new(line, start),
            end: Position::new(line, end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub range: Range,
    pub message: String,
    pub related: Option<String>,
}

impl Diagnostic {
    pub fn error(range: Range, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            range,
            message: message.into(),
            related: None,
        }
    }

    pub fn warning(range: Range, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            severity: Severity::Warning,
            range,
            message: message.into(),
            related: None,
        }
    }

    pub fn with_related(mut self, related: impl Into<String>) -> Diagnostic {
        self.related = Some(related.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}:{} {}",
            self.severity,
            self.range
                .start
                .line
                + 1,
            self.range
                .start
                .character
                + 1,
            self.message
        )
    }
}

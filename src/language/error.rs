use std::{fmt, path::Path};

use super::Severity;

/// Problems reading an input deck from disk, before any parsing happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}

/// A run of lines that cannot be assembled into a statement at all. These
/// are converted into diagnostics by whoever asked for the statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    NoLines,
    CommentLine(usize),
}

impl ParsingError {
    pub fn line(&self) -> usize {
        match self {
            ParsingError::NoLines => 0,
            ParsingError::CommentLine(line) => *line,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::NoLines => "no lines given for statement".to_string(),
            ParsingError::CommentLine(_) => "statement cannot start with a comment".to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line() + 1, self.message())
    }
}

impl std::error::Error for ParsingError {}

/// Malformed shorthand such as `2.0r` or `3ilogx`. Most failures leave the
/// token in place; a bad right hand bound on an interpolation only warns and
/// the interpolation produces nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ShorthandError {
    NoMnemonic(String),
    TrailingText(String),
    MissingCount,
    InvalidCount(String),
    InvalidPreceding(String),
    InvalidFollowing(String),
    NonPositiveBound(f64),
}

impl ShorthandError {
    pub fn severity(&self) -> Severity {
        match self {
            ShorthandError::InvalidFollowing(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ShorthandError::NoMnemonic(token) => {
                format!("'{}' is not a shorthand feature", token)
            }
            ShorthandError::TrailingText(text) => {
                format!("unexpected '{}' after shorthand mnemonic", text)
            }
            ShorthandError::MissingCount => "multiply shorthand requires a factor".to_string(),
            ShorthandError::InvalidCount(count) => {
                format!("'{}' is not a valid count for shorthand", count)
            }
            ShorthandError::InvalidPreceding(text) if text.is_empty() => {
                "shorthand requires a preceding number".to_string()
            }
            ShorthandError::InvalidPreceding(text) => {
                format!("shorthand requires a preceding number, found '{}'", text)
            }
            ShorthandError::InvalidFollowing(text) if text.is_empty() => {
                "interpolation requires a following number".to_string()
            }
            ShorthandError::InvalidFollowing(text) => {
                format!("interpolation requires a following number, found '{}'", text)
            }
            ShorthandError::NonPositiveBound(value) => format!(
                "logarithmic interpolation bounds must be greater than 0, found {}",
                value
            ),
        }
    }
}

impl fmt::Display for ShorthandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ShorthandError {}

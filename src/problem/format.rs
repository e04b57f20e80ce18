use owo_colors::OwoColorize;
use std::path::Path;

use crate::language::{Diagnostic, LoadingError, Severity};

fn label(severity: Severity) -> String {
    let word = severity.to_string();
    match severity {
        Severity::Error => word
            .bright_red()
            .to_string(),
        Severity::Warning => word
            .bright_yellow()
            .to_string(),
        Severity::Information | Severity::Hint => word
            .bright_blue()
            .to_string(),
    }
}

/// Format a diagnostic with the offending source line and a marker under
/// the range it covers.
pub fn full_diagnostic(diagnostic: &Diagnostic, filename: &Path, source: &str) -> String {
    let start = diagnostic
        .range
        .start;
    let end = diagnostic
        .range
        .end;

    let i = start.line as usize;
    let j = start.character as usize;

    // ranges are counted with a tab as one character, so draw it as one.
    let code = source
        .lines()
        .nth(i)
        .unwrap_or("?")
        .replace('\t', " ");

    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    let length = if end.line == start.line {
        (end.character as usize)
            .saturating_sub(j)
            .max(1)
    } else {
        code.chars()
            .count()
            .saturating_sub(j)
            .max(1)
    };
    let marker = format!("{:>column$}{}", '^', "^".repeat(length - 1), column = column);

    let related = match &diagnostic.related {
        Some(related) => format!("\n{:width$} {} {}", ' ', '='.bright_blue(), related),
        None => String::new(),
    };

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {}{}
        "#,
        label(diagnostic.severity),
        filename.to_string_lossy(),
        line,
        column,
        diagnostic
            .message
            .bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        marker.bright_red(),
        related
    )
    .trim_ascii()
    .to_string()
}

/// Format a diagnostic as a single line
pub fn concise_diagnostic(diagnostic: &Diagnostic, filename: &Path) -> String {
    let start = diagnostic
        .range
        .start;

    format!(
        "{}: {}:{}:{} {}",
        label(diagnostic.severity),
        filename.to_string_lossy(),
        start.line + 1,
        start.character + 1,
        diagnostic
            .message
            .bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    let details = if error
        .details
        .is_empty()
    {
        String::new()
    } else {
        format!(" ({})", error.details)
    };

    format!(
        "{}: {}: {}{}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold(),
        details
    )
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::language::Range;

    #[test]
    fn concise_names_the_position() {
        let diagnostic = Diagnostic::error(Range::on_line(2, 4, 6), "cell 0 does not exist");
        let text = concise_diagnostic(&diagnostic, Path::new("deck.i"));

        assert!(text.contains("deck.i:3:5"));
        assert!(text.contains("cell 0 does not exist"));
        assert!(text.contains("error"));
    }

    #[test]
    fn full_shows_the_source_line() {
        let source = "title\n1 0 -1\n2\t0 +5";
        let diagnostic = Diagnostic::error(Range::on_line(2, 4, 6), "bad sense")
            .with_related("write 5 rather than +5");
        let text = full_diagnostic(&diagnostic, Path::new("deck.i"), source);

        assert!(text.contains("deck.i:3:5"));
        assert!(text.contains("2 0 +5"));
        assert!(text.contains("^^"));
        assert!(text.contains("write 5 rather than +5"));
    }

    #[test]
    fn loading_error() {
        let error = LoadingError {
            problem: "File not found".to_string(),
            details: String::new(),
            filename: Path::new("missing.i"),
        };
        let text = concise_loading_error(&error);
        assert!(text.contains("missing.i"));
        assert!(text.contains("File not found"));
    }
}

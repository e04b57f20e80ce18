//! Classification of individual physical lines.
//!
//! MCNP decides what a line is by looking at fixed columns, after expanding
//! tabs to stops. An editor shows the tab as a single character, so
//! everything downstream works from the expanded ("interpreted") text while
//! still remembering the raw text for display positions.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    Comment,
    StatementStart,
    StatementExtension,
    BlockBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub line_number: usize,
    pub raw_text: String,
    pub interpreted_text: String,
    pub inline_comment: Option<String>,
    pub kind: LineKind,
    /// Ends with `&`, so the following line continues this statement
    /// regardless of its indentation.
    pub continues: bool,
}

pub fn classify(raw_text: &str, line_number: usize) -> ClassifiedLine {
    classify_with(raw_text, line_number, 8)
}

pub fn classify_with(raw_text: &str, line_number: usize, tab_stop: usize) -> ClassifiedLine {
    let (code, inline_comment) = split_inline_comment(raw_text);
    let (code, continues) = split_continuation(code);

    let interpreted_text = replace_tabs(&code.replace('=', " "), tab_stop);
    let kind = line_kind(&interpreted_text);

    ClassifiedLine {
        line_number,
        raw_text: raw_text.to_string(),
        interpreted_text,
        inline_comment,
        kind,
        continues,
    }
}

/// Determine the kind of a line from its tab-free text.
pub fn line_kind(interpreted: &str) -> LineKind {
    if is_comment(interpreted) {
        LineKind::Comment
    } else if is_extension(interpreted) {
        LineKind::StatementExtension
    } else if interpreted
        .trim()
        .is_empty()
    {
        LineKind::BlockBreak
    } else {
        LineKind::StatementStart
    }
}

// a `c` somewhere in the first six columns, followed by nothing or a space.
fn is_comment(interpreted: &str) -> bool {
    let re = regex!(r"^[ ]{0,5}[cC]( .*|\r|$)");
    re.is_match(interpreted)
}

fn is_extension(interpreted: &str) -> bool {
    let re = regex!(r"^[ ]{6,}\S");
    re.is_match(interpreted)
}

/// Split off everything after the first `$`. The comment text is returned
/// trimmed.
pub fn split_inline_comment(text: &str) -> (&str, Option<String>) {
    match text.split_once('$') {
        Some((code, comment)) => (
            code,
            Some(
                comment
                    .trim()
                    .to_string(),
            ),
        ),
        None => (text, None),
    }
}

/// Remove a trailing `&` continuation marker, if present.
pub fn split_continuation(code: &str) -> (&str, bool) {
    let trimmed = code.trim_end();
    match trimmed.strip_suffix('&') {
        Some(before) => (before, true),
        None => (code, false),
    }
}

/// Expand tabs to spaces the way MCNP's reader does: each tab advances to
/// the next multiple of `tab_stop`, always by at least one column.
pub fn replace_tabs(text: &str, tab_stop: usize) -> String {
    let tab_stop = tab_stop.max(1);
    let mut result = String::with_capacity(text.len());
    let mut column = 0;

    for c in text.chars() {
        if c == '\t' {
            let next = (column / tab_stop + 1) * tab_stop;
            while column < next {
                result.push(' ');
                column += 1;
            }
        } else {
            result.push(c);
            column += 1;
        }
    }

    result
}

/// The text of a full line comment, without the `c` marker or surrounding
/// whitespace. Returns an empty string if there is nothing after the marker.
pub fn comment_text(line: &str) -> String {
    let re = regex!(r"^\s{0,5}[cC](?:\s+(.*))?$");

    match re.captures(line) {
        Some(cap) => cap
            .get(1)
            .map(|m| {
                m.as_str()
                    .trim()
                    .to_string()
            })
            .unwrap_or_default(),
        None => String::new(),
    }
}

#[cfg(test)]
mod check {
    use super::*;

    fn comment_samples() -> Vec<&'static str> {
        vec![
            "c ----------------- Cell Cards -----------------",
            "C ----------------- Cell Cards -----------------",
            " c still a comment",
            "  C still a comment",
            "   c still a comment",
            "    C still a comment",
            "     c still a comment",
            "    c M83 1001.00c 1.0 ",
            "    C ",
            "   c",
            "  C  ",
            " c",
            "c",
            "c\r",
            "c ",
            " c\tstill a comment",
            "  C\tstill a comment",
            "    c\tM83 1001.00c 1.0 ",
            "c $ with an inline comment",
        ]
    }

    fn statement_samples() -> Vec<&'static str> {
        vec![
            "16 14 -2.831e-3 (-32 -27 28) imp:n=200 imp:p=1  $ BF3 ",
            "900 rpp -50 50 121.9 135 40 270",
            "This is the title line of the file.",
            "M1 7014 78.084 8016 20.946 18000 0.46 ",
            "    M1 7014 78.084 8016 20.946 18000 0.46 $ Comment",
            "     M1 7014 78.084 8016 20.946 18000 0.46",
            "cThis is not a comment",
            "M1\t7014 78.084 8016 20.946 18000 0.46 ",
            "    M1\t7014 78.084 8016 20.946 18000 0.46 $ Comment",
        ]
    }

    fn extension_samples() -> Vec<&'static str> {
        vec![
            "      u=1 lat=1 erg=2.3 $ input parameters",
            "       u=1 lat=1 erg=2.3 $ input parameters",
            "        u=1 lat=1 erg=2.3 $ input parameters",
            "      cThis is not a comment",
            "      c This is also not a comment",
            "      0.25Y 0 0.75v2 0 0 0 0 0 0 0",
            "\tu=1 lat=1 erg=2.3 $ input parameters",
            "\t c This is not a comment",
            "\t\t0.25Y 0 0.75v2 0 0 0 0 0 0 0",
            "      u=1\tlat=1 erg=2.3 $ input parameters",
        ]
    }

    #[test]
    fn full_line_comments() {
        for text in comment_samples() {
            assert_eq!(classify(text, 0).kind, LineKind::Comment, "{:?}", text);
        }
    }

    #[test]
    fn statement_starts() {
        for text in statement_samples() {
            assert_eq!(
                classify(text, 0).kind,
                LineKind::StatementStart,
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn statement_extensions() {
        for text in extension_samples() {
            assert_eq!(
                classify(text, 0).kind,
                LineKind::StatementExtension,
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn block_breaks() {
        for n in 0..10 {
            let text = " ".repeat(n);
            assert_eq!(classify(&text, 0).kind, LineKind::BlockBreak);
        }
        assert_eq!(classify("\t", 0).kind, LineKind::BlockBreak);
        assert_eq!(classify("\r", 0).kind, LineKind::BlockBreak);
    }

    #[test]
    fn equal_sign_replacement() {
        let line = classify("2 9 -1.0 (#4:-5): -10 imp:n=6 Vol = 3 imp:p 5 10", 1);
        assert_eq!(
            line.raw_text,
            "2 9 -1.0 (#4:-5): -10 imp:n=6 Vol = 3 imp:p 5 10"
        );
        assert_eq!(
            line.interpreted_text,
            "2 9 -1.0 (#4:-5): -10 imp:n 6 Vol   3 imp:p 5 10"
        );

        let line = classify("2 9 -1.0 (#4:-5): -10 imp:n==6 Vol= = 3 imp:p= =5 10", 1);
        assert_eq!(
            line.interpreted_text,
            "2 9 -1.0 (#4:-5): -10 imp:n  6 Vol    3 imp:p   5 10"
        );
    }

    #[test]
    fn inline_comments_and_continuation() {
        let line = classify("1 0 -1 $ the inside", 4);
        assert_eq!(line.interpreted_text, "1 0 -1 ");
        assert_eq!(line.inline_comment, Some("the inside".to_string()));
        assert!(!line.continues);

        let line = classify("1 0 -1 &  ", 4);
        assert!(line.continues);
        assert_eq!(line.interpreted_text, "1 0 -1 ");

        let line = classify("1 0 -1 & $ more below", 4);
        assert!(line.continues);
        assert_eq!(line.inline_comment, Some("more below".to_string()));
    }

    #[test]
    fn tab_stops() {
        for i in 0..=17 {
            let line = format!("{}\t", " ".repeat(i));
            let expected = (i + 1).div_ceil(8) * 8;
            assert_eq!(replace_tabs(&line, 8).len(), expected);
        }

        assert_eq!(
            replace_tabs(
                "1 RPP 1 2  -10 1  8   \t\t\t\t\t                        8",
                8
            )
            .len(),
            81
        );
        assert_eq!(
            replace_tabs("1 RPP 1 2  -10 10  -8 \t\t\t\t\t\t\t        8", 8).len(),
            81
        );
        assert_eq!(
            replace_tabs("1 RPP 1 2  -10 \t\t\t\t\t\t\t                8", 8).len(),
            81
        );
    }

    #[test]
    fn tab_expansion_is_idempotent() {
        let once = replace_tabs("1\t2 \t 3\t\t4", 8);
        assert_eq!(replace_tabs(&once, 8), once);
        assert_eq!(replace_tabs("a\tb", 4), "a   b");
    }

    #[test]
    fn extracting_comment_text() {
        let comment = "This is the Comment bro c C more butts";
        for prefix in ["c ", "C ", " c ", " c  ", "  c   ", "   c    "] {
            let line = format!("{}{}     ", prefix, comment);
            assert_eq!(comment_text(&line), comment);
        }

        for line in ["c", "C", "c ", "c  ", " c  ", "  c   "] {
            assert_eq!(comment_text(line), "");
        }
    }
}

//! Splitting a whole input deck into its blocks.
//!
//! After the title line an MCNP deck has up to three blocks (cells, surfaces,
//! data) separated by blank lines. A second blank line in a row ends the
//! input; anything after it is ignored by MCNP and so is ignored here.

use tracing::debug;

use crate::language::{BlockKind, Diagnostic, Range, Settings, Statement};
use crate::parsing::lines::{classify_with, comment_text, ClassifiedLine, LineKind};
use crate::parsing::statement::assemble;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Segments {
    pub title: Option<String>,
    /// Statements of each block in order. There are only as many entries as
    /// blocks that actually appear.
    pub blocks: Vec<Vec<Statement>>,
    /// Problems with the layout of lines that no single statement owns.
    pub diagnostics: Vec<Diagnostic>,
}

impl Segments {
    pub fn block(&self, kind: BlockKind) -> &[Statement] {
        let index = match kind {
            BlockKind::Cells => 0,
            BlockKind::Surfaces => 1,
            BlockKind::Data => 2,
        };
        self.blocks
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

pub fn segment(content: &str, settings: &Settings) -> Segments {
    let mut input = Segmenter::new(settings);
    input.run(content);
    input.segments
}

#[derive(Debug)]
struct Segmenter<'s> {
    settings: &'s Settings,
    segments: Segments,
    pending: Vec<ClassifiedLine>,
    pending_header: Option<String>,
    /// Comments seen since the last statement line. They belong to the
    /// pending statement only if an extension line follows them.
    interleaved: Vec<ClassifiedLine>,
    header: Option<String>,
}

impl<'s> Segmenter<'s> {
    fn new(settings: &'s Settings) -> Segmenter<'s> {
        Segmenter {
            settings,
            segments: Segments::default(),
            pending: Vec::new(),
            pending_header: None,
            interleaved: Vec::new(),
            header: None,
        }
    }

    fn run(&mut self, content: &str) {
        let mut lines = content
            .split('\n')
            .enumerate();

        let title = match lines.next() {
            Some((_, title)) if !content.is_empty() => title,
            _ => return,
        };
        self.segments.title = Some(
            title
                .trim_end()
                .to_string(),
        );
        self.segments
            .blocks
            .push(Vec::new());

        let mut count = 1;
        let mut forced = false;
        let mut previous_break = false;

        for (number, raw) in lines {
            count += 1;
            let mut line = classify_with(raw, number, self.settings.tab_stop);

            if forced && line.kind == LineKind::StatementStart {
                line.kind = LineKind::StatementExtension;
            }
            if line.kind != LineKind::Comment {
                forced = line.continues;
            }

            match line.kind {
                LineKind::Comment => {
                    // every tab is at least one column wide, so the raw line
                    // still has the `c` within the first six characters
                    self.header = Some(comment_text(&line.raw_text));
                    self.interleaved
                        .push(line);
                    previous_break = false;
                }
                LineKind::StatementStart => {
                    self.flush();
                    self.pending_header = self
                        .header
                        .take();
                    self.pending
                        .push(line);
                    previous_break = false;
                }
                LineKind::StatementExtension => {
                    self.extend(line);
                    previous_break = false;
                }
                LineKind::BlockBreak => {
                    self.flush();
                    self.header = None;

                    if previous_break {
                        debug!("End of input marker at line {}", number + 1);
                        self.finish();
                        return;
                    }

                    if self
                        .segments
                        .blocks
                        .len()
                        >= 3
                    {
                        debug!("Blank line after data block at line {}", number + 1);
                        self.finish();
                        return;
                    }

                    self.segments
                        .blocks
                        .push(Vec::new());
                    previous_break = true;
                }
            }
        }

        debug!("Classified {} lines", count);

        self.flush();
        self.finish();
    }

    fn extend(&mut self, line: ClassifiedLine) {
        self.header = None;

        if self
            .pending
            .is_empty()
        {
            self.segments
                .diagnostics
                .push(Diagnostic::warning(
                    Range::on_line(line.line_number, 0, line.raw_text.chars().count()),
                    "continuation line has no statement to continue",
                ));
            self.interleaved
                .clear();
            self.pending
                .push(line);
            return;
        }

        self.pending
            .append(&mut self.interleaved);
        self.pending
            .push(line);
    }

    /// Assemble whatever statement is pending into the current block.
    fn flush(&mut self) {
        self.interleaved
            .clear();

        if self
            .pending
            .is_empty()
        {
            return;
        }

        let lines = std::mem::take(&mut self.pending);
        let header = self
            .pending_header
            .take();

        match assemble(&lines, header, self.settings) {
            Ok(statement) => {
                if let Some(block) = self
                    .segments
                    .blocks
                    .last_mut()
                {
                    block.push(statement);
                }
            }
            Err(error) => {
                let line = error.line();
                self.segments
                    .diagnostics
                    .push(Diagnostic::error(
                        Range::on_line(line, 0, 0),
                        error.message(),
                    ));
            }
        }
    }

    // a trailing block that never received a statement is not a block
    fn finish(&mut self) {
        let empty = self
            .segments
            .blocks
            .last()
            .is_some_and(Vec::is_empty);

        if empty {
            self.segments
                .blocks
                .pop();
        }

        for (index, block) in self
            .segments
            .blocks
            .iter()
            .enumerate()
        {
            debug!(
                "{:?} block has {} statements",
                BlockKind::from_index(index),
                block.len()
            );
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    fn sizes(segments: &Segments) -> Vec<usize> {
        segments
            .blocks
            .iter()
            .map(Vec::len)
            .collect()
    }

    #[test]
    fn title_and_three_blocks() {
        let content = "\
Title of the problem
1 1 -1.0 -1
2 0 1

1 so 5.0

m1 1001 1
nps 100
mode n


this is ignored
and so is this";

        let segments = segment(content, &Settings::default());
        assert_eq!(segments.title, Some("Title of the problem".to_string()));
        assert_eq!(sizes(&segments), vec![2, 1, 3]);

        let data = segments.block(BlockKind::Data);
        assert_eq!(data[2].contents(), vec!["mode", "n"]);
        assert!(segments
            .diagnostics
            .is_empty());
    }

    #[test]
    fn block_counts_for_any_data_length() {
        for n in 0..6 {
            let mut content = String::from("title\n1 0 -1\n2 0 1\n\n1 so 1\n\n");
            for i in 0..n {
                content.push_str(&format!("m{} 1001 1\n", i + 1));
            }
            content.push_str("\n\ngarbage after the end\n");

            let segments = segment(&content, &Settings::default());
            if n == 0 {
                // the data block never received a statement
                assert_eq!(sizes(&segments), vec![2, 1]);
            } else {
                assert_eq!(sizes(&segments), vec![2, 1, n]);
            }
            assert!(segments
                .blocks
                .iter()
                .flatten()
                .all(|statement| !statement
                    .raw_text
                    .contains("garbage")));
        }
    }

    #[test]
    fn title_is_never_a_statement() {
        let segments = segment("1 0 -1\n2 0 1", &Settings::default());
        assert_eq!(segments.title, Some("1 0 -1".to_string()));
        assert_eq!(sizes(&segments), vec![1]);
        assert_eq!(segments.blocks[0][0].start_line, 1);
    }

    #[test]
    fn empty_document() {
        let segments = segment("", &Settings::default());
        assert_eq!(segments.title, None);
        assert!(segments
            .blocks
            .is_empty());
    }

    #[test]
    fn extensions_join_their_statement() {
        let content = "title\n1 0 -1\n      imp:n=1\nc between\n      imp:p=0\n2 0 1";
        let segments = segment(content, &Settings::default());
        let cells = segments.block(BlockKind::Cells);

        assert_eq!(cells.len(), 2);
        assert_eq!(
            cells[0].contents(),
            vec!["1", "0", "-1", "imp:n", "1", "imp:p", "0"]
        );
        assert_eq!(cells[1].contents(), vec!["2", "0", "1"]);
        assert_eq!(cells[1].header_comment, None);
    }

    #[test]
    fn continuation_forces_an_extension() {
        let content = "title\n1 0 -1 &\nimp:n=1\n2 0 1";
        let segments = segment(content, &Settings::default());
        let cells = segments.block(BlockKind::Cells);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].contents(), vec!["1", "0", "-1", "imp:n", "1"]);
    }

    #[test]
    fn comment_inside_a_continuation() {
        let content = "title\n1 0 -1 &\nc note\nimp:n=1\n2 0 1";
        let segments = segment(content, &Settings::default());
        let cells = segments.block(BlockKind::Cells);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].contents(), vec!["1", "0", "-1", "imp:n", "1"]);
        assert_eq!(cells[1].contents(), vec!["2", "0", "1"]);
        assert!(segments
            .diagnostics
            .is_empty());
    }

    #[test]
    fn header_comment_is_as_written() {
        let content = "title\nc fuel: vol=3 $ note\n1 0 -1\nc\tclad\tgap=1\r\n2 0 1";
        let segments = segment(content, &Settings::default());
        let cells = segments.block(BlockKind::Cells);

        assert_eq!(
            cells[0].header_comment,
            Some("fuel: vol=3 $ note".to_string())
        );
        assert_eq!(
            cells[1].header_comment,
            Some("clad\tgap=1".to_string())
        );
    }

    #[test]
    fn header_comments() {
        let content = "title\nc the first cell\n1 0 -1\nc   discarded\n      imp:n=1\n2 0 1\nc  the third\nc  the third cell  \n3 0 2";
        let segments = segment(content, &Settings::default());
        let cells = segments.block(BlockKind::Cells);

        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].header_comment, Some("the first cell".to_string()));
        assert_eq!(cells[1].header_comment, None);
        assert_eq!(cells[2].header_comment, Some("the third cell".to_string()));
    }

    #[test]
    fn block_break_clears_header_comment() {
        let content = "title\n1 0 -1\nc dangling\n\n1 so 1";
        let segments = segment(content, &Settings::default());
        assert_eq!(
            segments.block(BlockKind::Surfaces)[0].header_comment,
            None
        );
    }

    #[test]
    fn orphaned_extension_warns() {
        let content = "title\n      1 0 -1";
        let segments = segment(content, &Settings::default());
        assert_eq!(sizes(&segments), vec![1]);
        assert_eq!(
            segments
                .diagnostics
                .len(),
            1
        );
    }

    #[test]
    fn windows_line_endings() {
        let content = "title\r\n1 0 -1\r\n\r\n1 so 1\r\n";
        let segments = segment(content, &Settings::default());
        assert_eq!(segments.title, Some("title".to_string()));
        assert_eq!(sizes(&segments), vec![1, 1]);
        assert_eq!(segments.blocks[1][0].contents(), vec!["1", "so", "1"]);
    }
}

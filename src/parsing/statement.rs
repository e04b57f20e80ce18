//! Assembly of physical lines into one logical statement.

use tracing::debug;

use crate::language::{Argument, Diagnostic, ParsingError, Range, Settings, Severity, Statement};
use crate::parsing::lines::{split_continuation, split_inline_comment, ClassifiedLine, LineKind};
use crate::parsing::shorthand;

/// Build a Statement from the lines making it up. The first line must be
/// the statement's start; comment lines in amongst the extensions are
/// skipped.
pub fn assemble(
    lines: &[ClassifiedLine],
    header_comment: Option<String>,
    settings: &Settings,
) -> Result<Statement, ParsingError> {
    let first = lines
        .first()
        .ok_or(ParsingError::NoLines)?;

    if first.kind == LineKind::Comment {
        return Err(ParsingError::CommentLine(first.line_number));
    }

    let mut input = Assembler::new(settings);

    for line in lines {
        input
            .raw_text
            .push_str(&line.raw_text);

        if line.kind == LineKind::Comment {
            continue;
        }

        if let Some(comment) = &line.inline_comment {
            input
                .inline_comments
                .push(comment.clone());
        }

        let start = input
            .arguments
            .len();
        input.tokenize_line(line);
        input.check_line_length(start);
    }

    input.expand_shorthand();

    Ok(Statement {
        arguments: input.arguments,
        raw_text: input.raw_text,
        inline_comments: input.inline_comments,
        header_comment,
        start_line: first.line_number,
        diagnostics: input.diagnostics,
    })
}

#[derive(Debug)]
struct Assembler<'s> {
    settings: &'s Settings,
    arguments: Vec<Argument>,
    raw_text: String,
    inline_comments: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'s> Assembler<'s> {
    fn new(settings: &'s Settings) -> Assembler<'s> {
        Assembler {
            settings,
            arguments: Vec::new(),
            raw_text: String::new(),
            inline_comments: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Walk the raw text of one line, advancing the display column by one
    /// per character and the MCNP column by however far a tab reaches.
    fn tokenize_line(&mut self, line: &ClassifiedLine) {
        let (code, _) = split_inline_comment(&line.raw_text);
        let (code, _) = split_continuation(code);

        let tab_stop = self
            .settings
            .tab_stop
            .max(1);

        let mut display = 0;
        let mut mcnp = 0;
        let mut token = String::new();
        let mut token_start = (0, 0);

        for c in code.chars() {
            let separator = c.is_whitespace() || c == '=';

            if separator {
                if !token.is_empty() {
                    self.push_token(&token, line.line_number, token_start);
                    token.clear();
                }
            } else {
                if token.is_empty() {
                    token_start = (display, mcnp);
                }
                token.push(c);
            }

            display += 1;
            mcnp = if c == '\t' {
                (mcnp / tab_stop + 1) * tab_stop
            } else {
                mcnp + 1
            };
        }

        if !token.is_empty() {
            self.push_token(&token, line.line_number, token_start);
        }
    }

    /// Split a whitespace delimited token at parentheses and, unless it is a
    /// designator like `imp:n`, at colons. Each delimiter becomes an
    /// Argument of its own.
    fn push_token(&mut self, token: &str, line: usize, (display, mcnp): (usize, usize)) {
        let designator = token
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic());

        let mut piece = String::new();
        let mut piece_offset = 0;

        for (offset, c) in token
            .chars()
            .enumerate()
        {
            let delimiter = c == '(' || c == ')' || (c == ':' && !designator);

            if delimiter {
                if !piece.is_empty() {
                    self.arguments
                        .push(Argument::new(
                            piece.clone(),
                            line,
                            display + piece_offset,
                            mcnp + piece_offset,
                        ));
                    piece.clear();
                }
                self.arguments
                    .push(Argument::new(
                        c.to_string(),
                        line,
                        display + offset,
                        mcnp + offset,
                    ));
            } else {
                if piece.is_empty() {
                    piece_offset = offset;
                }
                piece.push(c);
            }
        }

        if !piece.is_empty() {
            self.arguments
                .push(Argument::new(
                    piece,
                    line,
                    display + piece_offset,
                    mcnp + piece_offset,
                ));
        }
    }

    /// One diagnostic per contiguous run of arguments that MCNP would not
    /// read because they extend past the line limit.
    fn check_line_length(&mut self, start: usize) {
        let limit = self
            .settings
            .line_limit;
        let mut run: Option<(usize, usize)> = None;

        for index in start..self
            .arguments
            .len()
        {
            let over = self.arguments[index].mcnp_end() > limit;

            match (over, run) {
                (true, None) => run = Some((index, index)),
                (true, Some((first, _))) => run = Some((first, index)),
                (false, Some((first, last))) => {
                    self.report_overrun(first, last);
                    run = None;
                }
                (false, None) => {}
            }
        }

        if let Some((first, last)) = run {
            self.report_overrun(first, last);
        }
    }

    fn report_overrun(&mut self, first: usize, last: usize) {
        let start = &self.arguments[first];
        let end = &self.arguments[last];

        let range = Range::new(
            start
                .range()
                .start,
            end.range()
                .end,
        );

        let message = format!(
            "text extends to column {}, beyond the {} columns MCNP reads",
            end.mcnp_end(),
            self.settings
                .line_limit
        );
        let related = format!(
            "tabs count as reaching the next multiple of {} columns",
            self.settings
                .tab_stop
        );

        self.diagnostics
            .push(Diagnostic::error(range, message).with_related(related));
    }

    /// Replace shorthand tokens with their expansions. The value before a
    /// shorthand is the last one emitted (so `1 2r 3r` chains); the value
    /// after is the next token as written.
    fn expand_shorthand(&mut self) {
        let any = self
            .arguments
            .iter()
            .any(|argument| shorthand::is_shorthand(&argument.contents));
        if !any {
            return;
        }

        let written = std::mem::take(&mut self.arguments);
        let mut expanded: Vec<Argument> = Vec::with_capacity(written.len());

        for (index, argument) in written
            .iter()
            .enumerate()
        {
            if !shorthand::is_shorthand(&argument.contents) {
                expanded.push(argument.clone());
                continue;
            }

            let preceding = expanded
                .last()
                .map(|previous| previous.contents.as_str());
            let following = written
                .get(index + 1)
                .map(|next| next.contents.as_str());

            match shorthand::expand(preceding, &argument.contents, following) {
                Ok(values) => {
                    for value in values {
                        expanded.push(argument.replaced(value));
                    }
                }
                Err(error) => {
                    debug!("Shorthand {} not expanded: {}", argument.contents, error);
                    let message = error.message();
                    match error.severity() {
                        Severity::Error => {
                            self.diagnostics
                                .push(Diagnostic::error(argument.range(), message));
                            expanded.push(argument.clone());
                        }
                        _ => {
                            self.diagnostics
                                .push(Diagnostic::warning(argument.range(), message));
                        }
                    }
                }
            }
        }

        self.arguments = expanded;
    }
}

#[cfg(test)]
#[path = "checks/statement.rs"]
mod check;

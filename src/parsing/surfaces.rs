//! Surface cards: `[*|+]j [n] mnemonic parameters`.

use crate::language::{Argument, Diagnostic, Statement, Surface, SurfaceModifier};
use crate::parsing::numbers::{parse_number, parse_pure_integer};
use crate::parsing::shorthand::JUMP;

const LARGEST_SURFACE_ID: i64 = 99_999;

/// Surfaces with a transform have fewer digits available for their ID.
const LARGEST_TRANSFORMED_SURFACE_ID: i64 = 999;

pub fn parse_surface(statement: &Statement) -> Surface {
    let arguments = &statement.arguments;
    let mut diagnostics = Vec::new();

    let first = match arguments.first() {
        Some(first) => first,
        None => {
            diagnostics.push(Diagnostic::error(
                statement.range(),
                "surface card is empty",
            ));
            return Surface {
                id: 0,
                modifier: SurfaceModifier::None,
                transform: None,
                mnemonic: None,
                parameters: Vec::new(),
                parameter_values: Vec::new(),
                header_comment: statement
                    .header_comment
                    .clone(),
                diagnostics,
            };
        }
    };

    let (modifier, id_text) = read_modifier(first, &mut diagnostics);

    let transform = arguments
        .get(1)
        .and_then(|argument| read_transform(argument, &mut diagnostics));

    let id = read_id(first, id_text, transform.is_some(), &mut diagnostics);

    let next = if transform.is_some() { 2 } else { 1 };
    let mnemonic = arguments
        .get(next)
        .cloned();
    if mnemonic.is_none() {
        diagnostics.push(Diagnostic::error(
            statement.range(),
            "surface card has no mnemonic",
        ));
    }

    let parameters: Vec<Argument> = arguments
        .get(next + 1..)
        .unwrap_or_default()
        .to_vec();
    let parameter_values = parameters
        .iter()
        .map(|argument| read_parameter(argument, &mut diagnostics))
        .collect();

    Surface {
        id,
        modifier,
        transform,
        mnemonic,
        parameters,
        parameter_values,
        header_comment: statement
            .header_comment
            .clone(),
        diagnostics,
    }
}

/// The modifier character, if any, and the remaining text which should be
/// the surface number.
fn read_modifier<'a>(
    first: &'a Argument,
    diagnostics: &mut Vec<Diagnostic>,
) -> (SurfaceModifier, &'a str) {
    let text = first
        .contents
        .as_str();

    let c = match text
        .chars()
        .next()
    {
        Some(c) => c,
        None => return (SurfaceModifier::None, text),
    };
    let rest = &text[c.len_utf8()..];

    match c {
        '*' => (SurfaceModifier::Reflective, rest),
        '+' => (SurfaceModifier::WhiteBoundary, rest),
        _ if c.is_ascii_digit() => (SurfaceModifier::None, text),
        _ => {
            diagnostics.push(Diagnostic::error(
                first.range(),
                format!("'{}' is not a valid surface modifier", c),
            ));
            (SurfaceModifier::None, rest)
        }
    }
}

/// A number in the second slot is a transform (or, if negative, a periodic
/// partner surface). Anything else is left for the mnemonic.
fn read_transform(argument: &Argument, diagnostics: &mut Vec<Diagnostic>) -> Option<i64> {
    let value = parse_number(&argument.contents)?;
    let truncated = value.trunc();

    if value != truncated {
        diagnostics.push(Diagnostic::error(
            argument.range(),
            format!("transform '{}' is not an integer value", argument.contents),
        ));
    }
    if truncated == 0.0 {
        diagnostics.push(Diagnostic::error(
            argument.range(),
            "transform number can not be 0",
        ));
    }

    Some(truncated as i64)
}

fn read_id(
    first: &Argument,
    text: &str,
    transformed: bool,
    diagnostics: &mut Vec<Diagnostic>,
) -> i64 {
    let largest = if transformed {
        LARGEST_TRANSFORMED_SURFACE_ID
    } else {
        LARGEST_SURFACE_ID
    };

    match parse_pure_integer(text) {
        Some(id) if (1..=largest).contains(&id) => id,
        Some(id) => {
            let message = if transformed {
                format!(
                    "surface ID must be between 1 and {} when a transform is given",
                    largest
                )
            } else {
                format!("surface ID must be between 1 and {}", largest)
            };
            diagnostics.push(Diagnostic::error(first.range(), message));
            id
        }
        None => {
            diagnostics.push(Diagnostic::error(
                first.range(),
                format!("surface ID '{}' is not an integer", text),
            ));
            parse_number(text).map_or(0, |value| value.trunc() as i64)
        }
    }
}

fn read_parameter(argument: &Argument, diagnostics: &mut Vec<Diagnostic>) -> f64 {
    let text = argument
        .contents
        .as_str();

    if text.eq_ignore_ascii_case(JUMP) {
        diagnostics.push(Diagnostic::warning(
            argument.range(),
            "default shorthand j should be avoided; it is read as 0",
        ));
        return 0.0;
    }

    match parse_number(text) {
        Some(value) => value,
        None => {
            diagnostics.push(Diagnostic::error(
                argument.range(),
                format!("surface parameter '{}' is not a number", text),
            ));
            f64::NAN
        }
    }
}

#[cfg(test)]
#[path = "checks/surfaces.rs"]
mod check;

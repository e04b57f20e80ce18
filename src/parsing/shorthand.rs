//! Expansion of MCNP's shorthand features.
//!
//! A shorthand token stands in for a run of numbers computed from its
//! neighbours:
//!
//! - `2 3r` repeats the preceding value, giving `2 2 2 2`
//! - `1 2i 4` linearly interpolates, giving `1 2 3 4`
//! - `0.01 2ilog 10` interpolates logarithmically, giving `0.01 0.1 1 10`
//! - `2 3m` multiplies the preceding value, giving `2 6`
//! - `2j` skips entries, leaving their defaults in place
//!
//! Functions here are pure; turning failures into diagnostics is left to the
//! caller.

use crate::language::ShorthandError;
use crate::parsing::numbers::{format_number, parse_number, parse_pure_integer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mnemonic {
    Repeat,
    Interpolate,
    LogInterpolate,
    Multiply,
    Jump,
}

/// The placeholder emitted for each skipped entry of a jump.
pub const JUMP: &str = "j";

/// Largest count a shorthand token may carry. No real input line needs more
/// entries than this.
pub const MAX_COUNT: i64 = 100_000;

/// Does this token look like it was meant as shorthand? Keywords such as
/// `rpp` or `imp:n` contain mnemonic letters too, so the text before the
/// mnemonic must be numeric, or the token must be a bare mnemonic.
pub fn is_shorthand(token: &str) -> bool {
    let re = regex!(r"(?i)^(\S*?)(r|m|j|ilog|i)(\S*)$");

    let cap = match re.captures(token) {
        Some(cap) => cap,
        None => return false,
    };

    let count = &cap[1];
    let trailing = &cap[3];

    if count.is_empty() {
        return trailing.is_empty();
    }

    // a ZAID with a library suffix, 1001.50m, is not a multiplication.
    let zaid = regex!(r"^[0-9]{4,6}\.[0-9]{2}[a-zA-Z]$");
    if zaid.is_match(token) {
        return false;
    }

    let numeric = regex!(r"^[-+]?\.?[0-9]");
    numeric.is_match(count)
}

/// Expand `token` given the values either side of it.
pub fn expand(
    preceding: Option<&str>,
    token: &str,
    following: Option<&str>,
) -> Result<Vec<String>, ShorthandError> {
    let (count, mnemonic) = split_mnemonic(token)?;

    match mnemonic {
        Mnemonic::Repeat => repeat(preceding, count),
        Mnemonic::Interpolate => interpolate(preceding, count, following, false),
        Mnemonic::LogInterpolate => interpolate(preceding, count, following, true),
        Mnemonic::Multiply => multiply(preceding, count),
        Mnemonic::Jump => jump(count),
    }
}

fn split_mnemonic(token: &str) -> Result<(&str, Mnemonic), ShorthandError> {
    let re = regex!(r"(?i)^(\S*?)(r|m|j|ilog|i)(\S*)$");

    let cap = re
        .captures(token)
        .ok_or_else(|| ShorthandError::NoMnemonic(token.to_string()))?;

    let count = cap
        .get(1)
        .map_or("", |m| m.as_str());
    let mnemonic = cap
        .get(2)
        .map_or("", |m| m.as_str());
    let trailing = cap
        .get(3)
        .map_or("", |m| m.as_str());

    if !trailing.is_empty() {
        return Err(ShorthandError::TrailingText(trailing.to_string()));
    }

    let mnemonic = match mnemonic
        .to_ascii_lowercase()
        .as_str()
    {
        "r" => Mnemonic::Repeat,
        "i" => Mnemonic::Interpolate,
        "ilog" => Mnemonic::LogInterpolate,
        "m" => Mnemonic::Multiply,
        "j" => Mnemonic::Jump,
        _ => return Err(ShorthandError::NoMnemonic(token.to_string())),
    };

    Ok((count, mnemonic))
}

fn count_or(count: &str, default: i64) -> Result<i64, ShorthandError> {
    if count.is_empty() {
        Ok(default)
    } else {
        match parse_pure_integer(count) {
            Some(n) if n <= MAX_COUNT => Ok(n),
            _ => Err(ShorthandError::InvalidCount(count.to_string())),
        }
    }
}

fn require_preceding(preceding: Option<&str>) -> Result<f64, ShorthandError> {
    let text = preceding.unwrap_or("");
    parse_number(text).ok_or_else(|| ShorthandError::InvalidPreceding(text.to_string()))
}

fn require_following(following: Option<&str>) -> Result<f64, ShorthandError> {
    let text = following.unwrap_or("");
    parse_number(text).ok_or_else(|| ShorthandError::InvalidFollowing(text.to_string()))
}

fn repeat(preceding: Option<&str>, count: &str) -> Result<Vec<String>, ShorthandError> {
    let n = count_or(count, 1)?;
    require_preceding(preceding)?;

    let text = preceding.unwrap_or_default();
    if n <= 0 {
        return Ok(vec![]);
    }

    Ok(vec![text.to_string(); n as usize])
}

fn interpolate(
    preceding: Option<&str>,
    count: &str,
    following: Option<&str>,
    logarithmic: bool,
) -> Result<Vec<String>, ShorthandError> {
    let n = if logarithmic {
        count_or(count, 0)?
    } else {
        count_or(count, 1)?
    };

    let left = require_preceding(preceding)?;
    if logarithmic && left <= 0.0 {
        return Err(ShorthandError::NonPositiveBound(left));
    }

    let right = require_following(following)?;
    if logarithmic && right <= 0.0 {
        return Err(ShorthandError::NonPositiveBound(right));
    }

    if n <= 0 {
        return Ok(vec![]);
    }

    let (left, right) = if logarithmic {
        (left.log10(), right.log10())
    } else {
        (left, right)
    };

    let step = (right - left) / (n + 1) as f64;

    let values = (1..=n)
        .map(|k| {
            let x = left + k as f64 * step;
            if logarithmic {
                10f64.powf(x)
            } else {
                x
            }
        })
        .map(format_number)
        .collect();

    Ok(values)
}

fn multiply(preceding: Option<&str>, count: &str) -> Result<Vec<String>, ShorthandError> {
    if count.is_empty() {
        return Err(ShorthandError::MissingCount);
    }

    let factor =
        parse_number(count).ok_or_else(|| ShorthandError::InvalidCount(count.to_string()))?;
    let value = require_preceding(preceding)?;

    Ok(vec![format_number(value * factor)])
}

fn jump(count: &str) -> Result<Vec<String>, ShorthandError> {
    let n = count_or(count, 1)?;
    if n <= 0 {
        return Err(ShorthandError::InvalidCount(count.to_string()));
    }

    Ok(vec![JUMP.to_string(); n as usize])
}

#[cfg(test)]
#[path = "checks/shorthand.rs"]
mod check;

//! Names of data cards, such as `M4`, `*F14:p` or `nps`.

use crate::language::{CardTag, Statement};
use crate::parsing::parameters::designators;

impl CardTag {
    /// Split a card name into its parts. Returns `None` if the text doesn't
    /// start with a letter (after an optional modifier) or if its particle
    /// designators don't parse.
    pub fn parse(text: &str) -> Option<CardTag> {
        let re = regex!(r"^([*+])?([a-zA-Z]+)([0-9]+)?[^:]*(?::(.*))?$");

        let cap = re.captures(text)?;

        let modifier = cap
            .get(1)
            .and_then(|m| {
                m.as_str()
                    .chars()
                    .next()
            });
        let mnemonic = cap
            .get(2)?
            .as_str()
            .to_string();
        let number = match cap.get(3) {
            Some(m) => Some(
                m.as_str()
                    .parse::<u64>()
                    .ok()?,
            ),
            None => None,
        };
        let particles = match cap.get(4) {
            Some(m) => designators(m.as_str())?,
            None => Vec::new(),
        };

        Some(CardTag {
            modifier,
            mnemonic,
            number,
            particles,
        })
    }
}

impl Statement {
    /// The card name of a data statement, taken from its first argument.
    pub fn tag(&self) -> Option<CardTag> {
        let first = self
            .arguments
            .first()?;
        CardTag::parse(&first.contents)
    }
}

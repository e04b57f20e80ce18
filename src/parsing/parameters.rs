//! Keyword and value tails, as found at the end of cell cards (and on many
//! data cards): `imp:n,p=1 u=3 fill=2 (0 0 1)`.

use crate::language::{Argument, DataParameter, Diagnostic, Particle};

impl Particle {
    /// The particle for a one character designator. Only the common
    /// particles are distinguished; anything else is `Other`.
    pub fn from_symbol(symbol: &str) -> Option<Particle> {
        let mut chars = symbol.chars();
        let c = chars.next()?;
        if chars
            .next()
            .is_some()
        {
            return None;
        }

        let particle = match c.to_ascii_lowercase() {
            'n' => Particle::Neutron,
            'p' => Particle::Photon,
            'e' => Particle::Electron,
            _ => Particle::Other,
        };
        Some(particle)
    }
}

/// Parse a comma separated designator list such as `n,p`. Every entry must
/// be a single character.
pub fn designators(text: &str) -> Option<Vec<Particle>> {
    text.split(',')
        .map(|symbol| Particle::from_symbol(symbol.trim()))
        .collect()
}

impl DataParameter {
    /// The keyword without any particle designator, so `imp` for `imp:n`.
    pub fn name(&self) -> &str {
        let keyword = self
            .keyword
            .contents
            .as_str();
        match keyword.split_once(':') {
            Some((name, _)) => name,
            None => keyword,
        }
    }

    /// The particles named after the keyword's colon, if it has any.
    pub fn particles(&self) -> Option<Vec<Particle>> {
        let (_, list) = self
            .keyword
            .contents
            .split_once(':')?;
        designators(list)
    }
}

/// Group the arguments into keywords and their values. A token with no
/// digits in it starts a new keyword; the placeholder `j` and grouping
/// punctuation are values.
pub fn extract(arguments: &[Argument]) -> (Vec<DataParameter>, Vec<Diagnostic>) {
    let mut parameters: Vec<DataParameter> = Vec::new();
    let mut diagnostics = Vec::new();

    for argument in arguments {
        let text = argument
            .contents
            .as_str();

        let has_digit = text
            .chars()
            .any(|c| c.is_ascii_digit());
        let value_like = has_digit || argument.is_structural() || text.eq_ignore_ascii_case("j");

        if !value_like {
            parameters.push(DataParameter {
                keyword: argument.clone(),
                values: Vec::new(),
            });
            continue;
        }

        match parameters.last_mut() {
            Some(parameter) => parameter
                .values
                .push(argument.clone()),
            None if has_digit => parameters.push(DataParameter {
                keyword: argument.clone(),
                values: Vec::new(),
            }),
            None => diagnostics.push(Diagnostic::warning(
                argument.range(),
                format!("'{}' does not follow a keyword", text),
            )),
        }
    }

    (parameters, diagnostics)
}

#[cfg(test)]
mod check {
    use super::*;

    fn arguments(text: &str) -> Vec<Argument> {
        let mut column = 0;
        text.split(' ')
            .map(|word| {
                let argument = Argument::new(word, 0, column, column);
                column += word.len() + 1;
                argument
            })
            .collect()
    }

    fn names(parameters: &[DataParameter]) -> Vec<&str> {
        parameters
            .iter()
            .map(|parameter| {
                parameter
                    .keyword
                    .contents
                    .as_str()
            })
            .collect()
    }

    #[test]
    fn particle_symbols() {
        assert_eq!(Particle::from_symbol("n"), Some(Particle::Neutron));
        assert_eq!(Particle::from_symbol("N"), Some(Particle::Neutron));
        assert_eq!(Particle::from_symbol("p"), Some(Particle::Photon));
        assert_eq!(Particle::from_symbol("E"), Some(Particle::Electron));
        assert_eq!(Particle::from_symbol("h"), Some(Particle::Other));
        assert_eq!(Particle::from_symbol("|"), Some(Particle::Other));

        assert_eq!(Particle::from_symbol(""), None);
        assert_eq!(Particle::from_symbol("np"), None);
    }

    #[test]
    fn keyword_groups() {
        let (parameters, diagnostics) = extract(&arguments("imp:n 1 u 3 fill 2 ( 0 0 1 ) vol j"));
        assert!(diagnostics.is_empty());
        assert_eq!(names(&parameters), vec!["imp:n", "u", "fill", "vol"]);
        assert_eq!(
            parameters[2]
                .values
                .len(),
            6
        );
        assert_eq!(
            parameters[3].values[0].contents,
            "j"
        );
    }

    #[test]
    fn digit_bearing_keyword_opens_a_group() {
        let (parameters, _) = extract(&arguments("tmp1 2.5e-8 imp:n 1"));
        assert_eq!(names(&parameters), vec!["tmp1", "imp:n"]);
        assert_eq!(parameters[0].values[0].contents, "2.5e-8");
    }

    #[test]
    fn stray_values_warn() {
        let (parameters, diagnostics) = extract(&arguments("( imp:n 1"));
        assert_eq!(names(&parameters), vec!["imp:n"]);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn names_and_designators() {
        let (parameters, _) = extract(&arguments("imp:n,p 1 u 2 IMP:e 0"));

        assert_eq!(parameters[0].name(), "imp");
        assert_eq!(
            parameters[0].particles(),
            Some(vec![Particle::Neutron, Particle::Photon])
        );

        assert_eq!(parameters[1].name(), "u");
        assert_eq!(parameters[1].particles(), None);

        assert_eq!(parameters[2].name(), "IMP");
        assert_eq!(parameters[2].particles(), Some(vec![Particle::Electron]));
    }
}

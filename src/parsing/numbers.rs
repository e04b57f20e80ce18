//! The numeric lexicon of MCNP input.

/// Parse a real number as MCNP writes them: optional sign, digits with an
/// optional decimal point, optional exponent. Rust's own float parsing is
/// more permissive (`inf`, `NaN`) than we want.
pub fn parse_number(text: &str) -> Option<f64> {
    let re = regex!(r"^[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?$");

    if re.is_match(text) {
        text.parse::<f64>()
            .ok()
    } else {
        None
    }
}

/// Parse an integer that is not dressed up as a real: no decimal point, no
/// exponent and no explicit `+`. So `2` is an integer while `2.0`, `2e0` and
/// `+2` are not.
pub fn parse_pure_integer(text: &str) -> Option<i64> {
    if text.contains(['.', 'e', 'E', '+']) {
        return None;
    }
    text.parse::<i64>()
        .ok()
}

pub fn is_pure_integer(text: &str) -> bool {
    parse_pure_integer(text).is_some()
}

/// Canonical text for a computed value. Exponential form with the shortest
/// digits that read back to the same value, so `3.0` is `3e0` and `0.1` is
/// `1e-1`.
pub fn format_number(value: f64) -> String {
    format!("{:e}", value)
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn reals() {
        assert_eq!(parse_number("2"), Some(2.0));
        assert_eq!(parse_number("-2.831e-3"), Some(-2.831e-3));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("+4"), Some(4.0));
        assert_eq!(parse_number("1E+2"), Some(100.0));

        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("5r"), None);
        assert_eq!(parse_number("#4"), None);
        assert_eq!(parse_number("1e"), None);
    }

    #[test]
    fn pure_integers() {
        for i in -100..100 {
            assert_eq!(parse_pure_integer(&i.to_string()), Some(i));
        }

        for i in -100..100 {
            for j in 0..10 {
                let text = format!("{}.{}", i, j);
                assert_eq!(parse_pure_integer(&text), None);

                for e in -2..3 {
                    let text = format!("{}.{}E{}", i, j, e);
                    assert_eq!(parse_pure_integer(&text), None);
                }
            }
        }

        assert_eq!(parse_pure_integer("2e0"), None);
        assert_eq!(parse_pure_integer("+2"), None);
        assert_eq!(parse_pure_integer(""), None);
        assert_eq!(parse_pure_integer("abc"), None);
    }

    #[test]
    fn canonical_format_reads_back() {
        for value in [3.0, 0.1, 2.0 + 1.0 / 3.0, -1e-10, 31.622776601683793] {
            let text = format_number(value);
            assert_eq!(parse_number(&text), Some(value));
        }
        assert_eq!(format_number(3.0), "3e0");
    }
}

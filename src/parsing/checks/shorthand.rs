use super::*;
use crate::language::Severity;

fn values(result: Result<Vec<String>, ShorthandError>) -> Vec<f64> {
    result
        .expect("expansion should succeed")
        .iter()
        .map(|text| parse_number(text).expect("expansion should produce numbers"))
        .collect()
}

fn assert_close(actual: Vec<f64>, expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
    for (a, b) in actual
        .iter()
        .zip(expected)
    {
        assert!((a - b).abs() < 1e-4, "{:?} vs {:?}", actual, expected);
    }
}

const BAD_NEIGHBOURS: [&str; 9] = ["abc", "#4", "-", "5r", "5i", "2j", "3m", "4ilog", ""];

const BAD_COUNTS: [&str; 5] = ["2.0", "-2.0", "2e0", "2e+1", "2e-1"];

#[test]
fn repeat() {
    let expected = vec!["2".to_string(); 5];
    assert_eq!(expand(Some("2"), "5r", None), Ok(expected.clone()));
    assert_eq!(expand(Some("2"), "5R", None), Ok(expected));

    assert_eq!(expand(Some("5.5"), "r", None), Ok(vec!["5.5".to_string()]));
    assert_eq!(expand(Some("5.5"), "R", None), Ok(vec!["5.5".to_string()]));
}

#[test]
fn repeat_ignored() {
    assert_eq!(expand(Some("2"), "0r", None), Ok(vec![]));
    assert_eq!(expand(Some("2"), "-1R", None), Ok(vec![]));
}

#[test]
fn repeat_bad_count() {
    for count in BAD_COUNTS {
        let token = format!("{}r", count);
        assert_eq!(
            expand(Some("2"), &token, None),
            Err(ShorthandError::InvalidCount(count.to_string()))
        );
    }
}

#[test]
fn oversized_counts_are_rejected() {
    let limit = MAX_COUNT.to_string();
    assert_eq!(
        expand(Some("2"), &format!("{}r", limit), None).map(|values| values.len()),
        Ok(MAX_COUNT as usize)
    );

    for count in ["100001", "10000000000", "4000000000000000000", "99999999999999999999"] {
        for mnemonic in ["r", "i", "ilog", "j"] {
            let token = format!("{}{}", count, mnemonic);
            assert_eq!(
                expand(Some("2"), &token, Some("8")),
                Err(ShorthandError::InvalidCount(count.to_string())),
                "{}",
                token
            );
        }
    }
}

#[test]
fn repeat_bad_preceding() {
    for preceding in BAD_NEIGHBOURS {
        assert!(expand(Some(preceding), "2r", None).is_err());
    }
    assert_eq!(
        expand(None, "2r", None),
        Err(ShorthandError::InvalidPreceding(String::new()))
    );
}

#[test]
fn linear_interpolation() {
    assert_close(values(expand(Some("1"), "2i", Some("4"))), &[2.0, 3.0]);
    assert_close(values(expand(Some("1"), "2I", Some("4"))), &[2.0, 3.0]);
    assert_close(values(expand(Some("2"), "i", Some("4"))), &[3.0]);
    assert_close(
        values(expand(Some("2"), "5i", Some("4"))),
        &[2.33333, 2.66666, 3.0, 3.33333, 3.66666],
    );
    assert_close(
        values(expand(Some("2"), "5i", Some("100"))),
        &[18.33333, 34.66666, 51.0, 67.33333, 83.66666],
    );
    assert_close(values(expand(Some("5"), "i", Some("30"))), &[17.5]);
    assert_close(values(expand(Some("5"), "1I", Some("30"))), &[17.5]);
}

#[test]
fn linear_interpolation_is_increasing() {
    let points = values(expand(Some("2"), "5i", Some("4")));
    assert_eq!(points.len(), 5);
    assert!(points
        .windows(2)
        .all(|pair| pair[0] < pair[1]));
    assert!(points
        .iter()
        .all(|x| *x > 2.0 && *x < 4.0));
}

#[test]
fn linear_interpolation_ignored() {
    assert_eq!(expand(Some("5"), "0i", Some("30")), Ok(vec![]));
    assert_eq!(expand(Some("5"), "-1i", Some("30")), Ok(vec![]));
}

#[test]
fn linear_interpolation_bad_count() {
    for count in BAD_COUNTS {
        let token = format!("{}i", count);
        assert!(expand(Some("2"), &token, Some("10")).is_err());
    }
}

#[test]
fn interpolation_bad_neighbours() {
    for token in ["2i", "2ilog"] {
        assert!(expand(Some("2"), token, Some("10")).is_ok());

        for bad in BAD_NEIGHBOURS {
            assert!(expand(Some(bad), token, Some("10")).is_err());
            assert!(expand(Some("2"), token, Some(bad)).is_err());
            assert!(expand(Some(bad), token, Some(bad)).is_err());
        }
    }
}

#[test]
fn interpolation_missing_right_bound_only_warns() {
    let error = expand(Some("1"), "3i", None).unwrap_err();
    assert_eq!(error, ShorthandError::InvalidFollowing(String::new()));
    assert_eq!(error.severity(), Severity::Warning);

    let error = expand(None, "3i", Some("4")).unwrap_err();
    assert_eq!(error.severity(), Severity::Error);
}

#[test]
fn logarithmic_interpolation() {
    assert_close(values(expand(Some("0.01"), "2ilog", Some("10"))), &[0.1, 1.0]);
    assert_close(values(expand(Some("0.01"), "2iLoG", Some("10"))), &[0.1, 1.0]);
    assert_close(values(expand(Some("0.01"), "1ILOG", Some("10"))), &[3.1623e-01]);
}

#[test]
fn logarithmic_interpolation_ignored() {
    assert_eq!(expand(Some("2"), "ilog", Some("10")), Ok(vec![]));
    assert_eq!(expand(Some("2"), "0ilog", Some("10")), Ok(vec![]));
    assert_eq!(expand(Some("2"), "-1ilog", Some("10")), Ok(vec![]));
}

#[test]
fn logarithmic_interpolation_bad_count() {
    for count in BAD_COUNTS {
        let token = format!("{}ilog", count);
        assert!(expand(Some("2"), &token, Some("10")).is_err());
    }
}

#[test]
fn logarithmic_interpolation_needs_positive_bounds() {
    assert_eq!(
        expand(Some("0"), "1ilog", Some("10")),
        Err(ShorthandError::NonPositiveBound(0.0))
    );

    for i in -10..10 {
        for j in -10..10 {
            if i <= 0 || j <= 0 {
                let left = i.to_string();
                let right = j.to_string();
                let result = expand(Some(&left), "2ilog", Some(&right));
                assert!(result.is_err(), "{} 2ilog {}", i, j);
                assert_eq!(
                    result
                        .unwrap_err()
                        .severity(),
                    Severity::Error
                );
            }
        }
    }
}

#[test]
fn multiply() {
    assert_close(values(expand(Some("1"), "3m", None)), &[3.0]);
    assert_close(values(expand(Some("1"), "-2M", None)), &[-2.0]);
    assert_close(values(expand(Some("2.4"), "4.2m", None)), &[10.08]);
    assert_close(values(expand(Some("5.5"), "1M", None)), &[5.5]);
    assert_close(values(expand(Some("5.5"), "0m", None)), &[0.0]);
    assert_close(values(expand(Some("1"), "3e1M", None)), &[30.0]);
    assert_close(values(expand(Some("2.4"), "3e+1m", None)), &[72.0]);
    assert_close(values(expand(Some("1"), "2.0e-1M", None)), &[0.2]);
}

#[test]
fn multiply_bad_preceding() {
    for bad in BAD_NEIGHBOURS {
        assert!(expand(Some(bad), "2m", None).is_err());
    }
}

#[test]
fn multiply_requires_factor() {
    for i in -10..10 {
        assert_eq!(
            expand(Some(&i.to_string()), "m", None),
            Err(ShorthandError::MissingCount)
        );
    }
}

#[test]
fn jump() {
    assert_eq!(
        expand(Some("3"), "2j", Some("1e-10")),
        Ok(vec!["j".to_string(), "j".to_string()])
    );
    assert_eq!(
        expand(Some("3"), "J", Some("1e-10")),
        Ok(vec!["j".to_string()])
    );
    assert_eq!(
        expand(Some("3"), "1J", Some("1e-10")),
        Ok(vec!["j".to_string()])
    );
    assert_eq!(
        expand(Some("taco"), "1j", Some("1e-10")),
        Ok(vec!["j".to_string()])
    );
    assert_eq!(expand(Some("3"), "1J", Some("taco")), Ok(vec!["j".to_string()]));
    assert_eq!(expand(None, "j", None), Ok(vec!["j".to_string()]));
}

#[test]
fn jump_bad_count() {
    for count in ["2.0", "-2.0", "2e0", "2e+1", "2e-1", "-1", "-2", "0"] {
        let token = format!("{}j", count);
        assert!(expand(Some("2"), &token, None).is_err(), "{}", token);
    }
}

#[test]
fn trailing_text_after_mnemonic() {
    for mnemonic in ["r", "m", "i", "ilog", "j"] {
        for trailing in ["r", "m", "i", "ilog", "j", "+", "2", "abc"] {
            let token = format!("2{}{}", mnemonic, trailing);
            assert!(
                expand(Some("100"), &token, Some("500")).is_err(),
                "{}",
                token
            );
        }
    }
}

#[test]
fn no_mnemonic() {
    for token in ["2", "", " ", "3$", "3h", "3q", "3log", "|"] {
        assert!(
            expand(Some("100"), token, Some("500")).is_err(),
            "{:?}",
            token
        );
    }
}

#[test]
fn detecting_shorthand() {
    for token in ["r", "5r", "-1R", "2.0r", "i", "2ilog", "3m", "2rr", "2j", "J", ".5m"] {
        assert!(is_shorthand(token), "{}", token);
    }

    for token in ["rpp", "imp:n", "M1", "trcl", "erg", "lat", "1001.50m", "3", "-", "#4"] {
        assert!(!is_shorthand(token), "{}", token);
    }
}

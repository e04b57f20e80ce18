use super::*;
use crate::parsing::lines::classify;

fn lines_from(text: &str, first_line: usize) -> Vec<ClassifiedLine> {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| classify(line, first_line + i))
        .collect()
}

fn statement_from(text: &str) -> Statement {
    assemble(&lines_from(text, 10), None, &Settings::default())
        .expect("statement should assemble")
}

#[test]
fn positions_on_a_single_line() {
    let statement = statement_from("1 2 3 4 5 9 7 8 9 10");
    assert_eq!(
        statement
            .arguments
            .len(),
        10
    );
    for (i, argument) in statement
        .arguments
        .iter()
        .enumerate()
    {
        assert_eq!(argument.line, 10);
        assert_eq!(argument.display_column, i * 2);
        assert_eq!(argument.mcnp_column, i * 2);
    }

    let statement = statement_from(" 1 2 3 4 5 6 7 8 9 10 ");
    for (i, argument) in statement
        .arguments
        .iter()
        .enumerate()
    {
        assert_eq!(argument.display_column, 1 + i * 2);
    }

    let statement = statement_from("1 2  3   4    5     6");
    let mut expected = 0;
    let mut gap = 2;
    for argument in &statement.arguments {
        assert_eq!(argument.display_column, expected);
        expected += gap;
        gap += 1;
    }
}

#[test]
fn multiple_lines() {
    let text = "666      rpp -1 20 $ X-bounds\n        -15 15 \n        -10 10 $    Z-bounds";
    let statement = statement_from(text);

    assert_eq!(
        statement.contents(),
        vec!["666", "rpp", "-1", "20", "-15", "15", "-10", "10"]
    );
    assert_eq!(
        statement.inline_comments,
        vec!["X-bounds".to_string(), "Z-bounds".to_string()]
    );
    assert_eq!(
        statement.raw_text,
        "666      rpp -1 20 $ X-bounds        -15 15         -10 10 $    Z-bounds"
    );
    assert_eq!(statement.start_line, 10);

    let rpp = &statement.arguments[1];
    assert_eq!((rpp.line, rpp.display_column), (10, 9));

    let fifteen = &statement.arguments[5];
    assert_eq!(fifteen.contents, "15");
    assert_eq!((fifteen.line, fifteen.display_column), (11, 12));

    let ten = &statement.arguments[6];
    assert_eq!(ten.contents, "-10");
    assert_eq!((ten.line, ten.display_column), (12, 8));
}

#[test]
fn equal_sign_is_whitespace() {
    for text in [
        "2  2 5.0  -2 3 100   imp:n= 2 $ Half-Sphere",
        "2  2 5.0  -2 3 100   imp:n  2 $ Half-Sphere",
    ] {
        let statement = statement_from(text);
        assert_eq!(
            statement
                .arguments
                .len(),
            8
        );
        assert_eq!(
            statement
                .inline_comments
                .len(),
            1
        );
        assert_eq!(statement.raw_text, text);

        let keyword = &statement.arguments[6];
        assert_eq!(keyword.contents, "imp:n");
        assert_eq!(keyword.display_column, 21);

        let value = &statement.arguments[7];
        assert_eq!(value.contents, "2");
        assert_eq!(value.display_column, 28);
    }
}

#[test]
fn parentheses_and_colons() {
    let statement = statement_from("2 9 -1.0 (#4:-5): -10 imp:n=6");
    assert_eq!(
        statement.contents(),
        vec!["2", "9", "-1.0", "(", "#4", ":", "-5", ")", ":", "-10", "imp:n", "6"]
    );

    let columns: Vec<usize> = statement.arguments[3..9]
        .iter()
        .map(|argument| argument.display_column)
        .collect();
    assert_eq!(columns, vec![9, 10, 12, 13, 15, 16]);
}

#[test]
fn tabs_move_only_the_mcnp_column() {
    let statement = statement_from("1\t2 3");
    let two = &statement.arguments[1];
    assert_eq!(two.display_column, 2);
    assert_eq!(two.mcnp_column, 8);

    let three = &statement.arguments[2];
    assert_eq!(three.display_column, 4);
    assert_eq!(three.mcnp_column, 10);
}

#[test]
fn comments_inside_a_statement_are_skipped() {
    let statement = statement_from("1 0 -1\nc the outside\n      imp:n=1");
    assert_eq!(statement.contents(), vec!["1", "0", "-1", "imp:n", "1"]);
    assert_eq!(statement.arguments[3].line, 12);
}

#[test]
fn continuation_marker_is_not_an_argument() {
    let statement = statement_from("1 0 -1 &\nimp:n=1");
    assert_eq!(statement.contents(), vec!["1", "0", "-1", "imp:n", "1"]);
}

#[test]
fn header_comment_is_kept() {
    let lines = lines_from("1 0 -1", 3);
    let statement = assemble(&lines, Some("sphere".to_string()), &Settings::default()).unwrap();
    assert_eq!(statement.header_comment, Some("sphere".to_string()));
}

#[test]
fn structural_failures() {
    assert_eq!(
        assemble(&[], None, &Settings::default()),
        Err(ParsingError::NoLines)
    );

    let lines = lines_from("c a comment\n1 0 -1", 4);
    assert_eq!(
        assemble(&lines, None, &Settings::default()),
        Err(ParsingError::CommentLine(4))
    );
}

#[test]
fn line_length_limit() {
    let fits = format!("1 2{}3", " ".repeat(76));
    let statement = statement_from(&fits);
    assert_eq!(
        statement.arguments[2].mcnp_end(),
        80
    );
    assert!(statement
        .diagnostics
        .is_empty());

    let over = format!("1 2{}3", " ".repeat(77));
    let statement = statement_from(&over);
    assert_eq!(
        statement
            .diagnostics
            .len(),
        1
    );
    let diagnostic = &statement.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(
        diagnostic
            .range
            .start
            .character,
        80
    );
}

#[test]
fn line_length_counts_tabs() {
    let text = "1 RPP 1 2  -10 1  8   \t\t\t\t\t                        8";
    let statement = statement_from(text);
    assert_eq!(
        statement
            .diagnostics
            .len(),
        1
    );

    // the offending argument is drawn where the editor shows it
    let last = statement
        .arguments
        .last()
        .unwrap();
    assert_eq!(last.mcnp_end(), 81);
    assert_eq!(
        statement.diagnostics[0]
            .range
            .start
            .character as usize,
        last.display_column
    );
}

#[test]
fn one_diagnostic_per_run() {
    let text = format!("1 2{}3 4 5", " ".repeat(77));
    let statement = statement_from(&text);
    assert_eq!(
        statement
            .diagnostics
            .len(),
        1
    );

    let text = format!("1 2{}3\n      4{}5", " ".repeat(77), " ".repeat(80));
    let statement = statement_from(&text);
    assert_eq!(
        statement
            .diagnostics
            .len(),
        2
    );
}

#[test]
fn line_limit_is_configurable() {
    let settings = Settings {
        tab_stop: 8,
        line_limit: 10,
    };
    let lines = lines_from("1 2 3 4 5 6", 0);
    let statement = assemble(&lines, None, &settings).unwrap();
    assert_eq!(
        statement
            .diagnostics
            .len(),
        1
    );
}

#[test]
fn repeat_expands_in_place() {
    for i in 1..20 {
        let text = format!("IMP:n 1 2 3 {}r 0", i);
        let statement = statement_from(&text);

        assert_eq!(
            statement
                .arguments
                .len(),
            5 + i
        );
        for argument in &statement.arguments[4..4 + i] {
            assert_eq!(argument.contents, "3");
            assert_eq!(argument.display_column, 12);
        }

        let last = statement
            .arguments
            .last()
            .unwrap();
        assert_eq!(last.contents, "0");
        assert_eq!(last.display_column, 12 + i.to_string().len() + 2);
    }
}

#[test]
fn repeat_of_nothing() {
    for i in -5..1 {
        let text = format!("IMP:n 1 2 3 {}r 0", i);
        let statement = statement_from(&text);
        assert_eq!(statement.contents(), vec!["IMP:n", "1", "2", "3", "0"]);
        assert!(statement
            .diagnostics
            .is_empty());
    }
}

#[test]
fn repeats_chain() {
    let statement = statement_from("1 2r 3r");
    assert_eq!(statement.contents(), vec!["1"; 6]);
}

#[test]
fn interpolation_in_a_statement() {
    let statement = statement_from("1 2i 4");
    let values: Vec<f64> = statement
        .arguments
        .iter()
        .map(|argument| {
            argument
                .contents
                .parse::<f64>()
                .unwrap()
        })
        .collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(statement.arguments[1].display_column, 2);
    assert_eq!(statement.arguments[2].display_column, 2);
}

#[test]
fn bad_shorthand_is_retained() {
    let statement = statement_from("imp:n 1 2 3 2.0r 0");
    assert_eq!(statement.contents(), vec!["imp:n", "1", "2", "3", "2.0r", "0"]);
    assert_eq!(
        statement
            .diagnostics
            .len(),
        1
    );
    let diagnostic = &statement.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(
        diagnostic
            .range
            .start
            .character,
        12
    );
}

#[test]
fn huge_shorthand_count_is_an_error() {
    let statement = statement_from("imp:n 1 4000000000000000000r 2");
    assert_eq!(
        statement.contents(),
        vec!["imp:n", "1", "4000000000000000000r", "2"]
    );
    assert_eq!(
        statement
            .diagnostics
            .len(),
        1
    );
    assert_eq!(statement.diagnostics[0].severity, Severity::Error);
    assert_eq!(
        statement.diagnostics[0]
            .range
            .start
            .character,
        8
    );
}

#[test]
fn missing_interpolation_bound_warns() {
    let statement = statement_from("1 2 3i");
    assert_eq!(statement.contents(), vec!["1", "2"]);
    assert_eq!(
        statement
            .diagnostics
            .len(),
        1
    );
    assert_eq!(statement.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn keywords_are_not_shorthand() {
    let statement = statement_from("900 rpp -50 50 121.9 135 40 270");
    assert_eq!(
        statement.contents(),
        vec!["900", "rpp", "-50", "50", "121.9", "135", "40", "270"]
    );
    assert!(statement
        .diagnostics
        .is_empty());
}

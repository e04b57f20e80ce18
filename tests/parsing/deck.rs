#[cfg(test)]
mod verify {
    use mcnp::language::*;
    use mcnp::parsing::{self, blocks};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn blocks_after_the_title() {
        for n in 1..8 {
            let mut content = String::from("title card\n1 0 -1\n2 0 1\n\n1 so 10\n\n");
            for i in 0..n {
                content.push_str(&format!("m{} 1001 1\n", i + 1));
            }
            content.push_str("\n\n1 1 1 this is not MCNP input at all\n");

            let segments = blocks::segment(&content, &Settings::default());
            let sizes: Vec<usize> = segments
                .blocks
                .iter()
                .map(Vec::len)
                .collect();
            assert_eq!(sizes, vec![2, 1, n]);

            let deck = parsing::parse(&content);
            assert_eq!(
                deck.data
                    .len(),
                n
            );
            assert!(deck
                .data
                .iter()
                .all(|statement| !statement
                    .raw_text
                    .contains("not MCNP")));
        }
    }

    #[test]
    fn whole_deck() {
        let deck = parsing::parse(trim(
            r#"
Simple deck
c fuel
1 1 -10.0 -1 100 imp:n=1
2 0 #1 -100 imp:n=1
3 0 100 imp:n=0

1 so 1
100 so 10

m1 92235 1
nps 100
"#,
        ));

        assert_eq!(deck.title, Some("Simple deck".to_string()));
        assert!(deck
            .diagnostics
            .is_empty());

        let fuel = deck
            .cell(1)
            .unwrap();
        assert_eq!(fuel.density_units, DensityUnits::Mass);
        assert_eq!(fuel.density, 10.0);
        assert_eq!(
            fuel.used_surfaces
                .iter()
                .map(|reference| reference.0)
                .collect::<Vec<_>>(),
            vec![-1.0, 100.0]
        );
        assert_eq!(fuel.header_comment, Some("fuel".to_string()));

        let moderator = deck
            .cell(2)
            .unwrap();
        assert!(moderator.is_void());
        assert!(moderator
            .used_cells
            .contains(&1));

        assert_eq!(
            deck.surface(100)
                .unwrap()
                .parameter_values,
            vec![10.0]
        );

        let tags: Vec<CardTag> = deck
            .data
            .iter()
            .filter_map(Statement::tag)
            .collect();
        assert_eq!(tags[0].mnemonic, "m");
        assert_eq!(tags[0].number, Some(1));
        assert_eq!(tags[1].mnemonic, "nps");
    }

    #[test]
    fn diagnostics_are_collected() {
        let long = format!("2 0 1{}5", " ".repeat(80));
        let content = format!(
            "title\n0 0 -1\n{}\n3 1 -30.0 -1\n\n0 px 1\n5 px j\n\nnps 2.0r\n",
            long
        );
        let deck = parsing::parse(&content);

        let errors: Vec<&Diagnostic> = deck
            .diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.is_error())
            .collect();
        let warnings: Vec<&Diagnostic> = deck
            .diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Warning)
            .collect();

        // cell 0, the long line, surface 0, the bad repeat count
        assert_eq!(errors.len(), 4);
        // heavier than osmium, the j surface parameter
        assert_eq!(warnings.len(), 2);

        assert!(deck.has_errors());
        assert_eq!(
            deck.cells
                .len(),
            3
        );
        assert_eq!(
            deck.surfaces
                .len(),
            2
        );

        // each entity keeps its own findings too
        assert_eq!(
            deck.cell(0)
                .unwrap()
                .diagnostics
                .len(),
            1
        );
    }

    #[test]
    fn settings_change_columns() {
        let content = "title\n1\t0 -1\n";

        let deck = parsing::parse(content);
        assert_eq!(deck.cells[0].id, 1);
        assert!(deck
            .diagnostics
            .is_empty());

        let narrow = Settings {
            tab_stop: 8,
            line_limit: 10,
        };
        let deck = parsing::parse_with_settings(content, &narrow);
        assert_eq!(
            deck.diagnostics
                .len(),
            1
        );

        let wide = Settings {
            tab_stop: 2,
            line_limit: 10,
        };
        let deck = parsing::parse_with_settings(content, &wide);
        assert!(deck
            .diagnostics
            .is_empty());
    }

    #[test]
    fn deck_serializes() {
        let deck = parsing::parse("title\n1 0 -1 imp:n=1\n\n1 so 1\n");
        let value = serde_json::to_value(&deck).unwrap();

        assert_eq!(value["title"], "title");
        assert_eq!(value["cells"][0]["id"], 1);
        assert_eq!(value["cells"][0]["density_units"], "Void");
        assert_eq!(value["cells"][0]["used_surfaces"][0], -1.0);
        assert_eq!(value["surfaces"][0]["mnemonic"]["contents"], "so");
    }

    #[test]
    fn empty_input() {
        let deck = parsing::parse("");
        assert_eq!(deck.title, None);
        assert!(deck
            .cells
            .is_empty());
        assert!(!deck.has_errors());
    }
}

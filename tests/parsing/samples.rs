#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::Path;

    use mcnp::parsing;

    #[test]
    fn ensure_samples_parse() {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("i")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .i files found in samples directory");

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let deck = parsing::parse(&content);
            if deck.has_errors() {
                println!("File {:?} has errors: {:?}", file, deck.diagnostics);
                failures.push(file.clone());
            }
            if deck
                .cells
                .is_empty()
                || deck
                    .surfaces
                    .is_empty()
            {
                println!("File {:?} is missing cells or surfaces", file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should parse without errors, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn godiva() {
        let content = parsing::load(Path::new("tests/samples/godiva.i")).unwrap();
        let deck = parsing::parse(&content);

        assert_eq!(
            deck.title
                .as_deref(),
            Some("Godiva, a bare sphere of highly enriched uranium")
        );
        assert_eq!(
            deck.cells
                .len(),
            2
        );
        assert_eq!(
            deck.surfaces
                .len(),
            1
        );
        assert_eq!(
            deck.data
                .len(),
            4
        );
        assert!(deck
            .diagnostics
            .is_empty());

        let sphere = deck
            .cell(1)
            .unwrap();
        assert_eq!(
            sphere
                .header_comment
                .as_deref(),
            Some("the sphere itself")
        );
        assert!(sphere.uses_surface(-1.0));

        let material = &deck.data[1];
        assert_eq!(
            material
                .arguments
                .len(),
            7
        );
        assert_eq!(
            material
                .header_comment
                .as_deref(),
            Some("enriched uranium metal")
        );
    }

    #[test]
    fn shielded_box() {
        let content = parsing::load(Path::new("tests/samples/shielded_box.i")).unwrap();
        let deck = parsing::parse(&content);

        assert_eq!(
            deck.cells
                .len(),
            4
        );
        assert_eq!(
            deck.surfaces
                .len(),
            5
        );
        assert_eq!(
            deck.data
                .len(),
            9
        );
        assert!(!deck.has_errors());

        let water = deck
            .cell(20)
            .unwrap();
        assert!(water
            .used_cells
            .contains(&10));
        let volume = water
            .parameter("vol")
            .unwrap();
        assert_eq!(
            volume
                .values
                .len(),
            3
        );

        let outside = deck
            .cell(30)
            .unwrap();
        assert!(outside.is_void());
        assert!(outside
            .used_cells
            .is_empty());

        let tabbed = deck
            .surface(11)
            .unwrap();
        assert_eq!(tabbed.parameter_values, vec![5.0]);
        let mnemonic = tabbed
            .mnemonic
            .as_ref()
            .unwrap();
        assert_eq!(mnemonic.display_column, 3);
        assert_eq!(mnemonic.mcnp_column, 8);

        let sphere = deck
            .surface(30)
            .unwrap();
        assert_eq!(sphere.transform, Some(1));

        let energies = deck
            .data
            .iter()
            .find(|statement| statement.arguments[0].contents == "e0")
            .unwrap();
        assert_eq!(
            energies
                .arguments
                .len(),
            12
        );

        let hydrogen = deck
            .data
            .iter()
            .find(|statement| statement.arguments[0].contents == "m2")
            .unwrap();
        assert_eq!(
            hydrogen.contents(),
            vec!["m2", "1001.80c", "2", "8016.80c", "1"]
        );
    }
}

use super::*;
use crate::language::{Settings, Severity};
use crate::parsing::lines::classify;
use crate::parsing::statement::assemble;

fn surface_from(text: &str) -> Surface {
    let lines = vec![classify(text, 0)];
    let statement = assemble(&lines, None, &Settings::default()).expect("statement");
    parse_surface(&statement)
}

fn errors(surface: &Surface) -> usize {
    surface
        .diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.is_error())
        .count()
}

const MNEMONICS: [&str; 4] = ["rpp", "px", "taco", "doesntmatter"];

#[test]
fn normal_surfaces() {
    for id in 1..20 {
        for mnemonic in MNEMONICS {
            let text = format!("{} {} 1 -2.5 3e2", id, mnemonic);
            let surface = surface_from(&text);

            assert_eq!(surface.id, id);
            assert_eq!(surface.modifier, SurfaceModifier::None);
            assert_eq!(surface.transform, None);
            assert_eq!(
                surface
                    .mnemonic
                    .as_ref()
                    .map(|argument| argument.contents.as_str()),
                Some(mnemonic)
            );
            assert_eq!(surface.parameter_values, vec![1.0, -2.5, 300.0]);
            assert_eq!(
                surface
                    .parameters
                    .len(),
                3
            );
            assert!(surface
                .diagnostics
                .is_empty());
        }
    }
}

#[test]
fn transformed_surfaces() {
    for id in 1..20 {
        for tr in 1..10 {
            let text = format!("{} {} px 4", id, tr);
            let surface = surface_from(&text);

            assert_eq!(surface.id, id);
            assert_eq!(surface.transform, Some(tr));
            assert_eq!(
                surface
                    .mnemonic
                    .unwrap()
                    .contents,
                "px"
            );
            assert_eq!(surface.parameter_values, vec![4.0]);
        }
    }
}

#[test]
fn periodic_surfaces() {
    let surface = surface_from("1 -2 px 4");
    assert_eq!(surface.transform, Some(-2));
    assert!(surface
        .diagnostics
        .is_empty());
}

#[test]
fn bad_transforms() {
    let surface = surface_from("1 0 px 4");
    assert_eq!(errors(&surface), 1);

    let surface = surface_from("1 1.5 px 4");
    assert_eq!(errors(&surface), 1);
    assert_eq!(surface.transform, Some(1));
}

#[test]
fn modified_surfaces() {
    for id in 1..20 {
        for (prefix, modifier) in [
            ("", SurfaceModifier::None),
            ("*", SurfaceModifier::Reflective),
            ("+", SurfaceModifier::WhiteBoundary),
        ] {
            let surface = surface_from(&format!("{}{} 3 rpp 0 1 0 1 0 1", prefix, id));
            assert_eq!(surface.id, id);
            assert_eq!(surface.modifier, modifier);
            assert_eq!(surface.transform, Some(3));
            assert!(surface
                .diagnostics
                .is_empty());
        }
    }
}

#[test]
fn bad_modifiers() {
    for modifier in ["\\", "-", "!", "c", "#", "@"] {
        let surface = surface_from(&format!("{}1 px 4", modifier));
        assert_eq!(errors(&surface), 1, "{}", modifier);
        assert_eq!(surface.id, 1);
        assert_eq!(surface.modifier, SurfaceModifier::None);
    }
}

#[test]
fn surface_id_range() {
    for text in ["0 px 1", "100000 px 1", "-0 px 1"] {
        assert!(errors(&surface_from(text)) >= 1, "{}", text);
    }
    assert_eq!(errors(&surface_from("99999 px 1")), 0);

    assert_eq!(errors(&surface_from("1000 4 px 1")), 1);
    assert_eq!(errors(&surface_from("999 4 px 1")), 0);
}

#[test]
fn non_integer_id() {
    let surface = surface_from("2.5 px 1");
    assert_eq!(surface.id, 2);
    assert_eq!(errors(&surface), 1);
}

#[test]
fn jump_parameters() {
    let surface = surface_from("1 sq 1 1 1 j j 0 -1 2j");
    assert_eq!(
        surface.parameter_values,
        vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0]
    );
    let warnings = surface
        .diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.severity == Severity::Warning)
        .count();
    assert_eq!(warnings, 4);
    assert_eq!(errors(&surface), 0);
}

#[test]
fn non_numeric_parameters() {
    let surface = surface_from("1 px abc");
    assert!(surface.parameter_values[0].is_nan());
    assert_eq!(errors(&surface), 1);
    assert_eq!(surface.parameters[0].contents, "abc");
}

#[test]
fn missing_mnemonic() {
    let surface = surface_from("1");
    assert_eq!(surface.mnemonic, None);
    assert_eq!(errors(&surface), 1);

    let surface = surface_from("1 3");
    assert_eq!(surface.transform, Some(3));
    assert_eq!(surface.mnemonic, None);
    assert_eq!(errors(&surface), 1);
}

#[test]
fn shorthand_in_parameters() {
    let surface = surface_from("1 rpp 0 1 2r 3m");
    assert_eq!(surface.parameter_values, vec![0.0, 1.0, 1.0, 1.0, 3.0]);
}

use super::*;
use crate::language::{Settings, Severity};
use crate::parsing::lines::classify;
use crate::parsing::statement::assemble;

fn cell_from(text: &str) -> Cell {
    let lines: Vec<_> = text
        .split('\n')
        .enumerate()
        .map(|(i, line)| classify(line, i))
        .collect();
    let statement = assemble(&lines, None, &Settings::default()).expect("statement");
    parse_cell(&statement)
}

fn surfaces(cell: &Cell) -> Vec<f64> {
    cell.used_surfaces
        .iter()
        .map(|reference| reference.0)
        .collect()
}

fn errors(cell: &Cell) -> usize {
    cell.diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.is_error())
        .count()
}

fn warnings(cell: &Cell) -> usize {
    cell.diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.severity == Severity::Warning)
        .count()
}

const GEOMETRIES: [(&str, &[f64]); 3] = [
    ("2 3 4 -10", &[-10.0, 2.0, 3.0, 4.0]),
    ("3:4.2: -8", &[-8.0, 3.0, 4.2]),
    ("(-10:8):(5.3 3 -3 8) -666", &[-666.0, -10.0, -3.0, 3.0, 5.3, 8.0]),
];

#[test]
fn simple_cells() {
    for id in [1, 2, 3, 99999, 99_999_999] {
        for material in [1, 2, 3, 4, 999] {
            for density in ["-1.0", "-2.0", "-3", "1.0", "2.0", "3.0"] {
                for (geometry, expected) in GEOMETRIES {
                    let text = format!("{} {} {} {}", id, material, density, geometry);
                    let cell = cell_from(&text);

                    assert_eq!(cell.id, id);
                    assert_eq!(cell.material_id, material);
                    assert!(!cell.is_void());

                    let value: f64 = density
                        .parse()
                        .unwrap();
                    if value < 0.0 {
                        assert_eq!(cell.density_units, DensityUnits::Mass);
                    } else {
                        assert_eq!(cell.density_units, DensityUnits::Atomic);
                    }
                    assert_eq!(cell.density, value.abs());

                    assert_eq!(surfaces(&cell), expected.to_vec(), "{}", text);
                    assert!(cell
                        .diagnostics
                        .is_empty());
                }
            }
        }
    }
}

#[test]
fn void_cells() {
    for id in [1, 2, 3, 99999] {
        for (geometry, expected) in GEOMETRIES {
            let text = format!("{} 0 {}", id, geometry);
            let cell = cell_from(&text);

            assert_eq!(cell.id, id);
            assert!(cell.is_void());
            assert_eq!(cell.density_units, DensityUnits::Void);
            assert_eq!(cell.density, 0.0);
            assert_eq!(surfaces(&cell), expected.to_vec());
            assert!(cell
                .diagnostics
                .is_empty());
        }
    }
}

#[test]
fn parameters_after_geometry() {
    let cell = cell_from("1 1 -10.0 -1 100 imp:n=1");

    assert_eq!(surfaces(&cell), vec![-1.0, 100.0]);
    assert!(cell.uses_surface(-1.0));
    assert_eq!(cell.density_units, DensityUnits::Mass);
    assert_eq!(cell.density, 10.0);

    let importance = cell
        .parameter("imp")
        .expect("imp parameter");
    assert_eq!(importance.values[0].contents, "1");
    assert_eq!(
        cell.parameters
            .len(),
        1
    );
}

#[test]
fn parameters_across_lines() {
    let cell = cell_from("10 0 -1 2 -3\n      u=1 fill=2 (0 0 1)\n      imp:n,p 1 1");

    assert_eq!(surfaces(&cell), vec![-3.0, -1.0, 2.0]);
    let names: Vec<&str> = cell
        .parameters
        .iter()
        .map(|parameter| parameter.name())
        .collect();
    assert_eq!(names, vec!["u", "fill", "imp"]);
    assert_eq!(
        cell.parameter("fill")
            .unwrap()
            .values
            .len(),
        6
    );
}

#[test]
fn complements() {
    let cell = cell_from("666 0 #4 #4 #2");
    assert_eq!(
        cell.used_cells
            .iter()
            .copied()
            .collect::<Vec<_>>(),
        vec![2, 4]
    );
    assert!(cell
        .used_surfaces
        .is_empty());
    assert!(cell
        .diagnostics
        .is_empty());

    let cell = cell_from("1 1 -1.0 3:4.2:#8");
    assert_eq!(surfaces(&cell), vec![3.0, 4.2]);
    assert!(cell
        .used_cells
        .contains(&8));

    let cell = cell_from("1 1 -1.0 (-10:8):(5.3 #3 -3) -666");
    assert!(cell
        .used_cells
        .contains(&3));
    assert_eq!(surfaces(&cell), vec![-666.0, -10.0, -3.0, 5.3, 8.0]);
}

#[test]
fn complement_of_a_region() {
    let cell = cell_from("1 1 -1.0 -10 8 #(5 6 -2) -666");
    assert!(cell
        .used_cells
        .is_empty());
    assert_eq!(surfaces(&cell), vec![-666.0, -10.0, -2.0, 5.0, 6.0, 8.0]);
    assert!(cell
        .diagnostics
        .is_empty());
}

#[test]
fn bad_complements() {
    let cell = cell_from("1 0 #4.1");
    assert_eq!(warnings(&cell), 1);
    assert_eq!(errors(&cell), 0);
    assert!(cell
        .used_cells
        .contains(&4));

    let cell = cell_from("1 0 #2.0");
    assert_eq!(warnings(&cell), 1);
    assert!(cell
        .used_cells
        .contains(&2));

    for text in ["1 0 #-2", "1 0 #0", "1 0 #abc", "1 0 # 5"] {
        let cell = cell_from(text);
        assert_eq!(errors(&cell), 1, "{}", text);
    }
}

#[test]
fn bad_surface_references() {
    let cell = cell_from("1 0 +5 -6");
    assert_eq!(errors(&cell), 1);
    assert_eq!(surfaces(&cell), vec![-6.0, 5.0]);

    let cell = cell_from("1 0 0 -6");
    assert_eq!(errors(&cell), 1);
    assert_eq!(surfaces(&cell), vec![-6.0]);

    let cell = cell_from("1 0 1e1 -6");
    assert_eq!(warnings(&cell), 1);
    assert_eq!(surfaces(&cell), vec![-6.0, 10.0]);
}

#[test]
fn zero_density() {
    let cell = cell_from("4 6 0 -10 666");
    assert_eq!(cell.material_id, 6);
    assert!(!cell.is_void());
    assert_eq!(cell.density_units, DensityUnits::Void);
    assert_eq!(warnings(&cell), 1);
    assert_eq!(surfaces(&cell), vec![-10.0, 666.0]);
}

#[test]
fn heavier_than_osmium() {
    let cell = cell_from("1 1 -23.0 -1");
    assert_eq!(warnings(&cell), 1);
    assert_eq!(cell.density, 23.0);

    let cell = cell_from("1 1 -22.5 -1");
    assert!(cell
        .diagnostics
        .is_empty());

    // atom densities are not compared against osmium
    let cell = cell_from("1 1 30 -1");
    assert!(cell
        .diagnostics
        .is_empty());
}

#[test]
fn bad_density() {
    let cell = cell_from("1 1 abc -1");
    assert!(cell
        .density
        .is_nan());
    assert_eq!(errors(&cell), 1);
}

#[test]
fn cell_id_range() {
    for text in ["0 0 -1", "100000000 0 -1", "-3 0 -1"] {
        let cell = cell_from(text);
        assert_eq!(errors(&cell), 1, "{}", text);
    }

    let cell = cell_from("2.5 0 -1");
    assert_eq!(cell.id, 2);
    assert_eq!(errors(&cell), 1);

    let cell = cell_from("a 0 -1");
    assert_eq!(cell.id, 0);
    assert_eq!(errors(&cell), 1);
}

#[test]
fn bad_material() {
    let cell = cell_from("1 -2 -1.0 -1");
    assert_eq!(errors(&cell), 1);
    assert!(!cell.is_void());
    assert_eq!(cell.density, 1.0);

    // still treated as non-void, so the density slot is consumed
    let cell = cell_from("1 m1 -1.0 -1");
    assert_eq!(errors(&cell), 1);
    assert!(!cell.is_void());
    assert_eq!(cell.density, 1.0);
    assert_eq!(surfaces(&cell), vec![-1.0]);
}

#[test]
fn header_comment_carries_over() {
    let lines = vec![classify("1 0 -1", 5)];
    let statement = assemble(&lines, Some("inner sphere".to_string()), &Settings::default())
        .unwrap();
    let cell = parse_cell(&statement);
    assert_eq!(cell.header_comment, Some("inner sphere".to_string()));
}

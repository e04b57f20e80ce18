//! Cell cards: `j m d geom params`, or `j 0 geom params` for a void cell.

use std::collections::BTreeSet;

use crate::language::{Argument, Cell, DensityUnits, Diagnostic, Range, Reference, Statement};
use crate::parsing::numbers::{is_pure_integer, parse_number, parse_pure_integer};
use crate::parsing::parameters;

const LARGEST_CELL_ID: i64 = 99_999_999;

/// Density of osmium; nothing real is heavier.
const DENSEST_MATERIAL: f64 = 23.0;

/// Extract a Cell from its statement. Problems are recorded on the cell and
/// every field receives a value regardless.
pub fn parse_cell(statement: &Statement) -> Cell {
    let mut input = CellParser::new(statement);

    let id = input.read_id();
    let (material_id, void) = input.read_material();
    let (density, density_units) = if void {
        (0.0, DensityUnits::Void)
    } else {
        input.read_density()
    };

    let start = if void { 2 } else { 3 };
    let end = input.read_geometry(start);

    let tail = statement
        .arguments
        .get(end..)
        .unwrap_or_default();
    let (parameters, mut found) = parameters::extract(tail);
    input
        .diagnostics
        .append(&mut found);

    Cell {
        id,
        material_id,
        density,
        density_units,
        used_surfaces: input.used_surfaces,
        used_cells: input.used_cells,
        parameters,
        header_comment: statement
            .header_comment
            .clone(),
        diagnostics: input.diagnostics,
    }
}

struct CellParser<'a> {
    statement: &'a Statement,
    used_surfaces: BTreeSet<Reference>,
    used_cells: BTreeSet<i64>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> CellParser<'a> {
    fn new(statement: &'a Statement) -> CellParser<'a> {
        CellParser {
            statement,
            used_surfaces: BTreeSet::new(),
            used_cells: BTreeSet::new(),
            diagnostics: Vec::new(),
        }
    }

    fn argument(&self, index: usize) -> Option<&'a Argument> {
        self.statement
            .arguments
            .get(index)
    }

    fn error(&mut self, range: Range, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::error(range, message));
    }

    fn warning(&mut self, range: Range, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::warning(range, message));
    }

    fn read_id(&mut self) -> i64 {
        let argument = match self.argument(0) {
            Some(argument) => argument,
            None => {
                self.error(self.statement.range(), "cell card is empty");
                return 0;
            }
        };

        match parse_pure_integer(&argument.contents) {
            Some(id) if (1..=LARGEST_CELL_ID).contains(&id) => id,
            Some(id) => {
                self.error(
                    argument.range(),
                    format!("cell ID must be between 1 and {}", LARGEST_CELL_ID),
                );
                id
            }
            None => {
                self.error(
                    argument.range(),
                    format!("cell ID '{}' is not an integer", argument.contents),
                );
                parse_number(&argument.contents).map_or(0, |value| value.trunc() as i64)
            }
        }
    }

    /// Returns the material number and whether the cell is void. A
    /// material that can't be read is assumed to be present, so a density
    /// still follows it.
    fn read_material(&mut self) -> (i64, bool) {
        let argument = match self.argument(1) {
            Some(argument) => argument,
            None => {
                self.error(self.statement.range(), "cell card has no material");
                return (-1, false);
            }
        };

        match parse_pure_integer(&argument.contents) {
            Some(0) => (0, true),
            Some(material) if material < 0 => {
                self.error(argument.range(), "Material ID can not be negative");
                (material, false)
            }
            Some(material) => (material, false),
            None => {
                self.error(
                    argument.range(),
                    format!("material ID '{}' is not an integer", argument.contents),
                );
                (-1, false)
            }
        }
    }

    fn read_density(&mut self) -> (f64, DensityUnits) {
        let argument = match self.argument(2) {
            Some(argument) => argument,
            None => {
                self.error(self.statement.range(), "non-void cell has no density");
                return (f64::NAN, DensityUnits::Atomic);
            }
        };

        let value = match parse_number(&argument.contents) {
            Some(value) => value,
            None => {
                self.error(
                    argument.range(),
                    format!("density '{}' is not a number", argument.contents),
                );
                return (f64::NAN, DensityUnits::Atomic);
            }
        };

        if value == 0.0 {
            self.warning(argument.range(), "non-void cell has density 0");
            (0.0, DensityUnits::Void)
        } else if value < 0.0 {
            let density = value.abs();
            if density >= DENSEST_MATERIAL {
                self.warning(
                    argument.range(),
                    format!(
                        "density of {} g/cm³ exceeds that of osmium, the densest element",
                        density
                    ),
                );
            }
            (density, DensityUnits::Mass)
        } else {
            (value, DensityUnits::Atomic)
        }
    }

    /// Walk the geometry description, collecting the surfaces and cells it
    /// refers to. Returns the index of the first argument after it.
    fn read_geometry(&mut self, start: usize) -> usize {
        let statement: &'a Statement = self.statement;
        let arguments = &statement.arguments;
        let mut index = start;

        while let Some(argument) = arguments.get(index) {
            let text = argument
                .contents
                .as_str();

            if argument.is_structural() {
                index += 1;
                continue;
            }

            if let Some(cell) = text.strip_prefix('#') {
                let next = arguments.get(index + 1);
                self.read_complement(argument, cell, next);
                index += 1;
                continue;
            }

            let value = match parse_number(text) {
                Some(value) => value,
                None => break,
            };

            if text.starts_with('+') {
                self.error(
                    argument.range(),
                    "'+' is not valid for geometry; a positive sense is written without a sign",
                );
            }

            if value == 0.0 {
                self.error(argument.range(), "surface 0 does not exist");
            } else {
                if text.contains(['e', 'E']) {
                    self.warning(
                        argument.range(),
                        "avoid scientific notation for surface numbers",
                    );
                }
                self.used_surfaces
                    .insert(Reference(value));
            }

            index += 1;
        }

        index
    }

    fn read_complement(&mut self, argument: &Argument, cell: &str, next: Option<&Argument>) {
        if cell.is_empty() {
            // `#(...)` complements a region rather than a cell
            let region = next.is_some_and(|next| next.contents == "(");
            if !region {
                self.error(
                    argument.range(),
                    "'#' must be followed by a cell number or a parenthesised region",
                );
            }
            return;
        }

        if cell.starts_with('-') {
            self.error(argument.range(), "'-' not valid for geometry");
            return;
        }

        let value = match parse_number(cell) {
            Some(value) => value,
            None => {
                self.error(
                    argument.range(),
                    format!("'{}' is not a cell number", cell),
                );
                return;
            }
        };

        let id = value.trunc() as i64;
        if id == 0 {
            self.error(argument.range(), "cell 0 does not exist");
            return;
        }

        if !is_pure_integer(cell) {
            self.warning(
                argument.range(),
                format!("avoid non-pure integers for cell numbers, using {}", id),
            );
        }

        self.used_cells
            .insert(id);
    }
}

#[cfg(test)]
#[path = "checks/cells.rs"]
mod check;

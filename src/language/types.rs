//! Types representing the statements and cards of an MCNP input deck

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::{Diagnostic, Range};

/// Knobs for the fixed-format reader. The defaults are those of MCNP itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Tabs advance to the next multiple of this many columns.
    pub tab_stop: usize,
    /// Last column MCNP will read on an input line.
    pub line_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tab_stop: 8,
            line_limit: 80,
        }
    }
}

/// One whitespace (or punctuation) delimited token of a statement.
///
/// The same token has two column positions: where the editor draws it,
/// counting a tab as one character, and where MCNP reads it, after tabs
/// have been expanded to stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub contents: String,
    pub line: usize,
    pub display_column: usize,
    pub mcnp_column: usize,
}

impl Argument {
    pub fn new(
        contents: impl Into<String>,
        line: usize,
        display_column: usize,
        mcnp_column: usize,
    ) -> Argument {
        Argument {
            contents: contents.into(),
            line,
            display_column,
            mcnp_column,
        }
    }

    /// The same position, different text. Used when shorthand expands.
    pub fn replaced(&self, contents: impl Into<String>) -> Argument {
        Argument {
            contents: contents.into(),
            ..self.clone()
        }
    }

    pub fn width(&self) -> usize {
        self.contents
            .chars()
            .count()
    }

    /// One-origin column of the last character as MCNP counts it.
    pub fn mcnp_end(&self) -> usize {
        self.mcnp_column + self.width()
    }

    pub fn range(&self) -> Range {
        Range::on_line(
            self.line,
            self.display_column,
            self.display_column + self.width(),
        )
    }

    pub fn is_structural(&self) -> bool {
        matches!(self.contents.as_str(), "(" | ")" | ":")
    }
}

/// A logical input record, possibly spanning several physical lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub arguments: Vec<Argument>,
    pub raw_text: String,
    pub inline_comments: Vec<String>,
    pub header_comment: Option<String>,
    pub start_line: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl Statement {
    /// Span from the first argument to the end of the last one.
    pub fn range(&self) -> Range {
        match (
            self.arguments
                .first(),
            self.arguments
                .last(),
        ) {
            (Some(first), Some(last)) => Range::new(
                first
                    .range()
                    .start,
                last.range()
                    .end,
            ),
            _ => Range::on_line(self.start_line, 0, 0),
        }
    }

    pub fn contents(&self) -> Vec<&str> {
        self.arguments
            .iter()
            .map(|argument| {
                argument
                    .contents
                    .as_str()
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    Cells,
    Surfaces,
    Data,
}

impl BlockKind {
    pub fn from_index(index: usize) -> Option<BlockKind> {
        match index {
            0 => Some(BlockKind::Cells),
            1 => Some(BlockKind::Surfaces),
            2 => Some(BlockKind::Data),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DensityUnits {
    Void,
    /// g/cm³, written as a negative density
    Mass,
    /// atoms/b-cm, written as a positive density
    Atomic,
}

/// A numeric surface reference from a cell's geometry. Macrobody facets are
/// written as decimals (`5.3`), so this is not an integer; ordering and
/// equality are total so references can be collected into sets.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Reference(pub f64);

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Reference {}

impl PartialOrd for Reference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .total_cmp(&other.0)
    }
}

impl From<f64> for Reference {
    fn from(value: f64) -> Self {
        Reference(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Particle {
    Neutron,
    Photon,
    Electron,
    Other,
}

/// A keyword and the values that follow it, as in `imp:n=1` or
/// `fill 3 (1 0 0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataParameter {
    pub keyword: Argument,
    pub values: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub id: i64,
    pub material_id: i64,
    pub density: f64,
    pub density_units: DensityUnits,
    pub used_surfaces: BTreeSet<Reference>,
    pub used_cells: BTreeSet<i64>,
    pub parameters: Vec<DataParameter>,
    pub header_comment: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Cell {
    pub fn is_void(&self) -> bool {
        self.material_id == 0
    }

    pub fn uses_surface(&self, surface: f64) -> bool {
        self.used_surfaces
            .contains(&Reference(surface))
    }

    pub fn parameter(&self, name: &str) -> Option<&DataParameter> {
        self.parameters
            .iter()
            .find(|parameter| {
                parameter
                    .name()
                    .eq_ignore_ascii_case(name)
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SurfaceModifier {
    None,
    Reflective,
    WhiteBoundary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Surface {
    pub id: i64,
    pub modifier: SurfaceModifier,
    pub transform: Option<i64>,
    /// The equation mnemonic (`px`, `rpp`, ...) exactly as written. It is
    /// not yet resolved into a kind of surface.
    pub mnemonic: Option<Argument>,
    pub parameters: Vec<Argument>,
    pub parameter_values: Vec<f64>,
    pub header_comment: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The name of a card split into its parts, eg `*F14:p` is modifier `*`,
/// mnemonic `F`, number 14 and the photon designator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardTag {
    pub modifier: Option<char>,
    pub mnemonic: String,
    pub number: Option<u64>,
    pub particles: Vec<Particle>,
}

/// Everything extracted from one input deck.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deck {
    pub title: Option<String>,
    pub cells: Vec<Cell>,
    pub surfaces: Vec<Surface>,
    pub data: Vec<Statement>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Deck {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(Diagnostic::is_error)
    }

    pub fn cell(&self, id: i64) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|cell| cell.id == id)
    }

    pub fn surface(&self, id: i64) -> Option<&Surface> {
        self.surfaces
            .iter()
            .find(|surface| surface.id == id)
    }
}

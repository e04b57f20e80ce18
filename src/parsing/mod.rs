//! parser for MCNP input decks

use std::path::Path;
use tracing::debug;

use crate::language::{BlockKind, Deck, LoadingError, Settings};

pub mod blocks;
pub mod cells;
pub mod lines;
pub mod numbers;
pub mod parameters;
pub mod shorthand;
pub mod statement;
pub mod surfaces;
mod tags;

/// Read a file and return an owned String. Nothing that is parsed from it
/// borrows from it, but reading is kept separate from parsing so that the
/// parser does no I/O.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse the text of an input deck with MCNP's usual column rules.
pub fn parse(content: &str) -> Deck {
    parse_with_settings(content, &Settings::default())
}

/// Parse the text of an input deck. This never fails; problems are returned
/// as diagnostics on the Deck alongside whatever could be extracted.
pub fn parse_with_settings(content: &str, settings: &Settings) -> Deck {
    let segments = blocks::segment(content, settings);

    let mut diagnostics = segments
        .diagnostics
        .clone();

    let mut cells = Vec::new();
    for statement in segments.block(BlockKind::Cells) {
        let cell = cells::parse_cell(statement);
        diagnostics.extend(
            statement
                .diagnostics
                .iter()
                .cloned(),
        );
        diagnostics.extend(
            cell.diagnostics
                .iter()
                .cloned(),
        );
        cells.push(cell);
    }

    let mut surfaces = Vec::new();
    for statement in segments.block(BlockKind::Surfaces) {
        let surface = surfaces::parse_surface(statement);
        diagnostics.extend(
            statement
                .diagnostics
                .iter()
                .cloned(),
        );
        diagnostics.extend(
            surface
                .diagnostics
                .iter()
                .cloned(),
        );
        surfaces.push(surface);
    }

    let data = segments
        .block(BlockKind::Data)
        .to_vec();
    for statement in &data {
        diagnostics.extend(
            statement
                .diagnostics
                .iter()
                .cloned(),
        );
    }

    debug!(
        "Found {} cell{}, {} surface{} and {} data card{}",
        cells.len(),
        if cells.len() == 1 { "" } else { "s" },
        surfaces.len(),
        if surfaces.len() == 1 { "" } else { "s" },
        data.len(),
        if data.len() == 1 { "" } else { "s" }
    );

    if !diagnostics.is_empty() {
        debug!("diagnostics: {}", diagnostics.len());
    }

    Deck {
        title: segments.title,
        cells,
        surfaces,
        data,
        diagnostics,
    }
}

//! Parser for MCNP input decks.
//!
//! The pipeline classifies physical lines, assembles them into logical
//! statements, segments those into the Cell, Surface and Data blocks, and
//! finally extracts typed cells and surfaces. Problems are reported as
//! diagnostics attached to whatever entity found them; parsing a document
//! never fails outright.

#[macro_use]
mod regex;

pub mod editor;
pub mod language;
pub mod parsing;
pub mod problem;

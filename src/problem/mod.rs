// Presentation of diagnostics on the terminal

mod format;

// Re-export all public symbols
pub use format::*;

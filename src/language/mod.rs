// Types representing a parsed MCNP input deck

mod diagnostic;
mod error;
mod types;

// Re-export all public symbols
pub use diagnostic::*;
pub use error::*;
pub use types::*;

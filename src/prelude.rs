// Error things.
pub use miette::{IntoDiagnostic, WrapErr};

// Aliases.

/// The standard result for this application.
pub type AppResult<T = ()> = miette::Result<T>;

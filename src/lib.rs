//! Context and output token limits for Azure OpenAI models.
//!
//! The limits come from a table compiled into the crate. Look them up by model
//! name and, optionally, version:
//!
//! ```
//! use azure_openai_limits::{get_limits, model_exists};
//!
//! let limits = get_limits("gpt-4o", None)?;
//! assert!(limits.context() > limits.output());
//!
//! // An unknown version falls back to the model's default limits...
//! assert_eq!(get_limits("gpt-4o", Some("not-a-release"))?, limits);
//! // ...but is not reported as existing.
//! assert!(!model_exists("gpt-4o", Some("not-a-release")));
//! # Ok::<(), azure_openai_limits::Error>(())
//! ```

mod config;
mod dataset;
mod error;
mod io;
mod lookup;
mod types;

pub use dataset::{DEFAULT_VERSION, Dataset, ModelTable};
pub use error::Error;
pub use lookup::{
    all_models, context_limit, get_limits, list_models, list_versions, model_exists, output_limit,
};
pub use types::Limits;

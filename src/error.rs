use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

// Code layout:
// azure_openai_limits::lookup -> bad queries against a loaded table.
// azure_openai_limits::data -> the table itself could not be built.
// azure_openai_limits::value -> a limits record with a bad field.

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("{0}")]
    #[diagnostic(
        code(azure_openai_limits::lookup::invalid_argument),
        help("Pass a model name such as 'gpt-4o'.")
    )]
    InvalidArgument(String),

    #[error("Unknown model: '{model}'. Available models: {available:?}")]
    #[diagnostic(
        code(azure_openai_limits::lookup::unknown_model),
        help("Run `azure-openai-limits list` to see every known model.")
    )]
    UnknownModel {
        model: String,

        /// Every model in the table, sorted.
        available: Vec<String>,
    },

    #[error("No limits for model='{model}' version='{version}'. Available versions: {available:?}")]
    #[diagnostic(
        code(azure_openai_limits::lookup::unknown_version),
        help("Omit the version to use the model's default limits, if it has one.")
    )]
    UnknownVersion {
        model: String,

        version: String,

        /// Every version key of the model, sorted.
        available: Vec<String>,
    },

    #[error("Model data not found at {path:?}: {reason}")]
    #[diagnostic(code(azure_openai_limits::data::missing))]
    ResourceMissing { path: PathBuf, reason: String },

    /// Bad syntax carries no location, bad entries carry the model and version.
    #[error("Invalid model data{}: {reason}", location(.model, .version))]
    #[diagnostic(
        code(azure_openai_limits::data::malformed),
        help("Every entry needs positive integer 'context' and 'output' fields.")
    )]
    MalformedData {
        model: Option<String>,
        version: Option<String>,
        reason: String,
    },

    #[error("{field} must be a positive integer")]
    #[diagnostic(code(azure_openai_limits::value::invalid))]
    InvalidValue { field: &'static str },
}

impl Error {
    pub(crate) fn unknown_model<'a>(
        model: &str,
        available: impl Iterator<Item = &'a String>,
    ) -> Self {
        Error::UnknownModel {
            model: model.to_owned(),
            available: available.cloned().collect(),
        }
    }

    pub(crate) fn malformed_entry(model: &str, version: &str, reason: impl ToString) -> Self {
        Error::MalformedData {
            model: Some(model.to_owned()),
            version: Some(version.to_owned()),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed_syntax(reason: impl ToString) -> Self {
        Error::MalformedData {
            model: None,
            version: None,
            reason: reason.to_string(),
        }
    }
}

fn location(model: &Option<String>, version: &Option<String>) -> String {
    match (model, version) {
        (Some(model), Some(version)) => format!(" for model='{model}' version='{version}'"),
        (Some(model), None) => format!(" for model='{model}'"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_lists_alternatives() {
        let names = ["gpt-4".to_owned(), "gpt-4o".to_owned()];
        let error = Error::unknown_model("nope", names.iter());

        assert_eq!(
            error.to_string(),
            r#"Unknown model: 'nope'. Available models: ["gpt-4", "gpt-4o"]"#
        );
    }

    #[test]
    fn malformed_data_names_the_entry() {
        let error = Error::malformed_entry("gpt-4o", "default", "context must be a positive integer");

        assert_eq!(
            error.to_string(),
            "Invalid model data for model='gpt-4o' version='default': context must be a positive integer"
        );

        let syntax = Error::malformed_syntax("expected value at line 1 column 1");
        assert_eq!(
            syntax.to_string(),
            "Invalid model data: expected value at line 1 column 1"
        );
    }
}

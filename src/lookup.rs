//! Queries over a model table.
//!
//! Every query exists as a [`Dataset`] method and as a free function over the
//! bundled table.
//!
//! ```
//! let limits = azure_openai_limits::get_limits("gpt-4o", Some("2024-08-06"))?;
//!
//! assert_eq!(limits.context(), 128000);
//! assert_eq!(limits.output(), 16384);
//! # Ok::<(), azure_openai_limits::Error>(())
//! ```

use std::collections::BTreeMap;

use crate::dataset::{DEFAULT_VERSION, Dataset, ModelTable};
use crate::error::Error;
use crate::types::Limits;

impl Dataset {
    /// Resolves the limits of `model` at `version`, or at `"default"` when no
    /// version is given.
    ///
    /// The model name is trimmed. An explicit version the model doesn't know
    /// falls back to `"default"` when the model has one.
    pub fn get_limits(&self, model: &str, version: Option<&str>) -> Result<Limits, Error> {
        let model = validate_model_name(model)?;

        let versions = self
            .models
            .get(model)
            .ok_or_else(|| Error::unknown_model(model, self.models.keys()))?;

        // An empty version string counts as no version at all.
        let requested = version.filter(|v| !v.is_empty());
        let key = requested.unwrap_or(DEFAULT_VERSION);

        if let Some(limits) = versions.get(key) {
            return Ok(*limits);
        }

        if let Some(fallback) = requested.and(versions.get(DEFAULT_VERSION)) {
            tracing::debug!(model, version = key, "unknown version, using default limits");

            return Ok(*fallback);
        }

        Err(Error::UnknownVersion {
            model: model.to_owned(),
            version: key.to_owned(),
            available: versions.keys().cloned().collect(),
        })
    }

    pub fn context_limit(&self, model: &str, version: Option<&str>) -> Result<u64, Error> {
        Ok(self.get_limits(model, version)?.context())
    }

    pub fn output_limit(&self, model: &str, version: Option<&str>) -> Result<u64, Error> {
        Ok(self.get_limits(model, version)?.output())
    }

    /// An owned copy of the whole table.
    pub fn all_models(&self) -> ModelTable {
        self.models.clone()
    }

    /// Model names, ascending.
    pub fn list_models(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    /// Version keys of `model`, ascending. The name must match exactly.
    pub fn list_versions(&self, model: &str) -> Result<Vec<String>, Error> {
        let versions = self
            .models
            .get(model)
            .ok_or_else(|| Error::unknown_model(model, self.models.keys()))?;

        Ok(versions.keys().cloned().collect())
    }

    /// Whether `model`, and `version` if given, is in the table.
    ///
    /// Exact matches only: unlike [`Dataset::get_limits`], an unknown version
    /// does not fall back to `"default"`, and the model name is not trimmed.
    pub fn model_exists(&self, model: &str, version: Option<&str>) -> bool {
        match (self.models.get(model), version) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(versions), Some(version)) => versions.contains_key(version),
        }
    }

    /// Model name -> sorted version keys, for listings.
    pub fn versions_by_model(&self) -> BTreeMap<String, Vec<String>> {
        self.models
            .iter()
            .map(|(model, versions)| (model.clone(), versions.keys().cloned().collect()))
            .collect()
    }
}

fn validate_model_name(model: &str) -> Result<&str, Error> {
    if model.is_empty() {
        return Err(Error::InvalidArgument(
            "Model name must be a non-empty string".to_owned(),
        ));
    }

    let trimmed = model.trim();

    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(
            "Model name cannot be empty or whitespace".to_owned(),
        ));
    }

    Ok(trimmed)
}

// Bundled table shortcuts.

/// [`Dataset::get_limits`] over the bundled table.
pub fn get_limits(model: &str, version: Option<&str>) -> Result<Limits, Error> {
    Dataset::bundled()?.get_limits(model, version)
}

pub fn context_limit(model: &str, version: Option<&str>) -> Result<u64, Error> {
    Dataset::bundled()?.context_limit(model, version)
}

pub fn output_limit(model: &str, version: Option<&str>) -> Result<u64, Error> {
    Dataset::bundled()?.output_limit(model, version)
}

pub fn all_models() -> Result<ModelTable, Error> {
    Ok(Dataset::bundled()?.all_models())
}

pub fn list_models() -> Result<Vec<String>, Error> {
    Ok(Dataset::bundled()?.list_models())
}

pub fn list_versions(model: &str) -> Result<Vec<String>, Error> {
    Dataset::bundled()?.list_versions(model)
}

/// False when the bundled table failed to load.
pub fn model_exists(model: &str, version: Option<&str>) -> bool {
    Dataset::bundled().is_ok_and(|dataset| dataset.model_exists(model, version))
}

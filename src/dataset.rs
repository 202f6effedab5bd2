use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Error;
use crate::io::dtos::RawModelTable;
use crate::io::resource::read_model_file;
use crate::types::Limits;

/// Version key used when the caller gives none.
pub const DEFAULT_VERSION: &str = "default";

/// model -> version -> limits. Ordered maps keep every listing sorted.
pub type ModelTable = BTreeMap<String, BTreeMap<String, Limits>>;

/// A validated, read-only model table.
///
/// Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    pub(crate) models: ModelTable,
}

impl Dataset {
    /// Parses and validates a JSON model table.
    ///
    /// Syntax errors become [`Error::MalformedData`] without a location;
    /// a bad leaf entry becomes one naming its model and version.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Self::from_json_slice(json.as_bytes())
    }

    /// Same as [`Dataset::from_json_str`]; invalid UTF-8 is a syntax error.
    pub fn from_json_slice(json: &[u8]) -> Result<Self, Error> {
        let raw: RawModelTable = serde_json::from_slice(json).map_err(Error::malformed_syntax)?;

        let models = raw
            .into_iter()
            .map(|(model, versions)| -> Result<_, Error> {
                let versions = versions
                    .into_iter()
                    .map(|(version, entry)| -> Result<_, Error> {
                        let limits = Limits::try_from(entry)
                            .map_err(|e| Error::malformed_entry(&model, &version, e))?;

                        Ok((version, limits))
                    })
                    .collect::<Result<BTreeMap<_, _>, Error>>()?;

                Ok((model, versions))
            })
            .collect::<Result<ModelTable, Error>>()?;

        tracing::debug!(models = models.len(), "model table loaded");

        Ok(Dataset { models })
    }

    /// Loads a model table from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        tracing::debug!(path = %path.display(), "reading model table");

        let json = read_model_file(path)?;

        Self::from_json_slice(&json)
    }

    /// The table compiled into this crate.
    pub fn bundled() -> Result<&'static Dataset, Error> {
        crate::config::bundled::dataset()
    }
}

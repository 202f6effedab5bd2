use std::collections::BTreeMap;

use azure_openai_limits::Limits;
use serde::Serialize;

use crate::prelude::*;

/// What a command prints.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum LimitsReport {
    /// One model version, for `show`.
    Limits(Limits),
    /// Model name -> sorted version keys, for `list`.
    Listing(BTreeMap<String, Vec<String>>),
}

impl LimitsReport {
    /// Renders the report as JSON, pretty unless `unformatted`.
    pub fn render(&self, unformatted: bool) -> AppResult<String> {
        let json = if unformatted {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        };

        json.into_diagnostic()
            .wrap_err("Failed to serialize the report as JSON")
    }
}

impl From<Limits> for LimitsReport {
    fn from(limits: Limits) -> Self {
        LimitsReport::Limits(limits)
    }
}

impl From<BTreeMap<String, Vec<String>>> for LimitsReport {
    fn from(listing: BTreeMap<String, Vec<String>>) -> Self {
        LimitsReport::Listing(listing)
    }
}

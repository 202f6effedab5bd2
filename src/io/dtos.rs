use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;
use crate::types::Limits;

/// The model table as it sits on disk: model -> version -> entry.
pub type RawModelTable = BTreeMap<String, BTreeMap<String, RawLimits>>;

/// One leaf entry before validation.
///
/// Values stay untyped here so a bad number surfaces as a located data error
/// instead of a generic parse failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLimits {
    pub context: Option<Value>,
    pub output: Option<Value>,
}

impl TryFrom<RawLimits> for Limits {
    type Error = Error;

    fn try_from(raw: RawLimits) -> Result<Self, Self::Error> {
        let context = integer(raw.context, "context")?;
        let output = integer(raw.output, "output")?;

        Limits::new(context, output)
    }
}

// Floats, strings, booleans, nulls and absent keys all fail here.
fn integer(value: Option<Value>, field: &'static str) -> Result<i64, Error> {
    value
        .as_ref()
        .and_then(Value::as_i64)
        .ok_or(Error::InvalidValue { field })
}

use serde::Serialize;

use crate::error::Error;

/// Token limits of one model version.
///
/// Both fields are strictly positive; there is no way to build or change a
/// record that breaks this, so a `Limits` in hand is always valid.
///
/// ```
/// use azure_openai_limits::Limits;
///
/// let limits = Limits::new(1000, 500)?;
/// assert_eq!(limits.total_max(), 1500);
/// # Ok::<(), azure_openai_limits::Error>(())
/// ```
///
/// Fields cannot be reassigned after construction:
///
/// ```compile_fail
/// use azure_openai_limits::Limits;
///
/// let mut limits = Limits::new(1000, 500).unwrap();
/// limits.context = 2000;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Limits {
    /// Input plus conversation history, in tokens.
    context: u64,

    /// Generated tokens per response.
    output: u64,
}

impl Limits {
    /// Validates both fields, context first.
    pub fn new(context: i64, output: i64) -> Result<Self, Error> {
        let context = positive(context, "context")?;
        let output = positive(output, "output")?;

        Ok(Limits { context, output })
    }

    pub fn context(&self) -> u64 {
        self.context
    }

    pub fn output(&self) -> u64 {
        self.output
    }

    /// Derived on read, never stored.
    pub fn total_max(&self) -> u64 {
        self.context + self.output
    }
}

fn positive(value: i64, field: &'static str) -> Result<u64, Error> {
    match u64::try_from(value) {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(Error::InvalidValue { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_limits_expose_fields_and_total() {
        let limits = Limits::new(1000, 500).unwrap();

        assert_eq!(limits.context(), 1000);
        assert_eq!(limits.output(), 500);
        assert_eq!(limits.total_max(), 1500);
    }

    #[test]
    fn zero_context_is_rejected() {
        let error = Limits::new(0, 500).unwrap_err();

        assert_eq!(error, Error::InvalidValue { field: "context" });
        assert_eq!(error.to_string(), "context must be a positive integer");
    }

    #[test]
    fn negative_output_is_rejected() {
        let error = Limits::new(1000, -1).unwrap_err();

        assert_eq!(error.to_string(), "output must be a positive integer");
    }

    #[test]
    fn context_is_checked_before_output() {
        let error = Limits::new(-5, 0).unwrap_err();

        assert_eq!(error, Error::InvalidValue { field: "context" });
    }

    #[test]
    fn serializes_without_derived_total() {
        let limits = Limits::new(128000, 16384).unwrap();

        insta::assert_json_snapshot!(limits, @r#"
        {
          "context": 128000,
          "output": 16384
        }
        "#);
    }
}

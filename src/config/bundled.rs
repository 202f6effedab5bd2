use std::sync::LazyLock;

use crate::dataset::Dataset;
use crate::error::Error;

const MODELS_JSON: &str = include_str!("models.json");

// Parsed on first use and never again. A failed parse is kept too, so every
// later lookup reports the same load error.
static BUNDLED: LazyLock<Result<Dataset, Error>> = LazyLock::new(|| {
    let loaded = Dataset::from_json_str(MODELS_JSON);

    if let Err(e) = &loaded {
        tracing::error!(error = %e, "bundled model table is unusable");
    }

    loaded
});

/// The bundled model table.
pub fn dataset() -> Result<&'static Dataset, Error> {
    BUNDLED.as_ref().map_err(Error::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_table_loads() {
        let dataset = dataset().unwrap();

        assert!(dataset.models.contains_key("gpt-4o"));
    }

    #[test]
    fn every_bundled_model_has_a_default() {
        let dataset = dataset().unwrap();

        for (model, versions) in &dataset.models {
            assert!(
                versions.contains_key(crate::dataset::DEFAULT_VERSION),
                "{model} has no default entry"
            );
        }
    }

    #[test]
    fn repeated_calls_share_one_table() {
        let first = dataset().unwrap();
        let second = dataset().unwrap();

        assert!(std::ptr::eq(first, second));
    }
}

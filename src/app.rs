use std::borrow::Cow;

use azure_openai_limits::{Dataset, Error};

use crate::cli::Cli;

pub struct App {
    pub cli: Cli,
    pub dataset: Cow<'static, Dataset>,
}

impl App {
    /// Loads the model table once: the `--data` file if given, the bundled one otherwise.
    pub fn new(cli: Cli) -> Result<Self, Error> {
        let dataset = match &cli.data {
            Some(path) => Cow::Owned(Dataset::from_path(path)?),
            None => Cow::Borrowed(Dataset::bundled()?),
        };

        Ok(App { cli, dataset })
    }
}

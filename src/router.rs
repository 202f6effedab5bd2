use crate::app::App;
use crate::cli::{Commands, ShowArgs};
use crate::prelude::*;
use crate::report::LimitsReport;

/// Runs the parsed command against the loaded table.
pub fn dispatch(ctx: &App) -> AppResult<LimitsReport> {
    let report: LimitsReport = match &ctx.cli.command {
        // azure-openai-limits show.
        Commands::Show(ShowArgs { model, version }) => ctx
            .dataset
            .get_limits(model, version.as_deref())?
            .into(),

        // azure-openai-limits list.
        Commands::List => ctx.dataset.versions_by_model().into(),
    };

    Ok(report)
}

use super::load_chart;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::output::{OutputKind, claim_output};
use crate::render::export_chart_pdf;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plot {
        input,
        out,
        title,
        policy,
        force,
    } = cmd
    {
        let key = cfg.color_key()?;
        let days_per_page = cfg.pages_split()?;

        let chart = load_chart(input, *policy, cfg)?;
        key.ensure_covers(&chart.tags_in_use())?;

        let path = expand_tilde(out);
        claim_output(&path, OutputKind::Chart, *force)?;

        let title = title.clone().unwrap_or_else(|| cfg.chart_title.clone());
        export_chart_pdf(&chart, &key, &title, days_per_page, &path)?;
    }
    Ok(())
}

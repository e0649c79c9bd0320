use super::load_chart;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        out,
        policy,
        force,
    } = cmd
    {
        let chart = load_chart(input, *policy, cfg)?;
        ExportLogic::export(&chart, *format, &expand_tilde(out), *force)?;
    }
    Ok(())
}

pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod plot;

use crate::config::Config;
use crate::core::Core;
use crate::core::calculator::DurationPolicy;
use crate::errors::AppResult;
use crate::loader::load_table;
use crate::models::StackedChart;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

/// Load the input table (argument or configured `data_file`) and run the pipeline.
pub(crate) fn load_chart(
    input: &Option<String>,
    policy: Option<DurationPolicy>,
    cfg: &Config,
) -> AppResult<StackedChart> {
    let path = input
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| cfg.data_path());

    info(format!("Loading sleep table: {}", path.display()));
    let table = load_table(&path, cfg.delimiter_byte()?)?;
    let policy = policy.unwrap_or(cfg.duration_policy);
    info(format!(
        "{} event slot(s) x {} day(s), {} durations",
        table.slot_count(),
        table.day_count(),
        policy.as_str()
    ));

    Core::build_chart(&table, policy)
}

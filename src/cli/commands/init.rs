use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::path::Path;

/// Handle the `init` subcommand
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if config_path.exists() && !*force {
            warning(format!(
                "Configuration file {} already exists (use --force to overwrite).",
                config_path.display()
            ));
            return Ok(());
        }

        Config::init_all(config_path)?;
    }
    Ok(())
}

use crate::core::calculator::DurationPolicy;
use crate::errors::{AppError, AppResult};
use crate::render::ColorKey;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

/// Fields every complete configuration file carries.
pub const CONFIG_FIELDS: &[&str] = &[
    "data_file",
    "delimiter",
    "chart_title",
    "duration_policy",
    "days_per_page",
    "colors",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_chart_title")]
    pub chart_title: String,
    #[serde(default)]
    pub duration_policy: DurationPolicy,
    #[serde(default = "default_days_per_page")]
    pub days_per_page: usize,
    #[serde(default = "default_colors")]
    pub colors: BTreeMap<String, String>,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("sleep_data.csv")
        .to_string_lossy()
        .to_string()
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_chart_title() -> String {
    "Sleep log".to_string()
}
fn default_days_per_page() -> usize {
    31
}
pub(crate) fn default_colors() -> BTreeMap<String, String> {
    [
        ("a", "silver"),
        ("b", "gray"),
        ("e", "white"),
        ("n", "silver"),
        ("s", "black"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            delimiter: default_delimiter(),
            chart_title: default_chart_title(),
            duration_policy: DurationPolicy::default(),
            days_per_page: default_days_per_page(),
            colors: default_colors(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rsleepchart")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rsleepchart")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rsleepchart.conf")
    }

    /// Config file to use: the `--config` override or the platform default.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Write a default configuration file at `path`.
    pub fn init_all(path: &Path) -> AppResult<()> {
        let config = Config::default();
        config.save(path)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }

    /// Default input table, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Field delimiter as a byte; accepts a single ASCII character or `\t`/`tab`.
    pub fn delimiter_byte(&self) -> AppResult<u8> {
        match self.delimiter.as_str() {
            "\\t" | "tab" | "\t" => Ok(b'\t'),
            d if d.len() == 1 && d.is_ascii() => Ok(d.as_bytes()[0]),
            d => Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got '{d}'"
            ))),
        }
    }

    pub fn color_key(&self) -> AppResult<ColorKey> {
        ColorKey::from_config(&self.colors)
    }

    pub fn pages_split(&self) -> AppResult<usize> {
        if self.days_per_page == 0 {
            return Err(AppError::Config("days_per_page must be at least 1".into()));
        }
        Ok(self.days_per_page)
    }
}

use super::{CONFIG_FIELDS, Config};
use crate::errors::AppResult;
use crate::models::StateTag;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Inspect a configuration file and return a list of human readable problems.
///
/// Reports fields absent from the file (their defaults apply), values that
/// would fail at run time and a color map that cannot draw missing entries.
pub fn check_config(path: &Path, cfg: &Config) -> AppResult<Vec<String>> {
    let mut issues = Vec::new();

    if path.exists() {
        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content).unwrap_or(Value::Null);

        let missing: Vec<&str> = match yaml.as_mapping() {
            Some(map) => CONFIG_FIELDS
                .iter()
                .copied()
                .filter(|f| !map.contains_key(*f))
                .collect(),
            None => CONFIG_FIELDS.to_vec(),
        };

        for field in missing {
            issues.push(format!("missing field '{field}' (default is used)"));
        }
    } else {
        issues.push(format!(
            "configuration file {} does not exist (defaults are used)",
            path.display()
        ));
    }

    if let Err(e) = cfg.delimiter_byte() {
        issues.push(e.to_string());
    }

    if let Err(e) = cfg.pages_split() {
        issues.push(e.to_string());
    }

    match cfg.color_key() {
        Ok(key) => {
            if !key.contains(StateTag::NO_ENTRY) {
                issues.push(
                    "colors has no entry for tag 'n': charts with missing cells will fail"
                        .to_string(),
                );
            }
        }
        Err(e) => issues.push(e.to_string()),
    }

    Ok(issues)
}

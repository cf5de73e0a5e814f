use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileCatalogsConfig {
    /// Extra reaction table in TOML format.
    pub reactions: Option<PathBuf>,
    /// Extra acid/base catalog in CSV format.
    pub substances: Option<PathBuf>,
    /// Use the file tables alone instead of layering them over the built-in ones.
    #[serde(rename = "replace-builtin")]
    pub replace_builtin: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileMixingConfig {
    #[serde(rename = "default-concentration")]
    pub default_concentration: Option<f64>,
    #[serde(rename = "reject-non-positive")]
    pub reject_non_positive: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub catalogs: Option<FileCatalogsConfig>,
    pub mixing: Option<FileMixingConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: FileConfig =
            toml::from_str(&content).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        if let Some(base) = path.parent() {
            config.resolve_relative_paths(base);
        }
        Ok(config)
    }

    /// Catalog paths in a config file are relative to the file's directory.
    fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(catalogs) = self.catalogs.as_mut() {
            for path in [&mut catalogs.reactions, &mut catalogs.substances]
                .into_iter()
                .flatten()
            {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }

    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;
            let (key, value_str) = (key.trim(), value_str.trim());

            match key {
                "catalogs.reactions" => {
                    self.catalogs
                        .get_or_insert_with(Default::default)
                        .reactions = Some(PathBuf::from(value_str));
                }
                "catalogs.substances" => {
                    self.catalogs
                        .get_or_insert_with(Default::default)
                        .substances = Some(PathBuf::from(value_str));
                }
                "catalogs.replace-builtin" => {
                    self.catalogs
                        .get_or_insert_with(Default::default)
                        .replace_builtin = Some(parse_bool(key, value_str)?);
                }
                "mixing.default-concentration" => {
                    self.mixing
                        .get_or_insert_with(Default::default)
                        .default_concentration = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
                }
                "mixing.reject-non-positive" => {
                    self.mixing
                        .get_or_insert_with(Default::default)
                        .reject_non_positive = Some(parse_bool(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unknown configuration key: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid boolean value for {}: {}", key, value))
    })
}

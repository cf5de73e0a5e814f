pub mod defaults;
pub mod file;

use crate::error::Result;
use defaults::DefaultsConfig;
use directories::ProjectDirs;
use elementa::core::data::reactions::ReactionTable;
use elementa::core::data::substances::SubstanceCatalog;
use elementa::engine::config::{MixConfig, MixConfigBuilder};
use file::FileConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Everything a command needs, resolved from defaults, the config file and `--set` values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub reactions: ReactionTable,
    pub substances: SubstanceCatalog,
    pub mix: MixConfig,
}

impl AppConfig {
    pub fn load(explicit_path: Option<&Path>, set_values: &[String]) -> Result<Self> {
        let mut file_config = match locate_config_file(explicit_path) {
            Some(path) => FileConfig::from_file(&path)?,
            None => {
                debug!("No configuration file found, using built-in defaults.");
                FileConfig::default()
            }
        };
        file_config.apply_set_values(set_values)?;
        Self::from_file_config(file_config)
    }

    pub fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let defaults = DefaultsConfig::default();
        let catalogs = file_config.catalogs.unwrap_or_default();
        let mixing = file_config.mixing.unwrap_or_default();
        let replace_builtin = catalogs.replace_builtin;

        let replace_reactions = replace_builtin.unwrap_or(defaults.replace_builtin_reactions)
            && catalogs.reactions.is_some();
        let mut reactions = if replace_reactions {
            ReactionTable::new()
        } else {
            ReactionTable::builtin()
        };
        if let Some(path) = &catalogs.reactions {
            info!("Loading reaction table from {:?}", path);
            reactions.extend(ReactionTable::load(path)?);
            warn_asymmetric_pairs(&reactions);
        }

        let replace_substances = replace_builtin.unwrap_or(defaults.replace_builtin_substances)
            && catalogs.substances.is_some();
        let mut substances = if replace_substances {
            SubstanceCatalog::new()
        } else {
            SubstanceCatalog::builtin()
        };
        if let Some(path) = &catalogs.substances {
            info!("Loading substance catalog from {:?}", path);
            substances.extend(SubstanceCatalog::load_csv(path)?);
        }

        let mut builder = MixConfigBuilder::new().reject_non_positive(
            mixing
                .reject_non_positive
                .unwrap_or(defaults.reject_non_positive),
        );
        if let Some(concentration) = mixing.default_concentration {
            builder = builder.default_concentration(concentration);
        }

        Ok(Self {
            reactions,
            substances,
            mix: builder.build()?,
        })
    }
}

/// Logs every pair the merged table defines under both orderings with different content.
fn warn_asymmetric_pairs(reactions: &ReactionTable) -> usize {
    let asymmetric = reactions.asymmetric_pairs();
    for (forward, reversed) in &asymmetric {
        warn!(
            "Reactions '{}' and '{}' disagree; each ordering resolves to its own entry.",
            forward, reversed
        );
    }
    asymmetric.len()
}

/// An explicit path is always used; otherwise the per-user config file is used if present.
fn locate_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    let candidate = user_config_path()?;
    candidate.exists().then_some(candidate)
}

pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from(
        defaults::QUALIFIER,
        defaults::ORGANIZATION,
        defaults::APPLICATION,
    )
    .map(|dirs| dirs.config_dir().join(defaults::CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use elementa::core::data::reactions;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_use_builtin_catalogs_and_permissive_mixing() {
        let config = AppConfig::from_file_config(FileConfig::default()).unwrap();
        assert_eq!(config.reactions.len(), reactions::builtin_len());
        assert_eq!(config.substances.len(), SubstanceCatalog::builtin().len());
        assert_eq!(config.mix, MixConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let result = AppConfig::load(Some(&path), &[]);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn file_catalogs_are_layered_over_builtin() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("reactions.toml"),
            "[\"Zn-H\"]\nresult = \"ZnH2\"\ndescription = \"d\"\nanimation = \"bubble\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("substances.csv"),
            "id,name,formula,kind,strength,concentration,color\nlemon,Lemon,C6H8O7,acid,weak,0.3,#fef08a\n",
        )
        .unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[catalogs]\nreactions = \"reactions.toml\"\nsubstances = \"substances.csv\"\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&config_path), &[]).unwrap();
        assert_eq!(config.reactions.len(), reactions::builtin_len() + 1);
        assert!(config.reactions.get("Na-Cl").is_some());
        assert!(config.substances.contains("lemon"));
        assert!(config.substances.contains("hcl"));
    }

    #[test]
    fn user_entry_reversing_a_builtin_pair_is_reported_after_merge() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("reactions.toml"),
            "[\"Cl-Na\"]\nresult = \"Sodium chloride\"\ndescription = \"d\"\nanimation = \"fade\"\n",
        )
        .unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[catalogs]\nreactions = \"reactions.toml\"\n").unwrap();

        let config = AppConfig::load(Some(&config_path), &[]).unwrap();
        assert_eq!(
            config.reactions.asymmetric_pairs(),
            vec![("Cl-Na".to_string(), "Na-Cl".to_string())]
        );
        assert_eq!(warn_asymmetric_pairs(&config.reactions), 1);
        assert_eq!(warn_asymmetric_pairs(&ReactionTable::builtin()), 0);
    }

    #[test]
    fn replace_builtin_drops_builtin_entries() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("reactions.toml"),
            "[\"Zn-H\"]\nresult = \"ZnH2\"\ndescription = \"d\"\nanimation = \"bubble\"\n",
        )
        .unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[catalogs]\nreactions = \"reactions.toml\"\nreplace-builtin = true\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&config_path), &[]).unwrap();
        assert_eq!(config.reactions.len(), 1);
        assert!(config.reactions.get("Na-Cl").is_none());
        // No substance file was given, so the built-in catalog stays.
        assert!(config.substances.contains("hcl"));
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[mixing]\ndefault-concentration = 0.5\nreject-non-positive = false\n",
        )
        .unwrap();

        let config = AppConfig::load(
            Some(&config_path),
            &["mixing.reject-non-positive=true".to_string()],
        )
        .unwrap();
        assert_eq!(config.mix.default_concentration, Some(0.5));
        assert!(config.mix.reject_non_positive);
    }

    #[test]
    fn invalid_default_concentration_is_a_config_error() {
        let mut file_config = FileConfig::default();
        file_config
            .apply_set_values(&["mixing.default-concentration=-3".to_string()])
            .unwrap();
        let result = AppConfig::from_file_config(file_config);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}

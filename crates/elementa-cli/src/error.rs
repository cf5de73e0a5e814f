use elementa::core::chemistry::molar_mass::FormulaError;
use elementa::core::data::reactions::ReactionTableError;
use elementa::core::data::substances::CatalogLoadError;
use elementa::engine::config::ConfigError;
use elementa::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error(transparent)]
    ReactionTable(#[from] ReactionTableError),

    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

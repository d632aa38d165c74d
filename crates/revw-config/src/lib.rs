//! # revw-config
//!
//! Layered configuration loading for Revw using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REVW_*` prefix, `__` as separator)
//! 2. Project-level `.revw/config.toml`
//! 3. User-level `~/.config/revw/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `REVW_COLUMNS__TAKE_AGAIN` -> `columns.take_again`,
//! `REVW_PIPELINE__PARALLEL` -> `pipeline.parallel`, and
//! `REVW_SENTIMENT__LEXICON__MEH` -> `sentiment.lexicon.meh`.
//!
//! # Usage
//!
//! ```no_run
//! use revw_config::RevwConfig;
//!
//! let config = RevwConfig::load_with_dotenv().expect("config");
//! println!("comments column: {}", config.columns.comments);
//! ```

mod error;
mod sections;

pub use error::ConfigError;
pub use sections::{ExportConfig, GeneralConfig, PipelineConfig, SentimentConfig};

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use revw_core::ColumnMap;
use serde::{Deserialize, Serialize};

/// Project-local configuration file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".revw/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RevwConfig {
    #[serde(default)]
    pub columns: ColumnMap,
    #[serde(default)]
    pub sentiment: SentimentConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RevwConfig {
    /// Load and validate configuration from TOML files and environment
    /// variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("REVW_").split("__"))
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_columns()?;
        self.sentiment.validate()?;
        self.pipeline.validate()?;
        self.export.validate()?;
        Ok(())
    }

    fn validate_columns(&self) -> Result<(), ConfigError> {
        let names = [
            ("columns.take_again", &self.columns.take_again),
            ("columns.comments", &self.columns.comments),
            ("columns.difficulty", &self.columns.difficulty),
            ("columns.overall_quality", &self.columns.overall_quality),
        ];

        for (index, (field, name)) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::invalid(*field, "column name must not be empty"));
            }
            if names[..index].iter().any(|(_, other)| other == name) {
                return Err(ConfigError::invalid(
                    *field,
                    format!("column '{name}' is mapped more than once"),
                ));
            }
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("revw").join("config.toml"))
    }
}

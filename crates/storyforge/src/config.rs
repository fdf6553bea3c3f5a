//! Layered configuration for the storyforge binary.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (include_str! from storyforge.toml)
//! 2. `~/.config/storyforge/storyforge.toml`
//! 3. `./storyforge.toml`
//! 4. An explicit `--config` file, when given
//! 5. `STORYFORGE__<SECTION>__<KEY>` environment variables

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storyforge_core::GenrePolicy;
use storyforge_error::{ConfigError, StoryforgeError, StoryforgeResult};
use storyforge_models::OracleConfig;
use storyforge_security::ClassifierConfig;
use storyforge_server::ServerConfig;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storyforge.toml");

/// `[generation]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// What to do with story genres outside the template set
    #[serde(default)]
    pub genre_policy: GenrePolicy,
}

/// `[storage]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Library file; a leading `~/` expands to the home directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolves the library file, defaulting to the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is configured and the platform has no data directory.
    pub fn library_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.path {
            Some(path) => Ok(expand_home(path)),
            None => dirs::data_dir()
                .map(|dir| dir.join("storyforge").join("stories.json"))
                .ok_or_else(|| {
                    ConfigError::new("Could not determine a data directory for the story library")
                }),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of plain text
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Top-level storyforge configuration.
///
/// # Example
///
/// ```no_run
/// use storyforge::StoryforgeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryforgeConfig::load(None)?;
/// println!("Model: {}", config.oracle.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryforgeConfig {
    /// Completion endpoint settings
    #[serde(default)]
    pub oracle: OracleConfig,
    /// Input classifier settings
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Prompt construction settings
    #[serde(default)]
    pub generation: GenerationConfig,
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Saved-story library settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StoryforgeConfig {
    /// Loads every configuration layer, adding `explicit` above the working directory file.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or any source fails to parse.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> StoryforgeResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyforge/storyforge.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyforge").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("STORYFORGE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .map_err(|e| {
                StoryforgeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryforgeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Bundled defaults overlaid with a TOML document, ignoring files and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `overlay` is not valid TOML or has mistyped values.
    pub fn from_toml(overlay: &str) -> StoryforgeResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overlay, FileFormat::Toml))
            .build()
            .map_err(|e| {
                StoryforgeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryforgeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

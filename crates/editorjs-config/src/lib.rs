use editorjs_engine::{
    ImageLimits, JsonToHtml, RenderOptions, Schema, SchemaError, UploadMode, UploadSettings,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to read validation rules at {rules_path}: {source}")]
    RulesReadError {
        rules_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse validation rules at {rules_path}: {source}")]
    RulesParseError {
        rules_path: PathBuf,
        source: SchemaError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Reject blocks with unsupported types instead of skipping them.
    #[serde(default)]
    pub strict: bool,

    /// JSON file with per-tool validation rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload: Option<UploadConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    pub path: PathBuf,
    pub url: String,
    #[serde(default)]
    pub mode: UploadMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(default = "default_unique")]
    pub unique: bool,
    #[serde(default)]
    pub replace: bool,
    #[serde(default)]
    pub limits: ImageLimits,
}

fn default_unique() -> bool {
    true
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured paths
        if let Some(rules_path) = config.rules_path.take() {
            config.rules_path = Some(Self::expand_path(&rules_path).unwrap_or(rules_path));
        }
        if let Some(upload) = config.upload.as_mut() {
            upload.path = Self::expand_path(&upload.path).unwrap_or_else(|| upload.path.clone());
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/editorjs-render");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            strict: self.strict,
        }
    }

    /// The validation rules named by `rules_path`, if one is configured.
    pub fn load_schema(&self) -> Result<Option<Schema>, ConfigError> {
        let Some(rules_path) = &self.rules_path else {
            return Ok(None);
        };

        let content =
            std::fs::read_to_string(rules_path).map_err(|source| ConfigError::RulesReadError {
                rules_path: rules_path.clone(),
                source,
            })?;

        Schema::from_json(&content)
            .map(Some)
            .map_err(|source| ConfigError::RulesParseError {
                rules_path: rules_path.clone(),
                source,
            })
    }

    /// A converter carrying the configured rules and render options.
    pub fn converter(&self) -> Result<JsonToHtml, ConfigError> {
        let converter = JsonToHtml::new().with_options(self.render_options());
        Ok(match self.load_schema()? {
            Some(schema) => converter.with_schema(schema),
            None => converter,
        })
    }

    pub fn upload_settings(&self) -> Option<UploadSettings> {
        self.upload.as_ref().map(|upload| UploadSettings {
            path: upload.path.clone(),
            url: upload.url.clone(),
            mode: upload.mode,
            param: upload.param.clone(),
            unique: upload.unique,
            replace: upload.replace,
            limits: upload.limits.clone(),
        })
    }

    /// Tilde and environment variable expansion; `None` if a variable is unset.
    fn expand_path(path: &Path) -> Option<PathBuf> {
        shellexpand::full(&path.to_string_lossy())
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}

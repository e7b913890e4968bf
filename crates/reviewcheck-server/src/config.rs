//! Server configuration

use reviewcheck_classifiers::{ClassifierConfig, EngineKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Engine selection and model discovery
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub engine: Option<EngineKind>,
    pub models: Vec<PathBuf>,
    pub listen: Option<String>,
    pub port: Option<u16>,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides.
    ///
    /// A missing file falls back to defaults. When the file exists, its
    /// directory is searched for model artifacts before the working
    /// directory.
    pub fn load(config_path: impl AsRef<Path>, overrides: &Overrides) -> anyhow::Result<Self> {
        let config_path = config_path.as_ref();
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let mut config = Self::from_yaml_str(&content)?;
            if let Some(dir) = config_path.parent() {
                let dir = if dir.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    dir
                };
                config.classifier.model.search_dirs.insert(0, dir.to_path_buf());
            }
            info!(path = %config_path.display(), "Loaded configuration file");
            config
        } else {
            info!(path = %config_path.display(), "Config file not found, using defaults");
            Self::default()
        };

        config.apply_overrides(overrides);
        config.classifier.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(engine) = overrides.engine {
            self.classifier.engine = engine;
        }
        if !overrides.models.is_empty() {
            let mut paths = overrides.models.clone();
            paths.append(&mut self.classifier.model.paths);
            self.classifier.model.paths = paths;
        }
        if let Some(listen) = &overrides.listen {
            self.listen_address = listen.clone();
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
    }

    /// `address:port` string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen_address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            port: default_port(),
            classifier: ClassifierConfig::default(),
        }
    }
}

fn default_listen_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

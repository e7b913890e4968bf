//! Configuration for engine selection and model artifact discovery

use crate::engine::EngineKind;
use crate::lexicon::LexiconConfig;
use crate::result::DEFAULT_SNIPPET_LEN;
use reviewcheck_core::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the classification service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Decision engine to run
    #[serde(default)]
    pub engine: EngineKind,

    /// Where to look for the model artifact
    #[serde(default)]
    pub model: ModelLocatorConfig,

    /// Extra heuristic vocabulary
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Snippet length in characters
    #[serde(default = "default_snippet_len")]
    pub snippet_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            model: ModelLocatorConfig::default(),
            lexicon: LexiconConfig::default(),
            snippet_len: default_snippet_len(),
        }
    }
}

impl ClassifierConfig {
    /// Parse configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| {
            reviewcheck_core::Error::config(format!("Failed to parse classifier config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.snippet_len == 0 {
            return Err(reviewcheck_core::Error::config(
                "snippet_len must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Model artifact discovery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelLocatorConfig {
    /// Explicit artifact paths, tried first
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    /// Environment variable holding an artifact path; tried before everything
    #[serde(default = "default_env_var")]
    pub env_var: Option<String>,

    /// File names searched for in each search directory
    #[serde(default = "default_file_names")]
    pub file_names: Vec<String>,

    /// Directories searched for `file_names`; the working directory is
    /// always searched last
    #[serde(default)]
    pub search_dirs: Vec<PathBuf>,
}

impl Default for ModelLocatorConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            env_var: default_env_var(),
            file_names: default_file_names(),
            search_dirs: Vec::new(),
        }
    }
}

impl ModelLocatorConfig {
    /// Candidate locations using the live environment and working directory
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        let env_value = self
            .env_var
            .as_deref()
            .and_then(|name| std::env::var(name).ok());
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.resolve_candidates(env_value.as_deref(), &cwd)
    }

    /// Ordered, de-duplicated candidate locations
    pub fn resolve_candidates(&self, env_value: Option<&str>, cwd: &Path) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(value) = env_value.map(str::trim).filter(|v| !v.is_empty()) {
            candidates.push(PathBuf::from(value));
        }
        candidates.extend(self.paths.iter().cloned());

        for name in &self.file_names {
            for dir in &self.search_dirs {
                candidates.push(dir.join(name));
            }
            candidates.push(cwd.join(name));
        }

        let mut unique: Vec<PathBuf> = Vec::with_capacity(candidates.len());
        for path in candidates {
            if !unique.contains(&path) {
                unique.push(path);
            }
        }
        unique
    }
}

/// Load configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ClassifierConfig> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        reviewcheck_core::Error::config(format!(
            "Failed to read config file {}: {e}",
            path.as_ref().display()
        ))
    })?;
    ClassifierConfig::from_yaml_str(&content)
}

fn default_snippet_len() -> usize {
    DEFAULT_SNIPPET_LEN
}

fn default_env_var() -> Option<String> {
    Some("MODEL_PATH".to_string())
}

fn default_file_names() -> Vec<String> {
    vec![
        "rf_model_pipeline.json".to_string(),
        "model.json".to_string(),
    ]
}

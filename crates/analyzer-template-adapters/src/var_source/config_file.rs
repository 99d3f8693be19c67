//! Value source backed by configuration.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables `ANALYZER_TEMPLATE_USER_VARS__<NAME>`
//! 2. The `[user_vars]` table of a TOML config file
//! 3. Declared defaults (applied by the session, not here)
//!
//! ```toml
//! [user_vars]
//! namespace = "MyProto"
//! name = "my_proto"
//! ```

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{debug, info};

use analyzer_template_core::{
    application::{ApplicationError, ports::VarSource},
    domain::UserVar,
    error::ScaffoldResult,
};

const ENV_PREFIX: &str = "ANALYZER_TEMPLATE";

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    user_vars: HashMap<String, String>,
}

/// Answers read from a config file and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigVarSource {
    answers: HashMap<String, String>,
}

impl ConfigVarSource {
    /// Load from `path` (or the default location) and the process environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(path: Option<&Path>) -> ScaffoldResult<Self> {
        let path = path.map_or_else(Self::config_path, Path::to_path_buf);
        Self::load_with_env(&path, None)
    }

    /// Load from `path`, taking environment variables from `env` instead of
    /// the process environment when given.
    pub fn load_with_env(
        path: &Path,
        env: Option<HashMap<String, String>>,
    ) -> ScaffoldResult<Self> {
        let raw: RawConfig = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .and_then(|c| c.try_deserialize::<RawConfig>())
            .map_err(|e| ApplicationError::VarSource {
                reason: format!("{}: {}", path.display(), e),
            })?;

        info!(
            path = %path.display(),
            answers = raw.user_vars.len(),
            "Loaded user variable answers"
        );

        let answers = raw
            .user_vars
            .into_iter()
            .map(|(name, value)| (name.to_lowercase(), value))
            .collect();

        Ok(Self { answers })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.analyzer-template.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "analyzer-template", "analyzer-template")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".analyzer-template.toml"))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl VarSource for ConfigVarSource {
    fn value_for(&self, var: &UserVar) -> ScaffoldResult<Option<String>> {
        // Environment keys arrive lowercased, so all lookups are.
        let answer = self.answers.get(&var.name().to_lowercase()).cloned();

        debug!(var = var.name(), found = answer.is_some(), "Config lookup");
        Ok(answer)
    }
}

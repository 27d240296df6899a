//! Layered configuration for the qbank binary.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (qbank.toml shipped with the binary)
//! 2. User config in home directory (~/.config/qbank/qbank.toml)
//! 3. User config in current directory (./qbank.toml)
//! 4. An explicit `--config` file
//! 5. Environment variables (`SUPABASE_URL`, `SUPABASE_ANON_KEY`, `QBANK_API_BASE_URL`)

use config::{Config, File, FileFormat};
use qbank_api::ApiConfig;
use qbank_core::QuestionType;
use qbank_database::{ConstraintSpec, DatabaseConfig};
use qbank_error::{ConfigError, QbankError, QbankResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Environment variables and the settings keys they override.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("SUPABASE_URL", "database.url"),
    ("SUPABASE_ANON_KEY", "database.anon_key"),
    ("QBANK_API_BASE_URL", "api.base_url"),
];

/// Database connection and constraint settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatabaseSettings {
    /// Supabase project URL
    #[serde(default)]
    pub url: String,
    /// Supabase anonymous key
    #[serde(default)]
    pub anon_key: String,
    /// Remote procedure executing raw SQL
    pub sql_function: String,
    /// Table holding the question type constraint
    pub table: String,
    /// Name of the check constraint
    pub constraint: String,
    /// Column the constraint checks
    pub column: String,
    /// Values the recreated constraint allows
    pub allowed_types: Vec<QuestionType>,
}

/// Generation API settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the generation service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Defaults for probe rows and smoke test requests.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProbeSettings {
    /// Topic that exists in the backend
    pub topic_id: String,
    /// Question type to probe or generate
    pub question_type: QuestionType,
}

/// Complete qbank configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Database settings
    pub database: DatabaseSettings,
    /// Generation API settings
    pub api: ApiSettings,
    /// Probe defaults
    pub probe: ProbeSettings,
}

impl Settings {
    /// Load configuration using the process environment.
    pub fn load(path: Option<&Path>) -> QbankResult<Self> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_with(path, &env)
    }

    /// Load configuration with an explicit environment map.
    ///
    /// User config files in the home and current directory are optional and
    /// silently skipped if absent; an explicit `path` must exist.
    pub fn load_with(path: Option<&Path>, env: &HashMap<String, String>) -> QbankResult<Self> {
        Self::load_layers(path, env, true)
    }

    /// Load configuration from the bundled defaults, `path` and `env` only,
    /// ignoring user config files.
    pub fn load_isolated(path: Option<&Path>, env: &HashMap<String, String>) -> QbankResult<Self> {
        Self::load_layers(path, env, false)
    }

    #[instrument(skip(env))]
    fn load_layers(
        path: Option<&Path>,
        env: &HashMap<String, String>,
        user_files: bool,
    ) -> QbankResult<Self> {
        debug!("Loading configuration");

        const DEFAULT_CONFIG: &str = include_str!("../../../qbank.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if user_files {
            if let Some(home) = dirs::home_dir() {
                let home_config = home.join(".config/qbank/qbank.toml");
                builder = builder.add_source(File::from(home_config).required(false));
            }
            builder = builder.add_source(File::with_name("qbank").required(false));
        }

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        for (var, key) in ENV_OVERRIDES {
            let value = env.get(*var).filter(|v| !v.is_empty()).cloned();
            builder = builder.set_override_option(*key, value).map_err(|e| {
                QbankError::from(ConfigError::new(format!(
                    "Failed to apply {}: {}",
                    var, e
                )))
            })?;
        }

        builder
            .build()
            .map_err(|e| {
                QbankError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                QbankError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Database connection settings. Fails when credentials are missing.
    pub fn database_config(&self) -> QbankResult<DatabaseConfig> {
        if self.database.url.is_empty() {
            return Err(ConfigError::new("SUPABASE_URL not set").into());
        }
        if self.database.anon_key.is_empty() {
            return Err(ConfigError::new("SUPABASE_ANON_KEY not set").into());
        }
        Ok(
            DatabaseConfig::new(&self.database.url, &self.database.anon_key)
                .with_sql_function(&self.database.sql_function),
        )
    }

    /// The constraint the repair command targets.
    pub fn constraint_spec(&self) -> ConstraintSpec {
        ConstraintSpec {
            table: self.database.table.clone(),
            constraint: self.database.constraint.clone(),
            column: self.database.column.clone(),
            allowed: self.database.allowed_types.clone(),
        }
    }

    /// Generation API settings.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(&self.api.base_url).with_timeout(Duration::from_secs(self.api.timeout_secs))
    }
}

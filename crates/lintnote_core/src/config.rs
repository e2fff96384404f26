//! lintnote configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};

use crate::LintnoteError;
use crate::formatters::Format;
use crate::rule_url::RuleUrlMappings;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Config file names, in lookup order.
pub const CONFIG_FILES: &[&str] = &[".lintnote.jsonc", ".lintnote.json"];

/// Configuration for lintnote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintnoteConfig {
    /// Default output format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,

    /// Directory that response file paths are relative to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<PathBuf>,

    /// Rule documentation URL mappings.
    #[serde(default, skip_serializing_if = "RuleUrlMappings::is_empty")]
    pub rule_urls: RuleUrlMappings,

    /// Directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl LintnoteConfig {
    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a config file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LintnoteError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LintnoteError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;
        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from JSON (comments allowed) with schema validation.
    pub fn from_json(json: &str) -> Result<Self, LintnoteError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| LintnoteError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(LintnoteError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| LintnoteError::config(format!("Invalid config: {}", e)))
    }

    /// Source root resolved against the config file's directory.
    pub fn resolved_source_root(&self) -> Option<PathBuf> {
        let root = self.source_root.as_ref()?;
        match &self.base_dir {
            Some(base) if root.is_relative() => Some(base.join(root)),
            _ => Some(root.clone()),
        }
    }
}

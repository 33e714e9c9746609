//! Configuration for sbom-export.
//!
//! Resolution order, highest precedence first: CLI flags, environment
//! variables, an optional `sbom-export.config.yml` in the working
//! directory, built-in defaults. The API token is environment-only so
//! it never ends up in a file checked into a repository.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::Path;

use crate::shared::error::ExportError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "sbom-export.config.yml";

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "SBOM_EXPORT_TOKEN";

/// Environment variable holding the organization id.
pub const ORG_ID_ENV: &str = "SBOM_EXPORT_ORG_ID";

const DEFAULT_API_BASE_URL: &str = "https://api.snyk.io/rest";
const DEFAULT_API_VERSION: &str = "2023-05-29";
const DEFAULT_SBOM_FORMAT: &str = "cyclonedx1.4+json";

/// Immutable configuration passed to each component at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_version: String,
    pub sbom_format: String,
    pub org_id: String,
    pub token: String,
}

impl Config {
    /// Resolves configuration from CLI override, environment, and an
    /// optionally discovered config file.
    ///
    /// Fails locally with a MissingConfig error when the token or
    /// organization id cannot be found, instead of letting the remote
    /// API answer 401 to every request.
    pub fn resolve(cli_org: Option<String>) -> Result<Self> {
        let file = discover_config(Path::new("."))?.unwrap_or_default();
        Self::from_sources(cli_org, env::var(TOKEN_ENV).ok(), env::var(ORG_ID_ENV).ok(), file)
    }

    /// Pure resolution step, separated from process environment access
    /// so precedence is testable.
    pub fn from_sources(
        cli_org: Option<String>,
        env_token: Option<String>,
        env_org: Option<String>,
        file: ConfigFile,
    ) -> Result<Self> {
        let token = env_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ExportError::MissingConfig {
                name: TOKEN_ENV.to_string(),
                hint: format!("Set the {} environment variable to your API token", TOKEN_ENV),
            })?;

        let org_id = cli_org
            .or(env_org)
            .or(file.org_id)
            .filter(|o| !o.is_empty())
            .ok_or_else(|| ExportError::MissingConfig {
                name: ORG_ID_ENV.to_string(),
                hint: format!(
                    "Pass --org, set the {} environment variable, or add org_id to {}",
                    ORG_ID_ENV, CONFIG_FILENAME
                ),
            })?;

        Ok(Self {
            api_base_url: file
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            api_version: file
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            sbom_format: file
                .sbom_format
                .unwrap_or_else(|| DEFAULT_SBOM_FORMAT.to_string()),
            org_id,
            token,
        })
    }

    /// Filesystem-safe rendering of the SBOM format, used to name
    /// export directories ("cyclonedx1.4+json" -> "cyclonedx1.4-json").
    pub fn format_slug(&self) -> String {
        self.sbom_format
            .chars()
            .map(|c| if c == '+' || c == '%' || c == '/' { '-' } else { c })
            .collect()
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub org_id: Option<String>,
    pub api_base_url: Option<String>,
    pub api_version: Option<String>,
    pub sbom_format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

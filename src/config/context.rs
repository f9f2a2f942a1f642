//! Named-environment context store.
//!
//! The context file (`edgestack.context.yaml`) maps environment names to
//! [`EnvironmentConfig`] records. The store is read exactly once per build;
//! requesting an environment that has no record aborts the build before any
//! resource descriptor is composed.

use crate::error::{ConfigError, EdgestackError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use super::spec::EnvironmentConfig;

/// Environment name used when none is selected explicitly.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Environment variable selecting the configuration name.
pub const ENV_VAR_ENVIRONMENT: &str = "EDGESTACK_ENV";

/// Environment variable carrying the target account identifier.
pub const ENV_VAR_ACCOUNT: &str = "EDGESTACK_ACCOUNT";

/// Deployment region. CloudFront-scoped WAF resources must live in
/// `us-east-1`, so the region is not configurable.
pub const REGION: &str = "us-east-1";

/// Context file names to search for, in order.
pub const DEFAULT_CONTEXT_FILES: &[&str] = &[
    "edgestack.context.yaml",
    "edgestack.context.yml",
    "context.yaml",
    "context.yml",
];

/// Keyed lookup of environment name to configuration record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContextStore {
    /// Environment records keyed by name.
    #[serde(default)]
    pub environments: IndexMap<String, EnvironmentConfig>,
}

impl ContextStore {
    /// Loads the context store from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading context from: {}", path.display());

        if !path.exists() {
            return Err(EdgestackError::Config(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            EdgestackError::Config(ConfigError::ParseError {
                message: format!("Failed to read file: {e}"),
                location: Some(path.display().to_string()),
            })
        })?;

        Self::parse_yaml(&content, Some(path))
    }

    /// Parses a context store from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse_yaml(content: &str, source: Option<&Path>) -> Result<Self> {
        debug!("Parsing YAML context");

        let store: Self = serde_yaml::from_str(content).map_err(|e| {
            let location = source.map(|p| p.display().to_string());
            EdgestackError::Config(ConfigError::ParseError {
                message: format!("YAML parse error: {e}"),
                location,
            })
        })?;

        debug!("Parsed context with {} environment(s)", store.environments.len());
        Ok(store)
    }

    /// Resolves the configuration record for an environment name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvironmentNotFound`] if no record exists for
    /// the requested name. This is fatal: there is no fallback and no partial
    /// result.
    pub fn resolve(&self, name: &str) -> Result<&EnvironmentConfig> {
        self.environments.get(name).ok_or_else(|| {
            EdgestackError::Config(ConfigError::EnvironmentNotFound {
                name: name.to_string(),
            })
        })
    }

    /// Returns the environment names in declaration order.
    #[must_use]
    pub fn environment_names(&self) -> Vec<&str> {
        self.environments.keys().map(String::as_str).collect()
    }

    /// Returns true if the store contains no environments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

/// Returns the selected environment name.
///
/// Precedence: explicit CLI value, then `EDGESTACK_ENV`, then
/// [`DEFAULT_ENVIRONMENT`].
#[must_use]
pub fn selected_environment(explicit: Option<&str>) -> String {
    explicit.map_or_else(
        || std::env::var(ENV_VAR_ENVIRONMENT).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string()),
        ToString::to_string,
    )
}

/// Returns the target account identifier from the environment, if set.
#[must_use]
pub fn account_id() -> Option<String> {
    std::env::var(ENV_VAR_ACCOUNT).ok()
}

/// Loads the `.env` file next to the context file, if present.
///
/// # Errors
///
/// Returns an error if the `.env` file exists but cannot be loaded.
pub fn load_dotenv(base_dir: impl AsRef<Path>) -> Result<()> {
    let env_path = base_dir.as_ref().join(".env");

    if env_path.exists() {
        info!("Loading environment from: {}", env_path.display());
        dotenvy::from_path(&env_path).map_err(|e| {
            EdgestackError::Config(ConfigError::ParseError {
                message: format!("Failed to load .env file: {e}"),
                location: Some(env_path.display().to_string()),
            })
        })?;
    } else {
        debug!(".env file not found at: {}", env_path.display());
    }

    Ok(())
}

/// Finds the context file in the given directory or its parents.
///
/// # Errors
///
/// Returns an error if no context file is found.
pub fn find_context_file(start_dir: impl AsRef<Path>) -> Result<std::path::PathBuf> {
    let start = start_dir.as_ref();
    let mut current = start.to_path_buf();

    loop {
        for filename in DEFAULT_CONTEXT_FILES {
            let context_path = current.join(filename);
            if context_path.exists() {
                info!("Found context file: {}", context_path.display());
                return Ok(context_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    Err(EdgestackError::Config(ConfigError::FileNotFound {
        path: start.join(DEFAULT_CONTEXT_FILES[0]),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONTEXT: &str = r#"
environments:
  production:
    resource_name: web-prod
    origin_domain: origin.example.com
    log_bucket: web-prod-logs
    managed_rules:
      - AWSManagedRulesCommonRuleSet
  staging:
    resource_name: web-stg
    origin_domain: origin-stg.example.com
    log_bucket: web-stg-logs
"#;

    #[test]
    fn test_parse_context() {
        let store = ContextStore::parse_yaml(SAMPLE_CONTEXT, None).unwrap();
        assert_eq!(store.environment_names(), vec!["production", "staging"]);

        let prod = store.resolve("production").unwrap();
        assert_eq!(prod.resource_name, "web-prod");
        assert_eq!(prod.managed_rules, vec!["AWSManagedRulesCommonRuleSet"]);
        assert!(!prod.log_removal);
    }

    #[test]
    fn test_absent_environment_aborts() {
        let store = ContextStore::parse_yaml(SAMPLE_CONTEXT, None).unwrap();
        let err = store.resolve("qa").unwrap_err();
        assert!(err.is_missing_environment());
        assert!(err.to_string().contains("qa"));
    }

    #[test]
    fn test_selected_environment_precedence() {
        assert_eq!(selected_environment(Some("staging")), "staging");
    }

    #[test]
    fn test_default_environment() {
        // Explicit beats the default; without either the fixed literal wins.
        assert_eq!(DEFAULT_ENVIRONMENT, "production");
    }

    #[test]
    fn test_load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContextStore::load_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(
            err,
            EdgestackError::Config(ConfigError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_find_context_file_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("edgestack.context.yaml"), SAMPLE_CONTEXT).unwrap();

        let found = find_context_file(&nested).unwrap();
        assert_eq!(found, dir.path().join("edgestack.context.yaml"));
    }
}

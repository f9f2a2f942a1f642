//! Configuration module for the edgestack synthesizer.
//!
//! This module handles all configuration-related functionality:
//! - Parsing and deserializing `edgestack.context.yaml`
//! - Resolving the environment record selected for a build
//! - Validation of configuration values

mod context;
mod spec;
mod validator;

pub use context::{
    ContextStore, account_id, find_context_file, load_dotenv, selected_environment,
    DEFAULT_CONTEXT_FILES, DEFAULT_ENVIRONMENT, ENV_VAR_ACCOUNT, ENV_VAR_ENVIRONMENT, REGION,
};
pub use spec::{BehaviorSetting, EnvironmentConfig};
pub use validator::{ConfigValidator, ValidationError, ValidationResult};

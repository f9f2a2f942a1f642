//! Environment configuration types for the synthesizer.
//!
//! This module defines the structs that map to one entry of the
//! `edgestack.context.yaml` file. An [`EnvironmentConfig`] fully describes the
//! desired distribution, firewall and logging setup for one deployment target
//! and is immutable for the duration of a synthesis pass.

use serde::{Deserialize, Serialize};

/// Configuration record for a single deployment environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentConfig {
    /// Base name used to derive resource names (cache policy, WebACL, metrics).
    pub resource_name: String,
    /// Alternate domain names (CNAMEs) for the distribution.
    #[serde(default)]
    pub alternate_domain_names: Vec<String>,
    /// ACM certificate ARN for the alternate domain names.
    #[serde(default)]
    pub certificate_arn: Option<String>,
    /// Domain name of the network origin the distribution fronts.
    pub origin_domain: String,
    /// Per-path behavior settings.
    #[serde(default)]
    pub behaviors: Vec<BehaviorSetting>,
    /// ARN of an IP set whose addresses bypass the managed firewall rules.
    #[serde(default)]
    pub allow_list_arn: Option<String>,
    /// Names of AWS managed rule groups to evaluate, in priority order.
    #[serde(default)]
    pub managed_rules: Vec<String>,
    /// Name of the bucket receiving distribution access logs.
    pub log_bucket: String,
    /// Key prefix for access log objects.
    #[serde(default)]
    pub log_file_prefix: String,
    /// Whether log resources are deleted when the stack is torn down.
    #[serde(default)]
    pub log_removal: bool,
    /// Human-readable description attached to the distribution.
    #[serde(default)]
    pub description: String,
    /// Name of the content bucket for the S3-origin stack.
    ///
    /// Defaults to `{resource_name}-content` when not set.
    #[serde(default)]
    pub content_bucket: Option<String>,
}

/// A single per-path behavior setting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BehaviorSetting {
    /// URL path pattern the behavior applies to (e.g. `/images/*`).
    ///
    /// An empty pattern selects the no-cache policy for that behavior.
    #[serde(default)]
    pub path_pattern: String,
}

impl EnvironmentConfig {
    /// Returns the derived cache policy name for a stack identifier.
    #[must_use]
    pub fn cache_policy_name(stack_name: &str) -> String {
        format!("{stack_name}CachePolicy")
    }

    /// Returns the derived WebACL name.
    #[must_use]
    pub fn web_acl_name(&self) -> String {
        format!("{}-WebACL", self.resource_name)
    }

    /// Returns the derived WAF log group name.
    ///
    /// WAF requires CloudWatch destinations to carry the `aws-waf-logs-`
    /// prefix.
    #[must_use]
    pub fn waf_log_group_name(&self) -> String {
        format!("aws-waf-logs-{}", self.resource_name)
    }

    /// Returns the content bucket name, deriving one from the resource name
    /// when not explicitly configured.
    #[must_use]
    pub fn content_bucket_name(&self) -> String {
        self.content_bucket
            .clone()
            .unwrap_or_else(|| format!("{}-content", self.resource_name))
    }

    /// Returns true if both a certificate and at least one alternate domain
    /// name are configured. Only then does the distribution carry a custom
    /// domain; one without the other attaches neither.
    #[must_use]
    pub fn has_custom_domain(&self) -> bool {
        self.certificate_arn.as_ref().is_some_and(|arn| !arn.is_empty())
            && !self.alternate_domain_names.is_empty()
    }

    /// Returns the behavior path patterns.
    #[must_use]
    pub fn path_patterns(&self) -> Vec<&str> {
        self.behaviors.iter().map(|b| b.path_pattern.as_str()).collect()
    }
}

impl BehaviorSetting {
    /// Creates a behavior setting for a path pattern.
    #[must_use]
    pub fn new(path_pattern: impl Into<String>) -> Self {
        Self {
            path_pattern: path_pattern.into(),
        }
    }
}

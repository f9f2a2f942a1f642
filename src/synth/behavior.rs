//! Cache behavior composition.
//!
//! Transforms the per-path behavior settings of an environment into the
//! ordered path-pattern-to-behavior mapping attached to a distribution, and
//! chooses the viewer protocol policy from certificate presence.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::EnvironmentConfig;
use crate::template::{
    managed, methods, CacheBehavior, Token, ViewerProtocolPolicy, ALLOWED_METHODS_ALL,
    CACHED_METHODS_GET_HEAD,
};

/// Managed policy selection for one origin kind.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorPolicies {
    /// Origin request policy id.
    pub origin_request_policy: &'static str,
    /// Response headers policy id.
    pub response_headers_policy: &'static str,
}

impl BehaviorPolicies {
    /// Policies for a custom (network) origin: relay all viewer headers and
    /// answer CORS preflight.
    #[must_use]
    pub const fn network_origin() -> Self {
        Self {
            origin_request_policy: managed::ORIGIN_REQUEST_ALL_VIEWER_AND_CLOUDFRONT_2022,
            response_headers_policy: managed::RESPONSE_HEADERS_CORS_WITH_PREFLIGHT,
        }
    }

    /// Policies for a bucket origin.
    #[must_use]
    pub const fn bucket_origin() -> Self {
        Self {
            origin_request_policy: managed::ORIGIN_REQUEST_CORS_S3_ORIGIN,
            response_headers_policy: managed::RESPONSE_HEADERS_CORS_ALLOW_ALL,
        }
    }
}

/// Composer for per-path cache behaviors.
#[derive(Debug, Default)]
pub struct BehaviorComposer;

impl BehaviorComposer {
    /// Returns the viewer protocol policy for an environment: HTTPS redirect
    /// when a certificate is configured, allow-all otherwise.
    #[must_use]
    pub fn viewer_protocol(config: &EnvironmentConfig) -> ViewerProtocolPolicy {
        if config.certificate_arn.as_ref().is_some_and(|arn| !arn.is_empty()) {
            ViewerProtocolPolicy::RedirectToHttps
        } else {
            ViewerProtocolPolicy::AllowAll
        }
    }

    /// Composes the path-pattern-to-behavior mapping for an environment.
    ///
    /// Each setting yields one entry keyed by its path pattern. A non-empty
    /// pattern selects the shared cache policy; an absent pattern selects the
    /// managed no-cache policy. An empty settings list yields an empty map,
    /// which callers must not attach to the distribution at all.
    #[must_use]
    pub fn compose(
        config: &EnvironmentConfig,
        origin_id: &str,
        shared_cache_policy: &Token,
        policies: BehaviorPolicies,
    ) -> IndexMap<String, CacheBehavior> {
        let viewer_protocol_policy = Self::viewer_protocol(config);
        let mut behaviors = IndexMap::with_capacity(config.behaviors.len());

        for setting in &config.behaviors {
            let cache_policy_id = if setting.path_pattern.is_empty() {
                Token::literal(managed::CACHE_POLICY_CACHING_DISABLED)
            } else {
                shared_cache_policy.clone()
            };

            behaviors.insert(
                setting.path_pattern.clone(),
                CacheBehavior {
                    path_pattern: Some(setting.path_pattern.clone()),
                    target_origin_id: origin_id.to_string(),
                    viewer_protocol_policy,
                    allowed_methods: methods(ALLOWED_METHODS_ALL),
                    cached_methods: methods(CACHED_METHODS_GET_HEAD),
                    compress: false,
                    cache_policy_id,
                    origin_request_policy_id: Some(Token::literal(policies.origin_request_policy)),
                    response_headers_policy_id: Some(Token::literal(
                        policies.response_headers_policy,
                    )),
                },
            );
        }

        debug!("Composed {} additional behavior(s)", behaviors.len());
        behaviors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorSetting;

    fn config_with_behaviors(patterns: &[&str], certificate: Option<&str>) -> EnvironmentConfig {
        EnvironmentConfig {
            resource_name: String::from("web"),
            alternate_domain_names: vec![],
            certificate_arn: certificate.map(String::from),
            origin_domain: String::from("origin.example.com"),
            behaviors: patterns.iter().copied().map(BehaviorSetting::new).collect(),
            allow_list_arn: None,
            managed_rules: vec![],
            log_bucket: String::from("web-logs"),
            log_file_prefix: String::new(),
            log_removal: false,
            description: String::new(),
            content_bucket: None,
        }
    }

    fn shared_policy() -> Token {
        Token::get_att("CustomCachePolicy", "Id")
    }

    #[test]
    fn test_single_path_pattern_yields_single_entry() {
        let config = config_with_behaviors(&["/images/*"], None);
        let behaviors = BehaviorComposer::compose(
            &config,
            "Origin",
            &shared_policy(),
            BehaviorPolicies::network_origin(),
        );

        assert_eq!(behaviors.len(), 1);
        let behavior = behaviors.get("/images/*").unwrap();
        assert_eq!(behavior.path_pattern.as_deref(), Some("/images/*"));
        assert_eq!(behavior.target_origin_id, "Origin");
        assert_eq!(behavior.cache_policy_id, shared_policy());
    }

    #[test]
    fn test_empty_settings_yield_empty_map() {
        let config = config_with_behaviors(&[], None);
        let behaviors = BehaviorComposer::compose(
            &config,
            "Origin",
            &shared_policy(),
            BehaviorPolicies::network_origin(),
        );
        assert!(behaviors.is_empty());
    }

    #[test]
    fn test_empty_pattern_selects_no_cache_policy() {
        let config = config_with_behaviors(&[""], None);
        let behaviors = BehaviorComposer::compose(
            &config,
            "Origin",
            &shared_policy(),
            BehaviorPolicies::network_origin(),
        );

        let behavior = behaviors.get("").unwrap();
        assert_eq!(
            behavior.cache_policy_id,
            Token::literal(managed::CACHE_POLICY_CACHING_DISABLED)
        );
    }

    #[test]
    fn test_viewer_protocol_follows_certificate() {
        let without = config_with_behaviors(&[], None);
        assert_eq!(
            BehaviorComposer::viewer_protocol(&without),
            ViewerProtocolPolicy::AllowAll
        );

        let with = config_with_behaviors(&[], Some("arn:aws:acm:us-east-1:123:certificate/abc"));
        assert_eq!(
            BehaviorComposer::viewer_protocol(&with),
            ViewerProtocolPolicy::RedirectToHttps
        );
    }

    #[test]
    fn test_ordering_is_preserved() {
        let config = config_with_behaviors(&["/api/*", "/images/*", "/static/*"], None);
        let behaviors = BehaviorComposer::compose(
            &config,
            "Origin",
            &shared_policy(),
            BehaviorPolicies::network_origin(),
        );

        let keys: Vec<&str> = behaviors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/api/*", "/images/*", "/static/*"]);
    }
}

//! Distribution composition.
//!
//! Assembles the distribution descriptor from its parts: a default behavior,
//! the optional additional-behavior mapping, an optional firewall attachment,
//! the certificate/alias pair, and logging. Also derives the shared custom
//! cache policy both stack builders register.

use indexmap::IndexMap;

use crate::config::EnvironmentConfig;
use crate::template::{
    CacheBehavior, CacheKeyBehavior, CacheKeyParameters, CachePolicy, CachePolicyConfig,
    CookiesConfig, Distribution, DistributionConfig, HeadersConfig, LoggingConfig, Origin,
    PriceClass, QueryStringsConfig, Token, ViewerCertificate,
};

/// Default TTL of the shared cache policy: five minutes.
const DEFAULT_TTL_SECS: u64 = 300;

/// Minimum TTL of the shared cache policy: one second.
const MIN_TTL_SECS: u64 = 1;

/// Maximum TTL of the shared cache policy: 365 days.
const MAX_TTL_SECS: u64 = 31_536_000;

/// Inputs for assembling one distribution.
#[derive(Debug)]
pub struct DistributionParts<'a> {
    /// The environment configuration.
    pub config: &'a EnvironmentConfig,
    /// Origins the distribution fetches from.
    pub origins: Vec<Origin>,
    /// The always-present default behavior.
    pub default_behavior: CacheBehavior,
    /// Additional behaviors keyed by path pattern. An empty map attaches
    /// nothing.
    pub additional_behaviors: IndexMap<String, CacheBehavior>,
    /// Firewall policy ARN to attach, if any.
    pub web_acl: Option<Token>,
    /// Domain name of the log bucket.
    pub log_bucket_domain: Token,
}

/// Composer for content-delivery distributions.
#[derive(Debug, Default)]
pub struct DistributionComposer;

impl DistributionComposer {
    /// Composes the shared custom cache policy: query strings in the cache
    /// key, no cookies or headers, compressed variants enabled.
    #[must_use]
    pub fn custom_cache_policy(name: impl Into<String>) -> CachePolicy {
        CachePolicy {
            cache_policy_config: CachePolicyConfig {
                name: name.into(),
                default_ttl: DEFAULT_TTL_SECS,
                min_ttl: MIN_TTL_SECS,
                max_ttl: MAX_TTL_SECS,
                parameters_in_cache_key_and_forwarded_to_origin: CacheKeyParameters {
                    cookies_config: CookiesConfig {
                        cookie_behavior: CacheKeyBehavior::None,
                    },
                    headers_config: HeadersConfig {
                        header_behavior: CacheKeyBehavior::None,
                    },
                    query_strings_config: QueryStringsConfig {
                        query_string_behavior: CacheKeyBehavior::All,
                    },
                    enable_accept_encoding_brotli: true,
                    enable_accept_encoding_gzip: true,
                },
            },
        }
    }

    /// Assembles the distribution descriptor.
    ///
    /// The certificate and alternate domain names attach only when both are
    /// present; one without the other attaches neither. None of these steps
    /// can fail at composition time: invalid combinations surface from the
    /// external provisioning validation, not here.
    #[must_use]
    pub fn compose(parts: DistributionParts<'_>) -> Distribution {
        let attach_domain = parts.config.has_custom_domain();

        let aliases = if attach_domain {
            parts.config.alternate_domain_names.clone()
        } else {
            Vec::new()
        };

        let viewer_certificate = if attach_domain {
            parts
                .config
                .certificate_arn
                .as_ref()
                .map(ViewerCertificate::acm)
        } else {
            None
        };

        Distribution {
            distribution_config: DistributionConfig {
                aliases,
                cache_behaviors: parts.additional_behaviors.into_values().collect(),
                comment: parts.config.description.clone(),
                default_cache_behavior: parts.default_behavior,
                enabled: true,
                logging: LoggingConfig {
                    bucket: parts.log_bucket_domain,
                    prefix: parts.config.log_file_prefix.clone(),
                },
                origins: parts.origins,
                price_class: PriceClass::All,
                viewer_certificate,
                web_acl_id: parts.web_acl,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{methods, ViewerProtocolPolicy, ALLOWED_METHODS_ALL, CACHED_METHODS_GET_HEAD};

    fn config(certificate: Option<&str>, domains: &[&str]) -> EnvironmentConfig {
        EnvironmentConfig {
            resource_name: String::from("web"),
            alternate_domain_names: domains.iter().map(ToString::to_string).collect(),
            certificate_arn: certificate.map(String::from),
            origin_domain: String::from("origin.example.com"),
            behaviors: vec![],
            allow_list_arn: None,
            managed_rules: vec![],
            log_bucket: String::from("web-logs"),
            log_file_prefix: String::from("web/"),
            log_removal: false,
            description: String::from("web distribution"),
            content_bucket: None,
        }
    }

    fn default_behavior() -> CacheBehavior {
        CacheBehavior {
            path_pattern: None,
            target_origin_id: String::from("Origin"),
            viewer_protocol_policy: ViewerProtocolPolicy::AllowAll,
            allowed_methods: methods(ALLOWED_METHODS_ALL),
            cached_methods: methods(CACHED_METHODS_GET_HEAD),
            compress: false,
            cache_policy_id: Token::get_att("CustomCachePolicy", "Id"),
            origin_request_policy_id: None,
            response_headers_policy_id: None,
        }
    }

    fn parts(config: &EnvironmentConfig) -> DistributionParts<'_> {
        DistributionParts {
            config,
            origins: vec![],
            default_behavior: default_behavior(),
            additional_behaviors: IndexMap::new(),
            web_acl: None,
            log_bucket_domain: Token::get_att("LogBucket", "RegionalDomainName"),
        }
    }

    #[test]
    fn test_certificate_and_domains_attach_together() {
        let config = config(
            Some("arn:aws:acm:us-east-1:123:certificate/abc"),
            &["www.example.com"],
        );
        let distribution = DistributionComposer::compose(parts(&config));

        let dc = &distribution.distribution_config;
        assert_eq!(dc.aliases, vec!["www.example.com"]);
        assert_eq!(
            dc.viewer_certificate.as_ref().map(|c| c.acm_certificate_arn.as_str()),
            Some("arn:aws:acm:us-east-1:123:certificate/abc")
        );
    }

    #[test]
    fn test_certificate_without_domains_attaches_neither() {
        let config = config(Some("arn:aws:acm:us-east-1:123:certificate/abc"), &[]);
        let distribution = DistributionComposer::compose(parts(&config));

        let dc = &distribution.distribution_config;
        assert!(dc.aliases.is_empty());
        assert!(dc.viewer_certificate.is_none());
    }

    #[test]
    fn test_domains_without_certificate_attach_neither() {
        let config = config(None, &["www.example.com"]);
        let distribution = DistributionComposer::compose(parts(&config));

        let dc = &distribution.distribution_config;
        assert!(dc.aliases.is_empty());
        assert!(dc.viewer_certificate.is_none());
    }

    #[test]
    fn test_logging_and_comment_carry_over() {
        let config = config(None, &[]);
        let distribution = DistributionComposer::compose(parts(&config));

        let dc = &distribution.distribution_config;
        assert_eq!(dc.comment, "web distribution");
        assert_eq!(dc.logging.prefix, "web/");
        assert_eq!(dc.price_class, PriceClass::All);
        assert!(dc.enabled);
    }

    #[test]
    fn test_custom_cache_policy_settings() {
        let policy = DistributionComposer::custom_cache_policy("webCachePolicy");
        let config = &policy.cache_policy_config;
        assert_eq!(config.name, "webCachePolicy");
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.min_ttl, 1);
        assert_eq!(config.max_ttl, 31_536_000);

        let params = &config.parameters_in_cache_key_and_forwarded_to_origin;
        assert_eq!(params.cookies_config.cookie_behavior, CacheKeyBehavior::None);
        assert_eq!(params.query_strings_config.query_string_behavior, CacheKeyBehavior::All);
        assert!(params.enable_accept_encoding_brotli);
        assert!(params.enable_accept_encoding_gzip);
    }
}

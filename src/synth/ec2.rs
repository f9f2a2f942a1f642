//! EC2-origin stack builder.
//!
//! Synthesizes the full resource graph for a distribution fronting a fixed
//! network origin: firewall policy, firewall log sink, shared cache policy,
//! access-log bucket, the distribution itself and its outputs.

use tracing::info;

use crate::config::EnvironmentConfig;
use crate::error::Result;
use crate::template::{
    methods, Bucket, CacheBehavior, CustomOriginConfig, DeletionPolicy, Origin,
    OriginProtocolPolicy, OriginShield, StackTemplate, Token, ALLOWED_METHODS_ALL,
    CACHED_METHODS_GET_HEAD,
};

use super::behavior::{BehaviorComposer, BehaviorPolicies};
use super::distribution::{DistributionComposer, DistributionParts};
use super::firewall::FirewallComposer;

/// Region hosting the Origin Shield cache in front of the network origin.
const ORIGIN_SHIELD_REGION: &str = "ap-northeast-1";

/// Logical id of the single origin.
const ORIGIN_ID: &str = "Origin";

/// Builder for the EC2-origin stack.
#[derive(Debug)]
pub struct Ec2OriginStack<'a> {
    stack_name: String,
    config: &'a EnvironmentConfig,
}

impl<'a> Ec2OriginStack<'a> {
    /// Creates a builder for a stack name and environment configuration.
    #[must_use]
    pub fn new(stack_name: impl Into<String>, config: &'a EnvironmentConfig) -> Self {
        Self {
            stack_name: stack_name.into(),
            config,
        }
    }

    /// Synthesizes the resource graph.
    ///
    /// Straight-line construction: every descriptor is derived from the
    /// configuration in one pass, and nothing is mutated afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if a logical id or output name collides, which would
    /// indicate a builder bug rather than bad configuration.
    pub fn synthesize(&self) -> Result<StackTemplate> {
        let config = self.config;
        info!("Synthesizing EC2-origin stack: {}", self.stack_name);

        let mut template =
            StackTemplate::new(&self.stack_name).with_description(&config.description);
        let removal = DeletionPolicy::from_removal(config.log_removal);

        // Firewall policy and its log sink.
        template.add_resource("WebACL", &FirewallComposer::compose(config))?;
        template.add_resource_with_policy("WafLogGroup", &FirewallComposer::log_group(config), removal)?;
        template.add_resource(
            "WafLoggingConfig",
            &FirewallComposer::logging_configuration("WebACL", "WafLogGroup"),
        )?;

        // Shared cache policy, named from the stack identifier.
        let cache_policy_name = EnvironmentConfig::cache_policy_name(&self.stack_name);
        template.add_resource(
            "CustomCachePolicy",
            &DistributionComposer::custom_cache_policy(cache_policy_name),
        )?;
        let cache_policy = Token::get_att("CustomCachePolicy", "Id");

        // Access-log bucket.
        template.add_resource_with_policy(
            "LogBucket",
            &Bucket::log_delivery(&config.log_bucket),
            removal,
        )?;

        let origin = Origin {
            id: String::from(ORIGIN_ID),
            domain_name: Token::literal(&config.origin_domain),
            custom_origin_config: Some(CustomOriginConfig {
                origin_protocol_policy: OriginProtocolPolicy::HttpOnly,
            }),
            s3_origin_config: None,
            origin_access_control_id: None,
            origin_shield: Some(OriginShield {
                enabled: true,
                origin_shield_region: String::from(ORIGIN_SHIELD_REGION),
            }),
        };

        let policies = BehaviorPolicies::network_origin();
        let default_behavior = CacheBehavior {
            path_pattern: None,
            target_origin_id: String::from(ORIGIN_ID),
            viewer_protocol_policy: BehaviorComposer::viewer_protocol(config),
            allowed_methods: methods(ALLOWED_METHODS_ALL),
            cached_methods: methods(CACHED_METHODS_GET_HEAD),
            compress: false,
            cache_policy_id: cache_policy.clone(),
            origin_request_policy_id: Some(Token::literal(policies.origin_request_policy)),
            response_headers_policy_id: Some(Token::literal(policies.response_headers_policy)),
        };
        let additional_behaviors =
            BehaviorComposer::compose(config, ORIGIN_ID, &cache_policy, policies);

        let distribution = DistributionComposer::compose(DistributionParts {
            config,
            origins: vec![origin],
            default_behavior,
            additional_behaviors,
            web_acl: Some(Token::get_att("WebACL", "Arn")),
            log_bucket_domain: Token::get_att("LogBucket", "RegionalDomainName"),
        });
        template.add_resource("Distribution", &distribution)?;

        template.add_output(
            "DistributionDomainName",
            "Domain name of the distribution",
            Token::get_att("Distribution", "DomainName"),
        )?;
        template.add_output(
            "WebACLId",
            "Id of the firewall policy",
            Token::get_att("WebACL", "Id"),
        )?;
        template.add_output(
            "OriginDomain",
            "Domain name of the origin",
            Token::literal(&config.origin_domain),
        )?;

        info!(
            "Synthesized {} resource(s) for stack {}",
            template.resource_count(),
            self.stack_name
        );
        Ok(template)
    }
}

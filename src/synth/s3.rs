//! S3-origin stack builder.
//!
//! Synthesizes the resource graph for a distribution fronting a private
//! content bucket: the bucket itself, an origin access control, the shared
//! cache policy, an access-log bucket, the distribution and its outputs.

use tracing::info;

use crate::config::EnvironmentConfig;
use crate::error::Result;
use crate::template::{
    methods, Bucket, CacheBehavior, DeletionPolicy, Origin, OriginAccessControl, S3OriginConfig,
    StackTemplate, Token, ALLOWED_METHODS_ALL, CACHED_METHODS_GET_HEAD,
};

use super::behavior::{BehaviorComposer, BehaviorPolicies};
use super::distribution::{DistributionComposer, DistributionParts};

/// Logical id of the single origin.
const ORIGIN_ID: &str = "Origin";

/// Builder for the S3-origin stack.
#[derive(Debug)]
pub struct S3OriginStack<'a> {
    stack_name: String,
    config: &'a EnvironmentConfig,
}

impl<'a> S3OriginStack<'a> {
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
    /// # Errors
    ///
    /// Returns an error if a logical id or output name collides, which would
    /// indicate a builder bug rather than bad configuration.
    pub fn synthesize(&self) -> Result<StackTemplate> {
        let config = self.config;
        info!("Synthesizing S3-origin stack: {}", self.stack_name);

        let mut template =
            StackTemplate::new(&self.stack_name).with_description(&config.description);
        let removal = DeletionPolicy::from_removal(config.log_removal);

        // Private content bucket, fetched only through the access control.
        template.add_resource_with_policy(
            "ContentBucket",
            &Bucket::private_content(config.content_bucket_name()),
            removal,
        )?;
        template.add_resource(
            "OriginAccessControl",
            &OriginAccessControl::for_bucket(format!("{}-oac", self.stack_name)),
        )?;

        // Shared cache policy, named from the stack identifier so two stacks
        // never collide.
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
            domain_name: Token::get_att("ContentBucket", "RegionalDomainName"),
            custom_origin_config: None,
            s3_origin_config: Some(S3OriginConfig::default()),
            origin_access_control_id: Some(Token::get_att("OriginAccessControl", "Id")),
            origin_shield: None,
        };

        let policies = BehaviorPolicies::bucket_origin();
        let default_behavior = CacheBehavior {
            path_pattern: None,
            target_origin_id: String::from(ORIGIN_ID),
            viewer_protocol_policy: BehaviorComposer::viewer_protocol(config),
            allowed_methods: methods(ALLOWED_METHODS_ALL),
            cached_methods: methods(CACHED_METHODS_GET_HEAD),
            compress: true,
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
            web_acl: None,
            log_bucket_domain: Token::get_att("LogBucket", "RegionalDomainName"),
        });
        template.add_resource("Distribution", &distribution)?;

        template.add_output(
            "DistributionId",
            "Id of the distribution",
            Token::reference("Distribution"),
        )?;
        template.add_output(
            "DistributionDomainName",
            "Domain name of the distribution",
            Token::get_att("Distribution", "DomainName"),
        )?;
        template.add_output(
            "ContentBucketName",
            "Name of the content bucket",
            Token::reference("ContentBucket"),
        )?;

        info!(
            "Synthesized {} resource(s) for stack {}",
            template.resource_count(),
            self.stack_name
        );
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorSetting;

    fn sample_config() -> EnvironmentConfig {
        EnvironmentConfig {
            resource_name: String::from("site"),
            alternate_domain_names: vec![],
            certificate_arn: Some(String::from("arn:aws:acm:us-east-1:123:certificate/abc")),
            origin_domain: String::from("unused.example.com"),
            behaviors: vec![BehaviorSetting::new("/images/*")],
            allow_list_arn: None,
            managed_rules: vec![],
            log_bucket: String::from("site-logs"),
            log_file_prefix: String::from("site/"),
            log_removal: true,
            description: String::from("static site distribution"),
            content_bucket: Some(String::from("site-content")),
        }
    }

    fn synthesize(stack_name: &str, config: &EnvironmentConfig) -> serde_json::Value {
        let template = S3OriginStack::new(stack_name, config).synthesize().unwrap();
        serde_json::from_str(&template.to_json().unwrap()).unwrap()
    }

    #[test]
    fn test_content_bucket_blocks_public_access() {
        let value = synthesize("SiteStack", &sample_config());

        assert_eq!(
            value.pointer("/Resources/ContentBucket/Properties/BucketName"),
            Some(&serde_json::json!("site-content"))
        );
        assert_eq!(
            value.pointer(
                "/Resources/ContentBucket/Properties/PublicAccessBlockConfiguration/BlockPublicAcls"
            ),
            Some(&serde_json::json!(true))
        );
    }

    #[test]
    fn test_single_origin_access_control() {
        let config = sample_config();
        let template = S3OriginStack::new("SiteStack", &config).synthesize().unwrap();
        assert_eq!(template.count_of_type("AWS::CloudFront::OriginAccessControl"), 1);
    }

    #[test]
    fn test_origin_references_bucket_through_access_control() {
        let value = synthesize("SiteStack", &sample_config());

        assert_eq!(
            value.pointer(
                "/Resources/Distribution/Properties/DistributionConfig/Origins/0/DomainName"
            ),
            Some(&serde_json::json!({"Fn::GetAtt": ["ContentBucket", "RegionalDomainName"]}))
        );
        assert_eq!(
            value.pointer(
                "/Resources/Distribution/Properties/DistributionConfig/Origins/0/OriginAccessControlId"
            ),
            Some(&serde_json::json!({"Fn::GetAtt": ["OriginAccessControl", "Id"]}))
        );
    }

    #[test]
    fn test_additional_behavior_from_configuration() {
        let value = synthesize("SiteStack", &sample_config());

        assert_eq!(
            value.pointer(
                "/Resources/Distribution/Properties/DistributionConfig/CacheBehaviors/0/PathPattern"
            ),
            Some(&serde_json::json!("/images/*"))
        );
    }

    #[test]
    fn test_cache_policy_names_derive_from_stack_identifier() {
        let config = sample_config();
        let first = synthesize("TestStack1", &config);
        let second = synthesize("TestStack2", &config);

        assert_eq!(
            first.pointer("/Resources/CustomCachePolicy/Properties/CachePolicyConfig/Name"),
            Some(&serde_json::json!("TestStack1CachePolicy"))
        );
        assert_eq!(
            second.pointer("/Resources/CustomCachePolicy/Properties/CachePolicyConfig/Name"),
            Some(&serde_json::json!("TestStack2CachePolicy"))
        );
    }

    #[test]
    fn test_no_firewall_attached() {
        let value = synthesize("SiteStack", &sample_config());
        assert!(value
            .pointer("/Resources/Distribution/Properties/DistributionConfig/WebACLId")
            .is_none());
    }

    #[test]
    fn test_log_bucket_access_control_and_removal() {
        let value = synthesize("SiteStack", &sample_config());

        assert_eq!(
            value.pointer("/Resources/LogBucket/Properties/AccessControl"),
            Some(&serde_json::json!("LogDeliveryWrite"))
        );
        assert_eq!(
            value.pointer("/Resources/LogBucket/DeletionPolicy"),
            Some(&serde_json::json!("Delete"))
        );
    }

    #[test]
    fn test_outputs() {
        let config = sample_config();
        let template = S3OriginStack::new("SiteStack", &config).synthesize().unwrap();

        assert_eq!(
            template.output("DistributionId").map(|o| &o.value),
            Some(&Token::reference("Distribution"))
        );
        assert!(template.output("DistributionDomainName").is_some());
        assert_eq!(
            template.output("ContentBucketName").map(|o| &o.value),
            Some(&Token::reference("ContentBucket"))
        );
    }

    #[test]
    fn test_default_content_bucket_name() {
        let mut config = sample_config();
        config.content_bucket = None;
        let value = synthesize("SiteStack", &config);

        assert_eq!(
            value.pointer("/Resources/ContentBucket/Properties/BucketName"),
            Some(&serde_json::json!("site-content"))
        );
    }
}

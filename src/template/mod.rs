//! Declarative resource graph types.
//!
//! This module defines the typed resource descriptors the composers emit and
//! the [`StackTemplate`] graph they are collected into. Nothing here talks to
//! a cloud provider; the emitted JSON is the hand-off point to the external
//! provisioning step.

mod resource;
mod stack;

pub use resource::{
    managed, methods, Bucket, BucketAccessControl, CacheBehavior, CacheKeyBehavior,
    CacheKeyParameters, CachePolicy, CachePolicyConfig, CfnResource, CookiesConfig,
    CustomOriginConfig, Distribution, DistributionConfig, HeadersConfig, IpSetReferenceStatement,
    LogGroup, LoggingConfig, ManagedRuleGroupStatement, Origin, OriginAccessControl,
    OriginAccessControlConfig, OriginProtocolPolicy, OriginShield, PriceClass,
    PublicAccessBlockConfiguration, QueryStringsConfig, RuleStatement, S3OriginConfig, Token,
    ViewerCertificate, ViewerProtocolPolicy, VisibilityConfig, WafAction, WafLoggingConfiguration,
    WafOverrideAction, WafRule, WafScope, WebAcl, ALLOWED_METHODS_ALL, CACHED_METHODS_GET_HEAD,
    RETENTION_FIVE_YEARS,
};
pub use stack::{DeletionPolicy, OutputEntry, ResourceNode, StackTemplate};

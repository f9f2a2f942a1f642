//! Typed resource descriptors.
//!
//! Each struct here maps to one CloudFormation resource type and serializes to
//! the `Properties` block of that resource. The descriptors are purely
//! declarative: they carry no behavior beyond construction helpers, and any
//! cross-resource reference is expressed as an unresolved [`Token`] that only
//! the external provisioning step materializes.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Well-known managed policy identifiers.
///
/// These are the fixed ids AWS publishes for its managed CloudFront policies;
/// referencing them by id avoids declaring local policy resources.
pub mod managed {
    /// Cache policy: `Managed-CachingDisabled`.
    pub const CACHE_POLICY_CACHING_DISABLED: &str = "4135ea2d-6df8-44a3-9df3-4b5a84be39ad";
    /// Origin request policy: `Managed-AllViewerAndCloudFrontHeaders-2022-06`.
    pub const ORIGIN_REQUEST_ALL_VIEWER_AND_CLOUDFRONT_2022: &str =
        "33f36d7e-f396-46d9-90e0-52428a34d9dc";
    /// Origin request policy: `Managed-CORS-S3Origin`.
    pub const ORIGIN_REQUEST_CORS_S3_ORIGIN: &str = "88a5eaf4-2fd4-4709-b370-b4c650ea3fcf";
    /// Response headers policy: `Managed-CORS-with-preflight`.
    pub const RESPONSE_HEADERS_CORS_WITH_PREFLIGHT: &str =
        "5cc3b908-e619-4b99-88e5-2cf8f83a159a";
    /// Response headers policy: `Managed-SimpleCORS`.
    pub const RESPONSE_HEADERS_CORS_ALLOW_ALL: &str = "60669652-455b-4ae9-85a4-c4c02393f86c";
}

/// A value that may reference another resource in the same stack.
///
/// Literals serialize as plain strings; references serialize as the `Ref` and
/// `Fn::GetAtt` intrinsics understood by the provisioning step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A literal string value.
    Literal(String),
    /// A reference to another resource's default return value.
    Ref {
        /// Logical id of the referenced resource.
        logical_id: String,
    },
    /// A reference to an attribute of another resource.
    GetAtt {
        /// Logical id of the referenced resource.
        logical_id: String,
        /// Attribute name (e.g. `Arn`, `DomainName`).
        attribute: String,
    },
}

impl Token {
    /// Creates a literal token.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Creates a `Ref` token.
    #[must_use]
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Self::Ref {
            logical_id: logical_id.into(),
        }
    }

    /// Creates a `Fn::GetAtt` token.
    #[must_use]
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(value) => serializer.serialize_str(value),
            Self::Ref { logical_id } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Ref", logical_id)?;
                map.end()
            }
            Self::GetAtt {
                logical_id,
                attribute,
            } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::GetAtt", &[logical_id, attribute])?;
                map.end()
            }
        }
    }
}

/// A descriptor that maps to exactly one CloudFormation resource type.
pub trait CfnResource: Serialize {
    /// CloudFormation resource type identifier (e.g. `AWS::WAFv2::WebACL`).
    const TYPE: &'static str;
}

// ---------------------------------------------------------------------------
// WAFv2
// ---------------------------------------------------------------------------

/// A complete firewall policy descriptor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebAcl {
    /// Policy name.
    pub name: String,
    /// Action taken when no rule matches.
    pub default_action: WafAction,
    /// Evaluation scope. Distribution-layer policies use `CLOUDFRONT`.
    pub scope: WafScope,
    /// CloudWatch visibility for the policy as a whole.
    pub visibility_config: VisibilityConfig,
    /// Ordered rule list. Priorities are unique; lower evaluates first.
    pub rules: Vec<WafRule>,
}

impl CfnResource for WebAcl {
    const TYPE: &'static str = "AWS::WAFv2::WebACL";
}

/// Firewall policy evaluation scope.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WafScope {
    /// Rules evaluated at the distribution layer.
    Cloudfront,
    /// Rules evaluated at a regional resource.
    Regional,
}

/// A terminal rule action.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum WafAction {
    /// Allow the request.
    Allow {},
    /// Block the request.
    Block {},
}

/// An override action for rules that delegate to a rule group.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum WafOverrideAction {
    /// Use the actions defined inside the rule group.
    None {},
    /// Count matches without acting on them.
    Count {},
}

/// A single firewall rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WafRule {
    /// Rule name.
    pub name: String,
    /// Evaluation priority. Unique within the policy.
    pub priority: u32,
    /// Terminal action, for rules with their own statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<WafAction>,
    /// Override action, for rules delegating to a rule group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_action: Option<WafOverrideAction>,
    /// The rule's match statement.
    pub statement: RuleStatement,
    /// CloudWatch visibility for this rule.
    pub visibility_config: VisibilityConfig,
}

/// A rule match statement.
#[derive(Debug, Clone, Serialize)]
pub enum RuleStatement {
    /// Delegate evaluation entirely to a vendor-managed rule group.
    #[serde(rename = "ManagedRuleGroupStatement")]
    ManagedRuleGroup(ManagedRuleGroupStatement),
    /// Match requests originating from an IP set.
    #[serde(rename = "IPSetReferenceStatement")]
    IpSetReference(IpSetReferenceStatement),
}

/// Reference to a vendor-managed rule group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagedRuleGroupStatement {
    /// Rule group name (e.g. `AWSManagedRulesCommonRuleSet`).
    pub name: String,
    /// Rule group vendor.
    pub vendor_name: String,
}

/// Reference to an IP set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpSetReferenceStatement {
    /// ARN of the IP set.
    pub arn: String,
}

/// CloudWatch visibility settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VisibilityConfig {
    /// Whether CloudWatch metrics are emitted.
    pub cloud_watch_metrics_enabled: bool,
    /// Metric name.
    pub metric_name: String,
    /// Whether sampled requests are stored.
    pub sampled_requests_enabled: bool,
}

impl VisibilityConfig {
    /// Creates a visibility config with metrics and sampling enabled, using
    /// the conventional `{base}-Metrics` metric name.
    #[must_use]
    pub fn metrics(base: &str) -> Self {
        Self {
            cloud_watch_metrics_enabled: true,
            metric_name: format!("{base}-Metrics"),
            sampled_requests_enabled: true,
        }
    }
}

/// A firewall logging configuration wiring a policy to its log destination.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WafLoggingConfiguration {
    /// ARN of the firewall policy being logged.
    pub resource_arn: Token,
    /// Log destinations. WAF accepts CloudWatch log group ARNs here.
    pub log_destination_configs: Vec<Token>,
}

impl CfnResource for WafLoggingConfiguration {
    const TYPE: &'static str = "AWS::WAFv2::LoggingConfiguration";
}

// ---------------------------------------------------------------------------
// CloudWatch Logs
// ---------------------------------------------------------------------------

/// Retention period of five years, in days.
pub const RETENTION_FIVE_YEARS: u32 = 1827;

/// A CloudWatch log group descriptor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogGroup {
    /// Log group name.
    pub log_group_name: String,
    /// Retention period in days.
    pub retention_in_days: u32,
}

impl CfnResource for LogGroup {
    const TYPE: &'static str = "AWS::Logs::LogGroup";
}

// ---------------------------------------------------------------------------
// S3
// ---------------------------------------------------------------------------

/// An S3 bucket descriptor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bucket {
    /// Bucket name.
    pub bucket_name: String,
    /// Canned access control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_control: Option<BucketAccessControl>,
    /// Public access block settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_access_block_configuration: Option<PublicAccessBlockConfiguration>,
}

impl CfnResource for Bucket {
    const TYPE: &'static str = "AWS::S3::Bucket";
}

impl Bucket {
    /// Creates a log bucket that accepts log delivery writes.
    #[must_use]
    pub fn log_delivery(name: impl Into<String>) -> Self {
        Self {
            bucket_name: name.into(),
            access_control: Some(BucketAccessControl::LogDeliveryWrite),
            public_access_block_configuration: None,
        }
    }

    /// Creates a private content bucket with all public access blocked.
    #[must_use]
    pub fn private_content(name: impl Into<String>) -> Self {
        Self {
            bucket_name: name.into(),
            access_control: None,
            public_access_block_configuration: Some(PublicAccessBlockConfiguration::block_all()),
        }
    }
}

/// Canned bucket access control values.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum BucketAccessControl {
    /// Grants the log delivery group write access.
    LogDeliveryWrite,
    /// Owner-only access.
    Private,
}

/// Public access block settings.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PublicAccessBlockConfiguration {
    /// Block new public ACLs.
    pub block_public_acls: bool,
    /// Block new public bucket policies.
    pub block_public_policy: bool,
    /// Ignore existing public ACLs.
    pub ignore_public_acls: bool,
    /// Restrict access for buckets with public policies.
    pub restrict_public_buckets: bool,
}

impl PublicAccessBlockConfiguration {
    /// All four settings enabled.
    #[must_use]
    pub const fn block_all() -> Self {
        Self {
            block_public_acls: true,
            block_public_policy: true,
            ignore_public_acls: true,
            restrict_public_buckets: true,
        }
    }
}

// ---------------------------------------------------------------------------
// CloudFront
// ---------------------------------------------------------------------------

/// A cache policy descriptor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CachePolicy {
    /// The policy configuration.
    pub cache_policy_config: CachePolicyConfig,
}

impl CfnResource for CachePolicy {
    const TYPE: &'static str = "AWS::CloudFront::CachePolicy";
}

/// Cache policy settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CachePolicyConfig {
    /// Policy name. Must be unique per account, so it is derived from the
    /// stack identifier.
    pub name: String,
    /// Default TTL in seconds.
    #[serde(rename = "DefaultTTL")]
    pub default_ttl: u64,
    /// Minimum TTL in seconds.
    #[serde(rename = "MinTTL")]
    pub min_ttl: u64,
    /// Maximum TTL in seconds.
    #[serde(rename = "MaxTTL")]
    pub max_ttl: u64,
    /// Cache key composition.
    pub parameters_in_cache_key_and_forwarded_to_origin: CacheKeyParameters,
}

/// Cache key composition settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CacheKeyParameters {
    /// Cookie handling.
    pub cookies_config: CookiesConfig,
    /// Header handling.
    pub headers_config: HeadersConfig,
    /// Query string handling.
    pub query_strings_config: QueryStringsConfig,
    /// Whether Brotli-encoded objects are cached separately.
    pub enable_accept_encoding_brotli: bool,
    /// Whether gzip-encoded objects are cached separately.
    pub enable_accept_encoding_gzip: bool,
}

/// Cookie handling in the cache key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CookiesConfig {
    /// Which cookies are included.
    pub cookie_behavior: CacheKeyBehavior,
}

/// Header handling in the cache key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeadersConfig {
    /// Which headers are included.
    pub header_behavior: CacheKeyBehavior,
}

/// Query string handling in the cache key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryStringsConfig {
    /// Which query strings are included.
    pub query_string_behavior: CacheKeyBehavior,
}

/// Cache key inclusion behavior.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheKeyBehavior {
    /// Include nothing.
    None,
    /// Include everything.
    All,
}

/// An origin access control descriptor for bucket origins.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OriginAccessControl {
    /// The access control configuration.
    pub origin_access_control_config: OriginAccessControlConfig,
}

impl CfnResource for OriginAccessControl {
    const TYPE: &'static str = "AWS::CloudFront::OriginAccessControl";
}

/// Origin access control settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OriginAccessControlConfig {
    /// Access control name.
    pub name: String,
    /// Origin type the control applies to.
    pub origin_access_control_origin_type: String,
    /// When requests are signed.
    pub signing_behavior: String,
    /// Signature protocol.
    pub signing_protocol: String,
}

impl OriginAccessControl {
    /// Creates a SigV4 always-sign access control for a bucket origin.
    #[must_use]
    pub fn for_bucket(name: impl Into<String>) -> Self {
        Self {
            origin_access_control_config: OriginAccessControlConfig {
                name: name.into(),
                origin_access_control_origin_type: String::from("s3"),
                signing_behavior: String::from("always"),
                signing_protocol: String::from("sigv4"),
            },
        }
    }
}

/// A content-delivery distribution descriptor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Distribution {
    /// The distribution configuration.
    pub distribution_config: DistributionConfig,
}

impl CfnResource for Distribution {
    const TYPE: &'static str = "AWS::CloudFront::Distribution";
}

/// Distribution settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DistributionConfig {
    /// Alternate domain names (CNAMEs). Present only together with a
    /// certificate.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Per-path behaviors. An empty behavior set emits no key at all.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cache_behaviors: Vec<CacheBehavior>,
    /// Human-readable description.
    pub comment: String,
    /// The behavior applied when no path pattern matches.
    pub default_cache_behavior: CacheBehavior,
    /// Whether the distribution serves traffic.
    pub enabled: bool,
    /// Access logging settings.
    pub logging: LoggingConfig,
    /// Origins the distribution fetches from.
    pub origins: Vec<Origin>,
    /// Edge location price class.
    pub price_class: PriceClass,
    /// Certificate settings. Present only together with aliases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_certificate: Option<ViewerCertificate>,
    /// Attached firewall policy ARN.
    #[serde(rename = "WebACLId", skip_serializing_if = "Option::is_none")]
    pub web_acl_id: Option<Token>,
}

/// A cache behavior. With a path pattern it is an additional behavior; the
/// default behavior omits the pattern.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CacheBehavior {
    /// Path pattern the behavior applies to. Absent on the default behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_pattern: Option<String>,
    /// Logical id of the origin this behavior routes to.
    pub target_origin_id: String,
    /// Protocol policy enforced on viewers.
    pub viewer_protocol_policy: ViewerProtocolPolicy,
    /// HTTP methods the distribution forwards.
    pub allowed_methods: Vec<String>,
    /// HTTP methods whose responses are cached.
    pub cached_methods: Vec<String>,
    /// Whether responses are compressed at the edge.
    pub compress: bool,
    /// Cache policy id (local reference or managed policy id).
    pub cache_policy_id: Token,
    /// Origin request policy id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_request_policy_id: Option<Token>,
    /// Response headers policy id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_headers_policy_id: Option<Token>,
}

/// Viewer protocol policies.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ViewerProtocolPolicy {
    /// Redirect HTTP viewers to HTTPS.
    #[serde(rename = "redirect-to-https")]
    RedirectToHttps,
    /// Accept both HTTP and HTTPS.
    #[serde(rename = "allow-all")]
    AllowAll,
    /// Reject plain HTTP.
    #[serde(rename = "https-only")]
    HttpsOnly,
}

/// All HTTP methods CloudFront can forward.
pub const ALLOWED_METHODS_ALL: &[&str] =
    &["GET", "HEAD", "OPTIONS", "PUT", "POST", "PATCH", "DELETE"];

/// The cacheable method subset.
pub const CACHED_METHODS_GET_HEAD: &[&str] = &["GET", "HEAD"];

/// Returns an owned method list from a static method set.
#[must_use]
pub fn methods(set: &[&str]) -> Vec<String> {
    set.iter().map(ToString::to_string).collect()
}

/// Access logging settings for a distribution.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoggingConfig {
    /// Log bucket domain name.
    pub bucket: Token,
    /// Key prefix for log objects.
    pub prefix: String,
}

/// Edge location price classes.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PriceClass {
    /// All edge locations.
    #[serde(rename = "PriceClass_All")]
    All,
    /// North America and Europe only.
    #[serde(rename = "PriceClass_100")]
    NorthAmericaEurope,
}

/// Viewer certificate settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewerCertificate {
    /// ACM certificate ARN.
    pub acm_certificate_arn: String,
    /// SSL support method.
    pub ssl_support_method: String,
    /// Minimum TLS version for viewers.
    pub minimum_protocol_version: String,
}

impl ViewerCertificate {
    /// Creates an SNI certificate attachment for an ACM certificate.
    #[must_use]
    pub fn acm(arn: impl Into<String>) -> Self {
        Self {
            acm_certificate_arn: arn.into(),
            ssl_support_method: String::from("sni-only"),
            minimum_protocol_version: String::from("TLSv1.2_2021"),
        }
    }
}

/// An origin descriptor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Origin {
    /// Logical id behaviors use to route to this origin.
    pub id: String,
    /// Origin domain name.
    pub domain_name: Token,
    /// Settings for a custom (network) origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_origin_config: Option<CustomOriginConfig>,
    /// Settings for a bucket origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_origin_config: Option<S3OriginConfig>,
    /// Origin access control id for bucket origins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_access_control_id: Option<Token>,
    /// Origin Shield settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_shield: Option<OriginShield>,
}

/// Settings for a custom (network) origin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomOriginConfig {
    /// Protocol used to reach the origin.
    pub origin_protocol_policy: OriginProtocolPolicy,
}

/// Origin protocol policies.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum OriginProtocolPolicy {
    /// Plain HTTP to the origin.
    #[serde(rename = "http-only")]
    HttpOnly,
    /// HTTPS to the origin.
    #[serde(rename = "https-only")]
    HttpsOnly,
    /// Match the viewer protocol.
    #[serde(rename = "match-viewer")]
    MatchViewer,
}

/// Settings for a bucket origin. With origin access control the legacy
/// identity field stays empty.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3OriginConfig {
    /// Legacy origin access identity. Empty when access control is used.
    pub origin_access_identity: String,
}

/// Origin Shield settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OriginShield {
    /// Whether Origin Shield is enabled.
    pub enabled: bool,
    /// Region hosting the shield cache.
    pub origin_shield_region: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_serialization() {
        let literal = serde_json::to_value(Token::literal("origin.example.com")).unwrap();
        assert_eq!(literal, serde_json::json!("origin.example.com"));

        let reference = serde_json::to_value(Token::reference("Distribution")).unwrap();
        assert_eq!(reference, serde_json::json!({"Ref": "Distribution"}));

        let get_att = serde_json::to_value(Token::get_att("WebACL", "Arn")).unwrap();
        assert_eq!(get_att, serde_json::json!({"Fn::GetAtt": ["WebACL", "Arn"]}));
    }

    #[test]
    fn test_waf_action_serialization() {
        let allow = serde_json::to_value(WafAction::Allow {}).unwrap();
        assert_eq!(allow, serde_json::json!({"Allow": {}}));

        let none = serde_json::to_value(WafOverrideAction::None {}).unwrap();
        assert_eq!(none, serde_json::json!({"None": {}}));
    }

    #[test]
    fn test_managed_rule_statement_serialization() {
        let statement = RuleStatement::ManagedRuleGroup(ManagedRuleGroupStatement {
            name: String::from("AWSManagedRulesCommonRuleSet"),
            vendor_name: String::from("AWS"),
        });
        let value = serde_json::to_value(statement).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "ManagedRuleGroupStatement": {
                    "Name": "AWSManagedRulesCommonRuleSet",
                    "VendorName": "AWS"
                }
            })
        );
    }

    #[test]
    fn test_ip_set_statement_serialization() {
        let statement = RuleStatement::IpSetReference(IpSetReferenceStatement {
            arn: String::from("arn:aws:wafv2:us-east-1:123:global/ipset/allow/1"),
        });
        let value = serde_json::to_value(statement).unwrap();
        assert!(value.get("IPSetReferenceStatement").is_some());
    }

    #[test]
    fn test_bucket_block_all_public_access() {
        let bucket = Bucket::private_content("content");
        let value = serde_json::to_value(bucket).unwrap();
        assert_eq!(
            value.pointer("/PublicAccessBlockConfiguration/BlockPublicAcls"),
            Some(&serde_json::json!(true))
        );
        assert!(value.get("AccessControl").is_none());
    }

    #[test]
    fn test_log_bucket_access_control() {
        let bucket = Bucket::log_delivery("logs");
        let value = serde_json::to_value(bucket).unwrap();
        assert_eq!(value["AccessControl"], serde_json::json!("LogDeliveryWrite"));
    }

    #[test]
    fn test_empty_cache_behaviors_key_is_absent() {
        let config = DistributionConfig {
            aliases: vec![],
            cache_behaviors: vec![],
            comment: String::new(),
            default_cache_behavior: CacheBehavior {
                path_pattern: None,
                target_origin_id: String::from("Origin"),
                viewer_protocol_policy: ViewerProtocolPolicy::AllowAll,
                allowed_methods: methods(ALLOWED_METHODS_ALL),
                cached_methods: methods(CACHED_METHODS_GET_HEAD),
                compress: false,
                cache_policy_id: Token::literal(managed::CACHE_POLICY_CACHING_DISABLED),
                origin_request_policy_id: None,
                response_headers_policy_id: None,
            },
            enabled: true,
            logging: LoggingConfig {
                bucket: Token::get_att("LogBucket", "RegionalDomainName"),
                prefix: String::new(),
            },
            origins: vec![],
            price_class: PriceClass::All,
            viewer_certificate: None,
            web_acl_id: None,
        };

        let value = serde_json::to_value(config).unwrap();
        assert!(value.get("CacheBehaviors").is_none());
        assert!(value.get("Aliases").is_none());
        assert_eq!(value["PriceClass"], serde_json::json!("PriceClass_All"));
    }

    #[test]
    fn test_waf_scope_serialization() {
        let value = serde_json::to_value(WafScope::Cloudfront).unwrap();
        assert_eq!(value, serde_json::json!("CLOUDFRONT"));
    }
}

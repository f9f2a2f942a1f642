//! Firewall policy composition.
//!
//! Transforms the ordered managed-rule list plus an optional allow-list
//! identifier into a complete WebACL descriptor, and derives the WAF logging
//! resources that accompany it.

use tracing::debug;

use crate::config::EnvironmentConfig;
use crate::template::{
    IpSetReferenceStatement, LogGroup, ManagedRuleGroupStatement, RuleStatement, Token,
    VisibilityConfig, WafAction, WafLoggingConfiguration, WafOverrideAction, WafRule, WafScope,
    WebAcl, RETENTION_FIVE_YEARS,
};

/// Vendor name for AWS-managed rule groups.
const MANAGED_RULE_VENDOR: &str = "AWS";

/// Rule name for the allow-list rule.
const ALLOW_LIST_RULE_NAME: &str = "WhiteList";

/// Composer for distribution-layer firewall policies.
#[derive(Debug, Default)]
pub struct FirewallComposer;

impl FirewallComposer {
    /// Composes the WebACL descriptor for an environment.
    ///
    /// The allow-list rule, when configured, takes priority 0 with an allow
    /// action; managed rules follow at priorities 1..N, each delegating
    /// evaluation entirely to its named vendor rule group. An empty rule list
    /// yields a policy with only the default allow action.
    #[must_use]
    pub fn compose(config: &EnvironmentConfig) -> WebAcl {
        let mut rules = Vec::with_capacity(config.managed_rules.len() + 1);

        if let Some(arn) = config.allow_list_arn.as_ref().filter(|arn| !arn.is_empty()) {
            rules.push(WafRule {
                name: String::from(ALLOW_LIST_RULE_NAME),
                priority: 0,
                action: Some(WafAction::Allow {}),
                override_action: None,
                statement: RuleStatement::IpSetReference(IpSetReferenceStatement {
                    arn: arn.clone(),
                }),
                visibility_config: VisibilityConfig::metrics(ALLOW_LIST_RULE_NAME),
            });
        }

        for (index, rule_name) in config.managed_rules.iter().enumerate() {
            rules.push(WafRule {
                name: rule_name.clone(),
                priority: u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1),
                action: None,
                override_action: Some(WafOverrideAction::None {}),
                statement: RuleStatement::ManagedRuleGroup(ManagedRuleGroupStatement {
                    name: rule_name.clone(),
                    vendor_name: String::from(MANAGED_RULE_VENDOR),
                }),
                visibility_config: VisibilityConfig::metrics(rule_name),
            });
        }

        debug!("Composed firewall policy with {} rule(s)", rules.len());

        let name = config.web_acl_name();
        WebAcl {
            visibility_config: VisibilityConfig::metrics(&name),
            name,
            default_action: WafAction::Allow {},
            scope: WafScope::Cloudfront,
            rules,
        }
    }

    /// Composes the CloudWatch log group receiving firewall logs.
    #[must_use]
    pub fn log_group(config: &EnvironmentConfig) -> LogGroup {
        LogGroup {
            log_group_name: config.waf_log_group_name(),
            retention_in_days: RETENTION_FIVE_YEARS,
        }
    }

    /// Composes the logging configuration wiring the policy to its log group.
    #[must_use]
    pub fn logging_configuration(
        web_acl_logical_id: &str,
        log_group_logical_id: &str,
    ) -> WafLoggingConfiguration {
        WafLoggingConfiguration {
            resource_arn: Token::get_att(web_acl_logical_id, "Arn"),
            log_destination_configs: vec![Token::get_att(log_group_logical_id, "Arn")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorSetting;

    fn config_with_rules(rules: &[&str], allow_list: Option<&str>) -> EnvironmentConfig {
        EnvironmentConfig {
            resource_name: String::from("web"),
            alternate_domain_names: vec![],
            certificate_arn: None,
            origin_domain: String::from("origin.example.com"),
            behaviors: vec![BehaviorSetting::new("/images/*")],
            allow_list_arn: allow_list.map(String::from),
            managed_rules: rules.iter().map(ToString::to_string).collect(),
            log_bucket: String::from("web-logs"),
            log_file_prefix: String::new(),
            log_removal: false,
            description: String::new(),
            content_bucket: None,
        }
    }

    #[test]
    fn test_two_managed_rules_without_allow_list() {
        let config = config_with_rules(
            &["AWSManagedRulesCommonRuleSet", "AWSManagedRulesSQLiRuleSet"],
            None,
        );
        let acl = FirewallComposer::compose(&config);

        assert_eq!(acl.default_action, WafAction::Allow {});
        assert_eq!(acl.rules.len(), 2);
        assert_eq!(acl.rules[0].priority, 1);
        assert_eq!(acl.rules[0].name, "AWSManagedRulesCommonRuleSet");
        assert_eq!(acl.rules[1].priority, 2);
        assert_eq!(acl.rules[1].name, "AWSManagedRulesSQLiRuleSet");

        for rule in &acl.rules {
            assert!(matches!(
                &rule.statement,
                RuleStatement::ManagedRuleGroup(group)
                    if group.name == rule.name && group.vendor_name == "AWS"
            ));
            assert_eq!(rule.override_action, Some(WafOverrideAction::None {}));
            assert!(rule.action.is_none());
            assert_eq!(rule.visibility_config.metric_name, format!("{}-Metrics", rule.name));
        }
    }

    #[test]
    fn test_allow_list_takes_priority_zero() {
        let config = config_with_rules(
            &["AWSManagedRulesCommonRuleSet"],
            Some("arn:aws:wafv2:us-east-1:123:global/ipset/allow/1"),
        );
        let acl = FirewallComposer::compose(&config);

        assert_eq!(acl.rules.len(), 2);
        assert_eq!(acl.rules[0].name, "WhiteList");
        assert_eq!(acl.rules[0].priority, 0);
        assert_eq!(acl.rules[0].action, Some(WafAction::Allow {}));
        assert_eq!(acl.rules[1].priority, 1);

        let priorities: Vec<u32> = acl.rules.iter().map(|r| r.priority).collect();
        let mut unique = priorities.clone();
        unique.dedup();
        assert_eq!(priorities, unique);
    }

    #[test]
    fn test_empty_rule_list_yields_default_only() {
        let config = config_with_rules(&[], None);
        let acl = FirewallComposer::compose(&config);
        assert!(acl.rules.is_empty());
        assert_eq!(acl.default_action, WafAction::Allow {});
    }

    #[test]
    fn test_empty_rule_list_with_allow_list() {
        let config = config_with_rules(&[], Some("arn:aws:wafv2:us-east-1:123:global/ipset/allow/1"));
        let acl = FirewallComposer::compose(&config);
        assert_eq!(acl.rules.len(), 1);
        assert_eq!(acl.rules[0].name, "WhiteList");
    }

    #[test]
    fn test_scope_and_metrics() {
        let config = config_with_rules(&["AWSManagedRulesCommonRuleSet"], None);
        let acl = FirewallComposer::compose(&config);
        assert_eq!(acl.scope, WafScope::Cloudfront);
        assert_eq!(acl.name, "web-WebACL");
        assert_eq!(acl.visibility_config.metric_name, "web-WebACL-Metrics");
    }

    #[test]
    fn test_log_group_naming_and_retention() {
        let config = config_with_rules(&[], None);
        let log_group = FirewallComposer::log_group(&config);
        assert_eq!(log_group.log_group_name, "aws-waf-logs-web");
        assert_eq!(log_group.retention_in_days, 1827);
    }

    #[test]
    fn test_logging_configuration_references() {
        let logging = FirewallComposer::logging_configuration("WebACL", "WafLogGroup");
        assert_eq!(logging.resource_arn, Token::get_att("WebACL", "Arn"));
        assert_eq!(
            logging.log_destination_configs,
            vec![Token::get_att("WafLogGroup", "Arn")]
        );
    }
}

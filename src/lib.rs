// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::module_inception)]    // Module with same name as crate warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning
#![warn(clippy::too_many_arguments)]  // Limit function arguments
#![warn(clippy::cognitive_complexity)] // Limit cognitive complexity

// Safety and robustness lints
#![deny(overflowing_literals)]        // Overflowing literals are forbidden
#![deny(arithmetic_overflow)]         // Arithmetic overflow is forbidden

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Edgestack
//!
//! A declarative CloudFront stack synthesizer.
//!
//! ## Overview
//!
//! Edgestack reads a named environment configuration and composes a complete
//! resource template for an edge-caching stack:
//!
//! - A WAFv2 firewall policy built from vendor-managed rule sets, with an
//!   optional IP allow list and a CloudWatch log sink
//! - A CloudFront distribution fronting either a fixed network origin or a
//!   private content bucket
//! - Per-path cache behaviors, a shared custom cache policy, and access
//!   logging to a dedicated bucket
//!
//! The output is a CloudFormation-style JSON template. Edgestack only
//! *describes* resources: diffing, deployment and provider validation are
//! the concern of whatever provisioning tool consumes the template.
//!
//! ## Architecture
//!
//! Synthesis is a single synchronous pass:
//!
//! 1. **Resolve**: the context file maps environment names to configuration
//!    records; a missing environment aborts the build
//! 2. **Compose**: the firewall, behavior and distribution composers derive
//!    typed resource descriptors from the configuration
//! 3. **Emit**: the stack builders collect descriptors into an ordered
//!    resource graph with a write-once output set
//!
//! ## Modules
//!
//! - [`config`]: context parsing, environment resolution and validation
//! - [`template`]: typed resource descriptors and the stack template graph
//! - [`synth`]: composers and the two stack builders
//! - [`cli`]: command-line interface
//!
//! ## Example
//!
//! ```yaml
//! environments:
//!   production:
//!     resource_name: web-prod
//!     origin_domain: origin.example.com
//!     alternate_domain_names:
//!       - www.example.com
//!     certificate_arn: arn:aws:acm:us-east-1:123456789012:certificate/abc
//!     managed_rules:
//!       - AWSManagedRulesCommonRuleSet
//!       - AWSManagedRulesSQLiRuleSet
//!     behaviors:
//!       - path_pattern: "/images/*"
//!     log_bucket: web-prod-logs
//!     log_file_prefix: web-prod/
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod config;
pub mod error;
pub mod synth;
pub mod template;

// ============================================================================
// Re-exports
// ============================================================================

pub use cli::{Cli, Commands, OutputFormatter, StackKind};
pub use config::{BehaviorSetting, ConfigValidator, ContextStore, EnvironmentConfig};
pub use error::{ConfigError, EdgestackError, Result, SynthError};
pub use synth::{
    BehaviorComposer, BehaviorPolicies, DistributionComposer, Ec2OriginStack, FirewallComposer,
    S3OriginStack,
};
pub use template::{StackTemplate, Token};

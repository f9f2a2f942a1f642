//! Stack synthesis.
//!
//! This module turns an [`EnvironmentConfig`](crate::config::EnvironmentConfig)
//! into a [`StackTemplate`](crate::template::StackTemplate) in one synchronous
//! pass: the composers derive individual descriptors and the two stack
//! builders wire them into a resource graph.

mod behavior;
mod distribution;
mod ec2;
mod firewall;
mod s3;

pub use behavior::{BehaviorComposer, BehaviorPolicies};
pub use distribution::{DistributionComposer, DistributionParts};
pub use ec2::Ec2OriginStack;
pub use firewall::FirewallComposer;
pub use s3::S3OriginStack;

//! The synthesized resource graph for one stack.
//!
//! A [`StackTemplate`] is an ordered set of resource nodes plus a write-once
//! output set. It is built in a single synchronous pass and serializes to the
//! JSON template the external provisioning step consumes.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::{EdgestackError, Result, SynthError};

use super::resource::{CfnResource, Token};

/// Retention behavior of a resource when its stack is deleted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum DeletionPolicy {
    /// The resource is removed with the stack.
    Delete,
    /// The resource survives stack deletion.
    Retain,
}

impl DeletionPolicy {
    /// Maps a removal flag to a deletion policy.
    #[must_use]
    pub const fn from_removal(removal: bool) -> Self {
        if removal { Self::Delete } else { Self::Retain }
    }
}

/// A single resource in the graph: type, retention and serialized properties.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceNode {
    /// CloudFormation resource type.
    #[serde(rename = "Type")]
    pub resource_type: String,
    /// Retention behavior, when it differs from the provider default.
    #[serde(rename = "DeletionPolicy", skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<DeletionPolicy>,
    /// Resource properties.
    #[serde(rename = "Properties")]
    pub properties: serde_json::Value,
}

/// A named value exposed after the resource graph is materialized.
#[derive(Debug, Clone, Serialize)]
pub struct OutputEntry {
    /// Human-readable description.
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The output value, possibly an unresolved reference.
    #[serde(rename = "Value")]
    pub value: Token,
}

/// An ordered resource graph with a write-once output set.
#[derive(Debug, Serialize)]
pub struct StackTemplate {
    /// Stack name. Not part of the emitted template body.
    #[serde(skip)]
    stack_name: String,
    /// Template description.
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Resources keyed by logical id, in insertion order.
    #[serde(rename = "Resources")]
    resources: IndexMap<String, ResourceNode>,
    /// Outputs keyed by name, in insertion order.
    #[serde(rename = "Outputs", skip_serializing_if = "IndexMap::is_empty")]
    outputs: IndexMap<String, OutputEntry>,
}

impl StackTemplate {
    /// Creates an empty template for a stack.
    #[must_use]
    pub fn new(stack_name: impl Into<String>) -> Self {
        Self {
            stack_name: stack_name.into(),
            description: None,
            resources: IndexMap::new(),
            outputs: IndexMap::new(),
        }
    }

    /// Sets the template description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.is_empty() {
            self.description = Some(description);
        }
        self
    }

    /// Returns the stack name.
    #[must_use]
    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    /// Adds a resource descriptor under a logical id.
    ///
    /// # Errors
    ///
    /// Returns an error if the logical id is already taken or the descriptor
    /// cannot be serialized.
    pub fn add_resource<R: CfnResource>(&mut self, logical_id: &str, resource: &R) -> Result<()> {
        self.add_node(logical_id, resource, None)
    }

    /// Adds a resource descriptor with an explicit deletion policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the logical id is already taken or the descriptor
    /// cannot be serialized.
    pub fn add_resource_with_policy<R: CfnResource>(
        &mut self,
        logical_id: &str,
        resource: &R,
        policy: DeletionPolicy,
    ) -> Result<()> {
        self.add_node(logical_id, resource, Some(policy))
    }

    fn add_node<R: CfnResource>(
        &mut self,
        logical_id: &str,
        resource: &R,
        deletion_policy: Option<DeletionPolicy>,
    ) -> Result<()> {
        if self.resources.contains_key(logical_id) {
            return Err(EdgestackError::Synth(SynthError::DuplicateLogicalId {
                stack: self.stack_name.clone(),
                logical_id: logical_id.to_string(),
            }));
        }

        let properties = serde_json::to_value(resource)
            .map_err(|e| EdgestackError::Synth(SynthError::serialization(logical_id, e.to_string())))?;

        debug!("Adding resource {logical_id} ({})", R::TYPE);
        self.resources.insert(
            logical_id.to_string(),
            ResourceNode {
                resource_type: R::TYPE.to_string(),
                deletion_policy,
                properties,
            },
        );
        Ok(())
    }

    /// Registers an output. Outputs are write-once: registering the same name
    /// twice is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the output name is already taken.
    pub fn add_output(&mut self, name: &str, description: &str, value: Token) -> Result<()> {
        if self.outputs.contains_key(name) {
            return Err(EdgestackError::Synth(SynthError::DuplicateOutput {
                stack: self.stack_name.clone(),
                name: name.to_string(),
            }));
        }

        self.outputs.insert(
            name.to_string(),
            OutputEntry {
                description: (!description.is_empty()).then(|| description.to_string()),
                value,
            },
        );
        Ok(())
    }

    /// Returns the resource node for a logical id.
    #[must_use]
    pub fn resource(&self, logical_id: &str) -> Option<&ResourceNode> {
        self.resources.get(logical_id)
    }

    /// Returns all resources of a given type, in insertion order.
    #[must_use]
    pub fn resources_of_type(&self, resource_type: &str) -> Vec<(&str, &ResourceNode)> {
        self.resources
            .iter()
            .filter(|(_, node)| node.resource_type == resource_type)
            .map(|(id, node)| (id.as_str(), node))
            .collect()
    }

    /// Returns the number of resources of a given type.
    #[must_use]
    pub fn count_of_type(&self, resource_type: &str) -> usize {
        self.resources_of_type(resource_type).len()
    }

    /// Returns the output entry for a name.
    #[must_use]
    pub fn output(&self, name: &str) -> Option<&OutputEntry> {
        self.outputs.get(name)
    }

    /// Iterates over all resources in insertion order.
    pub fn resources(&self) -> impl Iterator<Item = (&str, &ResourceNode)> {
        self.resources.iter().map(|(id, node)| (id.as_str(), node))
    }

    /// Iterates over all outputs in insertion order.
    pub fn outputs(&self) -> impl Iterator<Item = (&str, &OutputEntry)> {
        self.outputs.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Returns the number of resources in the graph.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Serializes the template to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            EdgestackError::Synth(SynthError::serialization(&self.stack_name, e.to_string()))
        })
    }
}

//! Input and payload types shared by the builder and the finished hierarchy.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::id::NodeId;

/// A single observation attached to a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Identifier of the group this instance belongs to.
    pub node_id: NodeId,
    /// Feature vector.
    pub data: Vec<f64>,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ground-truth class label, itself a dotted hierarchical path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_class: Option<String>,
}

impl Instance {
    pub fn new(node_id: NodeId, data: Vec<f64>) -> Self {
        Self {
            node_id,
            data,
            name: None,
            true_class: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_true_class(mut self, class: impl Into<String>) -> Self {
        self.true_class = Some(class.into());
        self
    }
}

/// A group as handed over by the loader, before any linking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupInput {
    pub id: NodeId,
    #[serde(default)]
    pub instances: Vec<Instance>,
}

impl GroupInput {
    /// Creates an empty group, parsing `id`.
    pub fn new(id: &str) -> Result<Self> {
        Ok(Self {
            id: NodeId::parse(id)?,
            instances: Vec::new(),
        })
    }

    pub fn with_instances(mut self, instances: Vec<Instance>) -> Self {
        self.instances = instances;
        self
    }
}

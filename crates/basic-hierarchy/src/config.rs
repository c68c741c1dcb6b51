//! Options controlling how a hierarchy is repaired.

use serde::{Deserialize, Serialize};

use crate::error::{HierarchyError, Result};
use crate::id::{NodeId, ROOT_ID};

/// Which groups the depth-gap repair may pick as the nearest ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AncestorScope {
    /// The root plus the groups listed before the orphan. Matches inputs
    /// written in depth-first order.
    #[default]
    Preceding,
    /// The root plus every input group.
    All,
}

impl AncestorScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preceding => "preceding",
            Self::All => "all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Identifier of the root group.
    pub root_id: String,
    /// Fill holes in every group's child numbering with empty placeholders.
    pub fix_breadth_gaps: bool,
    pub ancestor_scope: AncestorScope,
    /// Create an empty root when the input does not contain one.
    pub synthesize_missing_root: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            root_id: ROOT_ID.to_string(),
            fix_breadth_gaps: false,
            ancestor_scope: AncestorScope::Preceding,
            synthesize_missing_root: true,
        }
    }
}

impl BuildOptions {
    pub fn with_breadth_gaps(mut self, fix: bool) -> Self {
        self.fix_breadth_gaps = fix;
        self
    }

    pub fn with_ancestor_scope(mut self, scope: AncestorScope) -> Self {
        self.ancestor_scope = scope;
        self
    }

    /// Parses the root id, checking it sits at depth 1.
    pub fn validate(&self) -> Result<NodeId> {
        let root = NodeId::parse(&self.root_id)
            .map_err(|err| HierarchyError::InvalidConfig(format!("root_id: {err}")))?;
        if root.depth() != 1 {
            return Err(HierarchyError::InvalidRoot(self.root_id.clone()));
        }
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = BuildOptions::default();
        assert_eq!(options.root_id, "gen.0");
        assert!(!options.fix_breadth_gaps);
        assert_eq!(options.ancestor_scope, AncestorScope::Preceding);
        assert!(options.synthesize_missing_root);
        assert_eq!(options.validate().unwrap().as_str(), "gen.0");
    }

    #[test]
    fn deserialize_partial_config() {
        let options: BuildOptions =
            serde_json::from_str(r#"{ "fix_breadth_gaps": true, "ancestor_scope": "all" }"#)
                .unwrap();
        assert!(options.fix_breadth_gaps);
        assert_eq!(options.ancestor_scope, AncestorScope::All);
        assert_eq!(options.root_id, "gen.0");

        let json = serde_json::to_string(&options).unwrap();
        let back: BuildOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn validate_rejects_bad_root() {
        let options = BuildOptions {
            root_id: "gen.0.1".to_string(),
            ..BuildOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(HierarchyError::InvalidRoot("gen.0.1".to_string()))
        );

        let options = BuildOptions {
            root_id: "gen.x".to_string(),
            ..BuildOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(HierarchyError::InvalidConfig(_))
        ));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    #[error("Malformed identifier {id:?}: {reason}")]
    MalformedIdentifier { id: String, reason: String },

    #[error("Duplicate group: {0}")]
    DuplicateGroup(String),

    #[error("Root group not found: {0}")]
    MissingRoot(String),

    #[error("Invalid root identifier: {0}")]
    InvalidRoot(String),

    #[error("No ancestor found for group {0}")]
    MissingAncestor(String),

    #[error("Group {child} is linked as a child of {parent} but is not its direct descendant")]
    BrokenChildLink { parent: String, child: String },

    #[error("Instance of {instance} was handed over inside group {group}")]
    MismatchedInstance { group: String, instance: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, HierarchyError>;

impl HierarchyError {
    pub(crate) fn malformed(id: &str, reason: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

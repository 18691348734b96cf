//! # Actions
//!
//! Defines all actions that can be performed on resources.
//! Actions are the verbs of the permission vocabulary.

use serde::{Deserialize, Serialize};

/// Actions that can be performed on resources.
///
/// Actions represent different levels of access and operations:
/// - **Read**: View/access resource data
/// - **Create**: Create new resource instances
/// - **Update**: Modify existing resource data
/// - **Delete**: Remove resource instances
/// - **List**: Query/browse multiple resources
/// - **Export**: Download/export resource data
/// - **Assign**: Assign a resource to a user (rooms, work orders)
/// - **Resolve**: Close out complaints or maintenance requests
/// - **Approve**: Approve pending actions/changes
/// - **Manage**: Full administrative access to the resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read/view resource.
    Read,

    /// Create new resource.
    Create,

    /// Update existing resource.
    Update,

    /// Delete resource.
    Delete,

    /// List/query resources.
    List,

    /// Export resource data.
    Export,

    /// Assign a resource to a user.
    ///
    /// Used for room allocation and maintenance work-order assignment.
    Assign,

    /// Resolve/close a resource.
    ///
    /// Used for complaints and maintenance requests.
    Resolve,

    /// Approve pending actions.
    ///
    /// Cost-bearing approvals are additionally gated by
    /// approval thresholds in the access layer.
    Approve,

    /// Manage resource settings.
    ///
    /// A `resource:manage` grant is treated as a full-access alias:
    /// it matches any requested action on that resource.
    Manage,
}

impl Action {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::List => "list",
            Action::Export => "export",
            Action::Assign => "assign",
            Action::Resolve => "resolve",
            Action::Approve => "approve",
            Action::Manage => "manage",
        }
    }

    /// Parse an action from its string representation.
    ///
    /// Parsing is case-insensitive and accepts common aliases.
    ///
    /// # Example
    ///
    /// ```
    /// use hostelry_rbac::actions::Action;
    ///
    /// assert_eq!(Action::parse("read"), Some(Action::Read));
    /// assert_eq!(Action::parse("view"), Some(Action::Read)); // Alias
    /// assert_eq!(Action::parse("write"), Some(Action::Update)); // Alias
    /// assert_eq!(Action::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "read" | "view" | "get" => Some(Action::Read),
            "create" | "add" | "new" => Some(Action::Create),
            "update" | "edit" | "write" | "modify" | "put" | "patch" => Some(Action::Update),
            "delete" | "remove" | "destroy" => Some(Action::Delete),
            "list" | "query" | "browse" | "search" | "index" => Some(Action::List),
            "export" | "download" => Some(Action::Export),
            "assign" | "allocate" => Some(Action::Assign),
            "resolve" | "close" => Some(Action::Resolve),
            "approve" | "accept" => Some(Action::Approve),
            "manage" | "admin" | "administer" => Some(Action::Manage),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            Action::Read,
            Action::Create,
            Action::Update,
            Action::Delete,
            Action::List,
            Action::Export,
            Action::Assign,
            Action::Resolve,
            Action::Approve,
            Action::Manage,
        ]
    }

    /// Check if this is a destructive action.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Action::Delete)
    }

    /// Check if this is a read-only action.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Action::Read | Action::List | Action::Export)
    }

    /// Check if this is a write action.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Action::Create | Action::Update | Action::Delete | Action::Assign | Action::Resolve
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!(Action::parse("read"), Some(Action::Read));
        assert_eq!(Action::parse("view"), Some(Action::Read));

        assert_eq!(Action::parse("create"), Some(Action::Create));
        assert_eq!(Action::parse("add"), Some(Action::Create));

        assert_eq!(Action::parse("update"), Some(Action::Update));
        assert_eq!(Action::parse("patch"), Some(Action::Update));

        assert_eq!(Action::parse("resolve"), Some(Action::Resolve));
        assert_eq!(Action::parse("close"), Some(Action::Resolve));

        assert_eq!(Action::parse("allocate"), Some(Action::Assign));
        assert_eq!(Action::parse("invalid"), None);
    }

    #[test]
    fn test_action_as_str() {
        assert_eq!(Action::Read.as_str(), "read");
        assert_eq!(Action::Create.as_str(), "create");
        assert_eq!(Action::Assign.as_str(), "assign");
        assert_eq!(Action::Resolve.as_str(), "resolve");
        assert_eq!(Action::Manage.as_str(), "manage");
    }

    #[test]
    fn test_is_destructive() {
        assert!(Action::Delete.is_destructive());
        assert!(!Action::Read.is_destructive());
        assert!(!Action::Resolve.is_destructive());
    }

    #[test]
    fn test_is_read_only() {
        assert!(Action::Read.is_read_only());
        assert!(Action::List.is_read_only());
        assert!(Action::Export.is_read_only());
        assert!(!Action::Assign.is_read_only());
    }

    #[test]
    fn test_is_write() {
        assert!(Action::Create.is_write());
        assert!(Action::Assign.is_write());
        assert!(Action::Resolve.is_write());
        assert!(!Action::Read.is_write());
        assert!(!Action::Export.is_write());
    }

    #[test]
    fn test_all_actions_count() {
        assert_eq!(Action::all().len(), 10);
    }
}

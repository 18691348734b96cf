//! Membership domain models
//!
//! This module provides the membership entity that links users to
//! hostels. A membership defines a user's role within a hostel plus any
//! custom permission grants attached to the user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::UserRole;

/// Hostel membership linking a user to a hostel.
///
/// This represents a user's membership in a hostel, including their
/// role, when they joined, and any custom permissions beyond the role's
/// defaults.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hostelry_tenancy::{HostelMembership, UserRole};
///
/// let hostel_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let membership = HostelMembership::new(hostel_id, user_id, UserRole::Student);
/// assert!(membership.is_active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostelMembership {
    /// Unique membership ID
    pub id: Uuid,

    /// Hostel ID
    pub hostel_id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// Role within the hostel
    pub role: UserRole,

    /// When the user joined
    pub joined_at: DateTime<Utc>,

    /// Who invited this user (if applicable)
    pub invited_by: Option<Uuid>,

    /// Whether the membership is active
    pub is_active: bool,

    /// Custom permission grants beyond the role.
    ///
    /// These are `resource:action` tokens (wildcard forms allowed) that
    /// extend the base role permissions for this user.
    #[serde(default)]
    pub custom_permissions: Vec<String>,

    /// Room number assigned to the user, if a resident
    pub room_number: Option<String>,
}

impl HostelMembership {
    /// Creates a new hostel membership.
    ///
    /// The membership is created with:
    /// - A newly generated UUID v7 ID
    /// - Active status
    /// - Current timestamp for joined_at
    /// - No custom permissions
    ///
    /// # Arguments
    ///
    /// * `hostel_id` - The hostel ID
    /// * `user_id` - The user ID
    /// * `role` - The user's role in the hostel
    pub fn new(hostel_id: Uuid, user_id: Uuid, role: UserRole) -> Self {
        Self {
            id: Uuid::now_v7(),
            hostel_id,
            user_id,
            role,
            joined_at: Utc::now(),
            invited_by: None,
            is_active: true,
            custom_permissions: Vec::new(),
            room_number: None,
        }
    }

    /// Set who invited this user.
    pub fn with_inviter(mut self, inviter_id: Uuid) -> Self {
        self.invited_by = Some(inviter_id);
        self
    }

    /// Set the assigned room number.
    pub fn with_room(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = Some(room_number.into());
        self
    }

    /// Add a custom permission grant to this membership.
    ///
    /// Duplicate tokens are ignored.
    pub fn add_permission(&mut self, permission: impl Into<String>) {
        let perm = permission.into();
        if !self.custom_permissions.contains(&perm) {
            self.custom_permissions.push(perm);
        }
    }

    /// Remove a custom permission grant from this membership.
    pub fn remove_permission(&mut self, permission: &str) {
        self.custom_permissions.retain(|p| p != permission);
    }

    /// Check if this membership carries a specific custom grant token.
    ///
    /// This is a literal token check; wildcard semantics are applied by
    /// the access layer, not here.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.custom_permissions.iter().any(|p| p == permission)
    }

    /// Deactivate the membership.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_creation() {
        let hostel_id = Uuid::now_v7();
        let user_id = Uuid::now_v7();
        let membership = HostelMembership::new(hostel_id, user_id, UserRole::Student);

        assert_eq!(membership.hostel_id, hostel_id);
        assert_eq!(membership.user_id, user_id);
        assert_eq!(membership.role, UserRole::Student);
        assert!(membership.is_active);
        assert!(membership.custom_permissions.is_empty());
    }

    #[test]
    fn test_membership_with_inviter_and_room() {
        let inviter_id = Uuid::now_v7();
        let membership = HostelMembership::new(Uuid::now_v7(), Uuid::now_v7(), UserRole::Student)
            .with_inviter(inviter_id)
            .with_room("B-204");

        assert_eq!(membership.invited_by, Some(inviter_id));
        assert_eq!(membership.room_number.as_deref(), Some("B-204"));
    }

    #[test]
    fn test_custom_permissions() {
        let mut membership =
            HostelMembership::new(Uuid::now_v7(), Uuid::now_v7(), UserRole::Student);

        membership.add_permission("room:update");
        assert!(membership.has_permission("room:update"));

        membership.add_permission("room:update"); // Duplicate
        assert_eq!(membership.custom_permissions.len(), 1);

        membership.remove_permission("room:update");
        assert!(!membership.has_permission("room:update"));
    }

    #[test]
    fn test_membership_deactivate() {
        let mut membership =
            HostelMembership::new(Uuid::now_v7(), Uuid::now_v7(), UserRole::Supervisor);
        membership.deactivate();
        assert!(!membership.is_active);
    }
}

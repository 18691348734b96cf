//! Decision-time actor context
//!
//! This module provides the `Actor` type: the snapshot of a user's
//! capabilities that permission checks consume. It is assembled once per
//! request from already-loaded records (typically a membership) and
//! carries everything the access layer needs, so checks stay pure and
//! do no I/O.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::membership::HostelMembership;
use crate::roles::UserRole;
use crate::scope::HostelScope;

/// A user's capability context at decision time.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hostelry_tenancy::{Actor, HostelScope, UserRole};
///
/// let hostel_id = Uuid::now_v7();
/// let actor = Actor::new(Uuid::now_v7(), UserRole::Supervisor)
///     .with_scope(HostelScope::single(hostel_id));
///
/// assert!(actor.is_active);
/// assert!(actor.scope.includes(hostel_id));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// User ID
    pub user_id: Uuid,

    /// Platform role
    pub role: UserRole,

    /// Whether the account is active; inactive actors fail every check
    pub is_active: bool,

    /// Hostels this actor's role applies to
    pub scope: HostelScope,

    /// Custom permission grants beyond the role
    #[serde(default)]
    pub custom_permissions: Vec<String>,
}

impl Actor {
    /// Create an active actor with no hostel scope and no custom grants.
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self {
            user_id,
            role,
            is_active: true,
            scope: HostelScope::Unassigned,
            custom_permissions: Vec::new(),
        }
    }

    /// Build an actor from a hostel membership.
    ///
    /// The membership's hostel becomes a single-hostel scope;
    /// multi-hostel admins should widen the scope with
    /// [`with_scope`](Self::with_scope) after loading their mappings.
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use hostelry_tenancy::{Actor, HostelMembership, UserRole};
    ///
    /// let membership =
    ///     HostelMembership::new(Uuid::now_v7(), Uuid::now_v7(), UserRole::Student);
    /// let actor = Actor::from_membership(&membership);
    /// assert_eq!(actor.role, UserRole::Student);
    /// assert!(actor.scope.includes(membership.hostel_id));
    /// ```
    pub fn from_membership(membership: &HostelMembership) -> Self {
        Self {
            user_id: membership.user_id,
            role: membership.role,
            is_active: membership.is_active,
            scope: HostelScope::single(membership.hostel_id),
            custom_permissions: membership.custom_permissions.clone(),
        }
    }

    /// Replace the hostel scope.
    pub fn with_scope(mut self, scope: HostelScope) -> Self {
        self.scope = scope;
        self
    }

    /// Mark the actor inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Add a custom permission grant.
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        let perm = permission.into();
        if !self.custom_permissions.contains(&perm) {
            self.custom_permissions.push(perm);
        }
        self
    }
}

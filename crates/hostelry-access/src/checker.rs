//! Permission checker
//!
//! Decides whether an actor may perform a permission, combining the
//! role matrix with the actor's custom grants and applying wildcard
//! precedence.

use tracing::warn;

use hostelry_rbac::{Grant, Permission, PermissionSet};
use hostelry_tenancy::Actor;

use crate::matrix::role_grants;

/// Evaluates role-level permissions for actors.
///
/// Stateless; checks are pure functions over the actor snapshot and the
/// static role matrix.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hostelry_access::PermissionChecker;
/// use hostelry_rbac::{Permission, ResourceType, Action};
/// use hostelry_tenancy::{Actor, UserRole};
///
/// let checker = PermissionChecker::new();
/// let student = Actor::new(Uuid::now_v7(), UserRole::Student);
///
/// assert!(checker.check(&student, &Permission::new(ResourceType::Complaint, Action::Create)));
/// assert!(!checker.check(&student, &Permission::new(ResourceType::Hostel, Action::Update)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionChecker;

impl PermissionChecker {
    /// Create a new checker.
    pub fn new() -> Self {
        Self
    }

    /// Check whether the actor may perform `permission`.
    ///
    /// The decision sequence:
    /// 1. inactive actors are denied outright;
    /// 2. super admins bypass the matrix entirely;
    /// 3. otherwise the effective set (role matrix plus custom grants)
    ///    is matched with wildcard precedence.
    pub fn check(&self, actor: &Actor, permission: &Permission) -> bool {
        if !actor.is_active {
            return false;
        }
        if actor.role.is_super_admin() {
            return true;
        }
        self.effective_permissions(actor).has(permission)
    }

    /// The actor's effective grant set: role defaults plus custom grants.
    ///
    /// Custom grant tokens that fail to parse are skipped with a
    /// warning; a bad token never widens or blocks access. Inactive
    /// actors have an empty effective set.
    pub fn effective_permissions(&self, actor: &Actor) -> PermissionSet {
        if !actor.is_active {
            return PermissionSet::new();
        }

        let mut grants = role_grants(actor.role);
        for token in &actor.custom_permissions {
            match Grant::parse(token) {
                Some(grant) => grants.insert(grant),
                None => {
                    warn!(user_id = %actor.user_id, token = %token, "skipping unparsable custom grant");
                }
            }
        }
        grants
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostelry_rbac::{Action, ResourceType};
    use hostelry_tenancy::UserRole;
    use uuid::Uuid;

    fn perm(resource: ResourceType, action: Action) -> Permission {
        Permission::new(resource, action)
    }

    #[test]
    fn test_inactive_actor_is_denied() {
        let checker = PermissionChecker::new();
        // Even a super admin is denied when inactive
        let actor = Actor::new(Uuid::now_v7(), UserRole::SuperAdmin).inactive();

        assert!(!checker.check(&actor, &perm(ResourceType::Booking, Action::Read)));
        assert!(checker.effective_permissions(&actor).is_empty());
    }

    #[test]
    fn test_super_admin_bypass() {
        let checker = PermissionChecker::new();
        let actor = Actor::new(Uuid::now_v7(), UserRole::SuperAdmin);

        // True even for permissions no matrix row grants explicitly
        assert!(checker.check(&actor, &perm(ResourceType::Settings, Action::Delete)));
    }

    #[test]
    fn test_custom_grant_extends_role() {
        let checker = PermissionChecker::new();
        let student =
            Actor::new(Uuid::now_v7(), UserRole::Student).with_permission("room:update");

        // Base student matrix lacks room:update
        assert!(!checker.check(
            &Actor::new(Uuid::now_v7(), UserRole::Student),
            &perm(ResourceType::Room, Action::Update)
        ));
        assert!(checker.check(&student, &perm(ResourceType::Room, Action::Update)));
    }

    #[test]
    fn test_global_custom_grant_wins_over_everything() {
        let checker = PermissionChecker::new();
        let actor = Actor::new(Uuid::now_v7(), UserRole::Visitor).with_permission("*:*");

        for resource in ResourceType::all() {
            for action in Action::all() {
                assert!(checker.check(&actor, &perm(resource, action)));
            }
        }
    }

    #[test]
    fn test_write_grant_does_not_widen_to_read() {
        let checker = PermissionChecker::new();
        let actor =
            Actor::new(Uuid::now_v7(), UserRole::Visitor).with_permission("payment:delete");

        // A grant covers exactly the action it names
        assert!(checker.check(&actor, &perm(ResourceType::Payment, Action::Delete)));
        assert!(!checker.check(&actor, &perm(ResourceType::Payment, Action::Read)));
        assert!(!checker.check(&actor, &perm(ResourceType::Payment, Action::List)));
    }

    #[test]
    fn test_unparsable_custom_grant_is_skipped() {
        let checker = PermissionChecker::new();
        let actor = Actor::new(Uuid::now_v7(), UserRole::Student)
            .with_permission("not-a-grant")
            .with_permission("room:update");

        assert!(checker.check(&actor, &perm(ResourceType::Room, Action::Update)));
        // The bad token neither grants nor blocks anything
        let effective = checker.effective_permissions(&actor);
        assert_eq!(
            effective.len(),
            role_grants(UserRole::Student).len() + 1
        );
    }

    #[test]
    fn test_effective_set_is_union() {
        let checker = PermissionChecker::new();
        let actor =
            Actor::new(Uuid::now_v7(), UserRole::Visitor).with_permission("report:read");

        let effective = checker.effective_permissions(&actor);
        assert!(effective.has(&perm(ResourceType::Hostel, Action::Read)));
        assert!(effective.has(&perm(ResourceType::Report, Action::Read)));
    }
}

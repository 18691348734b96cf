//! Access control facade
//!
//! Single entry point for request handlers: boolean `check_*` variants
//! for branching and `require_*` guards that raise a typed
//! [`AccessError`] on denial. Constructed once at service startup and
//! passed into handlers; nothing here is a global.

use tracing::debug;
use uuid::Uuid;

use hostelry_rbac::Permission;
use hostelry_tenancy::{Actor, ApprovalSettings, UserRole};

use crate::approval::ApprovalAuthority;
use crate::checker::PermissionChecker;
use crate::error::{AccessError, AccessResult};
use crate::resource::ResourceGuard;

/// Composes the permission checker, resource guard, and approval
/// authority into one decision surface.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hostelry_access::AccessControl;
/// use hostelry_rbac::{Permission, ResourceType, Action};
/// use hostelry_tenancy::{Actor, ApprovalSettings, UserRole};
///
/// let access = AccessControl::new(ApprovalSettings::default());
/// let student = Actor::new(Uuid::now_v7(), UserRole::Student);
///
/// let perm = Permission::new(ResourceType::Complaint, Action::Create);
/// assert!(access.check_access(&student, &perm));
/// access.require_access(&student, perm).unwrap();
///
/// let forbidden = Permission::new(ResourceType::Hostel, Action::Update);
/// assert!(access.require_access(&student, forbidden).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct AccessControl {
    checker: PermissionChecker,
    approvals: ApprovalAuthority,
}

impl AccessControl {
    /// Build the decision surface over the given approval settings.
    pub fn new(settings: ApprovalSettings) -> Self {
        Self {
            checker: PermissionChecker::new(),
            approvals: ApprovalAuthority::new(settings),
        }
    }

    /// Check whether the actor holds a permission.
    pub fn check_access(&self, actor: &Actor, permission: &Permission) -> bool {
        self.checker.check(actor, permission)
    }

    /// Check whether the actor's role is one of the allowed roles.
    pub fn has_role(&self, actor: &Actor, roles: &[UserRole]) -> bool {
        roles.contains(&actor.role)
    }

    /// Require a permission, raising on denial.
    ///
    /// # Errors
    ///
    /// [`AccessError::PermissionDenied`] carrying the denied token.
    pub fn require_access(&self, actor: &Actor, permission: Permission) -> AccessResult<()> {
        if self.check_access(actor, &permission) {
            Ok(())
        } else {
            debug!(user_id = %actor.user_id, role = %actor.role.as_str(), permission = %permission, "access denied");
            Err(AccessError::PermissionDenied {
                permission: permission.to_string(),
            })
        }
    }

    /// Require the actor's role to be one of the allowed roles.
    ///
    /// Inactive actors are rejected regardless of role.
    ///
    /// # Errors
    ///
    /// [`AccessError::InactiveUser`] for inactive accounts,
    /// [`AccessError::RoleNotAllowed`] otherwise.
    pub fn require_role(&self, actor: &Actor, roles: &[UserRole]) -> AccessResult<()> {
        if !actor.is_active {
            return Err(AccessError::InactiveUser);
        }
        if self.has_role(actor, roles) {
            Ok(())
        } else {
            debug!(user_id = %actor.user_id, role = %actor.role.as_str(), "role not allowed");
            Err(AccessError::RoleNotAllowed { role: actor.role })
        }
    }

    /// Require that the actor's role may manage the target role.
    ///
    /// # Errors
    ///
    /// [`AccessError::InsufficientPermissions`] when the actor does
    /// not sit strictly above the target in the hierarchy.
    pub fn require_hierarchy(&self, actor: &Actor, target: UserRole) -> AccessResult<()> {
        if actor.role.can_manage(target) {
            Ok(())
        } else {
            Err(AccessError::InsufficientPermissions {
                actor: actor.role,
                target,
            })
        }
    }

    /// Require hostel-level access to a specific hostel.
    ///
    /// Also enforces the supervisor scope invariant, so a supervisor
    /// outside their hostel gets the scope-specific denial.
    ///
    /// # Errors
    ///
    /// [`AccessError::HostelAccessDenied`] for out-of-scope
    /// supervisors, [`AccessError::UnauthorizedAccess`] otherwise.
    pub fn require_hostel(&self, actor: &Actor, hostel_id: Uuid) -> AccessResult<()> {
        ResourceGuard::validate_supervisor_scope(actor, hostel_id)?;
        if ResourceGuard::can_access_hostel(actor, hostel_id) {
            Ok(())
        } else {
            Err(AccessError::UnauthorizedAccess)
        }
    }

    /// Require access to a specific booking (owner or hostel access).
    ///
    /// # Errors
    ///
    /// [`AccessError::UnauthorizedAccess`].
    pub fn require_booking(&self, actor: &Actor, owner_id: Uuid, hostel_id: Uuid) -> AccessResult<()> {
        if ResourceGuard::can_access_booking(actor, owner_id, hostel_id) {
            Ok(())
        } else {
            Err(AccessError::UnauthorizedAccess)
        }
    }

    /// Require access to a specific complaint (owner or hostel access).
    ///
    /// # Errors
    ///
    /// [`AccessError::UnauthorizedAccess`].
    pub fn require_complaint(
        &self,
        actor: &Actor,
        owner_id: Uuid,
        hostel_id: Uuid,
    ) -> AccessResult<()> {
        if ResourceGuard::can_access_complaint(actor, owner_id, hostel_id) {
            Ok(())
        } else {
            Err(AccessError::UnauthorizedAccess)
        }
    }

    /// The actor's effective permissions as sorted tokens, for UI and
    /// introspection endpoints.
    pub fn effective_permissions(&self, actor: &Actor) -> Vec<String> {
        self.checker.effective_permissions(actor).all()
    }

    /// The cost-approval authority.
    pub fn approvals(&self) -> &ApprovalAuthority {
        &self.approvals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostelry_rbac::{Action, ResourceType};
    use hostelry_tenancy::HostelScope;

    fn access() -> AccessControl {
        AccessControl::new(ApprovalSettings::default())
    }

    fn perm(resource: ResourceType, action: Action) -> Permission {
        Permission::new(resource, action)
    }

    #[test]
    fn test_require_access_carries_denied_token() {
        let access = access();
        let student = Actor::new(Uuid::now_v7(), UserRole::Student);

        let err = access
            .require_access(&student, perm(ResourceType::Hostel, Action::Update))
            .unwrap_err();
        assert!(matches!(
            err,
            AccessError::PermissionDenied { ref permission } if permission == "hostel:update"
        ));
    }

    #[test]
    fn test_require_role() {
        let access = access();
        let supervisor = Actor::new(Uuid::now_v7(), UserRole::Supervisor);

        assert!(access
            .require_role(&supervisor, &[UserRole::Supervisor, UserRole::HostelAdmin])
            .is_ok());
        // Role-set denials land in the permission-denied family
        let denied = access
            .require_role(&supervisor, &[UserRole::HostelAdmin])
            .unwrap_err();
        assert!(matches!(
            denied,
            AccessError::RoleNotAllowed {
                role: UserRole::Supervisor,
            }
        ));
        assert_eq!(denied.error_code(), "PERMISSION_DENIED");

        let inactive = Actor::new(Uuid::now_v7(), UserRole::Supervisor).inactive();
        assert!(matches!(
            access.require_role(&inactive, &[UserRole::Supervisor]),
            Err(AccessError::InactiveUser)
        ));
    }

    #[test]
    fn test_require_hierarchy() {
        let access = access();
        let admin = Actor::new(Uuid::now_v7(), UserRole::HostelAdmin);

        assert!(access.require_hierarchy(&admin, UserRole::Supervisor).is_ok());
        assert!(matches!(
            access.require_hierarchy(&admin, UserRole::SuperAdmin),
            Err(AccessError::InsufficientPermissions {
                actor: UserRole::HostelAdmin,
                target: UserRole::SuperAdmin,
            })
        ));
        // Peers cannot manage each other
        assert!(access.require_hierarchy(&admin, UserRole::HostelAdmin).is_err());
    }

    #[test]
    fn test_require_hostel_supervisor_scope() {
        let access = access();
        let assigned = Uuid::now_v7();
        let other = Uuid::now_v7();
        let supervisor = Actor::new(Uuid::now_v7(), UserRole::Supervisor)
            .with_scope(HostelScope::single(assigned));

        assert!(access.require_hostel(&supervisor, assigned).is_ok());
        // Scope violation surfaces as the scope-specific error
        assert!(matches!(
            access.require_hostel(&supervisor, other),
            Err(AccessError::HostelAccessDenied { hostel_id }) if hostel_id == other
        ));
    }

    #[test]
    fn test_require_booking_owner_or_hostel() {
        let access = access();
        let hostel = Uuid::now_v7();
        let owner = Uuid::now_v7();

        let stranger = Actor::new(Uuid::now_v7(), UserRole::Student);
        assert!(access.require_booking(&stranger, owner, hostel).is_err());

        let admin = Actor::new(Uuid::now_v7(), UserRole::HostelAdmin)
            .with_scope(HostelScope::single(hostel));
        assert!(access.require_booking(&admin, owner, hostel).is_ok());
    }

    #[test]
    fn test_effective_permissions_sorted_union() {
        let access = access();
        let visitor =
            Actor::new(Uuid::now_v7(), UserRole::Visitor).with_permission("report:read");

        let tokens = access.effective_permissions(&visitor);
        assert!(tokens.contains(&"hostel:read".to_string()));
        assert!(tokens.contains(&"report:read".to_string()));
        let mut sorted = tokens.clone();
        sorted.sort();
        assert_eq!(tokens, sorted);
    }
}

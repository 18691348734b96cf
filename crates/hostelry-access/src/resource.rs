//! Instance-level access checks
//!
//! Role-level permissions answer "may this role touch bookings at all";
//! the guard here answers "may this actor touch THIS booking". Checks
//! combine record ownership with hostel scope.

use uuid::Uuid;

use hostelry_tenancy::{Actor, UserRole};

use crate::error::{AccessError, AccessResult};

/// Instance-scoped authorization checks.
///
/// Stateless; all inputs arrive as already-loaded identifiers on the
/// actor and the target record.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hostelry_access::ResourceGuard;
/// use hostelry_tenancy::{Actor, HostelScope, UserRole};
///
/// let hostel = Uuid::now_v7();
/// let student = Actor::new(Uuid::now_v7(), UserRole::Student)
///     .with_scope(HostelScope::single(hostel));
///
/// assert!(ResourceGuard::can_access_hostel(&student, hostel));
/// assert!(!ResourceGuard::can_access_hostel(&student, Uuid::now_v7()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceGuard;

impl ResourceGuard {
    /// Check whether the actor has rights over a specific hostel.
    ///
    /// Super admins always pass. Hostel admins, supervisors, and
    /// students pass when the hostel falls within their scope.
    /// Visitors have no hostel-level rights (fail closed).
    pub fn can_access_hostel(actor: &Actor, hostel_id: Uuid) -> bool {
        match actor.role {
            UserRole::SuperAdmin => true,
            UserRole::HostelAdmin | UserRole::Supervisor | UserRole::Student => {
                actor.scope.includes(hostel_id)
            }
            UserRole::Visitor => false,
        }
    }

    /// Check whether the actor may act on another user's record.
    ///
    /// Self-access always passes, as do super admins. Otherwise the
    /// actor needs hostel-level access to the target user's hostel;
    /// when that hostel is unknown, the check fails closed.
    pub fn can_access_user(
        actor: &Actor,
        target_user_id: Uuid,
        target_hostel_id: Option<Uuid>,
    ) -> bool {
        if actor.user_id == target_user_id {
            return true;
        }
        if actor.role.is_super_admin() {
            return true;
        }
        match target_hostel_id {
            Some(hostel_id) => Self::can_access_hostel(actor, hostel_id),
            None => false,
        }
    }

    /// Check whether the actor may act on a specific booking.
    ///
    /// The booking's owner passes; otherwise hostel-level access to the
    /// owning hostel is required.
    pub fn can_access_booking(actor: &Actor, owner_id: Uuid, hostel_id: Uuid) -> bool {
        actor.user_id == owner_id || Self::can_access_hostel(actor, hostel_id)
    }

    /// Check whether the actor may act on a specific complaint.
    ///
    /// Same rule as bookings: owner, or hostel-level access.
    pub fn can_access_complaint(actor: &Actor, owner_id: Uuid, hostel_id: Uuid) -> bool {
        actor.user_id == owner_id || Self::can_access_hostel(actor, hostel_id)
    }

    /// Enforce that a supervisor only acts within their assigned hostel.
    ///
    /// A no-op for every other role: admins pass regardless of hostel
    /// mismatch, and residents/visitors are constrained by the other
    /// checks instead. For supervisors this is a hard invariant, not a
    /// soft boolean.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::HostelAccessDenied`] when a supervisor's
    /// scope does not include the target hostel.
    pub fn validate_supervisor_scope(actor: &Actor, hostel_id: Uuid) -> AccessResult<()> {
        if actor.role != UserRole::Supervisor {
            return Ok(());
        }
        if actor.scope.includes(hostel_id) {
            Ok(())
        } else {
            Err(AccessError::HostelAccessDenied { hostel_id })
        }
    }
}

//! Role permission matrix
//!
//! The static source of truth mapping each platform role to its default
//! grant set. The matrix is defined in source and never mutated at
//! runtime; custom per-user grants are layered on top by the checker.

use hostelry_rbac::Action::{self, *};
use hostelry_rbac::ResourceType::{self, *};
use hostelry_rbac::{Grant, PermissionSet};
use hostelry_tenancy::UserRole;

/// Get the default grant set for a role.
///
/// Pure function of the role: repeated calls return identical sets.
///
/// # Examples
///
/// ```
/// use hostelry_access::matrix::role_grants;
/// use hostelry_rbac::{Permission, ResourceType, Action};
/// use hostelry_tenancy::UserRole;
///
/// let student = role_grants(UserRole::Student);
/// assert!(student.has(&Permission::new(ResourceType::Complaint, Action::Create)));
/// assert!(!student.has(&Permission::new(ResourceType::Hostel, Action::Update)));
/// ```
pub fn role_grants(role: UserRole) -> PermissionSet {
    match role {
        UserRole::SuperAdmin => [Grant::Global].into_iter().collect(),

        UserRole::HostelAdmin => manage(&[
            Hostel,
            Room,
            Booking,
            Payment,
            Complaint,
            Maintenance,
            Attendance,
            MessMenu,
            Notification,
            User,
            Report,
        ])
        .chain(exact(&[
            (Review, Read),
            (Review, List),
            (Subscription, Read),
            (Subscription, List),
            (Settings, Read),
            (Settings, Update),
        ]))
        .collect(),

        UserRole::Supervisor => exact(&[
            (Complaint, Read),
            (Complaint, List),
            (Complaint, Update),
            (Complaint, Resolve),
            (Complaint, Approve),
            (Maintenance, Read),
            (Maintenance, List),
            (Maintenance, Update),
            (Maintenance, Approve),
            (Maintenance, Assign),
            (Attendance, Create),
            (Attendance, Read),
            (Attendance, List),
            (Attendance, Update),
            (Room, Read),
            (Room, List),
            (Booking, Read),
            (Booking, List),
            (MessMenu, Read),
            (MessMenu, Update),
            (Notification, Create),
            (Notification, Read),
            (Notification, List),
            (User, Read),
            (User, List),
            (Report, Read),
        ])
        .collect(),

        UserRole::Student => exact(&[
            (Booking, Create),
            (Booking, Read),
            (Booking, List),
            (Payment, Create),
            (Payment, Read),
            (Payment, List),
            (Complaint, Create),
            (Complaint, Read),
            (Complaint, List),
            (Maintenance, Create),
            (Maintenance, Read),
            (Attendance, Read),
            (MessMenu, Read),
            (MessMenu, List),
            (Notification, Read),
            (Notification, List),
            (Review, Create),
            (Review, Read),
            (Review, List),
            (Review, Update),
            (Subscription, Read),
            (User, Read),
        ])
        .collect(),

        UserRole::Visitor => exact(&[
            (Hostel, Read),
            (Hostel, List),
            (Room, Read),
            (Room, List),
            (Review, Read),
            (Review, List),
            (Booking, Create),
        ])
        .collect(),
    }
}

fn manage(resources: &[ResourceType]) -> impl Iterator<Item = Grant> + '_ {
    resources.iter().map(|r| Grant::exact(*r, Manage))
}

fn exact(pairs: &[(ResourceType, Action)]) -> impl Iterator<Item = Grant> + '_ {
    pairs.iter().map(|(r, a)| Grant::exact(*r, *a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostelry_rbac::Permission;

    #[test]
    fn test_matrix_is_deterministic() {
        for role in UserRole::hierarchy() {
            assert_eq!(role_grants(role), role_grants(role));
            assert_eq!(role_grants(role).all(), role_grants(role).all());
        }
    }

    #[test]
    fn test_super_admin_has_global_wildcard() {
        let grants = role_grants(UserRole::SuperAdmin);
        for resource in ResourceType::all() {
            for action in Action::all() {
                assert!(grants.has(&Permission::new(resource, action)));
            }
        }
    }

    #[test]
    fn test_student_grants() {
        let grants = role_grants(UserRole::Student);
        assert!(grants.has(&Permission::new(Complaint, Create)));
        assert!(grants.has(&Permission::new(Booking, Create)));
        assert!(grants.has(&Permission::new(Review, Update)));
        assert!(!grants.has(&Permission::new(Hostel, Update)));
        assert!(!grants.has(&Permission::new(Complaint, Resolve)));
    }

    #[test]
    fn test_supervisor_grants() {
        let grants = role_grants(UserRole::Supervisor);
        assert!(grants.has(&Permission::new(Complaint, Resolve)));
        assert!(grants.has(&Permission::new(Maintenance, Assign)));
        assert!(grants.has(&Permission::new(Attendance, Create)));
        assert!(!grants.has(&Permission::new(Hostel, Update)));
        assert!(!grants.has(&Permission::new(Payment, Create)));
    }

    #[test]
    fn test_hostel_admin_manage_covers_all_actions() {
        let grants = role_grants(UserRole::HostelAdmin);
        // manage alias grants every action on managed resources
        assert!(grants.has(&Permission::new(Booking, Delete)));
        assert!(grants.has(&Permission::new(Complaint, Approve)));
        assert!(grants.has(&Permission::new(Hostel, Update)));
        // but not unmanaged ones
        assert!(!grants.has(&Permission::new(Review, Delete)));
        assert!(!grants.has(&Permission::new(Settings, Delete)));
    }

    #[test]
    fn test_visitor_grants_are_minimal() {
        let grants = role_grants(UserRole::Visitor);
        assert!(grants.has(&Permission::new(Hostel, Read)));
        assert!(grants.has(&Permission::new(Booking, Create)));
        assert!(!grants.has(&Permission::new(Complaint, Create)));
        assert!(!grants.has(&Permission::new(Payment, Read)));
    }
}

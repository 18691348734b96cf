//! End-to-end access control scenarios.
//!
//! These exercise the full flow a request handler goes through:
//! membership record → actor snapshot → facade decision.

use uuid::Uuid;

use hostelry_access::{AccessControl, AccessError, ApprovalContext};
use hostelry_rbac::{Action, Permission, ResourceType};
use hostelry_tenancy::{
    Actor, ApprovalSettings, Hostel, HostelMembership, HostelScope, UserRole,
};

fn access() -> AccessControl {
    AccessControl::new(ApprovalSettings::default())
}

fn perm(resource: ResourceType, action: Action) -> Permission {
    Permission::new(resource, action)
}

#[test]
fn student_can_file_complaints_but_not_touch_hostels() {
    let access = access();
    let hostel = Hostel::new("Sunrise Residency", "sunrise-residency", Uuid::now_v7());
    let membership = HostelMembership::new(hostel.id, Uuid::now_v7(), UserRole::Student);
    let student = Actor::from_membership(&membership);

    assert!(access.check_access(&student, &perm(ResourceType::Complaint, Action::Create)));
    assert!(!access.check_access(&student, &perm(ResourceType::Hostel, Action::Update)));

    let err = access
        .require_access(&student, perm(ResourceType::Hostel, Action::Update))
        .unwrap_err();
    assert_eq!(err.error_code(), "PERMISSION_DENIED");
    assert_eq!(err.status_code(), 403);
}

#[test]
fn hierarchy_rules_between_admin_roles() {
    let access = access();
    let hostel_admin = Actor::new(Uuid::now_v7(), UserRole::HostelAdmin);
    let super_admin = Actor::new(Uuid::now_v7(), UserRole::SuperAdmin);

    assert!(!UserRole::HostelAdmin.can_manage(UserRole::SuperAdmin));
    assert!(UserRole::SuperAdmin.can_manage(UserRole::Student));

    assert!(access
        .require_hierarchy(&hostel_admin, UserRole::SuperAdmin)
        .is_err());
    assert!(access.require_hierarchy(&super_admin, UserRole::Student).is_ok());
}

#[test]
fn custom_grant_extends_a_student() {
    let access = access();
    let mut membership = HostelMembership::new(Uuid::now_v7(), Uuid::now_v7(), UserRole::Student);
    membership.add_permission("room:update");
    let student = Actor::from_membership(&membership);

    // Base student permissions lack room:update; the custom grant adds it
    assert!(access.check_access(&student, &perm(ResourceType::Room, Action::Update)));
    assert!(access
        .effective_permissions(&student)
        .contains(&"room:update".to_string()));
}

#[test]
fn supervisor_approval_threshold_boundary() {
    let access = AccessControl::new(ApprovalSettings {
        supervisor_complaint_threshold: 5000.0,
        ..ApprovalSettings::default()
    });
    let supervisor = Actor::new(Uuid::now_v7(), UserRole::Supervisor);

    assert!(access.approvals().can_approve_complaint_cost(&supervisor, 5000.0));
    assert!(!access.approvals().can_approve_complaint_cost(&supervisor, 5000.01));
    assert!(access
        .approvals()
        .requires_escalation(&supervisor, 5000.01, ApprovalContext::Complaint));
}

#[test]
fn supervisor_cannot_act_outside_assigned_hostel() {
    let access = access();
    let hostel_a = Hostel::new("Hostel A", "hostel-a", Uuid::now_v7());
    let hostel_b = Hostel::new("Hostel B", "hostel-b", Uuid::now_v7());

    let membership = HostelMembership::new(hostel_a.id, Uuid::now_v7(), UserRole::Supervisor);
    let supervisor = Actor::from_membership(&membership);

    assert!(access.require_hostel(&supervisor, hostel_a.id).is_ok());
    let err = access.require_hostel(&supervisor, hostel_b.id).unwrap_err();
    assert!(matches!(
        err,
        AccessError::HostelAccessDenied { hostel_id } if hostel_id == hostel_b.id
    ));
}

#[test]
fn deactivated_membership_loses_all_access() {
    let access = access();
    let mut membership =
        HostelMembership::new(Uuid::now_v7(), Uuid::now_v7(), UserRole::HostelAdmin);
    membership.deactivate();
    let actor = Actor::from_membership(&membership);

    assert!(!access.check_access(&actor, &perm(ResourceType::Booking, Action::Read)));
    assert!(access.effective_permissions(&actor).is_empty());
    assert!(matches!(
        access.require_role(&actor, &[UserRole::HostelAdmin]),
        Err(AccessError::InactiveUser)
    ));
}

#[test]
fn super_admin_bypasses_matrix_and_scope() {
    let access = access();
    let super_admin = Actor::new(Uuid::now_v7(), UserRole::SuperAdmin);

    // Granted by bypass even though no row lists it
    assert!(access.check_access(&super_admin, &perm(ResourceType::Settings, Action::Delete)));
    // Instance access everywhere without any scope
    assert!(access.require_hostel(&super_admin, Uuid::now_v7()).is_ok());
    assert!(access
        .require_booking(&super_admin, Uuid::now_v7(), Uuid::now_v7())
        .is_ok());
}

#[test]
fn multi_hostel_admin_record_access() {
    let access = access();
    let hostel_a = Uuid::now_v7();
    let hostel_b = Uuid::now_v7();
    let admin = Actor::new(Uuid::now_v7(), UserRole::HostelAdmin)
        .with_scope(HostelScope::many([hostel_a, hostel_b]));

    let resident = Uuid::now_v7();
    assert!(access.require_complaint(&admin, resident, hostel_a).is_ok());
    assert!(access.require_complaint(&admin, resident, hostel_b).is_ok());
    assert!(matches!(
        access.require_complaint(&admin, resident, Uuid::now_v7()),
        Err(AccessError::UnauthorizedAccess)
    ));
}

#[test]
fn booking_owner_keeps_access_without_scope() {
    let access = access();
    let owner = Actor::new(Uuid::now_v7(), UserRole::Student);
    let some_hostel = Uuid::now_v7();

    assert!(access
        .require_booking(&owner, owner.user_id, some_hostel)
        .is_ok());
}

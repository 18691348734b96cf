//! # Hostelry Access Control
//!
//! The access control decision layer for the Hostelry platform. This
//! crate combines the permission vocabulary from `hostelry-rbac` with
//! the actor context from `hostelry-tenancy` into allow/deny decisions
//! for request handlers.
//!
//! ## Overview
//!
//! The hostelry-access crate handles:
//! - **Matrix**: Default grant sets per platform role
//! - **Checker**: Role-level permission evaluation with wildcards
//! - **Guard**: Instance-level checks (this hostel, this booking)
//! - **Approvals**: Cost-threshold gates for supervisors
//! - **Facade**: `AccessControl`, the single entry point for handlers
//! - **Errors**: Typed denials for the HTTP layer to map to responses
//!
//! ## Decision flow
//!
//! ```text
//! request ─→ Actor (role, active, scope, custom grants)
//!       ├─ AccessControl::check_access ── matrix ∪ custom grants
//!       ├─ AccessControl::require_hostel ─ instance scope
//!       └─ ApprovalAuthority ──────────── cost thresholds
//! ```
//!
//! Every check is a synchronous pure function over the actor snapshot:
//! no I/O, no shared mutable state, same inputs same answer.
//!
//! ## Usage
//!
//! ```rust
//! use uuid::Uuid;
//! use hostelry_access::AccessControl;
//! use hostelry_rbac::{Permission, ResourceType, Action};
//! use hostelry_tenancy::{Actor, ApprovalSettings, HostelScope, UserRole};
//!
//! // Composition root: build once, hand to request handlers.
//! let access = AccessControl::new(ApprovalSettings::default());
//!
//! let hostel_id = Uuid::now_v7();
//! let supervisor = Actor::new(Uuid::now_v7(), UserRole::Supervisor)
//!     .with_scope(HostelScope::single(hostel_id));
//!
//! access
//!     .require_access(&supervisor, Permission::new(ResourceType::Complaint, Action::Resolve))
//!     .unwrap();
//! access.require_hostel(&supervisor, hostel_id).unwrap();
//! assert!(access.approvals().can_approve_complaint_cost(&supervisor, 1200.0));
//! ```

pub mod approval;
pub mod checker;
pub mod control;
pub mod error;
pub mod matrix;
pub mod resource;

// Re-export main types for convenience
pub use approval::{ApprovalAuthority, ApprovalContext};
pub use checker::PermissionChecker;
pub use control::AccessControl;
pub use error::{AccessError, AccessResult};
pub use matrix::role_grants;
pub use resource::ResourceGuard;

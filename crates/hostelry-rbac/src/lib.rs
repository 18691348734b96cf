//! # Hostelry RBAC (Role-Based Access Control)
//!
//! This crate provides the permission vocabulary for the Hostelry
//! hostel-management platform, shared by every API service.
//!
//! ## Overview
//!
//! The hostelry-rbac crate handles:
//! - **Resources**: All permissionable resource types in the hostel domain
//! - **Actions**: Operations that can be performed on resources
//! - **Permissions**: Resource + Action combinations
//! - **Grants**: Set entries, including the wildcard forms
//! - **Permission Sets**: Collections of grants for roles and users
//!
//! ## Architecture
//!
//! ```text
//! Permission = Resource + Action
//! Grant      = Permission | resource:* | *:*
//!
//! Examples:
//!   "booking:create"   - Create bookings
//!   "complaint:manage" - Full management of complaints
//!   "room:*"           - Every action on rooms
//!   "*:*"              - Everything
//! ```
//!
//! ## Wildcard precedence
//!
//! A set reports the highest-precedence form that satisfies a check:
//! exact grant, then `resource:*`, then the `resource:manage`
//! full-access alias, then `*:*`.
//!
//! ## Usage
//!
//! ```rust
//! use hostelry_rbac::{Grant, Permission, PermissionSet, ResourceType, Action};
//!
//! let mut set = PermissionSet::new();
//! set.insert(Grant::exact(ResourceType::Complaint, Action::Create));
//! set.insert(Grant::Resource(ResourceType::Booking));
//!
//! assert!(set.has(&Permission::new(ResourceType::Complaint, Action::Create)));
//! assert!(set.has(&Permission::new(ResourceType::Booking, Action::Delete)));
//! assert!(!set.has(&Permission::new(ResourceType::Settings, Action::Update)));
//! ```
//!
//! ## The manage alias
//!
//! `resource:manage` is the only grant that covers more than it names:
//! it matches any action on its resource. Every other grant matches
//! exactly the single permission it spells out.
//!
//! ## Integration with hostelry-tenancy
//!
//! This crate works with `hostelry-tenancy` roles: each platform role
//! maps to a default permission set in `hostelry-access`, and
//! memberships can carry custom grants beyond the role.

pub mod actions;
pub mod permissions;
pub mod resources;

// Re-export main types for convenience
pub use actions::Action;
pub use permissions::{Grant, MatchKind, Permission, PermissionSet};
pub use resources::ResourceType;

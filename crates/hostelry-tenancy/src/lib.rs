//! # Hostelry Tenancy
//!
//! This crate provides multi-tenant hostel management context for the
//! Hostelry platform, shared by every API service.
//!
//! ## Overview
//!
//! The hostelry-tenancy crate handles:
//! - **Hostels**: Top-level tenant entities
//! - **Memberships**: User-hostel relationships with roles
//! - **Roles**: The platform role hierarchy
//! - **Scopes**: Which hostels a user's role applies to
//! - **Actors**: Decision-time capability snapshots
//! - **Settings**: Cost-approval thresholds
//!
//! ## Architecture
//!
//! ```text
//! User
//!   └─ HostelMembership ─→ Hostel
//!         ├─ UserRole
//!         └─ custom permission grants
//!
//! Actor (per-request snapshot)
//!   ├─ role + is_active
//!   ├─ HostelScope (Unassigned | Single | Many)
//!   └─ custom permission grants
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use hostelry_tenancy::{Actor, Hostel, HostelMembership, UserRole};
//! use uuid::Uuid;
//!
//! // Register a hostel
//! let owner_id = Uuid::now_v7();
//! let hostel = Hostel::new("Sunrise Residency", "sunrise-residency", owner_id);
//!
//! // Add a resident
//! let user_id = Uuid::now_v7();
//! let membership = HostelMembership::new(hostel.id, user_id, UserRole::Student);
//!
//! // Snapshot for access checks
//! let actor = Actor::from_membership(&membership);
//! assert!(actor.scope.includes(hostel.id));
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `hostelry-rbac`: The permission vocabulary
//! - `hostelry-access`: Access control decisions over actors
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support (enabled by default)

pub mod actor;
pub mod hostel;
pub mod membership;
pub mod roles;
pub mod scope;
pub mod settings;

// Re-export main types for convenience
pub use actor::Actor;
pub use hostel::Hostel;
pub use membership::HostelMembership;
pub use roles::UserRole;
pub use scope::HostelScope;
pub use settings::ApprovalSettings;

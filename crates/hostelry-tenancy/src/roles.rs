//! Platform roles
//!
//! This module defines the role hierarchy for the Hostelry platform,
//! along with predicates over roles and the "who can manage whom" rule.

use serde::{Deserialize, Serialize};

/// A user's role on the platform.
///
/// Roles are hierarchical; the discriminant orders them by privilege:
/// Visitor < Student < Supervisor < HostelAdmin < SuperAdmin
///
/// # Permission Model
///
/// - **Visitor**: Browsing access, can request a booking
/// - **Student**: A resident; files complaints, pays, reviews
/// - **Supervisor**: On-site staff scoped to a single hostel
/// - **HostelAdmin**: Manages one or more hostels
/// - **SuperAdmin**: Full platform control, bypasses permission checks
///
/// # Examples
///
/// ```
/// use hostelry_tenancy::UserRole;
///
/// let role = UserRole::Supervisor;
/// assert!(role.is_staff());
/// assert!(!role.is_admin());
///
/// assert!(UserRole::HostelAdmin.can_manage(UserRole::Student));
/// assert!(!UserRole::HostelAdmin.can_manage(UserRole::SuperAdmin));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Browsing access, not yet a resident
    Visitor = 0,

    /// Resident of a hostel
    Student = 1,

    /// On-site staff, scoped to one hostel
    Supervisor = 2,

    /// Administers one or more hostels
    HostelAdmin = 3,

    /// Full platform control
    SuperAdmin = 4,
}

impl UserRole {
    /// The role hierarchy from highest to lowest privilege.
    pub fn hierarchy() -> [UserRole; 5] {
        [
            UserRole::SuperAdmin,
            UserRole::HostelAdmin,
            UserRole::Supervisor,
            UserRole::Student,
            UserRole::Visitor,
        ]
    }

    /// Check whether this role may manage users holding `target`.
    ///
    /// True only when this role sits strictly higher in the hierarchy;
    /// a role never manages its peers or itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostelry_tenancy::UserRole;
    ///
    /// assert!(UserRole::SuperAdmin.can_manage(UserRole::HostelAdmin));
    /// assert!(UserRole::Supervisor.can_manage(UserRole::Student));
    /// assert!(!UserRole::Supervisor.can_manage(UserRole::Supervisor));
    /// assert!(!UserRole::Visitor.can_manage(UserRole::Visitor));
    /// ```
    pub fn can_manage(&self, target: UserRole) -> bool {
        *self > target
    }

    /// Check if this is the super admin role.
    pub fn is_super_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }

    /// Check if this role has admin privileges over at least one hostel.
    ///
    /// # Returns
    ///
    /// `true` for HostelAdmin and SuperAdmin roles
    pub fn is_admin(&self) -> bool {
        *self >= UserRole::HostelAdmin
    }

    /// Check if this role is staff (works for the platform).
    ///
    /// # Returns
    ///
    /// `true` for Supervisor, HostelAdmin, and SuperAdmin roles
    pub fn is_staff(&self) -> bool {
        *self >= UserRole::Supervisor
    }

    /// Check if this role is a hostel resident.
    pub fn is_resident(&self) -> bool {
        matches!(self, UserRole::Student)
    }

    /// Parse role from string representation.
    ///
    /// Unknown role names fail closed: they return `None` rather than
    /// mapping to any default role.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostelry_tenancy::UserRole;
    ///
    /// assert_eq!(UserRole::parse("supervisor"), Some(UserRole::Supervisor));
    /// assert_eq!(UserRole::parse("HOSTEL_ADMIN"), Some(UserRole::HostelAdmin));
    /// assert_eq!(UserRole::parse("warden"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "visitor" | "guest" => Some(Self::Visitor),
            "student" | "resident" => Some(Self::Student),
            "supervisor" => Some(Self::Supervisor),
            "hostel_admin" | "hosteladmin" => Some(Self::HostelAdmin),
            "super_admin" | "superadmin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostelry_tenancy::UserRole;
    ///
    /// assert_eq!(UserRole::HostelAdmin.as_str(), "hostel_admin");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visitor => "visitor",
            Self::Student => "student",
            Self::Supervisor => "supervisor",
            Self::HostelAdmin => "hostel_admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Visitor => "Visitor",
            Self::Student => "Student",
            Self::Supervisor => "Supervisor",
            Self::HostelAdmin => "Hostel Admin",
            Self::SuperAdmin => "Super Admin",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Visitor
    }
}

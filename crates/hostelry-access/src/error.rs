//! Error types for access control decisions
//!
//! This module defines the typed denials raised by the `require_*` and
//! `validate_*` guards. The HTTP layer is expected to catch these and
//! map them to user-facing responses.

use thiserror::Error;
use uuid::Uuid;

use hostelry_tenancy::UserRole;

/// Access control error types.
///
/// Every guard either returns `Ok(())` or raises one of these before
/// the caller proceeds; there is no retry and no partial success.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Role-level or explicit permission check failed
    #[error("Permission denied: {permission}")]
    PermissionDenied {
        /// The denied permission token
        permission: String,
    },

    /// The actor's role is not in the allowed set for the operation
    #[error("Permission denied: role {} is not allowed", .role.as_str())]
    RoleNotAllowed {
        /// The actor's role
        role: UserRole,
    },

    /// Hierarchy check failed: the actor's role cannot manage the target role
    #[error("Insufficient permissions: {} cannot manage {}", .actor.as_str(), .target.as_str())]
    InsufficientPermissions {
        /// The acting role
        actor: UserRole,
        /// The role the actor tried to manage
        target: UserRole,
    },

    /// Instance-scope violation: acting outside the assigned hostel
    #[error("Hostel access denied: {hostel_id}")]
    HostelAccessDenied {
        /// The hostel the actor is not assigned to
        hostel_id: Uuid,
    },

    /// Acting on a record the actor neither owns nor manages
    #[error("Unauthorized access to this resource")]
    UnauthorizedAccess,

    /// The actor's account is not active
    #[error("Account is inactive")]
    InactiveUser,
}

/// Result type for access control guards.
pub type AccessResult<T> = Result<T, AccessError>;

impl AccessError {
    /// Check if this error should be logged at error level.
    ///
    /// Denials are expected outcomes; none of them indicate a server
    /// fault.
    pub fn is_server_error(&self) -> bool {
        false
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AccessError::PermissionDenied { .. }
            | AccessError::RoleNotAllowed { .. }
            | AccessError::InsufficientPermissions { .. }
            | AccessError::HostelAccessDenied { .. }
            | AccessError::UnauthorizedAccess
            | AccessError::InactiveUser => 403,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessError::PermissionDenied { .. } | AccessError::RoleNotAllowed { .. } => {
                "PERMISSION_DENIED"
            }
            AccessError::InsufficientPermissions { .. } => "INSUFFICIENT_PERMISSIONS",
            AccessError::HostelAccessDenied { .. } => "HOSTEL_ACCESS_DENIED",
            AccessError::UnauthorizedAccess => "UNAUTHORIZED_ACCESS",
            AccessError::InactiveUser => "INACTIVE_USER",
        }
    }
}

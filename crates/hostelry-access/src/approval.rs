//! Cost-approval authority
//!
//! Threshold gates for cost-bearing approvals, independent of the
//! resource/role permission flow: holding `complaint:approve` says a
//! supervisor may approve complaints at all; the authority here says up
//! to what cost.

use serde::{Deserialize, Serialize};

use hostelry_tenancy::{Actor, ApprovalSettings, UserRole};

/// What kind of cost is being approved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalContext {
    /// Complaint resolution cost
    Complaint,
    /// Maintenance repair cost
    Maintenance,
}

/// Threshold-based approval gate.
///
/// Thresholds come from [`ApprovalSettings`] and are process-lifetime
/// constants; there is no caching or staleness to handle.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hostelry_access::ApprovalAuthority;
/// use hostelry_tenancy::{Actor, ApprovalSettings, UserRole};
///
/// let authority = ApprovalAuthority::new(ApprovalSettings::default());
/// let supervisor = Actor::new(Uuid::now_v7(), UserRole::Supervisor);
///
/// assert!(authority.can_approve_complaint_cost(&supervisor, 5000.0));
/// assert!(!authority.can_approve_complaint_cost(&supervisor, 5000.01));
/// ```
#[derive(Debug, Clone)]
pub struct ApprovalAuthority {
    settings: ApprovalSettings,
}

impl ApprovalAuthority {
    /// Create an authority over the given settings.
    pub fn new(settings: ApprovalSettings) -> Self {
        Self { settings }
    }

    /// The settings this authority consults.
    pub fn settings(&self) -> &ApprovalSettings {
        &self.settings
    }

    /// Check whether the actor may approve a complaint-resolution cost.
    ///
    /// Admin roles approve unconditionally; supervisors up to the
    /// configured threshold (boundary inclusive); other roles never.
    pub fn can_approve_complaint_cost(&self, actor: &Actor, cost: f64) -> bool {
        match actor.role {
            UserRole::SuperAdmin | UserRole::HostelAdmin => true,
            UserRole::Supervisor => cost <= self.settings.supervisor_complaint_threshold,
            UserRole::Student | UserRole::Visitor => false,
        }
    }

    /// Check whether the actor may approve a maintenance-repair cost.
    ///
    /// Same rule as complaints with the maintenance threshold.
    pub fn can_approve_maintenance_cost(&self, actor: &Actor, cost: f64) -> bool {
        match actor.role {
            UserRole::SuperAdmin | UserRole::HostelAdmin => true,
            UserRole::Supervisor => cost <= self.settings.supervisor_maintenance_threshold,
            UserRole::Student | UserRole::Visitor => false,
        }
    }

    /// Check whether a cost needs escalation to a higher role.
    ///
    /// The logical negation of the matching `can_approve_*` check.
    pub fn requires_escalation(&self, actor: &Actor, cost: f64, context: ApprovalContext) -> bool {
        match context {
            ApprovalContext::Complaint => !self.can_approve_complaint_cost(actor, cost),
            ApprovalContext::Maintenance => !self.can_approve_maintenance_cost(actor, cost),
        }
    }
}

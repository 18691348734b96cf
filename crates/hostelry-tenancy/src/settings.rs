//! Approval settings
//!
//! This module provides the configuration consumed by cost-based
//! approval checks. Thresholds are process-lifetime constants loaded
//! from the service configuration at startup.

use serde::{Deserialize, Serialize};

/// Cost-approval thresholds per role.
///
/// A supervisor may unilaterally approve complaint-resolution and
/// maintenance-repair costs up to these ceilings; anything above needs
/// escalation to an admin. Admin roles are not threshold-limited.
///
/// # Examples
///
/// ```
/// use hostelry_tenancy::settings::ApprovalSettings;
///
/// let settings = ApprovalSettings::default();
/// assert_eq!(settings.supervisor_complaint_threshold, 5000.0);
/// assert_eq!(settings.supervisor_maintenance_threshold, 10000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalSettings {
    /// Maximum complaint-resolution cost a supervisor may approve
    #[serde(default = "default_complaint_threshold")]
    pub supervisor_complaint_threshold: f64,

    /// Maximum maintenance-repair cost a supervisor may approve
    #[serde(default = "default_maintenance_threshold")]
    pub supervisor_maintenance_threshold: f64,
}

fn default_complaint_threshold() -> f64 {
    5000.0
}

fn default_maintenance_threshold() -> f64 {
    10000.0
}

impl Default for ApprovalSettings {
    fn default() -> Self {
        Self {
            supervisor_complaint_threshold: default_complaint_threshold(),
            supervisor_maintenance_threshold: default_maintenance_threshold(),
        }
    }
}

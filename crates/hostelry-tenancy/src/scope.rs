//! Hostel scopes
//!
//! A scope records which hostels a user's role applies to. It is
//! resolved once when the user record is loaded, so access checks never
//! have to probe the user object for optional relation fields.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The set of hostels a user's role applies to.
///
/// - Residents and supervisors hold a `Single` scope (their own hostel).
/// - Hostel admins hold `Single` or `Many` depending on how many hostels
///   they administer.
/// - `Unassigned` is the state before any hostel is linked; every
///   instance-level check against it fails closed.
///
/// Super admins are not scoped; the access layer bypasses scope checks
/// for them entirely.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hostelry_tenancy::HostelScope;
///
/// let hostel = Uuid::now_v7();
/// let other = Uuid::now_v7();
///
/// let scope = HostelScope::single(hostel);
/// assert!(scope.includes(hostel));
/// assert!(!scope.includes(other));
/// assert!(!HostelScope::Unassigned.includes(hostel));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostelScope {
    /// No hostel linked yet.
    #[default]
    Unassigned,
    /// Scoped to exactly one hostel.
    Single(Uuid),
    /// Scoped to a set of hostels (multi-hostel admins).
    Many(HashSet<Uuid>),
}

impl HostelScope {
    /// Scope covering exactly one hostel.
    pub fn single(hostel_id: Uuid) -> Self {
        HostelScope::Single(hostel_id)
    }

    /// Scope covering a set of hostels.
    pub fn many<I>(hostel_ids: I) -> Self
    where
        I: IntoIterator<Item = Uuid>,
    {
        HostelScope::Many(hostel_ids.into_iter().collect())
    }

    /// Check whether a hostel falls within this scope.
    ///
    /// `Unassigned` includes nothing.
    pub fn includes(&self, hostel_id: Uuid) -> bool {
        match self {
            HostelScope::Unassigned => false,
            HostelScope::Single(id) => *id == hostel_id,
            HostelScope::Many(ids) => ids.contains(&hostel_id),
        }
    }

    /// Number of hostels in scope.
    pub fn len(&self) -> usize {
        match self {
            HostelScope::Unassigned => 0,
            HostelScope::Single(_) => 1,
            HostelScope::Many(ids) => ids.len(),
        }
    }

    /// Check if no hostel is in scope.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_includes_nothing() {
        assert!(!HostelScope::Unassigned.includes(Uuid::now_v7()));
        assert!(HostelScope::Unassigned.is_empty());
    }

    #[test]
    fn test_single_scope() {
        let hostel = Uuid::now_v7();
        let scope = HostelScope::single(hostel);

        assert!(scope.includes(hostel));
        assert!(!scope.includes(Uuid::now_v7()));
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn test_many_scope() {
        let a = Uuid::now_v7();
        let b = Uuid::now_v7();
        let scope = HostelScope::many([a, b]);

        assert!(scope.includes(a));
        assert!(scope.includes(b));
        assert!(!scope.includes(Uuid::now_v7()));
        assert_eq!(scope.len(), 2);
    }

    #[test]
    fn test_many_empty_fails_closed() {
        let scope = HostelScope::many(std::iter::empty());
        assert!(scope.is_empty());
        assert!(!scope.includes(Uuid::now_v7()));
    }
}

//! # Permissions
//!
//! Core permission types and sets for the RBAC system.
//! A permission combines a resource type with an action; a grant is one
//! entry of a capability set and may be an exact permission or a
//! wildcard over a resource or the whole platform.

use std::collections::HashSet;
use std::fmt;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::actions::Action;
use crate::resources::ResourceType;

/// A permission is a combination of resource type and action.
///
/// Permissions are the unit of access checks: a caller asks whether an
/// actor may perform `action` on `resource`. They render as
/// `resource:action` tokens and parse back from the same form.
///
/// # Example
///
/// ```
/// use hostelry_rbac::{Permission, ResourceType, Action};
///
/// let perm = Permission::new(ResourceType::Booking, Action::Create);
/// assert_eq!(perm.to_string(), "booking:create");
///
/// let parsed = Permission::parse("booking:create").unwrap();
/// assert_eq!(parsed, perm);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permission {
    /// The resource type this permission applies to.
    pub resource: ResourceType,
    /// The action allowed on the resource.
    pub action: Action,
}

impl Permission {
    /// Create a new permission.
    pub fn new(resource: ResourceType, action: Action) -> Self {
        Self { resource, action }
    }

    /// Parse from a `resource:action` token.
    ///
    /// The token must have exactly two `:`-delimited segments and no
    /// wildcards; wildcard spellings parse as [`Grant`]s instead.
    ///
    /// # Returns
    ///
    /// `Some(Permission)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use hostelry_rbac::{Permission, ResourceType, Action};
    ///
    /// let perm = Permission::parse("complaint:resolve").unwrap();
    /// assert_eq!(perm.resource, ResourceType::Complaint);
    /// assert_eq!(perm.action, Action::Resolve);
    ///
    /// assert!(Permission::parse("complaint").is_none());
    /// assert!(Permission::parse("complaint:resolve:extra").is_none());
    /// assert!(Permission::parse("complaint:*").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 {
            return None;
        }

        let resource = ResourceType::parse(parts[0])?;
        let action = Action::parse(parts[1])?;
        Some(Self { resource, action })
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource.as_str(), self.action.as_str())
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Permission::parse(&s).ok_or_else(|| de::Error::custom(format!("invalid permission: {s}")))
    }
}

/// One entry of a capability set.
///
/// A grant is either an exact permission or one of the two wildcard
/// forms accepted in permission tokens:
///
/// - `Exact`: `booking:create`
/// - `Resource`: `booking:*` (every action on bookings)
/// - `Global`: `*:*` (everything)
///
/// # Example
///
/// ```
/// use hostelry_rbac::{Grant, Permission, ResourceType, Action};
///
/// let grant = Grant::parse("booking:*").unwrap();
/// assert!(grant.allows(&Permission::new(ResourceType::Booking, Action::Delete)));
/// assert!(!grant.allows(&Permission::new(ResourceType::Room, Action::Delete)));
/// assert_eq!(grant.to_string(), "booking:*");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grant {
    /// A single `resource:action` permission.
    Exact(Permission),
    /// Every action on one resource type (`resource:*`).
    Resource(ResourceType),
    /// Every action on every resource (`*:*`).
    Global,
}

impl Grant {
    /// Convenience constructor for an exact grant.
    pub fn exact(resource: ResourceType, action: Action) -> Self {
        Grant::Exact(Permission::new(resource, action))
    }

    /// Parse from a token: `resource:action`, `resource:*`, or `*:*`.
    ///
    /// `*:action` is not a recognized form and parses as `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 {
            return None;
        }

        match (parts[0], parts[1]) {
            ("*", "*") => Some(Grant::Global),
            ("*", _) => None,
            (resource, "*") => ResourceType::parse(resource).map(Grant::Resource),
            (resource, action) => {
                let resource = ResourceType::parse(resource)?;
                let action = Action::parse(action)?;
                Some(Grant::Exact(Permission::new(resource, action)))
            }
        }
    }

    /// The precedence tier at which this grant satisfies a permission,
    /// if it satisfies it at all.
    ///
    /// An exact grant satisfies only its own permission, except for
    /// `resource:manage`, which satisfies every other action on its
    /// resource at the [`MatchKind::ManageAlias`] tier.
    pub fn match_kind(&self, permission: &Permission) -> Option<MatchKind> {
        match self {
            Grant::Exact(granted) if granted == permission => Some(MatchKind::Exact),
            Grant::Exact(granted)
                if granted.resource == permission.resource
                    && granted.action == Action::Manage =>
            {
                Some(MatchKind::ManageAlias)
            }
            Grant::Exact(_) => None,
            Grant::Resource(resource) if *resource == permission.resource => {
                Some(MatchKind::ResourceWildcard)
            }
            Grant::Resource(_) => None,
            Grant::Global => Some(MatchKind::Global),
        }
    }

    /// Check whether this grant allows a concrete permission.
    pub fn allows(&self, permission: &Permission) -> bool {
        self.match_kind(permission).is_some()
    }
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grant::Exact(p) => write!(f, "{p}"),
            Grant::Resource(r) => write!(f, "{}:*", r.as_str()),
            Grant::Global => write!(f, "*:*"),
        }
    }
}

impl Serialize for Grant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Grant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Grant::parse(&s).ok_or_else(|| de::Error::custom(format!("invalid grant: {s}")))
    }
}

impl From<Permission> for Grant {
    fn from(permission: Permission) -> Self {
        Grant::Exact(permission)
    }
}

/// How a permission was satisfied by a set, in precedence order.
///
/// When a set grants a permission several ways, the highest-precedence
/// match is reported: an exact grant wins over `resource:*`, which wins
/// over the `resource:manage` alias, which wins over `*:*`. Declaration
/// order is precedence order, and the derived `Ord` reflects it
/// (`Exact` is the strongest match and compares lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    /// The exact `resource:action` grant is present.
    Exact,
    /// A `resource:*` wildcard is present.
    ResourceWildcard,
    /// `resource:manage` is present and acts as a full-access alias.
    ManageAlias,
    /// The `*:*` global wildcard is present.
    Global,
}

/// A set of grants that can be assigned to roles or users.
///
/// # Example
///
/// ```
/// use hostelry_rbac::{Grant, Permission, PermissionSet, ResourceType, Action};
///
/// let mut set = PermissionSet::new();
/// set.insert(Grant::exact(ResourceType::Complaint, Action::Create));
/// set.insert(Grant::Resource(ResourceType::Booking));
///
/// assert!(set.has(&Permission::new(ResourceType::Complaint, Action::Create)));
/// assert!(set.has(&Permission::new(ResourceType::Booking, Action::Delete)));
/// assert!(!set.has(&Permission::new(ResourceType::Room, Action::Update)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    /// The grants in this set.
    grants: HashSet<Grant>,
}

impl PermissionSet {
    /// Create a new empty permission set.
    pub fn new() -> Self {
        Self {
            grants: HashSet::new(),
        }
    }

    /// Add a grant to the set.
    pub fn insert(&mut self, grant: Grant) {
        self.grants.insert(grant);
    }

    /// Add multiple grants to the set.
    pub fn extend<I>(&mut self, grants: I)
    where
        I: IntoIterator<Item = Grant>,
    {
        self.grants.extend(grants);
    }

    /// Remove a grant from the set.
    ///
    /// # Returns
    ///
    /// `true` if the grant was present, `false` otherwise
    pub fn remove(&mut self, grant: &Grant) -> bool {
        self.grants.remove(grant)
    }

    /// Merge another permission set into this one.
    pub fn merge(&mut self, other: &PermissionSet) {
        self.grants.extend(other.grants.iter().copied());
    }

    /// Create from a list of grant tokens, skipping unparsable entries.
    ///
    /// Callers that need to surface bad tokens should parse with
    /// [`Grant::parse`] themselves.
    ///
    /// # Example
    ///
    /// ```
    /// use hostelry_rbac::PermissionSet;
    ///
    /// let set = PermissionSet::from_strings(&["booking:create", "room:*", "nonsense"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_strings(tokens: &[&str]) -> Self {
        tokens.iter().filter_map(|t| Grant::parse(t)).collect()
    }

    /// Find how this set satisfies a permission, if at all.
    ///
    /// Matching applies wildcard precedence; the strongest form present
    /// wins:
    ///
    /// 1. exact grant
    /// 2. `resource:*` wildcard
    /// 3. `resource:manage` full-access alias
    /// 4. `*:*` global wildcard
    ///
    /// Anything the individual grants do not satisfy is denied; in
    /// particular no action ever stands in for another (holding
    /// `payment:delete` says nothing about `payment:read`).
    pub fn match_kind(&self, permission: &Permission) -> Option<MatchKind> {
        self.grants
            .iter()
            .filter_map(|grant| grant.match_kind(permission))
            .min()
    }

    /// Check if the set grants a permission.
    pub fn has(&self, permission: &Permission) -> bool {
        self.match_kind(permission).is_some()
    }

    /// Get all grants as canonical tokens, sorted for stable output.
    pub fn all(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.grants.iter().map(|g| g.to_string()).collect();
        tokens.sort();
        tokens
    }

    /// Iterate over the grants in the set.
    pub fn iter(&self) -> impl Iterator<Item = &Grant> {
        self.grants.iter()
    }

    /// Get the count of grants.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Clear all grants.
    pub fn clear(&mut self) {
        self.grants.clear();
    }

    /// Check if this set grants every exact permission another set does.
    pub fn contains_all(&self, other: &PermissionSet) -> bool {
        other.grants.iter().all(|grant| match grant {
            Grant::Exact(p) => self.has(p),
            _ => self.grants.contains(grant) || self.grants.contains(&Grant::Global),
        })
    }

    /// Check if this set grants at least one exact permission another set does.
    pub fn contains_any(&self, other: &PermissionSet) -> bool {
        other.grants.iter().any(|grant| match grant {
            Grant::Exact(p) => self.has(p),
            _ => self.grants.contains(grant) || self.grants.contains(&Grant::Global),
        })
    }
}

impl FromIterator<Grant> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Grant>>(iter: T) -> Self {
        Self {
            grants: iter.into_iter().collect(),
        }
    }
}

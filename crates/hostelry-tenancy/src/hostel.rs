//! Hostel domain model
//!
//! This module provides the core Hostel entity. Hostels are the
//! top-level tenant entities: memberships, bookings, complaints, and
//! staff assignments all hang off a hostel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A hostel represents a tenant in the multi-tenant system.
///
/// Users can belong to multiple hostels with different roles. Each
/// hostel has its own members, rooms, and operational records.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hostelry_tenancy::Hostel;
///
/// let owner_id = Uuid::now_v7();
/// let hostel = Hostel::new("Sunrise Residency", "sunrise-residency", owner_id);
/// assert_eq!(hostel.name, "Sunrise Residency");
/// assert!(hostel.is_active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostel {
    /// Unique identifier for the hostel
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// URL-friendly slug (unique across the platform)
    pub slug: String,

    /// Optional street address
    pub address: Option<String>,

    /// Optional city
    pub city: Option<String>,

    /// Owner user ID (the admin who registered the hostel)
    pub owner_id: Uuid,

    /// Whether the hostel is active
    pub is_active: bool,

    /// When the hostel was registered
    pub created_at: DateTime<Utc>,

    /// When the hostel was last updated
    pub updated_at: DateTime<Utc>,

    /// Custom metadata for extensibility
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Hostel {
    /// Creates a new active hostel.
    ///
    /// The hostel is created with:
    /// - A newly generated UUID v7 ID
    /// - Active status
    /// - Current timestamps
    ///
    /// # Arguments
    ///
    /// * `name` - The hostel name
    /// * `slug` - URL-friendly slug (must be unique)
    /// * `owner_id` - The user ID who owns this hostel
    pub fn new(name: impl Into<String>, slug: impl Into<String>, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            slug: slug.into(),
            address: None,
            city: None,
            owner_id,
            is_active: true,
            created_at: now,
            updated_at: now,
            metadata: HashMap::new(),
        }
    }

    /// Set the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Deactivate the hostel.
    ///
    /// Deactivated hostels keep their records but stop accepting
    /// bookings and access checks against them fail closed.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

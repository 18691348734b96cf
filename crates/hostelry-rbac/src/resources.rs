//! # Resource Types
//!
//! Defines all resource types that can have permissions assigned across
//! the Hostelry platform. Resources are the nouns of the permission
//! vocabulary (`booking`, `complaint`, ...).

use serde::{Deserialize, Serialize};

/// Resource types that can have permissions assigned.
///
/// Every permission pairs one of these with an [`Action`](crate::Action).
/// The list covers the full hostel-management domain: tenancy
/// (`Hostel`, `Room`), the booking/payment flow, operational records
/// (`Complaint`, `Maintenance`, `Attendance`, `MessMenu`), and
/// platform-level resources (`User`, `Report`, `Settings`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Hostel tenant entities.
    Hostel,
    /// Rooms within a hostel.
    Room,
    /// Room bookings.
    Booking,
    /// Payments and invoices.
    Payment,
    /// Resident complaints.
    Complaint,
    /// Maintenance requests and work orders.
    Maintenance,
    /// Resident attendance records.
    Attendance,
    /// Mess menu schedules.
    MessMenu,
    /// In-app and push notifications.
    Notification,
    /// Hostel reviews and ratings.
    Review,
    /// Resident subscription plans.
    Subscription,
    /// User accounts.
    User,
    /// Operational and financial reports.
    Report,
    /// Hostel and platform settings.
    Settings,
}

impl ResourceType {
    /// Get the string representation of the resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Hostel => "hostel",
            ResourceType::Room => "room",
            ResourceType::Booking => "booking",
            ResourceType::Payment => "payment",
            ResourceType::Complaint => "complaint",
            ResourceType::Maintenance => "maintenance",
            ResourceType::Attendance => "attendance",
            ResourceType::MessMenu => "mess_menu",
            ResourceType::Notification => "notification",
            ResourceType::Review => "review",
            ResourceType::Subscription => "subscription",
            ResourceType::User => "user",
            ResourceType::Report => "report",
            ResourceType::Settings => "settings",
        }
    }

    /// Parse a resource type from its string representation.
    ///
    /// Parsing is case-insensitive and accepts a few common aliases.
    ///
    /// # Example
    ///
    /// ```
    /// use hostelry_rbac::resources::ResourceType;
    ///
    /// assert_eq!(ResourceType::parse("booking"), Some(ResourceType::Booking));
    /// assert_eq!(ResourceType::parse("mess_menu"), Some(ResourceType::MessMenu));
    /// assert_eq!(ResourceType::parse("menu"), Some(ResourceType::MessMenu)); // Alias
    /// assert_eq!(ResourceType::parse("spaceship"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hostel" => Some(ResourceType::Hostel),
            "room" => Some(ResourceType::Room),
            "booking" | "reservation" => Some(ResourceType::Booking),
            "payment" | "invoice" => Some(ResourceType::Payment),
            "complaint" | "grievance" => Some(ResourceType::Complaint),
            "maintenance" | "repair" => Some(ResourceType::Maintenance),
            "attendance" => Some(ResourceType::Attendance),
            "mess_menu" | "messmenu" | "menu" => Some(ResourceType::MessMenu),
            "notification" => Some(ResourceType::Notification),
            "review" | "rating" => Some(ResourceType::Review),
            "subscription" | "plan" => Some(ResourceType::Subscription),
            "user" | "account" => Some(ResourceType::User),
            "report" => Some(ResourceType::Report),
            "settings" | "setting" => Some(ResourceType::Settings),
            _ => None,
        }
    }

    /// Get all resource types.
    pub fn all() -> Vec<Self> {
        vec![
            ResourceType::Hostel,
            ResourceType::Room,
            ResourceType::Booking,
            ResourceType::Payment,
            ResourceType::Complaint,
            ResourceType::Maintenance,
            ResourceType::Attendance,
            ResourceType::MessMenu,
            ResourceType::Notification,
            ResourceType::Review,
            ResourceType::Subscription,
            ResourceType::User,
            ResourceType::Report,
            ResourceType::Settings,
        ]
    }
}

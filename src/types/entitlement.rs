//! Drops entitlement types returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Pagination;

/// Unique identifier for an entitlement (a UUID).
pub type EntitlementID = String;

/// A digital item a user is entitled to use, granted for viewership
/// engagement with a game running a drops campaign. Server-owned; a fetched
/// record is a read-only snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entitlement {
    /// Unique entitlement identifier.
    pub id: EntitlementID,

    /// Identifier of the awarded benefit.
    pub benefit_id: String,

    /// When the entitlement was granted.
    pub timestamp: DateTime<Utc>,

    /// User the benefit was awarded to.
    pub user_id: String,

    /// Game the drops campaign ran for.
    pub game_id: String,
}

/// One page of entitlements plus the cursor for the next page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropsEntitlements {
    #[serde(rename = "data")]
    pub entitlements: Vec<Entitlement>,

    /// Absent or empty cursor means this was the last page.
    #[serde(default)]
    pub pagination: Pagination,
}

/// Delivery state set on entitlements by a fulfillment update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FulfillmentStatus {
    /// The user has claimed the benefit.
    #[serde(rename = "CLAIMED")]
    Claimed,

    /// The game has delivered the benefit. The service spells this with a
    /// double L on the wire.
    #[serde(rename = "FULLFILLED")]
    Fulfilled,
}
impl std::fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FulfillmentStatus::Claimed => "CLAIMED",
                FulfillmentStatus::Fulfilled => "FULLFILLED",
            }
        )
    }
}

/// Per-group outcome of a fulfillment update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntitlementUpdateStatus {
    /// The status was applied.
    Success,
    /// The id is not a valid entitlement id.
    InvalidId,
    /// No entitlement with this id exists.
    NotFound,
    /// The credentials do not own the entitlement's game.
    Unauthorized,
    /// The service failed to apply the update.
    UpdateFailed,
}
impl std::fmt::Display for EntitlementUpdateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EntitlementUpdateStatus::Success => "SUCCESS",
                EntitlementUpdateStatus::InvalidId => "INVALID_ID",
                EntitlementUpdateStatus::NotFound => "NOT_FOUND",
                EntitlementUpdateStatus::Unauthorized => "UNAUTHORIZED",
                EntitlementUpdateStatus::UpdateFailed => "UPDATE_FAILED",
            }
        )
    }
}

/// Requested ids that share the same update outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementStatus {
    pub status: EntitlementUpdateStatus,
    pub ids: Vec<EntitlementID>,
}

/// Status groups partitioning the ids of a fulfillment update. Group order
/// is not specified by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementStatuses {
    #[serde(rename = "data")]
    pub statuses: Vec<EntitlementStatus>,
}

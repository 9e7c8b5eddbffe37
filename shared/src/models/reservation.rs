//! Reservation model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reservation lifecycle status
///
/// Only `active -> cancel` ever happens client-side; the server is the
/// source of truth for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Inactive,
    Cancel,
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    /// Check-in instant
    pub date: DateTime<Utc>,
    pub status: ReservationStatus,
    pub nights_quantity: i64,
    /// `nights_quantity * price_per_night` at creation time, minor units
    pub total: i64,
    pub room_id: String,
    pub user_id: String,
}

/// Create reservation payload (`POST /reservations`)
///
/// The user is taken from the bearer token server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub date: DateTime<Utc>,
    pub status: ReservationStatus,
    pub nights_quantity: i64,
    pub total: i64,
    pub room_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::from_str::<ReservationStatus>("\"cancel\"").unwrap(),
            ReservationStatus::Cancel
        );
    }

    #[test]
    fn create_payload_is_camel_case() {
        let payload = ReservationCreate {
            date: "2024-01-01T00:00:00Z".parse().unwrap(),
            status: ReservationStatus::Active,
            nights_quantity: 3,
            total: 300_000,
            room_id: "room-1".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["nightsQuantity"], 3);
        assert_eq!(json["roomId"], "room-1");
        assert_eq!(json["status"], "active");
    }
}

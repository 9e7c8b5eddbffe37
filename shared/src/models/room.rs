//! Room model

use serde::{Deserialize, Serialize};

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    /// Photo URL
    pub photos: String,
    /// Display name, e.g. "Suite 301"
    pub code_name: String,
    pub description: String,
    /// Nightly rate in minor units
    pub price_per_night: i64,
    /// Maximum number of guests
    pub capacity: i32,
    pub beds_quantity: i32,
    /// Owning hotel reference
    pub hotel_id: String,
}

/// Create room payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreate {
    pub photos: String,
    pub code_name: String,
    pub description: String,
    pub price_per_night: i64,
    pub capacity: i32,
    pub beds_quantity: i32,
    pub hotel_id: String,
}

/// Update room payload (admin)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    pub photos: Option<String>,
    pub code_name: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<i64>,
    pub capacity: Option<i32>,
    pub beds_quantity: Option<i32>,
    pub hotel_id: Option<String>,
}

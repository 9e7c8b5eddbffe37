//! Hotel model

use serde::{Deserialize, Serialize};

use super::room::Room;

/// Hotel entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Photo URL
    pub photo: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub ranking: i32,
    /// Cheapest nightly rate across the hotel's rooms, in minor units
    pub best_price: i64,
}

/// Hotel detail as returned by `GET /hotels/:id`
///
/// The backend embeds the room inventory under a capitalized `Rooms` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelDetail {
    #[serde(flatten)]
    pub hotel: Hotel,
    #[serde(rename = "Rooms", default)]
    pub rooms: Vec<Room>,
}

/// Create hotel payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelCreate {
    pub name: String,
    pub description: String,
    pub photo: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub ranking: i32,
    pub best_price: i64,
}

/// Update hotel payload (admin)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub ranking: Option<i32>,
    pub best_price: Option<i64>,
}

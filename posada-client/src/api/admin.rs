//! Admin API (bearer token required, server enforces the admin role)
//!
//! The room update/delete paths are not RESTful; they follow the
//! backend as deployed (`/admin/updateRooms/:id`, `/admin/deleteRooms/:id`).

use crate::{ClientResult, HttpClient};
use shared::models::{HotelCreate, HotelUpdate, RoomCreate, RoomUpdate};

impl HttpClient {
    /// Create a hotel (`POST /admin/hotels`)
    pub async fn create_hotel(&self, hotel: &HotelCreate) -> ClientResult<()> {
        self.post::<serde_json::Value, _>("admin/hotels", hotel)
            .await?;
        Ok(())
    }

    /// Update a hotel (`PUT /admin/hotels/:id`)
    pub async fn update_hotel(&self, id: &str, hotel: &HotelUpdate) -> ClientResult<()> {
        self.put::<serde_json::Value, _>(&format!("admin/hotels/{}", id), hotel)
            .await?;
        Ok(())
    }

    /// Delete a hotel (`DELETE /admin/hotels/:id`)
    pub async fn delete_hotel(&self, id: &str) -> ClientResult<()> {
        self.delete::<serde_json::Value>(&format!("admin/hotels/{}", id))
            .await?;
        Ok(())
    }

    /// Create a room (`POST /admin/rooms`)
    pub async fn create_room(&self, room: &RoomCreate) -> ClientResult<()> {
        self.post::<serde_json::Value, _>("admin/rooms", room)
            .await?;
        Ok(())
    }

    /// Update a room (`PUT /admin/updateRooms/:id`)
    pub async fn update_room(&self, id: &str, room: &RoomUpdate) -> ClientResult<()> {
        self.put::<serde_json::Value, _>(&format!("admin/updateRooms/{}", id), room)
            .await?;
        Ok(())
    }

    /// Delete a room (`DELETE /admin/deleteRooms/:id`)
    pub async fn delete_room(&self, id: &str) -> ClientResult<()> {
        self.delete::<serde_json::Value>(&format!("admin/deleteRooms/{}", id))
            .await?;
        Ok(())
    }
}

//! Rooms API (public reads)

use crate::{ClientError, ClientResult, HttpClient};
use shared::models::Room;

impl HttpClient {
    /// Fetch all rooms (`GET /rooms`)
    pub async fn list_rooms(&self) -> ClientResult<Vec<Room>> {
        self.get::<Vec<Room>>("rooms")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing rooms data".to_string()))
    }

    /// Fetch a batch of rooms in one request (`GET /rooms?ids=a,b,c`)
    pub async fn rooms_by_ids(&self, ids: &[String]) -> ClientResult<Vec<Room>> {
        self.get::<Vec<Room>>(&format!("rooms?ids={}", ids.join(",")))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing rooms data".to_string()))
    }

    /// Fetch one room (`GET /rooms/:id`)
    pub async fn get_room(&self, id: &str) -> ClientResult<Room> {
        self.get::<Room>(&format!("rooms/{}", id))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing room data".to_string()))
    }
}

//! Hotels API (public reads)

use crate::{ClientError, ClientResult, HttpClient};
use shared::models::{Hotel, HotelDetail};

impl HttpClient {
    /// Fetch the full hotel catalog (`GET /hotels`)
    pub async fn list_hotels(&self) -> ClientResult<Vec<Hotel>> {
        self.get::<Vec<Hotel>>("hotels")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing hotels data".to_string()))
    }

    /// Fetch one hotel with its room inventory (`GET /hotels/:id`)
    pub async fn get_hotel(&self, id: &str) -> ClientResult<HotelDetail> {
        self.get::<HotelDetail>(&format!("hotels/{}", id))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing hotel data".to_string()))
    }
}

//! Reservations API (authenticated)

use chrono::{DateTime, Utc};

use crate::{ClientError, ClientResult, HttpClient};
use shared::models::{Reservation, ReservationCreate};

impl HttpClient {
    /// Fetch the caller's reservation history
    /// (`GET /reservations/myreservations`)
    pub async fn my_reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.get::<Vec<Reservation>>("reservations/myreservations")
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing reservations data".to_string()))
    }

    /// Fetch the instants already reserved for a room
    /// (`GET /reservations/:roomId`)
    pub async fn reserved_dates(&self, room_id: &str) -> ClientResult<Vec<DateTime<Utc>>> {
        self.get::<Vec<DateTime<Utc>>>(&format!("reservations/{}", room_id))
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing reserved dates".to_string()))
    }

    /// Create a reservation (`POST /reservations`)
    ///
    /// Not idempotent: a duplicate submission books twice.
    pub async fn create_reservation(&self, reservation: &ReservationCreate) -> ClientResult<()> {
        self.post::<serde_json::Value, _>("reservations", reservation)
            .await?;
        Ok(())
    }

    /// Cancel a reservation (`DELETE /reservations/:id`)
    pub async fn cancel_reservation(&self, id: &str) -> ClientResult<()> {
        self.delete::<serde_json::Value>(&format!("reservations/{}", id))
            .await?;
        Ok(())
    }
}

//! Hotel detail: one hotel plus its room inventory

use posada_client::HttpClient;
use shared::models::{Hotel, Room};
use tokio_util::sync::CancellationToken;

use crate::notify::Notifier;
use crate::routes::Route;

/// Hotel detail screen
#[derive(Debug, Default)]
pub struct HotelDetailView {
    hotel_id: String,
    hotel: Option<Hotel>,
    rooms: Vec<Room>,
    notifier: Notifier,
    cancel: CancellationToken,
}

impl HotelDetailView {
    pub fn new(hotel_id: impl Into<String>) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            ..Default::default()
        }
    }

    /// Fetch the hotel and its rooms in one request
    pub async fn load(&mut self, client: &HttpClient) {
        let result = tokio::select! {
            _ = self.cancel.cancelled() => return,
            result = client.get_hotel(&self.hotel_id) => result,
        };

        match result {
            Ok(detail) => {
                self.hotel = Some(detail.hotel);
                self.rooms = detail.rooms;
            }
            Err(err) => {
                tracing::error!(error = %err, hotel_id = %self.hotel_id, "failed to load hotel");
                self.notifier.error(err.user_message());
            }
        }
    }

    pub fn hotel(&self) -> Option<&Hotel> {
        self.hotel.as_ref()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Navigate to the reservation form for a room
    pub fn reserve(&self, room_id: &str) -> Route {
        Route::Reservation(room_id.to_string())
    }

    /// Token a host cancels when the view is torn down
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

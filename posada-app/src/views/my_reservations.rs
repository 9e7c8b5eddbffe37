//! My-reservations screen: history, room join, local cancellation
//!
//! The rooms fetch is explicitly sequenced after the reservation list
//! fetch, because its `ids=` batch comes from the list.

use std::collections::HashMap;

use posada_client::HttpClient;
use shared::models::{Reservation, ReservationStatus, Room};
use tokio_util::sync::CancellationToken;

use crate::notify::Notifier;

/// Reservation history screen
#[derive(Debug)]
pub struct MyReservationsView {
    reservations: Vec<Reservation>,
    rooms: HashMap<String, Room>,
    /// true shows active reservations, false the inactive/cancelled ones
    active_only: bool,
    notifier: Notifier,
    cancel: CancellationToken,
}

impl Default for MyReservationsView {
    fn default() -> Self {
        Self {
            reservations: Vec::new(),
            rooms: HashMap::new(),
            active_only: true,
            notifier: Notifier::new(),
            cancel: CancellationToken::new(),
        }
    }
}

impl MyReservationsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the history, then the referenced rooms in one batch
    pub async fn load(&mut self, client: &HttpClient) {
        let reservations = tokio::select! {
            _ = self.cancel.cancelled() => return,
            result = client.my_reservations() => match result {
                Ok(reservations) => reservations,
                Err(err) => {
                    tracing::error!(error = %err, "failed to load reservations");
                    self.notifier.error(err.user_message());
                    return;
                }
            },
        };

        let mut room_ids: Vec<String> = Vec::new();
        for reservation in &reservations {
            if !room_ids.contains(&reservation.room_id) {
                room_ids.push(reservation.room_id.clone());
            }
        }
        self.reservations = reservations;

        if room_ids.is_empty() {
            return;
        }

        let rooms = tokio::select! {
            _ = self.cancel.cancelled() => return,
            result = client.rooms_by_ids(&room_ids) => match result {
                Ok(rooms) => rooms,
                Err(err) => {
                    tracing::error!(error = %err, "failed to load rooms");
                    self.notifier.error(err.user_message());
                    return;
                }
            },
        };
        self.rooms = rooms.into_iter().map(|room| (room.id.clone(), room)).collect();
    }

    /// Switch between active and inactive/cancelled reservations
    pub fn toggle_filter(&mut self) {
        self.active_only = !self.active_only;
    }

    pub fn active_only(&self) -> bool {
        self.active_only
    }

    /// Reservations under the current status filter
    pub fn visible(&self) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|reservation| {
                if self.active_only {
                    reservation.status == ReservationStatus::Active
                } else {
                    reservation.status != ReservationStatus::Active
                }
            })
            .collect()
    }

    /// Room for a reservation, when the batch fetch brought it
    pub fn room_for(&self, reservation: &Reservation) -> Option<&Room> {
        self.rooms.get(&reservation.room_id)
    }

    /// Cancel a reservation and flip the local copy without a refetch
    pub async fn cancel_reservation(&mut self, client: &HttpClient, id: &str) {
        match client.cancel_reservation(id).await {
            Ok(()) => {
                if let Some(reservation) =
                    self.reservations.iter_mut().find(|r| r.id == id)
                {
                    reservation.status = ReservationStatus::Cancel;
                }
            }
            Err(err) => {
                tracing::error!(error = %err, id, "failed to cancel reservation");
                self.notifier.error(err.user_message());
            }
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Token a host cancels when the view is torn down
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    #[cfg(test)]
    pub(crate) fn with_reservations(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(id: &str, status: ReservationStatus) -> Reservation {
        Reservation {
            id: id.to_string(),
            date: "2024-01-01T00:00:00Z".parse().unwrap(),
            status,
            nights_quantity: 2,
            total: 200_000,
            room_id: "r1".to_string(),
            user_id: "u1".to_string(),
        }
    }

    #[test]
    fn filter_toggles_between_active_and_the_rest() {
        let mut view = MyReservationsView::with_reservations(vec![
            reservation("a", ReservationStatus::Active),
            reservation("b", ReservationStatus::Inactive),
            reservation("c", ReservationStatus::Cancel),
        ]);

        let ids: Vec<&str> = view.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);

        view.toggle_filter();
        let ids: Vec<&str> = view.visible().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}

//! Reservation screen: date selection, availability check, price
//!
//! A proposed date collides when its midnight-UTC instant is exactly
//! equal to a reserved instant for the room. Equality is by instant,
//! not calendar day, so a reserved instant with a nonzero time-of-day
//! never collides with a date picked in the form. That matches the
//! backend's stored data today; tests pin the behavior.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use posada_client::{ClientError, HttpClient};
use shared::models::{ReservationCreate, ReservationStatus, Room};
use tokio_util::sync::CancellationToken;

use crate::notify::Notifier;
use crate::routes::Route;

/// One night, in the milliseconds the price arithmetic runs on
pub const MILLIS_PER_NIGHT: i64 = 86_400_000;

/// Midnight UTC of a calendar day, the instant a form date denotes
fn day_start_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// nights = ceil(|end - start| in milliseconds / one night)
pub fn calculate_nights(start: NaiveDate, end: NaiveDate) -> i64 {
    let start_ms = day_start_utc(start).timestamp_millis();
    let end_ms = day_start_utc(end).timestamp_millis();
    let diff = (end_ms - start_ms).abs();
    diff.div_ceil(MILLIS_PER_NIGHT)
}

/// Reservation form for one room
#[derive(Debug, Default)]
pub struct ReservationView {
    room_id: String,
    room: Option<Room>,
    reserved_dates: Vec<DateTime<Utc>>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    nights_quantity: i64,
    total: i64,
    notifier: Notifier,
    cancel: CancellationToken,
}

impl ReservationView {
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            ..Default::default()
        }
    }

    /// Fetch the room and its reserved instants, once per view
    pub async fn load(&mut self, client: &HttpClient) {
        let result = tokio::select! {
            _ = self.cancel.cancelled() => return,
            result = async {
                tokio::try_join!(
                    client.get_room(&self.room_id),
                    client.reserved_dates(&self.room_id),
                )
            } => result,
        };

        match result {
            Ok((room, reserved_dates)) => {
                self.room = Some(room);
                self.reserved_dates = reserved_dates;
            }
            Err(err) => {
                tracing::error!(error = %err, room_id = %self.room_id, "failed to load room");
                self.notifier.error(err.user_message());
            }
        }
    }

    /// True iff the day's exact instant is already reserved
    pub fn is_date_reserved(&self, day: NaiveDate) -> bool {
        let proposed = day_start_utc(day).timestamp_millis();
        self.reserved_dates
            .iter()
            .any(|reserved| reserved.timestamp_millis() == proposed)
    }

    /// Set the check-in date; a collision clears the field and alerts
    pub fn set_start_date(&mut self, day: NaiveDate) {
        if self.is_date_reserved(day) {
            self.start_date = None;
            self.notifier.error("Esta fecha ya está reservada");
        } else {
            self.start_date = Some(day);
        }
        self.recalculate();
    }

    /// Set the check-out date; a collision clears the field and alerts
    pub fn set_end_date(&mut self, day: NaiveDate) {
        if self.is_date_reserved(day) {
            self.end_date = None;
            self.notifier.error("Esta fecha ya está reservada");
        } else {
            self.end_date = Some(day);
        }
        self.recalculate();
    }

    /// Recompute nights and total whenever both dates are set
    fn recalculate(&mut self) {
        match (self.start_date, self.end_date, &self.room) {
            (Some(start), Some(end), Some(room)) => {
                self.nights_quantity = calculate_nights(start, end);
                self.total = self.nights_quantity * room.price_per_night;
            }
            _ => {
                self.nights_quantity = 0;
                self.total = 0;
            }
        }
    }

    /// Whether the submission guard would let the form through
    pub fn can_submit(&self) -> bool {
        self.start_date.is_some()
            && self.end_date.is_some()
            && self.nights_quantity > 0
            && self.total > 0
    }

    /// Submit the reservation
    ///
    /// Blocked with an alert (no network call) unless both dates are
    /// set, nights > 0 and total > 0. On success navigates home; on
    /// failure the server message is shown and the view stays.
    pub async fn submit(&mut self, client: &HttpClient) -> Option<Route> {
        let Some(start) = self.start_date else {
            self.notifier
                .error("Please ensure all fields are correctly filled out.");
            return None;
        };
        if self.end_date.is_none() || self.nights_quantity <= 0 || self.total <= 0 {
            self.notifier
                .error("Please ensure all fields are correctly filled out.");
            return None;
        }

        let reservation = ReservationCreate {
            date: day_start_utc(start),
            status: ReservationStatus::Active,
            nights_quantity: self.nights_quantity,
            total: self.total,
            room_id: self.room_id.clone(),
        };

        match client.create_reservation(&reservation).await {
            Ok(()) => {
                self.notifier.info("Reservation successful");
                Some(Route::Home)
            }
            Err(ClientError::Api { message }) => {
                tracing::warn!(%message, "reservation rejected");
                self.notifier
                    .error(format!("Error creating reservation: {}", message));
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "reservation request failed");
                self.notifier
                    .error("Network error occurred. Please try again.");
                None
            }
        }
    }

    pub fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn nights_quantity(&self) -> i64 {
        self.nights_quantity
    }

    /// Total in minor units
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Token a host cancels when the view is torn down
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    #[cfg(test)]
    pub(crate) fn with_room_and_reserved(
        room: Room,
        reserved_dates: Vec<DateTime<Utc>>,
    ) -> Self {
        Self {
            room_id: room.id.clone(),
            room: Some(room),
            reserved_dates,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Level;
    use posada_client::ClientConfig;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn room(price_per_night: i64) -> Room {
        Room {
            id: "r1".to_string(),
            photos: String::new(),
            code_name: "Suite 301".to_string(),
            description: String::new(),
            price_per_night,
            capacity: 2,
            beds_quantity: 1,
            hotel_id: "h1".to_string(),
        }
    }

    #[test]
    fn three_nights_at_100k() {
        let mut view = ReservationView::with_room_and_reserved(room(100_000), vec![]);
        view.set_start_date(date("2024-01-01"));
        view.set_end_date(date("2024-01-04"));

        assert_eq!(view.nights_quantity(), 3);
        assert_eq!(view.total(), 300_000);
        assert!(view.can_submit());
    }

    #[test]
    fn nights_is_at_least_one_for_distinct_days() {
        assert_eq!(calculate_nights(date("2024-01-01"), date("2024-01-02")), 1);
        assert_eq!(calculate_nights(date("2024-01-01"), date("2024-01-01")), 0);
        // Absolute difference: reversed ranges still count nights.
        assert_eq!(calculate_nights(date("2024-01-04"), date("2024-01-01")), 3);
    }

    #[test]
    fn midnight_collision_clears_the_field_and_alerts() {
        let reserved = vec![instant("2024-01-02T00:00:00.000Z")];
        let mut view = ReservationView::with_room_and_reserved(room(100_000), reserved);

        assert!(view.is_date_reserved(date("2024-01-02")));
        view.set_start_date(date("2024-01-02"));

        assert_eq!(view.start_date(), None);
        let notice = view.notifier().current().unwrap();
        assert_eq!(notice.level, Level::Error);
        assert_eq!(notice.message, "Esta fecha ya está reservada");
    }

    #[test]
    fn same_day_different_time_does_not_collide() {
        // Instant equality, not calendar-day equality.
        let reserved = vec![instant("2024-01-02T14:00:00.000Z")];
        let mut view = ReservationView::with_room_and_reserved(room(100_000), reserved);

        assert!(!view.is_date_reserved(date("2024-01-02")));
        view.set_start_date(date("2024-01-02"));
        assert_eq!(view.start_date(), Some(date("2024-01-02")));
    }

    #[test]
    fn end_date_collision_keeps_the_start_date() {
        let reserved = vec![instant("2024-01-04T00:00:00.000Z")];
        let mut view = ReservationView::with_room_and_reserved(room(100_000), reserved);

        view.set_start_date(date("2024-01-01"));
        view.set_end_date(date("2024-01-04"));

        assert_eq!(view.start_date(), Some(date("2024-01-01")));
        assert_eq!(view.end_date(), None);
        assert_eq!(view.nights_quantity(), 0);
        assert_eq!(view.total(), 0);
        assert!(!view.can_submit());
    }

    #[tokio::test]
    async fn submission_is_blocked_without_both_dates() {
        // Guard fires before any request: an unroutable backend proves
        // no network call was issued.
        let client = ClientConfig::new("http://127.0.0.1:9").build_http_client();
        let mut view = ReservationView::with_room_and_reserved(room(100_000), vec![]);
        view.set_start_date(date("2024-01-01"));

        assert!(!view.can_submit());
        let navigated = view.submit(&client).await;
        assert_eq!(navigated, None);
        assert_eq!(
            view.notifier().current().unwrap().message,
            "Please ensure all fields are correctly filled out."
        );
    }

    #[tokio::test]
    async fn submission_is_blocked_for_a_zero_night_stay() {
        let client = ClientConfig::new("http://127.0.0.1:9").build_http_client();
        let mut view = ReservationView::with_room_and_reserved(room(100_000), vec![]);
        view.set_start_date(date("2024-01-01"));
        view.set_end_date(date("2024-01-01"));

        assert_eq!(view.nights_quantity(), 0);
        assert!(!view.can_submit());
        assert_eq!(view.submit(&client).await, None);
    }
}

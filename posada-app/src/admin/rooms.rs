//! Admin room management: list, create, edit, delete
//!
//! The room editor also loads the hotel catalog for its owning-hotel
//! dropdown.

use posada_client::HttpClient;
use shared::models::{Hotel, Room, RoomCreate, RoomUpdate};
use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::notify::Notifier;
use crate::routes::Route;

/// Admin room list screen
#[derive(Debug, Default)]
pub struct AdminRoomsView {
    rooms: Vec<Room>,
    selected: Option<String>,
    notifier: Notifier,
    cancel: CancellationToken,
}

impl AdminRoomsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, client: &HttpClient) {
        let result = tokio::select! {
            _ = self.cancel.cancelled() => return,
            result = client.list_rooms() => result,
        };
        match result {
            Ok(rooms) => self.rooms = rooms,
            Err(err) => {
                tracing::error!(error = %err, "failed to load rooms");
                self.notifier.error(err.user_message());
            }
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn create_route(&self) -> Route {
        Route::DashboardCreateRoom
    }

    /// Edit route for the highlighted room, if any
    pub fn edit_route(&self) -> Option<Route> {
        self.selected
            .as_ref()
            .map(|id| Route::DashboardEditRoom(id.clone()))
    }

    /// Delete a room and prune it from the local list on success
    pub async fn delete(&mut self, client: &HttpClient, id: &str) {
        match client.delete_room(id).await {
            Ok(()) => {
                self.rooms.retain(|room| room.id != id);
                if self.selected.as_deref() == Some(id) {
                    self.selected = None;
                }
            }
            Err(err) => {
                tracing::error!(error = %err, id, "failed to delete room");
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
    pub(crate) fn with_rooms(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            ..Default::default()
        }
    }
}

/// Room create/edit form fields
#[derive(Debug, Clone, Default, Validate)]
pub struct RoomForm {
    #[validate(url)]
    pub photos: String,
    #[validate(length(min = 1))]
    pub code_name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1))]
    pub price_per_night: i64,
    #[validate(range(min = 1))]
    pub capacity: i32,
    #[validate(range(min = 1))]
    pub beds_quantity: i32,
    /// Owning hotel, chosen from the dropdown
    #[validate(length(min = 1))]
    pub hotel_id: String,
}

impl RoomForm {
    /// Pre-populate the form for editing
    pub fn from_room(room: &Room) -> Self {
        Self {
            photos: room.photos.clone(),
            code_name: room.code_name.clone(),
            description: room.description.clone(),
            price_per_night: room.price_per_night,
            capacity: room.capacity,
            beds_quantity: room.beds_quantity,
            hotel_id: room.hotel_id.clone(),
        }
    }

    fn to_create(&self) -> RoomCreate {
        RoomCreate {
            photos: self.photos.clone(),
            code_name: self.code_name.clone(),
            description: self.description.clone(),
            price_per_night: self.price_per_night,
            capacity: self.capacity,
            beds_quantity: self.beds_quantity,
            hotel_id: self.hotel_id.clone(),
        }
    }

    fn to_update(&self) -> RoomUpdate {
        RoomUpdate {
            photos: Some(self.photos.clone()),
            code_name: Some(self.code_name.clone()),
            description: Some(self.description.clone()),
            price_per_night: Some(self.price_per_night),
            capacity: Some(self.capacity),
            beds_quantity: Some(self.beds_quantity),
            hotel_id: Some(self.hotel_id.clone()),
        }
    }
}

/// Create vs edit mode for the room editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(String),
}

/// Room create/edit screen
#[derive(Debug)]
pub struct RoomEditorView {
    mode: EditorMode,
    pub form: RoomForm,
    /// Options for the owning-hotel dropdown
    hotels: Vec<Hotel>,
    loading: bool,
    notifier: Notifier,
    cancel: CancellationToken,
}

impl RoomEditorView {
    pub fn create() -> Self {
        Self::with_mode(EditorMode::Create)
    }

    pub fn edit(room_id: impl Into<String>) -> Self {
        Self::with_mode(EditorMode::Edit(room_id.into()))
    }

    fn with_mode(mode: EditorMode) -> Self {
        Self {
            mode,
            form: RoomForm::default(),
            hotels: Vec::new(),
            loading: false,
            notifier: Notifier::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Fetch the hotel dropdown options and, in edit mode, the room
    pub async fn load(&mut self, client: &HttpClient) {
        let hotels = tokio::select! {
            _ = self.cancel.cancelled() => return,
            result = client.list_hotels() => match result {
                Ok(hotels) => hotels,
                Err(err) => {
                    tracing::error!(error = %err, "failed to load hotels");
                    self.notifier.error(err.user_message());
                    return;
                }
            },
        };
        self.hotels = hotels;

        let EditorMode::Edit(id) = self.mode.clone() else {
            return;
        };
        let result = tokio::select! {
            _ = self.cancel.cancelled() => return,
            result = client.get_room(&id) => result,
        };
        match result {
            Ok(room) => self.form = RoomForm::from_room(&room),
            Err(err) => {
                tracing::error!(error = %err, %id, "failed to load room");
                self.notifier.error(err.user_message());
            }
        }
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Mirrors the submit button's disabled state
    pub fn is_valid(&self) -> bool {
        self.form.validate().is_ok()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Submit; on success navigates back to the room list
    pub async fn submit(&mut self, client: &HttpClient) -> Option<Route> {
        if self.form.validate().is_err() {
            self.notifier.error("Revise los campos del formulario");
            return None;
        }

        self.loading = true;
        let result = match &self.mode {
            EditorMode::Create => client.create_room(&self.form.to_create()).await,
            EditorMode::Edit(id) => client.update_room(id, &self.form.to_update()).await,
        };
        self.loading = false;

        match result {
            Ok(()) => {
                let message = match self.mode {
                    EditorMode::Create => "Habitación creada exitosamente",
                    EditorMode::Edit(_) => "Habitación actualizada exitosamente",
                };
                self.notifier.info(message);
                Some(Route::DashboardRooms)
            }
            Err(err) => {
                tracing::warn!(error = %err, "room submit failed");
                self.notifier.error(err.user_message());
                None
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
}

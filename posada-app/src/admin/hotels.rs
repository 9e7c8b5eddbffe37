//! Admin hotel management: list, create, edit, delete

use posada_client::HttpClient;
use shared::models::{Hotel, HotelCreate, HotelUpdate};
use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::notify::Notifier;
use crate::routes::Route;

/// Admin hotel list screen
#[derive(Debug, Default)]
pub struct AdminHotelsView {
    hotels: Vec<Hotel>,
    selected: Option<String>,
    notifier: Notifier,
    cancel: CancellationToken,
}

impl AdminHotelsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, client: &HttpClient) {
        let result = tokio::select! {
            _ = self.cancel.cancelled() => return,
            result = client.list_hotels() => result,
        };
        match result {
            Ok(hotels) => self.hotels = hotels,
            Err(err) => {
                tracing::error!(error = %err, "failed to load hotels");
                self.notifier.error(err.user_message());
            }
        }
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Highlight one row; edit acts on the highlighted hotel
    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn create_route(&self) -> Route {
        Route::DashboardCreateHotel
    }

    /// Edit route for the highlighted hotel, if any
    pub fn edit_route(&self) -> Option<Route> {
        self.selected
            .as_ref()
            .map(|id| Route::DashboardEditHotel(id.clone()))
    }

    /// Delete a hotel and prune it from the local list on success
    pub async fn delete(&mut self, client: &HttpClient, id: &str) {
        match client.delete_hotel(id).await {
            Ok(()) => {
                self.hotels.retain(|hotel| hotel.id != id);
                if self.selected.as_deref() == Some(id) {
                    self.selected = None;
                }
            }
            Err(err) => {
                tracing::error!(error = %err, id, "failed to delete hotel");
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
    pub(crate) fn with_hotels(hotels: Vec<Hotel>) -> Self {
        Self {
            hotels,
            ..Default::default()
        }
    }
}

/// Hotel create/edit form fields
#[derive(Debug, Clone, Default, Validate)]
pub struct HotelForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(url)]
    pub photo: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(range(min = 1, max = 5))]
    pub ranking: i32,
    #[validate(range(min = 1))]
    pub best_price: i64,
}

impl HotelForm {
    /// Pre-populate the form for editing
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            description: hotel.description.clone(),
            photo: hotel.photo.clone(),
            country: hotel.country.clone(),
            city: hotel.city.clone(),
            address: hotel.address.clone(),
            ranking: hotel.ranking,
            best_price: hotel.best_price,
        }
    }

    fn to_create(&self) -> HotelCreate {
        HotelCreate {
            name: self.name.clone(),
            description: self.description.clone(),
            photo: self.photo.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            ranking: self.ranking,
            best_price: self.best_price,
        }
    }

    fn to_update(&self) -> HotelUpdate {
        HotelUpdate {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            photo: Some(self.photo.clone()),
            country: Some(self.country.clone()),
            city: Some(self.city.clone()),
            address: Some(self.address.clone()),
            ranking: Some(self.ranking),
            best_price: Some(self.best_price),
        }
    }
}

/// Create vs edit mode for the hotel editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(String),
}

/// Hotel create/edit screen
#[derive(Debug)]
pub struct HotelEditorView {
    mode: EditorMode,
    pub form: HotelForm,
    loading: bool,
    notifier: Notifier,
    cancel: CancellationToken,
}

impl HotelEditorView {
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            form: HotelForm::default(),
            loading: false,
            notifier: Notifier::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn edit(hotel_id: impl Into<String>) -> Self {
        Self {
            mode: EditorMode::Edit(hotel_id.into()),
            form: HotelForm::default(),
            loading: false,
            notifier: Notifier::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Edit mode: fetch the hotel and pre-populate the form
    pub async fn load(&mut self, client: &HttpClient) {
        let EditorMode::Edit(id) = self.mode.clone() else {
            return;
        };

        let result = tokio::select! {
            _ = self.cancel.cancelled() => return,
            result = client.get_hotel(&id) => result,
        };
        match result {
            Ok(detail) => self.form = HotelForm::from_hotel(&detail.hotel),
            Err(err) => {
                tracing::error!(error = %err, %id, "failed to load hotel");
                self.notifier.error(err.user_message());
            }
        }
    }

    /// Mirrors the submit button's disabled state
    pub fn is_valid(&self) -> bool {
        self.form.validate().is_ok()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Submit; on success navigates back to the hotel list
    pub async fn submit(&mut self, client: &HttpClient) -> Option<Route> {
        if self.form.validate().is_err() {
            self.notifier.error("Revise los campos del formulario");
            return None;
        }

        self.loading = true;
        let result = match &self.mode {
            EditorMode::Create => client.create_hotel(&self.form.to_create()).await,
            EditorMode::Edit(id) => client.update_hotel(id, &self.form.to_update()).await,
        };
        self.loading = false;

        match result {
            Ok(()) => {
                let message = match self.mode {
                    EditorMode::Create => "Hotel creado exitosamente",
                    EditorMode::Edit(_) => "Hotel actualizado exitosamente",
                };
                self.notifier.info(message);
                Some(Route::DashboardHotels)
            }
            Err(err) => {
                tracing::warn!(error = %err, "hotel submit failed");
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

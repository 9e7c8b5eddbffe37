//! Route table and session gating
//!
//! Client-side gating is advisory only: it checks for the presence of a
//! session before a view renders, and the server enforces real
//! authorization on every call. My-reservations is deliberately left
//! public, matching the deployed front end; the API rejects the fetch
//! for anonymous callers.

use posada_client::SessionStore;

/// Every screen the application can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    HotelDetail(String),
    Reservation(String),
    MyReservations,
    Login,
    Signup,
    Dashboard,
    DashboardHotels,
    DashboardCreateHotel,
    DashboardEditHotel(String),
    DashboardRooms,
    DashboardCreateRoom,
    DashboardEditRoom(String),
}

/// Who may enter a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    RequiresAuth,
    /// Login/signup: pointless with an active session
    RequiresAnonymous,
}

/// Gating decision for a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Allow,
    Redirect(Route),
}

impl Route {
    /// URL path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::HotelDetail(id) => format!("/hotelDetail/{}", id),
            Route::Reservation(room_id) => format!("/reservation/{}", room_id),
            Route::MyReservations => "/reservations/myreservations".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::DashboardHotels => "/dashboard/hotels".to_string(),
            Route::DashboardCreateHotel => "/dashboard/hotels/create".to_string(),
            Route::DashboardEditHotel(id) => format!("/dashboard/hotels/edit/{}", id),
            Route::DashboardRooms => "/dashboard/rooms".to_string(),
            Route::DashboardCreateRoom => "/dashboard/rooms/create".to_string(),
            Route::DashboardEditRoom(id) => format!("/dashboard/rooms/edit/{}", id),
        }
    }

    /// Parse a URL path into a route
    pub fn parse(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["hotelDetail", id] => Some(Route::HotelDetail(id.to_string())),
            ["reservation", room_id] => Some(Route::Reservation(room_id.to_string())),
            ["reservations", "myreservations"] => Some(Route::MyReservations),
            ["login"] => Some(Route::Login),
            ["signup"] => Some(Route::Signup),
            ["dashboard"] => Some(Route::Dashboard),
            ["dashboard", "hotels"] => Some(Route::DashboardHotels),
            ["dashboard", "hotels", "create"] => Some(Route::DashboardCreateHotel),
            ["dashboard", "hotels", "edit", id] => Some(Route::DashboardEditHotel(id.to_string())),
            ["dashboard", "rooms"] => Some(Route::DashboardRooms),
            ["dashboard", "rooms", "create"] => Some(Route::DashboardCreateRoom),
            ["dashboard", "rooms", "edit", id] => Some(Route::DashboardEditRoom(id.to_string())),
            _ => None,
        }
    }

    /// Access rule for this route
    pub fn access(&self) -> Access {
        match self {
            Route::Home | Route::HotelDetail(_) | Route::MyReservations => Access::Public,
            Route::Login | Route::Signup => Access::RequiresAnonymous,
            Route::Reservation(_)
            | Route::Dashboard
            | Route::DashboardHotels
            | Route::DashboardCreateHotel
            | Route::DashboardEditHotel(_)
            | Route::DashboardRooms
            | Route::DashboardCreateRoom
            | Route::DashboardEditRoom(_) => Access::RequiresAuth,
        }
    }
}

/// Decide whether the session may enter the route
pub fn resolve(route: &Route, session: &SessionStore) -> Gate {
    match route.access() {
        Access::Public => Gate::Allow,
        Access::RequiresAuth => {
            if session.is_authenticated() {
                Gate::Allow
            } else {
                Gate::Redirect(Route::Login)
            }
        }
        Access::RequiresAnonymous => {
            if session.is_authenticated() {
                Gate::Redirect(Route::Home)
            } else {
                Gate::Allow
            }
        }
    }
}

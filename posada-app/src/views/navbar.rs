//! Navbar session menu
//!
//! The entries depend on whether a session exists and on the admin
//! flag; sign-out destroys the session and lands on the login screen.

use posada_client::SessionStore;

use crate::routes::Route;

/// One entry of the user menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Login,
    Signup,
    Dashboard,
    MyReservations,
    SignOut,
}

/// Menu entries for the current session
pub fn menu_entries(session: &SessionStore) -> Vec<MenuEntry> {
    if !session.is_authenticated() {
        return vec![MenuEntry::Login, MenuEntry::Signup];
    }

    let mut entries = Vec::new();
    if session.is_admin() {
        entries.push(MenuEntry::Dashboard);
    }
    entries.push(MenuEntry::MyReservations);
    entries.push(MenuEntry::SignOut);
    entries
}

/// Destroy the session and navigate to login
pub fn sign_out(session: &mut SessionStore) -> Route {
    session.sign_out();
    Route::Login
}

//! Customer-facing views
//!
//! One module per screen; each holds the screen's state and operations.

pub mod auth;
pub mod home;
pub mod hotel_detail;
pub mod my_reservations;
pub mod navbar;
pub mod reservation;

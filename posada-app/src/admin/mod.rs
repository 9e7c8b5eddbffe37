//! Admin console views
//!
//! List views and create/edit forms for hotels and rooms. Gating is the
//! same advisory session check as every authenticated route; the server
//! enforces the admin role on each call.

pub mod hotels;
pub mod rooms;

//! Typed endpoint methods, grouped by resource
//!
//! Each module extends [`HttpClient`](crate::HttpClient) with the calls
//! for one backend resource.

mod admin;
mod auth;
mod hotels;
mod reservations;
mod rooms;

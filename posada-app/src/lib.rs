//! Posada App - view models for the booking front end
//!
//! Each view is the state and operations behind one screen, free of any
//! UI toolkit: views fetch through [`posada_client::HttpClient`], report
//! to the user through [`notify::Notifier`], and navigate by returning a
//! [`routes::Route`]. Every view owns a cancellation token that a host
//! cancels on teardown, so a slow response never mutates a dead view.

// This toolchain's stdlib gates signed div_ceil behind int_roundings
#![feature(int_roundings)]

pub mod admin;
pub mod notify;
pub mod routes;
pub mod views;

// Re-exports
pub use notify::{Level, Notification, Notifier};
pub use routes::{resolve, Access, Gate, Route};

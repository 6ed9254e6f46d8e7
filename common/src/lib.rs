//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod filter;
pub mod filter_display;
pub mod announcement;
pub mod url_param;
pub mod state_store;

//! Announcement catalog served to the frontend's server functions.

pub mod api;
pub mod catalog;

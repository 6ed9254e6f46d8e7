//! Announcement API handlers and module exports.

mod search_announcements;
pub use search_announcements::search_announcements;

mod find_announcement;
pub use find_announcement::{find_announcement, find_in_catalog, AnnouncementNotFound};

mod error_status;
pub use error_status::error_status_code;

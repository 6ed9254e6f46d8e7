//! Client API calls for announcement endpoints.

use common::announcement::{Announcement, AnnouncementQuery};
use dioxus::prelude::*;


#[server]
pub async fn search_announcements(query: AnnouncementQuery) -> Result<Vec<Announcement>, ServerFnError> {
    let x = backend::api::announcements::search_announcements(query).await;
    x.map_err(|e| {
        let code = backend::api::announcements::error_status_code(&e);
        ServerFnError::ServerError { message: e.to_string(), code, details: None }
    })
}

#[server]
pub async fn find_announcement(post_id: u64) -> Result<Announcement, ServerFnError> {
    let x = backend::api::announcements::find_announcement(post_id).await;
    x.map_err(|e| {
        let code = backend::api::announcements::error_status_code(&e);
        ServerFnError::ServerError { message: e.to_string(), code, details: None }
    })
}

use common::announcement::Announcement;

use crate::catalog::{shared_catalog, AnnouncementCatalog};


#[derive(Debug, thiserror::Error)]
#[error("Announcement {0} not found")]
pub struct AnnouncementNotFound(pub u64);

pub async fn find_announcement(post_id: u64) -> anyhow::Result<Announcement> {
    let catalog = shared_catalog().await?;
    find_in_catalog(catalog, post_id)
}

pub fn find_in_catalog(catalog: &AnnouncementCatalog, post_id: u64) -> anyhow::Result<Announcement> {
    match catalog.get(post_id) {
        Some(announcement) => Ok(announcement.clone()),
        None => Err(AnnouncementNotFound(post_id).into()),
    }
}

use common::{
    announcement::{Announcement, AnnouncementQuery, SortOrder},
    filter::Filter,
};

use crate::catalog::{shared_catalog, AnnouncementCatalog};


pub async fn search_announcements(query: AnnouncementQuery) -> anyhow::Result<Vec<Announcement>> {
    let catalog = shared_catalog().await?;
    query_catalog(catalog, &query)
}

pub fn query_catalog(catalog: &AnnouncementCatalog, query: &AnnouncementQuery) -> anyhow::Result<Vec<Announcement>> {
    query.filter.validate()?;
    let mut results: Vec<Announcement> = catalog
        .announcements()
        .iter()
        .filter(|a| announcement_matches(&query.filter, a))
        .cloned()
        .collect();
    sort_announcements(&mut results, query.order);
    tracing::debug!("{} announcements match {:?}", results.len(), query);
    Ok(results)
}

pub fn announcement_matches(filter: &Filter, announcement: &Announcement) -> bool {
    let departure = filter.departure.trim();
    if !departure.is_empty() && !announcement.departure.contains(departure) {
        return false;
    }
    let arrival = filter.arrival.trim();
    if !arrival.is_empty() && !announcement.arrival.contains(arrival) {
        return false;
    }

    // open bound when a date is unset; any overlap counts
    if let Some(start) = filter.start_date {
        if announcement.end_date < start {
            return false;
        }
    }
    if let Some(end) = filter.end_date {
        if announcement.start_date > end {
            return false;
        }
    }

    let detail = &filter.detail;
    if let Some(dog_size) = detail.dog_size {
        if announcement.dog_size != dog_size {
            return false;
        }
    }
    if let Some(has_kennel) = detail.has_kennel {
        if announcement.has_kennel != has_kennel {
            return false;
        }
    }
    if let Some(organization) = &detail.organization {
        if !announcement.organization.contains(organization.trim()) {
            return false;
        }
    }
    true
}

fn sort_announcements(announcements: &mut [Announcement], order: SortOrder) {
    match order {
        SortOrder::Deadline => announcements.sort_by(|a, b| {
            a.end_date.cmp(&b.end_date).then(a.post_id.cmp(&b.post_id))
        }),
        SortOrder::Recent => announcements.sort_by(|a, b| {
            b.created_at.cmp(&a.created_at).then(a.post_id.cmp(&b.post_id))
        }),
    }
}

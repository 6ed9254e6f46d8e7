//! Announcement summaries and the query sent to the announcement catalog.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{filter::{DogSize, Filter}, filter_display::format_date_range};


/// A volunteer transport request as shown in the search list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub post_id: u64,
    pub image_url: String,
    pub departure: String,
    pub arrival: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub organization: String,
    pub has_kennel: bool,
    pub dog_size: DogSize,
    pub created_at: NaiveDateTime,
}

impl Announcement {
    pub fn location_label(&self) -> String {
        format!("{} -> {}", self.departure, self.arrival)
    }

    pub fn date_label(&self) -> String {
        format_date_range(self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOrder {
    /// Closest deadline first.
    #[default]
    Deadline,
    /// Most recently posted first.
    Recent,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Deadline => SortOrder::Recent,
            SortOrder::Recent => SortOrder::Deadline,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Deadline => "마감순",
            SortOrder::Recent => "최신순",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnnouncementQuery {
    pub filter: Filter,
    pub order: SortOrder,
}

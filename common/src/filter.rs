//! Search filter models shared by the search screen and the filter editor.

use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};


/// Constraints the user picked for browsing announcements.
///
/// The filter travels between screens as a whole value: screens never patch
/// single fields of somebody else's filter, they build a new one and send it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Filter {
    pub departure: String,
    pub arrival: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub detail: Detail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Detail {
    pub dog_size: Option<DogSize>,
    pub has_kennel: Option<bool>,
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DogSize {
    Big,
    Middle,
    Small,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("start date {start} is after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}

impl Filter {
    /// True when any field differs from its default. Drives the chip bar.
    pub fn is_not_empty(&self) -> bool {
        !self.departure.is_empty()
            || !self.arrival.is_empty()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.detail.is_not_empty()
    }

    pub fn has_route(&self) -> bool {
        !self.departure.is_empty() && !self.arrival.is_empty()
    }

    /// Both ends of the date range, when both are set.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start_date.zip(self.end_date)
    }

    pub fn has_date_range(&self) -> bool {
        self.date_range().is_some()
    }

    /// Checks that the date range is not inverted. Half-open ranges are fine.
    pub fn validate(&self) -> Result<(), FilterError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(FilterError::InvertedDateRange { start, end });
            }
        }
        Ok(())
    }
}

impl Detail {
    pub fn is_not_empty(&self) -> bool {
        self.dog_size.is_some() || self.has_kennel.is_some() || self.organization.is_some()
    }
}

impl DogSize {
    pub const ALL: [DogSize; 3] = [DogSize::Big, DogSize::Middle, DogSize::Small];

    pub fn display_name(self) -> &'static str {
        match self {
            DogSize::Big => "대형견",
            DogSize::Middle => "중형견",
            DogSize::Small => "소형견",
        }
    }
}

impl Display for DogSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_filter_is_empty() {
        let filter = Filter::default();
        assert_eq!(filter.departure, "");
        assert_eq!(filter.arrival, "");
        assert_eq!(filter.start_date, None);
        assert_eq!(filter.end_date, None);
        assert_eq!(filter.detail, Detail::default());
        assert!(!filter.is_not_empty());
    }

    #[test]
    fn test_route_makes_filter_not_empty() {
        let filter = Filter {
            departure: "Seoul".to_string(),
            arrival: "Busan".to_string(),
            ..Default::default()
        };
        assert!(filter.is_not_empty());
        assert!(filter.has_route());
        assert!(!filter.has_date_range());
    }

    #[test]
    fn test_each_field_alone_makes_filter_not_empty() {
        let cases = [
            Filter { departure: "Seoul".to_string(), ..Default::default() },
            Filter { arrival: "Busan".to_string(), ..Default::default() },
            Filter { start_date: Some(date(2023, 11, 8)), ..Default::default() },
            Filter { end_date: Some(date(2023, 11, 8)), ..Default::default() },
            Filter { detail: Detail { has_kennel: Some(false), ..Default::default() }, ..Default::default() },
        ];
        for filter in cases {
            assert!(filter.is_not_empty(), "{filter:?}");
        }
    }

    #[test]
    fn test_detail_predicate_matches_fields() {
        let sizes = [None, Some(DogSize::Small)];
        let kennels = [None, Some(true)];
        let orgs = [None, Some("행복한 보호소".to_string())];
        for dog_size in sizes {
            for has_kennel in kennels {
                for organization in orgs.clone() {
                    let expected = dog_size.is_some() || has_kennel.is_some() || organization.is_some();
                    let detail = Detail { dog_size, has_kennel, organization };
                    assert_eq!(detail.is_not_empty(), expected, "{detail:?}");
                }
            }
        }
    }

    #[test]
    fn test_big_dog_display_name() {
        let detail = Detail { dog_size: Some(DogSize::Big), ..Default::default() };
        assert!(detail.is_not_empty());
        assert_eq!(DogSize::Big.display_name(), "대형견");
        assert_eq!(DogSize::Middle.to_string(), "중형견");
        assert_eq!(DogSize::Small.to_string(), "소형견");
    }

    #[test]
    fn test_date_range_needs_both_ends() {
        let mut filter = Filter { start_date: Some(date(2023, 11, 8)), ..Default::default() };
        assert_eq!(filter.date_range(), None);
        assert!(!filter.has_date_range());

        filter.end_date = Some(date(2023, 11, 10));
        assert_eq!(filter.date_range(), Some((date(2023, 11, 8), date(2023, 11, 10))));
        assert!(filter.has_date_range());

        filter.start_date = None;
        assert!(!filter.has_date_range());
    }

    #[test]
    fn test_validate_date_range() {
        let mut filter = Filter {
            start_date: Some(date(2023, 11, 10)),
            end_date: Some(date(2023, 11, 8)),
            ..Default::default()
        };
        assert_eq!(
            filter.validate(),
            Err(FilterError::InvertedDateRange { start: date(2023, 11, 10), end: date(2023, 11, 8) })
        );

        filter.end_date = Some(date(2023, 11, 10));
        assert_eq!(filter.validate(), Ok(()));

        filter.end_date = None;
        assert_eq!(filter.validate(), Ok(()));

        filter.start_date = None;
        filter.end_date = Some(date(2023, 11, 8));
        assert_eq!(filter.validate(), Ok(()));
    }
}

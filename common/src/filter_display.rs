//! Labels for the filter chips shown above the search results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::Filter;

pub const LOCATION_PLACEHOLDER: &str = "지역";
pub const DATE_PLACEHOLDER: &str = "날짜";
pub const DETAIL_LABEL: &str = "상세";

// month without padding, day zero padded: "11월 08일"
const DATE_PATTERN: &str = "%-m월 %d일";


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterChipKind {
    Location,
    Date,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChip {
    pub kind: FilterChipKind,
    pub label: String,
    pub is_selected: bool,
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_PATTERN).to_string()
}

/// A single date when both ends are equal, `"start - end"` otherwise.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        return format_date(start);
    }
    format!("{} - {}", format_date(start), format_date(end))
}

pub fn location_chip_label(filter: &Filter) -> String {
    if filter.has_route() {
        format!("{} -> {}", filter.departure, filter.arrival)
    } else {
        LOCATION_PLACEHOLDER.to_string()
    }
}

pub fn date_chip_label(filter: &Filter) -> String {
    match filter.date_range() {
        Some((start, end)) => format_date_range(start, end),
        None => DATE_PLACEHOLDER.to_string(),
    }
}

pub fn filter_chips(filter: &Filter) -> [FilterChip; 3] {
    [
        FilterChip {
            kind: FilterChipKind::Location,
            label: location_chip_label(filter),
            is_selected: !filter.departure.is_empty(),
        },
        FilterChip {
            kind: FilterChipKind::Date,
            label: date_chip_label(filter),
            is_selected: filter.start_date.is_some(),
        },
        FilterChip {
            kind: FilterChipKind::Detail,
            label: DETAIL_LABEL.to_string(),
            is_selected: filter.detail.is_not_empty(),
        },
    ]
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Detail, DogSize};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_range() {
        assert_eq!(format_date(date(2023, 11, 8)), "11월 08일");
        assert_eq!(format_date_range(date(2023, 3, 8), date(2023, 3, 8)), "3월 08일");
        assert_eq!(format_date_range(date(2023, 3, 8), date(2023, 11, 21)), "3월 08일 - 11월 21일");
    }

    #[test]
    fn test_location_chip_needs_both_ends() {
        let filter = Filter {
            departure: "Seoul".to_string(),
            arrival: "Busan".to_string(),
            ..Default::default()
        };
        assert_eq!(location_chip_label(&filter), "Seoul -> Busan");

        let only_departure = Filter { departure: "Seoul".to_string(), ..Default::default() };
        assert_eq!(location_chip_label(&only_departure), LOCATION_PLACEHOLDER);
    }

    #[test]
    fn test_date_chip_needs_both_dates() {
        let half_open = Filter { start_date: Some(date(2023, 11, 8)), ..Default::default() };
        assert_eq!(date_chip_label(&half_open), DATE_PLACEHOLDER);
        let end_only = Filter { end_date: Some(date(2023, 11, 9)), ..Default::default() };
        assert_eq!(date_chip_label(&end_only), DATE_PLACEHOLDER);

        let full = Filter {
            start_date: Some(date(2023, 11, 8)),
            end_date: Some(date(2023, 11, 9)),
            ..Default::default()
        };
        assert_eq!(date_chip_label(&full), "11월 08일 - 11월 09일");
    }

    #[test]
    fn test_chip_selection_follows_filter() {
        let filter = Filter {
            departure: "Seoul".to_string(),
            start_date: Some(date(2023, 11, 8)),
            detail: Detail { dog_size: Some(DogSize::Small), ..Default::default() },
            ..Default::default()
        };
        let [location, date_chip, detail] = filter_chips(&filter);
        assert_eq!(location.kind, FilterChipKind::Location);
        assert!(location.is_selected);
        assert_eq!(location.label, LOCATION_PLACEHOLDER);
        assert!(date_chip.is_selected);
        assert!(detail.is_selected);
        assert_eq!(detail.label, DETAIL_LABEL);

        assert!(filter_chips(&Filter::default()).iter().all(|chip| !chip.is_selected));
    }
}

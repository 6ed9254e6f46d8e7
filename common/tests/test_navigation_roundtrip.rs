use chrono::NaiveDate;
use common::{
    filter::{Detail, DogSize, Filter},
    filter_display::location_chip_label,
    state_store::FilterStore,
    url_param::{FilterArg, UrlParam},
};

fn full_filter() -> Filter {
    Filter {
        departure: "서울시 강남구".to_string(),
        arrival: "부산시 해운대구".to_string(),
        start_date: NaiveDate::from_ymd_opt(2023, 11, 8),
        end_date: NaiveDate::from_ymd_opt(2023, 11, 21),
        detail: Detail {
            dog_size: Some(DogSize::Big),
            has_kennel: Some(false),
            organization: Some("행복한 보호소".to_string()),
        },
    }
}

#[test]
fn test_default_filter_roundtrip() {
    let encoded = UrlParam(Filter::default()).to_string();
    let decoded: UrlParam<Filter> = encoded.parse().unwrap();
    assert_eq!(decoded.0, Filter::default());
}

#[test]
fn test_full_filter_roundtrip() {
    let encoded = UrlParam(full_filter()).to_string();
    let decoded: UrlParam<Filter> = encoded.parse().unwrap();
    assert_eq!(decoded.0, full_filter());
}

#[test]
fn test_partial_filter_keeps_unset_fields_unset() {
    let filter = Filter {
        end_date: NaiveDate::from_ymd_opt(2024, 1, 2),
        detail: Detail { has_kennel: Some(true), ..Default::default() },
        ..Default::default()
    };
    let decoded: FilterArg = FilterArg(filter.clone()).to_string().parse().unwrap();
    assert_eq!(decoded.into_filter(), filter);
}

#[test]
fn test_encoded_filter_is_a_single_path_segment() {
    let encoded = FilterArg(full_filter()).to_string();
    assert!(!encoded.is_empty());
    assert!(!encoded.contains('/'));
    assert!(!encoded.contains('+'));
}

#[test]
fn test_malformed_argument_falls_back_to_default() {
    for malformed in ["", "@@@", "AAAA", "bm90IGNib3I="] {
        let decoded: FilterArg = malformed.parse().unwrap();
        assert_eq!(decoded, FilterArg::empty(), "{malformed:?}");
    }
}

#[test]
fn test_search_screen_flow() {
    // search screen enters with the route argument
    let entered: FilterArg = FilterArg::empty().to_string().parse().unwrap();
    let store = FilterStore::new(entered.into_filter());
    assert!(!store.filter().is_not_empty());

    // editor returns a whole new filter through the route
    let edited = Filter {
        departure: "Seoul".to_string(),
        arrival: "Busan".to_string(),
        ..Default::default()
    };
    let returned: FilterArg = FilterArg::from(edited.clone()).to_string().parse().unwrap();
    store.set_filter(returned.into_filter());

    assert_eq!(store.filter(), edited);
    assert!(store.filter().is_not_empty());
    assert_eq!(location_chip_label(&store.filter()), "Seoul -> Busan");
}

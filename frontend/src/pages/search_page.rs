use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowBack};

use common::{announcement::SortOrder, filter::Filter, filter_display::location_chip_label, url_param::FilterArg};
use crate::{
    components::{search_components::{announcement_list::AnnouncementList, filter_chip_bar::FilterChipBar, search_bar::SearchBar, sort_button::SortButton}, suspend_boundary::SuspendWrapper},
    data_definitions::filter_state::{use_filter_state, FilterState},
    routes::Route,
};


fn page_title(filter: &Filter) -> String {
    if filter.has_route() {
        format!("connectdog 검색: {}", location_chip_label(filter))
    } else {
        "connectdog 검색".to_string()
    }
}

/// Search page
#[component]
pub fn SearchPage(filter: FilterArg) -> Element {
    rsx! {
        Title { "{page_title(&filter.0)}" }
        SearchPageRootComponent { filter: filter.0.clone() }
    }
}

#[component]
fn SearchPageRootComponent(filter: ReadSignal<Filter>) -> Element {
    let filter_state = use_filter_state(filter);
    use_context_provider(move || filter_state);
    let mut sort_order = use_signal(SortOrder::default);

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            SearchTopAppBar {}
            SearchBar {}
            if filter_state.current().is_not_empty() {
                FilterChipBar {}
            }
            SortButton {
                sort_order,
                on_toggle: move |_| {
                    let toggled = sort_order.peek().toggled();
                    sort_order.set(toggled);
                },
            }
            div {
                id: "x-search-results",
                style: "flex-grow: 1; min-height: 0;",
                SuspendWrapper { AnnouncementList { sort_order } }
            }
        }
    }
}

#[component]
fn SearchTopAppBar() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                height: 56px;
                padding: 0 12px;
                flex-shrink: 0;
            ",
            Link {
                to: Route::HomePage {},
                Icon { icon: MdArrowBack, style: "width: 24px; height: 24px; color: #1A1A1A;" }
            }
            span { style: "font-size: 18px; font-weight: 600;", "검색" }
        }
    }
}

/// The filter of the current search page visit.
pub fn use_search_filter() -> FilterState {
    use_context::<FilterState>()
}

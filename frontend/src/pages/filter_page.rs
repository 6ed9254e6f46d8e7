use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use common::{filter::{Filter, FilterError}, url_param::FilterArg};
use crate::{
    components::filter_components::{date_inputs::DateInputs, detail_inputs::DetailInputs, location_inputs::LocationInputs},
    routes::Route,
};


/// Filter editor page
#[component]
pub fn FilterPage(filter: FilterArg) -> Element {
    rsx! {
        Title { "connectdog 필터" }
        FilterEditor { original_filter: filter.0.clone() }
    }
}

#[component]
fn FilterEditor(original_filter: ReadSignal<Filter>) -> Element {
    let mut edited_filter = use_signal(|| original_filter.read().clone());
    // when url changes (the read signal given to us), we need to update the signals, as they are not reset by navigation.
    use_effect(move || {
        let new_filter = original_filter.read().clone();
        edited_filter.set(new_filter);
    });
    let mut validation_error = use_signal(|| None::<String>);
    let apply = move |_: MouseEvent| {
        let filter = edited_filter.read().clone();
        match filter.validate() {
            Ok(()) => {
                validation_error.set(None);
                // the search page receives the whole new filter through the route
                navigator().push(Route::search_page_from_filter(filter));
            }
            Err(FilterError::InvertedDateRange { start, end }) => {
                dioxus::logger::tracing::info!("Refusing to apply filter with inverted dates: {start} > {end}");
                validation_error.set(Some("시작일이 종료일보다 늦어요.".to_string()));
            }
        }
    };
    let reset = move |_: MouseEvent| {
        validation_error.set(None);
        edited_filter.set(Filter::default());
    };
    let close = move |_: MouseEvent| {
        navigator().push(Route::search_page_from_filter(original_filter.read().clone()));
    };

    rsx! {
        div {
            id: "x-filter-editor",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    height: 56px;
                    padding: 0 16px;
                    flex-shrink: 0;
                ",
                span { style: "font-size: 18px; font-weight: 600;", "필터" }
                button {
                    style: "border: none; background: none;",
                    onclick: close,
                    Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
                }
            }
            div {
                style: "flex-grow: 1; overflow-y: auto;",
                LocationInputs { edited_filter }
                DateInputs { edited_filter }
                DetailInputs { edited_filter }
            }
            if let Some(error) = validation_error.read().clone() {
                div {
                    style: "padding: 8px 20px; color: #E5484D; font-size: 13px;",
                    "{error}"
                }
            }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 8px;
                    padding: 12px 20px 20px 20px;
                    flex-shrink: 0;
                ",
                button {
                    style: "flex: 1; padding: 14px; border-radius: 6px; border: 1px solid #D9D9D9; background: white; font-size: 15px;",
                    onclick: reset,
                    "초기화"
                }
                button {
                    style: "flex: 2; padding: 14px; border-radius: 6px; border: none; background: #FF7E35; color: white; font-size: 15px; font-weight: 600;",
                    onclick: apply,
                    "적용하기"
                }
            }
        }
    }
}

use dioxus::prelude::*;
use common::filter::Filter;

use super::{SECTION_STYLE, SECTION_TITLE_STYLE, TEXT_INPUT_STYLE};


#[component]
pub fn LocationInputs(edited_filter: Signal<Filter>) -> Element {
    let mut edited_filter = edited_filter;
    rsx! {
        div {
            style: SECTION_STYLE,
            span { style: SECTION_TITLE_STYLE, "지역" }
            input {
                r#type: "text",
                placeholder: "출발지",
                style: TEXT_INPUT_STYLE,
                value: "{edited_filter.read().departure}",
                oninput: move |event: Event<FormData>| {
                    edited_filter.write().departure = event.value();
                },
            }
            input {
                r#type: "text",
                placeholder: "도착지",
                style: TEXT_INPUT_STYLE,
                value: "{edited_filter.read().arrival}",
                oninput: move |event: Event<FormData>| {
                    edited_filter.write().arrival = event.value();
                },
            }
        }
    }
}

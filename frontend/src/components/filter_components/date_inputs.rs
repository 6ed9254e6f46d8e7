use chrono::NaiveDate;
use dioxus::prelude::*;
use common::filter::Filter;

use super::{SECTION_STYLE, SECTION_TITLE_STYLE, TEXT_INPUT_STYLE};

// format of <input type="date"> values
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).ok()
}

fn input_date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_DATE_FORMAT).to_string()).unwrap_or_default()
}


#[component]
pub fn DateInputs(edited_filter: Signal<Filter>) -> Element {
    let mut edited_filter = edited_filter;
    let start_value = input_date_value(edited_filter.read().start_date);
    let end_value = input_date_value(edited_filter.read().end_date);
    rsx! {
        div {
            style: SECTION_STYLE,
            span { style: SECTION_TITLE_STYLE, "날짜" }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                input {
                    r#type: "date",
                    style: TEXT_INPUT_STYLE,
                    value: "{start_value}",
                    oninput: move |event: Event<FormData>| {
                        edited_filter.write().start_date = parse_input_date(&event.value());
                    },
                }
                span { "-" }
                input {
                    r#type: "date",
                    style: TEXT_INPUT_STYLE,
                    value: "{end_value}",
                    oninput: move |event: Event<FormData>| {
                        edited_filter.write().end_date = parse_input_date(&event.value());
                    },
                }
            }
        }
    }
}

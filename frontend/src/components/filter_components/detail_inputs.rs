use dioxus::prelude::*;
use common::filter::{DogSize, Filter};

use super::{SECTION_STYLE, SECTION_TITLE_STYLE, TEXT_INPUT_STYLE};


#[component]
pub fn DetailInputs(edited_filter: Signal<Filter>) -> Element {
    let mut edited_filter = edited_filter;
    let selected_size = edited_filter.read().detail.dog_size;
    let has_kennel = edited_filter.read().detail.has_kennel;
    let organization = edited_filter.read().detail.organization.clone().unwrap_or_default();

    rsx! {
        div {
            style: SECTION_STYLE,
            span { style: SECTION_TITLE_STYLE, "상세" }

            span { style: "font-size: 13px; color: #6E6E6E;", "견종 크기" }
            div {
                style: "display: flex; flex-direction: row; gap: 8px;",
                for dog_size in DogSize::ALL {
                    OptionButton {
                        key: "{dog_size:?}",
                        label: dog_size.display_name().to_string(),
                        selected: selected_size == Some(dog_size),
                        onclick: move |_| {
                            // tapping the selected size clears it
                            let mut filter = edited_filter.write();
                            filter.detail.dog_size = if filter.detail.dog_size == Some(dog_size) { None } else { Some(dog_size) };
                        },
                    }
                }
            }

            span { style: "font-size: 13px; color: #6E6E6E;", "켄넬" }
            div {
                style: "display: flex; flex-direction: row; gap: 8px;",
                for (label, value) in [("상관없음", None), ("있음", Some(true)), ("없음", Some(false))] {
                    OptionButton {
                        key: "{label}",
                        label: label.to_string(),
                        selected: has_kennel == value,
                        onclick: move |_| {
                            edited_filter.write().detail.has_kennel = value;
                        },
                    }
                }
            }

            span { style: "font-size: 13px; color: #6E6E6E;", "단체" }
            input {
                r#type: "text",
                placeholder: "단체 이름",
                style: TEXT_INPUT_STYLE,
                value: "{organization}",
                oninput: move |event: Event<FormData>| {
                    let value = event.value();
                    edited_filter.write().detail.organization = if value.trim().is_empty() { None } else { Some(value) };
                },
            }
        }
    }
}

#[component]
fn OptionButton(label: String, selected: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let (border, color) = if selected { ("#FF7E35", "#FF7E35") } else { ("#D9D9D9", "#6E6E6E") };
    rsx! {
        button {
            style: "
                padding: 8px 14px;
                border-radius: 6px;
                border: 1px solid {border};
                background: white;
                color: {color};
                font-size: 13px;
            ",
            onclick: move |event| onclick.call(event),
            "{label}"
        }
    }
}

//! Chips summarizing the active filter dimensions.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowDropDown};
use common::filter_display::{filter_chips, FilterChip};

use crate::{pages::search_page::use_search_filter, routes::Route};


#[component]
pub fn FilterChipBar() -> Element {
    let filter_state = use_search_filter();
    let chips = use_memo(move || filter_chips(&filter_state.current()));
    let open_filter_editor = Callback::new(move |_: ()| {
        navigator().push(Route::filter_page_from_filter(filter_state.current()));
    });

    rsx! {
        div {
            id: "x-filter-chip-bar",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                padding: 4px 13px 6px 13px;
                overflow-x: auto;
                flex-shrink: 0;
            ",
            for chip in chips.read().iter().cloned() {
                FilterChipButton { key: "{chip.kind:?}", chip, onclick: open_filter_editor }
            }
        }
    }
}

#[component]
fn FilterChipButton(chip: FilterChip, onclick: Callback<()>) -> Element {
    let color = if chip.is_selected { "#FF7E35" } else { "#B4B4B4" };
    rsx! {
        button {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                padding: 4px 12px;
                border: 1px solid {color};
                border-radius: 9999px;
                background: white;
                color: {color};
                font-size: 12px;
                white-space: nowrap;
            ",
            onclick: move |_| onclick(()),
            "{chip.label}"
            Icon { icon: MdArrowDropDown, style: "width: 16px; height: 16px; color: {color};" }
        }
    }
}

//! Search bar that opens the filter editor.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::{pages::search_page::use_search_filter, routes::Route};


#[component]
pub fn SearchBar() -> Element {
    let filter_state = use_search_filter();
    let open_filter_editor = move |_: MouseEvent| {
        navigator().push(Route::filter_page_from_filter(filter_state.current()));
    };

    rsx! {
        div {
            id: "x-search-bar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                margin: 6px 13px;
                padding: 15px 12px;
                border-radius: 6px;
                background-color: #F4F4F4;
                cursor: pointer;
            ",
            onclick: open_filter_editor,
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #A0A0A0;" }
            span {
                style: "font-size: 14px; color: #8C8C8C;",
                "어디로 이동하나요?"
            }
        }
    }
}

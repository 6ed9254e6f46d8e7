use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdSort};
use common::announcement::SortOrder;


#[component]
pub fn SortButton(sort_order: ReadSignal<SortOrder>, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                justify-content: flex-end;
                padding: 20px 20px 0 20px;
                flex-shrink: 0;
            ",
            button {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 4px;
                    border: none;
                    background: none;
                    color: #6E6E6E;
                    font-size: 14px;
                ",
                onclick: move |_| on_toggle.call(()),
                "{sort_order.read().label()}"
                Icon { icon: MdSort, style: "width: 18px; height: 18px;" }
            }
        }
    }
}

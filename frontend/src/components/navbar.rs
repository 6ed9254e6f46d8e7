//! Bottom tab bar layout.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::{Icon, IconShape};

use common::filter::Filter;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared layout: page content above a bottom tab bar.
#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    // the filter editor is a full screen step of the search flow
    let show_tab_bar = !matches!(route, Route::FilterPage { .. });

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
                max-width: 640px;
                margin: 0 auto;
            ",

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 0;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }

            if show_tab_bar {
                NavbarTabs { current: route }
            }
        }
    }
}

#[component]
fn NavbarTabs(current: Route) -> Element {
    let on_home = matches!(current, Route::HomePage {});
    let on_search = matches!(current, Route::SearchPage { .. } | Route::AnnouncementPage { .. });
    rsx! {
        div {
            id: "x-nav-tabs",
            style: "
                display: flex;
                flex-direction: row;
                justify-content: space-around;
                align-items: center;
                height: 64px;
                border-top: 1px solid #E6E6E6;
                background-color: white;
                flex-shrink: 0;
            ",
            TabLink { to: Route::HomePage {}, icon: MdHome, label: "홈", selected: on_home }
            TabLink { to: Route::search_page_from_filter(Filter::default()), icon: MdSearch, label: "검색", selected: on_search }
        }
    }
}

#[component]
fn TabLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String, selected: bool) -> Element {
    let color = if selected { "#FF7E35" } else { "#A0A0A0" };
    rsx! {
        Link {
            to: to,
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2px;
                    color: {color};
                    font-size: 11px;
                ",
                Icon { icon: icon, style: "width: 24px; height: 24px;" }
                "{label}"
            }
        }
    }
}

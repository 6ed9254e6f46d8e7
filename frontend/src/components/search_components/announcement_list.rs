//! Announcement list re-queried whenever the filter or the sort order changes.

use dioxus::prelude::*;

use common::announcement::{AnnouncementQuery, SortOrder};
use crate::{
    api::announcement_api::search_announcements,
    components::{error_boundary::ComponentErrorDisplay, search_components::announcement_card::AnnouncementCard, suspend_boundary::LoadingIndicator},
    pages::search_page::use_search_filter,
};


#[component]
pub fn AnnouncementList(sort_order: ReadSignal<SortOrder>) -> Element {
    let filter_state = use_search_filter();
    let mut search_result = use_resource(move || {
        let query = AnnouncementQuery {
            filter: filter_state.current(),
            order: *sort_order.read(),
        };
        search_announcements(query)
    });
    // the resource keeps the previous result around; drop it so a stale list is not shown
    use_effect(move || {
        let _ = filter_state.current();
        let _ = sort_order.read();
        search_result.clear();
        search_result.restart();
    });

    let search_result = search_result.read();
    let announcements = match search_result.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(announcements)) => announcements.clone(),
        None => return rsx! { LoadingIndicator {} },
    };

    if announcements.is_empty() {
        return rsx! {
            div {
                style: "padding: 40px 20px; text-align: center; color: #8C8C8C; font-size: 14px;",
                "조건에 맞는 공고가 없어요."
            }
        };
    }

    rsx! {
        ul {
            id: "x-announcement-list",
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
            ",
            for announcement in announcements.into_iter() {
                li {
                    key: "{announcement.post_id}",
                    AnnouncementCard { announcement }
                }
            }
        }
    }
}

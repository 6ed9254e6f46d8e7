//! Announcement summary card.

use dioxus::prelude::*;
use common::announcement::Announcement;

use crate::routes::Route;


#[component]
pub fn AnnouncementCard(announcement: ReadSignal<Announcement>) -> Element {
    let Announcement {
        post_id,
        image_url,
        organization,
        has_kennel,
        ..
    } = announcement.read().clone();
    let location = announcement.read().location_label();
    let date = announcement.read().date_label();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 16px;
                padding: 20px;
                border-bottom: 1px solid #E6E6E6;
                cursor: pointer;
            ",
            onclick: move |_| {
                navigator().push(Route::AnnouncementPage { post_id });
            },
            AnnouncementImage { image_url }
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    min-width: 0;
                ",
                span {
                    style: "font-size: 16px; font-weight: 600; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "{location}"
                }
                AnnouncementContent { date, organization, has_kennel }
            }
        }
    }
}

#[component]
fn AnnouncementImage(image_url: String) -> Element {
    rsx! {
        if image_url.is_empty() {
            div { style: "width: 88px; height: 88px; border-radius: 8px; background: #EFEFEF; flex-shrink: 0;" }
        } else {
            img {
                src: "{image_url}",
                alt: "dog",
                style: "width: 88px; height: 88px; border-radius: 8px; object-fit: cover; flex-shrink: 0;",
            }
        }
    }
}

/// Date, organization and kennel rows shared by the card and the detail page.
#[component]
pub fn AnnouncementContent(date: String, organization: String, has_kennel: bool) -> Element {
    let kennel = if has_kennel { "켄넬 있음" } else { "켄넬 없음" };
    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: auto 1fr;
                column-gap: 10px;
                row-gap: 2px;
                font-size: 13px;
            ",
            span { style: "color: #8C8C8C;", "일정" }
            span { "{date}" }
            span { style: "color: #8C8C8C;", "단체" }
            span { "{organization}" }
            span { style: "color: #8C8C8C;", "켄넬" }
            span { "{kennel}" }
        }
    }
}

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowBack};

use crate::{
    api::announcement_api::find_announcement,
    components::{error_boundary::ComponentErrorDisplay, search_components::announcement_card::AnnouncementContent, suspend_boundary::LoadingIndicator},
};


/// Announcement detail page
#[component]
pub fn AnnouncementPage(post_id: u64) -> Element {
    rsx! {
        AnnouncementDetail { post_id }
    }
}

#[component]
fn AnnouncementDetail(post_id: ReadSignal<u64>) -> Element {
    let announcement = use_resource(move || find_announcement(*post_id.read()));
    let announcement = announcement.read();
    let announcement = match announcement.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(a)) => a.clone(),
        None => return rsx! { LoadingIndicator {} },
    };

    rsx! {
        Title { "connectdog: {announcement.location_label()}" }
        div {
            id: "x-announcement-page",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
                overflow-y: auto;
            ",
            div {
                style: "display: flex; align-items: center; height: 56px; padding: 0 12px; flex-shrink: 0;",
                button {
                    style: "border: none; background: none;",
                    onclick: move |_| navigator().go_back(),
                    Icon { icon: MdArrowBack, style: "width: 24px; height: 24px;" }
                }
            }
            if !announcement.image_url.is_empty() {
                img {
                    src: "{announcement.image_url}",
                    alt: "dog",
                    style: "width: 100%; max-height: 360px; object-fit: cover;",
                }
            }
            div {
                style: "display: flex; flex-direction: column; gap: 12px; padding: 20px;",
                span { style: "font-size: 20px; font-weight: 600;", "{announcement.location_label()}" }
                span { style: "font-size: 13px; color: #FF7E35;", "{announcement.dog_size}" }
                AnnouncementContent {
                    date: announcement.date_label(),
                    organization: announcement.organization.clone(),
                    has_kennel: announcement.has_kennel,
                }
            }
        }
    }
}

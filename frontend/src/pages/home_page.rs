use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::filter::Filter;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "connectdog" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 32px 20px;
                background: #F5F6F8;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}
            SearchCard {}
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: baseline;
                gap: 6px;
                color: #0F172A;
                font-size: 32px;
                font-weight: 600;
                letter-spacing: -0.02em;
            ",
            span { "connect" }
            span { style: "color:#FF7E35;", "dog" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 18px;
                line-height: 1.6;
                max-width: 480px;
            ",
            "이동봉사로 유기견의 새 가족 찾기를 도와주세요. 출발지와 도착지, 일정에 맞는 공고를 찾아보세요."
        }
    }
}

#[component]
fn SearchCard() -> Element {
    rsx! {
        Link {
            to: Route::search_page_from_filter(Filter::default()),
            div {
                id: "x-card-search",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 14px;
                    border-radius: 16px;
                    padding: 20px;
                    background: linear-gradient(135deg, #FF7E35 0%, #FFA564 100%);
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                Icon { icon: MdSearch, style: "width: 28px; height: 28px;" }
                div {
                    style: "display:flex; flex-direction: column; gap: 4px;",
                    span { style: "font-size: 20px; font-weight: 600;", "이동봉사 공고 찾기" }
                    span { style: "font-size: 14px; color: rgba(255,255,255,0.9);", "지역, 날짜, 상세 조건으로 검색할 수 있어요." }
                }
            }
        }
    }
}

//! Error boundary components for rendering failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("Render error in {}: {:?}", boundary_name.read(), err);
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px; padding: 24px;",
                        h2 { style: "color: #E5484D; margin: 0;", "문제가 발생했어요" }
                        p { style: "color: #6E6E6E; margin: 0;", "화면: {boundary_name}" }
                        Link {
                            to: Route::HomePage {},
                            style: "color: #FF7E35;",
                            "홈으로 돌아가기"
                        }
                        pre {
                            style: "color: #1A1A1A; background: #F4F4F4; padding: 10px; border-radius: 6px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "padding: 10px 16px; border-radius: 6px; border: 1px solid #FF7E35; background: white; color: #FF7E35;",
                            onclick: move |_| err.clear_errors(),
                            "다시 시도"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "10px",
            padding: "20px",

            span { style: "color: #E5484D; font-size: 16px; font-weight: 600;", "불러오지 못했어요" }
            pre {
                style: "color: #6E6E6E; font-size: 12px; max-width: 100%; max-height: 240px; overflow-y: auto; text-wrap: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}

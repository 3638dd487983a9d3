use crate::ui::Route;
use dioxus::prelude::*;

#[component]
pub fn News() -> Element {
    rsx! { ComingSoon { label: "NEWS" } }
}

#[component]
pub fn Reviews() -> Element {
    rsx! { ComingSoon { label: "REVIEWS" } }
}

#[component]
pub fn Esports() -> Element {
    rsx! { ComingSoon { label: "ESPORTS" } }
}

#[component]
fn ComingSoon(label: &'static str) -> Element {
    rsx! {
        div { class: "coming-soon", "{label} SECTION COMING SOON" }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "not-found",
            p { "ページが見つかりませんでした: /{path}" }
            Link { to: Route::Home {}, class: "btn btn-primary", "ホームへ戻る" }
        }
    }
}

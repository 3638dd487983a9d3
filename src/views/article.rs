use crate::ai::AssistantGateway;
use crate::types::Category;
use crate::views::shared::{
    ArticleImage, ArticleStore, CONTENT_PLACEHOLDER, game_name, markdown_to_html, score_label,
};
use dioxus::prelude::*;

#[component]
pub fn ArticleDetail(id: String) -> Element {
    let store = use_context::<ArticleStore>();
    let nav = navigator();

    // A stale or mistyped link is a normal outcome, not an error.
    let Some(article) = store.find(&id) else {
        return rsx! {
            div { class: "not-found", "記事が見つかりませんでした。" }
        };
    };

    rsx! {
        article { class: "article-detail",
            button { class: "btn-ghost back-link", r#type: "button", onclick: move |_| nav.go_back(), "← 一覧へ戻る" }
            div { class: "detail-cover",
                ArticleImage { image_url: article.image_url.clone(), alt: article.title.clone() }
                span { class: "category-pill", "{article.category}" }
            }
            div { class: "detail-meta",
                span { class: "detail-author", "{article.author}" }
                span { "•" }
                span { "{article.date}" }
                span { "•" }
                span { "{article.read_time}" }
                if let Some(score) = score_label(article.rating) {
                    span { class: "score-badge", "{score}" }
                }
            }
            h1 { class: "detail-title", "{article.title}" }
            p { class: "detail-excerpt", "{article.excerpt}" }
            if let Some(content) = article.content.as_deref() {
                div { class: "detail-body md", dangerous_inner_html: markdown_to_html(content) }
            } else {
                div { class: "detail-body text-muted", "{CONTENT_PLACEHOLDER}" }
            }
            if article.category == Category::Review {
                GameSummary { key: "{article.id}", name: game_name(&article.title).to_string() }
            }
        }
    }
}

/// On-demand AI overview for reviewed titles.
#[component]
fn GameSummary(name: String) -> Element {
    let gateway = use_context::<AssistantGateway>();
    let mut summary = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let on_generate = move |_| {
        if loading() {
            return;
        }
        loading.set(true);
        let gateway = gateway.clone();
        let name = name.clone();
        spawn(async move {
            let text = gateway.summarize_game(&name).await;
            summary.set(Some(text));
            loading.set(false);
        });
    };

    rsx! {
        section { class: "ai-summary",
            h3 { class: "panel-title", "AI ゲーム概要" }
            if let Some(text) = summary() {
                p { class: "ai-summary-text", "{text}" }
            } else {
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: loading(),
                    onclick: on_generate,
                    if loading() { "生成中…" } else { "AIで概要を生成" }
                }
            }
        }
    }
}

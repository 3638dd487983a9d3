use crate::ai::{AssistantGateway, PICK_COUNT};
use crate::types::Category;
use crate::views::chat::ChatPanel;
use crate::views::shared::{ArticleCard, ArticleStore};
use dioxus::prelude::*;

const ALL_CATEGORIES_LABEL: &str = "すべて";

#[component]
pub fn Home() -> Element {
    let store = use_context::<ArticleStore>();
    let mut selected = use_signal(|| Option::<Category>::None);
    let articles = store.by_category(selected());

    rsx! {
        section { class: "hero",
            div { class: "hero-content",
                span { class: "hero-pill", "注目のストーリー" }
                h1 { class: "hero-title", "メタバースの再誕：空間コンピューティングが変える遊びの形" }
                p { class: "hero-lead",
                    "VRやARを超えて、次世代の空間ゲーミングは私たちの物理的現実とデジタルな驚異を、想像もしなかった方法で融合させています。"
                }
            }
        }
        div { class: "home-grid",
            div { class: "feed",
                div { class: "feed-header",
                    h2 { class: "section-title", "LATEST " span { class: "accent", "FEED" } }
                    div { class: "category-filter",
                        button {
                            class: format_args!("filter-btn {}", if selected().is_none() { "active" } else { "" }),
                            r#type: "button",
                            onclick: move |_| selected.set(None),
                            "{ALL_CATEGORIES_LABEL}"
                        }
                        for category in Category::ALL {
                            button {
                                key: "{category}",
                                class: format_args!("filter-btn {}", if selected() == Some(category) { "active" } else { "" }),
                                r#type: "button",
                                onclick: move |_| selected.set(Some(category)),
                                "{category}"
                            }
                        }
                    }
                }
                if articles.is_empty() {
                    p { class: "text-muted", "このカテゴリーの記事はまだありません。" }
                } else {
                    div { class: "article-grid",
                        for article in articles {
                            ArticleCard { key: "{article.id}", article }
                        }
                    }
                }
            }
            aside { class: "sidebar",
                ChatPanel {}
                TrendingPicks {}
                section { class: "about-panel",
                    h4 { "Lumina JP について" }
                    p { class: "text-muted",
                        "Lumina Gamingは、日本のゲームシーンに新しい風を吹き込むメディアプロジェクトです。最新テクノロジーと情熱的なジャーナリズムを融合させ、次世代の体験を提供します。"
                    }
                }
            }
        }
    }
}

/// Fetched once per mount; the gateway always resolves to a full list.
#[component]
fn TrendingPicks() -> Element {
    let gateway = use_context::<AssistantGateway>();
    let picks = use_resource(move || {
        let gateway = gateway.clone();
        async move { gateway.trending_picks().await }
    });

    let body = match picks.cloned() {
        Some(list) => rsx! {
            for (i, pick) in list.into_iter().enumerate() {
                div { key: "{i}", class: "pick-row",
                    div { class: "pick-rank", "{i + 1}" }
                    div {
                        h4 { class: "pick-title", "{pick.title}" }
                        p { class: "pick-reason", "{pick.reason}" }
                    }
                }
            }
        },
        None => rsx! {
            for i in 0..PICK_COUNT {
                div { key: "{i}", class: "pick-skeleton" }
            }
        },
    };

    rsx! {
        section { class: "picks-panel",
            h3 { class: "panel-title", "AI トレンドピック" }
            div { class: "picks-list", {body} }
        }
    }
}

use crate::ai::AssistantGateway;
use crate::content::ContentStore;
use crate::views::shared::ArticleStore;
use crate::views::{ArticleDetail, Esports, Home, News, NotFound, PostArticle, Reviews};
use dioxus::prelude::*;

const LUMINA_CSS: Asset = asset!("/assets/lumina.css");

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/post")]
        PostArticle {},
        #[route("/article/:id")]
        ArticleDetail { id: String },
        #[route("/news")]
        News {},
        #[route("/reviews")]
        Reviews {},
        #[route("/esports")]
        Esports {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| ArticleStore::new(ContentStore::seeded()));
    use_context_provider(AssistantGateway::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: LUMINA_CSS }
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app-shell",
            NavBar {}
            main { class: "main-container", Outlet::<Route> {} }
            Footer {}
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav { class: "header",
            div { class: "header-content",
                div { class: "header-left",
                    Link { to: Route::Home {}, class: "brand",
                        span { class: "brand-mark", "L" }
                        span { class: "brand-name", "LUMINA" span { class: "accent", "G" } }
                    }
                    div { class: "tabs",
                        NavTab { to: Route::Home {}, label: "ホーム" }
                        NavTab { to: Route::News {}, label: "ニュース" }
                        NavTab { to: Route::Reviews {}, label: "レビュー" }
                        NavTab { to: Route::Esports {}, label: "eスポーツ" }
                    }
                }
                Link { to: Route::PostArticle {}, class: "btn btn-primary", "＋ 投稿する" }
            }
        }
    }
}

#[component]
fn NavTab(to: Route, label: &'static str) -> Element {
    rsx! {
        Link { to, class: "tab", active_class: "active", "{label}" }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-grid",
                div { class: "footer-about",
                    h4 { "LUMINA GAMING" }
                    p { class: "text-muted",
                        "次世代のゲーマーのために構築された、AIによる洞察と高品質なジャーナリズム。デジタルフロンティアの最前線をお届けします。"
                    }
                }
                div {
                    h4 { "ネットワーク" }
                    ul {
                        li { "ハードウェア" }
                        li { "インディーシーン" }
                        li { "開発者インタビュー" }
                    }
                }
                div {
                    h4 { "インフォメーション" }
                    ul {
                        li { "プライバシーポリシー" }
                        li { "利用規約" }
                        li { "お問い合わせ" }
                    }
                }
            }
            p { class: "footer-copy", "© 2024 Lumina Gaming Media Group. All rights reserved." }
        }
    }
}

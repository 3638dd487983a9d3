use crate::content::{ContentError, ContentStore};
use crate::types::{Article, ArticleDraft, Category};
use crate::ui::Route;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use comrak::{ComrakOptions, markdown_to_html as render_markdown};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use std::path::Path;

pub const CONTENT_PLACEHOLDER: &str = "詳細な本文は現在準備中です。";

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    // Guest submissions: raw HTML is escaped, never rendered.
    options.render.unsafe_ = false;
    options
});

/// Handle to the root-owned article store.
///
/// Readers go through `articles`/`find`; the post form is the only caller of `submit`.
#[derive(Clone, Copy, PartialEq)]
pub struct ArticleStore(Signal<ContentStore>);

impl ArticleStore {
    pub fn new(store: ContentStore) -> Self {
        Self(Signal::new(store))
    }

    pub fn by_category(&self, category: Option<Category>) -> Vec<Article> {
        self.0
            .read()
            .list_by_category(category)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<Article> {
        self.0.read().find_by_id(id).cloned()
    }

    pub fn submit(&mut self, draft: ArticleDraft) -> Result<Article, ContentError> {
        self.0.write().submit(draft)
    }
}

pub fn markdown_to_html(md: &str) -> String {
    render_markdown(md, &MARKDOWN_OPTIONS)
}

/// The game a headline is about: the text inside `『』` when present,
/// otherwise the headline itself.
pub fn game_name(title: &str) -> &str {
    title
        .split_once('『')
        .and_then(|(_, rest)| rest.split_once('』'))
        .map(|(name, _)| name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| title.trim())
}

/// `Score: 7.5/10`, or nothing when the article is unrated.
pub fn score_label(rating: Option<f64>) -> Option<String> {
    rating.map(|value| format!("Score: {value}/10"))
}

pub fn image_mime_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("avif") => "image/avif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Inline `data:` URL so the image lives inside the article record.
pub fn encode_image_data_url(file_name: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        image_mime_type(file_name),
        STANDARD.encode(bytes)
    )
}

#[component]
pub fn ArticleCard(article: Article) -> Element {
    rsx! {
        Link { to: Route::ArticleDetail { id: article.id.clone() }, class: "article-card",
            div { class: "article-card-media",
                ArticleImage { image_url: article.image_url.clone(), alt: article.title.clone() }
                span { class: "category-pill", "{article.category}" }
                if let Some(rating) = article.rating {
                    div { class: "rating-chip",
                        span { class: "rating-value", "{rating}" }
                        span { class: "rating-scale", "/ 10" }
                    }
                }
            }
            div { class: "article-card-body",
                div { class: "article-meta",
                    span { "{article.author}" }
                    span { "•" }
                    span { "{article.date}" }
                }
                h3 { class: "article-title", "{article.title}" }
                p { class: "article-excerpt", "{article.excerpt}" }
                div { class: "article-card-footer",
                    span { class: "text-muted", "{article.read_time}" }
                    span { class: "read-more", "続きを読む →" }
                }
            }
        }
    }
}

#[component]
pub fn ArticleImage(image_url: Option<String>, alt: String) -> Element {
    rsx! {
        if let Some(src) = image_url {
            img { class: "cover-image", src: "{src}", alt: "{alt}" }
        } else {
            div { class: "img-placeholder", aria_hidden: "true" }
        }
    }
}

use crate::content::ContentError;
use crate::types::{ArticleDraft, Category, non_blank, parse_rating};
use crate::ui::Route;
use crate::views::shared::{ArticleStore, encode_image_data_url};
use dioxus::prelude::*;

fn form_error_message(err: &ContentError) -> String {
    match err {
        ContentError::MissingField(field) => {
            let label = match *field {
                "title" => "タイトル",
                "excerpt" => "リード文",
                other => other,
            };
            format!("{label}を入力してください。")
        }
    }
}

#[component]
pub fn PostArticle() -> Element {
    let mut store = use_context::<ArticleStore>();
    let nav = navigator();

    let mut title = use_signal(String::new);
    let mut excerpt = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut category = use_signal(|| Category::News);
    let mut rating = use_signal(String::new);
    let mut image_url = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let on_image = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(file_name) = engine.files().into_iter().next() else {
            return;
        };
        match engine.read_file(&file_name).await {
            Some(bytes) => image_url.set(Some(encode_image_data_url(&file_name, &bytes))),
            None => tracing::warn!(file = %file_name, "could not read selected image"),
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = ArticleDraft {
            title: title(),
            excerpt: excerpt(),
            content: non_blank(&content()),
            category: category(),
            image_url: image_url(),
            rating: parse_rating(&rating()),
        };
        match store.submit(draft) {
            Ok(_) => {
                nav.push(Route::Home {});
            }
            Err(err) => error.set(Some(form_error_message(&err))),
        }
    };

    rsx! {
        div { class: "post-page",
            h2 { class: "section-title", "新しい記事を " span { class: "accent", "投稿" } }
            form { class: "post-form", onsubmit: on_submit,
                div { class: "field",
                    label { class: "control-label", "カバー画像" }
                    label { class: "image-drop",
                        if let Some(src) = image_url() {
                            img { class: "cover-image", src: "{src}", alt: "Preview" }
                        } else {
                            span { class: "text-muted", "クリックして画像をアップロード" }
                        }
                        input { r#type: "file", accept: "image/*", class: "hidden", onchange: on_image }
                    }
                }
                div { class: "field",
                    label { class: "control-label", "タイトル" }
                    input {
                        r#type: "text",
                        required: true,
                        placeholder: "魅力的な見出しを入力...",
                        value: "{title}",
                        oninput: move |ev| title.set(ev.value()),
                    }
                }
                div { class: "field",
                    label { class: "control-label", "リード文（概要）" }
                    textarea {
                        required: true,
                        rows: "3",
                        placeholder: "読者の興味を惹く短い要約...",
                        value: "{excerpt}",
                        oninput: move |ev| excerpt.set(ev.value()),
                    }
                }
                div { class: "field",
                    label { class: "control-label", "本文" }
                    textarea {
                        rows: "6",
                        placeholder: "ここに詳しい内容を記入...",
                        value: "{content}",
                        oninput: move |ev| content.set(ev.value()),
                    }
                }
                div { class: "field-row",
                    div { class: "field",
                        label { class: "control-label", "カテゴリー" }
                        select {
                            value: "{category}",
                            onchange: move |evt: FormEvent| {
                                if let Some(selected) = Category::from_label(&evt.value()) {
                                    category.set(selected);
                                }
                            },
                            for option_category in Category::ALL {
                                option { key: "{option_category}", value: "{option_category}", "{option_category}" }
                            }
                        }
                    }
                    div { class: "field",
                        label { class: "control-label", "スコア (任意)" }
                        input {
                            r#type: "number",
                            step: "0.1",
                            min: "0",
                            max: "10",
                            placeholder: "0 - 10",
                            value: "{rating}",
                            oninput: move |ev| rating.set(ev.value()),
                        }
                    }
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                div { class: "form-actions",
                    button { class: "btn btn-primary", r#type: "submit", "記事を公開する" }
                    button {
                        class: "btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            nav.push(Route::Home {});
                        },
                        "キャンセル"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_message_is_localized() {
        assert_eq!(
            form_error_message(&ContentError::MissingField("title")),
            "タイトルを入力してください。"
        );
        assert_eq!(
            form_error_message(&ContentError::MissingField("excerpt")),
            "リード文を入力してください。"
        );
    }
}

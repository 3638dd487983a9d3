use crate::ai::AssistantGateway;
use crate::types::{ChatMessage, Role};
use dioxus::prelude::*;

const GREETING: &str =
    "こんにちは！Lumina AIです。ゲームの攻略法やおすすめ、最新トレンドについて何でも聞いてください！";

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Model => "assistant",
    }
}

#[component]
pub fn ChatPanel() -> Element {
    let gateway = use_context::<AssistantGateway>();
    let mut messages = use_signal(|| vec![ChatMessage::model(GREETING)]);
    let mut input = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let text = input().trim().to_string();
        if text.is_empty() || sending() {
            return;
        }

        // The gateway is stateless: resend everything said so far.
        let history = messages();
        input.set(String::new());
        messages.write().push(ChatMessage::user(text.clone()));
        sending.set(true);

        let gateway = gateway.clone();
        spawn(async move {
            let reply = gateway.chat(&history, &text).await;
            messages.write().push(ChatMessage::model(reply));
            sending.set(false);
        });
    };

    let messages_snapshot = messages();

    rsx! {
        div { class: "chat-panel",
            div { class: "chat-header",
                span { class: "status-dot" }
                span { class: "chat-title", "LUMINA_AI アシスタント" }
                span { class: "chat-badge", "Gemini Powered" }
            }
            div { class: "chat-list",
                for (i, msg) in messages_snapshot.iter().enumerate() {
                    div { key: "{i}", class: format_args!("message-row {}", role_class(msg.role)),
                        div { class: format_args!("bubble {}", role_class(msg.role)), "{msg.text}" }
                    }
                }
                if sending() {
                    div { class: "message-row assistant",
                        div { class: "bubble assistant typing",
                            span { class: "dot" }
                            span { class: "dot" }
                            span { class: "dot" }
                        }
                    }
                }
            }
            form { class: "composer", onsubmit: on_submit,
                input {
                    r#type: "text",
                    placeholder: "AIに質問する...",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: sending(), "送信" }
            }
        }
    }
}

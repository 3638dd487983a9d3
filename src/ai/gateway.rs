use super::client::{Content, GeminiClient, GenerateRequest, GenerationConfig, TextBackend};
use super::error::{GatewayError, GatewayResult};
use super::fallback::{
    CHAT_CONNECTION_PROBLEM, NOT_CONFIGURED, PICK_COUNT, SUMMARY_APOLOGY, fallback_picks,
};
use crate::config::{ApiKey, AssistantConfig};
use crate::types::{AiPick, ChatMessage, Role};
use serde_json::json;
use std::rc::Rc;

const SUMMARY_TEMPERATURE: f64 = 0.7;
const SUMMARY_TOP_P: f64 = 0.95;

const CHAT_SYSTEM_INSTRUCTION: &str = "あなたはゲームメディア「Lumina Gaming」のAIアシスタント「Lumina AI」です。\
ゲームの攻略法、おすすめタイトル、業界の最新トレンドについて、フレンドリーで熱意のある口調で簡潔に日本語で答えてください。\
わからないことは推測せず、正直にそう伝えてください。";

const PICKS_PROMPT: &str = "今ゲーマーの間で話題になっているおすすめのゲームを3つ挙げ、\
それぞれについておすすめする理由を1文で説明してください。";

fn summary_prompt(name: &str) -> String {
    format!("ゲーム「{name}」について、その魅力と特徴を3文程度で簡潔に紹介してください。")
}

fn picks_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "reason": { "type": "STRING" }
            },
            "required": ["title", "reason"]
        }
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    MissingCredential,
    Transport,
    MalformedResponse,
}

/// Result of a gateway operation, tagged with where the content came from.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    Live(T),
    Fallback { reason: FallbackReason, content: T },
}

impl<T> Outcome<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Outcome::Live(_))
    }

    pub fn reason(&self) -> Option<FallbackReason> {
        match self {
            Outcome::Live(_) => None,
            Outcome::Fallback { reason, .. } => Some(*reason),
        }
    }

    pub fn content(&self) -> &T {
        match self {
            Outcome::Live(content) | Outcome::Fallback { content, .. } => content,
        }
    }

    pub fn into_content(self) -> T {
        match self {
            Outcome::Live(content) | Outcome::Fallback { content, .. } => content,
        }
    }
}

/// Best-effort access to the hosted text service.
///
/// Every operation resolves to content: a missing credential, a transport
/// failure and a malformed response all collapse into fixed fallback values.
#[derive(Clone)]
pub struct AssistantGateway {
    credential: Option<ApiKey>,
    backend: Rc<dyn TextBackend>,
}

impl PartialEq for AssistantGateway {
    fn eq(&self, other: &Self) -> bool {
        self.credential == other.credential && Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl AssistantGateway {
    pub fn new(credential: Option<ApiKey>, backend: Rc<dyn TextBackend>) -> Self {
        Self {
            credential,
            backend,
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            Rc::new(GeminiClient::from_config(config)),
        )
    }

    pub fn from_env() -> Self {
        let config = AssistantConfig::load();
        if config.api_key.is_none() {
            tracing::info!("no API key configured; assistant runs in fallback mode");
        }
        Self::from_config(&config)
    }

    /// The one availability check every operation goes through.
    pub fn capability(&self) -> Option<&ApiKey> {
        self.credential.as_ref()
    }

    /// `build` only runs once a credential is present.
    async fn run(&self, build: impl FnOnce() -> GenerateRequest) -> GatewayResult<String> {
        let key = self.capability().ok_or(GatewayError::MissingCredential)?;
        let request = build();
        self.backend.generate(key, &request).await
    }

    fn settle<T>(
        operation: &str,
        result: GatewayResult<T>,
        fallback: impl FnOnce(FallbackReason) -> T,
    ) -> Outcome<T> {
        match result {
            Ok(content) => Outcome::Live(content),
            Err(err) => {
                let reason = err.reason();
                if reason == FallbackReason::MissingCredential {
                    tracing::debug!(operation, "skipping request: no API key");
                } else {
                    tracing::warn!(operation, error = %err, "request failed; using fallback");
                }
                Outcome::Fallback {
                    reason,
                    content: fallback(reason),
                }
            }
        }
    }

    // ----------------
    // Game summary
    // ----------------

    pub async fn summarize_game_outcome(&self, name: &str) -> Outcome<String> {
        let result = self
            .run(|| {
                GenerateRequest::prompt(summary_prompt(name)).with_generation_config(
                    GenerationConfig {
                        temperature: Some(SUMMARY_TEMPERATURE),
                        top_p: Some(SUMMARY_TOP_P),
                        ..GenerationConfig::default()
                    },
                )
            })
            .await;
        Self::settle("summarize_game", result, |reason| match reason {
            FallbackReason::MissingCredential => NOT_CONFIGURED.to_string(),
            _ => SUMMARY_APOLOGY.to_string(),
        })
    }

    pub async fn summarize_game(&self, name: &str) -> String {
        self.summarize_game_outcome(name).await.into_content()
    }

    // ----------------
    // Chat
    // ----------------

    /// `history` is replayed oldest first, followed by `new_message` as a user turn.
    pub async fn chat_outcome(
        &self,
        history: &[ChatMessage],
        new_message: &str,
    ) -> Outcome<String> {
        let result = self
            .run(|| {
                let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
                contents.push(Content::turn(Role::User, new_message));
                GenerateRequest {
                    contents,
                    system_instruction: None,
                    generation_config: None,
                }
                .with_system_instruction(CHAT_SYSTEM_INSTRUCTION)
            })
            .await;
        Self::settle("chat", result, |reason| match reason {
            FallbackReason::MissingCredential => NOT_CONFIGURED.to_string(),
            _ => CHAT_CONNECTION_PROBLEM.to_string(),
        })
    }

    pub async fn chat(&self, history: &[ChatMessage], new_message: &str) -> String {
        self.chat_outcome(history, new_message).await.into_content()
    }

    // ----------------
    // Trending picks
    // ----------------

    pub async fn trending_picks_outcome(&self) -> Outcome<Vec<AiPick>> {
        let request = || {
            GenerateRequest::prompt(PICKS_PROMPT).with_generation_config(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(picks_schema()),
                ..GenerationConfig::default()
            })
        };
        let result = match self.run(request).await {
            Ok(body) => parse_picks(&body),
            Err(err) => Err(err),
        };
        Self::settle("trending_picks", result, |_| fallback_picks())
    }

    pub async fn trending_picks(&self) -> Vec<AiPick> {
        self.trending_picks_outcome().await.into_content()
    }
}

/// Validates structured output: at least [`PICK_COUNT`] entries with non-blank
/// fields. Extra entries are dropped.
pub fn parse_picks(body: &str) -> GatewayResult<Vec<AiPick>> {
    let mut picks: Vec<AiPick> = serde_json::from_str(body.trim())?;
    if picks
        .iter()
        .any(|pick| pick.title.trim().is_empty() || pick.reason.trim().is_empty())
    {
        return Err(GatewayError::MalformedResponse(
            "pick with blank title or reason".to_string(),
        ));
    }
    if picks.len() < PICK_COUNT {
        return Err(GatewayError::MalformedResponse(format!(
            "expected {PICK_COUNT} picks, got {}",
            picks.len()
        )));
    }
    picks.truncate(PICK_COUNT);
    Ok(picks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::Cell;

    struct Unreachable;

    #[async_trait(?Send)]
    impl TextBackend for Unreachable {
        async fn generate(&self, _key: &ApiKey, _request: &GenerateRequest) -> GatewayResult<String> {
            panic!("backend called without a credential");
        }
    }

    #[tokio::test]
    async fn test_request_not_built_without_credential() {
        let gateway = AssistantGateway::new(None, Rc::new(Unreachable));
        let built = Cell::new(false);

        let result = gateway
            .run(|| {
                built.set(true);
                GenerateRequest::prompt("unused")
            })
            .await;

        assert!(matches!(result, Err(GatewayError::MissingCredential)));
        assert!(!built.get());
    }

    #[test]
    fn test_parse_picks_accepts_schema() {
        let body = r#"[
            {"title":"A","reason":"ra"},
            {"title":"B","reason":"rb"},
            {"title":"C","reason":"rc"},
            {"title":"D","reason":"rd"}
        ]"#;
        let picks = parse_picks(body).unwrap();
        assert_eq!(picks.len(), 3);
        assert_eq!(picks[2].title, "C");
    }

    #[test]
    fn test_parse_picks_rejects_wrong_shapes() {
        assert!(parse_picks(r#"{"title":"A","reason":"r"}"#).is_err());
        assert!(parse_picks(r#"[{"title":"A"}]"#).is_err());
        assert!(parse_picks(r#"[{"title":"A","reason":"r"}]"#).is_err());
        assert!(
            parse_picks(r#"[{"title":"","reason":"r"},{"title":"B","reason":"r"},{"title":"C","reason":"r"}]"#)
                .is_err()
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let live = Outcome::Live(1);
        assert!(live.is_live());
        assert_eq!(live.reason(), None);

        let fallback = Outcome::Fallback {
            reason: FallbackReason::Transport,
            content: 2,
        };
        assert_eq!(fallback.reason(), Some(FallbackReason::Transport));
        assert_eq!(*fallback.content(), 2);
        assert_eq!(fallback.into_content(), 2);
    }
}

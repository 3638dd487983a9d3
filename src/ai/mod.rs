/// Assistant module for Lumina
///
/// Wraps the hosted Gemini text API behind [`AssistantGateway`], which never
/// fails: when no API key is configured, or a call goes wrong, each operation
/// returns fixed fallback content instead.
///
/// # Architecture
///
/// - `client` - wire types, the [`TextBackend`] seam and the reqwest-based [`GeminiClient`]
/// - `gateway` - the three operations plus the [`Outcome`] tagging used by tests
/// - `fallback` - hardcoded strings and picks
///
/// # Usage
///
/// ```rust,no_run
/// use lumina::ai::AssistantGateway;
///
/// # async fn example() {
/// let gateway = AssistantGateway::from_env();
/// let picks = gateway.trending_picks().await;
/// assert_eq!(picks.len(), 3);
/// # }
/// ```
mod client;
mod error;
mod fallback;
mod gateway;

pub use client::{
    Content, GeminiClient, GenerateRequest, GenerationConfig, Part, TextBackend, extract_text,
};
pub use error::{GatewayError, GatewayResult};
pub use fallback::{
    CHAT_CONNECTION_PROBLEM, NOT_CONFIGURED, PICK_COUNT, SUMMARY_APOLOGY, fallback_picks,
};
pub use gateway::{AssistantGateway, FallbackReason, Outcome, parse_picks};

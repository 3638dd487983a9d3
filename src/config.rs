use std::collections::HashMap;
use std::env;
use std::fmt;

/// Bundled defaults for builds without a process environment (web, mobile).
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Secret for the text-generation service. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Settings for the assistant gateway.
///
/// Environment variables:
/// - `GEMINI_API_KEY` (or `API_KEY`): credential; absent means fallback-only mode
/// - `GEMINI_MODEL`: model identifier, defaults to [`DEFAULT_MODEL`]
/// - `GEMINI_ENDPOINT`: API base URL, defaults to [`DEFAULT_ENDPOINT`]
#[derive(Clone, Debug, PartialEq)]
pub struct AssistantConfig {
    pub api_key: Option<ApiKey>,
    pub model: String,
    pub endpoint: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AssistantConfig {
    /// Process environment first, then the bundled `config.env`.
    pub fn load() -> Self {
        let bundled = parse_env_file(BUNDLED_CONFIG);
        Self::from_lookup(|name| env::var(name).ok().or_else(|| bundled.get(name).cloned()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = read("GEMINI_API_KEY").or_else(|| read("API_KEY")).map(ApiKey);
        let model = read("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let endpoint = read("GEMINI_ENDPOINT")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            api_key,
            model,
            endpoint,
        }
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_file(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"');
            (key.trim().to_string(), value.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AssistantConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AssistantConfig::default());
    }

    #[test]
    fn test_blank_key_is_absent() {
        let config = AssistantConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "   ")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_api_key_alias_and_overrides() {
        let config = AssistantConfig::from_lookup(lookup(&[
            ("API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-test"),
            ("GEMINI_ENDPOINT", "http://localhost:8080/"),
        ]));
        assert_eq!(config.api_key, Some(ApiKey::new("secret")));
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.endpoint, "http://localhost:8080");
    }

    #[test]
    fn test_parse_env_file() {
        let parsed = parse_env_file(
            "# comment\n\nGEMINI_MODEL = gemini-pro\nGEMINI_API_KEY=\"abc\"\nnot a pair\n",
        );
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["GEMINI_MODEL"], "gemini-pro");
        assert_eq!(parsed["GEMINI_API_KEY"], "abc");
    }

    #[test]
    fn test_bundled_config_has_no_key() {
        let bundled = parse_env_file(BUNDLED_CONFIG);
        let config = AssistantConfig::from_lookup(|name| bundled.get(name).cloned());
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret");
        assert!(!format!("{key:?}").contains("super-secret"));
    }
}

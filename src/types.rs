use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    News,
    Review,
    Guide,
    #[serde(rename = "eSports")]
    ESports,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::News,
        Category::Review,
        Category::Guide,
        Category::ESports,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::News => "News",
            Category::Review => "Review",
            Category::Guide => "Guide",
            Category::ESports => "eSports",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cat| cat.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub author: String,
    pub date: String,
    pub read_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Form data for an article that has not been submitted yet.
#[derive(Clone, Debug, PartialEq)]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub category: Category,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, excerpt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            content: None,
            category: Category::News,
            image_url: None,
            rating: None,
        }
    }
}

/// Parses the score field of the post form. Blank or unparsable input means no score.
pub fn parse_rating(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Normalizes an optional text field: whitespace-only input is treated as absent.
pub fn non_blank(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiPick {
    pub title: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("7.5"), Some(7.5));
        assert_eq!(parse_rating(" 10 "), Some(10.0));
        assert_eq!(parse_rating(""), None);
        assert_eq!(parse_rating("   "), None);
        assert_eq!(parse_rating("great"), None);
        assert_eq!(parse_rating("NaN"), None);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("すべて"), None);
    }

    #[test]
    fn test_article_serializes_camel_case() {
        let article = Article {
            id: "1".into(),
            title: "t".into(),
            excerpt: "e".into(),
            content: None,
            category: Category::ESports,
            image_url: Some("data:image/png;base64,AA==".into()),
            author: "a".into(),
            date: "d".into(),
            read_time: "r".into(),
            rating: None,
        };
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["category"], "eSports");
        assert_eq!(json["readTime"], "r");
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("rating").is_none());
    }
}

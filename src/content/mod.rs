//! In-memory article collection.
//!
//! The store is rebuilt from [`seed`] on every launch. Newly submitted
//! articles are prepended, so iteration order is newest submission first.

mod seed;

use crate::types::{Article, ArticleDraft, Category};
use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

pub use seed::seed_articles;

pub const GUEST_AUTHOR: &str = "ゲストライター";
pub const DEFAULT_READ_TIME: &str = "5分で読める";

const PUBLISH_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]年[month padding:none]月[day padding:none]日");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentStore {
    articles: Vec<Article>,
    last_issued: u64,
}

impl ContentStore {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            last_issued: 0,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_articles())
    }

    pub fn list_all(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// `None` lists every category.
    pub fn list_by_category(&self, category: Option<Category>) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| category.is_none_or(|wanted| article.category == wanted))
            .collect()
    }

    pub fn submit(&mut self, draft: ArticleDraft) -> Result<Article, ContentError> {
        if draft.title.trim().is_empty() {
            return Err(ContentError::MissingField("title"));
        }
        if draft.excerpt.trim().is_empty() {
            return Err(ContentError::MissingField("excerpt"));
        }

        let article = Article {
            id: self.next_id(),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            category: draft.category,
            image_url: draft.image_url,
            author: GUEST_AUTHOR.to_string(),
            date: format_publish_date(current_date()),
            read_time: DEFAULT_READ_TIME.to_string(),
            rating: draft.rating,
        };

        tracing::info!(id = %article.id, category = %article.category, "article submitted");
        self.articles.insert(0, article.clone());
        Ok(article)
    }

    // Millisecond timestamps, bumped past anything already issued or seeded.
    fn next_id(&mut self) -> String {
        let floor = self
            .articles
            .iter()
            .filter_map(|article| article.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            .max(self.last_issued);
        let id = current_millis().max(floor + 1);
        self.last_issued = id;
        id.to_string()
    }
}

fn current_millis() -> u64 {
    u64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).unwrap_or_default()
}

fn current_date() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Long-form Japanese date, e.g. `2026年10月17日`.
pub fn format_publish_date(datetime: OffsetDateTime) -> String {
    datetime
        .format(PUBLISH_DATE_FORMAT)
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not format publish date");
            String::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_format_publish_date() {
        assert_eq!(
            format_publish_date(datetime!(2024-03-05 10:00 UTC)),
            "2024年3月5日"
        );
        assert_eq!(
            format_publish_date(datetime!(2026-10-17 23:59 +09:00)),
            "2026年10月17日"
        );
    }

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut store = ContentStore::new(Vec::new());
        let a = store.submit(ArticleDraft::new("a", "a")).unwrap();
        let b = store.submit(ArticleDraft::new("b", "b")).unwrap();
        let a_id: u64 = a.id.parse().unwrap();
        let b_id: u64 = b.id.parse().unwrap();
        assert!(b_id > a_id);
    }

    #[test]
    fn test_blank_excerpt_is_rejected() {
        let mut store = ContentStore::new(Vec::new());
        let err = store.submit(ArticleDraft::new("title", "  ")).unwrap_err();
        assert_eq!(err, ContentError::MissingField("excerpt"));
        assert!(store.is_empty());
    }
}

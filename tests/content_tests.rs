//! Integration tests for the in-memory content store

use lumina::content::{ContentError, ContentStore, DEFAULT_READ_TIME, GUEST_AUTHOR};
use lumina::types::{ArticleDraft, Category, non_blank, parse_rating};

fn draft(title: &str) -> ArticleDraft {
    ArticleDraft::new(title, format!("{title} excerpt"))
}

mod submit_tests {
    use super::*;

    #[test]
    fn test_submit_prepends_with_fresh_id() {
        let mut store = ContentStore::seeded();
        let before = store.len();
        let existing_ids: Vec<String> = store.list_all().iter().map(|a| a.id.clone()).collect();

        let article = store.submit(draft("New arrival")).expect("submit");

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.list_all()[0], article);
        assert!(!existing_ids.contains(&article.id));
    }

    #[test]
    fn test_repeated_submissions_keep_ids_unique() {
        let mut store = ContentStore::seeded();
        for i in 0..50 {
            store.submit(draft(&format!("post {i}"))).expect("submit");
        }

        let mut ids: Vec<&str> = store.list_all().iter().map(|a| a.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert_eq!(store.list_all()[0].title, "post 49");
    }

    #[test]
    fn test_submit_fills_display_defaults() {
        let mut store = ContentStore::new(Vec::new());
        let article = store.submit(draft("Defaults")).expect("submit");

        assert_eq!(article.author, GUEST_AUTHOR);
        assert_eq!(article.read_time, DEFAULT_READ_TIME);
        assert!(article.date.ends_with('日'));
        assert_eq!(article.category, Category::News);
    }

    #[test]
    fn test_submit_requires_title_and_excerpt() {
        let mut store = ContentStore::seeded();
        let before = store.len();

        assert_eq!(
            store.submit(ArticleDraft::new("", "excerpt")),
            Err(ContentError::MissingField("title"))
        );
        assert_eq!(
            store.submit(ArticleDraft::new("title", "")),
            Err(ContentError::MissingField("excerpt"))
        );
        assert_eq!(store.len(), before);
    }

    #[test]
    fn test_rating_from_form_field() {
        let mut store = ContentStore::new(Vec::new());

        let mut rated = draft("Rated");
        rated.rating = parse_rating("7.5");
        let rated = store.submit(rated).expect("submit");
        assert_eq!(rated.rating, Some(7.5));

        let mut unrated = draft("Unrated");
        unrated.rating = parse_rating("");
        let unrated = store.submit(unrated).expect("submit");
        assert_eq!(unrated.rating, None);
    }

    #[test]
    fn test_rating_range_is_not_revalidated() {
        let mut store = ContentStore::new(Vec::new());
        let mut out_of_range = draft("Generous");
        out_of_range.rating = Some(11.0);
        assert_eq!(store.submit(out_of_range).expect("submit").rating, Some(11.0));
    }

    #[test]
    fn test_blank_content_is_absent() {
        let mut store = ContentStore::new(Vec::new());
        let mut with_blank = draft("Blank body");
        with_blank.content = non_blank("   ");
        assert_eq!(store.submit(with_blank).expect("submit").content, None);
    }
}

mod lookup_tests {
    use super::*;

    #[test]
    fn test_find_by_id_hits_seed_and_submission() {
        let mut store = ContentStore::seeded();
        let seeded_id = store.list_all()[0].id.clone();
        assert!(store.find_by_id(&seeded_id).is_some());

        let article = store.submit(draft("Findable")).expect("submit");
        assert_eq!(store.find_by_id(&article.id), Some(&article));
    }

    #[test]
    fn test_find_by_unknown_id_is_none() {
        let store = ContentStore::seeded();
        for id in ["", "0", "does-not-exist", "999999999999999"] {
            assert!(store.find_by_id(id).is_none(), "id: {id}");
        }
    }

    #[test]
    fn test_list_by_category() {
        let mut store = ContentStore::seeded();
        let mut review = draft("Fresh review");
        review.category = Category::Review;
        store.submit(review).expect("submit");

        let all = store.list_by_category(None);
        assert_eq!(all.len(), store.len());

        let reviews = store.list_by_category(Some(Category::Review));
        assert!(!reviews.is_empty());
        assert!(reviews.iter().all(|a| a.category == Category::Review));
        assert_eq!(reviews[0].title, "Fresh review");
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let store = ContentStore::seeded();
        let mut ids: Vec<&str> = store.list_all().iter().map(|a| a.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert!(total > 0);
    }
}

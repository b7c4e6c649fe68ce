use std::sync::Arc;

use crate::{models::posts::UserPost, repositories::posts_repo::PostsSource, Result};

#[derive(Clone)]
pub struct PostSorterService {
    posts: Arc<dyn PostsSource>,
}

impl PostSorterService {
    pub fn new(posts: Arc<dyn PostsSource>) -> Self {
        Self { posts }
    }

    pub async fn sort_author_asc(&self) -> Result<Vec<UserPost>> {
        let posts = self.posts.get_posts().await?;

        Ok(sort_author_asc(posts))
    }

    pub async fn sort_author_desc(&self) -> Result<Vec<UserPost>> {
        let posts = self.posts.get_posts().await?;

        Ok(sort_author_desc(posts))
    }

    pub async fn sort_date_oldest_first(&self) -> Result<Vec<UserPost>> {
        let posts = self.posts.get_posts().await?;

        Ok(sort_date_oldest_first(posts))
    }

    pub async fn sort_date_newest_first(&self) -> Result<Vec<UserPost>> {
        let posts = self.posts.get_posts().await?;

        Ok(sort_date_newest_first(posts))
    }
}

/// Orders posts by author, case-insensitively, A to Z.
///
/// The relative order of two posts whose case-folded authors are equal is
/// not part of the contract.
pub fn sort_author_asc(mut posts: Vec<UserPost>) -> Vec<UserPost> {
    posts.sort_by_cached_key(|post| post.author.to_lowercase());
    posts
}

/// Orders posts by author, case-insensitively, Z to A. Exact reverse of the
/// ascending comparator.
pub fn sort_author_desc(mut posts: Vec<UserPost>) -> Vec<UserPost> {
    posts.sort_by(|a, b| b.author.to_lowercase().cmp(&a.author.to_lowercase()));
    posts
}

/// Orders posts by calendar date, oldest first.
///
/// A post whose date did not parse is kept in the output, but where it lands
/// relative to the rest is not part of the contract.
pub fn sort_date_oldest_first(mut posts: Vec<UserPost>) -> Vec<UserPost> {
    posts.sort_by_key(|post| post.date.day());
    posts
}

/// Orders posts by calendar date, newest first. Exact reverse of the
/// oldest-first comparator, including the unspecified placement of posts
/// without a parsed date.
pub fn sort_date_newest_first(mut posts: Vec<UserPost>) -> Vec<UserPost> {
    posts.sort_by(|a, b| b.date.day().cmp(&a.date.day()));
    posts
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::models::posts::PostDate;

    use super::*;

    fn post(id: i32, author: &str, date: &str) -> UserPost {
        UserPost {
            id,
            author: author.to_string(),
            content: format!("Content {id}"),
            date: PostDate::new(date),
            likes: 0,
            colour: None,
        }
    }

    fn authors(posts: &[UserPost]) -> Vec<&str> {
        posts.iter().map(|p| p.author.as_str()).collect()
    }

    fn dates(posts: &[UserPost]) -> Vec<&str> {
        posts.iter().map(|p| p.date.as_str()).collect()
    }

    #[test]
    fn author_asc_on_empty_collection_returns_nothing() {
        assert!(sort_author_asc(Vec::new()).is_empty());
    }

    #[test]
    fn author_asc_on_single_post_returns_it() {
        let sorted = sort_author_asc(vec![post(1, "Alice", "2022-01-01")]);

        assert_eq!(authors(&sorted), vec!["Alice"]);
    }

    #[test]
    fn author_asc_orders_alphabetically() {
        let posts = vec![
            post(1, "John", "2022-01-01"),
            post(2, "Alice", "2022-01-02"),
            post(3, "Bob", "2022-01-03"),
        ];

        let sorted = sort_author_asc(posts);

        assert_eq!(authors(&sorted), vec!["Alice", "Bob", "John"]);
    }

    #[test]
    fn author_sort_ignores_case() {
        let posts = vec![
            post(1, "charlie", "2022-01-01"),
            post(2, "ALICE", "2022-01-02"),
            post(3, "Bob", "2022-01-03"),
        ];

        let sorted = sort_author_asc(posts);

        assert_eq!(authors(&sorted), vec!["ALICE", "Bob", "charlie"]);
    }

    #[test]
    fn author_desc_is_exact_reverse_of_asc() {
        let posts = vec![
            post(1, "John", "2022-01-01"),
            post(2, "Alice", "2022-01-02"),
            post(3, "Bob", "2022-01-03"),
        ];

        let asc = sort_author_asc(posts.clone());
        let mut desc = sort_author_desc(posts);

        assert_eq!(authors(&desc), vec!["John", "Bob", "Alice"]);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn author_sort_preserves_the_multiset_of_posts() {
        let posts = vec![
            post(1, "John", "2022-01-01"),
            post(2, "Alice", "2022-01-02"),
            post(3, "Bob", "2022-01-03"),
        ];

        let sorted = sort_author_desc(posts.clone());

        assert_eq!(sorted.len(), posts.len());
        for original in &posts {
            assert!(sorted.contains(original));
        }
    }

    #[test]
    fn date_oldest_first_on_empty_collection_returns_nothing() {
        assert!(sort_date_oldest_first(Vec::new()).is_empty());
    }

    #[test]
    fn date_oldest_first_orders_chronologically() {
        let posts = vec![
            post(1, "User1", "2020-01-01"),
            post(2, "User2", "2019-12-01"),
            post(3, "User3", "2021-03-15"),
        ];

        let sorted = sort_date_oldest_first(posts);

        assert_eq!(dates(&sorted), vec!["2019-12-01", "2020-01-01", "2021-03-15"]);
    }

    #[test]
    fn date_newest_first_is_exact_reverse_of_oldest_first() {
        let posts = vec![
            post(1, "User1", "2020-01-01"),
            post(2, "User2", "2019-12-01"),
            post(3, "User3", "2021-03-15"),
        ];

        let oldest = sort_date_oldest_first(posts.clone());
        let mut newest = sort_date_newest_first(posts);

        assert_eq!(dates(&newest), vec!["2021-03-15", "2020-01-01", "2019-12-01"]);
        newest.reverse();
        assert_eq!(oldest, newest);
    }

    #[test]
    fn date_sort_retains_posts_with_unparsable_dates() {
        let posts = vec![
            post(1, "User1", "2020-01-01"),
            post(2, "User2", "never"),
            post(3, "User3", "2019-12-01"),
        ];

        let sorted = sort_date_oldest_first(posts);

        // The broken post stays in the output; only its position is
        // unspecified.
        assert_eq!(sorted.len(), 3);
        assert!(sorted.iter().any(|p| p.id == 2));

        let parsable: Vec<&str> = sorted
            .iter()
            .filter(|p| p.date.day().is_some())
            .map(|p| p.date.as_str())
            .collect();
        assert_eq!(parsable, vec!["2019-12-01", "2020-01-01"]);
    }

    struct InMemoryPosts(Vec<UserPost>);

    #[async_trait]
    impl PostsSource for InMemoryPosts {
        async fn get_posts(&self) -> Result<Vec<UserPost>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn service_sorts_a_snapshot_from_its_source() {
        let posts = vec![
            post(1, "John", "2020-01-01"),
            post(2, "Alice", "2019-12-01"),
            post(3, "Bob", "2021-03-15"),
        ];
        let service = PostSorterService::new(Arc::new(InMemoryPosts(posts)));

        let sorted = service.sort_author_asc().await.unwrap();
        assert_eq!(authors(&sorted), vec!["Alice", "Bob", "John"]);

        let sorted = service.sort_date_newest_first().await.unwrap();
        assert_eq!(dates(&sorted), vec!["2021-03-15", "2020-01-01", "2019-12-01"]);
    }

    #[tokio::test]
    async fn service_with_empty_source_returns_nothing() {
        let service = PostSorterService::new(Arc::new(InMemoryPosts(Vec::new())));

        assert!(service.sort_author_desc().await.unwrap().is_empty());
        assert!(service.sort_date_oldest_first().await.unwrap().is_empty());
    }
}

use std::sync::Arc;

use tracing::warn;

use crate::{
    models::posts::{PostDate, UserPost},
    repositories::posts_repo::PostsSource,
    Result,
};

#[derive(Clone)]
pub struct PostFilterService {
    posts: Arc<dyn PostsSource>,
}

impl PostFilterService {
    pub fn new(posts: Arc<dyn PostsSource>) -> Self {
        Self { posts }
    }

    pub async fn filter_by_keyword(&self, keyword: &str) -> Result<Vec<UserPost>> {
        let posts = self.posts.get_posts().await?;

        Ok(filter_by_keyword(posts, keyword))
    }

    pub async fn filter_by_date_range(
        &self,
        from_date: &str,
        to_date: &str,
    ) -> Result<Vec<UserPost>> {
        let posts = self.posts.get_posts().await?;

        Ok(filter_by_date_range(posts, from_date, to_date))
    }
}

/// Keeps the posts whose author or content contains `keyword` as a
/// case-insensitive substring, in their original order. An empty keyword
/// matches every post.
pub fn filter_by_keyword(posts: Vec<UserPost>, keyword: &str) -> Vec<UserPost> {
    let keyword = keyword.to_lowercase();

    posts
        .into_iter()
        .filter(|post| {
            post.author.to_lowercase().contains(&keyword)
                || post.content.to_lowercase().contains(&keyword)
        })
        .collect()
}

/// Keeps the posts dated inside `[from_date, to_date]` (both bounds
/// inclusive, compared as calendar dates), in their original order.
///
/// If either bound is not a valid `YYYY-MM-DD` date the whole result is
/// empty. A post whose own date did not parse is dropped without aborting
/// the rest of the scan.
pub fn filter_by_date_range(posts: Vec<UserPost>, from_date: &str, to_date: &str) -> Vec<UserPost> {
    let (from, to) = match (PostDate::parse_day(from_date), PostDate::parse_day(to_date)) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            warn!(from_date, to_date, "Unparsable date bound, returning no posts");
            return Vec::new();
        }
    };

    posts
        .into_iter()
        .filter(|post| match post.date.day() {
            Some(day) => from <= day && day <= to,
            None => false,
        })
        .collect()
}

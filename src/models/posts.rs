use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of a post, carried in its `YYYY-MM-DD` wire form.
///
/// The raw text is parsed exactly once, when the value enters the model
/// (row decode or JSON decode). Text that is not a valid `YYYY-MM-DD` date
/// keeps its verbatim form but has no calendar value; each filter/sort
/// operation states what it does with such posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PostDate {
    raw: String,
    day: Option<NaiveDate>,
}

impl PostDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self::from(raw.into())
    }

    /// Parses a standalone `YYYY-MM-DD` string, e.g. a filter bound.
    pub fn parse_day(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date, `None` when the raw text did not parse.
    pub fn day(&self) -> Option<NaiveDate> {
        self.day
    }
}

impl From<String> for PostDate {
    fn from(raw: String) -> Self {
        let day = Self::parse_day(&raw);
        Self { raw, day }
    }
}

impl From<PostDate> for String {
    fn from(date: PostDate) -> Self {
        date.raw
    }
}

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone, PartialEq)]
pub struct UserPost {
    pub id: i32,
    pub author: String,
    pub content: String,
    #[sqlx(try_from = "String")]
    pub date: PostDate,
    pub likes: i32,
    pub colour: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostDto {
    #[validate(length(min = 1, message = "Author is required."))]
    pub author: String,
    #[validate(length(min = 1, message = "Content is required."))]
    pub content: String,
    pub date: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "Likes must not be negative."))]
    pub likes: i32,
    pub colour: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostDto {
    pub author: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub likes: Option<i32>,
    pub colour: Option<String>,
}
